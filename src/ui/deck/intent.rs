use crate::deck::SwipeDirection;
use crate::profile::Profile;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DeckIntent {
    /// A batch fetch started.
    BeginLoad,
    /// A batch arrived, possibly short or empty.
    Loaded { profiles: Vec<Profile> },
    /// The active card was swiped.
    Resolve { direction: SwipeDirection },
}

impl Intent for DeckIntent {}
