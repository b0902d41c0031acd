use crate::deck::SwipeDirection;
use crate::ui::deck::intent::DeckIntent;
use crate::ui::deck::state::DeckState;
use crate::ui::mvi::Reducer;

pub struct DeckReducer;

impl Reducer for DeckReducer {
    type State = DeckState;
    type Intent = DeckIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DeckIntent::BeginLoad => DeckState::Loading,
            DeckIntent::Loaded { profiles } => DeckState::Ready {
                profiles,
                cursor: 0,
                accepted: 0,
                rejected: 0,
            },
            DeckIntent::Resolve { direction } => match state {
                DeckState::Ready {
                    profiles,
                    cursor,
                    accepted,
                    rejected,
                } if cursor < profiles.len() => {
                    let (accepted, rejected) = match direction {
                        SwipeDirection::Accept => (accepted + 1, rejected),
                        SwipeDirection::Reject => (accepted, rejected + 1),
                    };
                    DeckState::Ready {
                        profiles,
                        cursor: cursor + 1,
                        accepted,
                        rejected,
                    }
                }
                // Nothing to resolve while loading or exhausted
                other => other,
            },
        }
    }
}
