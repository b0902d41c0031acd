use crate::deck::StackWindow;
use crate::profile::Profile;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeckState {
    #[default]
    Loading,
    Ready {
        profiles: Vec<Profile>,
        /// Index of the active profile; equals `profiles.len()` once exhausted.
        cursor: usize,
        accepted: u32,
        rejected: u32,
    },
}

impl UiState for DeckState {}

impl DeckState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Ready with nothing left to judge. An empty batch is exhausted at once.
    pub fn is_exhausted(&self) -> bool {
        match self {
            Self::Ready {
                profiles, cursor, ..
            } => *cursor >= profiles.len(),
            Self::Loading => false,
        }
    }

    /// Profiles from the active one onward.
    pub fn upcoming(&self) -> &[Profile] {
        match self {
            Self::Ready {
                profiles, cursor, ..
            } => profiles.get(*cursor..).unwrap_or_default(),
            Self::Loading => &[],
        }
    }

    /// The cards on screen, at most [`crate::deck::VISIBLE_DEPTH`].
    pub fn window(&self) -> StackWindow<'_> {
        StackWindow::new(self.upcoming())
    }

    pub fn current(&self) -> Option<&Profile> {
        self.upcoming().first()
    }

    pub fn remaining(&self) -> usize {
        self.upcoming().len()
    }

    /// `(accepted, rejected)`.
    pub fn tallies(&self) -> (u32, u32) {
        match self {
            Self::Ready {
                accepted, rejected, ..
            } => (*accepted, *rejected),
            Self::Loading => (0, 0),
        }
    }
}
