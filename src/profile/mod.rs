//! Profile records and the HTTP source that produces them.

mod error;
mod source;

pub use error::FetchError;
pub use source::{HttpProfileSource, ProfileSource, HOBBIES};

use uuid::Uuid;

/// A person shown on one card. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Card identity; stable while the profile sits in the queue.
    pub id: Uuid,
    pub name: String,
    pub photo_url: String,
    pub city: String,
    pub hobby: String,
    /// Photo attribution line.
    pub credit: String,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        photo_url: impl Into<String>,
        city: impl Into<String>,
        hobby: impl Into<String>,
        credit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            photo_url: photo_url.into(),
            city: city.into(),
            hobby: hobby.into(),
            credit: credit.into(),
        }
    }
}
