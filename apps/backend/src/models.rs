//! Domain records served by the Marquee backend.

use serde::{Deserialize, Serialize};

/// A movie record.
///
/// Ids are positive and immutable once assigned; assignment is owned by
/// whatever sits behind the [`MovieLookup`](crate::services::MovieLookup)
/// trait, not by this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub description: String,
}

impl Movie {
    pub fn new(id: i64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }
}
