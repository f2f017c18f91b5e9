// src/domain/content/publish.rs
use chrono::{DateTime, Utc};

/// Publish flag plus derived timestamp, computed whenever an incoming
/// payload carries an explicit `published` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishTransition {
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

impl PublishTransition {
    /// State for a freshly created record.
    pub fn on_create(published: bool, now: DateTime<Utc>) -> Self {
        Self {
            published,
            published_at: published.then_some(now),
        }
    }

    /// State after an update that explicitly sets `published`.
    ///
    /// The timestamp is set the first time the flag turns true, kept while
    /// it stays true, and cleared when the flag turns false.
    pub fn evaluate(
        current_published_at: Option<DateTime<Utc>>,
        published: bool,
        now: DateTime<Utc>,
    ) -> Self {
        if published {
            Self {
                published: true,
                published_at: current_published_at.or(Some(now)),
            }
        } else {
            Self {
                published: false,
                published_at: None,
            }
        }
    }
}
