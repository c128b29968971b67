//! The advertisement record and its storage mapping.

use crate::service::PatchAdv;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of `advertisements`. Serialized with `created_at` as Unix epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Advertisement {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    pub author: Option<String>,
}

impl Advertisement {
    /// Overwrite the fields present in `patch`. `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: PatchAdv) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(author) = patch.author {
            self.author = Some(author);
        }
    }
}
