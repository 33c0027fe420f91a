use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::AccountId;
use crate::age::RelativeAge;

/// Unique identifier for a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable published post.
///
/// The author is optional: a post without one is anonymous and renders
/// without attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    author: Option<AccountId>,
    content: String,
    created_at: DateTime<Utc>,
}

impl Post {
    /// Create a post timestamped now.
    pub fn new(author: Option<AccountId>, content: impl Into<String>) -> Self {
        Self::with_timestamp(author, content, Utc::now())
    }

    /// Create a post with an explicit creation time.
    pub fn with_timestamp(
        author: Option<AccountId>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: PostId::new(),
            author,
            content: content.into(),
            created_at,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn author(&self) -> Option<AccountId> {
        self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Time since this post was created, as of now.
    pub fn relative_age(&self) -> RelativeAge {
        self.relative_age_at(Utc::now())
    }

    pub fn relative_age_at(&self, now: DateTime<Utc>) -> RelativeAge {
        RelativeAge::between(self.created_at, now)
    }
}
