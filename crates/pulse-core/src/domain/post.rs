use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Upper bound on post and comment text, in characters.
pub const MAX_TEXT_LEN: usize = 5000;

/// A single like on a post. At most one entry per user may exist in a
/// post's `likes` sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user: Uuid,
}

/// A comment embedded in a post. Comment ids are assigned at append time
/// and stay stable: removing one comment never renumbers the others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment with a fresh id and the current timestamp.
    pub fn new(user: Uuid, name: String, avatar: String, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            text,
            name,
            avatar,
            date: Utc::now(),
        }
    }
}

/// Post entity - a user-authored item with ordered like and comment
/// sub-collections, both newest first.
///
/// `user` identifies the owner and is set exactly once, from the
/// authenticated caller. `name` and `avatar` are display fields
/// denormalized from the author at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
}

impl Post {
    /// Create a new post with empty engagement collections.
    pub fn new(user: Uuid, name: String, avatar: String, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            text,
            name,
            avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }

    /// Whether `user` already appears in this post's likes.
    pub fn liked_by(&self, user: Uuid) -> bool {
        self.likes.iter().any(|like| like.user == user)
    }
}

/// Validate author-supplied text for posts and comments.
///
/// No trimming or sanitization happens here; the bound applies to the
/// text exactly as submitted.
pub fn validate_text(text: &str) -> Result<(), DomainError> {
    if text.is_empty() {
        return Err(DomainError::Validation("Text field is required".into()));
    }
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(DomainError::Validation(format!(
            "Text must be at most {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}
