//! Comment entity - a comment on a post, optionally replying to another comment
//!
//! Comments form a parent-id indexed tree: a reply stores `parent_id` and
//! children are looked up by query, never held as embedded collections. Each
//! comment carries an immutable author snapshot captured at creation time.

use chrono::{DateTime, Utc};

use crate::entities::Profile;
use crate::value_objects::Id;

/// Point-in-time copy of author display fields, taken from the profile when
/// the comment is created and never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSnapshot {
    pub name: String,
    pub photo: Option<String>,
    pub department: Option<String>,
    pub graduation_year: Option<i32>,
}

impl AuthorSnapshot {
    /// Capture the snapshot from a live profile
    pub fn capture(profile: &Profile) -> Self {
        Self {
            name: profile.full_name.clone(),
            photo: profile.photo.clone(),
            department: profile.department.clone(),
            graduation_year: profile.graduation_year,
        }
    }
}

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Id,
    pub post_id: Id,
    /// Parent comment when this is a reply
    pub parent_id: Option<Id>,
    pub author_id: Id,
    pub author: AuthorSnapshot,
    pub content: String,
    pub like_count: i32,
    pub dislike_count: i32,
    pub reply_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new top-level comment
    pub fn new(id: Id, post_id: Id, author: &Profile, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            post_id,
            parent_id: None,
            author_id: author.id,
            author: AuthorSnapshot::capture(author),
            content,
            like_count: 0,
            dislike_count: 0,
            reply_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a reply to another comment
    pub fn new_reply(id: Id, post_id: Id, parent_id: Id, author: &Profile, content: String) -> Self {
        let mut comment = Self::new(id, post_id, author, content);
        comment.parent_id = Some(parent_id);
        comment
    }

    /// Check if this comment is a reply
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Edit the comment body; the author snapshot stays untouched
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}
