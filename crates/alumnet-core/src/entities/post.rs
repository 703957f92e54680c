//! Post entity - a news article published by a member
//!
//! Carries cached reaction and comment counters that track the live child
//! records; see the `tally` module for the maintenance contract.

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// News post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Id,
    pub author_id: Id,
    pub title: String,
    pub content: String,
    pub like_count: i32,
    pub dislike_count: i32,
    pub comment_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post; all counters start at zero
    pub fn new(id: Id, author_id: Id, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            title,
            content,
            like_count: 0,
            dislike_count: 0,
            comment_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Edit title and body
    pub fn edit(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.touch();
    }

    /// Check if the post has been edited since creation
    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_at > self.created_at
    }

    /// Get a truncated preview of the content (for listings)
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.content[..end]
        }
    }
}
