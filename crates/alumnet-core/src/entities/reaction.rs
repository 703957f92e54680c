//! Reaction entity - a like/dislike on a post or comment

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Kind of reaction a member can leave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Dislike => "DISLIKE",
        }
    }

    /// Parse from the storage representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "LIKE" => Some(Self::Like),
            "DISLIKE" => Some(Self::Dislike),
            _ => None,
        }
    }
}

/// Reaction entity
///
/// `parent_id` references either a post or a comment depending on which
/// reaction table the record lives in. `user_name` is a display-name snapshot
/// copied from the profile when the reaction is created and never refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub parent_id: Id,
    pub user_id: Id,
    pub kind: ReactionKind,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction, capturing the actor's display name
    pub fn new(parent_id: Id, user_id: Id, kind: ReactionKind, user_name: String) -> Self {
        Self {
            parent_id,
            user_id,
            kind,
            user_name,
            created_at: Utc::now(),
        }
    }

    /// Check if the reaction is of a specific kind
    #[inline]
    pub fn is_kind(&self, kind: ReactionKind) -> bool {
        self.kind == kind
    }
}
