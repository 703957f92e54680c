//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the reaction tables (post_reactions, comment_reactions)
///
/// Both tables share the same shape; `parent_id` references the owning post
/// or comment respectively.
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub parent_id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregated reaction count (from query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionCountModel {
    pub kind: String,
    pub count: i64,
}
