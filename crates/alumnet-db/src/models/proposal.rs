//! Proposal and vote database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for proposals table
#[derive(Debug, Clone, FromRow)]
pub struct ProposalModel {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: String,
    pub status: String,
    pub deadline: NaiveDate,
    pub upvote_count: i32,
    pub downvote_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for proposal_votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub proposal_id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}
