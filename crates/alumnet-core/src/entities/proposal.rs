//! Proposal entity - a member proposal ("usulan") open for up/down voting
//!
//! Vote counters are cached on the proposal; score and remaining days are
//! derived, never stored. Status values are plain settable - no transition
//! is validated.

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::Id;

/// Proposal lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalStatus {
    Active,
    Expired,
    InProgress,
    Completed,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Expired => "EXPIRED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(Self::Active),
            "EXPIRED" => Some(Self::Expired),
            "IN_PROGRESS" => Some(Self::InProgress),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Proposal entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub id: Id,
    pub author_id: Id,
    pub title: String,
    pub description: String,
    pub status: ProposalStatus,
    pub deadline: NaiveDate,
    pub upvote_count: i32,
    pub downvote_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Proposal {
    /// Create a new active Proposal
    pub fn new(id: Id, author_id: Id, title: String, description: String, deadline: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            title,
            description,
            status: ProposalStatus::Active,
            deadline,
            upvote_count: 0,
            downvote_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Set the status; any value may be set at any time
    pub fn set_status(&mut self, status: ProposalStatus) {
        self.status = status;
        self.touch();
    }

    /// Derived score: upvotes minus downvotes (may be negative)
    #[inline]
    pub fn score(&self) -> i32 {
        self.upvote_count - self.downvote_count
    }

    /// True iff `today` is strictly after the deadline
    pub fn is_expired_at(&self, today: NaiveDate) -> bool {
        today > self.deadline
    }

    /// Whole days until the deadline, floored at zero once expired
    pub fn remaining_days_at(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days().max(0)
    }

    /// `is_expired_at` relative to the current date
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().date_naive())
    }

    /// `remaining_days_at` relative to the current date
    pub fn remaining_days(&self) -> i64 {
        self.remaining_days_at(Utc::now().date_naive())
    }
}

/// Kind of vote a member can cast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteKind {
    Up,
    Down,
}

impl VoteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "UP" => Some(Self::Up),
            "DOWN" => Some(Self::Down),
            _ => None,
        }
    }
}

/// Vote entity - at most one per (proposal, voter)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub proposal_id: Id,
    pub user_id: Id,
    pub kind: VoteKind,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    /// Create a new Vote
    pub fn new(proposal_id: Id, user_id: Id, kind: VoteKind) -> Self {
        Self {
            proposal_id,
            user_id,
            kind,
            created_at: Utc::now(),
        }
    }
}
