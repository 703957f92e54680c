//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Reaction and vote repositories own both the child-row write and the
//! parent-counter adjustment so the two land in the same storage transaction;
//! counter decrements are clamped at a floor of zero (see the `tally` module).

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    Comment, Invitation, Post, Profile, Proposal, Reaction, ReactionKind, Report,
    ReportAttachment, ReportDetail, ReportStage, ReportType, Vote, VoteKind, WorkExperience,
};
use crate::error::DomainError;
use crate::value_objects::Id;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Profile>>;

    /// Find profile by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Profile>>;

    /// Find profile by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Profile>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new profile
    async fn create(&self, profile: &Profile) -> RepoResult<()>;

    /// Update an existing profile
    async fn update(&self, profile: &Profile) -> RepoResult<()>;

    /// Delete a profile
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Work history for a profile, in storage order
    async fn find_experiences(&self, profile_id: Id) -> RepoResult<Vec<WorkExperience>>;

    /// Add a work-history entry
    async fn add_experience(&self, experience: &WorkExperience) -> RepoResult<()>;

    /// Remove a work-history entry
    async fn remove_experience(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

/// Pagination options for post listings (created_at cursor)
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub before: Option<DateTime<Utc>>,
    pub limit: i64,
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Post>>;

    /// List posts, newest first, with pagination
    async fn list(&self, query: PostQuery) -> RepoResult<Vec<Post>>;

    /// List posts by author, newest first
    async fn find_by_author(&self, author_id: Id, limit: i64) -> RepoResult<Vec<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update post content
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post; owned comments and reactions cascade
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Comment>>;

    /// Top-level comments for a post, oldest first
    async fn find_by_post(&self, post_id: Id) -> RepoResult<Vec<Comment>>;

    /// Replies to a comment, oldest first (parent-id indexed lookup)
    async fn find_replies(&self, parent_id: Id) -> RepoResult<Vec<Comment>>;

    /// Create a comment; increments `post.comment_count` (and the parent
    /// comment's `reply_count` for replies) in the same transaction
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Update comment content; the author snapshot is never rewritten
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment and its replies; decrements the affected counters by
    /// the number of rows removed, clamped at zero. Returns rows removed.
    async fn delete(&self, id: Id) -> RepoResult<u64>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

/// Reactions on a single parent kind (one implementation per reaction table:
/// post reactions and comment reactions)
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the actor's reaction on a parent
    async fn find(&self, parent_id: Id, user_id: Id) -> RepoResult<Option<Reaction>>;

    /// All reactions on a parent
    async fn find_by_parent(&self, parent_id: Id) -> RepoResult<Vec<Reaction>>;

    /// Insert a reaction and increment the kind's counter on the parent, in
    /// one transaction. A (parent, user) unique violation surfaces as
    /// `DomainError::ReactionAlreadyExists`.
    async fn insert(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Rewrite the actor's reaction kind and move one count from `from` to
    /// `to` on the parent, in one transaction
    async fn switch(&self, parent_id: Id, user_id: Id, from: ReactionKind, to: ReactionKind)
        -> RepoResult<()>;

    /// Delete the actor's reaction and decrement the kind's counter (clamped
    /// at zero). Returns false when no reaction existed.
    async fn remove(&self, parent_id: Id, user_id: Id, kind: ReactionKind) -> RepoResult<bool>;

    /// Delete all reactions on a parent and zero its reaction counters.
    /// Returns rows removed.
    async fn remove_all(&self, parent_id: Id) -> RepoResult<u64>;

    /// Count live reactions grouped by kind (source of truth, for callers
    /// that want to cross-check the cached counters)
    async fn count_by_kind(&self, parent_id: Id) -> RepoResult<Vec<(ReactionKind, i64)>>;
}

// ============================================================================
// Proposal Repository
// ============================================================================

#[async_trait]
pub trait ProposalRepository: Send + Sync {
    /// Find proposal by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Proposal>>;

    /// List proposals, newest first
    async fn list(&self, limit: i64) -> RepoResult<Vec<Proposal>>;

    /// Create a new proposal
    async fn create(&self, proposal: &Proposal) -> RepoResult<()>;

    /// Update a proposal (content, status)
    async fn update(&self, proposal: &Proposal) -> RepoResult<()>;

    /// Delete a proposal; owned votes cascade
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find the voter's vote on a proposal
    async fn find(&self, proposal_id: Id, user_id: Id) -> RepoResult<Option<Vote>>;

    /// All votes on a proposal
    async fn find_by_proposal(&self, proposal_id: Id) -> RepoResult<Vec<Vote>>;

    /// Insert a vote and increment the kind's counter on the proposal, in
    /// one transaction. A (proposal, user) unique violation surfaces as
    /// `DomainError::VoteAlreadyExists`.
    async fn insert(&self, vote: &Vote) -> RepoResult<()>;

    /// Rewrite the voter's vote kind and move one count from `from` to `to`
    /// on the proposal, in one transaction
    async fn switch(&self, proposal_id: Id, user_id: Id, from: VoteKind, to: VoteKind)
        -> RepoResult<()>;

    /// Delete the voter's vote and decrement the kind's counter (clamped at
    /// zero). Returns false when no vote existed.
    async fn remove(&self, proposal_id: Id, user_id: Id, kind: VoteKind) -> RepoResult<bool>;

    /// Count live votes grouped by kind
    async fn count_by_kind(&self, proposal_id: Id) -> RepoResult<Vec<(VoteKind, i64)>>;
}

// ============================================================================
// Report Hierarchy Repositories
// ============================================================================

#[async_trait]
pub trait ReportTypeRepository: Send + Sync {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ReportType>>;

    async fn list(&self) -> RepoResult<Vec<ReportType>>;

    async fn create(&self, report_type: &ReportType) -> RepoResult<()>;

    async fn update(&self, report_type: &ReportType) -> RepoResult<()>;

    /// Delete a report type; stages, reports, details and attachments cascade
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

#[async_trait]
pub trait ReportStageRepository: Send + Sync {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ReportStage>>;

    /// Stages of a type, ordered by `stage_order`
    async fn find_by_type(&self, report_type_id: Id) -> RepoResult<Vec<ReportStage>>;

    async fn create(&self, stage: &ReportStage) -> RepoResult<()>;

    async fn update(&self, stage: &ReportStage) -> RepoResult<()>;

    async fn delete(&self, id: Id) -> RepoResult<()>;
}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Report>>;

    async fn find_by_type(&self, report_type_id: Id) -> RepoResult<Vec<Report>>;

    async fn find_by_reporter(&self, reporter_id: Id) -> RepoResult<Vec<Report>>;

    async fn create(&self, report: &Report) -> RepoResult<()>;

    async fn update(&self, report: &Report) -> RepoResult<()>;

    /// Delete a report; details and attachments cascade
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

#[async_trait]
pub trait ReportDetailRepository: Send + Sync {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ReportDetail>>;

    async fn find_by_report(&self, report_id: Id) -> RepoResult<Vec<ReportDetail>>;

    async fn find_by_stage(&self, stage_id: Id) -> RepoResult<Vec<ReportDetail>>;

    async fn create(&self, detail: &ReportDetail) -> RepoResult<()>;

    async fn update(&self, detail: &ReportDetail) -> RepoResult<()>;

    /// Delete a detail; attachments cascade
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

#[async_trait]
pub trait ReportAttachmentRepository: Send + Sync {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ReportAttachment>>;

    async fn find_by_detail(&self, detail_id: Id) -> RepoResult<Vec<ReportAttachment>>;

    async fn create(&self, attachment: &ReportAttachment) -> RepoResult<()>;

    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Invitation Repository
// ============================================================================

#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Find invitation by code
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Invitation>>;

    /// Invitations created by a member
    async fn find_by_inviter(&self, inviter_id: Id) -> RepoResult<Vec<Invitation>>;

    /// Create a new invitation; a duplicate code surfaces as
    /// `DomainError::InvitationCodeExists`
    async fn create(&self, invitation: &Invitation) -> RepoResult<()>;

    /// Increment the redemption count
    async fn increment_uses(&self, code: &str) -> RepoResult<()>;

    /// Delete an invitation
    async fn delete(&self, code: &str) -> RepoResult<()>;

    /// Delete all expired invitations; returns rows removed
    async fn delete_expired(&self) -> RepoResult<u64>;
}
