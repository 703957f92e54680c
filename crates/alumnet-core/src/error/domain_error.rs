//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Id;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Profile not found: {0}")]
    ProfileNotFound(Id),

    #[error("Post not found: {0}")]
    PostNotFound(Id),

    #[error("Comment not found: {0}")]
    CommentNotFound(Id),

    #[error("Proposal not found: {0}")]
    ProposalNotFound(Id),

    #[error("Report type not found: {0}")]
    ReportTypeNotFound(Id),

    #[error("Report stage not found: {0}")]
    ReportStageNotFound(Id),

    #[error("Report not found: {0}")]
    ReportNotFound(Id),

    #[error("Report detail not found: {0}")]
    ReportDetailNotFound(Id),

    #[error("Invitation not found: {0}")]
    InvitationNotFound(String),

    #[error("No reaction from this user")]
    ReactionNotFound,

    #[error("No vote from this user")]
    VoteNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already in use")]
    UsernameAlreadyExists,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Phone number already in use")]
    PhoneAlreadyExists,

    #[error("Reaction already exists")]
    ReactionAlreadyExists,

    #[error("Vote already exists")]
    VoteAlreadyExists,

    #[error("Invitation code already exists")]
    InvitationCodeExists,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Invitation has expired")]
    InvitationExpired,

    #[error("Invitation has reached maximum uses")]
    InvitationExhausted,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for boundary responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ProposalNotFound(_) => "UNKNOWN_PROPOSAL",
            Self::ReportTypeNotFound(_) => "UNKNOWN_REPORT_TYPE",
            Self::ReportStageNotFound(_) => "UNKNOWN_REPORT_STAGE",
            Self::ReportNotFound(_) => "UNKNOWN_REPORT",
            Self::ReportDetailNotFound(_) => "UNKNOWN_REPORT_DETAIL",
            Self::InvitationNotFound(_) => "UNKNOWN_INVITATION",
            Self::ReactionNotFound => "UNKNOWN_REACTION",
            Self::VoteNotFound => "UNKNOWN_VOTE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Conflict
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::PhoneAlreadyExists => "PHONE_ALREADY_EXISTS",
            Self::ReactionAlreadyExists => "REACTION_ALREADY_EXISTS",
            Self::VoteAlreadyExists => "VOTE_ALREADY_EXISTS",
            Self::InvitationCodeExists => "INVITATION_CODE_EXISTS",

            // Business Rules
            Self::InvitationExpired => "INVITATION_EXPIRED",
            Self::InvitationExhausted => "INVITATION_EXHAUSTED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound(_)
                | Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::ProposalNotFound(_)
                | Self::ReportTypeNotFound(_)
                | Self::ReportStageNotFound(_)
                | Self::ReportNotFound(_)
                | Self::ReportDetailNotFound(_)
                | Self::InvitationNotFound(_)
                | Self::ReactionNotFound
                | Self::VoteNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidEmail | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameAlreadyExists
                | Self::EmailAlreadyExists
                | Self::PhoneAlreadyExists
                | Self::ReactionAlreadyExists
                | Self::VoteAlreadyExists
                | Self::InvitationCodeExists
        )
    }
}
