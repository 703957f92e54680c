//! Error handling utilities for repositories

use alumnet_core::error::DomainError;
use alumnet_core::value_objects::Id;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "profile not found" error
pub fn profile_not_found(id: Id) -> DomainError {
    DomainError::ProfileNotFound(id)
}

/// Create a "post not found" error
pub fn post_not_found(id: Id) -> DomainError {
    DomainError::PostNotFound(id)
}

/// Create a "comment not found" error
pub fn comment_not_found(id: Id) -> DomainError {
    DomainError::CommentNotFound(id)
}

/// Create a "proposal not found" error
pub fn proposal_not_found(id: Id) -> DomainError {
    DomainError::ProposalNotFound(id)
}

/// Create a "report type not found" error
pub fn report_type_not_found(id: Id) -> DomainError {
    DomainError::ReportTypeNotFound(id)
}

/// Create a "report stage not found" error
pub fn report_stage_not_found(id: Id) -> DomainError {
    DomainError::ReportStageNotFound(id)
}

/// Create a "report not found" error
pub fn report_not_found(id: Id) -> DomainError {
    DomainError::ReportNotFound(id)
}

/// Create a "report detail not found" error
pub fn report_detail_not_found(id: Id) -> DomainError {
    DomainError::ReportDetailNotFound(id)
}

/// Create an "invitation not found" error
pub fn invitation_not_found(code: &str) -> DomainError {
    DomainError::InvitationNotFound(code.to_string())
}
