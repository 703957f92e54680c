//! Request DTOs for service operations
//!
//! All request DTOs implement `Deserialize` and, where fields need checking,
//! `Validate` for input validation.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Profile Requests
// ============================================================================

/// Create profile request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: String,

    pub department: Option<String>,

    pub graduation_year: Option<i32>,
}

/// Update profile request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    /// Photo URL or null to remove
    pub photo: Option<String>,

    pub department: Option<String>,

    pub graduation_year: Option<i32>,
}

/// Add work-history entry request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddExperienceRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "Employer must be 1-255 characters"))]
    pub employer: String,

    pub start_date: NaiveDate,

    /// End date; leave empty for an ongoing position
    pub end_date: Option<NaiveDate>,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,
}

/// Update post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,

    /// Parent comment ID when replying (UUID as string)
    pub parent_id: Option<String>,
}

/// Update comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

// ============================================================================
// Proposal Requests
// ============================================================================

/// Create proposal request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProposalRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Description must be 1-10000 characters"))]
    pub description: String,

    /// Voting deadline (inclusive)
    pub deadline: NaiveDate,
}

/// Update proposal request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProposalRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 10000, message = "Description must be 1-10000 characters"))]
    pub description: Option<String>,

    /// New status, e.g. "IN_PROGRESS"
    pub status: Option<String>,
}

// ============================================================================
// Report Requests
// ============================================================================

/// Create report type request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReportTypeRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub description: Option<String>,
}

/// Create report stage request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReportStageRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Display order within the type
    #[serde(default)]
    pub stage_order: i32,
}

/// Create report request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReportRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Free-form reporting period label, e.g. "2026-Q1"
    pub period: Option<String>,
}

/// Update report request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReportRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    pub period: Option<String>,

    /// New status, e.g. "SUBMITTED"
    pub status: Option<String>,
}

/// Create report detail request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReportDetailRequest {
    /// Stage this detail is filed against (UUID as string)
    pub stage_id: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,
}

// ============================================================================
// Invitation Requests
// ============================================================================

/// Create invitation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInvitationRequest {
    /// Recipient email addresses
    #[validate(length(min = 1, message = "At least one recipient is required"))]
    pub recipients: Vec<String>,

    #[validate(length(max = 1000, message = "Message must be at most 1000 characters"))]
    pub message: Option<String>,

    /// Expiration in whole days; omit or 0 for non-expiring
    pub expires_in_days: Option<i64>,

    /// Redemption cap; omit for unlimited
    pub max_uses: Option<i32>,
}
