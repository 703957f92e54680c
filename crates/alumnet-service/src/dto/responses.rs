//! Response DTOs for service outputs
//!
//! All response DTOs implement `Serialize` for JSON output. Entity IDs are
//! serialized as strings.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Profile Responses
// ============================================================================

/// Profile with derived display fields
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    /// Resolved from work history; absent when the history is empty or
    /// could not be loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_position: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A single work-history entry
#[derive(Debug, Serialize)]
pub struct WorkExperienceResponse {
    pub id: String,
    pub title: String,
    pub employer: String,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub ongoing: bool,
}

// ============================================================================
// Post and Comment Responses
// ============================================================================

/// Post with cached counters
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub content: String,
    pub like_count: i32,
    pub dislike_count: i32,
    pub comment_count: i32,
    pub edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment with its creation-time author snapshot
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub author_id: String,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_graduation_year: Option<i32>,
    pub content: String,
    pub like_count: i32,
    pub dislike_count: i32,
    pub reply_count: i32,
    pub created_at: DateTime<Utc>,
}

/// A single reaction record
#[derive(Debug, Serialize)]
pub struct ReactionResponse {
    pub user_id: String,
    pub user_name: String,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Proposal Responses
// ============================================================================

/// Proposal with cached counters and derived voting fields
#[derive(Debug, Serialize)]
pub struct ProposalResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub deadline: NaiveDate,
    pub upvote_count: i32,
    pub downvote_count: i32,
    /// Upvotes minus downvotes; may be negative
    pub score: i32,
    pub remaining_days: i64,
    pub expired: bool,
    pub created_at: DateTime<Utc>,
}

/// A single vote record
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub user_id: String,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Report Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ReportTypeResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ReportStageResponse {
    pub id: String,
    pub report_type_id: String,
    pub name: String,
    pub stage_order: i32,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub id: String,
    pub report_type_id: String,
    pub reporter_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ReportDetailResponse {
    pub id: String,
    pub report_id: String,
    pub stage_id: String,
    pub content: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ReportAttachmentResponse {
    pub id: String,
    pub detail_id: String,
    pub file_name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

// ============================================================================
// Invitation Responses
// ============================================================================

/// Invitation with derived redemption fields
#[derive(Debug, Serialize)]
pub struct InvitationResponse {
    pub code: String,
    pub inviter_id: String,
    pub recipients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub uses: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_uses: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_expiry: Option<i64>,
    pub created_at: DateTime<Utc>,
}
