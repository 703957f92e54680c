//! Test fixtures and data generators
//!
//! Provides reusable test data for service-level tests.

use std::sync::atomic::{AtomicU64, Ordering};

use alumnet_service::dto::requests::{
    CreateCommentRequest, CreateInvitationRequest, CreatePostRequest, CreateProfileRequest,
    CreateProposalRequest,
};
use chrono::{Duration, NaiveDate, Utc};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A profile request with unique username and email
pub fn profile_request() -> CreateProfileRequest {
    let suffix = unique_suffix();
    CreateProfileRequest {
        username: format!("member{suffix}"),
        email: format!("member{suffix}@example.com"),
        phone: None,
        full_name: format!("Member {suffix}"),
        department: Some("Computer Science".to_string()),
        graduation_year: Some(2015),
    }
}

/// A plain post request
pub fn post_request() -> CreatePostRequest {
    let suffix = unique_suffix();
    CreatePostRequest {
        title: format!("Reunion announcement {suffix}"),
        content: "The annual reunion is on. Details inside.".to_string(),
    }
}

/// A top-level comment request
pub fn comment_request() -> CreateCommentRequest {
    CreateCommentRequest {
        content: "Count me in.".to_string(),
        parent_id: None,
    }
}

/// A reply to the given comment
pub fn reply_request(parent_id: &str) -> CreateCommentRequest {
    CreateCommentRequest {
        content: "Same here.".to_string(),
        parent_id: Some(parent_id.to_string()),
    }
}

/// A proposal with a deadline some days out (may be negative for an already
/// expired proposal)
pub fn proposal_request(deadline_in_days: i64) -> CreateProposalRequest {
    let suffix = unique_suffix();
    CreateProposalRequest {
        title: format!("Proposal {suffix}"),
        description: "Fund the mentorship program.".to_string(),
        deadline: deadline(deadline_in_days),
    }
}

/// Today's date shifted by `days`
pub fn deadline(days: i64) -> NaiveDate {
    (Utc::now() + Duration::days(days)).date_naive()
}

/// An invitation request for a couple of recipients
pub fn invitation_request() -> CreateInvitationRequest {
    let suffix = unique_suffix();
    CreateInvitationRequest {
        recipients: vec![
            format!("invitee{suffix}a@example.com"),
            format!("invitee{suffix}b@example.com"),
        ],
        message: Some("Join us!".to_string()),
        expires_in_days: None,
        max_uses: None,
    }
}
