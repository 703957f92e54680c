//! Data transfer objects for service inputs and outputs
//!
//! This module provides:
//! - Request DTOs with validation for service inputs
//! - Response DTOs for serializing service outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateCommentRequest, CreateInvitationRequest, CreatePostRequest, CreateProfileRequest,
    CreateProposalRequest, CreateReportDetailRequest, CreateReportRequest,
    CreateReportStageRequest, CreateReportTypeRequest, AddExperienceRequest, UpdateCommentRequest,
    UpdatePostRequest, UpdateProfileRequest, UpdateProposalRequest, UpdateReportRequest,
};

// Re-export commonly used response types
pub use responses::{
    CommentResponse, InvitationResponse, PostResponse, ProfileResponse, ProposalResponse,
    ReactionResponse, ReportAttachmentResponse, ReportDetailResponse, ReportResponse,
    ReportStageResponse, ReportTypeResponse, VoteResponse, WorkExperienceResponse,
};
