//! # alumnet-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services orchestrate the repository traits from `alumnet-core`: they
//! validate input, capture author snapshots, and plan counter adjustments
//! with the `tally` module; the repositories apply those adjustments
//! transactionally.

pub mod dto;
pub mod services;

pub use services::{
    CommentService, InvitationService, PostService, ProfileService, ProposalService,
    ReactionService, ReactionTarget, ReportService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
