//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod comment;
pub mod context;
pub mod error;
pub mod invitation;
pub mod post;
pub mod profile;
pub mod proposal;
pub mod reaction;
pub mod report;

// Re-export all services for convenience
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use invitation::InvitationService;
pub use post::PostService;
pub use profile::ProfileService;
pub use proposal::ProposalService;
pub use reaction::{ReactionService, ReactionTarget};
pub use report::ReportService;
