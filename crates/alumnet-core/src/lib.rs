//! # alumnet-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! tally helper that keeps denormalized counters consistent with their child
//! record sets. This crate has zero dependencies on infrastructure (database,
//! web framework, etc.).

pub mod entities;
pub mod error;
pub mod tally;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    generate_invitation_code, AuthorSnapshot, Comment, Invitation, Post, Profile, Proposal,
    ProposalStatus, Reaction, ReactionKind, Report, ReportAttachment, ReportDetail,
    ReportDetailStatus, ReportStage, ReportStageStatus, ReportStatus, ReportType,
    ReportTypeStatus, Vote, VoteKind, WorkExperience,
};
pub use error::DomainError;
pub use tally::{clamped_dec, clamped_sub, plan_apply, TallyPlan};
pub use traits::{
    CommentRepository, InvitationRepository, PostQuery, PostRepository, ProfileRepository,
    ProposalRepository, ReactionRepository, RepoResult, ReportAttachmentRepository,
    ReportDetailRepository, ReportRepository, ReportStageRepository, ReportTypeRepository,
    VoteRepository,
};
pub use value_objects::{Id, IdParseError};
