//! PostgreSQL repository implementations

pub mod error;

mod comment;
mod invitation;
mod post;
mod profile;
mod proposal;
mod reaction;
mod report;
mod vote;

pub use comment::PgCommentRepository;
pub use invitation::PgInvitationRepository;
pub use post::PgPostRepository;
pub use profile::PgProfileRepository;
pub use proposal::PgProposalRepository;
pub use reaction::PgReactionRepository;
pub use report::{
    PgReportAttachmentRepository, PgReportDetailRepository, PgReportRepository,
    PgReportStageRepository, PgReportTypeRepository,
};
pub use vote::PgVoteRepository;
