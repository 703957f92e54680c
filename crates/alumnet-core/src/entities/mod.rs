//! Domain entities - core business objects

mod comment;
mod invitation;
mod post;
mod profile;
mod proposal;
mod reaction;
mod report;

pub use comment::{AuthorSnapshot, Comment};
pub use invitation::{generate_invitation_code, Invitation};
pub use post::Post;
pub use profile::{Profile, WorkExperience};
pub use proposal::{Proposal, ProposalStatus, Vote, VoteKind};
pub use reaction::{Reaction, ReactionKind};
pub use report::{
    Report, ReportAttachment, ReportDetail, ReportDetailStatus, ReportStage, ReportStageStatus,
    ReportStatus, ReportType, ReportTypeStatus,
};
