//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod invitation;
mod post;
mod profile;
mod proposal;
mod reaction;
mod report;

pub use comment::CommentModel;
pub use invitation::InvitationModel;
pub use post::PostModel;
pub use profile::{ProfileModel, WorkExperienceModel};
pub use proposal::{ProposalModel, VoteModel};
pub use reaction::{ReactionCountModel, ReactionModel};
pub use report::{
    ReportAttachmentModel, ReportDetailModel, ReportModel, ReportStageModel, ReportTypeModel,
};
