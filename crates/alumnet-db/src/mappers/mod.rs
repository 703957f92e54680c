//! Entity to model mappers
//!
//! This module provides conversions between domain entities (alumnet-core)
//! and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod comment;
mod invitation;
mod post;
mod profile;
mod proposal;
mod reaction;
mod report;

pub use comment::CommentInsert;
pub use invitation::InvitationInsert;
pub use post::PostInsert;
pub use profile::{ProfileInsert, WorkExperienceInsert};
pub use proposal::{ProposalInsert, VoteInsert};
pub use reaction::ReactionInsert;
pub use report::{
    ReportAttachmentInsert, ReportDetailInsert, ReportInsert, ReportStageInsert, ReportTypeInsert,
};
