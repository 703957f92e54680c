//! Repository traits (ports) for the storage layer

mod repositories;

pub use repositories::{
    CommentRepository, InvitationRepository, PostQuery, PostRepository, ProfileRepository,
    ProposalRepository, ReactionRepository, RepoResult, ReportAttachmentRepository,
    ReportDetailRepository, ReportRepository, ReportStageRepository, ReportTypeRepository,
    VoteRepository,
};
