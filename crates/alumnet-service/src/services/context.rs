//! Service context - dependency container for services
//!
//! Holds the repositories behind trait objects so services can run against
//! PostgreSQL in production and in-memory implementations in tests.

use std::sync::Arc;

use alumnet_core::traits::{
    CommentRepository, InvitationRepository, PostRepository, ProfileRepository,
    ProposalRepository, ReactionRepository, ReportAttachmentRepository, ReportDetailRepository,
    ReportRepository, ReportStageRepository, ReportTypeRepository, VoteRepository,
};
use alumnet_core::value_objects::Id;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    profile_repo: Arc<dyn ProfileRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    post_reaction_repo: Arc<dyn ReactionRepository>,
    comment_reaction_repo: Arc<dyn ReactionRepository>,
    proposal_repo: Arc<dyn ProposalRepository>,
    vote_repo: Arc<dyn VoteRepository>,
    report_type_repo: Arc<dyn ReportTypeRepository>,
    report_stage_repo: Arc<dyn ReportStageRepository>,
    report_repo: Arc<dyn ReportRepository>,
    report_detail_repo: Arc<dyn ReportDetailRepository>,
    report_attachment_repo: Arc<dyn ReportAttachmentRepository>,
    invitation_repo: Arc<dyn InvitationRepository>,
}

impl ServiceContext {
    /// Create a builder for assembling the context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the repository over post reactions
    pub fn post_reaction_repo(&self) -> &dyn ReactionRepository {
        self.post_reaction_repo.as_ref()
    }

    /// Get the repository over comment reactions
    pub fn comment_reaction_repo(&self) -> &dyn ReactionRepository {
        self.comment_reaction_repo.as_ref()
    }

    /// Get the proposal repository
    pub fn proposal_repo(&self) -> &dyn ProposalRepository {
        self.proposal_repo.as_ref()
    }

    /// Get the vote repository
    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    /// Get the report type repository
    pub fn report_type_repo(&self) -> &dyn ReportTypeRepository {
        self.report_type_repo.as_ref()
    }

    /// Get the report stage repository
    pub fn report_stage_repo(&self) -> &dyn ReportStageRepository {
        self.report_stage_repo.as_ref()
    }

    /// Get the report repository
    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    /// Get the report detail repository
    pub fn report_detail_repo(&self) -> &dyn ReportDetailRepository {
        self.report_detail_repo.as_ref()
    }

    /// Get the report attachment repository
    pub fn report_attachment_repo(&self) -> &dyn ReportAttachmentRepository {
        self.report_attachment_repo.as_ref()
    }

    /// Get the invitation repository
    pub fn invitation_repo(&self) -> &dyn InvitationRepository {
        self.invitation_repo.as_ref()
    }

    /// Generate a fresh entity ID
    pub fn generate_id(&self) -> Id {
        Id::new()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    post_reaction_repo: Option<Arc<dyn ReactionRepository>>,
    comment_reaction_repo: Option<Arc<dyn ReactionRepository>>,
    proposal_repo: Option<Arc<dyn ProposalRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    report_type_repo: Option<Arc<dyn ReportTypeRepository>>,
    report_stage_repo: Option<Arc<dyn ReportStageRepository>>,
    report_repo: Option<Arc<dyn ReportRepository>>,
    report_detail_repo: Option<Arc<dyn ReportDetailRepository>>,
    report_attachment_repo: Option<Arc<dyn ReportAttachmentRepository>>,
    invitation_repo: Option<Arc<dyn InvitationRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn post_reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.post_reaction_repo = Some(repo);
        self
    }

    pub fn comment_reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.comment_reaction_repo = Some(repo);
        self
    }

    pub fn proposal_repo(mut self, repo: Arc<dyn ProposalRepository>) -> Self {
        self.proposal_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn report_type_repo(mut self, repo: Arc<dyn ReportTypeRepository>) -> Self {
        self.report_type_repo = Some(repo);
        self
    }

    pub fn report_stage_repo(mut self, repo: Arc<dyn ReportStageRepository>) -> Self {
        self.report_stage_repo = Some(repo);
        self
    }

    pub fn report_repo(mut self, repo: Arc<dyn ReportRepository>) -> Self {
        self.report_repo = Some(repo);
        self
    }

    pub fn report_detail_repo(mut self, repo: Arc<dyn ReportDetailRepository>) -> Self {
        self.report_detail_repo = Some(repo);
        self
    }

    pub fn report_attachment_repo(mut self, repo: Arc<dyn ReportAttachmentRepository>) -> Self {
        self.report_attachment_repo = Some(repo);
        self
    }

    pub fn invitation_repo(mut self, repo: Arc<dyn InvitationRepository>) -> Self {
        self.invitation_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            profile_repo: self
                .profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            post_repo: self
                .post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            post_reaction_repo: self
                .post_reaction_repo
                .ok_or_else(|| ServiceError::validation("post_reaction_repo is required"))?,
            comment_reaction_repo: self
                .comment_reaction_repo
                .ok_or_else(|| ServiceError::validation("comment_reaction_repo is required"))?,
            proposal_repo: self
                .proposal_repo
                .ok_or_else(|| ServiceError::validation("proposal_repo is required"))?,
            vote_repo: self
                .vote_repo
                .ok_or_else(|| ServiceError::validation("vote_repo is required"))?,
            report_type_repo: self
                .report_type_repo
                .ok_or_else(|| ServiceError::validation("report_type_repo is required"))?,
            report_stage_repo: self
                .report_stage_repo
                .ok_or_else(|| ServiceError::validation("report_stage_repo is required"))?,
            report_repo: self
                .report_repo
                .ok_or_else(|| ServiceError::validation("report_repo is required"))?,
            report_detail_repo: self
                .report_detail_repo
                .ok_or_else(|| ServiceError::validation("report_detail_repo is required"))?,
            report_attachment_repo: self
                .report_attachment_repo
                .ok_or_else(|| ServiceError::validation("report_attachment_repo is required"))?,
            invitation_repo: self
                .invitation_repo
                .ok_or_else(|| ServiceError::validation("invitation_repo is required"))?,
        })
    }
}
