//! Proposal service
//!
//! Manages member proposals and their up/down votes. Vote counters are
//! cached on the proposal and maintained through the vote repository's
//! transactional operations; score and remaining days are derived on read.

use alumnet_core::entities::{Proposal, ProposalStatus, Vote, VoteKind};
use alumnet_core::error::DomainError;
use alumnet_core::tally::{plan_apply, TallyPlan};
use alumnet_core::value_objects::Id;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::requests::{CreateProposalRequest, UpdateProposalRequest};
use crate::dto::responses::{ProposalResponse, VoteResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default page size for proposal listings
const DEFAULT_PAGE_SIZE: i64 = 20;

/// Proposal service
pub struct ProposalService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProposalService<'a> {
    /// Create a new ProposalService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Open a new proposal for voting
    #[instrument(skip(self, request))]
    pub async fn create_proposal(
        &self,
        author_id: Id,
        request: CreateProposalRequest,
    ) -> ServiceResult<ProposalResponse> {
        request.validate()?;

        if self
            .ctx
            .profile_repo()
            .find_by_id(author_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("Profile", author_id.to_string()));
        }

        let proposal = Proposal::new(
            self.ctx.generate_id(),
            author_id,
            request.title,
            request.description,
            request.deadline,
        );

        self.ctx.proposal_repo().create(&proposal).await?;

        info!(proposal_id = %proposal.id, deadline = %proposal.deadline, "Proposal created");

        Ok(ProposalResponse::from(&proposal))
    }

    /// Fetch a single proposal
    #[instrument(skip(self))]
    pub async fn get_proposal(&self, id: Id) -> ServiceResult<ProposalResponse> {
        let proposal = self
            .ctx
            .proposal_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Proposal", id.to_string()))?;

        Ok(ProposalResponse::from(&proposal))
    }

    /// List proposals, newest first
    #[instrument(skip(self))]
    pub async fn list_proposals(&self, limit: Option<i64>) -> ServiceResult<Vec<ProposalResponse>> {
        let proposals = self
            .ctx
            .proposal_repo()
            .list(limit.unwrap_or(DEFAULT_PAGE_SIZE))
            .await?;
        Ok(proposals.iter().map(ProposalResponse::from).collect())
    }

    /// Update a proposal's content or status.
    ///
    /// Statuses carry no transition rules; any status may be set at any time.
    #[instrument(skip(self, request))]
    pub async fn update_proposal(
        &self,
        id: Id,
        request: UpdateProposalRequest,
    ) -> ServiceResult<ProposalResponse> {
        request.validate()?;

        let mut proposal = self
            .ctx
            .proposal_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Proposal", id.to_string()))?;

        if let Some(title) = request.title {
            proposal.title = title;
        }
        if let Some(description) = request.description {
            proposal.description = description;
        }
        if let Some(status_str) = request.status {
            let status = ProposalStatus::parse(&status_str)
                .ok_or_else(|| ServiceError::validation("Unknown proposal status"))?;
            proposal.set_status(status);
        } else {
            proposal.touch();
        }

        self.ctx.proposal_repo().update(&proposal).await?;

        Ok(ProposalResponse::from(&proposal))
    }

    /// Delete a proposal; votes cascade in storage
    #[instrument(skip(self))]
    pub async fn delete_proposal(&self, id: Id) -> ServiceResult<()> {
        self.ctx.proposal_repo().delete(id).await?;
        info!(proposal_id = %id, "Proposal deleted");
        Ok(())
    }

    /// Cast or change the voter's vote.
    ///
    /// Re-casting the same kind is a no-op; the other kind replaces the
    /// existing vote and moves one count across the counters. Voting on an
    /// expired proposal is rejected.
    #[instrument(skip(self))]
    pub async fn cast_vote(
        &self,
        proposal_id: Id,
        user_id: Id,
        kind: VoteKind,
    ) -> ServiceResult<()> {
        let proposal = self
            .ctx
            .proposal_repo()
            .find_by_id(proposal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Proposal", proposal_id.to_string()))?;

        if proposal.is_expired() {
            return Err(ServiceError::validation("Voting deadline has passed"));
        }

        if self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("Profile", user_id.to_string()));
        }

        let repo = self.ctx.vote_repo();
        let existing = repo.find(proposal_id, user_id).await?.map(|v| v.kind);

        match plan_apply(existing, kind) {
            TallyPlan::Unchanged => Ok(()),
            TallyPlan::Switch { from, to } => {
                repo.switch(proposal_id, user_id, from, to).await?;
                info!(%proposal_id, %user_id, from = from.as_str(), to = to.as_str(), "Vote switched");
                Ok(())
            }
            TallyPlan::Insert(kind) => {
                let vote = Vote::new(proposal_id, user_id, kind);
                match repo.insert(&vote).await {
                    Ok(()) => {
                        info!(%proposal_id, %user_id, kind = kind.as_str(), "Vote cast");
                        Ok(())
                    }
                    Err(DomainError::VoteAlreadyExists) => {
                        // Lost a first-insert race; resolve against the
                        // winner's row
                        warn!(%proposal_id, %user_id, "Vote insert raced, retrying as replace");
                        let current = repo.find(proposal_id, user_id).await?.map(|v| v.kind);
                        match plan_apply(current, kind) {
                            TallyPlan::Switch { from, to } => {
                                repo.switch(proposal_id, user_id, from, to).await?;
                                Ok(())
                            }
                            _ => Ok(()),
                        }
                    }
                    Err(e) => Err(e.into()),
                }
            }
        }
    }

    /// Withdraw the voter's vote. Returns false when there was nothing to
    /// withdraw.
    #[instrument(skip(self))]
    pub async fn retract_vote(&self, proposal_id: Id, user_id: Id) -> ServiceResult<bool> {
        let repo = self.ctx.vote_repo();
        let Some(existing) = repo.find(proposal_id, user_id).await? else {
            return Ok(false);
        };

        let removed = repo.remove(proposal_id, user_id, existing.kind).await?;
        if removed {
            info!(%proposal_id, %user_id, "Vote retracted");
        }
        Ok(removed)
    }

    /// List all votes on a proposal
    #[instrument(skip(self))]
    pub async fn list_votes(&self, proposal_id: Id) -> ServiceResult<Vec<VoteResponse>> {
        let votes = self.ctx.vote_repo().find_by_proposal(proposal_id).await?;
        Ok(votes.iter().map(VoteResponse::from).collect())
    }
}
