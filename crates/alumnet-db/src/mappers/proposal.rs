//! Proposal and Vote entity <-> model mapper

use alumnet_core::entities::{Proposal, ProposalStatus, Vote, VoteKind};
use alumnet_core::value_objects::Id;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{ProposalModel, VoteModel};

/// Convert ProposalModel to Proposal entity
impl From<ProposalModel> for Proposal {
    fn from(model: ProposalModel) -> Self {
        Proposal {
            id: Id::from_uuid(model.id),
            author_id: Id::from_uuid(model.author_id),
            title: model.title,
            description: model.description,
            status: ProposalStatus::parse(&model.status).unwrap_or(ProposalStatus::Active),
            deadline: model.deadline,
            upvote_count: model.upvote_count,
            downvote_count: model.downvote_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert VoteModel to Vote entity
impl From<VoteModel> for Vote {
    fn from(model: VoteModel) -> Self {
        Vote {
            proposal_id: Id::from_uuid(model.proposal_id),
            user_id: Id::from_uuid(model.user_id),
            kind: VoteKind::parse(&model.kind).unwrap_or(VoteKind::Up),
            created_at: model.created_at,
        }
    }
}

/// Convert Proposal entity reference to values for database insertion
pub struct ProposalInsert<'a> {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub status: &'static str,
    pub deadline: NaiveDate,
}

impl<'a> ProposalInsert<'a> {
    pub fn new(proposal: &'a Proposal) -> Self {
        Self {
            id: proposal.id.into_uuid(),
            author_id: proposal.author_id.into_uuid(),
            title: &proposal.title,
            description: &proposal.description,
            status: proposal.status.as_str(),
            deadline: proposal.deadline,
        }
    }
}

/// Convert Vote entity reference to values for database insertion
pub struct VoteInsert {
    pub proposal_id: Uuid,
    pub user_id: Uuid,
    pub kind: &'static str,
}

impl VoteInsert {
    pub fn new(vote: &Vote) -> Self {
        Self {
            proposal_id: vote.proposal_id.into_uuid(),
            user_id: vote.user_id.into_uuid(),
            kind: vote.kind.as_str(),
        }
    }
}
