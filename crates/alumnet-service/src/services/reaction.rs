//! Reaction service
//!
//! Applies like/dislike reactions to posts and comments. The service plans
//! the counter adjustment from the actor's existing reaction (insert, switch,
//! or no-op) and the repository applies the child-row write and the cached
//! counter delta in one transaction.

use alumnet_core::entities::{Reaction, ReactionKind};
use alumnet_core::error::DomainError;
use alumnet_core::tally::{plan_apply, TallyPlan};
use alumnet_core::traits::ReactionRepository;
use alumnet_core::value_objects::Id;
use tracing::{info, instrument, warn};

use crate::dto::ReactionResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Which parent kind a reaction operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionTarget {
    Post,
    Comment,
}

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn repo(&self, target: ReactionTarget) -> &dyn ReactionRepository {
        match target {
            ReactionTarget::Post => self.ctx.post_reaction_repo(),
            ReactionTarget::Comment => self.ctx.comment_reaction_repo(),
        }
    }

    async fn verify_parent(&self, target: ReactionTarget, parent_id: Id) -> ServiceResult<()> {
        let exists = match target {
            ReactionTarget::Post => self.ctx.post_repo().find_by_id(parent_id).await?.is_some(),
            ReactionTarget::Comment => {
                self.ctx.comment_repo().find_by_id(parent_id).await?.is_some()
            }
        };

        if exists {
            Ok(())
        } else {
            let resource = match target {
                ReactionTarget::Post => "Post",
                ReactionTarget::Comment => "Comment",
            };
            Err(ServiceError::not_found(resource, parent_id.to_string()))
        }
    }

    /// Apply the actor's reaction to a parent.
    ///
    /// Re-applying the same kind is a no-op; applying the other kind replaces
    /// the existing reaction and moves one count across the counters. A
    /// concurrent first-insert race is retried as a replace.
    #[instrument(skip(self))]
    pub async fn apply_reaction(
        &self,
        target: ReactionTarget,
        parent_id: Id,
        user_id: Id,
        kind: ReactionKind,
    ) -> ServiceResult<()> {
        self.verify_parent(target, parent_id).await?;

        let actor = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        let repo = self.repo(target);
        let existing = repo.find(parent_id, user_id).await?.map(|r| r.kind);

        match plan_apply(existing, kind) {
            TallyPlan::Unchanged => Ok(()),
            TallyPlan::Switch { from, to } => {
                repo.switch(parent_id, user_id, from, to).await?;
                info!(%parent_id, %user_id, from = from.as_str(), to = to.as_str(), "Reaction switched");
                Ok(())
            }
            TallyPlan::Insert(kind) => {
                let reaction = Reaction::new(parent_id, user_id, kind, actor.full_name.clone());
                match repo.insert(&reaction).await {
                    Ok(()) => {
                        info!(%parent_id, %user_id, kind = kind.as_str(), "Reaction added");
                        Ok(())
                    }
                    Err(DomainError::ReactionAlreadyExists) => {
                        // Lost a first-insert race; resolve against the
                        // winner's row
                        warn!(%parent_id, %user_id, "Reaction insert raced, retrying as replace");
                        let current = repo.find(parent_id, user_id).await?.map(|r| r.kind);
                        match plan_apply(current, kind) {
                            TallyPlan::Switch { from, to } => {
                                repo.switch(parent_id, user_id, from, to).await?;
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

    /// Remove the actor's reaction from a parent. Returns false when there
    /// was nothing to remove.
    #[instrument(skip(self))]
    pub async fn remove_reaction(
        &self,
        target: ReactionTarget,
        parent_id: Id,
        user_id: Id,
    ) -> ServiceResult<bool> {
        self.verify_parent(target, parent_id).await?;

        let repo = self.repo(target);
        let Some(existing) = repo.find(parent_id, user_id).await? else {
            return Ok(false);
        };

        let removed = repo.remove(parent_id, user_id, existing.kind).await?;
        if removed {
            info!(%parent_id, %user_id, kind = existing.kind.as_str(), "Reaction removed");
        }
        Ok(removed)
    }

    /// List all reactions on a parent
    #[instrument(skip(self))]
    pub async fn list_reactions(
        &self,
        target: ReactionTarget,
        parent_id: Id,
    ) -> ServiceResult<Vec<ReactionResponse>> {
        self.verify_parent(target, parent_id).await?;

        let reactions = self.repo(target).find_by_parent(parent_id).await?;
        Ok(reactions.iter().map(ReactionResponse::from).collect())
    }

    /// Live reaction counts grouped by kind, straight from the child rows
    #[instrument(skip(self))]
    pub async fn live_counts(
        &self,
        target: ReactionTarget,
        parent_id: Id,
    ) -> ServiceResult<Vec<(ReactionKind, i64)>> {
        Ok(self.repo(target).count_by_kind(parent_id).await?)
    }
}
