//! PostgreSQL implementation of VoteRepository
//!
//! Mirrors the reaction repository: the vote-row write and the cached
//! upvote/downvote counter update on the proposal share one transaction,
//! and decrements clamp at zero.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use alumnet_core::entities::{Vote, VoteKind};
use alumnet_core::error::DomainError;
use alumnet_core::traits::{RepoResult, VoteRepository};
use alumnet_core::value_objects::Id;

use crate::mappers::VoteInsert;
use crate::models::{ReactionCountModel, VoteModel};

use super::error::{map_db_error, map_unique_violation};

/// Counter column on proposals for a vote kind
fn counter_column(kind: VoteKind) -> &'static str {
    match kind {
        VoteKind::Up => "upvote_count",
        VoteKind::Down => "downvote_count",
    }
}

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find(&self, proposal_id: Id, user_id: Id) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r#"
            SELECT proposal_id, user_id, kind, created_at
            FROM proposal_votes
            WHERE proposal_id = $1 AND user_id = $2
            "#,
        )
        .bind(proposal_id.into_uuid())
        .bind(user_id.into_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Vote::from))
    }

    #[instrument(skip(self))]
    async fn find_by_proposal(&self, proposal_id: Id) -> RepoResult<Vec<Vote>> {
        let results = sqlx::query_as::<_, VoteModel>(
            r#"
            SELECT proposal_id, user_id, kind, created_at
            FROM proposal_votes
            WHERE proposal_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(proposal_id.into_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Vote::from).collect())
    }

    #[instrument(skip(self, vote), fields(proposal_id = %vote.proposal_id, user_id = %vote.user_id))]
    async fn insert(&self, vote: &Vote) -> RepoResult<()> {
        let insert = VoteInsert::new(vote);

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO proposal_votes (proposal_id, user_id, kind, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(insert.proposal_id)
        .bind(insert.user_id)
        .bind(insert.kind)
        .bind(vote.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::VoteAlreadyExists))?;

        sqlx::query(&format!(
            "UPDATE proposals SET {col} = {col} + 1 WHERE id = $1",
            col = counter_column(vote.kind)
        ))
        .bind(insert.proposal_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn switch(
        &self,
        proposal_id: Id,
        user_id: Id,
        from: VoteKind,
        to: VoteKind,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            UPDATE proposal_votes
            SET kind = $3, created_at = NOW()
            WHERE proposal_id = $1 AND user_id = $2 AND kind = $4
            "#,
        )
        .bind(proposal_id.into_uuid())
        .bind(user_id.into_uuid())
        .bind(to.as_str())
        .bind(from.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::VoteNotFound);
        }

        sqlx::query(&format!(
            "UPDATE proposals SET {from_col} = GREATEST({from_col} - 1, 0), \
             {to_col} = {to_col} + 1 WHERE id = $1",
            from_col = counter_column(from),
            to_col = counter_column(to)
        ))
        .bind(proposal_id.into_uuid())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, proposal_id: Id, user_id: Id, kind: VoteKind) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            "DELETE FROM proposal_votes WHERE proposal_id = $1 AND user_id = $2 AND kind = $3",
        )
        .bind(proposal_id.into_uuid())
        .bind(user_id.into_uuid())
        .bind(kind.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query(&format!(
            "UPDATE proposals SET {col} = GREATEST({col} - 1, 0) WHERE id = $1",
            col = counter_column(kind)
        ))
        .bind(proposal_id.into_uuid())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(true)
    }

    #[instrument(skip(self))]
    async fn count_by_kind(&self, proposal_id: Id) -> RepoResult<Vec<(VoteKind, i64)>> {
        let results = sqlx::query_as::<_, ReactionCountModel>(
            r#"
            SELECT kind, COUNT(*) as count
            FROM proposal_votes
            WHERE proposal_id = $1
            GROUP BY kind
            ORDER BY count DESC
            "#,
        )
        .bind(proposal_id.into_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .filter_map(|r| VoteKind::parse(&r.kind).map(|k| (k, r.count)))
            .collect())
    }
}
