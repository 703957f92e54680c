//! PostgreSQL implementation of ReactionRepository
//!
//! One instance per reaction table: `for_posts` works over `post_reactions`
//! with counters on `posts`, `for_comments` over `comment_reactions` with
//! counters on `comments`. The child-row write and the parent-counter update
//! always share one transaction, and decrements clamp at zero.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use alumnet_core::entities::{Reaction, ReactionKind};
use alumnet_core::error::DomainError;
use alumnet_core::traits::{ReactionRepository, RepoResult};
use alumnet_core::value_objects::Id;

use crate::mappers::ReactionInsert;
use crate::models::{ReactionCountModel, ReactionModel};

use super::error::{map_db_error, map_unique_violation};

/// Counter column on the parent table for a reaction kind
fn counter_column(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Like => "like_count",
        ReactionKind::Dislike => "dislike_count",
    }
}

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
    /// Reaction table, e.g. `post_reactions`
    table: &'static str,
    /// Parent table carrying the cached counters, e.g. `posts`
    parent_table: &'static str,
}

impl PgReactionRepository {
    /// Repository over post reactions
    pub fn for_posts(pool: PgPool) -> Self {
        Self {
            pool,
            table: "post_reactions",
            parent_table: "posts",
        }
    }

    /// Repository over comment reactions
    pub fn for_comments(pool: PgPool) -> Self {
        Self {
            pool,
            table: "comment_reactions",
            parent_table: "comments",
        }
    }
}

impl std::fmt::Debug for PgReactionRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgReactionRepository")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, parent_id: Id, user_id: Id) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(&format!(
            "SELECT parent_id, user_id, kind, user_name, created_at \
             FROM {} WHERE parent_id = $1 AND user_id = $2",
            self.table
        ))
        .bind(parent_id.into_uuid())
        .bind(user_id.into_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn find_by_parent(&self, parent_id: Id) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(&format!(
            "SELECT parent_id, user_id, kind, user_name, created_at \
             FROM {} WHERE parent_id = $1 ORDER BY created_at",
            self.table
        ))
        .bind(parent_id.into_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self, reaction), fields(parent_id = %reaction.parent_id, user_id = %reaction.user_id))]
    async fn insert(&self, reaction: &Reaction) -> RepoResult<()> {
        let insert = ReactionInsert::new(reaction);

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(&format!(
            "INSERT INTO {} (parent_id, user_id, kind, user_name, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
            self.table
        ))
        .bind(insert.parent_id)
        .bind(insert.user_id)
        .bind(insert.kind)
        .bind(insert.user_name)
        .bind(reaction.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ReactionAlreadyExists))?;

        sqlx::query(&format!(
            "UPDATE {} SET {col} = {col} + 1 WHERE id = $1",
            self.parent_table,
            col = counter_column(reaction.kind)
        ))
        .bind(insert.parent_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn switch(
        &self,
        parent_id: Id,
        user_id: Id,
        from: ReactionKind,
        to: ReactionKind,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(&format!(
            "UPDATE {} SET kind = $3, created_at = NOW() \
             WHERE parent_id = $1 AND user_id = $2 AND kind = $4",
            self.table
        ))
        .bind(parent_id.into_uuid())
        .bind(user_id.into_uuid())
        .bind(to.as_str())
        .bind(from.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ReactionNotFound);
        }

        sqlx::query(&format!(
            "UPDATE {} SET {from_col} = GREATEST({from_col} - 1, 0), {to_col} = {to_col} + 1 \
             WHERE id = $1",
            self.parent_table,
            from_col = counter_column(from),
            to_col = counter_column(to)
        ))
        .bind(parent_id.into_uuid())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, parent_id: Id, user_id: Id, kind: ReactionKind) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(&format!(
            "DELETE FROM {} WHERE parent_id = $1 AND user_id = $2 AND kind = $3",
            self.table
        ))
        .bind(parent_id.into_uuid())
        .bind(user_id.into_uuid())
        .bind(kind.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            // Nothing to remove; the transaction rolls back on drop
            return Ok(false);
        }

        sqlx::query(&format!(
            "UPDATE {} SET {col} = GREATEST({col} - 1, 0) WHERE id = $1",
            self.parent_table,
            col = counter_column(kind)
        ))
        .bind(parent_id.into_uuid())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(true)
    }

    #[instrument(skip(self))]
    async fn remove_all(&self, parent_id: Id) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(&format!("DELETE FROM {} WHERE parent_id = $1", self.table))
            .bind(parent_id.into_uuid())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query(&format!(
            "UPDATE {} SET like_count = 0, dislike_count = 0 WHERE id = $1",
            self.parent_table
        ))
        .bind(parent_id.into_uuid())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn count_by_kind(&self, parent_id: Id) -> RepoResult<Vec<(ReactionKind, i64)>> {
        let results = sqlx::query_as::<_, ReactionCountModel>(&format!(
            "SELECT kind, COUNT(*) as count FROM {} \
             WHERE parent_id = $1 GROUP BY kind ORDER BY count DESC",
            self.table
        ))
        .bind(parent_id.into_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .filter_map(|r| ReactionKind::parse(&r.kind).map(|k| (k, r.count)))
            .collect())
    }
}
