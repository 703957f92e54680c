//! PostgreSQL implementation of ProposalRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use alumnet_core::entities::Proposal;
use alumnet_core::traits::{ProposalRepository, RepoResult};
use alumnet_core::value_objects::Id;

use crate::mappers::ProposalInsert;
use crate::models::ProposalModel;

use super::error::{map_db_error, proposal_not_found};

const PROPOSAL_COLUMNS: &str = "id, author_id, title, description, status, deadline, \
                                upvote_count, downvote_count, created_at, updated_at";

/// PostgreSQL implementation of ProposalRepository
#[derive(Clone)]
pub struct PgProposalRepository {
    pool: PgPool,
}

impl PgProposalRepository {
    /// Create a new PgProposalRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProposalRepository for PgProposalRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Proposal>> {
        let result = sqlx::query_as::<_, ProposalModel>(&format!(
            "SELECT {PROPOSAL_COLUMNS} FROM proposals WHERE id = $1"
        ))
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Proposal::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64) -> RepoResult<Vec<Proposal>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, ProposalModel>(&format!(
            "SELECT {PROPOSAL_COLUMNS} FROM proposals ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Proposal::from).collect())
    }

    #[instrument(skip(self, proposal), fields(proposal_id = %proposal.id))]
    async fn create(&self, proposal: &Proposal) -> RepoResult<()> {
        let insert = ProposalInsert::new(proposal);

        sqlx::query(
            r#"
            INSERT INTO proposals (id, author_id, title, description, status, deadline,
                                   created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(insert.id)
        .bind(insert.author_id)
        .bind(insert.title)
        .bind(insert.description)
        .bind(insert.status)
        .bind(insert.deadline)
        .bind(proposal.created_at)
        .bind(proposal.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, proposal), fields(proposal_id = %proposal.id))]
    async fn update(&self, proposal: &Proposal) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE proposals
            SET title = $2, description = $3, status = $4, deadline = $5, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(proposal.id.into_uuid())
        .bind(&proposal.title)
        .bind(&proposal.description)
        .bind(proposal.status.as_str())
        .bind(proposal.deadline)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(proposal_not_found(proposal.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        // Votes cascade via the foreign key
        let result = sqlx::query("DELETE FROM proposals WHERE id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(proposal_not_found(id));
        }

        Ok(())
    }
}
