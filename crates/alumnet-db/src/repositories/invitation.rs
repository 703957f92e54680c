//! PostgreSQL implementation of InvitationRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use alumnet_core::entities::Invitation;
use alumnet_core::error::DomainError;
use alumnet_core::traits::{InvitationRepository, RepoResult};
use alumnet_core::value_objects::Id;

use crate::mappers::InvitationInsert;
use crate::models::InvitationModel;

use super::error::{invitation_not_found, map_db_error, map_unique_violation};

const INVITATION_COLUMNS: &str =
    "code, inviter_id, recipients, message, uses, max_uses, expires_at, created_at";

/// PostgreSQL implementation of InvitationRepository
#[derive(Clone)]
pub struct PgInvitationRepository {
    pool: PgPool,
}

impl PgInvitationRepository {
    /// Create a new PgInvitationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for PgInvitationRepository {
    #[instrument(skip(self))]
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Invitation>> {
        let result = sqlx::query_as::<_, InvitationModel>(&format!(
            "SELECT {INVITATION_COLUMNS} FROM invitations WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Invitation::from))
    }

    #[instrument(skip(self))]
    async fn find_by_inviter(&self, inviter_id: Id) -> RepoResult<Vec<Invitation>> {
        let results = sqlx::query_as::<_, InvitationModel>(&format!(
            "SELECT {INVITATION_COLUMNS} FROM invitations \
             WHERE inviter_id = $1 ORDER BY created_at DESC"
        ))
        .bind(inviter_id.into_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Invitation::from).collect())
    }

    #[instrument(skip(self, invitation), fields(code = %invitation.code))]
    async fn create(&self, invitation: &Invitation) -> RepoResult<()> {
        let insert = InvitationInsert::new(invitation);

        sqlx::query(
            r#"
            INSERT INTO invitations (code, inviter_id, recipients, message, uses, max_uses,
                                     expires_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(insert.code)
        .bind(insert.inviter_id)
        .bind(Json(insert.recipients))
        .bind(insert.message)
        .bind(invitation.uses)
        .bind(insert.max_uses)
        .bind(insert.expires_at)
        .bind(invitation.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::InvitationCodeExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_uses(&self, code: &str) -> RepoResult<()> {
        let result = sqlx::query("UPDATE invitations SET uses = uses + 1 WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(invitation_not_found(code));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, code: &str) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM invitations WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(invitation_not_found(code));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_expired(&self) -> RepoResult<u64> {
        let result = sqlx::query(
            "DELETE FROM invitations WHERE expires_at IS NOT NULL AND expires_at < NOW()",
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
