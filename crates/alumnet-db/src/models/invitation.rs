//! Invitation database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for invitations table
///
/// `recipients` is a JSONB array of email addresses.
#[derive(Debug, Clone, FromRow)]
pub struct InvitationModel {
    pub code: String,
    pub inviter_id: Uuid,
    pub recipients: Json<Vec<String>>,
    pub message: Option<String>,
    pub uses: i32,
    pub max_uses: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl InvitationModel {
    /// Check if the invitation is expired
    #[inline]
    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at {
            Utc::now() > expires_at
        } else {
            false
        }
    }

    /// Check if the invitation has reached max uses
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        if let Some(max_uses) = self.max_uses {
            self.uses >= max_uses
        } else {
            false
        }
    }
}
