//! Invitation entity <-> model mapper

use alumnet_core::entities::Invitation;
use alumnet_core::value_objects::Id;
use uuid::Uuid;

use crate::models::InvitationModel;

/// Convert InvitationModel to Invitation entity
impl From<InvitationModel> for Invitation {
    fn from(model: InvitationModel) -> Self {
        Invitation {
            code: model.code,
            inviter_id: Id::from_uuid(model.inviter_id),
            recipients: model.recipients.0,
            message: model.message,
            uses: model.uses,
            max_uses: model.max_uses,
            expires_at: model.expires_at,
            created_at: model.created_at,
        }
    }
}

/// Convert Invitation entity reference to values for database insertion
pub struct InvitationInsert<'a> {
    pub code: &'a str,
    pub inviter_id: Uuid,
    pub recipients: &'a [String],
    pub message: Option<&'a str>,
    pub max_uses: Option<i32>,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl<'a> InvitationInsert<'a> {
    pub fn new(invitation: &'a Invitation) -> Self {
        Self {
            code: &invitation.code,
            inviter_id: invitation.inviter_id.into_uuid(),
            recipients: &invitation.recipients,
            message: invitation.message.as_deref(),
            max_uses: invitation.max_uses,
            expires_at: invitation.expires_at,
        }
    }
}
