//! Invitation service
//!
//! Issues invitation codes, redeems them against their expiry and usage
//! caps, and purges expired ones.

use alumnet_core::entities::{generate_invitation_code, Invitation};
use alumnet_core::error::DomainError;
use alumnet_core::value_objects::Id;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::requests::CreateInvitationRequest;
use crate::dto::responses::InvitationResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// How many times to retry code generation on a collision
const CODE_RETRIES: usize = 3;

/// Invitation service
pub struct InvitationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InvitationService<'a> {
    /// Create a new InvitationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a new invitation under a freshly generated code
    #[instrument(skip(self, request))]
    pub async fn create_invitation(
        &self,
        inviter_id: Id,
        request: CreateInvitationRequest,
    ) -> ServiceResult<InvitationResponse> {
        request.validate()?;

        if self
            .ctx
            .profile_repo()
            .find_by_id(inviter_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("Profile", inviter_id.to_string()));
        }

        for attempt in 0..CODE_RETRIES {
            let mut invitation = Invitation::new(
                generate_invitation_code(),
                inviter_id,
                request.recipients.clone(),
            );
            if let Some(message) = &request.message {
                invitation = invitation.with_message(message.clone());
            }
            if let Some(days) = request.expires_in_days {
                invitation = invitation.with_expiration_days(days);
            }
            if let Some(max_uses) = request.max_uses {
                invitation = invitation.with_max_uses(max_uses);
            }

            match self.ctx.invitation_repo().create(&invitation).await {
                Ok(()) => {
                    info!(
                        code = %invitation.code,
                        %inviter_id,
                        recipients = invitation.recipients.len(),
                        "Invitation created"
                    );
                    return Ok(InvitationResponse::from(&invitation));
                }
                Err(DomainError::InvitationCodeExists) => {
                    warn!(attempt, "Invitation code collision, regenerating");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(DomainError::InvitationCodeExists.into())
    }

    /// Fetch an invitation by code
    #[instrument(skip(self))]
    pub async fn get_invitation(&self, code: &str) -> ServiceResult<InvitationResponse> {
        let invitation = self
            .ctx
            .invitation_repo()
            .find_by_code(code)
            .await?
            .ok_or_else(|| ServiceError::not_found("Invitation", code))?;
        Ok(InvitationResponse::from(&invitation))
    }

    /// Invitations issued by a member
    #[instrument(skip(self))]
    pub async fn list_by_inviter(&self, inviter_id: Id) -> ServiceResult<Vec<InvitationResponse>> {
        let invitations = self
            .ctx
            .invitation_repo()
            .find_by_inviter(inviter_id)
            .await?;
        Ok(invitations.iter().map(InvitationResponse::from).collect())
    }

    /// Redeem an invitation code.
    ///
    /// Expiry is checked before exhaustion, and a successful redemption
    /// counts one use.
    #[instrument(skip(self))]
    pub async fn redeem(&self, code: &str) -> ServiceResult<InvitationResponse> {
        let mut invitation = self
            .ctx
            .invitation_repo()
            .find_by_code(code)
            .await?
            .ok_or_else(|| ServiceError::not_found("Invitation", code))?;

        if invitation.is_expired() {
            return Err(DomainError::InvitationExpired.into());
        }
        if invitation.is_exhausted() {
            return Err(DomainError::InvitationExhausted.into());
        }

        self.ctx.invitation_repo().increment_uses(code).await?;
        invitation.increment_uses();

        info!(code, uses = invitation.uses, "Invitation redeemed");

        Ok(InvitationResponse::from(&invitation))
    }

    /// Revoke an invitation
    #[instrument(skip(self))]
    pub async fn delete_invitation(&self, code: &str) -> ServiceResult<()> {
        self.ctx.invitation_repo().delete(code).await?;
        info!(code, "Invitation deleted");
        Ok(())
    }

    /// Remove all expired invitations; returns how many were removed
    #[instrument(skip(self))]
    pub async fn purge_expired(&self) -> ServiceResult<u64> {
        let removed = self.ctx.invitation_repo().delete_expired().await?;
        if removed > 0 {
            info!(removed, "Expired invitations purged");
        }
        Ok(removed)
    }
}
