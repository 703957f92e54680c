//! Profile service
//!
//! Manages alumni profiles and their work history, including the derived
//! "current position" display field.

use alumnet_core::entities::{Profile, WorkExperience};
use alumnet_core::value_objects::Id;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::requests::{AddExperienceRequest, CreateProfileRequest, UpdateProfileRequest};
use crate::dto::responses::{ProfileResponse, WorkExperienceResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new profile
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create_profile(
        &self,
        request: CreateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        request.validate()?;

        if self
            .ctx
            .profile_repo()
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict("Username already taken"));
        }

        if self.ctx.profile_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let mut profile = Profile::new(
            self.ctx.generate_id(),
            request.username,
            request.email,
            request.full_name,
        );
        profile.phone = request.phone;
        profile.department = request.department;
        profile.graduation_year = request.graduation_year;

        self.ctx.profile_repo().create(&profile).await?;

        info!(profile_id = %profile.id, "Profile created");

        Ok(ProfileResponse::from(&profile))
    }

    /// Fetch a profile with its resolved current position.
    ///
    /// A failure loading the work history is logged and presented as an
    /// absent position rather than failing the whole lookup.
    #[instrument(skip(self))]
    pub async fn get_profile(&self, id: Id) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", id.to_string()))?;

        let current_position = match self.ctx.profile_repo().find_experiences(id).await {
            Ok(history) => profile.current_position(&history),
            Err(e) => {
                warn!(profile_id = %id, error = %e, "Failed to load work history");
                None
            }
        };

        Ok(ProfileResponse::from(&profile).with_current_position(current_position))
    }

    /// Look up a profile by username
    #[instrument(skip(self))]
    pub async fn get_profile_by_username(&self, username: &str) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", username))?;

        self.get_profile(profile.id).await
    }

    /// Update profile display fields
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        id: Id,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        request.validate()?;

        let mut profile = self
            .ctx
            .profile_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", id.to_string()))?;

        if let Some(full_name) = request.full_name {
            profile.full_name = full_name;
        }
        if let Some(phone) = request.phone {
            profile.phone = Some(phone);
        }
        if let Some(photo) = request.photo {
            profile.photo = Some(photo);
        }
        if let Some(department) = request.department {
            profile.department = Some(department);
        }
        if let Some(graduation_year) = request.graduation_year {
            profile.graduation_year = Some(graduation_year);
        }
        profile.touch();

        self.ctx.profile_repo().update(&profile).await?;

        info!(profile_id = %id, "Profile updated");

        self.get_profile(id).await
    }

    /// Delete a profile; owned content cascades in storage
    #[instrument(skip(self))]
    pub async fn delete_profile(&self, id: Id) -> ServiceResult<()> {
        self.ctx.profile_repo().delete(id).await?;
        info!(profile_id = %id, "Profile deleted");
        Ok(())
    }

    /// List the member's work history
    #[instrument(skip(self))]
    pub async fn list_experiences(
        &self,
        profile_id: Id,
    ) -> ServiceResult<Vec<WorkExperienceResponse>> {
        let history = self.ctx.profile_repo().find_experiences(profile_id).await?;
        Ok(history.iter().map(WorkExperienceResponse::from).collect())
    }

    /// Add a work-history entry
    #[instrument(skip(self, request))]
    pub async fn add_experience(
        &self,
        profile_id: Id,
        request: AddExperienceRequest,
    ) -> ServiceResult<WorkExperienceResponse> {
        request.validate()?;

        if self
            .ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("Profile", profile_id.to_string()));
        }

        let mut experience = WorkExperience::new(
            self.ctx.generate_id(),
            profile_id,
            request.title,
            request.employer,
            request.start_date,
        );
        if let Some(end_date) = request.end_date {
            experience = experience.ended_on(end_date);
        }

        self.ctx.profile_repo().add_experience(&experience).await?;

        info!(profile_id = %profile_id, experience_id = %experience.id, "Work experience added");

        Ok(WorkExperienceResponse::from(&experience))
    }

    /// Remove a work-history entry
    #[instrument(skip(self))]
    pub async fn remove_experience(&self, id: Id) -> ServiceResult<()> {
        self.ctx.profile_repo().remove_experience(id).await?;
        Ok(())
    }
}
