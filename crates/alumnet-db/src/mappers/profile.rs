//! Profile and WorkExperience entity <-> model mapper

use alumnet_core::entities::{Profile, WorkExperience};
use alumnet_core::value_objects::Id;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{ProfileModel, WorkExperienceModel};

/// Convert ProfileModel to Profile entity
impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: Id::from_uuid(model.id),
            username: model.username,
            email: model.email,
            phone: model.phone,
            full_name: model.full_name,
            photo: model.photo,
            department: model.department,
            graduation_year: model.graduation_year,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert WorkExperienceModel to WorkExperience entity
impl From<WorkExperienceModel> for WorkExperience {
    fn from(model: WorkExperienceModel) -> Self {
        WorkExperience {
            id: Id::from_uuid(model.id),
            profile_id: Id::from_uuid(model.profile_id),
            title: model.title,
            employer: model.employer,
            start_date: model.start_date,
            end_date: model.end_date,
            ongoing: model.ongoing,
        }
    }
}

/// Convert Profile entity reference to values for database insertion
pub struct ProfileInsert<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub full_name: &'a str,
    pub photo: Option<&'a str>,
    pub department: Option<&'a str>,
    pub graduation_year: Option<i32>,
}

impl<'a> ProfileInsert<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self {
            id: profile.id.into_uuid(),
            username: &profile.username,
            email: &profile.email,
            phone: profile.phone.as_deref(),
            full_name: &profile.full_name,
            photo: profile.photo.as_deref(),
            department: profile.department.as_deref(),
            graduation_year: profile.graduation_year,
        }
    }
}

/// Convert WorkExperience entity reference to values for database insertion
pub struct WorkExperienceInsert<'a> {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub title: &'a str,
    pub employer: &'a str,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub ongoing: bool,
}

impl<'a> WorkExperienceInsert<'a> {
    pub fn new(experience: &'a WorkExperience) -> Self {
        Self {
            id: experience.id.into_uuid(),
            profile_id: experience.profile_id.into_uuid(),
            title: &experience.title,
            employer: &experience.employer,
            start_date: experience.start_date,
            end_date: experience.end_date,
            ongoing: experience.ongoing,
        }
    }
}
