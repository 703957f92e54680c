//! Profile and work experience database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub full_name: String,
    pub photo: Option<String>,
    pub department: Option<String>,
    pub graduation_year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for work_experiences table
#[derive(Debug, Clone, FromRow)]
pub struct WorkExperienceModel {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub title: String,
    pub employer: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub ongoing: bool,
}

impl WorkExperienceModel {
    /// Check if the entry has a recorded end date
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.end_date.is_some()
    }
}
