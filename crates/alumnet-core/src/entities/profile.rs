//! Profile entity - biography record of an alumni member
//!
//! The profile is the root aggregate: posts, comments, reactions, votes,
//! reports, and invitations all reference it.

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::Id;

/// Alumni member profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Id,
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

impl Profile {
    /// Create a new Profile with required fields
    pub fn new(id: Id, username: String, email: String, full_name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            phone: None,
            full_name,
            photo: None,
            department: None,
            graduation_year: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`; called explicitly at every mutation site
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Update the display name
    pub fn set_full_name(&mut self, full_name: String) {
        self.full_name = full_name;
        self.touch();
    }

    /// Update the photo
    pub fn set_photo(&mut self, photo: Option<String>) {
        self.photo = photo;
        self.touch();
    }

    /// Resolve the member's current position from their work history.
    ///
    /// Prefers an entry flagged as ongoing; else the entry with the latest end
    /// date; else the first entry in storage order; else absent.
    pub fn current_position(&self, history: &[WorkExperience]) -> Option<String> {
        if let Some(ongoing) = history.iter().find(|w| w.ongoing) {
            return Some(ongoing.position_label());
        }

        history
            .iter()
            .filter(|w| w.end_date.is_some())
            .max_by_key(|w| w.end_date)
            .or_else(|| history.first())
            .map(WorkExperience::position_label)
    }
}

/// A single work-history entry on a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkExperience {
    pub id: Id,
    pub profile_id: Id,
    pub title: String,
    pub employer: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub ongoing: bool,
}

impl WorkExperience {
    /// Create a new WorkExperience
    pub fn new(
        id: Id,
        profile_id: Id,
        title: String,
        employer: String,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            profile_id,
            title,
            employer,
            start_date,
            end_date: None,
            ongoing: true,
        }
    }

    /// Mark the entry as ended on the given date
    pub fn ended_on(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self.ongoing = false;
        self
    }

    /// Render as a display string: `"{title} at {employer}"`
    pub fn position_label(&self) -> String {
        format!("{} at {}", self.title, self.employer)
    }
}
