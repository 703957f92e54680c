//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use alumnet_core::entities::{Profile, WorkExperience};
use alumnet_core::error::DomainError;
use alumnet_core::traits::{ProfileRepository, RepoResult};
use alumnet_core::value_objects::Id;

use crate::mappers::{ProfileInsert, WorkExperienceInsert};
use crate::models::{ProfileModel, WorkExperienceModel};

use super::error::{map_db_error, profile_not_found};

/// Map a unique violation on profiles to the field-specific error
fn map_profile_conflict(e: sqlx::Error) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some("profiles_email_key") => DomainError::EmailAlreadyExists,
                Some("profiles_phone_key") => DomainError::PhoneAlreadyExists,
                _ => DomainError::UsernameAlreadyExists,
            };
        }
    }
    DomainError::DatabaseError(e.to_string())
}

const PROFILE_COLUMNS: &str = "id, username, email, phone, full_name, photo, department, \
                               graduation_year, created_at, updated_at";

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM profiles WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn create(&self, profile: &Profile) -> RepoResult<()> {
        let insert = ProfileInsert::new(profile);

        sqlx::query(
            r#"
            INSERT INTO profiles (id, username, email, phone, full_name, photo, department,
                                  graduation_year, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(insert.id)
        .bind(insert.username)
        .bind(insert.email)
        .bind(insert.phone)
        .bind(insert.full_name)
        .bind(insert.photo)
        .bind(insert.department)
        .bind(insert.graduation_year)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_profile_conflict)?;

        Ok(())
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn update(&self, profile: &Profile) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET phone = $2, full_name = $3, photo = $4, department = $5,
                graduation_year = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(profile.id.into_uuid())
        .bind(profile.phone.as_deref())
        .bind(&profile.full_name)
        .bind(profile.photo.as_deref())
        .bind(profile.department.as_deref())
        .bind(profile.graduation_year)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(profile.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_experiences(&self, profile_id: Id) -> RepoResult<Vec<WorkExperience>> {
        let results = sqlx::query_as::<_, WorkExperienceModel>(
            r#"
            SELECT id, profile_id, title, employer, start_date, end_date, ongoing
            FROM work_experiences
            WHERE profile_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(profile_id.into_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(WorkExperience::from).collect())
    }

    #[instrument(skip(self, experience), fields(experience_id = %experience.id))]
    async fn add_experience(&self, experience: &WorkExperience) -> RepoResult<()> {
        let insert = WorkExperienceInsert::new(experience);

        sqlx::query(
            r#"
            INSERT INTO work_experiences (id, profile_id, title, employer, start_date,
                                          end_date, ongoing)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(insert.id)
        .bind(insert.profile_id)
        .bind(insert.title)
        .bind(insert.employer)
        .bind(insert.start_date)
        .bind(insert.end_date)
        .bind(insert.ongoing)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_experience(&self, id: Id) -> RepoResult<()> {
        sqlx::query("DELETE FROM work_experiences WHERE id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
