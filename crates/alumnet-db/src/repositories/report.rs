//! PostgreSQL implementations of the report hierarchy repositories
//!
//! Five repositories over the four-level tree:
//! `report_types -> report_stages -> reports -> report_details -> report_attachments`.
//! Deletes cascade down the owning foreign keys only.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use alumnet_core::entities::{Report, ReportAttachment, ReportDetail, ReportStage, ReportType};
use alumnet_core::traits::{
    RepoResult, ReportAttachmentRepository, ReportDetailRepository, ReportRepository,
    ReportStageRepository, ReportTypeRepository,
};
use alumnet_core::value_objects::Id;

use crate::mappers::{
    ReportAttachmentInsert, ReportDetailInsert, ReportInsert, ReportStageInsert, ReportTypeInsert,
};
use crate::models::{
    ReportAttachmentModel, ReportDetailModel, ReportModel, ReportStageModel, ReportTypeModel,
};

use super::error::{
    map_db_error, report_detail_not_found, report_not_found, report_stage_not_found,
    report_type_not_found,
};

// ============================================================================
// ReportType
// ============================================================================

/// PostgreSQL implementation of ReportTypeRepository
#[derive(Clone)]
pub struct PgReportTypeRepository {
    pool: PgPool,
}

impl PgReportTypeRepository {
    /// Create a new PgReportTypeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportTypeRepository for PgReportTypeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ReportType>> {
        let result = sqlx::query_as::<_, ReportTypeModel>(
            r#"
            SELECT id, name, description, status, created_at, updated_at
            FROM report_types
            WHERE id = $1
            "#,
        )
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReportType::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<ReportType>> {
        let results = sqlx::query_as::<_, ReportTypeModel>(
            r#"
            SELECT id, name, description, status, created_at, updated_at
            FROM report_types
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReportType::from).collect())
    }

    #[instrument(skip(self, report_type), fields(report_type_id = %report_type.id))]
    async fn create(&self, report_type: &ReportType) -> RepoResult<()> {
        let insert = ReportTypeInsert::new(report_type);

        sqlx::query(
            r#"
            INSERT INTO report_types (id, name, description, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(insert.id)
        .bind(insert.name)
        .bind(insert.description)
        .bind(insert.status)
        .bind(report_type.created_at)
        .bind(report_type.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, report_type), fields(report_type_id = %report_type.id))]
    async fn update(&self, report_type: &ReportType) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE report_types
            SET name = $2, description = $3, status = $4, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(report_type.id.into_uuid())
        .bind(&report_type.name)
        .bind(report_type.description.as_deref())
        .bind(report_type.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(report_type_not_found(report_type.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        // Stages, reports, details and attachments cascade
        let result = sqlx::query("DELETE FROM report_types WHERE id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(report_type_not_found(id));
        }

        Ok(())
    }
}

// ============================================================================
// ReportStage
// ============================================================================

/// PostgreSQL implementation of ReportStageRepository
#[derive(Clone)]
pub struct PgReportStageRepository {
    pool: PgPool,
}

impl PgReportStageRepository {
    /// Create a new PgReportStageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStageRepository for PgReportStageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ReportStage>> {
        let result = sqlx::query_as::<_, ReportStageModel>(
            r#"
            SELECT id, report_type_id, name, stage_order, status, created_at, updated_at
            FROM report_stages
            WHERE id = $1
            "#,
        )
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReportStage::from))
    }

    #[instrument(skip(self))]
    async fn find_by_type(&self, report_type_id: Id) -> RepoResult<Vec<ReportStage>> {
        let results = sqlx::query_as::<_, ReportStageModel>(
            r#"
            SELECT id, report_type_id, name, stage_order, status, created_at, updated_at
            FROM report_stages
            WHERE report_type_id = $1
            ORDER BY stage_order
            "#,
        )
        .bind(report_type_id.into_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReportStage::from).collect())
    }

    #[instrument(skip(self, stage), fields(stage_id = %stage.id))]
    async fn create(&self, stage: &ReportStage) -> RepoResult<()> {
        let insert = ReportStageInsert::new(stage);

        sqlx::query(
            r#"
            INSERT INTO report_stages (id, report_type_id, name, stage_order, status,
                                       created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(insert.id)
        .bind(insert.report_type_id)
        .bind(insert.name)
        .bind(insert.stage_order)
        .bind(insert.status)
        .bind(stage.created_at)
        .bind(stage.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, stage), fields(stage_id = %stage.id))]
    async fn update(&self, stage: &ReportStage) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE report_stages
            SET name = $2, stage_order = $3, status = $4, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(stage.id.into_uuid())
        .bind(&stage.name)
        .bind(stage.stage_order)
        .bind(stage.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(report_stage_not_found(stage.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM report_stages WHERE id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(report_stage_not_found(id));
        }

        Ok(())
    }
}

// ============================================================================
// Report
// ============================================================================

const REPORT_COLUMNS: &str =
    "id, report_type_id, reporter_id, title, period, status, created_at, updated_at";

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Report>> {
        let result = sqlx::query_as::<_, ReportModel>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1"
        ))
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Report::from))
    }

    #[instrument(skip(self))]
    async fn find_by_type(&self, report_type_id: Id) -> RepoResult<Vec<Report>> {
        let results = sqlx::query_as::<_, ReportModel>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports \
             WHERE report_type_id = $1 ORDER BY created_at DESC"
        ))
        .bind(report_type_id.into_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Report::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_reporter(&self, reporter_id: Id) -> RepoResult<Vec<Report>> {
        let results = sqlx::query_as::<_, ReportModel>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports \
             WHERE reporter_id = $1 ORDER BY created_at DESC"
        ))
        .bind(reporter_id.into_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Report::from).collect())
    }

    #[instrument(skip(self, report), fields(report_id = %report.id))]
    async fn create(&self, report: &Report) -> RepoResult<()> {
        let insert = ReportInsert::new(report);

        sqlx::query(
            r#"
            INSERT INTO reports (id, report_type_id, reporter_id, title, period, status,
                                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(insert.id)
        .bind(insert.report_type_id)
        .bind(insert.reporter_id)
        .bind(insert.title)
        .bind(insert.period)
        .bind(insert.status)
        .bind(report.created_at)
        .bind(report.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, report), fields(report_id = %report.id))]
    async fn update(&self, report: &Report) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE reports
            SET title = $2, period = $3, status = $4, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(report.id.into_uuid())
        .bind(&report.title)
        .bind(report.period.as_deref())
        .bind(report.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(report_not_found(report.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        // Details and attachments cascade
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(report_not_found(id));
        }

        Ok(())
    }
}

// ============================================================================
// ReportDetail
// ============================================================================

const DETAIL_COLUMNS: &str = "id, report_id, stage_id, content, status, created_at, updated_at";

/// PostgreSQL implementation of ReportDetailRepository
#[derive(Clone)]
pub struct PgReportDetailRepository {
    pool: PgPool,
}

impl PgReportDetailRepository {
    /// Create a new PgReportDetailRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportDetailRepository for PgReportDetailRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ReportDetail>> {
        let result = sqlx::query_as::<_, ReportDetailModel>(&format!(
            "SELECT {DETAIL_COLUMNS} FROM report_details WHERE id = $1"
        ))
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReportDetail::from))
    }

    #[instrument(skip(self))]
    async fn find_by_report(&self, report_id: Id) -> RepoResult<Vec<ReportDetail>> {
        let results = sqlx::query_as::<_, ReportDetailModel>(&format!(
            "SELECT {DETAIL_COLUMNS} FROM report_details \
             WHERE report_id = $1 ORDER BY created_at"
        ))
        .bind(report_id.into_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReportDetail::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_stage(&self, stage_id: Id) -> RepoResult<Vec<ReportDetail>> {
        let results = sqlx::query_as::<_, ReportDetailModel>(&format!(
            "SELECT {DETAIL_COLUMNS} FROM report_details \
             WHERE stage_id = $1 ORDER BY created_at"
        ))
        .bind(stage_id.into_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReportDetail::from).collect())
    }

    #[instrument(skip(self, detail), fields(detail_id = %detail.id))]
    async fn create(&self, detail: &ReportDetail) -> RepoResult<()> {
        let insert = ReportDetailInsert::new(detail);

        sqlx::query(
            r#"
            INSERT INTO report_details (id, report_id, stage_id, content, status,
                                        created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(insert.id)
        .bind(insert.report_id)
        .bind(insert.stage_id)
        .bind(insert.content)
        .bind(insert.status)
        .bind(detail.created_at)
        .bind(detail.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, detail), fields(detail_id = %detail.id))]
    async fn update(&self, detail: &ReportDetail) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE report_details
            SET content = $2, status = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(detail.id.into_uuid())
        .bind(&detail.content)
        .bind(detail.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(report_detail_not_found(detail.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        // Attachments cascade
        let result = sqlx::query("DELETE FROM report_details WHERE id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(report_detail_not_found(id));
        }

        Ok(())
    }
}

// ============================================================================
// ReportAttachment
// ============================================================================

/// PostgreSQL implementation of ReportAttachmentRepository
#[derive(Clone)]
pub struct PgReportAttachmentRepository {
    pool: PgPool,
}

impl PgReportAttachmentRepository {
    /// Create a new PgReportAttachmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportAttachmentRepository for PgReportAttachmentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ReportAttachment>> {
        let result = sqlx::query_as::<_, ReportAttachmentModel>(
            r#"
            SELECT id, detail_id, file_name, url, content_type, size, created_at
            FROM report_attachments
            WHERE id = $1
            "#,
        )
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReportAttachment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_detail(&self, detail_id: Id) -> RepoResult<Vec<ReportAttachment>> {
        let results = sqlx::query_as::<_, ReportAttachmentModel>(
            r#"
            SELECT id, detail_id, file_name, url, content_type, size, created_at
            FROM report_attachments
            WHERE detail_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(detail_id.into_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReportAttachment::from).collect())
    }

    #[instrument(skip(self, attachment), fields(attachment_id = %attachment.id))]
    async fn create(&self, attachment: &ReportAttachment) -> RepoResult<()> {
        let insert = ReportAttachmentInsert::new(attachment);

        sqlx::query(
            r#"
            INSERT INTO report_attachments (id, detail_id, file_name, url, content_type,
                                            size, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(insert.id)
        .bind(insert.detail_id)
        .bind(insert.file_name)
        .bind(insert.url)
        .bind(insert.content_type)
        .bind(insert.size)
        .bind(attachment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        sqlx::query("DELETE FROM report_attachments WHERE id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
