//! Report service
//!
//! CRUD over the four-level report hierarchy: types own stages and reports,
//! reports own details, details own attachments. Statuses are plain labels
//! with no transition rules; deletes cascade down the owning edges.

use alumnet_core::entities::{
    Report, ReportAttachment, ReportDetail, ReportStage, ReportStageStatus, ReportStatus,
    ReportType, ReportTypeStatus,
};
use alumnet_core::value_objects::Id;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::requests::{
    CreateReportDetailRequest, CreateReportRequest, CreateReportStageRequest,
    CreateReportTypeRequest, UpdateReportRequest,
};
use crate::dto::responses::{
    ReportAttachmentResponse, ReportDetailResponse, ReportResponse, ReportStageResponse,
    ReportTypeResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // ========================================================================
    // Report types
    // ========================================================================

    #[instrument(skip(self, request))]
    pub async fn create_report_type(
        &self,
        request: CreateReportTypeRequest,
    ) -> ServiceResult<ReportTypeResponse> {
        request.validate()?;

        let mut report_type = ReportType::new(self.ctx.generate_id(), request.name);
        report_type.description = request.description;

        self.ctx.report_type_repo().create(&report_type).await?;

        info!(report_type_id = %report_type.id, "Report type created");

        Ok(ReportTypeResponse::from(&report_type))
    }

    #[instrument(skip(self))]
    pub async fn get_report_type(&self, id: Id) -> ServiceResult<ReportTypeResponse> {
        let report_type = self
            .ctx
            .report_type_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("ReportType", id.to_string()))?;
        Ok(ReportTypeResponse::from(&report_type))
    }

    #[instrument(skip(self))]
    pub async fn list_report_types(&self) -> ServiceResult<Vec<ReportTypeResponse>> {
        let types = self.ctx.report_type_repo().list().await?;
        Ok(types.iter().map(ReportTypeResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn set_report_type_status(
        &self,
        id: Id,
        status: &str,
    ) -> ServiceResult<ReportTypeResponse> {
        let status = ReportTypeStatus::parse(status)
            .ok_or_else(|| ServiceError::validation("Unknown report type status"))?;

        let mut report_type = self
            .ctx
            .report_type_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("ReportType", id.to_string()))?;

        report_type.status = status;
        report_type.touch();
        self.ctx.report_type_repo().update(&report_type).await?;

        Ok(ReportTypeResponse::from(&report_type))
    }

    /// Delete a report type; stages, reports, details and attachments go
    /// with it
    #[instrument(skip(self))]
    pub async fn delete_report_type(&self, id: Id) -> ServiceResult<()> {
        self.ctx.report_type_repo().delete(id).await?;
        info!(report_type_id = %id, "Report type deleted");
        Ok(())
    }

    // ========================================================================
    // Report stages
    // ========================================================================

    #[instrument(skip(self, request))]
    pub async fn create_stage(
        &self,
        report_type_id: Id,
        request: CreateReportStageRequest,
    ) -> ServiceResult<ReportStageResponse> {
        request.validate()?;

        if self
            .ctx
            .report_type_repo()
            .find_by_id(report_type_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found(
                "ReportType",
                report_type_id.to_string(),
            ));
        }

        let stage = ReportStage::new(
            self.ctx.generate_id(),
            report_type_id,
            request.name,
            request.stage_order,
        );

        self.ctx.report_stage_repo().create(&stage).await?;

        info!(stage_id = %stage.id, %report_type_id, "Report stage created");

        Ok(ReportStageResponse::from(&stage))
    }

    /// Stages of a type in `stage_order`
    #[instrument(skip(self))]
    pub async fn list_stages(&self, report_type_id: Id) -> ServiceResult<Vec<ReportStageResponse>> {
        let stages = self
            .ctx
            .report_stage_repo()
            .find_by_type(report_type_id)
            .await?;
        Ok(stages.iter().map(ReportStageResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn set_stage_status(
        &self,
        id: Id,
        status: &str,
    ) -> ServiceResult<ReportStageResponse> {
        let status = ReportStageStatus::parse(status)
            .ok_or_else(|| ServiceError::validation("Unknown report stage status"))?;

        let mut stage = self
            .ctx
            .report_stage_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("ReportStage", id.to_string()))?;

        stage.status = status;
        stage.touch();
        self.ctx.report_stage_repo().update(&stage).await?;

        Ok(ReportStageResponse::from(&stage))
    }

    #[instrument(skip(self))]
    pub async fn delete_stage(&self, id: Id) -> ServiceResult<()> {
        self.ctx.report_stage_repo().delete(id).await?;
        Ok(())
    }

    // ========================================================================
    // Reports
    // ========================================================================

    #[instrument(skip(self, request))]
    pub async fn create_report(
        &self,
        report_type_id: Id,
        reporter_id: Id,
        request: CreateReportRequest,
    ) -> ServiceResult<ReportResponse> {
        request.validate()?;

        if self
            .ctx
            .report_type_repo()
            .find_by_id(report_type_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found(
                "ReportType",
                report_type_id.to_string(),
            ));
        }
        if self
            .ctx
            .profile_repo()
            .find_by_id(reporter_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("Profile", reporter_id.to_string()));
        }

        let mut report = Report::new(
            self.ctx.generate_id(),
            report_type_id,
            reporter_id,
            request.title,
        );
        report.period = request.period;

        self.ctx.report_repo().create(&report).await?;

        info!(report_id = %report.id, %report_type_id, "Report created");

        Ok(ReportResponse::from(&report))
    }

    #[instrument(skip(self))]
    pub async fn get_report(&self, id: Id) -> ServiceResult<ReportResponse> {
        let report = self
            .ctx
            .report_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Report", id.to_string()))?;
        Ok(ReportResponse::from(&report))
    }

    #[instrument(skip(self))]
    pub async fn list_reports_by_type(
        &self,
        report_type_id: Id,
    ) -> ServiceResult<Vec<ReportResponse>> {
        let reports = self.ctx.report_repo().find_by_type(report_type_id).await?;
        Ok(reports.iter().map(ReportResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn list_reports_by_reporter(
        &self,
        reporter_id: Id,
    ) -> ServiceResult<Vec<ReportResponse>> {
        let reports = self.ctx.report_repo().find_by_reporter(reporter_id).await?;
        Ok(reports.iter().map(ReportResponse::from).collect())
    }

    #[instrument(skip(self, request))]
    pub async fn update_report(
        &self,
        id: Id,
        request: UpdateReportRequest,
    ) -> ServiceResult<ReportResponse> {
        request.validate()?;

        let mut report = self
            .ctx
            .report_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Report", id.to_string()))?;

        if let Some(title) = request.title {
            report.title = title;
        }
        if let Some(period) = request.period {
            report.period = Some(period);
        }
        if let Some(status_str) = request.status {
            let status = ReportStatus::parse(&status_str)
                .ok_or_else(|| ServiceError::validation("Unknown report status"))?;
            report.set_status(status);
        } else {
            report.touch();
        }

        self.ctx.report_repo().update(&report).await?;

        Ok(ReportResponse::from(&report))
    }

    #[instrument(skip(self))]
    pub async fn delete_report(&self, id: Id) -> ServiceResult<()> {
        self.ctx.report_repo().delete(id).await?;
        info!(report_id = %id, "Report deleted");
        Ok(())
    }

    // ========================================================================
    // Report details
    // ========================================================================

    #[instrument(skip(self, request))]
    pub async fn create_detail(
        &self,
        report_id: Id,
        request: CreateReportDetailRequest,
    ) -> ServiceResult<ReportDetailResponse> {
        request.validate()?;

        let stage_id: Id = request
            .stage_id
            .parse()
            .map_err(|_| ServiceError::validation("Invalid stage ID"))?;

        let report = self
            .ctx
            .report_repo()
            .find_by_id(report_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Report", report_id.to_string()))?;

        // The stage must belong to the report's type; its order or status
        // does not gate detail creation
        let stage = self
            .ctx
            .report_stage_repo()
            .find_by_id(stage_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("ReportStage", stage_id.to_string()))?;
        if stage.report_type_id != report.report_type_id {
            return Err(ServiceError::validation(
                "Stage belongs to a different report type",
            ));
        }

        let detail = ReportDetail::new(
            self.ctx.generate_id(),
            report_id,
            stage_id,
            request.content,
        );

        self.ctx.report_detail_repo().create(&detail).await?;

        info!(detail_id = %detail.id, %report_id, %stage_id, "Report detail created");

        Ok(ReportDetailResponse::from(&detail))
    }

    #[instrument(skip(self))]
    pub async fn list_details(&self, report_id: Id) -> ServiceResult<Vec<ReportDetailResponse>> {
        let details = self
            .ctx
            .report_detail_repo()
            .find_by_report(report_id)
            .await?;
        Ok(details.iter().map(ReportDetailResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn update_detail(
        &self,
        id: Id,
        content: Option<String>,
        status: Option<&str>,
    ) -> ServiceResult<ReportDetailResponse> {
        let mut detail = self
            .ctx
            .report_detail_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("ReportDetail", id.to_string()))?;

        if let Some(content) = content {
            if content.is_empty() {
                return Err(ServiceError::validation("Detail content cannot be empty"));
            }
            detail.content = content;
        }
        if let Some(status_str) = status {
            detail.status = alumnet_core::entities::ReportDetailStatus::parse(status_str)
                .ok_or_else(|| ServiceError::validation("Unknown report detail status"))?;
        }
        detail.touch();

        self.ctx.report_detail_repo().update(&detail).await?;

        Ok(ReportDetailResponse::from(&detail))
    }

    #[instrument(skip(self))]
    pub async fn delete_detail(&self, id: Id) -> ServiceResult<()> {
        self.ctx.report_detail_repo().delete(id).await?;
        Ok(())
    }

    // ========================================================================
    // Attachments
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn add_attachment(
        &self,
        detail_id: Id,
        file_name: String,
        url: String,
        content_type: Option<String>,
        size: Option<i64>,
    ) -> ServiceResult<ReportAttachmentResponse> {
        if file_name.is_empty() || url.is_empty() {
            return Err(ServiceError::validation(
                "Attachment file name and URL are required",
            ));
        }

        if self
            .ctx
            .report_detail_repo()
            .find_by_id(detail_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found(
                "ReportDetail",
                detail_id.to_string(),
            ));
        }

        let mut attachment =
            ReportAttachment::new(self.ctx.generate_id(), detail_id, file_name, url);
        attachment.content_type = content_type;
        attachment.size = size;

        self.ctx.report_attachment_repo().create(&attachment).await?;

        info!(attachment_id = %attachment.id, %detail_id, "Attachment added");

        Ok(ReportAttachmentResponse::from(&attachment))
    }

    #[instrument(skip(self))]
    pub async fn list_attachments(
        &self,
        detail_id: Id,
    ) -> ServiceResult<Vec<ReportAttachmentResponse>> {
        let attachments = self
            .ctx
            .report_attachment_repo()
            .find_by_detail(detail_id)
            .await?;
        Ok(attachments.iter().map(ReportAttachmentResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn remove_attachment(&self, id: Id) -> ServiceResult<()> {
        self.ctx.report_attachment_repo().delete(id).await?;
        Ok(())
    }
}
