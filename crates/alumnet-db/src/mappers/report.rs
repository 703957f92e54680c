//! Report hierarchy entity <-> model mapper

use alumnet_core::entities::{
    Report, ReportAttachment, ReportDetail, ReportDetailStatus, ReportStage, ReportStageStatus,
    ReportStatus, ReportType, ReportTypeStatus,
};
use alumnet_core::value_objects::Id;
use uuid::Uuid;

use crate::models::{
    ReportAttachmentModel, ReportDetailModel, ReportModel, ReportStageModel, ReportTypeModel,
};

/// Convert ReportTypeModel to ReportType entity
impl From<ReportTypeModel> for ReportType {
    fn from(model: ReportTypeModel) -> Self {
        ReportType {
            id: Id::from_uuid(model.id),
            name: model.name,
            description: model.description,
            status: ReportTypeStatus::parse(&model.status).unwrap_or(ReportTypeStatus::Active),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert ReportStageModel to ReportStage entity
impl From<ReportStageModel> for ReportStage {
    fn from(model: ReportStageModel) -> Self {
        ReportStage {
            id: Id::from_uuid(model.id),
            report_type_id: Id::from_uuid(model.report_type_id),
            name: model.name,
            stage_order: model.stage_order,
            status: ReportStageStatus::parse(&model.status).unwrap_or(ReportStageStatus::Open),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert ReportModel to Report entity
impl From<ReportModel> for Report {
    fn from(model: ReportModel) -> Self {
        Report {
            id: Id::from_uuid(model.id),
            report_type_id: Id::from_uuid(model.report_type_id),
            reporter_id: Id::from_uuid(model.reporter_id),
            title: model.title,
            period: model.period,
            status: ReportStatus::parse(&model.status).unwrap_or(ReportStatus::Draft),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert ReportDetailModel to ReportDetail entity
impl From<ReportDetailModel> for ReportDetail {
    fn from(model: ReportDetailModel) -> Self {
        ReportDetail {
            id: Id::from_uuid(model.id),
            report_id: Id::from_uuid(model.report_id),
            stage_id: Id::from_uuid(model.stage_id),
            content: model.content,
            status: ReportDetailStatus::parse(&model.status).unwrap_or(ReportDetailStatus::Pending),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert ReportAttachmentModel to ReportAttachment entity
impl From<ReportAttachmentModel> for ReportAttachment {
    fn from(model: ReportAttachmentModel) -> Self {
        ReportAttachment {
            id: Id::from_uuid(model.id),
            detail_id: Id::from_uuid(model.detail_id),
            file_name: model.file_name,
            url: model.url,
            content_type: model.content_type,
            size: model.size,
            created_at: model.created_at,
        }
    }
}

/// Convert ReportType entity reference to values for database insertion
pub struct ReportTypeInsert<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub status: &'static str,
}

impl<'a> ReportTypeInsert<'a> {
    pub fn new(report_type: &'a ReportType) -> Self {
        Self {
            id: report_type.id.into_uuid(),
            name: &report_type.name,
            description: report_type.description.as_deref(),
            status: report_type.status.as_str(),
        }
    }
}

/// Convert ReportStage entity reference to values for database insertion
pub struct ReportStageInsert<'a> {
    pub id: Uuid,
    pub report_type_id: Uuid,
    pub name: &'a str,
    pub stage_order: i32,
    pub status: &'static str,
}

impl<'a> ReportStageInsert<'a> {
    pub fn new(stage: &'a ReportStage) -> Self {
        Self {
            id: stage.id.into_uuid(),
            report_type_id: stage.report_type_id.into_uuid(),
            name: &stage.name,
            stage_order: stage.stage_order,
            status: stage.status.as_str(),
        }
    }
}

/// Convert Report entity reference to values for database insertion
pub struct ReportInsert<'a> {
    pub id: Uuid,
    pub report_type_id: Uuid,
    pub reporter_id: Uuid,
    pub title: &'a str,
    pub period: Option<&'a str>,
    pub status: &'static str,
}

impl<'a> ReportInsert<'a> {
    pub fn new(report: &'a Report) -> Self {
        Self {
            id: report.id.into_uuid(),
            report_type_id: report.report_type_id.into_uuid(),
            reporter_id: report.reporter_id.into_uuid(),
            title: &report.title,
            period: report.period.as_deref(),
            status: report.status.as_str(),
        }
    }
}

/// Convert ReportDetail entity reference to values for database insertion
pub struct ReportDetailInsert<'a> {
    pub id: Uuid,
    pub report_id: Uuid,
    pub stage_id: Uuid,
    pub content: &'a str,
    pub status: &'static str,
}

impl<'a> ReportDetailInsert<'a> {
    pub fn new(detail: &'a ReportDetail) -> Self {
        Self {
            id: detail.id.into_uuid(),
            report_id: detail.report_id.into_uuid(),
            stage_id: detail.stage_id.into_uuid(),
            content: &detail.content,
            status: detail.status.as_str(),
        }
    }
}

/// Convert ReportAttachment entity reference to values for database insertion
pub struct ReportAttachmentInsert<'a> {
    pub id: Uuid,
    pub detail_id: Uuid,
    pub file_name: &'a str,
    pub url: &'a str,
    pub content_type: Option<&'a str>,
    pub size: Option<i64>,
}

impl<'a> ReportAttachmentInsert<'a> {
    pub fn new(attachment: &'a ReportAttachment) -> Self {
        Self {
            id: attachment.id.into_uuid(),
            detail_id: attachment.detail_id.into_uuid(),
            file_name: &attachment.file_name,
            url: &attachment.url,
            content_type: attachment.content_type.as_deref(),
            size: attachment.size,
        }
    }
}
