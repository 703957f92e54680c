//! Report hierarchy database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for report_types table
#[derive(Debug, Clone, FromRow)]
pub struct ReportTypeModel {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for report_stages table
#[derive(Debug, Clone, FromRow)]
pub struct ReportStageModel {
    pub id: Uuid,
    pub report_type_id: Uuid,
    pub name: String,
    pub stage_order: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for reports table
#[derive(Debug, Clone, FromRow)]
pub struct ReportModel {
    pub id: Uuid,
    pub report_type_id: Uuid,
    pub reporter_id: Uuid,
    pub title: String,
    pub period: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for report_details table
#[derive(Debug, Clone, FromRow)]
pub struct ReportDetailModel {
    pub id: Uuid,
    pub report_id: Uuid,
    pub stage_id: Uuid,
    pub content: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for report_attachments table
#[derive(Debug, Clone, FromRow)]
pub struct ReportAttachmentModel {
    pub id: Uuid,
    pub detail_id: Uuid,
    pub file_name: String,
    pub url: String,
    pub content_type: Option<String>,
    pub size: Option<i64>,
    pub created_at: DateTime<Utc>,
}
