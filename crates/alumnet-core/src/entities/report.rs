//! Report hierarchy - a four-level composition tree for reporting workflows
//!
//! `ReportType -> ReportStage -> Report -> ReportDetail -> ReportAttachment`.
//! Plain CRUD tree storage: stage ordering (`stage_order`) is informational,
//! no workflow engine enforces it, and every status may be set directly.
//! Deletion cascades down the owning edges only.

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Report type status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTypeStatus {
    Active,
    Inactive,
}

impl ReportTypeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(Self::Active),
            "INACTIVE" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// Top of the hierarchy: a category of report (e.g. treasurer report)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportType {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub status: ReportTypeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReportType {
    pub fn new(id: Id, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            status: ReportTypeStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Report stage status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStageStatus {
    Open,
    Closed,
}

impl ReportStageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "OPEN" => Some(Self::Open),
            "CLOSED" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// Ordered stage within a report type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStage {
    pub id: Id,
    pub report_type_id: Id,
    pub name: String,
    /// Display/sequence order; informational only
    pub stage_order: i32,
    pub status: ReportStageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReportStage {
    pub fn new(id: Id, report_type_id: Id, name: String, stage_order: i32) -> Self {
        let now = Utc::now();
        Self {
            id,
            report_type_id,
            name,
            stage_order,
            status: ReportStageStatus::Open,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Report status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "DRAFT" => Some(Self::Draft),
            "SUBMITTED" => Some(Self::Submitted),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// A filed report under some type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: Id,
    pub report_type_id: Id,
    pub reporter_id: Id,
    pub title: String,
    /// Free-form reporting period label, e.g. "2026-Q1"
    pub period: Option<String>,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(id: Id, report_type_id: Id, reporter_id: Id, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            report_type_id,
            reporter_id,
            title,
            period: None,
            status: ReportStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Set the status; any value may be set at any time
    pub fn set_status(&mut self, status: ReportStatus) {
        self.status = status;
        self.touch();
    }
}

/// Report detail status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDetailStatus {
    Pending,
    Done,
}

impl ReportDetailStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Done => "DONE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "DONE" => Some(Self::Done),
            _ => None,
        }
    }
}

/// Detail entry filed against a report and a stage.
///
/// May reference any stage of the report's type regardless of `stage_order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDetail {
    pub id: Id,
    pub report_id: Id,
    pub stage_id: Id,
    pub content: String,
    pub status: ReportDetailStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReportDetail {
    pub fn new(id: Id, report_id: Id, stage_id: Id, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            report_id,
            stage_id,
            content,
            status: ReportDetailStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// File attached to a report detail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportAttachment {
    pub id: Id,
    pub detail_id: Id,
    pub file_name: String,
    pub url: String,
    pub content_type: Option<String>,
    pub size: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl ReportAttachment {
    pub fn new(id: Id, detail_id: Id, file_name: String, url: String) -> Self {
        Self {
            id,
            detail_id,
            file_name,
            url,
            content_type: None,
            size: None,
            created_at: Utc::now(),
        }
    }
}
