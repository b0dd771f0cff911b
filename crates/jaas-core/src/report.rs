//! # Dataset Report
//!
//! The structured outcome of one validation pass. The report retains every
//! per-record finding in dataset order, the coverage row per whitelist
//! category, the distinct unknown categories, and the accumulated error
//! count. Rendering the report and mapping it to a process exit code is the
//! CLI's concern.

use serde::Serialize;

use crate::category::COVERAGE_MINIMUM;
use crate::record::Violation;

/// Coverage status of one whitelist category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CoverageStatus {
    /// At or above the recommended minimum.
    Adequate,
    /// Below the recommended minimum. Advisory only.
    Low,
}

impl CoverageStatus {
    /// Status for an observed count.
    pub fn from_count(count: usize) -> Self {
        if count >= COVERAGE_MINIMUM {
            Self::Adequate
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Adequate => write!(f, "adequate"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Observed count and status for one whitelist category.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageRow {
    /// The whitelist category name.
    pub category: &'static str,
    /// Number of records observed with this category.
    pub count: usize,
    /// Adequate or low relative to [`COVERAGE_MINIMUM`].
    pub status: CoverageStatus,
}

/// The defect class of a per-record finding.
#[derive(Debug, Clone, Serialize)]
pub enum FindingKind {
    /// The record's identifier was already seen earlier in the dataset.
    DuplicateId,
    /// The record failed schema validation. Counts as one error regardless
    /// of how many constraint violations it produced.
    SchemaInvalid(Vec<Violation>),
}

/// One per-record defect, located by 1-based dataset index.
#[derive(Debug, Clone, Serialize)]
pub struct RecordFinding {
    /// 1-based position of the record in the dataset.
    pub index: usize,
    /// The record's identifier, if it carries one.
    pub id: Option<String>,
    /// What went wrong.
    pub kind: FindingKind,
}

impl RecordFinding {
    /// Identifier for display, with a placeholder when absent.
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("<no id>")
    }
}

/// Structured result of one validation pass over the dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    /// Total number of records in the dataset.
    pub total_records: usize,
    /// Per-record findings in dataset order.
    pub findings: Vec<RecordFinding>,
    /// One row per whitelist category, in whitelist order.
    pub coverage: Vec<CoverageRow>,
    /// Distinct non-whitelisted categories, in first-occurrence order.
    pub unknown_categories: Vec<String>,
    /// Identifiers that appeared more than once, one entry per repeated
    /// occurrence.
    pub duplicate_ids: Vec<String>,
    /// Number of distinct observed categories, whitelisted or not.
    pub distinct_categories: usize,
    /// Accumulated error count across duplicate, schema, and
    /// unknown-category checks. Coverage warnings are never counted.
    pub error_count: usize,
}

impl DatasetReport {
    /// True when the run accumulated no errors.
    pub fn passed(&self) -> bool {
        self.error_count == 0
    }

    /// Process exit code for this report: 0 on pass, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }

    /// Coverage warnings in the report, i.e. rows below the minimum.
    pub fn low_coverage(&self) -> impl Iterator<Item = &CoverageRow> {
        self.coverage
            .iter()
            .filter(|row| row.status == CoverageStatus::Low)
    }
}
