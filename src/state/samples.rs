/// Fixed sample datasets backing the dashboard and analysis views
///
/// Nothing here is derived from an uploaded document. Until the validation
/// backend exists, these tables stand in for its output; the analysis view
/// only borrows the published document's name and upload time.
use crate::state::document::DocumentInfo;

/// Outcome of a single field-level comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Passed,
    Failed,
    Warning,
}

impl CheckStatus {
    pub fn label(self) -> &'static str {
        match self {
            CheckStatus::Passed => "passed",
            CheckStatus::Failed => "failed",
            CheckStatus::Warning => "warning",
        }
    }
}

/// Comparison between an expected and an extracted specification value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub field: &'static str,
    pub expected: &'static str,
    pub actual: &'static str,
    pub status: CheckStatus,
    pub source: &'static str,
}

pub const VALIDATION_RESULTS: &[ValidationResult] = &[
    ValidationResult {
        field: "Operating Temperature",
        expected: "400°C ± 5°C",
        actual: "420°C ± 3°C",
        status: CheckStatus::Failed,
        source: "SAP Material Master",
    },
    ValidationResult {
        field: "Power Rating",
        expected: "2.5 kW",
        actual: "2.5 kW",
        status: CheckStatus::Passed,
        source: "iPLM Specifications",
    },
    ValidationResult {
        field: "Voltage Rating",
        expected: "240V AC",
        actual: "240V AC",
        status: CheckStatus::Passed,
        source: "iQMS Standards",
    },
    ValidationResult {
        field: "Resistance Value",
        expected: "23.04 Ω ± 2%",
        actual: "23.04 Ω ± 2%",
        status: CheckStatus::Passed,
        source: "SAP Material Master",
    },
    ValidationResult {
        field: "Thermal Uniformity",
        expected: "± 2°C",
        actual: "± 3°C",
        status: CheckStatus::Warning,
        source: "MyLam Standards",
    },
    ValidationResult {
        field: "Insulation Resistance",
        expected: "> 100 MΩ",
        actual: "> 100 MΩ",
        status: CheckStatus::Passed,
        source: "iQMS Standards",
    },
];

/// Result of comparing an embedded image against reference material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAnalysisResult {
    pub kind: &'static str,
    pub status: CheckStatus,
    /// Percentage in `[0, 100]`.
    pub confidence: u8,
    pub description: &'static str,
}

pub const IMAGE_ANALYSIS: &[ImageAnalysisResult] = &[
    ImageAnalysisResult {
        kind: "Product Photo",
        status: CheckStatus::Passed,
        confidence: 94,
        description: "Product matches reference images from drawing database",
    },
    ImageAnalysisResult {
        kind: "Engineering Drawing",
        status: CheckStatus::Passed,
        confidence: 91,
        description: "Dimensional specifications match CAD references",
    },
    ImageAnalysisResult {
        kind: "Test Setup",
        status: CheckStatus::Warning,
        confidence: 78,
        description: "Test configuration differs slightly from standard setup",
    },
];

/// Per-status counts over a result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
}

pub fn summarize(results: &[ValidationResult]) -> Summary {
    Summary {
        passed: count_status(results, CheckStatus::Passed),
        failed: count_status(results, CheckStatus::Failed),
        warnings: count_status(results, CheckStatus::Warning),
    }
}

fn count_status(results: &[ValidationResult], status: CheckStatus) -> usize {
    results.iter().filter(|r| r.status == status).count()
}

/// Field-name keywords that select the electrical subset.
const ELECTRICAL_KEYWORDS: [&str; 3] = ["Voltage", "Power", "Resistance"];

/// The electrical tab shows the validation results whose field name mentions
/// voltage, power, or resistance.
pub fn electrical_results(results: &[ValidationResult]) -> Vec<&ValidationResult> {
    results
        .iter()
        .filter(|r| ELECTRICAL_KEYWORDS.iter().any(|key| r.field.contains(key)))
        .collect()
}

/// Name used when no document has been uploaded yet.
pub const SAMPLE_DOCUMENT_NAME: &str = "Ceramic_Heater_FAIR_Rev_C.pdf";

/// Header block of the analysis view and the exported report.
#[derive(Debug, Clone)]
pub struct DocumentOverview {
    pub id: &'static str,
    pub name: String,
    pub commodity: &'static str,
    pub uploaded: String,
    pub processed: &'static str,
    pub overall_status: CheckStatus,
    /// Percentage in `[0, 100]`.
    pub confidence: u8,
}

/// Overview for the sample document, borrowing the published document's name
/// and upload time when one exists.
pub fn document_overview(document: Option<&DocumentInfo>) -> DocumentOverview {
    DocumentOverview {
        id: "FAIR-2024-0088",
        name: document
            .map(|doc| doc.name.clone())
            .unwrap_or_else(|| SAMPLE_DOCUMENT_NAME.to_string()),
        commodity: "Ceramic Heater Assembly",
        uploaded: document
            .map(|doc| doc.uploaded_at.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "2024-01-15 14:32:00".to_string()),
        processed: "2024-01-15 14:34:23",
        overall_status: CheckStatus::Failed,
        confidence: 87,
    }
}

/// One KPI card on the dashboard.
#[derive(Debug, Clone)]
pub struct Kpi {
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: &'static str,
    pub trend: f64,
    pub trend_is_positive: bool,
}

pub const KPIS: &[Kpi] = &[
    Kpi {
        title: "Documents Processed Today",
        value: "247",
        subtitle: "Total FAIR documents",
        trend: 12.0,
        trend_is_positive: true,
    },
    Kpi {
        title: "Validation Pass Rate",
        value: "94.2%",
        subtitle: "Documents passed validation",
        trend: 3.1,
        trend_is_positive: true,
    },
    Kpi {
        title: "Failed Validations",
        value: "14",
        subtitle: "Require manual review",
        trend: -8.0,
        trend_is_positive: true,
    },
    Kpi {
        title: "Average Processing Time",
        value: "2.3 min",
        subtitle: "Per document",
        trend: -15.0,
        trend_is_positive: true,
    },
];

#[derive(Debug, Clone)]
pub struct FailureReason {
    pub reason: &'static str,
    pub count: u32,
    /// Percentage in `[0, 100]`.
    pub percentage: u8,
}

pub const FAILURE_REASONS: &[FailureReason] = &[
    FailureReason {
        reason: "Specification Mismatch",
        count: 8,
        percentage: 57,
    },
    FailureReason {
        reason: "Drawing Inconsistency",
        count: 4,
        percentage: 29,
    },
    FailureReason {
        reason: "Missing Test Results",
        count: 2,
        percentage: 14,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentStatus {
    Passed,
    Failed,
    Reviewing,
}

impl RecentStatus {
    pub fn label(self) -> &'static str {
        match self {
            RecentStatus::Passed => "passed",
            RecentStatus::Failed => "failed",
            RecentStatus::Reviewing => "reviewing",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecentDocument {
    pub id: &'static str,
    pub commodity: &'static str,
    pub status: RecentStatus,
    pub time: &'static str,
}

pub const RECENT_DOCUMENTS: &[RecentDocument] = &[
    RecentDocument {
        id: "FAIR-2024-0089",
        commodity: "RF Power Module",
        status: RecentStatus::Passed,
        time: "2 min ago",
    },
    RecentDocument {
        id: "FAIR-2024-0088",
        commodity: "Ceramic Heater",
        status: RecentStatus::Failed,
        time: "5 min ago",
    },
    RecentDocument {
        id: "FAIR-2024-0087",
        commodity: "Vacuum Sensor",
        status: RecentStatus::Passed,
        time: "8 min ago",
    },
    RecentDocument {
        id: "FAIR-2024-0086",
        commodity: "Control Board",
        status: RecentStatus::Passed,
        time: "12 min ago",
    },
    RecentDocument {
        id: "FAIR-2024-0085",
        commodity: "Gas Line Assembly",
        status: RecentStatus::Reviewing,
        time: "15 min ago",
    },
];

/// Systems the validator claims to check against. Labels only; there is no
/// live integration behind them.
#[derive(Debug, Clone)]
pub struct IntegrationSource {
    pub name: &'static str,
    pub description: &'static str,
}

pub const INTEGRATION_SOURCES: &[IntegrationSource] = &[
    IntegrationSource {
        name: "SAP",
        description: "Material specifications",
    },
    IntegrationSource {
        name: "PowerBI",
        description: "Analytics & reporting",
    },
    IntegrationSource {
        name: "iPLM",
        description: "Product lifecycle data",
    },
    IntegrationSource {
        name: "iQMS",
        description: "Quality management",
    },
    IntegrationSource {
        name: "MyLam",
        description: "Lam Research portal",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    #[test]
    fn summary_counts_match_filtered_sets() {
        let summary = summarize(VALIDATION_RESULTS);
        assert_eq!(summary.passed, 4);
        assert_eq!(summary.warnings, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(
            summary.passed + summary.warnings + summary.failed,
            VALIDATION_RESULTS.len(),
            "statuses must partition the table"
        );
    }

    #[test]
    fn electrical_subset_is_exact() {
        let fields: Vec<&str> = electrical_results(VALIDATION_RESULTS)
            .iter()
            .map(|r| r.field)
            .collect();
        assert_eq!(fields, ["Power Rating", "Voltage Rating", "Resistance Value"]);
    }

    #[test]
    fn overview_defaults_to_sample_document() {
        let overview = document_overview(None);
        assert_eq!(overview.id, "FAIR-2024-0088");
        assert_eq!(overview.name, SAMPLE_DOCUMENT_NAME);
        assert_eq!(overview.uploaded, "2024-01-15 14:32:00");
    }

    #[test]
    fn overview_borrows_published_document() {
        let uploaded_at = Utc.with_ymd_and_hms(2024, 3, 2, 9, 30, 0).unwrap();
        let info = DocumentInfo {
            name: "Vacuum_Sensor_FAIR.pdf".to_string(),
            path: PathBuf::from("/tmp/Vacuum_Sensor_FAIR.pdf"),
            uploaded_at,
        };

        let overview = document_overview(Some(&info));
        assert_eq!(overview.name, "Vacuum_Sensor_FAIR.pdf");
        assert_eq!(overview.uploaded, "2024-03-02 09:30:00");
        // The validation numbers stay sample data regardless of the upload.
        assert_eq!(overview.confidence, 87);
    }

    #[test]
    fn image_confidence_is_a_percentage() {
        assert!(IMAGE_ANALYSIS.iter().all(|entry| entry.confidence <= 100));
    }
}
