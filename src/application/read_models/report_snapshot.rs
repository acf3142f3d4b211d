use crate::comparison::domain::{ConfigState, DerivedMetrics};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// Identifying metadata of an exported report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    pub serial_number: String,
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
}

impl ReportMetadata {
    /// Metadata with the current timestamp and a fresh serial number
    pub fn generate(tool_name: &str, tool_version: &str) -> Self {
        Self {
            serial_number: format!("urn:uuid:{}", Uuid::new_v4()),
            generated_at: Utc::now().to_rfc3339(),
            tool_name: tool_name.to_string(),
            tool_version: tool_version.to_string(),
        }
    }
}

/// Frozen copy of the view state and its metrics, handed to a ReportExporter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSnapshot {
    pub metadata: ReportMetadata,
    pub state: ConfigState,
    pub metrics: DerivedMetrics,
}

impl ReportSnapshot {
    pub fn new(state: ConfigState, metrics: DerivedMetrics) -> Self {
        Self {
            metadata: ReportMetadata::generate(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            state,
            metrics,
        }
    }
}
