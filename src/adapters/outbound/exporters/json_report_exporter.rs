use crate::application::read_models::ReportSnapshot;
use crate::ports::outbound::{OutputPresenter, ReportExporter};
use crate::shared::Result;
use anyhow::Context;

/// JsonReportExporter adapter serializing snapshots as pretty JSON
pub struct JsonReportExporter {
    presenter: Box<dyn OutputPresenter>,
}

impl JsonReportExporter {
    pub fn new(presenter: Box<dyn OutputPresenter>) -> Self {
        Self { presenter }
    }

    pub fn to_json(snapshot: &ReportSnapshot) -> Result<String> {
        let mut json = serde_json::to_string_pretty(snapshot)
            .context("Failed to serialize report snapshot to JSON")?;
        json.push('\n');
        Ok(json)
    }
}

impl ReportExporter for JsonReportExporter {
    fn export(&self, snapshot: &ReportSnapshot) -> Result<()> {
        let json = Self::to_json(snapshot)?;
        self.presenter.present(&json)
    }
}
