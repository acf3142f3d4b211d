use crate::application::read_models::ReportSnapshot;
use crate::ports::outbound::{DiagnosticReporter, ReportExporter};
use crate::shared::Result;

/// NoopReportExporter adapter that only logs what would have been exported
pub struct NoopReportExporter<R: DiagnosticReporter> {
    reporter: R,
}

impl<R: DiagnosticReporter> NoopReportExporter<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }
}

impl<R: DiagnosticReporter> ReportExporter for NoopReportExporter<R> {
    fn export(&self, snapshot: &ReportSnapshot) -> Result<()> {
        self.reporter.report(&format!(
            "Report {} prepared ({} vendors); no exporter is configured, use --format json to write it",
            snapshot.metadata.serial_number,
            snapshot.metrics.vendors.len()
        ));
        Ok(())
    }
}
