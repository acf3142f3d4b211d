/// Mock implementations for testing
mod mock_catalog_source;
mod mock_diagnostic_reporter;
mod recording_chart_adapter;

pub use mock_catalog_source::MockCatalogSource;
pub use mock_diagnostic_reporter::MockDiagnosticReporter;
pub use recording_chart_adapter::{ChartEvents, RecordingChartAdapter};
