/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, document, charts, console).
pub mod catalog_source;
pub mod chart_adapter;
pub mod diagnostic_reporter;
pub mod output_presenter;
pub mod render_target;
pub mod report_exporter;

pub use catalog_source::{CatalogSource, RawDataset};
pub use chart_adapter::{ChartAdapter, ChartHandle, ChartKind, ChartPoint, ChartSpec};
pub use diagnostic_reporter::DiagnosticReporter;
pub use output_presenter::OutputPresenter;
pub use render_target::{RenderTarget, TargetResult};
pub use report_exporter::ReportExporter;
