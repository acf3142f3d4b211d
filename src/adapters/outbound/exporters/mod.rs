/// Report exporters implementing the ReportExporter port
mod json_report_exporter;
mod noop_report_exporter;

pub use json_report_exporter::JsonReportExporter;
pub use noop_report_exporter::NoopReportExporter;
