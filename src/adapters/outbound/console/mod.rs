/// Console adapters for user-facing diagnostics
mod diagnostic_reporter;

pub use diagnostic_reporter::StderrDiagnosticReporter;
