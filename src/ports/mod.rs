/// Port traits at the dashboard's boundaries.
///
/// Inbound: the action surface callers drive the dashboard through.
/// Outbound: dataset source, render target, chart library, exporter, diagnostics.
pub mod inbound;
pub mod outbound;
