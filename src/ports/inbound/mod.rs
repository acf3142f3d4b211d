/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., the
/// interactive session) use to interact with the application core.
pub mod dashboard_port;

pub use dashboard_port::{Action, DashboardPort};
