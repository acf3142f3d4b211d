/// Adapters module for hexagonal architecture
///
/// Inbound adapters drive the application through its inbound ports;
/// outbound adapters implement the outbound ports.
pub mod inbound;
pub mod outbound;
