/// Inbound adapters (Driving adapters)
///
/// These adapters turn external input into calls on the inbound ports.
pub mod interactive_session;

pub use interactive_session::{Command, InteractiveSession};
