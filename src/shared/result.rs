/// Type alias for Result with anyhow::Error as the error type.
/// Recoverable dashboard errors are reported, not propagated; only I/O at the
/// CLI boundary travels through this alias.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
