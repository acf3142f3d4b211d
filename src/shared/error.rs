use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between argument mistakes
/// and failures while loading or writing the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - dashboard rendered (possibly with warnings)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (dataset unreadable, output unwritable, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the dashboard.
///
/// The first five variants form the recoverable taxonomy: they are
/// reported as warnings or notices and never abort a render pass.
/// The remaining variants come from the CLI boundary (file I/O).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DashboardError {
    #[error("Skipped dataset entry '{entry}': {reason}")]
    DataError { entry: String, reason: String },

    #[error("Vendor '{vendor}': cost breakdown sums to {components:.0} but total TCO is {total:.0}")]
    CostInconsistency {
        vendor: String,
        components: f64,
        total: f64,
    },

    #[error("{reason}")]
    ConfigViolation { reason: String },

    #[error("Render target '#{region}' is missing; region skipped")]
    RenderTargetMissing { region: String },

    #[error("Charting library '{library}' is unavailable")]
    ExternalLibraryUnavailable { library: String },

    #[error("Failed to parse dataset: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the dataset is valid JSON, TOML or YAML and has a 'reference' section")]
    DatasetParse { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for value objects and builders
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl DashboardError {
    pub fn data(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        DashboardError::DataError {
            entry: entry.into(),
            reason: reason.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DashboardError::Validation {
            message: message.into(),
        }
    }
}
