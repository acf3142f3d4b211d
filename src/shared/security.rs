use crate::shared::error::DashboardError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a dataset or config file (10 MB).
/// Hand-authored comparison data is a few hundred kilobytes at most.
pub const MAX_INPUT_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that an existing path is not a symbolic link.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// Paths that do not exist yet are accepted.
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };

    if metadata.is_symlink() {
        return Err(DashboardError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Point the option at the real file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that `path` is a readable input file: it must exist, must not be
/// a symlink, must be a regular file and must not exceed `max_size` bytes.
///
/// # Arguments
/// * `path` - The path to validate
/// * `description` - Human readable description ("dataset", "config file")
/// * `max_size` - Maximum allowed size in bytes
pub fn validate_input_file(path: &Path, description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| DashboardError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(DashboardError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("The {} is a symbolic link", description),
            hint: "Symbolic links are not followed; pass the target path directly".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(DashboardError::FileReadError {
            path: path.to_path_buf(),
            details: format!("The {} is not a regular file", description),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(DashboardError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "The {} is too large ({} bytes). Maximum allowed size is {} bytes",
                description,
                metadata.len(),
                max_size
            ),
            hint: "Split the dataset or remove unused entries".to_string(),
        }
        .into());
    }

    Ok(())
}
