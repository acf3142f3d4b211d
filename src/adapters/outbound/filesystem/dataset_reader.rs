use crate::comparison::services::DatasetFormat;
use crate::ports::outbound::{CatalogSource, RawDataset};
use crate::shared::error::DashboardError;
use crate::shared::security::{validate_input_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// FileSystemDatasetReader adapter reading a dataset file
///
/// The format follows the file extension (`.json`, `.toml`, `.yml`/`.yaml`).
/// Reads reject symbolic links, non-regular files and files over
/// [`MAX_INPUT_FILE_SIZE`].
pub struct FileSystemDatasetReader {
    path: PathBuf,
}

impl FileSystemDatasetReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CatalogSource for FileSystemDatasetReader {
    fn read_dataset(&self) -> Result<RawDataset> {
        if !self.path.exists() {
            return Err(DashboardError::FileReadError {
                path: self.path.clone(),
                details: "Dataset file does not exist".to_string(),
            }
            .into());
        }

        validate_input_file(&self.path, "dataset", MAX_INPUT_FILE_SIZE)?;

        let content = fs::read_to_string(&self.path).map_err(|e| DashboardError::FileReadError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        Ok(RawDataset {
            content,
            format: DatasetFormat::from_path(&self.path),
            origin: self.path.display().to_string(),
        })
    }
}
