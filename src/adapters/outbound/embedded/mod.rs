//! Dataset compiled into the binary.

use crate::comparison::services::DatasetFormat;
use crate::ports::outbound::{CatalogSource, RawDataset};
use crate::shared::Result;

const DEFAULT_DATASET: &str = include_str!("../../../../data/default_dataset.json");

/// EmbeddedDatasetSource adapter serving the built-in vendor dataset
pub struct EmbeddedDatasetSource;

impl EmbeddedDatasetSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmbeddedDatasetSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for EmbeddedDatasetSource {
    fn read_dataset(&self) -> Result<RawDataset> {
        Ok(RawDataset {
            content: DEFAULT_DATASET.to_string(),
            format: DatasetFormat::Json,
            origin: "built-in dataset".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::services::CatalogLoader;

    #[test]
    fn test_embedded_dataset_loads_cleanly() {
        let raw = EmbeddedDatasetSource::new().read_dataset().unwrap();
        let loaded = CatalogLoader::load(&raw.content, raw.format).unwrap();

        assert!(loaded.warnings.is_empty(), "{:?}", loaded.warnings);
        assert_eq!(loaded.vendors.len(), 10);
        assert_eq!(loaded.vendors.iter().next().unwrap().id().as_str(), "portnox");
        assert!(loaded.industries.len() >= 10);
    }
}
