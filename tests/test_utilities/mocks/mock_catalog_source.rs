use nac_dashboard::prelude::*;
use std::path::Path;

/// Mock CatalogSource serving a fixed dataset
pub struct MockCatalogSource {
    content: String,
    format: DatasetFormat,
    should_fail: bool,
}

impl MockCatalogSource {
    pub fn new(content: impl Into<String>, format: DatasetFormat) -> Self {
        Self {
            content: content.into(),
            format,
            should_fail: false,
        }
    }

    /// Loads a file from `tests/fixtures`
    pub fn fixture(name: &str) -> Self {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name);
        let content = std::fs::read_to_string(&path).unwrap();
        Self::new(content, DatasetFormat::from_path(&path))
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            format: DatasetFormat::Json,
            should_fail: true,
        }
    }
}

impl CatalogSource for MockCatalogSource {
    fn read_dataset(&self) -> Result<RawDataset> {
        if self.should_fail {
            anyhow::bail!("Mock dataset read failure");
        }
        Ok(RawDataset {
            content: self.content.clone(),
            format: self.format,
            origin: "mock".to_string(),
        })
    }
}
