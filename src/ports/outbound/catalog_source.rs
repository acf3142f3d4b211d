use crate::comparison::services::DatasetFormat;
use crate::shared::Result;

/// Raw dataset text together with its format and a printable origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDataset {
    pub content: String,
    pub format: DatasetFormat,
    pub origin: String,
}

/// CatalogSource port for obtaining the vendor dataset
///
/// This port abstracts where the dataset comes from (a file, the copy
/// embedded in the binary, a test fixture).
pub trait CatalogSource {
    /// Reads the raw dataset
    ///
    /// # Errors
    /// Returns an error if the dataset cannot be read at all. Parsing is
    /// left to the caller.
    fn read_dataset(&self) -> Result<RawDataset>;
}
