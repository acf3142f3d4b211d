use crate::application::read_models::ReportSnapshot;
use crate::shared::Result;

/// ReportExporter port receiving a snapshot of the current dashboard
pub trait ReportExporter {
    /// Exports the snapshot
    ///
    /// # Errors
    /// Returns an error if serialization or the underlying output fails
    fn export(&self, snapshot: &ReportSnapshot) -> Result<()>;
}
