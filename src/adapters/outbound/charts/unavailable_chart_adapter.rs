use crate::ports::outbound::{ChartAdapter, ChartHandle, ChartSpec, RenderTarget};
use crate::shared::error::DashboardError;

/// UnavailableChartAdapter stands in for a charting library that is not loaded
///
/// Every construction fails with `ExternalLibraryUnavailable`, which makes the
/// renderer fall back to textual data.
pub struct UnavailableChartAdapter {
    library: String,
}

impl UnavailableChartAdapter {
    pub fn new(library: impl Into<String>) -> Self {
        Self {
            library: library.into(),
        }
    }
}

impl Default for UnavailableChartAdapter {
    fn default() -> Self {
        Self::new("text-charts")
    }
}

impl ChartAdapter for UnavailableChartAdapter {
    fn library(&self) -> &str {
        &self.library
    }

    fn construct(&mut self, _canvas_id: &str, _spec: &ChartSpec) -> Result<ChartHandle, DashboardError> {
        Err(DashboardError::ExternalLibraryUnavailable {
            library: self.library.clone(),
        })
    }

    fn render(&mut self, _handle: ChartHandle, _target: &mut dyn RenderTarget) -> Result<(), DashboardError> {
        Err(DashboardError::ExternalLibraryUnavailable {
            library: self.library.clone(),
        })
    }

    fn destroy(&mut self, _handle: ChartHandle, _target: &mut dyn RenderTarget) {}

    fn live_instances(&self) -> usize {
        0
    }
}
