use crate::application::read_models::ValueFormat;
use crate::ports::outbound::RenderTarget;
use crate::shared::error::DashboardError;

/// Visual form of a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// One vertical bar per point
    Bar,
    /// One horizontal bar per point
    HorizontalBar,
}

/// A labelled value in a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    /// Drawn with emphasis (the focus vendor, the best value)
    pub highlighted: bool,
}

/// Everything a chart library needs to draw one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub format: ValueFormat,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    /// Text rows listing the data; shown when no chart can be drawn
    pub fn fallback_rows(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|p| format!("{}: {}", p.label, self.format.render(p.value)))
            .collect()
    }
}

/// Opaque reference to a live chart instance owned by an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub u64);

/// ChartAdapter port wrapping an external charting library
///
/// The contract is construct, render, destroy: a handle returned by
/// `construct` is live until passed to `destroy`. Callers must destroy a
/// chart before constructing its replacement on the same canvas.
pub trait ChartAdapter {
    /// Name of the wrapped library
    fn library(&self) -> &str;

    /// Creates a chart instance bound to the canvas element `canvas_id`
    ///
    /// # Errors
    /// [`DashboardError::ExternalLibraryUnavailable`] when the library is not
    /// loaded
    fn construct(&mut self, canvas_id: &str, spec: &ChartSpec)
        -> Result<ChartHandle, DashboardError>;

    /// Draws the chart into its canvas
    fn render(
        &mut self,
        handle: ChartHandle,
        target: &mut dyn RenderTarget,
    ) -> Result<(), DashboardError>;

    /// Releases the instance and clears its canvas if the canvas still exists
    fn destroy(&mut self, handle: ChartHandle, target: &mut dyn RenderTarget);

    /// Number of instances constructed and not yet destroyed
    fn live_instances(&self) -> usize;
}
