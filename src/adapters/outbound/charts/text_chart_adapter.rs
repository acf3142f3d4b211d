use crate::application::read_models::{Element, Node};
use crate::ports::outbound::{ChartAdapter, ChartHandle, ChartKind, ChartSpec, RenderTarget};
use crate::shared::error::DashboardError;
use std::collections::HashMap;

/// Partial blocks for the fractional end of a bar, in eighths
const BAR_EIGHTHS: [char; 9] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

/// Width of the longest bar in cells
const DEFAULT_BAR_WIDTH: usize = 24;

struct Instance {
    canvas_id: String,
    spec: ChartSpec,
}

/// TextChartAdapter draws charts as rows of block characters
///
/// Every bar is scaled against the largest value of its chart. Highlighted
/// points carry the `highlight` class so stylesheets can pick them out.
pub struct TextChartAdapter {
    instances: HashMap<ChartHandle, Instance>,
    next_handle: u64,
    bar_width: usize,
}

impl TextChartAdapter {
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
            next_handle: 1,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(1);
        self
    }

    /// Bar of `value / max` of the full width, with eighth-cell resolution
    fn bar(&self, value: f64, max: f64) -> String {
        if max <= 0.0 || value <= 0.0 {
            return String::new();
        }
        let eighths = ((value / max).min(1.0) * (self.bar_width * 8) as f64).round() as usize;
        let mut bar = "█".repeat(eighths / 8);
        if eighths % 8 != 0 {
            bar.push(BAR_EIGHTHS[eighths % 8]);
        }
        bar
    }

    fn draw(&self, spec: &ChartSpec) -> Vec<Node> {
        let max = spec.points.iter().map(|p| p.value).fold(0.0, f64::max);
        let orientation = match spec.kind {
            ChartKind::Bar => "chart-bar",
            ChartKind::HorizontalBar => "chart-hbar",
        };

        let rows = spec.points.iter().map(|point| {
            Element::new("div")
                .class("chart-row")
                .class_if("highlight", point.highlighted)
                .child(Element::new("span").class("chart-label").text(&point.label))
                .child(
                    Element::new("span")
                        .class("chart-fill")
                        .text(self.bar(point.value, max)),
                )
                .child(
                    Element::new("span")
                        .class("chart-value")
                        .text(spec.format.render(point.value)),
                )
                .into()
        });

        vec![Element::new("figure")
            .class("text-chart")
            .class(orientation)
            .child(Element::new("figcaption").text(&spec.title))
            .children(rows)
            .into()]
    }
}

impl Default for TextChartAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartAdapter for TextChartAdapter {
    fn library(&self) -> &str {
        "text-charts"
    }

    fn construct(&mut self, canvas_id: &str, spec: &ChartSpec) -> Result<ChartHandle, DashboardError> {
        let handle = ChartHandle(self.next_handle);
        self.next_handle += 1;
        self.instances.insert(
            handle,
            Instance {
                canvas_id: canvas_id.to_string(),
                spec: spec.clone(),
            },
        );
        Ok(handle)
    }

    fn render(&mut self, handle: ChartHandle, target: &mut dyn RenderTarget) -> Result<(), DashboardError> {
        let instance = self.instances.get(&handle).ok_or_else(|| {
            DashboardError::validation(format!("chart handle {} is not live", handle.0))
        })?;
        let nodes = self.draw(&instance.spec);
        target.replace_children(&instance.canvas_id, nodes)
    }

    fn destroy(&mut self, handle: ChartHandle, target: &mut dyn RenderTarget) {
        if let Some(instance) = self.instances.remove(&handle) {
            if target.contains(&instance.canvas_id) {
                // The canvas may be gone already; either way the instance is released
                let _ = target.replace_children(&instance.canvas_id, Vec::new());
            }
        }
    }

    fn live_instances(&self) -> usize {
        self.instances.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::document::{InMemoryDocument, DEFAULT_MOUNT_ID};
    use crate::application::read_models::ValueFormat;
    use crate::ports::outbound::ChartPoint;

    fn spec() -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Bar,
            title: "TCO".to_string(),
            format: ValueFormat::Currency,
            points: vec![
                ChartPoint {
                    label: "A".to_string(),
                    value: 100_000.0,
                    highlighted: true,
                },
                ChartPoint {
                    label: "B".to_string(),
                    value: 50_000.0,
                    highlighted: false,
                },
            ],
        }
    }

    fn document_with_canvas() -> InMemoryDocument {
        let mut doc = InMemoryDocument::default();
        doc.append_child(DEFAULT_MOUNT_ID, Element::new("div").with_id("canvas").into())
            .unwrap();
        doc
    }

    #[test]
    fn test_construct_render_destroy() {
        let mut doc = document_with_canvas();
        let mut adapter = TextChartAdapter::new().with_bar_width(4);

        let handle = adapter.construct("canvas", &spec()).unwrap();
        assert_eq!(adapter.live_instances(), 1);

        adapter.render(handle, &mut doc).unwrap();
        let text = doc.text_content("canvas").unwrap();
        assert!(text.contains("TCO"));
        assert!(text.contains("A████$100K"));
        assert!(text.contains("B██$50K"));

        adapter.destroy(handle, &mut doc);
        assert_eq!(adapter.live_instances(), 0);
        assert_eq!(doc.text_content("canvas").unwrap(), "");
    }

    #[test]
    fn test_render_missing_canvas_fails() {
        let mut doc = InMemoryDocument::default();
        let mut adapter = TextChartAdapter::new();
        let handle = adapter.construct("canvas", &spec()).unwrap();
        assert!(matches!(
            adapter.render(handle, &mut doc),
            Err(DashboardError::RenderTargetMissing { .. })
        ));
    }

    #[test]
    fn test_destroy_without_canvas_still_releases() {
        let mut doc = InMemoryDocument::default();
        let mut adapter = TextChartAdapter::new();
        let handle = adapter.construct("canvas", &spec()).unwrap();
        adapter.destroy(handle, &mut doc);
        assert_eq!(adapter.live_instances(), 0);
    }

    #[test]
    fn test_fractional_bar() {
        let adapter = TextChartAdapter::new().with_bar_width(2);
        // 0.5625 of 16 eighths = 9 eighths: one full cell and one eighth
        assert_eq!(adapter.bar(56.25, 100.0), "█▏");
        assert_eq!(adapter.bar(0.0, 100.0), "");
    }

    #[test]
    fn test_handles_are_unique() {
        let mut adapter = TextChartAdapter::new();
        let a = adapter.construct("x", &spec()).unwrap();
        let b = adapter.construct("y", &spec()).unwrap();
        assert_ne!(a, b);
    }
}
