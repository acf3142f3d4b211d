use nac_dashboard::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Construct/destroy log shared between a test and its adapter
#[derive(Default, Clone)]
pub struct ChartEvents {
    inner: Arc<Mutex<Vec<String>>>,
}

impl ChartEvents {
    pub fn all(&self) -> Vec<String> {
        self.inner.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.all().iter().filter(|e| e.starts_with(prefix)).count()
    }

    pub fn clear(&self) {
        self.inner.lock().unwrap().clear();
    }

    fn push(&self, event: String) {
        self.inner.lock().unwrap().push(event);
    }
}

/// Mock ChartAdapter that records every lifecycle call
///
/// Rendering writes the chart title into the canvas.
pub struct RecordingChartAdapter {
    events: ChartEvents,
    live: HashMap<ChartHandle, (String, String)>,
    next_handle: u64,
}

impl RecordingChartAdapter {
    pub fn new(events: ChartEvents) -> Self {
        Self {
            events,
            live: HashMap::new(),
            next_handle: 1,
        }
    }
}

impl ChartAdapter for RecordingChartAdapter {
    fn library(&self) -> &str {
        "recording"
    }

    fn construct(
        &mut self,
        canvas_id: &str,
        spec: &ChartSpec,
    ) -> std::result::Result<ChartHandle, DashboardError> {
        let handle = ChartHandle(self.next_handle);
        self.next_handle += 1;
        self.live
            .insert(handle, (canvas_id.to_string(), spec.title.clone()));
        self.events.push(format!("construct {}", canvas_id));
        Ok(handle)
    }

    fn render(
        &mut self,
        handle: ChartHandle,
        target: &mut dyn RenderTarget,
    ) -> std::result::Result<(), DashboardError> {
        let (canvas_id, title) = self
            .live
            .get(&handle)
            .cloned()
            .ok_or_else(|| DashboardError::validation("unknown chart handle"))?;
        target.replace_children(&canvas_id, vec![Node::text(title)])
    }

    fn destroy(&mut self, handle: ChartHandle, target: &mut dyn RenderTarget) {
        if let Some((canvas_id, _)) = self.live.remove(&handle) {
            let _ = target.replace_children(&canvas_id, Vec::new());
            self.events.push(format!("destroy {}", canvas_id));
        }
    }

    fn live_instances(&self) -> usize {
        self.live.len()
    }
}
