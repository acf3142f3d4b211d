use crate::application::read_models::{Node, ValueFormat};
use crate::comparison::domain::Tab;
use crate::ports::outbound::RenderTarget;

/// A KPI value counting up from zero to its target
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    pub element_id: String,
    /// Panel owning the element; cancelled when the panel is torn down
    pub tab: Option<Tab>,
    pub target_value: f64,
    pub format: ValueFormat,
    pub steps: u32,
    frame: u32,
}

impl CounterAnimation {
    pub fn new(
        element_id: impl Into<String>,
        tab: Option<Tab>,
        target_value: f64,
        format: ValueFormat,
        steps: u32,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            tab,
            target_value,
            format,
            steps: steps.max(1),
            frame: 0,
        }
    }

    pub fn remaining_frames(&self) -> u32 {
        self.steps - self.frame
    }

    /// Text shown at `frame`; the last frame shows the exact target
    fn text_at(&self, frame: u32) -> String {
        let value = if frame >= self.steps {
            self.target_value
        } else {
            self.target_value * frame as f64 / self.steps as f64
        };
        self.format.render(value)
    }
}

/// AnimationScheduler owns every pending counter animation
///
/// Frames are advanced explicitly by [`AnimationScheduler::tick`]. An
/// animation whose element has left the document is cancelled on its next
/// frame instead of writing to a detached node.
#[derive(Debug, Default)]
pub struct AnimationScheduler {
    animations: Vec<CounterAnimation>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `animation`, replacing any animation on the same element
    pub fn schedule(&mut self, animation: CounterAnimation) {
        self.animations
            .retain(|a| a.element_id != animation.element_id);
        self.animations.push(animation);
    }

    /// Advances every animation by one frame and returns how many frames
    /// were applied
    pub fn tick(&mut self, target: &mut dyn RenderTarget) -> usize {
        let mut applied = 0;
        self.animations.retain_mut(|animation| {
            animation.frame += 1;
            let text = animation.text_at(animation.frame);
            if target
                .replace_children(&animation.element_id, vec![Node::text(text)])
                .is_err()
            {
                return false;
            }
            applied += 1;
            animation.frame < animation.steps
        });
        applied
    }

    /// Drops every animation belonging to `tab`
    pub fn cancel_tab(&mut self, tab: Tab) -> usize {
        let before = self.animations.len();
        self.animations.retain(|a| a.tab != Some(tab));
        before - self.animations.len()
    }

    pub fn cancel_all(&mut self) {
        self.animations.clear();
    }

    /// Frames still queued across all animations
    pub fn pending(&self) -> usize {
        self.animations
            .iter()
            .map(|a| a.remaining_frames() as usize)
            .sum()
    }

    pub fn is_idle(&self) -> bool {
        self.animations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::document::{InMemoryDocument, DEFAULT_MOUNT_ID};
    use crate::application::read_models::Element;

    fn document() -> InMemoryDocument {
        let mut doc = InMemoryDocument::default();
        doc.append_child(
            DEFAULT_MOUNT_ID,
            Element::new("span").with_id("kpi-roi-value").text("0%").into(),
        )
        .unwrap();
        doc
    }

    #[test]
    fn test_counts_up_to_target() {
        let mut doc = document();
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(CounterAnimation::new(
            "kpi-roi-value",
            Some(Tab::Overview),
            200.0,
            ValueFormat::Percent,
            4,
        ));
        assert_eq!(scheduler.pending(), 4);

        assert_eq!(scheduler.tick(&mut doc), 1);
        assert_eq!(doc.text_content("kpi-roi-value").unwrap(), "50%");
        scheduler.tick(&mut doc);
        scheduler.tick(&mut doc);
        scheduler.tick(&mut doc);
        assert_eq!(doc.text_content("kpi-roi-value").unwrap(), "200%");
        assert!(scheduler.is_idle());
        assert_eq!(scheduler.tick(&mut doc), 0);
    }

    #[test]
    fn test_missing_element_cancels() {
        let mut doc = InMemoryDocument::default();
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(CounterAnimation::new("gone", None, 10.0, ValueFormat::Percent, 5));
        assert_eq!(scheduler.tick(&mut doc), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_schedule_replaces_same_element() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(CounterAnimation::new("x", None, 10.0, ValueFormat::Percent, 5));
        scheduler.schedule(CounterAnimation::new("x", None, 20.0, ValueFormat::Percent, 3));
        assert_eq!(scheduler.pending(), 3);
    }

    #[test]
    fn test_cancel_tab() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(CounterAnimation::new("a", Some(Tab::Overview), 1.0, ValueFormat::Percent, 5));
        scheduler.schedule(CounterAnimation::new("b", Some(Tab::Security), 1.0, ValueFormat::Percent, 5));
        assert_eq!(scheduler.cancel_tab(Tab::Overview), 1);
        assert_eq!(scheduler.pending(), 5);
        scheduler.cancel_all();
        assert_eq!(scheduler.pending(), 0);
    }
}
