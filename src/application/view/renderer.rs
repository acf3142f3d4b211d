use super::animation::{AnimationScheduler, CounterAnimation};
use super::charts::ChartRegion;
use super::layout::{self, Region, NOTICES_ID};
use super::regions;
use crate::application::read_models::{Element, Node, Notice};
use crate::comparison::domain::{ConfigState, DerivedMetrics, Tab};
use crate::ports::outbound::render_target::missing;
use crate::ports::outbound::{ChartAdapter, ChartHandle, ChartSpec, RenderTarget};
use crate::shared::error::DashboardError;
use std::collections::{HashMap, HashSet};

/// Frames a KPI counter takes to reach its value
pub const DEFAULT_ANIMATION_STEPS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererOptions {
    /// Count KPI values up from zero whenever they change
    pub animate_counters: bool,
    pub animation_steps: u32,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            animate_counters: false,
            animation_steps: DEFAULT_ANIMATION_STEPS,
        }
    }
}

/// What a single update pass did to the document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderStats {
    /// Regions whose content was replaced
    pub patched: usize,
    /// Regions already showing the desired content
    pub unchanged: usize,
    /// Regions or canvases that could not be found
    pub skipped: usize,
    pub charts_constructed: usize,
    pub charts_destroyed: usize,
    /// Chart instances alive after the pass
    pub live_charts: usize,
    pub warnings: Vec<DashboardError>,
}

impl RenderStats {
    /// True when the pass left the document untouched
    pub fn is_noop(&self) -> bool {
        self.patched == 0 && self.charts_constructed == 0 && self.charts_destroyed == 0
    }
}

/// Lifecycle of the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Uninitialized,
    Rendered { container_id: String },
}

/// What occupies a chart region's canvas
#[derive(Debug)]
enum ChartSlot {
    Live { handle: ChartHandle, spec: ChartSpec },
    /// The library could not construct; the canvas lists the data as text
    Fallback(ChartSpec),
}

impl ChartSlot {
    fn spec(&self) -> &ChartSpec {
        match self {
            ChartSlot::Live { spec, .. } | ChartSlot::Fallback(spec) => spec,
        }
    }
}

/// ViewRenderer reconciles the document with the derived metrics
///
/// Each region remembers the nodes it last wrote; `update` only patches a
/// region whose desired nodes differ, so repeating an update is a no-op.
/// Chart instances are owned here: one per chart region at most, and only
/// for the active panel.
pub struct ViewRenderer {
    charts: Box<dyn ChartAdapter>,
    options: RendererOptions,
    state: ViewState,
    rendered: HashMap<Region, Vec<Node>>,
    chart_slots: HashMap<ChartRegion, ChartSlot>,
    notices: Option<Vec<Node>>,
    last_active: Option<Tab>,
    removed_panels: HashSet<Tab>,
    library_warned: bool,
    animations: AnimationScheduler,
}

impl ViewRenderer {
    pub fn new(charts: Box<dyn ChartAdapter>, options: RendererOptions) -> Self {
        Self {
            charts,
            options,
            state: ViewState::Uninitialized,
            rendered: HashMap::new(),
            chart_slots: HashMap::new(),
            notices: None,
            last_active: None,
            removed_panels: HashSet::new(),
            library_warned: false,
            animations: AnimationScheduler::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self.state, ViewState::Rendered { .. })
    }

    pub fn chart_library(&self) -> &str {
        self.charts.library()
    }

    /// Mounts the dashboard skeleton into `container_id`
    ///
    /// # Errors
    /// [`DashboardError::RenderTargetMissing`] when the container does not
    /// exist; the view then stays uninitialized.
    pub fn initialize(
        &mut self,
        target: &mut dyn RenderTarget,
        container_id: &str,
    ) -> Result<(), DashboardError> {
        if !target.contains(container_id) {
            return Err(missing(container_id));
        }
        if self.is_rendered() {
            self.teardown(target);
        }
        target.replace_children(container_id, vec![layout::skeleton().into()])?;
        self.state = ViewState::Rendered {
            container_id: container_id.to_string(),
        };
        Ok(())
    }

    /// Brings the document in line with `state` and `derived`
    pub fn update(
        &mut self,
        target: &mut dyn RenderTarget,
        state: &ConfigState,
        derived: &DerivedMetrics,
    ) -> RenderStats {
        let mut stats = RenderStats::default();
        if !self.is_rendered() {
            stats
                .warnings
                .push(missing(layout::DASHBOARD_ROOT_ID));
            return stats;
        }

        let active = state.active_tab();
        self.activate_tab(target, active, &mut stats);
        for region in Region::ALL {
            self.patch_region(target, region, derived, &mut stats);
        }
        for chart in ChartRegion::ALL {
            if self.removed_panels.contains(&chart.tab()) {
                continue;
            }
            if chart.tab() == active {
                self.reconcile_chart(target, chart, derived, &mut stats);
            } else if self.release_chart(target, chart) {
                stats.charts_destroyed += 1;
            }
        }

        stats.live_charts = self.charts.live_instances();
        stats
    }

    /// Replaces the notice bar when the notices differ from those shown
    ///
    /// Returns whether the document was touched.
    pub fn show_notices(
        &mut self,
        target: &mut dyn RenderTarget,
        notices: &[Notice],
    ) -> Result<bool, DashboardError> {
        if !self.is_rendered() {
            return Ok(false);
        }
        let desired: Vec<Node> = notices.iter().map(Notice::to_node).collect();
        if self.notices.as_ref() == Some(&desired) {
            return Ok(false);
        }
        target.replace_children(NOTICES_ID, desired.clone())?;
        self.notices = Some(desired);
        Ok(true)
    }

    /// Destroys the charts and animations of `tab` and removes its panel
    ///
    /// Returns the number of charts destroyed.
    pub fn teardown_panel(
        &mut self,
        target: &mut dyn RenderTarget,
        tab: Tab,
    ) -> Result<usize, DashboardError> {
        let destroyed = ChartRegion::in_tab(tab)
            .filter(|chart| self.release_chart(target, *chart))
            .count();
        self.animations.cancel_tab(tab);
        for region in Region::in_tab(tab) {
            self.rendered.remove(&region);
        }
        self.removed_panels.insert(tab);
        target.remove(&tab.panel_id())?;
        Ok(destroyed)
    }

    /// Releases every chart and animation and empties the container
    pub fn teardown(&mut self, target: &mut dyn RenderTarget) {
        for chart in ChartRegion::ALL {
            self.release_chart(target, chart);
        }
        self.animations.cancel_all();
        if let ViewState::Rendered { container_id } = &self.state {
            // The container may have been removed by someone else
            let _ = target.replace_children(container_id, Vec::new());
        }
        self.rendered.clear();
        self.notices = None;
        self.last_active = None;
        self.removed_panels.clear();
        self.state = ViewState::Uninitialized;
    }

    /// Advances counter animations by one frame
    pub fn tick(&mut self, target: &mut dyn RenderTarget) -> usize {
        self.animations.tick(target)
    }

    pub fn pending_animations(&self) -> usize {
        self.animations.pending()
    }

    pub fn live_charts(&self) -> usize {
        self.charts.live_instances()
    }

    fn activate_tab(&mut self, target: &mut dyn RenderTarget, active: Tab, stats: &mut RenderStats) {
        if self.last_active == Some(active) {
            return;
        }
        for tab in Tab::ALL {
            if self.removed_panels.contains(&tab) {
                continue;
            }
            let enabled = tab == active;
            for id in [tab.button_id(), tab.panel_id()] {
                if let Err(e) = target.set_class(&id, "active", enabled) {
                    stats.warnings.push(e);
                }
            }
        }
        self.last_active = Some(active);
    }

    fn patch_region(
        &mut self,
        target: &mut dyn RenderTarget,
        region: Region,
        derived: &DerivedMetrics,
        stats: &mut RenderStats,
    ) {
        if region.tab().is_some_and(|t| self.removed_panels.contains(&t)) {
            return;
        }
        let desired = regions::render(region, derived);
        if self.rendered.get(&region) == Some(&desired) {
            stats.unchanged += 1;
            return;
        }

        match target.replace_children(region.id(), desired.clone()) {
            Ok(()) => {
                stats.patched += 1;
                self.rendered.insert(region, desired);
                if self.options.animate_counters {
                    self.start_counter(target, region, derived);
                }
            }
            Err(e) => {
                stats.skipped += 1;
                stats.warnings.push(e);
                self.rendered.remove(&region);
            }
        }
    }

    fn start_counter(&mut self, target: &mut dyn RenderTarget, region: Region, derived: &DerivedMetrics) {
        let Some((element_id, value, format)) = regions::counter(region, derived) else {
            return;
        };
        if target
            .replace_children(&element_id, vec![Node::text(format.render(0.0))])
            .is_ok()
        {
            self.animations.schedule(CounterAnimation::new(
                element_id,
                region.tab(),
                value,
                format,
                self.options.animation_steps,
            ));
        }
    }

    fn reconcile_chart(
        &mut self,
        target: &mut dyn RenderTarget,
        chart: ChartRegion,
        derived: &DerivedMetrics,
        stats: &mut RenderStats,
    ) {
        let spec = chart.spec(derived);
        if self.chart_slots.get(&chart).map(ChartSlot::spec) == Some(&spec) {
            return;
        }
        if self.release_chart(target, chart) {
            stats.charts_destroyed += 1;
        }

        let canvas_id = chart.canvas_id();
        if !target.contains(&canvas_id) {
            stats.skipped += 1;
            stats.warnings.push(missing(&canvas_id));
            return;
        }

        let failure = match self.charts.construct(&canvas_id, &spec) {
            Ok(handle) => match self.charts.render(handle, target) {
                Ok(()) => {
                    stats.charts_constructed += 1;
                    self.chart_slots.insert(chart, ChartSlot::Live { handle, spec });
                    return;
                }
                Err(e) => {
                    self.charts.destroy(handle, target);
                    e
                }
            },
            Err(e) => e,
        };

        if !self.library_warned {
            stats.warnings.push(failure);
            self.library_warned = true;
        }
        if let Err(e) = target.replace_children(&canvas_id, vec![fallback_list(&spec)]) {
            stats.warnings.push(e);
            return;
        }
        self.chart_slots.insert(chart, ChartSlot::Fallback(spec));
    }

    /// Drops the chart region's slot; returns true when a live chart was
    /// destroyed
    fn release_chart(&mut self, target: &mut dyn RenderTarget, chart: ChartRegion) -> bool {
        match self.chart_slots.remove(&chart) {
            Some(ChartSlot::Live { handle, .. }) => {
                self.charts.destroy(handle, target);
                true
            }
            Some(ChartSlot::Fallback(_)) | None => false,
        }
    }
}

fn fallback_list(spec: &ChartSpec) -> Node {
    Element::new("ul")
        .class("chart-fallback")
        .attr("aria-label", spec.title.as_str())
        .children(
            spec.fallback_rows()
                .into_iter()
                .map(|row| Node::from(Element::new("li").text(row))),
        )
        .into()
}
