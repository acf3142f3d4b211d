use crate::application::dto::DashboardRequest;
use crate::application::read_models::{Notice, NoticeKind, ReportSnapshot};
use crate::application::view::{RenderStats, ViewRenderer};
use crate::comparison::domain::{
    Applied, BoundedRange, ConfigState, DerivedMetrics, IndustryCatalog, IndustryKey,
    ReferenceScenario, SelectionPolicy, Tab, VendorCatalog, VendorId, ViewPolicy,
};
use crate::comparison::services::{LoadedCatalog, MetricContext, MetricEngine};
use crate::ports::inbound::{Action, DashboardPort};
use crate::ports::outbound::{ChartAdapter, DiagnosticReporter, RenderTarget, ReportExporter};
use crate::shared::error::DashboardError;
use crate::shared::Result;

/// Vendors selected when the request names none and no limit applies
const DEFAULT_SELECTION_SIZE: usize = 4;

/// DashboardController - Applies user actions and keeps the view current
///
/// Owns the view state and routes every mutation through its policies.
/// Each action is followed by exactly one render pass; rejected or adjusted
/// inputs become notices instead of errors.
///
/// # Type Parameters
/// * `T` - RenderTarget implementation the dashboard is drawn into
/// * `R` - DiagnosticReporter implementation
/// * `X` - ReportExporter implementation
pub struct DashboardController<T, R, X> {
    vendors: VendorCatalog,
    industries: IndustryCatalog,
    reference: ReferenceScenario,
    state: ConfigState,
    renderer: ViewRenderer,
    target: T,
    reporter: R,
    exporter: X,
    notices: Vec<Notice>,
    update_count: usize,
}

impl<T, R, X> DashboardController<T, R, X>
where
    T: RenderTarget,
    R: DiagnosticReporter,
    X: ReportExporter,
{
    /// Creates a controller with injected dependencies
    ///
    /// Catalog warnings are reported immediately. The request is resolved
    /// against the catalog; anything that cannot be honoured is queued as a
    /// notice for the first render.
    pub fn new(
        catalog: LoadedCatalog,
        request: DashboardRequest,
        charts: Box<dyn ChartAdapter>,
        target: T,
        reporter: R,
        exporter: X,
    ) -> Self {
        let LoadedCatalog {
            vendors,
            industries,
            reference,
            warnings,
        } = catalog;
        for warning in &warnings {
            reporter.report_warning(&warning.to_string());
        }

        let policy = ViewPolicy {
            selection: request.selection,
            device_range: request.device_range,
            period_range: request.period_range,
        };
        let mut notices = Vec::new();
        let selected = resolve_vendors(&vendors, &request.vendors, policy.selection, &mut notices);
        let industry = resolve_industry(&industries, request.industry.as_deref(), &mut notices);
        let device_count = resolve_bounded(
            "Device count",
            request.device_count,
            reference.devices as i64,
            policy.device_range,
            &mut notices,
        );
        let analysis_period = resolve_bounded(
            "Analysis period",
            request.analysis_period_years,
            reference.years as i64,
            policy.period_range,
            &mut notices,
        );

        let state = ConfigState::new(
            selected,
            industry,
            device_count,
            analysis_period,
            request.active_tab,
            policy,
        );

        Self {
            vendors,
            industries,
            reference,
            state,
            renderer: ViewRenderer::new(charts, request.renderer),
            target,
            reporter,
            exporter,
            notices,
            update_count: 0,
        }
    }

    /// Mounts the dashboard into `container_id` and renders the initial state
    ///
    /// A missing container leaves the view uninitialized; the warning is
    /// reported and returned in the stats.
    pub fn start(&mut self, container_id: &str) -> RenderStats {
        if let Err(e) = self.renderer.initialize(&mut self.target, container_id) {
            self.reporter.report_warning(&e.to_string());
            return RenderStats {
                warnings: vec![e],
                ..RenderStats::default()
            };
        }
        self.reporter.report(&format!(
            "📊 Comparing {} of {} vendor(s) for {}",
            self.state.selected_vendor_ids().len(),
            self.vendors.len(),
            self.state.industry()
        ));
        self.refresh()
    }

    /// Applies one action and renders once
    pub fn dispatch(&mut self, action: Action) -> RenderStats {
        self.notices.clear();
        self.apply_action(action);
        self.refresh()
    }

    /// Applies a burst of actions and renders once at the end
    pub fn apply_batch(&mut self, actions: impl IntoIterator<Item = Action>) -> RenderStats {
        self.notices.clear();
        for action in actions {
            self.apply_action(action);
        }
        self.refresh()
    }

    pub fn toggle_vendor(&mut self, vendor_id: &str) -> RenderStats {
        self.dispatch(Action::ToggleVendor(vendor_id.to_string()))
    }

    pub fn set_industry(&mut self, key: &str) -> RenderStats {
        self.dispatch(Action::SetIndustry(key.to_string()))
    }

    pub fn set_device_count(&mut self, count: i64) -> RenderStats {
        self.dispatch(Action::SetDeviceCount(count))
    }

    pub fn set_analysis_period(&mut self, years: i64) -> RenderStats {
        self.dispatch(Action::SetAnalysisPeriod(years))
    }

    pub fn switch_tab(&mut self, tab: Tab) -> RenderStats {
        self.dispatch(Action::SwitchTab(tab))
    }

    /// Builds a snapshot of the current state and hands it to the exporter
    pub fn export_report(&mut self) -> Result<ReportSnapshot> {
        let snapshot = ReportSnapshot::new(self.state.clone(), self.derive());
        self.exporter.export(&snapshot)?;
        self.reporter.report_completion(&format!(
            "Report {} exported",
            snapshot.metadata.serial_number
        ));
        Ok(snapshot)
    }

    /// Metrics for the current state, computed fresh
    pub fn derive(&self) -> DerivedMetrics {
        let context = MetricContext::from_state(&self.state, self.reference, &self.industries);
        MetricEngine::new(&self.vendors, context).derive(&self.state)
    }

    /// Advances counter animations by one frame
    pub fn tick(&mut self) -> usize {
        self.renderer.tick(&mut self.target)
    }

    /// Runs counter animations to completion and returns the frames applied
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.renderer.pending_animations() > 0 {
            let applied = self.renderer.tick(&mut self.target);
            if applied == 0 {
                break;
            }
            frames += applied;
        }
        frames
    }

    pub fn pending_animations(&self) -> usize {
        self.renderer.pending_animations()
    }

    pub fn live_charts(&self) -> usize {
        self.renderer.live_charts()
    }

    /// Removes a tab panel together with its charts and animations
    pub fn teardown_panel(&mut self, tab: Tab) -> usize {
        match self.renderer.teardown_panel(&mut self.target, tab) {
            Ok(destroyed) => destroyed,
            Err(e) => {
                self.reporter.report_warning(&e.to_string());
                0
            }
        }
    }

    /// Releases every chart and animation and empties the container
    pub fn shutdown(&mut self) {
        self.renderer.teardown(&mut self.target);
    }

    pub fn state(&self) -> &ConfigState {
        &self.state
    }

    pub fn vendors(&self) -> &VendorCatalog {
        &self.vendors
    }

    pub fn industries(&self) -> &IndustryCatalog {
        &self.industries
    }

    /// Notices raised by the last action
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Number of render passes since creation
    pub fn update_count(&self) -> usize {
        self.update_count
    }

    pub fn document(&self) -> &T {
        &self.target
    }

    pub fn document_mut(&mut self) -> &mut T {
        &mut self.target
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::ToggleVendor(raw) => {
                let Some(id) = self.known_vendor(&raw) else {
                    self.notice(
                        NoticeKind::UnknownVendor,
                        format!("Unknown vendor '{}'", raw.trim()),
                    );
                    return;
                };
                if let Err(e) = self.state.toggle_vendor(id) {
                    self.notice(NoticeKind::SelectionLimit, e.to_string());
                }
            }
            Action::SetIndustry(raw) => match self.known_industry(&raw) {
                Some(key) => {
                    self.state.set_industry(key);
                }
                None => self.notice(
                    NoticeKind::UnknownIndustry,
                    format!("Unknown industry '{}'", raw.trim()),
                ),
            },
            Action::SetDeviceCount(count) => {
                let outcome = self.state.set_device_count(count);
                self.bounded_outcome("Device count", outcome);
            }
            Action::SetAnalysisPeriod(years) => {
                let outcome = self.state.set_analysis_period(years);
                self.bounded_outcome("Analysis period", outcome);
            }
            Action::SwitchTab(tab) => {
                self.state.switch_tab(tab);
            }
        }
    }

    fn bounded_outcome(
        &mut self,
        what: &str,
        outcome: std::result::Result<Applied, DashboardError>,
    ) {
        match outcome {
            Ok(Applied::Clamped { requested, stored }) => self.notice(
                NoticeKind::Clamped,
                clamped_message(what, requested, stored),
            ),
            Ok(_) => {}
            Err(e) => self.notice(NoticeKind::Rejected, e.to_string()),
        }
    }

    fn known_vendor(&self, raw: &str) -> Option<VendorId> {
        VendorId::new(raw.trim().to_lowercase())
            .ok()
            .filter(|id| self.vendors.contains(id))
    }

    fn known_industry(&self, raw: &str) -> Option<IndustryKey> {
        IndustryKey::new(raw.trim().to_lowercase())
            .ok()
            .filter(|key| self.industries.contains(key))
    }

    fn notice(&mut self, kind: NoticeKind, message: String) {
        self.notices.push(Notice::new(kind, message));
    }

    fn refresh(&mut self) -> RenderStats {
        let derived = self.derive();
        let mut stats = self.renderer.update(&mut self.target, &self.state, &derived);
        self.update_count += 1;

        if let Err(e) = self.renderer.show_notices(&mut self.target, &self.notices) {
            stats.warnings.push(e);
        }
        for notice in &self.notices {
            self.reporter.report_notice(&notice.message);
        }
        for warning in &stats.warnings {
            self.reporter.report_warning(&warning.to_string());
        }
        stats
    }
}

impl<T, R, X> DashboardPort for DashboardController<T, R, X>
where
    T: RenderTarget,
    R: DiagnosticReporter,
    X: ReportExporter,
{
    fn apply(&mut self, action: Action) -> RenderStats {
        self.dispatch(action)
    }

    fn current_notices(&self) -> Vec<Notice> {
        self.notices.clone()
    }

    fn export(&mut self) -> Result<ReportSnapshot> {
        self.export_report()
    }

    fn summary(&self) -> String {
        let derived = self.derive();
        format!(
            "{} vs {} competitor(s) | {} | {} devices | {} years | tab {} | savings {} ({}%) | ROI {}% | risk reduction {}%",
            derived.focus_name.as_deref().unwrap_or("no vendor"),
            self.state.competitors().len(),
            derived.industry_name,
            derived.device_count,
            derived.analysis_period_years,
            self.state.active_tab(),
            derived.savings.compact(),
            derived.savings_percent,
            derived.adjusted_roi,
            derived.risk_reduction_percent
        )
    }

    fn vendor_listing(&self) -> Vec<String> {
        self.vendors
            .iter()
            .map(|v| {
                let marker = if self.state.is_selected(v.id()) { "*" } else { " " };
                format!("{} {} - {}", marker, v.id(), v.display_name())
            })
            .collect()
    }
}

fn clamped_message(what: &str, requested: i64, stored: i64) -> String {
    format!(
        "{} {} is out of range; using {} instead",
        what, requested, stored
    )
}

/// Known vendors from `requested`, or the first catalog vendors when empty
fn resolve_vendors(
    catalog: &VendorCatalog,
    requested: &[String],
    selection: SelectionPolicy,
    notices: &mut Vec<Notice>,
) -> Vec<VendorId> {
    let limit = match selection {
        SelectionPolicy::Limited(max) => max.min(DEFAULT_SELECTION_SIZE),
        SelectionPolicy::Unbounded => DEFAULT_SELECTION_SIZE,
    };
    if requested.is_empty() {
        return catalog.ids().into_iter().take(limit).collect();
    }

    let mut selected: Vec<VendorId> = Vec::new();
    for raw in requested {
        match VendorId::new(raw.trim().to_lowercase())
            .ok()
            .filter(|id| catalog.contains(id))
        {
            Some(id) if !selected.contains(&id) => selected.push(id),
            Some(_) => {}
            None => notices.push(Notice::new(
                NoticeKind::UnknownVendor,
                format!("Unknown vendor '{}'", raw.trim()),
            )),
        }
    }

    if !selection.allows(selected.len()) {
        if let SelectionPolicy::Limited(max) = selection {
            notices.push(Notice::new(
                NoticeKind::SelectionLimit,
                format!(
                    "At most {} vendors can be compared at once; keeping the first {}",
                    max, max
                ),
            ));
        }
    }
    selected
}

fn resolve_industry(
    catalog: &IndustryCatalog,
    requested: Option<&str>,
    notices: &mut Vec<Notice>,
) -> IndustryKey {
    if let Some(raw) = requested {
        if let Some(key) = IndustryKey::new(raw.trim().to_lowercase())
            .ok()
            .filter(|key| catalog.contains(key))
        {
            return key;
        }
        notices.push(Notice::new(
            NoticeKind::UnknownIndustry,
            format!("Unknown industry '{}'", raw.trim()),
        ));
    }
    match catalog.first() {
        Some(industry) => industry.key.clone(),
        None => IndustryKey::unspecified(),
    }
}

/// Initial numeric setting: non-positive values fall back to `fallback`,
/// out-of-range values are clamped. Both raise a notice.
fn resolve_bounded(
    what: &str,
    requested: Option<i64>,
    fallback: i64,
    range: BoundedRange,
    notices: &mut Vec<Notice>,
) -> i64 {
    let value = match requested {
        Some(value) if value <= 0 => {
            notices.push(Notice::new(
                NoticeKind::Rejected,
                format!("{} must be a positive integer, got {}", what, value),
            ));
            fallback
        }
        Some(value) => value,
        None => fallback,
    };
    let stored = range.clamp(value);
    if stored != value {
        notices.push(Notice::new(
            NoticeKind::Clamped,
            clamped_message(what, value, stored),
        ));
    }
    stored
}
