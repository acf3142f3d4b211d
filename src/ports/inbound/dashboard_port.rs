use crate::application::read_models::{Notice, ReportSnapshot};
use crate::application::view::RenderStats;
use crate::comparison::domain::Tab;
use crate::shared::Result;

/// A user action against the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleVendor(String),
    SetIndustry(String),
    SetDeviceCount(i64),
    SetAnalysisPeriod(i64),
    SwitchTab(Tab),
}

/// DashboardPort - Inbound port for driving a live dashboard
///
/// Interactive adapters translate user input into [`Action`]s and call this
/// port; every call leaves the view reconciled with the new state.
pub trait DashboardPort {
    /// Applies one action and re-renders
    fn apply(&mut self, action: Action) -> RenderStats;

    /// Notices raised by the last action
    fn current_notices(&self) -> Vec<Notice>;

    /// Exports a snapshot of the current state
    ///
    /// # Errors
    /// Returns an error if the exporter fails to write the report
    fn export(&mut self) -> Result<ReportSnapshot>;

    /// One-line description of the current state and headline metrics
    fn summary(&self) -> String;

    /// `id - name` lines for every vendor in the catalog, selected ones marked
    fn vendor_listing(&self) -> Vec<String>;
}
