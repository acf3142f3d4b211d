use crate::application::view::RendererOptions;
use crate::comparison::domain::{BoundedRange, SelectionPolicy, Tab, ViewPolicy};

/// DashboardRequest - Initial settings for a dashboard session
///
/// Vendor ids and the industry key are raw strings; they are resolved
/// against the loaded catalog when the session starts, and unknown values
/// become notices rather than errors.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRequest {
    /// Vendors to select, focus vendor first. Empty selects the first
    /// catalog vendors up to the selection limit.
    pub vendors: Vec<String>,
    /// Industry key; `None` selects the first industry of the catalog
    pub industry: Option<String>,
    /// Device count; `None` uses the dataset's reference scenario
    pub device_count: Option<i64>,
    /// Analysis period in years; `None` uses the reference scenario
    pub analysis_period_years: Option<i64>,
    pub active_tab: Tab,
    pub selection: SelectionPolicy,
    /// Range device counts are clamped to, for this request and every
    /// later update
    pub device_range: BoundedRange,
    pub period_range: BoundedRange,
    pub renderer: RendererOptions,
}

impl Default for DashboardRequest {
    fn default() -> Self {
        Self {
            vendors: Vec::new(),
            industry: None,
            device_count: None,
            analysis_period_years: None,
            active_tab: Tab::Overview,
            selection: SelectionPolicy::default(),
            device_range: ViewPolicy::DEFAULT_DEVICE_RANGE,
            period_range: ViewPolicy::DEFAULT_PERIOD_RANGE,
            renderer: RendererOptions::default(),
        }
    }
}
