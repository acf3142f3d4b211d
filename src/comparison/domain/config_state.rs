//! Mutable view configuration and the policies that bound it.

use super::vendor::{IndustryKey, VendorId};
use crate::shared::error::DashboardError;
use serde::Serialize;

/// Navigation tabs of the dashboard; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tab {
    Overview,
    Financial,
    Security,
    Compliance,
    Vendors,
    Insurance,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Overview,
        Tab::Financial,
        Tab::Security,
        Tab::Compliance,
        Tab::Vendors,
        Tab::Insurance,
    ];

    /// Stable key used in element ids and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Financial => "financial",
            Tab::Security => "security",
            Tab::Compliance => "compliance",
            Tab::Vendors => "vendors",
            Tab::Insurance => "insurance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Executive Overview",
            Tab::Financial => "Financial Analysis",
            Tab::Security => "Security Posture",
            Tab::Compliance => "Compliance",
            Tab::Vendors => "Vendor Matrix",
            Tab::Insurance => "Cyber Insurance",
        }
    }

    pub fn panel_id(&self) -> String {
        format!("panel-{}", self.key())
    }

    pub fn button_id(&self) -> String {
        format!("tab-{}", self.key())
    }
}

impl std::str::FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Tab::ALL
            .into_iter()
            .find(|t| t.key() == wanted)
            .ok_or_else(|| {
                let keys: Vec<&str> = Tab::ALL.iter().map(|t| t.key()).collect();
                format!("Invalid tab: {}. Expected one of: {}", s, keys.join(", "))
            })
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Maximum number of vendors that may be selected at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectionPolicy {
    Limited(usize),
    Unbounded,
}

impl SelectionPolicy {
    pub fn allows(&self, count: usize) -> bool {
        match self {
            SelectionPolicy::Limited(max) => count <= *max,
            SelectionPolicy::Unbounded => true,
        }
    }
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        SelectionPolicy::Limited(4)
    }
}

/// Inclusive integer range used to clamp numeric inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundedRange {
    pub min: i64,
    pub max: i64,
}

impl BoundedRange {
    pub fn new(min: i64, max: i64) -> Result<Self, DashboardError> {
        if min <= 0 || min > max {
            return Err(DashboardError::validation(format!(
                "range [{}, {}] must be positive and ordered",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Device-count range; `max` must fit the stored `u32`
    pub fn devices(min: i64, max: i64) -> Result<Self, DashboardError> {
        Self::within("device", min, max, u32::MAX as i64)
    }

    /// Analysis-period range in years; `max` must fit the stored `u8`
    pub fn years(min: i64, max: i64) -> Result<Self, DashboardError> {
        Self::within("analysis period", min, max, u8::MAX as i64)
    }

    fn within(what: &str, min: i64, max: i64, ceiling: i64) -> Result<Self, DashboardError> {
        let range = Self::new(min, max)?;
        if max > ceiling {
            return Err(DashboardError::validation(format!(
                "{} range maximum {} exceeds {}",
                what, max, ceiling
            )));
        }
        Ok(range)
    }

    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Policies bounding every ConfigState mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewPolicy {
    pub selection: SelectionPolicy,
    pub device_range: BoundedRange,
    pub period_range: BoundedRange,
}

impl ViewPolicy {
    pub const DEFAULT_DEVICE_RANGE: BoundedRange = BoundedRange {
        min: 100,
        max: 100_000,
    };
    pub const DEFAULT_PERIOD_RANGE: BoundedRange = BoundedRange { min: 1, max: 5 };
}

impl Default for ViewPolicy {
    fn default() -> Self {
        Self {
            selection: SelectionPolicy::default(),
            device_range: Self::DEFAULT_DEVICE_RANGE,
            period_range: Self::DEFAULT_PERIOD_RANGE,
        }
    }
}

/// Result of a mutation that was accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The value was stored as requested
    Exact,
    /// The value was out of range and the clamped value was stored
    Clamped { requested: i64, stored: i64 },
    /// The state already held this value
    Unchanged,
}

/// Mutable view configuration
///
/// The first selected vendor is the focus vendor that the rest are compared
/// against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigState {
    selected_vendor_ids: Vec<VendorId>,
    industry: IndustryKey,
    device_count: u32,
    analysis_period_years: u8,
    active_tab: Tab,
    #[serde(skip)]
    policy: ViewPolicy,
}

impl ConfigState {
    /// Creates the initial state. Inputs are normalized against `policy`
    /// rather than rejected: extra vendors beyond the limit are dropped,
    /// duplicates removed, and numbers clamped.
    pub fn new(
        selected: Vec<VendorId>,
        industry: IndustryKey,
        device_count: i64,
        analysis_period_years: i64,
        active_tab: Tab,
        policy: ViewPolicy,
    ) -> Self {
        let mut selected_vendor_ids: Vec<VendorId> = Vec::new();
        for id in selected {
            if !selected_vendor_ids.contains(&id)
                && policy.selection.allows(selected_vendor_ids.len() + 1)
            {
                selected_vendor_ids.push(id);
            }
        }

        Self {
            selected_vendor_ids,
            industry,
            device_count: saturate_u32(policy.device_range.clamp(device_count)),
            analysis_period_years: saturate_u8(policy.period_range.clamp(analysis_period_years)),
            active_tab,
            policy,
        }
    }

    pub fn selected_vendor_ids(&self) -> &[VendorId] {
        &self.selected_vendor_ids
    }

    pub fn focus_vendor(&self) -> Option<&VendorId> {
        self.selected_vendor_ids.first()
    }

    /// Selected vendors other than the focus vendor
    pub fn competitors(&self) -> &[VendorId] {
        self.selected_vendor_ids.get(1..).unwrap_or(&[])
    }

    pub fn is_selected(&self, id: &VendorId) -> bool {
        self.selected_vendor_ids.contains(id)
    }

    pub fn industry(&self) -> &IndustryKey {
        &self.industry
    }

    pub fn device_count(&self) -> u32 {
        self.device_count
    }

    pub fn analysis_period_years(&self) -> u8 {
        self.analysis_period_years
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn policy(&self) -> &ViewPolicy {
        &self.policy
    }

    /// Adds or removes a vendor. Adding beyond the selection limit is a
    /// policy violation and leaves the state untouched.
    pub fn toggle_vendor(&mut self, id: VendorId) -> Result<Applied, DashboardError> {
        if let Some(pos) = self.selected_vendor_ids.iter().position(|v| *v == id) {
            self.selected_vendor_ids.remove(pos);
            return Ok(Applied::Exact);
        }

        if !self
            .policy
            .selection
            .allows(self.selected_vendor_ids.len() + 1)
        {
            let max = match self.policy.selection {
                SelectionPolicy::Limited(max) => max,
                SelectionPolicy::Unbounded => usize::MAX,
            };
            return Err(DashboardError::ConfigViolation {
                reason: format!(
                    "Cannot select '{}': at most {} vendors can be compared at once. Deselect one first.",
                    id, max
                ),
            });
        }

        self.selected_vendor_ids.push(id);
        Ok(Applied::Exact)
    }

    pub fn set_industry(&mut self, industry: IndustryKey) -> Applied {
        if self.industry == industry {
            return Applied::Unchanged;
        }
        self.industry = industry;
        Applied::Exact
    }

    pub fn set_device_count(&mut self, requested: i64) -> Result<Applied, DashboardError> {
        let stored = Self::bounded("Device count", requested, self.policy.device_range)?;
        let changed = self.device_count as i64 != stored;
        self.device_count = saturate_u32(stored);
        Ok(Self::outcome(requested, stored, changed))
    }

    pub fn set_analysis_period(&mut self, requested: i64) -> Result<Applied, DashboardError> {
        let stored = Self::bounded("Analysis period", requested, self.policy.period_range)?;
        let changed = self.analysis_period_years as i64 != stored;
        self.analysis_period_years = saturate_u8(stored);
        Ok(Self::outcome(requested, stored, changed))
    }

    pub fn switch_tab(&mut self, tab: Tab) -> Applied {
        if self.active_tab == tab {
            return Applied::Unchanged;
        }
        self.active_tab = tab;
        Applied::Exact
    }

    fn bounded(what: &str, requested: i64, range: BoundedRange) -> Result<i64, DashboardError> {
        if requested <= 0 {
            return Err(DashboardError::ConfigViolation {
                reason: format!("{} must be a positive integer, got {}", what, requested),
            });
        }
        Ok(range.clamp(requested))
    }

    fn outcome(requested: i64, stored: i64, changed: bool) -> Applied {
        if requested != stored {
            Applied::Clamped { requested, stored }
        } else if changed {
            Applied::Exact
        } else {
            Applied::Unchanged
        }
    }
}

fn saturate_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

fn saturate_u8(value: i64) -> u8 {
    u8::try_from(value.max(0)).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn id(s: &str) -> VendorId {
        VendorId::new(s).unwrap()
    }

    fn state(selected: &[&str], policy: ViewPolicy) -> ConfigState {
        ConfigState::new(
            selected.iter().map(|s| id(s)).collect(),
            IndustryKey::new("technology").unwrap(),
            1000,
            3,
            Tab::Overview,
            policy,
        )
    }

    #[test]
    fn test_tab_from_str() {
        assert_eq!(Tab::from_str("Financial").unwrap(), Tab::Financial);
        let err = Tab::from_str("roadmap").unwrap_err();
        assert!(err.contains("overview"));
    }

    #[test]
    fn test_tab_ids() {
        assert_eq!(Tab::Compliance.panel_id(), "panel-compliance");
        assert_eq!(Tab::Compliance.button_id(), "tab-compliance");
    }

    #[test]
    fn test_new_normalizes_inputs() {
        let policy = ViewPolicy {
            selection: SelectionPolicy::Limited(2),
            ..ViewPolicy::default()
        };
        let state = ConfigState::new(
            vec![id("a"), id("a"), id("b"), id("c")],
            IndustryKey::new("retail").unwrap(),
            999_999_999,
            0,
            Tab::Vendors,
            policy,
        );
        assert_eq!(state.selected_vendor_ids(), &[id("a"), id("b")]);
        assert_eq!(state.device_count(), 100_000);
        assert_eq!(state.analysis_period_years(), 1);
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut state = state(&["a"], ViewPolicy::default());
        state.toggle_vendor(id("b")).unwrap();
        assert_eq!(state.selected_vendor_ids(), &[id("a"), id("b")]);
        assert_eq!(state.competitors(), &[id("b")]);
        state.toggle_vendor(id("a")).unwrap();
        assert_eq!(state.focus_vendor(), Some(&id("b")));
    }

    #[test]
    fn test_toggle_at_limit_leaves_state_unchanged() {
        let policy = ViewPolicy {
            selection: SelectionPolicy::Limited(2),
            ..ViewPolicy::default()
        };
        let mut state = state(&["a", "b"], policy);
        let before = state.clone();
        let err = state.toggle_vendor(id("c")).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigViolation { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_unbounded_selection() {
        let policy = ViewPolicy {
            selection: SelectionPolicy::Unbounded,
            ..ViewPolicy::default()
        };
        let mut state = state(&[], policy);
        for i in 0..20 {
            state.toggle_vendor(id(&format!("v{}", i))).unwrap();
        }
        assert_eq!(state.selected_vendor_ids().len(), 20);
    }

    #[test]
    fn test_device_count_clamped_to_range() {
        let mut state = state(&["a"], ViewPolicy::default());
        let applied = state.set_device_count(999_999_999).unwrap();
        assert_eq!(
            applied,
            Applied::Clamped {
                requested: 999_999_999,
                stored: 100_000
            }
        );
        assert_eq!(state.device_count(), 100_000);

        state.set_device_count(5).unwrap();
        assert_eq!(state.device_count(), 100);
    }

    #[test]
    fn test_device_count_non_positive_rejected() {
        let mut state = state(&["a"], ViewPolicy::default());
        assert!(state.set_device_count(0).is_err());
        assert!(state.set_device_count(-50).is_err());
        assert_eq!(state.device_count(), 1000);
    }

    #[test]
    fn test_same_value_reports_unchanged() {
        let mut state = state(&["a"], ViewPolicy::default());
        assert_eq!(state.set_device_count(1000).unwrap(), Applied::Unchanged);
        assert_eq!(state.set_analysis_period(3).unwrap(), Applied::Unchanged);
        assert_eq!(state.switch_tab(Tab::Overview), Applied::Unchanged);
        assert_eq!(state.switch_tab(Tab::Security), Applied::Exact);
    }

    #[test]
    fn test_bounded_range_validation() {
        assert!(BoundedRange::new(100, 100_000).is_ok());
        assert!(BoundedRange::new(0, 10).is_err());
        assert!(BoundedRange::new(10, 5).is_err());
    }

    #[test]
    fn test_typed_ranges_reject_oversized_max() {
        assert!(BoundedRange::devices(10, 500).is_ok());
        assert!(BoundedRange::devices(10, u32::MAX as i64 + 1).is_err());
        assert!(BoundedRange::years(1, 10).is_ok());
        let err = BoundedRange::years(1, 300).unwrap_err();
        assert!(err.to_string().contains("exceeds 255"));
    }

    #[test]
    fn test_custom_ranges_clamp_inputs() {
        let policy = ViewPolicy {
            device_range: BoundedRange::devices(10, 500).unwrap(),
            period_range: BoundedRange::years(2, 10).unwrap(),
            ..ViewPolicy::default()
        };
        let mut state = ConfigState::new(
            vec![id("a")],
            IndustryKey::new("retail").unwrap(),
            50,
            1,
            Tab::Overview,
            policy,
        );
        assert_eq!(state.device_count(), 50);
        assert_eq!(state.analysis_period_years(), 2);

        state.set_device_count(2000).unwrap();
        assert_eq!(state.device_count(), 500);
        state.set_analysis_period(8).unwrap();
        assert_eq!(state.analysis_period_years(), 8);
    }
}
