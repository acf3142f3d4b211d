//! Static structure of the dashboard: which regions exist, where they live
//! and the skeleton they are mounted into.

use super::charts::ChartRegion;
use crate::application::read_models::{Element, Node};
use crate::comparison::domain::Tab;

/// Id of the outermost element the skeleton creates inside the mount point
pub const DASHBOARD_ROOT_ID: &str = "nac-dashboard";

/// Id of the notice bar
pub const NOTICES_ID: &str = "notices";

/// Data regions, each patched as a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    HeaderContext,
    KpiSavings,
    KpiRoi,
    KpiRiskReduction,
    SelectedVendors,
    CostBreakdown,
    CostProjection,
    SecuritySummary,
    ComplianceMatrix,
    VendorMatrix,
    CapabilityMatrix,
    InsuranceSummary,
}

impl Region {
    pub const ALL: [Region; 12] = [
        Region::HeaderContext,
        Region::KpiSavings,
        Region::KpiRoi,
        Region::KpiRiskReduction,
        Region::SelectedVendors,
        Region::CostBreakdown,
        Region::CostProjection,
        Region::SecuritySummary,
        Region::ComplianceMatrix,
        Region::VendorMatrix,
        Region::CapabilityMatrix,
        Region::InsuranceSummary,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Region::HeaderContext => "header-context",
            Region::KpiSavings => "kpi-savings",
            Region::KpiRoi => "kpi-roi",
            Region::KpiRiskReduction => "kpi-risk-reduction",
            Region::SelectedVendors => "selected-vendors",
            Region::CostBreakdown => "cost-breakdown",
            Region::CostProjection => "cost-projection",
            Region::SecuritySummary => "security-summary",
            Region::ComplianceMatrix => "compliance-matrix",
            Region::VendorMatrix => "vendor-matrix",
            Region::CapabilityMatrix => "capability-matrix",
            Region::InsuranceSummary => "insurance-summary",
        }
    }

    /// Panel the region belongs to; `None` for regions outside the tab panels
    pub fn tab(&self) -> Option<Tab> {
        match self {
            Region::HeaderContext => None,
            Region::KpiSavings
            | Region::KpiRoi
            | Region::KpiRiskReduction
            | Region::SelectedVendors => Some(Tab::Overview),
            Region::CostBreakdown | Region::CostProjection => Some(Tab::Financial),
            Region::SecuritySummary => Some(Tab::Security),
            Region::ComplianceMatrix => Some(Tab::Compliance),
            Region::VendorMatrix | Region::CapabilityMatrix => Some(Tab::Vendors),
            Region::InsuranceSummary => Some(Tab::Insurance),
        }
    }

    pub fn in_tab(tab: Tab) -> impl Iterator<Item = Region> {
        Region::ALL.into_iter().filter(move |r| r.tab() == Some(tab))
    }
}

/// Builds the element skeleton: header, notice bar, tab strip and one panel
/// per tab holding its empty regions and chart canvases. No tab is active
/// until the first update.
pub fn skeleton() -> Element {
    let header = Element::new("header")
        .class("dashboard-header")
        .child(Element::new("h1").text("NAC Vendor Comparison"))
        .child(region_shell(Region::HeaderContext));

    let tab_strip = Element::new("nav").class("tab-strip").children(Tab::ALL.iter().map(|tab| {
        Node::from(
            Element::new("button")
                .with_id(tab.button_id())
                .class("tab-button")
                .attr("data-tab", tab.key())
                .text(tab.label()),
        )
    }));

    let panels = Element::new("main")
        .class("tab-panels")
        .children(Tab::ALL.iter().map(|tab| Node::from(panel(*tab))));

    Element::new("div")
        .with_id(DASHBOARD_ROOT_ID)
        .class("executive-dashboard")
        .child(header)
        .child(
            Element::new("div")
                .with_id(NOTICES_ID)
                .class("notice-bar")
                .attr("role", "status"),
        )
        .child(tab_strip)
        .child(panels)
}

fn panel(tab: Tab) -> Element {
    let regions = Region::in_tab(tab).map(|r| Node::from(region_shell(r)));
    let charts = ChartRegion::in_tab(tab).map(|c| {
        Node::from(
            Element::new("div")
                .with_id(c.id())
                .class("chart-container")
                .child(Element::new("div").with_id(c.canvas_id()).class("chart-canvas")),
        )
    });

    Element::new("section")
        .with_id(tab.panel_id())
        .class("tab-panel")
        .attr("data-tab", tab.key())
        .child(Element::new("h2").text(tab.label()))
        .children(regions)
        .children(charts)
}

fn region_shell(region: Region) -> Element {
    Element::new("div").with_id(region.id()).class("region")
}
