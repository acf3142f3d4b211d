//! Desired content of each data region for a given set of derived metrics.
//!
//! Functions here are pure: the same metrics always produce the same nodes,
//! which is what lets the renderer skip unchanged regions.

use super::layout::Region;
use crate::application::read_models::{Element, Node, ValueFormat};
use crate::comparison::domain::{DerivedMetrics, VendorId, VendorSummary};
use crate::comparison::policies::{DEVICE_GROWTH_RATE, INFLATION_RATE};

/// Children of `region` for `derived`
pub fn render(region: Region, derived: &DerivedMetrics) -> Vec<Node> {
    match region {
        Region::HeaderContext => vec![Node::text(format!(
            "{} | {} devices | {}-year analysis",
            derived.industry_name, derived.device_count, derived.analysis_period_years
        ))],
        Region::KpiSavings | Region::KpiRoi | Region::KpiRiskReduction => kpi_card(region, derived),
        Region::SelectedVendors => selected_vendors(derived),
        Region::CostBreakdown => cost_breakdown(derived),
        Region::CostProjection => cost_projection(derived),
        Region::SecuritySummary => security_summary(derived),
        Region::ComplianceMatrix => compliance_matrix(derived),
        Region::VendorMatrix => vendor_matrix(derived),
        Region::CapabilityMatrix => capability_matrix(derived),
        Region::InsuranceSummary => insurance_summary(derived),
    }
}

/// Element id of the numeric text inside a KPI card
pub fn counter_id(region: Region) -> String {
    format!("{}-value", region.id())
}

/// The animated counter of a KPI region: element id, final value and format
pub fn counter(region: Region, derived: &DerivedMetrics) -> Option<(String, f64, ValueFormat)> {
    let (value, format) = match region {
        Region::KpiSavings => (derived.savings.amount(), ValueFormat::Currency),
        Region::KpiRoi => (derived.adjusted_roi as f64, ValueFormat::Percent),
        Region::KpiRiskReduction => (derived.risk_reduction_percent as f64, ValueFormat::Percent),
        _ => return None,
    };
    Some((counter_id(region), value, format))
}

fn kpi_card(region: Region, derived: &DerivedMetrics) -> Vec<Node> {
    let Some((value_id, value, format)) = counter(region, derived) else {
        return Vec::new();
    };
    let focus = derived.focus_name.as_deref().unwrap_or("No vendor selected");

    let (label, detail) = match region {
        Region::KpiSavings => (
            "Total Cost Savings",
            format!(
                "{}% vs competitor average of {}",
                derived.savings_percent,
                derived.average_competitor_tco.compact()
            ),
        ),
        Region::KpiRoi => (
            "Return on Investment",
            match derived.payback_months {
                Some(months) => format!("{} payback of {} months", focus, months),
                None => focus.to_string(),
            },
        ),
        _ => (
            "Risk Reduction",
            format!(
                "{} breach exposure avoided",
                derived.breach_exposure_avoided.compact()
            ),
        ),
    };

    vec![Element::new("div")
        .class("kpi-card")
        .child(Element::new("span").class("kpi-label").text(label))
        .child(
            Element::new("span")
                .with_id(value_id)
                .class("kpi-value")
                .text(format.render(value)),
        )
        .child(Element::new("span").class("kpi-detail").text(detail))
        .into()]
}

fn selected_vendors(derived: &DerivedMetrics) -> Vec<Node> {
    if derived.vendors.is_empty() {
        return vec![empty_message("No vendors selected")];
    }
    let items = derived.vendors.iter().map(|v| {
        let focus = derived.focus_vendor.as_ref() == Some(&v.id);
        Node::from(
            Element::new("li")
                .class("vendor-chip")
                .class_if("focus", focus)
                .attr("data-vendor", v.id.as_str())
                .text(&v.name),
        )
    });
    vec![Element::new("ul").class("vendor-list").children(items).into()]
}

fn cost_breakdown(derived: &DerivedMetrics) -> Vec<Node> {
    if derived.cost_breakdown.is_empty() {
        return vec![empty_message("Select a vendor to see its cost breakdown")];
    }
    let rows = derived.cost_breakdown.iter().map(|line| {
        row(&[
            label_cell(line.component),
            cell(ValueFormat::Currency.render(line.amount.amount())),
        ])
    });
    vec![
        Element::new("p")
            .class("region-caption")
            .text(format!(
                "{} total cost of ownership: {}",
                derived.focus_name.as_deref().unwrap_or_default(),
                derived.focus_tco.compact()
            ))
            .into(),
        table(&["Component", "Cost"], rows),
    ]
}

fn cost_projection(derived: &DerivedMetrics) -> Vec<Node> {
    if derived.projection.is_empty() {
        return vec![empty_message("Select a vendor to see the cost projection")];
    }
    let focus = derived.focus_name.as_deref().unwrap_or_default();
    let money = |amount: f64| cell(ValueFormat::Currency.render(amount));
    let rows = derived.projection.iter().map(|year| {
        row(&[
            label_cell(&format!("Year {}", year.year)),
            money(year.focus.amount()),
            money(year.competitor_average.amount()),
            money(year.savings()),
        ])
    });
    vec![
        Element::new("p")
            .class("region-caption")
            .text(format!(
                "Cumulative spend assuming {}% yearly device growth and {}% inflation",
                (DEVICE_GROWTH_RATE * 100.0).round(),
                (INFLATION_RATE * 100.0).round()
            ))
            .into(),
        table(
            &["Year", focus, "Competitor Average", "Cumulative Savings"],
            rows,
        ),
    ]
}

fn security_summary(derived: &DerivedMetrics) -> Vec<Node> {
    if derived.vendors.is_empty() {
        return vec![empty_message("No vendors selected")];
    }
    let rows = ranked(derived, &derived.security_ranking).map(|v| {
        Node::from(
            Element::new("tr")
                .class_if("optimal", v.best_security)
                .child(label_cell(&v.name))
                .child(cell(v.security_score.to_string())),
        )
    });
    vec![
        Element::new("p")
            .class("region-caption")
            .text(format!(
                "Risk reduction of {}% against the selected competitors",
                derived.risk_reduction_percent
            ))
            .into(),
        table(&["Vendor", "Security Score"], rows),
    ]
}

fn compliance_matrix(derived: &DerivedMetrics) -> Vec<Node> {
    if derived.compliance.is_empty() {
        return vec![empty_message("No compliance data for the current selection")];
    }
    let rows = derived.compliance.iter().map(|c| {
        Node::from(
            Element::new("tr")
                .class_if("industry-weighted", c.weighted_by_industry)
                .child(label_cell(&c.framework.to_uppercase()))
                .child(cell(c.raw.to_string()))
                .child(cell(format!("{}%", c.adjusted))),
        )
    });
    vec![table(&["Framework", "Coverage", "Industry Adjusted"], rows)]
}

fn vendor_matrix(derived: &DerivedMetrics) -> Vec<Node> {
    if derived.vendors.is_empty() {
        return vec![empty_message("No vendors selected")];
    }
    let rows = derived.vendors.iter().map(|v| {
        Node::from(
            Element::new("tr")
                .attr("data-vendor", v.id.as_str())
                .class_if("cost-warning", v.cost_inconsistent)
                .child(label_cell(&v.name))
                .child(cell(v.architecture))
                .child(cell(ValueFormat::Currency.render(v.scaled_tco.amount())).class_if("optimal", v.lowest_tco))
                .child(cell(ValueFormat::Percent.render(v.roi)))
                .child(cell(v.security_score.to_string()).class_if("optimal", v.best_security))
                .child(cell(ValueFormat::Days.render(v.implementation_days as f64)))
                .child(cell(ValueFormat::Fte.render(v.fte)))
                .child(cell(v.overall_score.to_string()).class_if("optimal", v.best_overall)),
        )
    });
    vec![table(
        &["Vendor", "Architecture", "TCO", "ROI", "Security", "Implementation", "FTE", "Overall"],
        rows,
    )]
}

fn capability_matrix(derived: &DerivedMetrics) -> Vec<Node> {
    if derived.capabilities.is_empty() {
        return vec![empty_message("No capability data for the current selection")];
    }
    let mut headers = vec!["Capability"];
    headers.extend(derived.vendors.iter().map(|v| v.name.as_str()));

    let rows = derived.capabilities.iter().map(|c| {
        let scores = derived.vendors.iter().zip(&c.scores).map(|(v, score)| {
            Node::from(
                cell(score.map_or_else(|| "n/a".to_string(), |s| s.value().to_string()))
                    .class_if("optimal", c.leaders.contains(&v.id)),
            )
        });
        Node::from(
            Element::new("tr")
                .attr("data-capability", c.capability.as_str())
                .child(label_cell(&c.label()))
                .children(scores),
        )
    });
    vec![table(&headers, rows)]
}

fn insurance_summary(derived: &DerivedMetrics) -> Vec<Node> {
    let Some(impact) = derived.insurance else {
        return vec![empty_message("No insurance data for the current selection")];
    };
    let items = [
        ("Premium Reduction", format!("{}%", impact.premium_reduction)),
        ("Coverage Increase", format!("{}%", impact.coverage_increase)),
        ("Insurer Risk Score", impact.risk_score.to_string()),
    ]
    .into_iter()
    .map(|(label, value)| {
        Node::from(
            Element::new("div")
                .class("insurance-metric")
                .child(Element::new("span").class("metric-label").text(label))
                .child(Element::new("span").class("metric-value").text(value)),
        )
    });
    vec![Element::new("div").class("insurance-grid").children(items).into()]
}

/// Selected vendors in the order of `ranking`
fn ranked<'a>(
    derived: &'a DerivedMetrics,
    ranking: &'a [VendorId],
) -> impl Iterator<Item = &'a VendorSummary> {
    ranking.iter().filter_map(|id| derived.vendor(id))
}

fn table(headers: &[&str], rows: impl Iterator<Item = Node>) -> Node {
    let head = Element::new("tr").children(
        headers
            .iter()
            .map(|h| Node::from(Element::new("th").text(*h))),
    );
    Element::new("table")
        .class("data-table")
        .child(Element::new("thead").child(head))
        .child(Element::new("tbody").children(rows))
        .into()
}

fn row(cells: &[Element]) -> Node {
    Element::new("tr")
        .children(cells.iter().cloned().map(Node::from))
        .into()
}

fn label_cell(text: &str) -> Element {
    Element::new("th").attr("scope", "row").text(text)
}

fn cell(text: impl Into<String>) -> Element {
    Element::new("td").text(text)
}

fn empty_message(text: &str) -> Node {
    Element::new("p").class("empty-state").text(text).into()
}
