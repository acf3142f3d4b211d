use crate::application::read_models::ValueFormat;
use crate::comparison::domain::{DerivedMetrics, Tab, VendorSummary};
use crate::ports::outbound::{ChartKind, ChartPoint, ChartSpec};

/// Chart slots of the dashboard; each holds at most one live chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartRegion {
    TcoComparison,
    RoiComparison,
    CostBreakdown,
    CostProjection,
    SecurityScores,
    ComplianceCoverage,
    ImplementationTimeline,
    CapabilityProfile,
    InsuranceImpact,
}

impl ChartRegion {
    pub const ALL: [ChartRegion; 9] = [
        ChartRegion::TcoComparison,
        ChartRegion::RoiComparison,
        ChartRegion::CostBreakdown,
        ChartRegion::CostProjection,
        ChartRegion::SecurityScores,
        ChartRegion::ComplianceCoverage,
        ChartRegion::ImplementationTimeline,
        ChartRegion::CapabilityProfile,
        ChartRegion::InsuranceImpact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ChartRegion::TcoComparison => "chart-tco-comparison",
            ChartRegion::RoiComparison => "chart-roi-comparison",
            ChartRegion::CostBreakdown => "chart-cost-breakdown",
            ChartRegion::CostProjection => "chart-cost-projection",
            ChartRegion::SecurityScores => "chart-security-scores",
            ChartRegion::ComplianceCoverage => "chart-compliance-coverage",
            ChartRegion::ImplementationTimeline => "chart-implementation-timeline",
            ChartRegion::CapabilityProfile => "chart-capability-profile",
            ChartRegion::InsuranceImpact => "chart-insurance-impact",
        }
    }

    /// Element the chart library draws into
    pub fn canvas_id(&self) -> String {
        format!("{}-canvas", self.id())
    }

    pub fn tab(&self) -> Tab {
        match self {
            ChartRegion::TcoComparison | ChartRegion::RoiComparison => Tab::Overview,
            ChartRegion::CostBreakdown | ChartRegion::CostProjection => Tab::Financial,
            ChartRegion::SecurityScores => Tab::Security,
            ChartRegion::ComplianceCoverage => Tab::Compliance,
            ChartRegion::ImplementationTimeline | ChartRegion::CapabilityProfile => Tab::Vendors,
            ChartRegion::InsuranceImpact => Tab::Insurance,
        }
    }

    pub fn in_tab(tab: Tab) -> impl Iterator<Item = ChartRegion> {
        ChartRegion::ALL.into_iter().filter(move |c| c.tab() == tab)
    }

    pub fn spec(&self, derived: &DerivedMetrics) -> ChartSpec {
        let focus = derived.focus_vendor.as_ref();
        let is_focus = |v: &VendorSummary| focus == Some(&v.id);

        let (kind, title, format, points) = match self {
            ChartRegion::TcoComparison => (
                ChartKind::Bar,
                "Total Cost of Ownership",
                ValueFormat::Currency,
                per_vendor(derived, |v| v.scaled_tco.amount(), |v| v.lowest_tco),
            ),
            ChartRegion::RoiComparison => (
                ChartKind::Bar,
                "Return on Investment",
                ValueFormat::Percent,
                per_vendor(derived, |v| v.roi, is_focus),
            ),
            ChartRegion::CostBreakdown => (
                ChartKind::HorizontalBar,
                "Cost Breakdown",
                ValueFormat::Currency,
                derived
                    .cost_breakdown
                    .iter()
                    .map(|line| ChartPoint {
                        label: line.component.to_string(),
                        value: line.amount.amount(),
                        highlighted: false,
                    })
                    .collect::<Vec<_>>(),
            ),
            ChartRegion::CostProjection => (
                ChartKind::Bar,
                "Cumulative Cost Projection",
                ValueFormat::Currency,
                derived
                    .projection
                    .iter()
                    .map(|year| ChartPoint {
                        label: format!("Year {}", year.year),
                        value: year.focus.amount(),
                        highlighted: year.savings() > 0.0,
                    })
                    .collect::<Vec<_>>(),
            ),
            ChartRegion::SecurityScores => (
                ChartKind::Bar,
                "Security Score",
                ValueFormat::Percent,
                per_vendor(derived, |v| v.security_score.value() as f64, |v| {
                    v.best_security
                }),
            ),
            ChartRegion::ComplianceCoverage => (
                ChartKind::HorizontalBar,
                "Compliance Coverage",
                ValueFormat::Percent,
                derived
                    .compliance
                    .iter()
                    .map(|c| ChartPoint {
                        label: c.framework.to_uppercase(),
                        value: c.adjusted as f64,
                        highlighted: c.weighted_by_industry,
                    })
                    .collect::<Vec<_>>(),
            ),
            ChartRegion::ImplementationTimeline => (
                ChartKind::HorizontalBar,
                "Implementation Time",
                ValueFormat::Days,
                per_vendor(derived, |v| v.implementation_days as f64, is_focus),
            ),
            ChartRegion::CapabilityProfile => (
                ChartKind::HorizontalBar,
                "Capability Profile",
                ValueFormat::Percent,
                capability_profile(derived),
            ),
            ChartRegion::InsuranceImpact => (
                ChartKind::Bar,
                "Cyber Insurance Impact",
                ValueFormat::Percent,
                derived
                    .insurance
                    .map(|i| {
                        [
                            ("Premium Reduction", i.premium_reduction as f64),
                            ("Coverage Increase", i.coverage_increase as f64),
                            ("Insurer Risk Score", i.risk_score.value() as f64),
                        ]
                        .into_iter()
                        .map(|(label, value)| ChartPoint {
                            label: label.to_string(),
                            value,
                            highlighted: false,
                        })
                        .collect::<Vec<_>>()
                    })
                    .unwrap_or_default(),
            ),
        };

        ChartSpec {
            kind,
            title: title.to_string(),
            format,
            points,
        }
    }
}

/// The focus vendor's score for each capability it publishes
fn capability_profile(derived: &DerivedMetrics) -> Vec<ChartPoint> {
    let Some(focus) = derived.focus_vendor.as_ref() else {
        return Vec::new();
    };
    let Some(index) = derived.vendors.iter().position(|v| &v.id == focus) else {
        return Vec::new();
    };
    derived
        .capabilities
        .iter()
        .filter_map(|c| {
            let score = c.scores.get(index).copied().flatten()?;
            Some(ChartPoint {
                label: c.label(),
                value: score.value() as f64,
                highlighted: c.leaders.contains(focus),
            })
        })
        .collect()
}

/// One point per selected vendor, in selection order
fn per_vendor(
    derived: &DerivedMetrics,
    value: impl Fn(&VendorSummary) -> f64,
    highlight: impl Fn(&VendorSummary) -> bool,
) -> Vec<ChartPoint> {
    derived
        .vendors
        .iter()
        .map(|v| ChartPoint {
            label: v.name.clone(),
            value: value(v),
            highlighted: highlight(v),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::domain::ReferenceScenario;
    use crate::comparison::services::{MetricContext, MetricEngine};
    use crate::comparison::test_support::{catalog_abc, state_for};

    fn derived(selected: &[&str]) -> DerivedMetrics {
        let (catalog, industries) = catalog_abc();
        let state = state_for(selected);
        let context = MetricContext::from_state(&state, ReferenceScenario::default(), &industries);
        MetricEngine::new(&catalog, context).derive(&state)
    }

    #[test]
    fn test_every_tab_has_a_chart() {
        for tab in Tab::ALL {
            assert!(ChartRegion::in_tab(tab).count() >= 1, "{:?}", tab);
        }
    }

    #[test]
    fn test_tco_spec_highlights_lowest() {
        let spec = ChartRegion::TcoComparison.spec(&derived(&["b", "a"]));
        assert_eq!(spec.points.len(), 2);
        assert_eq!(spec.points[0].label, "Vendor B");
        assert!(!spec.points[0].highlighted);
        assert!(spec.points[1].highlighted);
    }

    #[test]
    fn test_spec_is_deterministic() {
        let d = derived(&["a", "b", "c"]);
        for chart in ChartRegion::ALL {
            assert_eq!(chart.spec(&d), chart.spec(&d));
        }
    }

    #[test]
    fn test_spec_changes_with_selection() {
        let before = ChartRegion::TcoComparison.spec(&derived(&["a", "b"]));
        let after = ChartRegion::TcoComparison.spec(&derived(&["a", "c"]));
        assert_ne!(before, after);
    }

    #[test]
    fn test_projection_spec_follows_analysis_period() {
        let spec = ChartRegion::CostProjection.spec(&derived(&["a", "b"]));
        let labels: Vec<&str> = spec.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Year 1", "Year 2", "Year 3"]);
        assert!(spec.points.iter().all(|p| p.highlighted));
        assert_eq!(ChartRegion::CostProjection.tab(), Tab::Financial);
    }

    #[test]
    fn test_capability_profile_of_focus_vendor() {
        let spec = ChartRegion::CapabilityProfile.spec(&derived(&["b", "a"]));
        assert_eq!(spec.fallback_rows(), vec!["Zero Trust: 90%".to_string()]);
        assert!(spec.points[0].highlighted);
        assert!(ChartRegion::CapabilityProfile.spec(&derived(&[])).points.is_empty());
    }

    #[test]
    fn test_fallback_rows() {
        let spec = ChartRegion::SecurityScores.spec(&derived(&["a"]));
        assert_eq!(spec.fallback_rows(), vec!["Vendor A: 90%".to_string()]);
    }
}
