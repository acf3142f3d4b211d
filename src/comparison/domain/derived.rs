use super::units::{Currency, Score};
use super::vendor::VendorId;
use serde::Serialize;

/// Per-vendor row used by the vendor matrix and charts, already scaled to the
/// current device count, analysis period and industry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorSummary {
    pub id: VendorId,
    pub name: String,
    pub architecture: &'static str,
    pub scaled_tco: Currency,
    pub roi: f64,
    pub security_score: Score,
    pub implementation_days: u32,
    pub fte: f64,
    pub payback_months: u32,
    pub lowest_tco: bool,
    pub best_security: bool,
    /// Weighted 0-100 score across cost, security, compliance, operations,
    /// deployment and risk
    pub overall_score: u8,
    pub best_overall: bool,
    /// Headline TCO differs from the sum of its cost components
    pub cost_inconsistent: bool,
}

/// One scaled line of the focus vendor's cost breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostLine {
    pub component: &'static str,
    pub amount: Currency,
}

/// Compliance coverage of the focus vendor after industry weighting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceCoverage {
    pub framework: String,
    pub raw: Score,
    pub adjusted: u8,
    pub weighted_by_industry: bool,
}

/// One capability across the selected vendors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilityComparison {
    pub capability: String,
    /// Aligned with [`DerivedMetrics::vendors`]; `None` where a vendor
    /// publishes no score for this capability
    pub scores: Vec<Option<Score>>,
    /// Vendors holding the highest score; ties all lead
    pub leaders: Vec<VendorId>,
}

impl CapabilityComparison {
    /// Human-readable capability name: `zero_trust` -> `Zero Trust`
    pub fn label(&self) -> String {
        self.capability
            .split(['_', '-'])
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Cumulative spend at the end of one projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionYear {
    pub year: u8,
    pub focus: Currency,
    pub competitor_average: Currency,
}

impl ProjectionYear {
    pub fn savings(&self) -> f64 {
        (self.competitor_average.amount() - self.focus.amount()).max(0.0)
    }
}

/// Cyber-insurance impact of the focus vendor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InsuranceImpact {
    pub premium_reduction: u8,
    pub coverage_increase: u8,
    pub risk_score: Score,
}

/// Metrics derived from (ConfigState, VendorCatalog). Recomputed on every
/// update and never cached across renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub focus_vendor: Option<VendorId>,
    pub focus_name: Option<String>,
    pub focus_tco: Currency,
    pub average_competitor_tco: Currency,
    pub savings: Currency,
    pub savings_percent: i64,
    pub risk_reduction_percent: i64,
    pub breach_exposure_avoided: Currency,
    pub adjusted_roi: i64,
    pub payback_months: Option<u32>,
    pub cost_breakdown: Vec<CostLine>,
    pub compliance: Vec<ComplianceCoverage>,
    pub insurance: Option<InsuranceImpact>,
    pub tco_ranking: Vec<VendorId>,
    pub security_ranking: Vec<VendorId>,
    pub vendors: Vec<VendorSummary>,
    pub capabilities: Vec<CapabilityComparison>,
    /// One entry per year of the analysis period
    pub projection: Vec<ProjectionYear>,
    pub industry_name: String,
    pub device_count: u32,
    pub analysis_period_years: u8,
}

impl DerivedMetrics {
    pub fn vendor(&self, id: &VendorId) -> Option<&VendorSummary> {
        self.vendors.iter().find(|v| &v.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_label() {
        let row = CapabilityComparison {
            capability: "zero_trust".to_string(),
            scores: Vec::new(),
            leaders: Vec::new(),
        };
        assert_eq!(row.label(), "Zero Trust");
    }

    #[test]
    fn test_projection_savings_never_negative() {
        let c = |v: f64| Currency::new(v).unwrap();
        let year = ProjectionYear {
            year: 1,
            focus: c(300.0),
            competitor_average: c(200.0),
        };
        assert_eq!(year.savings(), 0.0);
    }
}
