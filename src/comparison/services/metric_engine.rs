//! Pure comparison metrics over the vendor catalog.
//!
//! Nothing in this module touches rendering; every function is deterministic
//! for a given catalog and [`MetricContext`].

use crate::comparison::domain::{
    round_half_up, CapabilityComparison, ConfigState, CostLine, Currency, DerivedMetrics, Industry,
    IndustryCatalog, ProjectionYear, ReferenceScenario, Score, VendorCatalog, VendorId,
    VendorRecord, VendorSummary,
};
use crate::comparison::policies::{CostProjection, IndustryAdjustment, OverallScore};
use std::collections::BTreeSet;

/// Value returned by [`MetricEngine::average_of`] when no vendor in the
/// subset resolves. Zero keeps every downstream delta at zero instead of
/// inventing a baseline.
pub const EMPTY_AVERAGE_FALLBACK: f64 = 0.0;

/// Which end of a metric is preferable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    MinIsBetter,
    MaxIsBetter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Currency,
    Percentage,
    Months,
    Days,
    Fte,
    Score,
}

/// Named scalar fields that can be averaged, ranked and compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricField {
    /// TCO scaled to the context's devices, period and industry
    Tco,
    Roi,
    Payback,
    Implementation,
    Fte,
    SecurityScore,
    PremiumReduction,
    RiskScore,
    /// Weighted decision-matrix score, see [`OverallScore`]
    OverallScore,
}

impl MetricField {
    pub fn direction(&self) -> Direction {
        match self {
            MetricField::Tco
            | MetricField::Payback
            | MetricField::Implementation
            | MetricField::Fte => Direction::MinIsBetter,
            MetricField::Roi
            | MetricField::SecurityScore
            | MetricField::PremiumReduction
            | MetricField::RiskScore
            | MetricField::OverallScore => Direction::MaxIsBetter,
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            MetricField::Tco => Unit::Currency,
            MetricField::Roi | MetricField::PremiumReduction => Unit::Percentage,
            MetricField::Payback => Unit::Months,
            MetricField::Implementation => Unit::Days,
            MetricField::Fte => Unit::Fte,
            MetricField::SecurityScore | MetricField::RiskScore | MetricField::OverallScore => {
                Unit::Score
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricField::Tco => "Total Cost of Ownership",
            MetricField::Roi => "Return on Investment",
            MetricField::Payback => "Payback Period",
            MetricField::Implementation => "Implementation Time",
            MetricField::Fte => "Staffing (FTE)",
            MetricField::SecurityScore => "Security Score",
            MetricField::PremiumReduction => "Insurance Premium Reduction",
            MetricField::RiskScore => "Insurer Risk Score",
            MetricField::OverallScore => "Overall Score",
        }
    }
}

/// Scenario the metrics are evaluated for
#[derive(Debug, Clone, Copy)]
pub struct MetricContext<'a> {
    pub reference: ReferenceScenario,
    pub device_count: u32,
    pub analysis_period_years: u8,
    pub industry: Option<&'a Industry>,
}

impl<'a> MetricContext<'a> {
    pub fn from_state(
        state: &ConfigState,
        reference: ReferenceScenario,
        industries: &'a IndustryCatalog,
    ) -> Self {
        Self {
            reference,
            device_count: state.device_count(),
            analysis_period_years: state.analysis_period_years(),
            industry: industries.get(state.industry()),
        }
    }

    /// Context equal to the reference scenario with no industry adjustment
    pub fn reference(reference: ReferenceScenario) -> Self {
        Self {
            reference,
            device_count: reference.devices,
            analysis_period_years: reference.years,
            industry: None,
        }
    }

    /// Linear factor from the reference scenario to this one
    fn cost_scale(&self) -> f64 {
        let devices = self.device_count as f64 / self.reference.devices.max(1) as f64;
        let years = self.analysis_period_years as f64 / self.reference.years.max(1) as f64;
        let industry = self.industry.map_or(1.0, |i| i.cost_multiplier);
        devices * years * industry
    }
}

/// MetricEngine service deriving comparison metrics
pub struct MetricEngine<'a> {
    catalog: &'a VendorCatalog,
    context: MetricContext<'a>,
}

impl<'a> MetricEngine<'a> {
    pub fn new(catalog: &'a VendorCatalog, context: MetricContext<'a>) -> Self {
        Self { catalog, context }
    }

    pub fn value_of(&self, vendor: &VendorRecord, field: MetricField) -> f64 {
        let m = vendor.metrics();
        match field {
            MetricField::Tco => m.total_tco.amount() * self.context.cost_scale(),
            MetricField::Roi => m.roi.value(),
            MetricField::Payback => m.payback.value() as f64,
            MetricField::Implementation => m.implementation.value() as f64,
            MetricField::Fte => m.fte.value(),
            MetricField::SecurityScore => m.security_score.value() as f64,
            MetricField::PremiumReduction => m.premium_reduction.value(),
            MetricField::RiskScore => m.risk_score.value() as f64,
            MetricField::OverallScore => {
                OverallScore::score(vendor, self.value_of(vendor, MetricField::Tco)) as f64
            }
        }
    }

    pub fn value(&self, id: &VendorId, field: MetricField) -> Option<f64> {
        self.catalog.get(id).map(|v| self.value_of(v, field))
    }

    /// Arithmetic mean of `field` over the ids that resolve in the catalog.
    ///
    /// Returns [`EMPTY_AVERAGE_FALLBACK`] when nothing resolves.
    pub fn average_of(&self, vendor_ids: &[VendorId], field: MetricField) -> f64 {
        let values: Vec<f64> = vendor_ids
            .iter()
            .filter_map(|id| self.value(id, field))
            .collect();
        if values.is_empty() {
            return EMPTY_AVERAGE_FALLBACK;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// `(base - comparison) / base * 100`, halves rounded toward positive
    /// infinity; 0 when `base` is 0.
    pub fn percent_delta(base: f64, comparison: f64) -> i64 {
        if base == 0.0 {
            return 0;
        }
        round_half_up((base - comparison) / base * 100.0)
    }

    /// Orders the resolvable ids by `field`. The sort is stable and ties keep
    /// catalog order; unknown and repeated ids are dropped.
    pub fn rank(
        &self,
        vendor_ids: &[VendorId],
        field: MetricField,
        direction: Direction,
    ) -> Vec<VendorId> {
        let mut entries: Vec<(usize, &VendorId, f64)> = Vec::new();
        for id in vendor_ids {
            if entries.iter().any(|(_, seen, _)| *seen == id) {
                continue;
            }
            if let (Some(pos), Some(value)) = (self.catalog.position(id), self.value(id, field)) {
                entries.push((pos, id, value));
            }
        }

        entries.sort_by_key(|(pos, _, _)| *pos);
        entries.sort_by(|a, b| match direction {
            Direction::MinIsBetter => a.2.total_cmp(&b.2),
            Direction::MaxIsBetter => b.2.total_cmp(&a.2),
        });

        entries.into_iter().map(|(_, id, _)| id.clone()).collect()
    }

    /// True iff `vendor_id` is in the subset and its value equals the best
    /// value of the subset under the field's direction. Ties are all optimal.
    pub fn is_optimal(&self, vendor_id: &VendorId, field: MetricField, vendor_ids: &[VendorId]) -> bool {
        if !vendor_ids.contains(vendor_id) {
            return false;
        }
        let Some(value) = self.value(vendor_id, field) else {
            return false;
        };

        let values = vendor_ids.iter().filter_map(|id| self.value(id, field));
        let best = match field.direction() {
            Direction::MinIsBetter => values.fold(f64::INFINITY, f64::min),
            Direction::MaxIsBetter => values.fold(f64::NEG_INFINITY, f64::max),
        };
        value == best
    }

    /// Computes every metric the dashboard displays for `state`
    pub fn derive(&self, state: &ConfigState) -> DerivedMetrics {
        let selected = state.selected_vendor_ids();
        let focus = state.focus_vendor().and_then(|id| self.catalog.get(id));
        let competitors = state.competitors();
        let has_competitors = competitors.iter().any(|id| self.catalog.contains(id));

        let focus_tco = focus.map_or(0.0, |v| self.value_of(v, MetricField::Tco));
        let average_tco = self.average_of(competitors, MetricField::Tco);
        let savings = (average_tco - focus_tco).max(0.0);
        let savings_percent = Self::percent_delta(average_tco, focus_tco);

        let risk_reduction_percent = match focus {
            Some(v) if has_competitors => {
                let competitor_risk =
                    100.0 - self.average_of(competitors, MetricField::SecurityScore);
                let focus_risk = IndustryAdjustment::residual_risk(v.metrics().security_score);
                Self::percent_delta(competitor_risk, focus_risk).clamp(0, 100)
            }
            _ => 0,
        };

        let industry = self.context.industry;
        let breach_exposure_avoided = industry.map_or(0.0, |i| {
            i.avg_breach_cost.amount() * risk_reduction_percent as f64 / 100.0
        });

        let (adjusted_roi, compliance, insurance) = match (focus, industry) {
            (Some(v), Some(i)) => (
                IndustryAdjustment::roi(v.metrics().roi.value(), i),
                IndustryAdjustment::compliance(v, i),
                Some(IndustryAdjustment::insurance(v, i)),
            ),
            (Some(v), None) => (v.metrics().roi.value().round() as i64, Vec::new(), None),
            _ => (0, Vec::new(), None),
        };

        let records: Vec<&VendorRecord> = selected
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect();
        let vendors = records.iter().map(|v| self.summarize(v, selected)).collect();

        let period = self.context.analysis_period_years;
        let projection = match focus {
            Some(_) => (1..=period)
                .map(|year| ProjectionYear {
                    year,
                    focus: currency(CostProjection::cumulative(focus_tco, period, year)),
                    competitor_average: currency(CostProjection::cumulative(
                        average_tco,
                        period,
                        year,
                    )),
                })
                .collect(),
            None => Vec::new(),
        };

        DerivedMetrics {
            focus_vendor: focus.map(|v| v.id().clone()),
            focus_name: focus.map(|v| v.display_name().to_string()),
            focus_tco: currency(focus_tco),
            average_competitor_tco: currency(average_tco),
            savings: currency(savings),
            savings_percent,
            risk_reduction_percent,
            breach_exposure_avoided: currency(breach_exposure_avoided),
            adjusted_roi,
            payback_months: focus.map(|v| v.metrics().payback.value()),
            cost_breakdown: focus.map_or_else(Vec::new, |v| self.scaled_breakdown(v)),
            compliance,
            insurance,
            tco_ranking: self.rank(selected, MetricField::Tco, Direction::MinIsBetter),
            security_ranking: self.rank(
                selected,
                MetricField::SecurityScore,
                Direction::MaxIsBetter,
            ),
            vendors,
            capabilities: Self::compare_capabilities(&records),
            projection,
            industry_name: industry.map_or_else(|| "Unknown industry".to_string(), |i| i.name.clone()),
            device_count: self.context.device_count,
            analysis_period_years: self.context.analysis_period_years,
        }
    }

    /// One row per capability any of `vendors` scores, in key order
    fn compare_capabilities(vendors: &[&VendorRecord]) -> Vec<CapabilityComparison> {
        let keys: BTreeSet<&String> = vendors
            .iter()
            .flat_map(|v| v.capability_scores().keys())
            .collect();

        keys.into_iter()
            .map(|key| {
                let scores: Vec<Option<Score>> = vendors
                    .iter()
                    .map(|v| v.capability_scores().get(key).copied())
                    .collect();
                let best = scores.iter().flatten().max().copied();
                let leaders = vendors
                    .iter()
                    .zip(&scores)
                    .filter(|(_, score)| score.is_some() && **score == best)
                    .map(|(v, _)| v.id().clone())
                    .collect();
                CapabilityComparison {
                    capability: key.clone(),
                    scores,
                    leaders,
                }
            })
            .collect()
    }

    fn scaled_breakdown(&self, vendor: &VendorRecord) -> Vec<CostLine> {
        let scale = self.context.cost_scale();
        vendor
            .cost_breakdown()
            .components()
            .into_iter()
            .map(|(component, amount)| CostLine {
                component,
                amount: currency(amount.amount() * scale),
            })
            .collect()
    }

    fn summarize(&self, vendor: &VendorRecord, subset: &[VendorId]) -> VendorSummary {
        let m = vendor.metrics();
        let scaled_tco = self.value_of(vendor, MetricField::Tco);
        VendorSummary {
            id: vendor.id().clone(),
            name: vendor.display_name().to_string(),
            architecture: vendor.architecture().label(),
            scaled_tco: currency(scaled_tco),
            roi: m.roi.value(),
            security_score: m.security_score,
            implementation_days: m.implementation.value(),
            fte: m.fte.value(),
            payback_months: m.payback.value(),
            lowest_tco: self.is_optimal(vendor.id(), MetricField::Tco, subset),
            best_security: self.is_optimal(vendor.id(), MetricField::SecurityScore, subset),
            overall_score: OverallScore::score(vendor, scaled_tco),
            best_overall: self.is_optimal(vendor.id(), MetricField::OverallScore, subset),
            cost_inconsistent: vendor.has_cost_inconsistency(),
        }
    }
}

/// Scaled figures are products of validated non-negative inputs
fn currency(amount: f64) -> Currency {
    Currency::new(amount).unwrap_or(Currency::ZERO)
}
