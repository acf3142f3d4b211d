use crate::comparison::domain::{
    ComplianceCoverage, Industry, InsuranceImpact, Score, VendorRecord,
};

/// Bonus factor applied to frameworks the industry weights
const WEIGHTED_FRAMEWORK_FACTOR: f64 = 1.1;

/// Upper bound for the displayed insurance premium reduction (percent)
const MAX_PREMIUM_REDUCTION: f64 = 35.0;

/// Upper bound for the displayed insurance coverage increase (percent)
const MAX_COVERAGE_INCREASE: f64 = 50.0;

/// IndustryAdjustment policy for scaling vendor figures to an industry
///
/// Rules:
/// 1. Costs are multiplied by the industry's cost multiplier
/// 2. Returns and insurance figures are multiplied by the security multiplier
/// 3. Compliance coverage for frameworks the industry weights gets a 10% bonus,
///    capped at 100
/// 4. Premium reduction is capped at 35%, coverage increase at 50%
pub struct IndustryAdjustment;

impl IndustryAdjustment {
    pub fn cost(amount: f64, industry: &Industry) -> f64 {
        amount * industry.cost_multiplier
    }

    pub fn roi(roi: f64, industry: &Industry) -> i64 {
        (roi * industry.security_multiplier).round() as i64
    }

    /// Compliance coverage of a vendor, in the vendor's framework order
    pub fn compliance(vendor: &VendorRecord, industry: &Industry) -> Vec<ComplianceCoverage> {
        vendor
            .compliance_scores()
            .iter()
            .map(|(framework, score)| {
                let weighted = industry.weights_framework(framework);
                let adjusted = if weighted {
                    (score.value() as f64 * WEIGHTED_FRAMEWORK_FACTOR)
                        .round()
                        .min(100.0) as u8
                } else {
                    score.value()
                };
                ComplianceCoverage {
                    framework: framework.clone(),
                    raw: *score,
                    adjusted,
                    weighted_by_industry: weighted,
                }
            })
            .collect()
    }

    pub fn insurance(vendor: &VendorRecord, industry: &Industry) -> InsuranceImpact {
        let metrics = vendor.metrics();
        let scale = |value: f64, cap: f64| -> u8 {
            (value * industry.security_multiplier)
                .round()
                .clamp(0.0, cap) as u8
        };
        InsuranceImpact {
            premium_reduction: scale(metrics.premium_reduction.value(), MAX_PREMIUM_REDUCTION),
            coverage_increase: scale(metrics.coverage_increase.value(), MAX_COVERAGE_INCREASE),
            risk_score: metrics.risk_score,
        }
    }

    /// Residual risk exposure implied by a security score (100 - score)
    pub fn residual_risk(score: Score) -> f64 {
        100.0 - score.value() as f64
    }
}
