use crate::comparison::domain::{round_half_up, VendorRecord};

/// Factor value used when a vendor publishes nothing for it
const NEUTRAL_FACTOR: f64 = 50.0;

/// Cost points lost per million of scaled TCO
const COST_POINTS_PER_MILLION: f64 = 10.0;

/// Deployment points lost per ten hours of implementation
const HOURS_PER_DEPLOYMENT_POINT: f64 = 10.0;

const HOURS_PER_DAY: f64 = 24.0;

/// Capability read as operational automation
const AUTOMATION_CAPABILITY: &str = "automation";

/// Per-factor scores of one vendor, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreFactors {
    pub cost: f64,
    pub security: f64,
    pub compliance: f64,
    pub operations: f64,
    pub deployment: f64,
    pub risk: f64,
}

impl ScoreFactors {
    /// Factors paired with their weight, in display order
    pub fn weighted(&self) -> [(&'static str, f64, f64); 6] {
        [
            ("Cost", OverallScore::COST_WEIGHT, self.cost),
            ("Security", OverallScore::SECURITY_WEIGHT, self.security),
            ("Compliance", OverallScore::COMPLIANCE_WEIGHT, self.compliance),
            ("Operations", OverallScore::OPERATIONS_WEIGHT, self.operations),
            ("Deployment", OverallScore::DEPLOYMENT_WEIGHT, self.deployment),
            ("Risk", OverallScore::RISK_WEIGHT, self.risk),
        ]
    }
}

/// OverallScore policy for the decision matrix
///
/// Rules:
/// 1. Cost starts at 100 and loses 10 points per million of scaled TCO
/// 2. Security is the vendor's security score
/// 3. Compliance is the mean of the vendor's framework coverage
/// 4. Operations is the vendor's `automation` capability
/// 5. Deployment starts at 100 and loses a point per 10 hours of implementation
/// 6. Risk is the insurer risk score
///
/// Missing compliance or automation data counts as 50.
pub struct OverallScore;

impl OverallScore {
    pub const COST_WEIGHT: f64 = 0.25;
    pub const SECURITY_WEIGHT: f64 = 0.20;
    pub const COMPLIANCE_WEIGHT: f64 = 0.20;
    pub const OPERATIONS_WEIGHT: f64 = 0.15;
    pub const DEPLOYMENT_WEIGHT: f64 = 0.10;
    pub const RISK_WEIGHT: f64 = 0.10;

    pub fn factors(vendor: &VendorRecord, scaled_tco: f64) -> ScoreFactors {
        let metrics = vendor.metrics();

        let compliance = vendor.compliance_scores();
        let compliance = if compliance.is_empty() {
            NEUTRAL_FACTOR
        } else {
            compliance.values().map(|s| s.value() as f64).sum::<f64>() / compliance.len() as f64
        };

        let hours = metrics.implementation.value() as f64 * HOURS_PER_DAY;

        ScoreFactors {
            cost: 100.0 - (scaled_tco / 1_000_000.0 * COST_POINTS_PER_MILLION).clamp(0.0, 100.0),
            security: metrics.security_score.value() as f64,
            compliance,
            operations: vendor
                .capability_scores()
                .get(AUTOMATION_CAPABILITY)
                .map_or(NEUTRAL_FACTOR, |s| s.value() as f64),
            deployment: 100.0 - (hours / HOURS_PER_DEPLOYMENT_POINT).min(100.0),
            risk: metrics.risk_score.value() as f64,
        }
    }

    /// Weighted total of [`OverallScore::factors`], rounded to [0, 100]
    pub fn score(vendor: &VendorRecord, scaled_tco: f64) -> u8 {
        let total: f64 = Self::factors(vendor, scaled_tco)
            .weighted()
            .iter()
            .map(|(_, weight, value)| weight * value)
            .sum();
        round_half_up(total).clamp(0, 100) as u8
    }
}
