use super::units::{Currency, Days, Fte, Months, Percentage, Score};
use crate::shared::error::DashboardError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Maximum length for vendor and industry keys
const MAX_KEY_LENGTH: usize = 64;

fn validate_key(kind: &str, key: &str) -> Result<(), DashboardError> {
    if key.is_empty() {
        return Err(DashboardError::validation(format!("{} cannot be empty", kind)));
    }

    if key.len() > MAX_KEY_LENGTH {
        return Err(DashboardError::validation(format!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            kind,
            key.len(),
            MAX_KEY_LENGTH
        )));
    }

    // Keys end up in element ids, so keep them to a conservative alphabet
    if !key
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(DashboardError::validation(format!(
            "{} '{}' contains invalid characters. Only lowercase letters, digits, hyphens and underscores are allowed.",
            kind, key
        )));
    }

    Ok(())
}

/// NewType wrapper for a vendor key; immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VendorId(String);

impl VendorId {
    pub fn new(id: impl Into<String>) -> Result<Self, DashboardError> {
        let id = id.into();
        validate_key("Vendor id", &id)?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for an industry key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct IndustryKey(String);

impl IndustryKey {
    pub fn new(key: impl Into<String>) -> Result<Self, DashboardError> {
        let key = key.into();
        validate_key("Industry key", &key)?;
        Ok(Self(key))
    }

    /// Key used when no industry is known; never present in a catalog
    pub fn unspecified() -> Self {
        Self("unspecified".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IndustryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deployment architecture of a vendor's product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Architecture {
    CloudNative,
    OnPremises,
    Hybrid,
}

impl Architecture {
    pub fn label(&self) -> &'static str {
        match self {
            Architecture::CloudNative => "Cloud-Native",
            Architecture::OnPremises => "On-Premises",
            Architecture::Hybrid => "Hybrid",
        }
    }
}

impl std::str::FromStr for Architecture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(' ', "-").as_str() {
            "cloud" | "cloud-native" | "cloudnative" | "saas" => Ok(Architecture::CloudNative),
            "on-premises" | "on-prem" | "onpremises" => Ok(Architecture::OnPremises),
            "hybrid" | "hybrid-cloud" | "sd-wan" => Ok(Architecture::Hybrid),
            _ => Err(format!(
                "Invalid architecture: {}. Expected 'cloud-native', 'on-premises' or 'hybrid'",
                s
            )),
        }
    }
}

/// Named cost components for the reference scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub hardware: Currency,
    pub software: Currency,
    pub implementation: Currency,
    pub maintenance: Currency,
    pub personnel: Currency,
    pub training: Currency,
    pub hidden: Currency,
}

impl CostBreakdown {
    /// Components in display order, paired with their label
    pub fn components(&self) -> [(&'static str, Currency); 7] {
        [
            ("Hardware", self.hardware),
            ("Software", self.software),
            ("Implementation", self.implementation),
            ("Maintenance", self.maintenance),
            ("Personnel", self.personnel),
            ("Training", self.training),
            ("Hidden", self.hidden),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.components().iter().map(|(_, c)| c.amount()).sum()
    }
}

/// Scalar metrics of a vendor, each with an explicit unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorMetrics {
    /// Headline total cost of ownership for the reference scenario
    pub total_tco: Currency,
    pub roi: Percentage,
    pub payback: Months,
    pub implementation: Days,
    pub fte: Fte,
    pub security_score: Score,
    pub premium_reduction: Percentage,
    pub coverage_increase: Percentage,
    pub risk_score: Score,
}

/// A vendor in the comparison catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorRecord {
    id: VendorId,
    display_name: String,
    short_name: String,
    architecture: Architecture,
    cost_breakdown: CostBreakdown,
    metrics: VendorMetrics,
    capability_scores: BTreeMap<String, Score>,
    compliance_scores: BTreeMap<String, Score>,
}

impl VendorRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: VendorId,
        display_name: String,
        short_name: String,
        architecture: Architecture,
        cost_breakdown: CostBreakdown,
        metrics: VendorMetrics,
        capability_scores: BTreeMap<String, Score>,
        compliance_scores: BTreeMap<String, Score>,
    ) -> Self {
        Self {
            id,
            display_name,
            short_name,
            architecture,
            cost_breakdown,
            metrics,
            capability_scores,
            compliance_scores,
        }
    }

    pub fn id(&self) -> &VendorId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    pub fn cost_breakdown(&self) -> &CostBreakdown {
        &self.cost_breakdown
    }

    pub fn metrics(&self) -> &VendorMetrics {
        &self.metrics
    }

    pub fn capability_scores(&self) -> &BTreeMap<String, Score> {
        &self.capability_scores
    }

    pub fn compliance_scores(&self) -> &BTreeMap<String, Score> {
        &self.compliance_scores
    }

    /// Difference between the headline TCO and the sum of its components.
    /// Positive when visible line items total less than the headline.
    pub fn cost_gap(&self) -> f64 {
        self.metrics.total_tco.amount() - self.cost_breakdown.sum()
    }

    /// True when the components miss the headline TCO by more than
    /// [`COST_SUM_TOLERANCE`] of the headline
    pub fn has_cost_inconsistency(&self) -> bool {
        let total = self.metrics.total_tco.amount();
        self.cost_gap().abs() > total * COST_SUM_TOLERANCE
    }
}

/// Relative tolerance between the cost breakdown sum and the headline TCO
pub const COST_SUM_TOLERANCE: f64 = 0.01;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_vendor_id_valid() {
        let id = VendorId::new("cisco_ise").unwrap();
        assert_eq!(id.as_str(), "cisco_ise");
        assert_eq!(id.to_string(), "cisco_ise");
    }

    #[test]
    fn test_vendor_id_rejects_empty_and_markup() {
        assert!(VendorId::new("").is_err());
        assert!(VendorId::new("<script>").is_err());
        assert!(VendorId::new("Cisco").is_err());
        assert!(VendorId::new("a".repeat(65)).is_err());
    }

    #[test]
    fn test_industry_key_valid() {
        assert_eq!(IndustryKey::new("healthcare").unwrap().as_str(), "healthcare");
        assert!(IndustryKey::new("health care").is_err());
    }

    #[test]
    fn test_architecture_aliases() {
        assert_eq!(
            Architecture::from_str("Cloud").unwrap(),
            Architecture::CloudNative
        );
        assert_eq!(
            Architecture::from_str("On-Premises").unwrap(),
            Architecture::OnPremises
        );
        assert_eq!(
            Architecture::from_str("Hybrid Cloud").unwrap(),
            Architecture::Hybrid
        );
        assert_eq!(Architecture::from_str("SD-WAN").unwrap(), Architecture::Hybrid);
        assert!(Architecture::from_str("mainframe").is_err());
    }

    #[test]
    fn test_cost_breakdown_sum() {
        let c = |v: f64| Currency::new(v).unwrap();
        let breakdown = CostBreakdown {
            hardware: c(10.0),
            software: c(20.0),
            implementation: c(5.0),
            maintenance: c(5.0),
            personnel: c(40.0),
            training: c(5.0),
            hidden: c(15.0),
        };
        assert_eq!(breakdown.sum(), 100.0);
        assert_eq!(breakdown.components()[0].0, "Hardware");
    }
}
