use super::units::Currency;
use super::vendor::IndustryKey;
use serde::Serialize;
use std::collections::BTreeMap;

/// Qualitative breach risk of an industry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            "critical" => Ok(RiskLevel::Critical),
            _ => Err(format!(
                "Invalid risk level: {}. Expected low, medium, high or critical",
                s
            )),
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        };
        write!(f, "{}", label)
    }
}

/// Industry profile: breach cost and the multipliers applied to vendor figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Industry {
    pub key: IndustryKey,
    pub name: String,
    pub avg_breach_cost: Currency,
    pub risk_level: RiskLevel,
    pub cost_multiplier: f64,
    pub security_multiplier: f64,
    /// Framework name -> weight. Frameworks present here are emphasized.
    pub compliance_weights: BTreeMap<String, f64>,
}

impl Industry {
    pub fn weights_framework(&self, framework: &str) -> bool {
        self.compliance_weights
            .get(framework)
            .is_some_and(|w| *w > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_risk_level_round_trip_display() {
        assert_eq!(RiskLevel::from_str("Critical").unwrap(), RiskLevel::Critical);
        assert_eq!(RiskLevel::High.to_string(), "High");
        assert!(RiskLevel::from_str("extreme").is_err());
    }

    #[test]
    fn test_weights_framework() {
        let industry = Industry {
            key: IndustryKey::new("healthcare").unwrap(),
            name: "Healthcare".to_string(),
            avg_breach_cost: Currency::new(10_930_000.0).unwrap(),
            risk_level: RiskLevel::Critical,
            cost_multiplier: 1.2,
            security_multiplier: 1.4,
            compliance_weights: BTreeMap::from([
                ("hipaa".to_string(), 0.3),
                ("pci".to_string(), 0.0),
            ]),
        };
        assert!(industry.weights_framework("hipaa"));
        assert!(!industry.weights_framework("pci"));
        assert!(!industry.weights_framework("sox"));
    }
}
