//! Fixtures shared by unit tests across the crate.

use crate::comparison::domain::*;
use std::collections::BTreeMap;

/// Vendor whose cost breakdown sums exactly to `tco`, with fixed scores:
/// security 80, hipaa 95, pci 80, premium reduction 25, coverage 40.
pub fn vendor(id: &str, tco: f64) -> VendorRecord {
    vendor_with(id, tco, 80)
}

pub fn vendor_with(id: &str, tco: f64, security: i64) -> VendorRecord {
    let c = |v: f64| Currency::new(v).unwrap();
    VendorRecord::new(
        VendorId::new(id).unwrap(),
        format!("Vendor {}", id.to_uppercase()),
        id.to_uppercase(),
        Architecture::CloudNative,
        CostBreakdown {
            hardware: c(0.0),
            software: c(tco * 0.5),
            implementation: c(tco * 0.1),
            maintenance: c(tco * 0.1),
            personnel: c(tco * 0.2),
            training: c(tco * 0.05),
            hidden: c(tco * 0.05),
        },
        VendorMetrics {
            total_tco: c(tco),
            roi: Percentage::new_return(100.0).unwrap(),
            payback: Months::new(12),
            implementation: Days::new(30),
            fte: Fte::new(1.0).unwrap(),
            security_score: Score::new(security).unwrap(),
            premium_reduction: Percentage::new(25.0).unwrap(),
            coverage_increase: Percentage::new(40.0).unwrap(),
            risk_score: Score::new(80).unwrap(),
        },
        BTreeMap::from([("zero_trust".to_string(), Score::new(90).unwrap())]),
        BTreeMap::from([
            ("hipaa".to_string(), Score::new(95).unwrap()),
            ("pci".to_string(), Score::new(80).unwrap()),
        ]),
    )
}

/// `record` with its capability scores replaced by `scores`
pub fn with_capabilities(record: VendorRecord, scores: &[(&str, i64)]) -> VendorRecord {
    VendorRecord::new(
        record.id().clone(),
        record.display_name().to_string(),
        record.short_name().to_string(),
        record.architecture(),
        record.cost_breakdown().clone(),
        record.metrics().clone(),
        scores
            .iter()
            .map(|(key, value)| (key.to_string(), Score::new(*value).unwrap()))
            .collect(),
        record.compliance_scores().clone(),
    )
}

/// Industry weighting hipaa and nist
pub fn industry(key: &str, cost_multiplier: f64, security_multiplier: f64) -> Industry {
    Industry {
        key: IndustryKey::new(key).unwrap(),
        name: format!("Industry {}", key),
        avg_breach_cost: Currency::new(4_000_000.0).unwrap(),
        risk_level: RiskLevel::High,
        cost_multiplier,
        security_multiplier,
        compliance_weights: BTreeMap::from([
            ("hipaa".to_string(), 0.3),
            ("nist".to_string(), 0.2),
        ]),
    }
}

/// Catalog {A: tco=100, B: tco=200, C: tco=300} with a neutral industry
pub fn catalog_abc() -> (VendorCatalog, IndustryCatalog) {
    let (vendors, _) = VendorCatalog::from_records(vec![
        vendor_with("a", 100.0, 90),
        vendor_with("b", 200.0, 70),
        vendor_with("c", 300.0, 70),
    ]);
    let (industries, _) = IndustryCatalog::from_industries(vec![industry("neutral", 1.0, 1.0)]);
    (vendors, industries)
}

pub fn state_for(selected: &[&str]) -> ConfigState {
    ConfigState::new(
        selected.iter().map(|s| VendorId::new(*s).unwrap()).collect(),
        IndustryKey::new("neutral").unwrap(),
        1000,
        3,
        Tab::Overview,
        ViewPolicy::default(),
    )
}
