pub mod catalog;
pub mod config_state;
pub mod derived;
pub mod industry;
pub mod units;
pub mod vendor;

pub use catalog::{IndustryCatalog, ReferenceScenario, VendorCatalog};
pub use config_state::{Applied, BoundedRange, ConfigState, SelectionPolicy, Tab, ViewPolicy};
pub use derived::{
    CapabilityComparison, ComplianceCoverage, CostLine, DerivedMetrics, InsuranceImpact,
    ProjectionYear, VendorSummary,
};
pub use industry::{Industry, RiskLevel};
pub use units::{round_half_up, Currency, Days, Fte, Months, Percentage, Score};
pub use vendor::{Architecture, CostBreakdown, IndustryKey, VendorId, VendorMetrics, VendorRecord};
