use crate::comparison::domain::{
    Architecture, CostBreakdown, Currency, Days, Fte, Industry, IndustryCatalog, IndustryKey,
    Months, Percentage, ReferenceScenario, RiskLevel, Score, VendorCatalog, VendorId,
    VendorMetrics, VendorRecord,
};
use crate::shared::error::DashboardError;
use crate::shared::Result;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Serialization format of a raw dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Toml,
    Yaml,
}

impl DatasetFormat {
    /// Picks the format from the file extension; unknown extensions are JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => DatasetFormat::Toml,
            Some("yml") | Some("yaml") => DatasetFormat::Yaml,
            _ => DatasetFormat::Json,
        }
    }
}

/// Catalog produced by [`CatalogLoader::load`] together with the warnings
/// for every entry that was skipped or flagged
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub vendors: VendorCatalog,
    pub industries: IndustryCatalog,
    pub reference: ReferenceScenario,
    pub warnings: Vec<DashboardError>,
}

#[derive(Debug, Deserialize)]
struct ReferenceDto {
    devices: u32,
    years: u8,
}

#[derive(Debug, Deserialize)]
struct VendorDto {
    id: String,
    name: String,
    #[serde(default)]
    short_name: Option<String>,
    architecture: String,
    cost_breakdown: CostBreakdownDto,
    metrics: MetricsDto,
    #[serde(default)]
    capabilities: BTreeMap<String, i64>,
    #[serde(default)]
    compliance: BTreeMap<String, i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CostBreakdownDto {
    hardware: f64,
    software: f64,
    implementation: f64,
    maintenance: f64,
    personnel: f64,
    training: f64,
    hidden: f64,
}

#[derive(Debug, Deserialize)]
struct MetricsDto {
    total_tco: f64,
    roi: f64,
    payback_months: u32,
    implementation_days: u32,
    fte: f64,
    security_score: i64,
    #[serde(default)]
    premium_reduction: f64,
    #[serde(default)]
    coverage_increase: f64,
    #[serde(default)]
    risk_score: i64,
}

#[derive(Debug, Deserialize)]
struct IndustryDto {
    key: String,
    name: String,
    avg_breach_cost: f64,
    risk_level: String,
    #[serde(default = "neutral_multiplier")]
    cost_multiplier: f64,
    #[serde(default = "neutral_multiplier")]
    security_multiplier: f64,
    #[serde(default)]
    compliance_weights: BTreeMap<String, f64>,
}

fn neutral_multiplier() -> f64 {
    1.0
}

/// CatalogLoader service turning raw dataset text into catalogs
///
/// The document as a whole must parse and carry a `reference` section.
/// Beyond that the loader is tolerant: a malformed vendor or industry entry
/// is skipped with a [`DashboardError::DataError`] warning and the remaining
/// entries still load.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(raw: &str, format: DatasetFormat) -> Result<LoadedCatalog> {
        let document = Self::parse_document(raw, format)?;

        let reference = document
            .get("reference")
            .ok_or_else(|| anyhow::anyhow!("dataset has no 'reference' section"))?;
        let reference: ReferenceDto = serde_json::from_value(reference.clone())
            .map_err(|e| anyhow::anyhow!("invalid 'reference' section: {}", e))?;
        if reference.devices == 0 || reference.years == 0 {
            anyhow::bail!("'reference' devices and years must be positive");
        }
        let reference = ReferenceScenario {
            devices: reference.devices,
            years: reference.years,
        };

        let mut warnings = Vec::new();

        let mut records = Vec::new();
        for (index, entry) in Self::entries(&document, "vendors")?.iter().enumerate() {
            let label = Self::entry_label(entry, "vendors", "id", index);
            match Self::vendor_from(entry) {
                Ok(record) => {
                    if record.has_cost_inconsistency() {
                        warnings.push(DashboardError::CostInconsistency {
                            vendor: record.id().to_string(),
                            components: record.cost_breakdown().sum(),
                            total: record.metrics().total_tco.amount(),
                        });
                    }
                    records.push(record);
                }
                Err(reason) => warnings.push(DashboardError::data(label, reason)),
            }
        }
        let (vendors, duplicates) = VendorCatalog::from_records(records);
        for duplicate in duplicates {
            warnings.push(DashboardError::data(
                duplicate.id().as_str(),
                "duplicate vendor id; the first occurrence is kept",
            ));
        }

        let mut parsed_industries = Vec::new();
        for (index, entry) in Self::entries(&document, "industries")?.iter().enumerate() {
            let label = Self::entry_label(entry, "industries", "key", index);
            match Self::industry_from(entry) {
                Ok(industry) => parsed_industries.push(industry),
                Err(reason) => warnings.push(DashboardError::data(label, reason)),
            }
        }
        let (industries, duplicates) = IndustryCatalog::from_industries(parsed_industries);
        for duplicate in duplicates {
            warnings.push(DashboardError::data(
                duplicate.key.as_str(),
                "duplicate industry key; the first occurrence is kept",
            ));
        }

        Ok(LoadedCatalog {
            vendors,
            industries,
            reference,
            warnings,
        })
    }

    fn parse_document(raw: &str, format: DatasetFormat) -> Result<Value> {
        let document: Value = match format {
            DatasetFormat::Json => serde_json::from_str(raw)?,
            DatasetFormat::Toml => toml::from_str(raw)?,
            DatasetFormat::Yaml => serde_yaml_ng::from_str(raw)?,
        };
        if !document.is_object() {
            anyhow::bail!("dataset root must be a table/object");
        }
        Ok(document)
    }

    /// A missing list is empty; a list of the wrong shape fails the document
    fn entries<'a>(document: &'a Value, key: &str) -> Result<&'a [Value]> {
        match document.get(key) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => anyhow::bail!("'{}' must be a list", key),
        }
    }

    fn entry_label(entry: &Value, list: &str, id_field: &str, index: usize) -> String {
        entry
            .get(id_field)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}[{}]", list, index))
    }

    fn vendor_from(entry: &Value) -> std::result::Result<VendorRecord, String> {
        let dto: VendorDto = serde_json::from_value(entry.clone()).map_err(|e| e.to_string())?;
        let id = VendorId::new(dto.id).map_err(|e| e.to_string())?;
        let architecture: Architecture = dto.architecture.parse()?;

        let c = |field: &str, value: f64| {
            Currency::new(value).map_err(|e| format!("{}: {}", field, e))
        };
        let b = dto.cost_breakdown;
        let cost_breakdown = CostBreakdown {
            hardware: c("hardware", b.hardware)?,
            software: c("software", b.software)?,
            implementation: c("implementation", b.implementation)?,
            maintenance: c("maintenance", b.maintenance)?,
            personnel: c("personnel", b.personnel)?,
            training: c("training", b.training)?,
            hidden: c("hidden", b.hidden)?,
        };

        let m = dto.metrics;
        let metrics = VendorMetrics {
            total_tco: c("total_tco", m.total_tco)?,
            roi: Percentage::new_return(m.roi).map_err(|e| format!("roi: {}", e))?,
            payback: Months::new(m.payback_months),
            implementation: Days::new(m.implementation_days),
            fte: Fte::new(m.fte).map_err(|e| format!("fte: {}", e))?,
            security_score: Score::new(m.security_score)
                .map_err(|e| format!("security_score: {}", e))?,
            premium_reduction: Percentage::new(m.premium_reduction)
                .map_err(|e| format!("premium_reduction: {}", e))?,
            coverage_increase: Percentage::new(m.coverage_increase)
                .map_err(|e| format!("coverage_increase: {}", e))?,
            risk_score: Score::new(m.risk_score).map_err(|e| format!("risk_score: {}", e))?,
        };

        let capability_scores = Self::scores("capabilities", dto.capabilities)?;
        let compliance_scores = Self::scores("compliance", dto.compliance)?;
        let short_name = dto.short_name.unwrap_or_else(|| dto.name.clone());

        Ok(VendorRecord::new(
            id,
            dto.name,
            short_name,
            architecture,
            cost_breakdown,
            metrics,
            capability_scores,
            compliance_scores,
        ))
    }

    fn scores(
        section: &str,
        raw: BTreeMap<String, i64>,
    ) -> std::result::Result<BTreeMap<String, Score>, String> {
        raw.into_iter()
            .map(|(name, value)| {
                Score::new(value)
                    .map(|score| (name.clone(), score))
                    .map_err(|e| format!("{}.{}: {}", section, name, e))
            })
            .collect()
    }

    fn industry_from(entry: &Value) -> std::result::Result<Industry, String> {
        let dto: IndustryDto = serde_json::from_value(entry.clone()).map_err(|e| e.to_string())?;
        let key = IndustryKey::new(dto.key).map_err(|e| e.to_string())?;
        let risk_level: RiskLevel = dto.risk_level.parse()?;
        let avg_breach_cost =
            Currency::new(dto.avg_breach_cost).map_err(|e| format!("avg_breach_cost: {}", e))?;

        for (field, value) in [
            ("cost_multiplier", dto.cost_multiplier),
            ("security_multiplier", dto.security_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", field, value));
            }
        }
        if let Some((framework, weight)) = dto
            .compliance_weights
            .iter()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(format!(
                "compliance weight for '{}' must be non-negative, got {}",
                framework, weight
            ));
        }

        Ok(Industry {
            key,
            name: dto.name,
            avg_breach_cost,
            risk_level,
            cost_multiplier: dto.cost_multiplier,
            security_multiplier: dto.security_multiplier,
            compliance_weights: dto.compliance_weights,
        })
    }
}
