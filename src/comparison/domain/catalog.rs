use super::industry::Industry;
use super::vendor::{IndustryKey, VendorId, VendorRecord};
use serde::Serialize;
use std::collections::HashMap;

/// The scenario every monetary figure in the dataset refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceScenario {
    pub devices: u32,
    pub years: u8,
}

impl Default for ReferenceScenario {
    fn default() -> Self {
        Self {
            devices: 1000,
            years: 3,
        }
    }
}

/// Immutable, ordered table of vendors
///
/// Catalog order is the order of the dataset and is the documented
/// tie-breaker for rankings.
#[derive(Debug, Clone, Default)]
pub struct VendorCatalog {
    vendors: Vec<VendorRecord>,
    index: HashMap<VendorId, usize>,
}

impl VendorCatalog {
    /// Builds a catalog; later records with an id already present are ignored
    /// and returned so the caller can report them.
    pub fn from_records(records: Vec<VendorRecord>) -> (Self, Vec<VendorRecord>) {
        let mut catalog = Self::default();
        let mut duplicates = Vec::new();
        for record in records {
            if catalog.index.contains_key(record.id()) {
                duplicates.push(record);
                continue;
            }
            catalog
                .index
                .insert(record.id().clone(), catalog.vendors.len());
            catalog.vendors.push(record);
        }
        (catalog, duplicates)
    }

    pub fn get(&self, id: &VendorId) -> Option<&VendorRecord> {
        self.index.get(id).map(|&i| &self.vendors[i])
    }

    pub fn find(&self, id: &str) -> Option<&VendorRecord> {
        VendorId::new(id).ok().and_then(|id| self.get(&id))
    }

    pub fn contains(&self, id: &VendorId) -> bool {
        self.index.contains_key(id)
    }

    /// Position in catalog order
    pub fn position(&self, id: &VendorId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VendorRecord> {
        self.vendors.iter()
    }

    pub fn ids(&self) -> Vec<VendorId> {
        self.vendors.iter().map(|v| v.id().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

/// Immutable, ordered table of industries
#[derive(Debug, Clone, Default)]
pub struct IndustryCatalog {
    industries: Vec<Industry>,
}

impl IndustryCatalog {
    pub fn from_industries(industries: Vec<Industry>) -> (Self, Vec<Industry>) {
        let mut kept: Vec<Industry> = Vec::new();
        let mut duplicates = Vec::new();
        for industry in industries {
            if kept.iter().any(|i| i.key == industry.key) {
                duplicates.push(industry);
            } else {
                kept.push(industry);
            }
        }
        (Self { industries: kept }, duplicates)
    }

    pub fn get(&self, key: &IndustryKey) -> Option<&Industry> {
        self.industries.iter().find(|i| &i.key == key)
    }

    pub fn contains(&self, key: &IndustryKey) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Industry> {
        self.industries.iter()
    }

    pub fn first(&self) -> Option<&Industry> {
        self.industries.first()
    }

    pub fn len(&self) -> usize {
        self.industries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.industries.is_empty()
    }
}
