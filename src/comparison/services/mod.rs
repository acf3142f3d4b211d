mod catalog_loader;
mod metric_engine;

pub use catalog_loader::{CatalogLoader, DatasetFormat, LoadedCatalog};
pub use metric_engine::{
    Direction, MetricContext, MetricEngine, MetricField, Unit, EMPTY_AVERAGE_FALLBACK,
};
