mod chart_adapter_factory;
mod presenter_factory;

pub use chart_adapter_factory::{ChartAdapterFactory, ChartLibrary};
pub use presenter_factory::{PresenterFactory, PresenterType};
