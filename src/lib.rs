//! nac-dashboard - Executive NAC vendor comparison dashboard
//!
//! This library compares Network Access Control vendors on total cost of
//! ownership, ROI, risk and compliance, and keeps a rendered dashboard in
//! sync with the user's view configuration. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`comparison`): Vendor catalog, view configuration and the metric engine
//! - **Application Layer** (`application`): Controller, view reconciliation and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use nac_dashboard::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let source = EmbeddedDatasetSource::new();
//! let reporter = StderrDiagnosticReporter::new();
//!
//! // Wire the dashboard and drive it
//! let app = DashboardApp::new(source, reporter, ChartLibrary::Text);
//! let mut controller = app.start(DashboardRequest::default(), NoopReportExporter::new(reporter))?;
//! controller.toggle_vendor("cisco");
//! controller.set_device_count(5000);
//! controller.switch_tab(Tab::Financial);
//!
//! // Serialize the page
//! let html = DashboardApp::<EmbeddedDatasetSource, _>::finish_html(&mut controller);
//! println!("{}", html);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod comparison;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::{Command, InteractiveSession};
    pub use crate::adapters::outbound::charts::{TextChartAdapter, UnavailableChartAdapter};
    pub use crate::adapters::outbound::console::StderrDiagnosticReporter;
    pub use crate::adapters::outbound::document::{InMemoryDocument, DEFAULT_MOUNT_ID};
    pub use crate::adapters::outbound::embedded::EmbeddedDatasetSource;
    pub use crate::adapters::outbound::exporters::{JsonReportExporter, NoopReportExporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDatasetReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::application::dto::{DashboardRequest, OutputFormat};
    pub use crate::application::factories::{
        ChartAdapterFactory, ChartLibrary, PresenterFactory, PresenterType,
    };
    pub use crate::application::read_models::{
        Element, Node, Notice, NoticeKind, ReportMetadata, ReportSnapshot, ValueFormat,
    };
    pub use crate::application::use_cases::DashboardController;
    pub use crate::application::view::{
        ChartRegion, Region, RenderStats, RendererOptions, ViewRenderer, ViewState,
        DASHBOARD_ROOT_ID, NOTICES_ID,
    };
    pub use crate::application::{DashboardApp, PageController};
    pub use crate::comparison::domain::{
        Applied, ConfigState, DerivedMetrics, IndustryCatalog, IndustryKey, ReferenceScenario,
        SelectionPolicy, Tab, VendorCatalog, VendorId, ViewPolicy,
    };
    pub use crate::comparison::services::{CatalogLoader, DatasetFormat, LoadedCatalog, MetricEngine};
    pub use crate::ports::inbound::{Action, DashboardPort};
    pub use crate::ports::outbound::{
        CatalogSource, ChartAdapter, ChartHandle, ChartKind, ChartPoint, ChartSpec,
        DiagnosticReporter, OutputPresenter, RawDataset, RenderTarget, ReportExporter,
        TargetResult,
    };
    pub use crate::shared::error::{DashboardError, ExitCode};
    pub use crate::shared::Result;
}
