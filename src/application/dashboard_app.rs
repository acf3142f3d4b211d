use crate::adapters::inbound::InteractiveSession;
use crate::adapters::outbound::document::{InMemoryDocument, DEFAULT_MOUNT_ID};
use crate::adapters::outbound::exporters::{JsonReportExporter, NoopReportExporter};
use crate::application::dto::{DashboardRequest, OutputFormat};
use crate::application::factories::{ChartAdapterFactory, ChartLibrary};
use crate::application::use_cases::DashboardController;
use crate::comparison::services::{CatalogLoader, LoadedCatalog};
use crate::ports::outbound::{CatalogSource, DiagnosticReporter, OutputPresenter, RenderTarget, ReportExporter};
use crate::shared::error::DashboardError;
use crate::shared::Result;
use anyhow::Context;
use std::io::{BufRead, Write};

/// Controller over the in-memory page, as assembled by [`DashboardApp`]
pub type PageController<R, X> = DashboardController<InMemoryDocument, R, X>;

/// DashboardApp - Composition root for one dashboard run
///
/// Loads the catalog from a [`CatalogSource`], wires a controller to an
/// in-memory page and writes the result in the requested format. Nothing
/// here is global; `main` constructs one per invocation.
pub struct DashboardApp<S, R> {
    source: S,
    reporter: R,
    charts: ChartLibrary,
    title: String,
}

impl<S, R> DashboardApp<S, R>
where
    S: CatalogSource,
    R: DiagnosticReporter + Clone,
{
    pub fn new(source: S, reporter: R, charts: ChartLibrary) -> Self {
        Self {
            source,
            reporter,
            charts,
            title: "NAC Vendor Comparison".to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Reads and parses the dataset
    ///
    /// # Errors
    /// Returns an error if the dataset cannot be read or is not a valid
    /// document. Invalid entries inside a valid document are not errors;
    /// they are returned as warnings of the loaded catalog.
    pub fn load_catalog(&self) -> Result<LoadedCatalog> {
        let raw = self.source.read_dataset()?;
        self.reporter
            .report(&format!("📖 Loading vendor dataset from: {}", raw.origin));

        let catalog = CatalogLoader::load(&raw.content, raw.format).map_err(|e| {
            DashboardError::DatasetParse {
                path: raw.origin.clone().into(),
                details: format!("{:#}", e),
            }
        })?;

        self.reporter.report(&format!(
            "✅ Loaded {} vendor(s) and {} industry profile(s)",
            catalog.vendors.len(),
            catalog.industries.len()
        ));
        Ok(catalog)
    }

    /// Builds a controller on a fresh page and renders the initial state
    pub fn start<X: ReportExporter>(
        &self,
        request: DashboardRequest,
        exporter: X,
    ) -> Result<PageController<R, X>> {
        let catalog = self.load_catalog()?;
        let mut controller = DashboardController::new(
            catalog,
            request,
            ChartAdapterFactory::create(self.charts),
            InMemoryDocument::new(&self.title),
            self.reporter.clone(),
            exporter,
        );
        controller.start(DEFAULT_MOUNT_ID);
        Ok(controller)
    }

    /// Renders the page for `request` and returns it as HTML
    pub fn render_html(&self, request: DashboardRequest) -> Result<String> {
        let mut controller = self.start(request, NoopReportExporter::new(self.reporter.clone()))?;
        Ok(Self::finish_html(&mut controller))
    }

    /// Runs the dashboard non-interactively and writes it to `presenter`
    pub fn run(
        &self,
        request: DashboardRequest,
        format: OutputFormat,
        presenter: Box<dyn OutputPresenter>,
    ) -> Result<()> {
        match format {
            OutputFormat::Html => {
                let html = self.render_html(request)?;
                presenter
                    .present(&html)
                    .context("Failed to write dashboard page")?;
            }
            OutputFormat::Json => {
                let mut controller = self.start(request, JsonReportExporter::new(presenter))?;
                controller.export_report()?;
                controller.shutdown();
            }
        }
        Ok(())
    }

    /// Drives the dashboard from line-based commands, then writes the final
    /// state to `presenter`
    ///
    /// With JSON output every `export` command writes a report and a final
    /// report is written on exit. Returns the number of commands executed.
    pub fn run_interactive(
        &self,
        request: DashboardRequest,
        format: OutputFormat,
        presenter: Box<dyn OutputPresenter>,
        input: impl BufRead,
        output: impl Write,
    ) -> Result<usize> {
        match format {
            OutputFormat::Html => {
                let mut controller =
                    self.start(request, NoopReportExporter::new(self.reporter.clone()))?;
                let executed = InteractiveSession::new(&mut controller).run(input, output)?;
                let html = Self::finish_html(&mut controller);
                presenter
                    .present(&html)
                    .context("Failed to write dashboard page")?;
                Ok(executed)
            }
            OutputFormat::Json => {
                let mut controller = self.start(request, JsonReportExporter::new(presenter))?;
                let executed = InteractiveSession::new(&mut controller).run(input, output)?;
                controller.export_report()?;
                controller.shutdown();
                Ok(executed)
            }
        }
    }

    /// Settles animations and serializes the page, then releases the view
    pub fn finish_html<X: ReportExporter>(controller: &mut PageController<R, X>) -> String {
        controller.settle();
        let html = controller.document().to_html();
        controller.shutdown();
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::embedded::EmbeddedDatasetSource;
    use crate::comparison::services::DatasetFormat;
    use crate::ports::outbound::RawDataset;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SilentReporter;

    impl DiagnosticReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_warning(&self, _message: &str) {}
        fn report_notice(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    struct InlineSource(&'static str);

    impl CatalogSource for InlineSource {
        fn read_dataset(&self) -> Result<RawDataset> {
            Ok(RawDataset {
                content: self.0.to_string(),
                format: DatasetFormat::Json,
                origin: "inline".to_string(),
            })
        }
    }

    struct CapturingPresenter(Rc<RefCell<String>>);

    impl OutputPresenter for CapturingPresenter {
        fn present(&self, content: &str) -> Result<()> {
            self.0.borrow_mut().push_str(content);
            Ok(())
        }
    }

    #[test]
    fn test_render_html_from_embedded_dataset() {
        let app = DashboardApp::new(EmbeddedDatasetSource, SilentReporter, ChartLibrary::Text);
        let html = app.render_html(DashboardRequest::default()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Portnox"));
        assert!(html.contains(r#"id="kpi-savings""#));
        assert!(html.contains("text-chart"));
    }

    #[test]
    fn test_run_json_writes_report() {
        let app = DashboardApp::new(EmbeddedDatasetSource, SilentReporter, ChartLibrary::Disabled);
        let output = Rc::new(RefCell::new(String::new()));
        app.run(
            DashboardRequest::default(),
            OutputFormat::Json,
            Box::new(CapturingPresenter(Rc::clone(&output))),
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output.borrow()).unwrap();
        assert_eq!(value["metrics"]["focus_vendor"], "portnox");
        assert_eq!(value["state"]["selected_vendor_ids"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_run_interactive_applies_commands_before_writing() {
        let app = DashboardApp::new(EmbeddedDatasetSource, SilentReporter, ChartLibrary::Text);
        let output = Rc::new(RefCell::new(String::new()));
        let executed = app
            .run_interactive(
                DashboardRequest::default(),
                OutputFormat::Html,
                Box::new(CapturingPresenter(Rc::clone(&output))),
                "devices 2500\ntab security\nquit\n".as_bytes(),
                Vec::new(),
            )
            .unwrap();

        assert_eq!(executed, 2);
        let html = output.borrow();
        assert!(html.contains("2500 devices"));
        assert!(html.contains(r#"class="tab-panel active" data-tab="security""#));
    }

    #[test]
    fn test_unparseable_dataset_is_an_error() {
        let app = DashboardApp::new(InlineSource("{ nope"), SilentReporter, ChartLibrary::Text);
        let err = app.load_catalog().unwrap_err();
        assert!(err.to_string().contains("Failed to parse dataset"));
    }

    #[test]
    fn test_disabled_charts_render_fallback_text() {
        let app = DashboardApp::new(EmbeddedDatasetSource, SilentReporter, ChartLibrary::Disabled);
        let html = app.render_html(DashboardRequest::default()).unwrap();
        assert!(html.contains("chart-fallback"));
        assert!(!html.contains("text-chart"));
    }
}
