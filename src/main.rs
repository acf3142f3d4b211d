mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, merge, Settings};
use nac_dashboard::adapters::outbound::console::StderrDiagnosticReporter;
use nac_dashboard::adapters::outbound::embedded::EmbeddedDatasetSource;
use nac_dashboard::adapters::outbound::filesystem::FileSystemDatasetReader;
use nac_dashboard::application::factories::{PresenterFactory, PresenterType};
use nac_dashboard::application::DashboardApp;
use nac_dashboard::ports::outbound::{CatalogSource, DiagnosticReporter};
use nac_dashboard::shared::error::ExitCode;
use nac_dashboard::shared::Result;
use std::io;
use std::process;

fn main() {
    // clap exits with code 2 on its own for invalid arguments
    let args = Args::parse_args();
    let reporter = StderrDiagnosticReporter::new().quiet(args.quiet);

    let exit_code = match run(args, reporter) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: Args, reporter: StderrDiagnosticReporter) -> Result<()> {
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    if let Some(ref config) = config {
        for warning in config.unknown_field_warnings() {
            reporter.report_warning(&warning);
        }
    }

    let settings = merge(args, config)?;

    match settings.dataset.clone() {
        Some(path) => execute(FileSystemDatasetReader::new(path), reporter, settings),
        None => execute(EmbeddedDatasetSource::new(), reporter, settings),
    }
}

fn execute<S: CatalogSource>(
    source: S,
    reporter: StderrDiagnosticReporter,
    settings: Settings,
) -> Result<()> {
    let mut app = DashboardApp::new(source, reporter, settings.charts);
    if let Some(title) = settings.title {
        app = app.with_title(title);
    }

    let destination = settings
        .output
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));

    if settings.interactive {
        let stdin = io::stdin();
        let executed = app.run_interactive(
            settings.request,
            settings.format,
            presenter,
            stdin.lock(),
            io::stderr(),
        )?;
        reporter.report(&format!("Executed {} command(s)", executed));
    } else {
        app.run(settings.request, settings.format, presenter)?;
    }

    reporter.report_completion(&format!(
        "Dashboard ({}) written to {}",
        settings.format, destination
    ));
    Ok(())
}
