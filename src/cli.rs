use clap::Parser;
use std::path::PathBuf;

use nac_dashboard::application::dto::OutputFormat;
use nac_dashboard::comparison::domain::Tab;

/// Compare NAC vendors on cost, risk and compliance and render an executive dashboard
#[derive(Parser, Debug)]
#[command(name = "nac-dashboard")]
#[command(version)]
#[command(
    about = "Compare NAC vendors on cost, risk and compliance and render an executive dashboard",
    long_about = None
)]
pub struct Args {
    /// Vendor dataset file (.json, .toml or .yml); defaults to the built-in dataset
    #[arg(short, long, value_name = "FILE")]
    pub dataset: Option<PathBuf>,

    /// Config file path (defaults to nac-dashboard.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format: html or json [default: html]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Vendor to select, focus vendor first.
    /// Can be specified multiple times: -v portnox -v cisco
    #[arg(short, long = "vendor", value_name = "ID")]
    pub vendors: Vec<String>,

    /// Industry profile key (e.g. healthcare, finance)
    #[arg(short, long, value_name = "KEY")]
    pub industry: Option<String>,

    /// Number of managed devices
    #[arg(long, value_name = "COUNT", allow_negative_numbers = true)]
    pub devices: Option<i64>,

    /// Analysis period in years
    #[arg(long, value_name = "YEARS", allow_negative_numbers = true)]
    pub years: Option<i64>,

    /// Active tab: overview, financial, security, compliance, vendors or insurance
    #[arg(short, long)]
    pub tab: Option<Tab>,

    /// Maximum number of vendors that can be selected at once [default: 4]
    #[arg(long, value_name = "N", conflicts_with = "unbounded")]
    pub max_vendors: Option<usize>,

    /// Allow any number of selected vendors
    #[arg(long)]
    pub unbounded: bool,

    /// Animate KPI counters before the page is written
    #[arg(long)]
    pub animate: bool,

    /// Render the fallback text instead of charts
    #[arg(long)]
    pub no_charts: bool,

    /// Read commands from stdin before writing the dashboard
    #[arg(long)]
    pub interactive: bool,

    /// Suppress progress messages (warnings and notices are still shown)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
