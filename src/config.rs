//! Configuration file support for nac-dashboard.
//!
//! Provides YAML-based configuration through `nac-dashboard.config.yml`
//! files, including data structures, file loading, validation and merging
//! with command-line options. Command-line values always win.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use nac_dashboard::application::dto::{DashboardRequest, OutputFormat};
use nac_dashboard::application::factories::ChartLibrary;
use nac_dashboard::application::view::RendererOptions;
use nac_dashboard::comparison::domain::{BoundedRange, SelectionPolicy, Tab, ViewPolicy};
use nac_dashboard::shared::security::{validate_input_file, MAX_INPUT_FILE_SIZE};
use nac_dashboard::shared::Result;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "nac-dashboard.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub dataset: Option<PathBuf>,
    pub format: Option<String>,
    pub vendors: Option<Vec<String>>,
    pub industry: Option<String>,
    pub devices: Option<i64>,
    pub years: Option<i64>,
    pub min_devices: Option<i64>,
    pub max_devices: Option<i64>,
    pub min_years: Option<i64>,
    pub max_years: Option<i64>,
    pub tab: Option<String>,
    pub max_vendors: Option<usize>,
    pub unbounded: Option<bool>,
    pub animate: Option<bool>,
    pub animation_steps: Option<u32>,
    pub no_charts: Option<bool>,
    pub title: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// One warning per unknown field, sorted by key.
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        let mut keys: Vec<&String> = self.unknown_fields.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| format!("Unknown config field '{}' will be ignored", key))
            .collect()
    }

    /// Device-count range, defaults filling the bounds not given
    pub fn device_range(&self) -> Result<BoundedRange> {
        let defaults = ViewPolicy::DEFAULT_DEVICE_RANGE;
        let range = BoundedRange::devices(
            self.min_devices.unwrap_or(defaults.min),
            self.max_devices.unwrap_or(defaults.max),
        )?;
        Ok(range)
    }

    pub fn period_range(&self) -> Result<BoundedRange> {
        let defaults = ViewPolicy::DEFAULT_PERIOD_RANGE;
        let range = BoundedRange::years(
            self.min_years.unwrap_or(defaults.min),
            self.max_years.unwrap_or(defaults.max),
        )?;
        Ok(range)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_input_file(path, "config file", MAX_INPUT_FILE_SIZE)
        .context("Failed to read config file")?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
///
/// Device counts and periods are not checked here; the dashboard clamps
/// or rejects them with a visible notice like any other input. Their
/// ranges are.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(ref tab) = config.tab {
        if let Err(e) = Tab::from_str(tab) {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(ref vendors) = config.vendors {
        for (i, vendor) in vendors.iter().enumerate() {
            if vendor.trim().is_empty() {
                bail!(
                    "Invalid config: vendors[{}] must not be empty.\n\n\
                     💡 Hint: Use vendor ids from the dataset (e.g., \"portnox\").",
                    i
                );
            }
        }
    }

    if config.max_vendors == Some(0) {
        bail!(
            "Invalid config: max_vendors must be at least 1.\n\n\
             💡 Hint: Remove the field or set 'unbounded: true' to lift the limit."
        );
    }

    if config.max_vendors.is_some() && config.unbounded == Some(true) {
        bail!("Invalid config: max_vendors and unbounded cannot be combined.");
    }

    if let Err(e) = config.device_range() {
        bail!(
            "Invalid config: min_devices/max_devices: {}\n\n\
             💡 Hint: Use 1 <= min_devices <= max_devices.",
            e
        );
    }

    if let Err(e) = config.period_range() {
        bail!(
            "Invalid config: min_years/max_years: {}\n\n\
             💡 Hint: Use 1 <= min_years <= max_years <= 255.",
            e
        );
    }

    if config.animation_steps == Some(0) {
        bail!("Invalid config: animation_steps must be at least 1.");
    }

    Ok(())
}

/// Effective settings after merging the config file under the CLI flags
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub dataset: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub charts: ChartLibrary,
    pub title: Option<String>,
    pub interactive: bool,
    pub request: DashboardRequest,
}

/// Merges `config` under `args`; CLI values take precedence field by field.
pub fn merge(args: Args, config: Option<ConfigFile>) -> Result<Settings> {
    let config = config.unwrap_or_default();

    let format = match (args.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(raw)) => OutputFormat::from_str(raw).map_err(anyhow::Error::msg)?,
        (None, None) => OutputFormat::default(),
    };

    let active_tab = match (args.tab, config.tab.as_deref()) {
        (Some(tab), _) => tab,
        (None, Some(raw)) => Tab::from_str(raw).map_err(anyhow::Error::msg)?,
        (None, None) => Tab::Overview,
    };

    let selection = if args.unbounded {
        SelectionPolicy::Unbounded
    } else if let Some(max) = args.max_vendors {
        SelectionPolicy::Limited(max)
    } else if config.unbounded == Some(true) {
        SelectionPolicy::Unbounded
    } else if let Some(max) = config.max_vendors {
        SelectionPolicy::Limited(max)
    } else {
        SelectionPolicy::default()
    };

    if selection == SelectionPolicy::Limited(0) {
        bail!("--max-vendors must be at least 1");
    }

    let device_range = config.device_range()?;
    let period_range = config.period_range()?;

    let vendors = if args.vendors.is_empty() {
        config.vendors.unwrap_or_default()
    } else {
        args.vendors
    };

    let defaults = RendererOptions::default();
    let renderer = RendererOptions {
        animate_counters: args.animate || config.animate.unwrap_or(false),
        animation_steps: config.animation_steps.unwrap_or(defaults.animation_steps),
    };

    let charts = if args.no_charts || config.no_charts.unwrap_or(false) {
        ChartLibrary::Disabled
    } else {
        ChartLibrary::Text
    };

    Ok(Settings {
        dataset: args.dataset.or(config.dataset),
        format,
        output: args.output,
        charts,
        title: config.title,
        interactive: args.interactive,
        request: DashboardRequest {
            vendors,
            industry: args.industry.or(config.industry),
            device_count: args.devices.or(config.devices),
            analysis_period_years: args.years.or(config.years),
            active_tab,
            selection,
            device_range,
            period_range,
            renderer,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("nac-dashboard").chain(extra.iter().copied()))
            .unwrap()
    }

    fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            "config.yml",
            r#"
format: json
vendors:
  - portnox
  - cisco
industry: healthcare
devices: 2500
years: 5
tab: security
max_vendors: 3
animate: true
title: "Board review"
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(
            config.vendors.as_deref(),
            Some(&["portnox".to_string(), "cisco".to_string()][..])
        );
        assert_eq!(config.industry.as_deref(), Some("healthcare"));
        assert_eq!(config.devices, Some(2500));
        assert_eq!(config.years, Some(5));
        assert_eq!(config.tab.as_deref(), Some("security"));
        assert_eq!(config.max_vendors, Some(3));
        assert_eq!(config.animate, Some(true));
        assert_eq!(config.title.as_deref(), Some("Board review"));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, CONFIG_FILENAME, "format: json\nno_charts: true\n");

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.no_charts, Some(true));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "bad.yml", "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_tab_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "tab: pricing\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid tab"));
    }

    #[test]
    fn test_empty_vendor_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "vendors:\n  - portnox\n  - \"  \"\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("vendors[1] must not be empty"));
    }

    #[test]
    fn test_zero_max_vendors_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "max_vendors: 0\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("max_vendors must be at least 1"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            "config.yml",
            "format: json\nzeta: true\nalpha: value\n",
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.unknown_field_warnings(),
            vec![
                "Unknown config field 'alpha' will be ignored".to_string(),
                "Unknown config field 'zeta' will be ignored".to_string()
            ]
        );
    }

    #[test]
    fn test_merge_without_config_uses_defaults() {
        let settings = merge(args(&[]), None).unwrap();
        assert_eq!(settings.format, OutputFormat::Html);
        assert_eq!(settings.charts, ChartLibrary::Text);
        assert_eq!(settings.request, DashboardRequest::default());
    }

    #[test]
    fn test_merge_cli_overrides_config() {
        let config = ConfigFile {
            format: Some("json".to_string()),
            vendors: Some(vec!["cisco".to_string()]),
            devices: Some(2500),
            tab: Some("security".to_string()),
            max_vendors: Some(2),
            ..ConfigFile::default()
        };
        let settings = merge(
            args(&["-f", "html", "-v", "portnox", "--devices", "800", "--unbounded"]),
            Some(config),
        )
        .unwrap();

        assert_eq!(settings.format, OutputFormat::Html);
        assert_eq!(settings.request.vendors, vec!["portnox"]);
        assert_eq!(settings.request.device_count, Some(800));
        assert_eq!(settings.request.active_tab, Tab::Security);
        assert_eq!(settings.request.selection, SelectionPolicy::Unbounded);
    }

    #[test]
    fn test_merge_config_fills_gaps() {
        let config = ConfigFile {
            industry: Some("finance".to_string()),
            years: Some(5),
            no_charts: Some(true),
            animate: Some(true),
            animation_steps: Some(6),
            ..ConfigFile::default()
        };
        let settings = merge(args(&[]), Some(config)).unwrap();

        assert_eq!(settings.request.industry.as_deref(), Some("finance"));
        assert_eq!(settings.request.analysis_period_years, Some(5));
        assert_eq!(settings.charts, ChartLibrary::Disabled);
        assert!(settings.request.renderer.animate_counters);
        assert_eq!(settings.request.renderer.animation_steps, 6);
    }

    #[test]
    fn test_range_keys_reach_request() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            "config.yml",
            "min_devices: 10\nmax_devices: 500\nmax_years: 10\n",
        );

        let config = load_config_from_path(&config_path).unwrap();
        let settings = merge(args(&["--devices", "50"]), Some(config)).unwrap();
        assert_eq!(settings.request.device_range, BoundedRange { min: 10, max: 500 });
        assert_eq!(settings.request.period_range, BoundedRange { min: 1, max: 10 });
        assert_eq!(settings.request.device_count, Some(50));
    }

    #[test]
    fn test_inverted_device_range_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "min_devices: 900\nmax_devices: 500\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid config: min_devices/max_devices"));
    }

    #[test]
    fn test_oversized_year_range_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "max_years: 1000\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("exceeds 255"));
    }

    #[test]
    fn test_merge_rejects_zero_max_vendors_flag() {
        let err = merge(args(&["--max-vendors", "0"]), None).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }
}
