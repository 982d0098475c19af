//! Configuration file loading for geodisc.
//!
//! Discovers and loads `geodisc.toml` from the config directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use geodisc_render::GridSpec;
use num_complex::Complex64;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "geodisc.toml";

/// Top-level configuration from geodisc.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeodiscConfig {
    /// The map family to evaluate.
    pub family: FamilyConfig,

    /// Sampling window for the `grid` command.
    pub grid: GridConfig,

    /// Output formats.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FamilyConfig {
    /// Base point as a complex literal, e.g. "3+4i".
    pub base: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub min_re: Option<f64>,
    pub max_re: Option<f64>,
    pub min_im: Option<f64>,
    pub max_im: Option<f64>,

    /// Samples per unit length along each axis.
    pub density: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub map_format: Option<MapFormat>,
    pub grid_format: Option<GridFormat>,
}

/// Output format for the `map` and `constants` commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MapFormat {
    #[default]
    Text,
    Json,
}

/// Output format for the `grid` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GridFormat {
    #[default]
    Markdown,
    Csv,
    Json,
}

/// Parse a complex literal such as `3+4i`, `-2.5` or `4j`.
pub fn parse_complex(s: &str) -> Result<Complex64, String> {
    s.trim()
        .parse::<Complex64>()
        .map_err(|e| format!("invalid complex number '{}': {}", s, e))
}

/// Discover the geodisc.toml config file.
///
/// Returns `None` if no config file is found.
pub fn discover_config(config_dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = config_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a geodisc.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<GeodiscConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<GeodiscConfig> {
    let config: GeodiscConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from the config directory, or return default if not found.
pub fn load_or_default(config_dir: &Utf8Path) -> anyhow::Result<GeodiscConfig> {
    match discover_config(config_dir) {
        Some(path) => load_config(&path),
        None => Ok(GeodiscConfig::default()),
    }
}

/// Values given on the command line. `None` falls back to the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base: Option<Complex64>,
    pub min_re: Option<f64>,
    pub max_re: Option<f64>,
    pub min_im: Option<f64>,
    pub max_im: Option<f64>,
    pub density: Option<u32>,
    pub map_format: Option<MapFormat>,
    pub grid_format: Option<GridFormat>,
}

/// Merged configuration combining config file and CLI arguments.
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub base: Complex64,
    pub grid: GridSpec,
    pub map_format: MapFormat,
    pub grid_format: GridFormat,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: GeodiscConfig,
}

impl ConfigMerger {
    /// Create a new merger from a loaded config.
    pub fn new(config: GeodiscConfig) -> Self {
        Self { config }
    }

    /// CLI values win; unset grid bounds fall back to the config file, then to
    /// [`GridSpec::default`].
    pub fn merge(self, cli: &CliOverrides) -> anyhow::Result<MergedConfig> {
        let base = match (cli.base, self.config.family.base.as_deref()) {
            (Some(base), _) => base,
            (None, Some(literal)) => {
                parse_complex(literal).map_err(anyhow::Error::msg).context("[family].base")?
            }
            (None, None) => anyhow::bail!(
                "no base point: pass --base or set [family].base in {}",
                CONFIG_FILE_NAME
            ),
        };

        let defaults = GridSpec::default();
        let file = &self.config.grid;
        let grid = GridSpec {
            min_re: cli.min_re.or(file.min_re).unwrap_or(defaults.min_re),
            max_re: cli.max_re.or(file.max_re).unwrap_or(defaults.max_re),
            min_im: cli.min_im.or(file.min_im).unwrap_or(defaults.min_im),
            max_im: cli.max_im.or(file.max_im).unwrap_or(defaults.max_im),
            density: cli.density.or(file.density).unwrap_or(defaults.density),
        };

        Ok(MergedConfig {
            base,
            grid,
            map_format: cli
                .map_format
                .or(self.config.output.map_format)
                .unwrap_or_default(),
            grid_format: cli
                .grid_format
                .or(self.config.output.grid_format)
                .unwrap_or_default(),
        })
    }
}
