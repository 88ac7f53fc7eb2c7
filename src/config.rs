//! Configuration system for multiplot
//!
//! Supports multiple configuration sources with proper precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration files (.multiplot, multiplot.config.toml, etc.)
//! 4. Built-in defaults (lowest priority)

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PlotError, Result};

/// Main multiplot configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default backend name
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Validate shapes and capabilities strictly; when off, shape and
    /// capability problems drop the offending item with a warning
    #[serde(default = "default_true")]
    pub safecode: bool,
    /// Optimization tag forwarded to backends that understand it
    #[serde(default)]
    pub optimization: Optimization,
    /// Verbosity level for diagnostics
    #[serde(default)]
    pub verbose: u32,
    /// Re-render figures from the scene graph before a hardcopy; turn
    /// off to preserve manual backend-level tweaks at the cost of
    /// possibly stale output
    #[serde(default = "default_true")]
    pub replot_on_hardcopy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            safecode: true,
            optimization: Optimization::default(),
            verbose: 0,
            replot_on_hardcopy: true,
        }
    }
}

/// Optimization tag; stored and forwarded opaquely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Optimization {
    #[default]
    Off,
    On,
    Vectorization,
    F77,
    C,
}

impl Optimization {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" => Some(Optimization::Off),
            "on" => Some(Optimization::On),
            "vectorization" => Some(Optimization::Vectorization),
            "f77" => Some(Optimization::F77),
            "c" => Some(Optimization::C),
            _ => None,
        }
    }
}

fn default_backend() -> String {
    "record".to_string()
}

fn default_true() -> bool {
    true
}

/// Configuration loader with multiple source support
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from files, environment, and the process
    /// command line, with proper precedence
    pub fn load() -> Result<Config> {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::load_with_args(&args)
    }

    /// Same as [`load`](Self::load) with an explicit argument list
    pub fn load_with_args(args: &[String]) -> Result<Config> {
        let mut config = Self::load_from_files()?;
        Self::apply_environment_variables(&mut config);
        Self::apply_cli_args(&mut config, args)?;
        Ok(config)
    }

    /// Find and load configuration from files
    fn load_from_files() -> Result<Config> {
        for path in Self::find_config_files() {
            if path.is_dir() {
                info!(
                    "Ignoring config directory path (expected file): {}",
                    path.display()
                );
                continue;
            }
            if path.exists() {
                info!("Loading configuration from: {}", path.display());
                return Self::load_from_file(&path);
            }
        }
        debug!("No configuration file found, using defaults");
        Ok(Config::default())
    }

    /// Potential configuration file paths, in order of preference
    fn find_config_files() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Environment variable override
        if let Ok(config_path) = env::var("MULTIPLOT_CONFIG") {
            paths.push(PathBuf::from(config_path));
        }

        // 2. Current directory
        let current_dir_configs = [
            ".multiplot", // preferred single-file format
            "multiplot.config.toml",
            "multiplot.config.yaml",
            "multiplot.config.yml",
            "multiplot.config.json",
        ];
        if let Ok(current_dir) = env::current_dir() {
            for name in &current_dir_configs {
                paths.push(current_dir.join(name));
            }
        }

        // 3. Home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".multiplot"));
            paths.push(home_dir.join(".config/multiplot/config.toml"));
            paths.push(home_dir.join(".config/multiplot/config.yaml"));
            paths.push(home_dir.join(".config/multiplot/config.yml"));
            paths.push(home_dir.join(".config/multiplot/config.json"));
        }

        paths
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| {
            PlotError::config(format!(
                "failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
                PlotError::config(format!(
                    "failed to parse YAML config {}: {e}",
                    path.display()
                ))
            })?,
            Some("json") => serde_json::from_str(&content).map_err(|e| {
                PlotError::config(format!(
                    "failed to parse JSON config {}: {e}",
                    path.display()
                ))
            })?,
            Some("toml") => toml::from_str(&content).map_err(|e| {
                PlotError::config(format!(
                    "failed to parse TOML config {}: {e}",
                    path.display()
                ))
            })?,
            // `.multiplot` and unknown extensions: TOML first, then the
            // other formats
            _ => {
                if let Ok(config) = toml::from_str(&content) {
                    config
                } else if let Ok(config) = serde_yaml::from_str(&content) {
                    config
                } else if let Ok(config) = serde_json::from_str(&content) {
                    config
                } else {
                    return Err(PlotError::config(format!(
                        "could not parse config file {} (tried TOML, YAML, JSON)",
                        path.display()
                    )));
                }
            }
        };

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_environment_variables(config: &mut Config) {
        if let Ok(backend) = env::var("MULTIPLOT_BACKEND") {
            let trimmed = backend.trim();
            if !trimmed.is_empty() {
                config.backend = trimmed.to_string();
            }
        }

        if let Ok(safecode) = env::var("MULTIPLOT_SAFECODE") {
            if let Some(flag) = parse_bool(&safecode) {
                config.safecode = flag;
            }
        }

        if let Ok(opt) = env::var("MULTIPLOT_OPTIMIZATION") {
            if let Some(level) = Optimization::parse(&opt) {
                config.optimization = level;
            }
        }

        if let Ok(verbose) = env::var("MULTIPLOT_VERBOSE") {
            if let Ok(level) = verbose.parse() {
                config.verbose = level;
            }
        }

        if let Ok(replot) = env::var("MULTIPLOT_REPLOT_ON_HARDCOPY") {
            if let Some(flag) = parse_bool(&replot) {
                config.replot_on_hardcopy = flag;
            }
        }
    }

    /// Apply the small command-line allowlist. Unknown flags are left
    /// alone for the host application; malformed values for recognized
    /// flags are configuration errors.
    fn apply_cli_args(config: &mut Config, args: &[String]) -> Result<()> {
        for arg in args {
            if let Some(backend) = arg.strip_prefix("--backend=") {
                if backend.is_empty() {
                    return Err(PlotError::config("--backend= requires a name"));
                }
                config.backend = backend.to_string();
            } else if arg == "--safecode" {
                config.safecode = true;
            } else if let Some(value) = arg.strip_prefix("--safecode=") {
                config.safecode = parse_bool(value).ok_or_else(|| {
                    PlotError::config(format!("--safecode={value} is not a boolean"))
                })?;
            } else if let Some(value) = arg.strip_prefix("--verbose=") {
                config.verbose = value.parse().map_err(|_| {
                    PlotError::config(format!("--verbose={value} is not a number"))
                })?;
            } else if let Some(value) = arg.strip_prefix("--optimization=") {
                config.optimization = Optimization::parse(value).ok_or_else(|| {
                    PlotError::config(format!("--optimization={value} is not a known level"))
                })?;
            }
        }
        Ok(())
    }

    /// Save configuration to a file
    pub fn save_to_file(config: &Config, path: &Path) -> Result<()> {
        let content = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::to_string(config)
                .map_err(|e| PlotError::config(format!("YAML serialization failed: {e}")))?,
            Some("json") => serde_json::to_string_pretty(config)
                .map_err(|e| PlotError::config(format!("JSON serialization failed: {e}")))?,
            // TOML is the canonical format
            _ => toml::to_string_pretty(config)
                .map_err(|e| PlotError::config(format!("TOML serialization failed: {e}")))?,
        };

        fs::write(path, content).map_err(|e| {
            PlotError::config(format!(
                "failed to write config file {}: {e}",
                path.display()
            ))
        })?;

        info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Config::default())
            .unwrap_or_else(|_| "# failed to generate config".to_string())
    }
}

/// Parse a boolean value from string with various formats
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
