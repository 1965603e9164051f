//! Configuration loading from sortbench.toml
//!
//! SortBench configuration can be specified in a `sortbench.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.
//! Command-line flags override anything set here.

use serde::{Deserialize, Serialize};
use sortbench_core::{CountingMode, QUADRATIC_THRESHOLD, VALUE_UPPER_BOUND};
use std::path::Path;

/// Name of the configuration file looked up by [`SortbenchConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "sortbench.toml";

/// SortBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SortbenchConfig {
    /// Stress policy configuration
    #[serde(default)]
    pub stress: StressSettings,
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Stress policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressSettings {
    /// Largest size at which quadratic algorithms still run (inclusive)
    #[serde(default = "default_threshold")]
    pub threshold: usize,
    /// Exclusive upper bound of generated values
    #[serde(default = "default_value_upper_bound")]
    pub value_upper_bound: i64,
    /// Reject stress requests above this size
    #[serde(default)]
    pub max_size: Option<usize>,
    /// Fixed RNG seed for reproducible inputs
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for StressSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            value_upper_bound: default_value_upper_bound(),
            max_size: None,
            seed: None,
        }
    }
}

fn default_threshold() -> usize {
    QUADRATIC_THRESHOLD
}
fn default_value_upper_bound() -> i64 {
    VALUE_UPPER_BOUND
}

/// Runner configuration for algorithm execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Run the algorithms of one report concurrently
    #[serde(default)]
    pub parallel: bool,
    /// Rayon thread count (0 = one per core)
    #[serde(default)]
    pub threads: usize,
    /// How compare runs obtain their comparison figure
    #[serde(default)]
    pub counting: CountingMode,
    /// Maximum number of snapshots kept by `trace` (0 = no count cap).
    /// Snapshots are also bounded by a total budget of one million values.
    #[serde(default = "default_trace_limit")]
    pub trace_limit: usize,
    /// Show a progress bar while algorithms run
    #[serde(default = "default_progress")]
    pub progress: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: 0,
            counting: CountingMode::default(),
            trace_limit: default_trace_limit(),
            progress: default_progress(),
        }
    }
}

fn default_trace_limit() -> usize {
    10_000
}
fn default_progress() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl SortbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for `sortbench.toml`
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), error = %e, "ignoring unreadable config");
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# SortBench Configuration

[stress]
# Quadratic algorithms (bubble, selection, insertion) run only when size <= threshold
threshold = 50000
# Random values are drawn from [0, value_upper_bound)
value_upper_bound = 1000000
# Reject stress requests above this size (uncomment to enable)
# max_size = 10000000
# Fixed seed for reproducible inputs (uncomment to enable)
# seed = 42

[runner]
# Run the algorithms of one report concurrently
parallel = false
# Rayon threads (0 = one per core)
threads = 0
# Comparison figure for compare runs: "formula" or "instrumented"
counting = "formula"
# Maximum snapshots kept by `trace` (0 = no count cap; a one million value
# budget across all snapshots always applies)
trace_limit = 10000
# Show a progress bar on stderr
progress = true

[output]
# Default output format: human, json, csv
format = "human"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SortbenchConfig::default();
        assert_eq!(config.stress.threshold, 50_000);
        assert_eq!(config.stress.value_upper_bound, 1_000_000);
        assert_eq!(config.runner.counting, CountingMode::Formula);
        assert!(!config.runner.parallel);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [stress]
            threshold = 1000
            seed = 7

            [runner]
            counting = "instrumented"
        "#;

        let config: SortbenchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.stress.threshold, 1000);
        assert_eq!(config.stress.seed, Some(7));
        assert_eq!(config.runner.counting, CountingMode::Instrumented);
        // Defaults should still apply
        assert_eq!(config.stress.value_upper_bound, 1_000_000);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_default_toml_parses() {
        let config: SortbenchConfig = toml::from_str(&SortbenchConfig::default_toml()).unwrap();
        assert_eq!(config.stress.threshold, QUADRATIC_THRESHOLD);
        assert_eq!(config.stress.max_size, None);
        assert_eq!(config.runner.trace_limit, 10_000);
        assert!(config.runner.progress);
    }

    #[test]
    fn test_discover_walks_up() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[stress]\nthreshold = 12\n",
        )
        .unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = SortbenchConfig::discover_from(&nested).unwrap();
        assert_eq!(config.stress.threshold, 12);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[stress\nthreshold = ").unwrap();
        assert!(SortbenchConfig::load(&path).is_err());
    }
}
