#![warn(missing_docs)]
//! SortBench CLI Library
//!
//! Command-line front end and orchestration for SortBench: the benchmark
//! executor, the size-gated stress planner, `sortbench.toml` configuration
//! and output rendering.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     sortbench_cli::run()
//! }
//! ```

mod config;
mod executor;
mod input;
mod planner;

pub use config::*;
pub use executor::{
    ExecutionConfig, Executor, RunMode, TRACE_VALUE_BUDGET, analytics, build_report,
    build_report_meta, build_stress_report, format_human_output,
};
pub use input::{InputArgs, parse_sequence, resolve_input};
pub use planner::{
    StressConfig, StressPlan, build_stress_plan, build_stress_plan_with_rng, select_algorithms,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rayon::ThreadPoolBuilder;
use sortbench_core::{Algorithm, CountingMode};
use sortbench_report::{
    Mode, OutputFormat, Payload, Report, generate_csv_report, generate_json_report,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// SortBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(author, version, about = "SortBench - timing and comparison counts for classic sorting algorithms")]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: human, json, csv (defaults to sortbench.toml, then human)
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (skips discovery of sortbench.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of rayon threads
    /// 0 = use all available cores (default)
    #[arg(long, short = 'j', global = true)]
    pub threads: Option<usize>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bubble sort a sequence and report the sorted result
    Sort {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Time the six hand-written algorithms on one sequence
    Compare {
        #[command(flatten)]
        input: InputArgs,

        /// Count real comparisons and moves instead of n(n-1)/2
        #[arg(long)]
        instrumented: bool,

        /// Run the algorithms concurrently
        #[arg(long)]
        parallel: bool,
    },
    /// Time every eligible algorithm on a random sequence
    StressTest {
        /// Sequence length
        #[arg(long)]
        size: usize,

        /// Largest size at which quadratic algorithms run
        #[arg(long)]
        threshold: Option<usize>,

        /// RNG seed for a reproducible sequence
        #[arg(long)]
        seed: Option<u64>,

        /// Reject sizes above this limit
        #[arg(long)]
        max_size: Option<usize>,

        /// Run the algorithms concurrently
        #[arg(long)]
        parallel: bool,
    },
    /// Show the static reference timings
    Analytics,
    /// Record every intermediate state of one algorithm
    Trace {
        /// Algorithm name (e.g. bubble, QUICK_SORT, "HEAP SORT")
        #[arg(short, long)]
        algorithm: Algorithm,

        #[command(flatten)]
        input: InputArgs,

        /// Maximum snapshots to keep (0 = unlimited)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print a default sortbench.toml
    Init,
}

/// Run the SortBench CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the SortBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_tracing(cli.verbose);

    if let Commands::Init = cli.command {
        return write_output(cli.output.as_deref(), &SortbenchConfig::default_toml());
    }

    // Explicit --config wins over discovery; CLI flags override both
    let config = match &cli.config {
        Some(path) => SortbenchConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SortbenchConfig::discover().unwrap_or_default(),
    };

    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(config.output.format.as_str())
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let threads = cli.threads.unwrap_or(config.runner.threads);
    if threads > 0 {
        if let Err(e) = ThreadPoolBuilder::new().num_threads(threads).build_global() {
            tracing::warn!(error = %e, "rayon pool already initialized");
        }
    }

    let report = execute_command(&cli.command, &config)?;
    let output = render(&report, format)?;
    write_output(cli.output.as_deref(), &output)
}

/// Run one command and return its report
pub fn execute_command(command: &Commands, config: &SortbenchConfig) -> anyhow::Result<Report> {
    match command {
        Commands::Sort { input } => {
            let values = resolve_input(input)?;
            let executor = Executor::new(build_execution_config(config, false, false));
            let outcome = executor.sort(&values);
            tracing::info!(size = outcome.size, "sorted");
            Ok(build_report(Mode::Sort, Payload::Sort(outcome)))
        }
        Commands::Compare {
            input,
            instrumented,
            parallel,
        } => {
            let values = resolve_input(input)?;
            let executor = Executor::new(build_execution_config(config, *instrumented, *parallel));
            let results = executor.compare(&values);
            tracing::info!(size = values.len(), algorithms = results.len(), "compare finished");
            Ok(build_report(Mode::Compare, Payload::Benchmark(results)))
        }
        Commands::StressTest {
            size,
            threshold,
            seed,
            max_size,
            parallel,
        } => {
            let stress = StressConfig {
                size: *size,
                threshold: threshold.unwrap_or(config.stress.threshold),
                value_upper_bound: config.stress.value_upper_bound,
                max_size: max_size.or(config.stress.max_size),
                seed: seed.or(config.stress.seed),
            };
            let plan = build_stress_plan(&stress)?;
            tracing::info!(
                size = plan.size,
                algorithms = plan.algorithms.len(),
                "stress plan ready"
            );

            // Stress runs never count comparisons, whatever the config says
            let executor = Executor::new(build_execution_config(config, false, *parallel));
            let results = executor.stress(&plan);
            Ok(build_stress_report(&plan, results))
        }
        Commands::Analytics => Ok(build_report(
            Mode::Analytics,
            Payload::Analytics(analytics()),
        )),
        Commands::Trace {
            algorithm,
            input,
            limit,
        } => {
            let values = resolve_input(input)?;
            let mut exec_config = build_execution_config(config, false, false);
            if let Some(limit) = limit {
                exec_config.trace_limit = *limit;
            }
            let outcome = Executor::new(exec_config).trace(*algorithm, &values)?;
            Ok(build_report(Mode::Trace, Payload::Trace(outcome)))
        }
        Commands::Init => anyhow::bail!("init prints configuration and produces no report"),
    }
}

/// Render `report` in `format`
pub fn render(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => generate_json_report(report)?,
        OutputFormat::Csv => generate_csv_report(report),
        OutputFormat::Human => format_human_output(report),
    })
}

fn build_execution_config(
    config: &SortbenchConfig,
    instrumented: bool,
    parallel: bool,
) -> ExecutionConfig {
    let counting = if instrumented {
        CountingMode::Instrumented
    } else {
        config.runner.counting
    };

    ExecutionConfig {
        counting,
        parallel: parallel || config.runner.parallel,
        progress: config.runner.progress,
        trace_limit: config.runner.trace_limit,
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "sortbench=debug,sortbench_cli=debug"
    } else {
        "sortbench=info,sortbench_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Logs go to stderr so JSON and CSV on stdout stay clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn write_output(path: Option<&Path>, output: &str) -> anyhow::Result<()> {
    if let Some(path) = path {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(output.as_bytes())?;
        eprintln!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_report::parse_json_report;

    fn quiet_config() -> SortbenchConfig {
        let mut config = SortbenchConfig::default();
        config.runner.progress = false;
        config
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sortbench").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_sort_values() {
        let cli = parse(&["sort", "5", "3", "-8", "1"]);
        match cli.command {
            Commands::Sort { input } => assert_eq!(input.values, vec![5, 3, -8, 1]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_comma_values() {
        let cli = parse(&["compare", "5,3,8", "--instrumented"]);
        match cli.command {
            Commands::Compare {
                input,
                instrumented,
                parallel,
            } => {
                assert_eq!(input.values, vec![5, 3, 8]);
                assert!(instrumented);
                assert!(!parallel);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = parse(&["analytics", "--format", "json", "-v"]);
        assert_eq!(cli.format.as_deref(), Some("json"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_trace_algorithm() {
        let cli = parse(&["trace", "-a", "QUICK_SORT", "3", "1", "2"]);
        match cli.command {
            Commands::Trace { algorithm, .. } => assert_eq!(algorithm, Algorithm::QuickSort),
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(Cli::try_parse_from(["sortbench", "trace", "-a", "bogo"]).is_err());
    }

    #[test]
    fn test_stress_size_required() {
        assert!(Cli::try_parse_from(["sortbench", "stress-test"]).is_err());
    }

    #[test]
    fn test_execute_sort_scenario() {
        let cli = parse(&["sort", "5", "3", "8", "1", "9", "2"]);
        let report = execute_command(&cli.command, &quiet_config()).unwrap();
        assert_eq!(report.meta.mode, Mode::Sort);
        match report.payload {
            Payload::Sort(outcome) => {
                assert_eq!(outcome.sorted, vec![1, 2, 3, 5, 8, 9]);
                assert_eq!(outcome.size, 6);
                assert_eq!(outcome.algorithm, "BUBBLE_SORT");
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_execute_compare_json_roundtrip() {
        let cli = parse(&["compare", "5", "3", "8", "1", "9", "2"]);
        let report = execute_command(&cli.command, &quiet_config()).unwrap();
        let json = render(&report, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["results"]["MERGE SORT"]["comparisons"], 15);
        assert_eq!(value["meta"]["mode"], "compare");

        let parsed = parse_json_report(&json).unwrap();
        match parsed.payload {
            Payload::Benchmark(results) => assert_eq!(results.len(), 6),
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_execute_stress_uses_config_threshold() {
        let mut config = quiet_config();
        config.stress.threshold = 10;
        let cli = parse(&["stress-test", "--size", "11", "--seed", "4"]);
        let report = execute_command(&cli.command, &config).unwrap();

        let stress = report.meta.stress.unwrap();
        assert!(stress.quadratic_skipped);
        assert_eq!(stress.threshold, 10);
        match report.payload {
            Payload::Benchmark(results) => {
                assert_eq!(results.len(), 5);
                assert!(results.results.values().all(|r| r.comparisons == 0));
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_execute_stress_rejects_zero_and_oversize() {
        let cli = parse(&["stress-test", "--size", "0"]);
        assert!(execute_command(&cli.command, &quiet_config()).is_err());

        let cli = parse(&["stress-test", "--size", "100", "--max-size", "50"]);
        let err = execute_command(&cli.command, &quiet_config()).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_execute_trace_limit_flag() {
        let cli = parse(&["trace", "-a", "bubble", "--limit", "1", "3", "2", "1"]);
        let report = execute_command(&cli.command, &quiet_config()).unwrap();
        match report.payload {
            Payload::Trace(outcome) => {
                assert_eq!(outcome.steps.len(), 1);
                assert!(outcome.truncated);
                assert_eq!(outcome.sorted, vec![1, 2, 3]);
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_render_csv_analytics() {
        let cli = parse(&["analytics"]);
        let report = execute_command(&cli.command, &quiet_config()).unwrap();
        let csv = render(&report, OutputFormat::Csv).unwrap();
        assert!(csv.starts_with("algorithm,time_ms"));
        assert!(csv.contains("BUBBLE SORT,125"));
    }

    #[test]
    fn test_execution_config_flags_override() {
        let config = quiet_config();
        let exec = build_execution_config(&config, true, true);
        assert_eq!(exec.counting, CountingMode::Instrumented);
        assert!(exec.parallel);

        let exec = build_execution_config(&config, false, false);
        assert_eq!(exec.counting, CountingMode::Formula);
        assert!(!exec.parallel);
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_output(Some(&path), "hello").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }
}
