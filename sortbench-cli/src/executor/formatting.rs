//! Output Formatting
//!
//! Human-readable output formatting for reports.
//!
//! Generates terminal-friendly output with:
//! - Benchmark tables ranked fastest first, with relative speed
//! - The sorted sequence for `sort` and `trace`
//! - Notes on skipped quadratic algorithms and illustrative analytics

use sortbench_report::{
    AnalyticsReport, BenchmarkReport, Payload, Report, SortOutcome, TraceOutcome, format_duration,
};
use std::fmt::Write;

/// Longest sequence printed in full; longer ones are elided in the middle
const MAX_INLINE_VALUES: usize = 32;

/// Steps printed by the human trace view
const MAX_TRACE_STEPS: usize = 50;

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("SortBench Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    match &report.payload {
        Payload::Sort(outcome) => format_sort(&mut output, outcome),
        Payload::Trace(outcome) => format_trace(&mut output, outcome),
        Payload::Benchmark(results) => {
            if let Some(stress) = &report.meta.stress {
                let _ = writeln!(
                    output,
                    "Stress test: {} values (quadratic threshold {})",
                    stress.size, stress.threshold
                );
                if stress.quadratic_skipped {
                    output.push_str("  quadratic algorithms skipped above the threshold\n");
                }
                output.push('\n');
            }
            format_benchmark(&mut output, results);
        }
        Payload::Analytics(analytics) => format_analytics(&mut output, analytics),
    }

    output
}

fn format_sort(output: &mut String, outcome: &SortOutcome) {
    let _ = writeln!(output, "  algorithm: {}", outcome.algorithm);
    let _ = writeln!(output, "  size:      {}", outcome.size);
    let _ = writeln!(output, "  duration:  {}", format_duration(outcome.duration));
    let _ = writeln!(output, "  sorted:    {}", format_values(&outcome.sorted));
}

fn format_trace(output: &mut String, outcome: &TraceOutcome) {
    let _ = writeln!(output, "  algorithm:   {}", outcome.algorithm);
    let _ = writeln!(output, "  comparisons: {}", outcome.comparisons);
    let _ = writeln!(output, "  moves:       {}", outcome.moves);
    output.push('\n');

    for (i, step) in outcome.steps.iter().take(MAX_TRACE_STEPS).enumerate() {
        let _ = writeln!(output, "  {:>5}  {}", i + 1, format_values(step));
    }
    if outcome.steps.len() > MAX_TRACE_STEPS {
        let _ = writeln!(
            output,
            "  ... {} more steps",
            outcome.steps.len() - MAX_TRACE_STEPS
        );
    }
    if outcome.truncated {
        output.push_str("  (trace truncated at the snapshot limit)\n");
    }
    output.push('\n');
    let _ = writeln!(output, "  sorted: {}", format_values(&outcome.sorted));
}

fn format_benchmark(output: &mut String, results: &BenchmarkReport) {
    if results.is_empty() {
        output.push_str("  no algorithms ran\n");
        return;
    }

    let ranked = results.ranked();
    let max_name_len = ranked.iter().map(|(name, _)| name.len()).max().unwrap_or(20);
    let show_moves = ranked.iter().any(|(_, r)| r.moves.is_some());
    // Only shown when the platform has a cycle counter
    let show_cycles = ranked.iter().any(|(_, r)| r.cycles > 0);
    let fastest = ranked[0].1.duration;

    let _ = write!(
        output,
        "  {:<width$}  {:>12}  {:>16}",
        "Algorithm",
        "Duration",
        "Comparisons",
        width = max_name_len
    );
    if show_moves {
        let _ = write!(output, "  {:>12}", "Moves");
    }
    if show_cycles {
        let _ = write!(output, "  {:>14}", "Cycles");
    }
    let _ = writeln!(output, "  {:>10}", "Relative");
    let extra = if show_moves { 14 } else { 0 } + if show_cycles { 16 } else { 0 };
    let _ = writeln!(output, "  {}", "-".repeat(max_name_len + 46 + extra));

    for (name, result) in ranked {
        let relative = if fastest > 0.0 {
            result.duration / fastest
        } else {
            1.0
        };
        let _ = write!(
            output,
            "  {:<width$}  {:>12}  {:>16}",
            name,
            format_duration(result.duration),
            result.comparisons,
            width = max_name_len
        );
        if show_moves {
            let moves = result.moves.map_or_else(|| "-".to_string(), |m| m.to_string());
            let _ = write!(output, "  {:>12}", moves);
        }
        if show_cycles {
            let _ = write!(output, "  {:>14}", result.cycles);
        }
        let _ = writeln!(output, "  {:>9.2}x", relative);
    }
}

fn format_analytics(output: &mut String, analytics: &AnalyticsReport) {
    output.push_str("Reference timings (illustrative, not measured)\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');

    let max_time = analytics.times.iter().copied().fold(0.0_f64, f64::max);
    let width = analytics.algorithms.iter().map(String::len).max().unwrap_or(10);
    for (name, ms) in analytics.entries() {
        let bar_len = if max_time > 0.0 {
            ((ms / max_time) * 30.0).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            output,
            "  {:<width$}  {:>8.1} ms  {}",
            name,
            ms,
            "█".repeat(bar_len),
            width = width
        );
    }
}

fn format_values(values: &[i64]) -> String {
    if values.len() <= MAX_INLINE_VALUES {
        return format!("{:?}", values);
    }
    let half = MAX_INLINE_VALUES / 2;
    let head: Vec<String> = values[..half].iter().map(i64::to_string).collect();
    let tail: Vec<String> = values[values.len() - half..]
        .iter()
        .map(i64::to_string)
        .collect();
    format!(
        "[{}, ... {} more ..., {}]",
        head.join(", "),
        values.len() - MAX_INLINE_VALUES,
        tail.join(", ")
    )
}
