//! CSV Output
//!
//! One table per payload kind. Sequences are written `;`-separated inside a
//! single column so every row keeps the same width.

use crate::report::{Payload, Report};

/// Generate a CSV report
pub fn generate_csv_report(report: &Report) -> String {
    let mut output = String::new();

    match &report.payload {
        Payload::Benchmark(bench) => {
            output.push_str("algorithm,duration_ms,comparisons,moves,cycles\n");
            for (name, result) in &bench.results {
                let moves = result.moves.map(|m| m.to_string()).unwrap_or_default();
                output.push_str(&format!(
                    "{},{:.6},{},{},{}\n",
                    name, result.duration, result.comparisons, moves, result.cycles
                ));
            }
        }
        Payload::Sort(outcome) => {
            output.push_str("algorithm,size,duration_ms,sorted\n");
            output.push_str(&format!(
                "{},{},{:.6},{}\n",
                outcome.algorithm,
                outcome.size,
                outcome.duration,
                join(&outcome.sorted)
            ));
        }
        Payload::Trace(trace) => {
            output.push_str("step,values\n");
            for (i, step) in trace.steps.iter().enumerate() {
                output.push_str(&format!("{},{}\n", i + 1, join(step)));
            }
        }
        Payload::Analytics(analytics) => {
            output.push_str("algorithm,time_ms\n");
            for (name, time) in analytics.entries() {
                output.push_str(&format!("{},{:.2}\n", name, time));
            }
        }
    }

    output
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(";")
}
