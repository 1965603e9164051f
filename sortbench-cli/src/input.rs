//! Input Sequences
//!
//! Values reach the CLI positionally (`sortbench sort 5 3 8`), as a
//! comma-separated list (`5,3,8`), or through `--input FILE` (`-` for stdin).
//! A file holds either a JSON array, a JSON object `{"array": [...]}`, or a
//! plain list separated by whitespace or commas.

use anyhow::Context;
use clap::Args;
use serde::Deserialize;
use sortbench_core::SortbenchError;
use std::io::Read;
use std::path::PathBuf;

/// Where a command reads its sequence from
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Values to sort (space or comma separated)
    #[arg(allow_negative_numbers = true, value_delimiter = ',')]
    pub values: Vec<i64>,

    /// Read values from a file ("-" for stdin)
    #[arg(short, long, conflicts_with = "values")]
    pub input: Option<PathBuf>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonInput {
    Bare(Vec<i64>),
    Wrapped { array: Option<Vec<i64>> },
}

/// Resolve the sequence named by `args`
pub fn resolve_input(args: &InputArgs) -> anyhow::Result<Vec<i64>> {
    let Some(path) = &args.input else {
        return Ok(args.values.clone());
    };

    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read values from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display()))?
    };

    parse_sequence(&text)
        .with_context(|| format!("failed to parse values from {}", path.display()))
}

/// Parse a JSON array, a `{"array": [...]}` object, or a delimited list
pub fn parse_sequence(text: &str) -> sortbench_core::Result<Vec<i64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return match serde_json::from_str::<JsonInput>(trimmed) {
            Ok(JsonInput::Bare(values)) => Ok(values),
            Ok(JsonInput::Wrapped { array: Some(values) }) => Ok(values),
            Ok(JsonInput::Wrapped { array: None }) => Err(SortbenchError::InvalidInput(
                "input object has no \"array\" field".to_string(),
            )),
            Err(e) => Err(SortbenchError::InvalidInput(format!(
                "expected an array of integers: {}",
                e
            ))),
        };
    }

    trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| SortbenchError::InvalidInput(format!("not an integer: {:?}", token)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_array() {
        assert_eq!(parse_sequence("[5, 3, -8]").unwrap(), vec![5, 3, -8]);
        assert_eq!(parse_sequence("[]").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_parse_wrapped_object() {
        assert_eq!(
            parse_sequence(r#"{"array": [5, 3, 8, 1, 9, 2]}"#).unwrap(),
            vec![5, 3, 8, 1, 9, 2]
        );
    }

    #[test]
    fn test_missing_array_rejected() {
        for text in [r#"{}"#, r#"{"array": null}"#] {
            let err = parse_sequence(text).unwrap_err();
            assert!(matches!(err, SortbenchError::InvalidInput(_)), "{}", text);
        }
    }

    #[test]
    fn test_non_integers_rejected() {
        assert!(parse_sequence("[1, 2.5]").is_err());
        assert!(parse_sequence(r#"["a"]"#).is_err());
        assert!(parse_sequence("1 2 three").is_err());
    }

    #[test]
    fn test_parse_delimited_list() {
        assert_eq!(parse_sequence("5,3, 8\n1\t9 2").unwrap(), vec![5, 3, 8, 1, 9, 2]);
        assert_eq!(parse_sequence("  \n").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_resolve_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.json");
        std::fs::write(&path, r#"{"array": [3, 1, 2]}"#).unwrap();

        let args = InputArgs {
            values: vec![],
            input: Some(path),
        };
        assert_eq!(resolve_input(&args).unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn test_resolve_missing_file() {
        let args = InputArgs {
            values: vec![],
            input: Some(PathBuf::from("/nonexistent/sortbench/values.json")),
        };
        assert!(resolve_input(&args).is_err());
    }

    #[test]
    fn test_resolve_positional() {
        let args = InputArgs {
            values: vec![2, 1],
            input: None,
        };
        assert_eq!(resolve_input(&args).unwrap(), vec![2, 1]);
    }
}
