//!
//! The benchmark script output.
//!

use std::collections::BTreeMap;

use benchmark_ledger::BenchmarkResult;
use benchmark_ledger::Benchmarks;

use super::error::BenchmarkOutputError;

///
/// A benchmark entry as printed by the script.
///
/// Unknown keys are collected and folded into the metadata.
///
#[derive(Debug, serde::Deserialize)]
struct Entry {
    /// The measured value.
    target: f64,
    /// The labels.
    #[serde(default)]
    labels: Vec<String>,
    /// The metadata.
    #[serde(default)]
    unstructured: BTreeMap<String, serde_json::Value>,
    /// The unknown keys.
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl From<Entry> for BenchmarkResult {
    fn from(entry: Entry) -> Self {
        let mut unstructured = entry.extra;
        unstructured.extend(entry.unstructured);
        Self {
            target: entry.target,
            labels: entry.labels,
            unstructured,
        }
    }
}

///
/// Parses the JSON object the benchmark script printed.
///
pub fn parse_benchmark_output(
    script: &str,
    stdout: Vec<u8>,
) -> Result<Benchmarks, BenchmarkOutputError> {
    let text = String::from_utf8(stdout).map_err(|error| BenchmarkOutputError::Encoding {
        error,
        script: script.to_owned(),
    })?;
    if text.trim().is_empty() {
        return Err(BenchmarkOutputError::Empty {
            script: script.to_owned(),
        });
    }

    let entries: BTreeMap<String, Entry> =
        serde_json::from_str(text.as_str()).map_err(|error| BenchmarkOutputError::Parsing {
            error,
            script: script.to_owned(),
        })?;
    if entries.is_empty() {
        return Err(BenchmarkOutputError::NoBenchmarks {
            script: script.to_owned(),
        });
    }

    Ok(entries
        .into_iter()
        .map(|(name, entry)| (name, BenchmarkResult::from(entry)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::parse_benchmark_output;
    use super::BenchmarkOutputError;

    fn parse(text: &str) -> Result<benchmark_ledger::Benchmarks, BenchmarkOutputError> {
        parse_benchmark_output("bench.sh", text.as_bytes().to_vec())
    }

    #[test]
    fn minimal() {
        let benchmarks = parse(r#"{"sort": {"target": 12.5}, "hash": {"target": 3}}"#)
            .expect("Valid");

        assert_eq!(benchmarks.len(), 2);
        assert_eq!(benchmarks["sort"].target, 12.5);
        assert_eq!(benchmarks["hash"].target, 3.0);
        assert!(benchmarks["hash"].labels.is_empty());
    }

    #[test]
    fn extra_keys_folded() {
        let benchmarks = parse(
            r#"{"sort": {
                "target": 1.0,
                "labels": ["cold"],
                "iterations": 100,
                "unstructured": {"iterations": 50, "stddev": 0.1}
            }}"#,
        )
        .expect("Valid");

        let sort = &benchmarks["sort"];
        assert_eq!(sort.labels, vec!["cold".to_owned()]);
        assert_eq!(sort.unstructured["iterations"], serde_json::json!(50));
        assert_eq!(sort.unstructured["stddev"], serde_json::json!(0.1));
    }

    #[test]
    fn empty_output() {
        assert!(matches!(
            parse("  \n"),
            Err(BenchmarkOutputError::Empty { .. })
        ));
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            parse("sort: 1.0"),
            Err(BenchmarkOutputError::Parsing { .. })
        ));
    }

    #[test]
    fn missing_target() {
        assert!(matches!(
            parse(r#"{"sort": {"labels": []}}"#),
            Err(BenchmarkOutputError::Parsing { .. })
        ));
    }

    #[test]
    fn empty_object() {
        assert!(matches!(
            parse("{}"),
            Err(BenchmarkOutputError::NoBenchmarks { .. })
        ));
    }

    #[test]
    fn invalid_utf8() {
        assert!(matches!(
            parse_benchmark_output("bench.sh", vec![0xff, 0xfe]),
            Err(BenchmarkOutputError::Encoding { .. })
        ));
    }
}
