//!
//! The benchmark script output error.
//!

///
/// The benchmark script output error.
///
#[derive(Debug, thiserror::Error)]
pub enum BenchmarkOutputError {
    /// The script printed nothing.
    #[error("Benchmark script `{script}` returned nothing")]
    Empty {
        /// The script path.
        script: String,
    },
    /// The output is not valid UTF-8.
    #[error("Benchmark script `{script}` output is not valid UTF-8: {error}")]
    Encoding {
        /// The underlying decoding error.
        error: std::string::FromUtf8Error,
        /// The script path.
        script: String,
    },
    /// The output is not a JSON object of benchmark results.
    #[error("Benchmark script `{script}` output is badly formatted: {error}")]
    Parsing {
        /// The underlying parsing error.
        error: serde_json::Error,
        /// The script path.
        script: String,
    },
    /// The output is an empty JSON object.
    #[error("Benchmark script `{script}` reported no benchmarks")]
    NoBenchmarks {
        /// The script path.
        script: String,
    },
}
