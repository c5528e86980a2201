//! Error types emitted by the leisure CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use leisure_core::{CatalogError, RecommendError};
use leisure_recommender::ScorerConfigError;
use thiserror::Error;

/// Errors emitted by the leisure CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// An option was present but could not be interpreted.
    #[error("invalid {field}: {message}")]
    InvalidArgument {
        /// Option name.
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Reading an input file failed.
    #[error("failed to read {path:?}: {source}")]
    ReadInput {
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Catalog JSON could not be decoded.
    #[error("failed to parse catalog JSON at {path:?}: {source}")]
    ParseCatalog {
        /// Offending path.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The decoded catalog violated a catalog invariant.
    #[error("catalog in {path:?} is invalid: {source}")]
    InvalidCatalog {
        /// Offending path.
        path: Utf8PathBuf,
        /// Catalog invariant that failed.
        #[source]
        source: CatalogError,
    },
    /// Feedback JSON could not be decoded.
    #[error("failed to parse feedback JSON at {path:?}: {source}")]
    ParseFeedback {
        /// Offending path.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// Scorer weights were rejected.
    #[error(transparent)]
    ScorerConfig(#[from] ScorerConfigError),
    /// The recommender rejected the request.
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
    /// Serialising the report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the report to standard output failed.
    #[error("failed to write report: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Writing the report file failed.
    #[error("failed to write report to {path:?}: {source}")]
    WriteReportFile {
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
