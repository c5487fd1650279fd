//! Failures of the `spantree` binary and their exit codes.
//!
//! Every [`CliError`] renders as a single `error: ...` line for stderr. Input
//! failures (nothing could be computed) exit with 2; logical failures (the
//! input was fine but the answer is a defined failure) exit with 1.
use std::path::PathBuf;

/// Anything that makes a `spantree` command end unsuccessfully.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    // Exit code 2.
    /// No file at the given path.
    #[error("error: file not found: {}", .path.display())]
    FileNotFound {
        /// Path as given on the command line.
        path: PathBuf,
    },

    /// The file exists but cannot be opened for reading.
    #[error("error: permission denied: {}", .path.display())]
    PermissionDenied {
        /// Path as given on the command line.
        path: PathBuf,
    },

    /// The input is bigger than `--max-file-size`.
    #[error("error: file too large: {input} {}", size_note(.limit, .actual))]
    FileTooLarge {
        /// Path, or `-` for stdin.
        input: String,
        /// Limit in bytes.
        limit: u64,
        /// Size on disk; stdin has no known size.
        actual: Option<u64>,
    },

    #[error("error: {input} is not UTF-8 text (bad byte at offset {byte_offset})")]
    InvalidUtf8 { input: String, byte_offset: usize },

    #[error("error: could not read stdin: {detail}")]
    StdinReadError { detail: String },

    /// Any other read or write failure.
    #[error("error: I/O error on {input}: {detail}")]
    IoError { input: String, detail: String },

    /// The input is not a graph document.
    #[error("error: not a valid graph file: {detail}")]
    ParseFailed {
        /// serde_json message with line and column.
        detail: String,
    },

    /// The document parsed but names vertices it never declares, or declares
    /// one twice.
    #[error("error: invalid graph: {detail}")]
    GraphBuildError { detail: String },

    /// Output could not be serialized.
    #[error("error: internal error: {detail}")]
    InternalError { detail: String },

    // Exit code 1.
    /// `--start` names a vertex that is not in the graph.
    #[error("error: vertex not found: {vertex_id:?}")]
    VertexNotFound { vertex_id: String },

    /// A `--edge` pick does not match the graph.
    #[error("error: invalid selection: {detail}")]
    InvalidSelection { detail: String },

    /// The scored selection is valid but not a minimum spanning tree. The
    /// verdict is already on stdout.
    #[error("error: selection is not a minimum spanning tree")]
    NotOptimal,

    /// `validate` reported at least one error.
    #[error("error: graph file has validation errors")]
    ValidationErrors,
}

fn size_note(limit: &u64, actual: &Option<u64>) -> String {
    match actual {
        Some(actual) => format!("({actual} bytes, limit {limit})"),
        None => format!("(more than the {limit} byte limit)"),
    }
}

impl CliError {
    /// Process exit code: 2 for input failures, 1 for logical failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::VertexNotFound { .. }
            | Self::InvalidSelection { .. }
            | Self::NotOptimal
            | Self::ValidationErrors => 1,

            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::GraphBuildError { .. }
            | Self::InternalError { .. } => 2,
        }
    }
}
