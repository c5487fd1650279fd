//! Loading graph documents from disk or stdin.
//!
//! `spantree-core` never touches the filesystem; every byte the binary reads
//! comes through [`read_input`], which enforces `--max-file-size` before the
//! content is handed to serde.
use std::io::{ErrorKind, Read};
use std::path::Path;

use spantree_core::{GraphFile, SpanGraph, build_graph};

use crate::PathOrStdin;
use crate::error::CliError;

/// Reads all of `input` as UTF-8 text, refusing anything over `max_size`
/// bytes.
///
/// A file's size is taken from its metadata, so an oversized file is never
/// read. Stdin has no size up front and is read through `Read::take`.
///
/// # Errors
///
/// An exit-code-2 [`CliError`] if the input is missing, unreadable, too
/// large, or not UTF-8.
pub fn read_input(input: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    let bytes = match input {
        PathOrStdin::Path(path) => read_file(path, max_size)?,
        PathOrStdin::Stdin => read_stdin(max_size)?,
    };
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        input: source_label(input),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

/// Deserializes a [`GraphFile`]. Ids and weights are validated on the way in,
/// so an empty id or a negative weight fails here.
///
/// # Errors
///
/// [`CliError::ParseFailed`] naming the line and column of the problem.
pub fn parse_graph_file(content: &str) -> Result<GraphFile, CliError> {
    serde_json::from_str(content).map_err(|e| CliError::ParseFailed {
        detail: format!("line {}, column {}: {e}", e.line(), e.column()),
    })
}

/// Reads, parses and builds the graph named by `input`.
///
/// # Errors
///
/// Anything [`read_input`] or [`parse_graph_file`] returns, and
/// [`CliError::GraphBuildError`] for duplicate ids or dangling edges.
pub fn load_graph(input: &PathOrStdin, max_size: u64) -> Result<SpanGraph, CliError> {
    let file = parse_graph_file(&read_input(input, max_size)?)?;
    let graph = build_graph(&file).map_err(|e| CliError::GraphBuildError {
        detail: e.to_string(),
    })?;
    log::debug!(
        "{}: {} vertices, {} edges",
        source_label(input),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// How `input` is named in messages: the path, or `-` for stdin.
pub fn source_label(input: &PathOrStdin) -> String {
    match input {
        PathOrStdin::Path(path) => path.display().to_string(),
        PathOrStdin::Stdin => "-".to_owned(),
    }
}

fn read_file(path: &Path, max_size: u64) -> Result<Vec<u8>, CliError> {
    let size = std::fs::metadata(path)
        .map_err(|e| open_error(&e, path))?
        .len();
    if size > max_size {
        return Err(CliError::FileTooLarge {
            input: path.display().to_string(),
            limit: max_size,
            actual: Some(size),
        });
    }
    std::fs::read(path).map_err(|e| open_error(&e, path))
}

fn open_error(e: &std::io::Error, path: &Path) -> CliError {
    let path = path.to_path_buf();
    if e.kind() == ErrorKind::NotFound {
        CliError::FileNotFound { path }
    } else if e.kind() == ErrorKind::PermissionDenied {
        CliError::PermissionDenied { path }
    } else {
        CliError::IoError {
            input: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

// Reading exactly `max_size` bytes is not yet an overflow; one extra byte
// is read to decide.
fn read_stdin(max_size: u64) -> Result<Vec<u8>, CliError> {
    let stdin_error = |e: std::io::Error| CliError::StdinReadError {
        detail: e.to_string(),
    };
    let mut handle = std::io::stdin().lock();
    let mut bytes = Vec::new();
    (&mut handle)
        .take(max_size)
        .read_to_end(&mut bytes)
        .map_err(stdin_error)?;

    if bytes.len() as u64 == max_size && handle.read(&mut [0u8; 1]).map_err(stdin_error)? > 0 {
        return Err(CliError::FileTooLarge {
            input: "-".to_owned(),
            limit: max_size,
            actual: None,
        });
    }
    Ok(bytes)
}
