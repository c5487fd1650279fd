/// Structural checks over a parsed [`GraphFile`].
///
/// [`build_graph`][crate::build_graph] stops at the first broken reference.
/// [`validate`] instead collects every finding in one pass so a whole file
/// can be reported at once. Errors are the conditions `build_graph` rejects;
/// warnings are legal but usually unintended shapes.
use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::file::GraphFile;
use crate::newtypes::VertexId;
use crate::union_find::VertexSets;

/// The severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The file cannot be turned into a graph.
    Error,
    /// The file is usable but probably not what the author meant.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// Identifies which check produced a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Check {
    /// Two vertices share an id.
    DuplicateVertex,
    /// An edge endpoint names no vertex.
    DanglingEdge,
    /// An edge joins a vertex to itself.
    SelfLoop,
    /// A second edge joins an already-joined pair.
    ParallelEdge,
    /// The graph has more than one connected component.
    Disconnected,
}

impl Check {
    /// Returns the stable kebab-case code used in output.
    pub fn code(self) -> &'static str {
        match self {
            Self::DuplicateVertex => "duplicate-vertex",
            Self::DanglingEdge => "dangling-edge",
            Self::SelfLoop => "self-loop",
            Self::ParallelEdge => "parallel-edge",
            Self::Disconnected => "disconnected",
        }
    }

    /// Returns the severity this check always reports at.
    pub fn severity(self) -> Severity {
        match self {
            Self::DuplicateVertex | Self::DanglingEdge => Severity::Error,
            Self::SelfLoop | Self::ParallelEdge | Self::Disconnected => Severity::Warning,
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Where in the file a finding applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    /// A vertex record, by id.
    Vertex {
        /// The vertex id.
        id: String,
    },
    /// An edge record, by zero-based position in `edges`.
    Edge {
        /// Position in the file's `edges` array.
        index: usize,
    },
    /// The file as a whole.
    Global,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex { id } => write!(f, "vertex \"{id}\""),
            Self::Edge { index } => write!(f, "edge #{index}"),
            Self::Global => f.write_str("(global)"),
        }
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The check that fired.
    pub check: Check,
    /// Copied from [`Check::severity`].
    pub severity: Severity,
    /// Where the problem is.
    pub location: Location,
    /// Human-readable explanation.
    pub message: String,
}

impl Diagnostic {
    fn new(check: Check, location: Location, message: impl Into<String>) -> Self {
        Self {
            check,
            severity: check.severity(),
            location,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level_char = match self.severity {
            Severity::Error => 'E',
            Severity::Warning => 'W',
        };
        write!(
            f,
            "[{level_char}] {} {}: {}",
            self.check, self.location, self.message
        )
    }
}

/// All findings for one file, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationResult {
    /// Every diagnostic produced.
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Iterates over error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    /// Iterates over warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Returns the total number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if the file is clean.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Runs every check over `file`.
///
/// Vertex findings come first in file order, then edge findings in file
/// order, then the connectivity warning. Edges with a dangling endpoint are
/// excluded from the parallel-edge and connectivity checks.
pub fn validate(file: &GraphFile) -> ValidationResult {
    let mut diagnostics = Vec::new();

    let mut seen: HashSet<&VertexId> = HashSet::with_capacity(file.vertices.len());
    for vertex in &file.vertices {
        if !seen.insert(&vertex.id) {
            diagnostics.push(Diagnostic::new(
                Check::DuplicateVertex,
                Location::Vertex {
                    id: vertex.id.to_string(),
                },
                "vertex id is used more than once",
            ));
        }
    }

    let mut sets = VertexSets::initialize(file.vertex_ids());
    let mut first_link: HashMap<(&VertexId, &VertexId), usize> = HashMap::new();

    for (index, edge) in file.edges.iter().enumerate() {
        let mut resolved = true;
        for endpoint in [&edge.from, &edge.to] {
            if !seen.contains(endpoint) {
                resolved = false;
                diagnostics.push(Diagnostic::new(
                    Check::DanglingEdge,
                    Location::Edge { index },
                    format!("endpoint \"{endpoint}\" is not a declared vertex"),
                ));
            }
        }
        // A self-loop naming an undeclared vertex reports the same endpoint
        // twice above; keep only one of them.
        if edge.is_self_loop() && !resolved {
            diagnostics.pop();
        }
        if !resolved {
            continue;
        }

        if edge.is_self_loop() {
            diagnostics.push(Diagnostic::new(
                Check::SelfLoop,
                Location::Edge { index },
                format!("edge {edge} joins \"{}\" to itself", edge.from),
            ));
            continue;
        }

        match first_link.get(&edge.canonical_pair()) {
            Some(&first) => diagnostics.push(Diagnostic::new(
                Check::ParallelEdge,
                Location::Edge { index },
                format!("edge {edge} repeats the pair already joined by edge #{first}"),
            )),
            None => {
                first_link.insert(edge.canonical_pair(), index);
            }
        }

        if let Err(e) = sets.union(&edge.from, &edge.to) {
            log::warn!("edge #{index}: {e}");
        }
    }

    let components = sets.set_count();
    if components > 1 {
        diagnostics.push(Diagnostic::new(
            Check::Disconnected,
            Location::Global,
            format!("graph has {components} connected components; the result will be a spanning forest"),
        ));
    }

    log::debug!(
        "validated {} vertices and {} edges: {} finding(s)",
        file.vertices.len(),
        file.edges.len(),
        diagnostics.len()
    );

    ValidationResult { diagnostics }
}
