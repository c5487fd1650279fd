//! Command-line grammar of the `spantree` binary.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Where a graph file comes from. `-` means stdin.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    Stdin,
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// What a command writes to stdout.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Tables and summary lines (default).
    Human,
    /// One pretty-printed JSON document.
    Json,
}

/// A selected edge given on the command line as `FROM,TO`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeArg {
    /// First endpoint.
    pub from: String,
    /// Second endpoint.
    pub to: String,
}

impl std::str::FromStr for EdgeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(',') {
            Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => Ok(Self {
                from: from.trim().to_owned(),
                to: to.trim().to_owned(),
            }),
            Some(_) | None => Err(format!("expected FROM,TO (e.g. A,D), got {s:?}")),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Run Kruskal's algorithm and print every accept/skip decision.
    Kruskal {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Stop scanning once n-1 edges are accepted (only meaningful for
        /// connected graphs; the trace then omits the remaining edges).
        #[arg(long)]
        stop_when_spanning: bool,
    },

    /// Run Prim's algorithm and print the vertex each step reaches.
    Prim {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Start vertex (default: the first vertex in the file).
        #[arg(long, value_name = "VERTEX")]
        start: Option<String>,
    },

    /// Run both algorithms and compare their results.
    Compare {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Score a hand-picked edge selection against the minimum spanning tree.
    Score {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// A selected edge as FROM,TO (repeatable).
        #[arg(long = "edge", value_name = "FROM,TO")]
        edges: Vec<EdgeArg>,
    },

    /// Check a graph file for reference errors and structural warnings.
    Validate {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print a new graph file skeleton.
    Init {
        /// Print the five-vertex classroom example instead of an empty graph.
        #[arg(long)]
        example: bool,
    },

    /// Print the spantree-core library version.
    Version,
}

/// Parsed command line. The flags below are global and may appear before or
/// after the subcommand.
#[derive(Parser)]
#[command(
    name = "spantree",
    version,
    about = "Minimum spanning tree explorer",
    long_about = "Computes minimum spanning trees with Kruskal's and Prim's algorithms,\n\
                  explains every step, and scores hand-picked solutions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Print nothing to stderr but errors.
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log each algorithm step and timing to stderr.
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Refuse inputs larger than this many bytes (16 MiB by default).
    #[arg(
        long,
        global = true,
        env = "SPANTREE_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,

    /// Never color human output. Setting `NO_COLOR` has the same effect.
    #[arg(long, global = true)]
    pub no_color: bool,
}
