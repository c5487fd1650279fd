mod cli;
mod cmd;
mod error;
mod format;
mod io;
mod logger;

use std::time::Instant;

use clap::Parser;

pub use cli::{Cli, Command, EdgeArg, OutputFormat, PathOrStdin};
use error::CliError;
use format::{FormatterConfig, stderr_error, write_timing_human};

fn main() {
    let cli = Cli::parse();
    logger::init(cli.quiet, cli.verbose);
    let config = FormatterConfig::from_flags(cli.no_color, cli.quiet, cli.verbose);

    if let Err(e) = run(&cli, &config) {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}

/// Loads the input named by the subcommand and dispatches to its `run`.
fn run(cli: &Cli, config: &FormatterConfig) -> Result<(), CliError> {
    let started = Instant::now();
    let label = match &cli.command {
        Command::Kruskal {
            file,
            stop_when_spanning,
        } => {
            let graph = io::load_graph(file, cli.max_file_size)?;
            cmd::kruskal::run(&graph, *stop_when_spanning, cli.format, config)?;
            "kruskal"
        }
        Command::Prim { file, start } => {
            let graph = io::load_graph(file, cli.max_file_size)?;
            cmd::prim::run(&graph, start.as_deref(), cli.format, config)?;
            "prim"
        }
        Command::Compare { file } => {
            let graph = io::load_graph(file, cli.max_file_size)?;
            cmd::compare::run(&graph, cli.format, config)?;
            "compare"
        }
        Command::Score { file, edges } => {
            let graph = io::load_graph(file, cli.max_file_size)?;
            cmd::score::run(&graph, edges, cli.format, config)?;
            "score"
        }
        Command::Validate { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            let parsed = io::parse_graph_file(&content)?;
            cmd::validate::run(&parsed, &io::source_label(file), cli.format, config)?;
            "validate"
        }
        Command::Init { example } => {
            cmd::init::run(*example)?;
            return Ok(());
        }
        Command::Version => {
            println!("{}", spantree_core::version());
            return Ok(());
        }
    };

    write_timing_human(&mut std::io::stderr().lock(), label, started.elapsed(), config)
        .map_err(stderr_error)
}
