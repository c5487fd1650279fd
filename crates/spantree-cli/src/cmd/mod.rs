/// Command module for the `spantree` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the loaded input and the parsed flags and returns `Ok(())`
/// on success or a [`crate::error::CliError`] on failure.
pub mod compare;
pub mod init;
pub mod kruskal;
pub mod prim;
pub mod score;
pub mod validate;
