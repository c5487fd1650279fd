//! Weighted graph generator and benchmark utilities for spantree.
//!
//! This crate provides deterministic generation of [`GraphFile`] documents
//! for benchmarking and invariant testing of `spantree-core`.
//!
//! [`GraphFile`]: spantree_core::GraphFile

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, Topology, generate_graph};
