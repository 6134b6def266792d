//! Campus parking permit graph: who may park where.
//!
//! The crate is a small pipeline: roster rows are normalized into a
//! canonical (permit, lot) pair set, the pair set becomes a bipartite
//! directed graph, and queries answer "which lots does this permit allow?"
//! and "which permits allow this lot?". File loading, the interactive
//! prompt, and DOT rendering are thin wrappers around that engine.

pub mod error;
pub mod graph;
pub mod model;
pub mod render;
pub mod roster;

pub use error::GraphError;
pub use graph::{IsolationReport, NodeKind, PermitGraph};
pub use roster::{PairSet, RawRecord, normalize};

pub type Result<T> = anyhow::Result<T>;
