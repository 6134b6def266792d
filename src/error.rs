//! Typed errors for the permit graph core.
//!
//! Callers need to tell "bad query" apart from "bad data": an interactive
//! frontend re-prompts on `NodeNotFound` but must abort the whole load on
//! `IdentifierCollision`. An enum keeps that distinction matchable.

use crate::graph::NodeKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A roster row has no usable permit identifier after trimming.
    #[error("row {row}: permit identifier {permit:?} is empty after trimming")]
    MalformedRow { row: usize, permit: String },

    /// The same string appears as a permit in one pair and a lot in another.
    #[error("identifier {identifier:?} is used as both a permit and a lot")]
    IdentifierCollision { identifier: String },

    /// A query referenced an identifier that is not in the graph.
    #[error("no {kind} named {identifier:?}")]
    NodeNotFound { kind: NodeKind, identifier: String },
}
