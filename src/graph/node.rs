//! Node kind tag.
//!
//! Permits and lots live in one string namespace in the source data, so
//! every node carries an explicit kind checked at build time rather than a
//! free-form attribute someone can forget to set.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    Permit,
    Lot,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Permit => f.write_str("permit"),
            NodeKind::Lot => f.write_str("lot"),
        }
    }
}
