//! Reachability queries against a built graph.
//!
//! Forward: permit → every lot it allows. Reverse: lot → every permit that
//! allows it. Both take `&self` and return owned copies; nothing here can
//! change the graph.

use crate::error::GraphError;
use crate::graph::build::PermitGraph;
use crate::graph::node::NodeKind;
use std::collections::{BTreeSet, VecDeque};

impl PermitGraph {
    /// All lots reachable from `permit_id`, in BFS discovery order (ties
    /// inside a level break by edge insertion order).
    ///
    /// Today every path is a single hop, so this equals "all direct
    /// successors" — but the traversal is a real BFS, so a transitive
    /// permit hierarchy (a master permit granting another permit's lots)
    /// would resolve without changes here.
    ///
    /// Fails with `NodeNotFound` when `permit_id` is not a permit in the
    /// graph; a permit with zero grants returns an empty vec.
    pub fn lots_for_permit(&self, permit_id: &str) -> Result<Vec<String>, GraphError> {
        if self.node_kind(permit_id) != Some(NodeKind::Permit) {
            return Err(GraphError::NodeNotFound {
                kind: NodeKind::Permit,
                identifier: permit_id.to_string(),
            });
        }

        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::new();
        let mut lots = Vec::new();

        visited.insert(permit_id);
        queue.push_back(permit_id);

        while let Some(current) = queue.pop_front() {
            for next in self.out_edges(current) {
                if !visited.insert(next.as_str()) {
                    continue;
                }
                if self.node_kind(next) == Some(NodeKind::Lot) {
                    lots.push(next.clone());
                }
                queue.push_back(next.as_str());
            }
        }

        Ok(lots)
    }

    /// All permits with a direct grant into `lot_id`, in edge insertion
    /// order.
    ///
    /// Fails with `NodeNotFound` when `lot_id` is not a lot in the graph;
    /// a lot no permit grants returns an empty vec.
    pub fn permits_for_lot(&self, lot_id: &str) -> Result<Vec<String>, GraphError> {
        if self.node_kind(lot_id) != Some(NodeKind::Lot) {
            return Err(GraphError::NodeNotFound {
                kind: NodeKind::Lot,
                identifier: lot_id.to_string(),
            });
        }

        Ok(self.in_edges(lot_id).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::normalize::PairSet;

    fn sample() -> PermitGraph {
        PermitGraph::build(&PairSet::from_pairs([
            ("Gold", "Lot A"),
            ("Gold", "Lot B"),
            ("Silver", "Lot B"),
        ]))
        .unwrap()
    }

    #[test]
    fn forward_search_finds_all_granted_lots_in_order() {
        let graph = sample();
        assert_eq!(graph.lots_for_permit("Gold").unwrap(), ["Lot A", "Lot B"]);
        assert_eq!(graph.lots_for_permit("Silver").unwrap(), ["Lot B"]);
    }

    #[test]
    fn reverse_search_finds_all_granting_permits() {
        let graph = sample();
        assert_eq!(graph.permits_for_lot("Lot B").unwrap(), ["Gold", "Silver"]);
        assert_eq!(graph.permits_for_lot("Lot A").unwrap(), ["Gold"]);
    }

    #[test]
    fn round_trip_between_forward_and_reverse() {
        let graph = sample();
        for permit in ["Gold", "Silver"] {
            for lot in graph.lots_for_permit(permit).unwrap() {
                assert!(graph.permits_for_lot(&lot).unwrap().contains(&permit.to_string()));
            }
        }
    }

    #[test]
    fn unknown_permit_is_not_found() {
        let graph = sample();
        let err = graph.lots_for_permit("Bronze").unwrap_err();
        assert_eq!(
            err,
            GraphError::NodeNotFound {
                kind: NodeKind::Permit,
                identifier: "Bronze".into()
            }
        );
    }

    #[test]
    fn lot_queried_as_permit_is_not_found() {
        let graph = sample();
        let err = graph.lots_for_permit("Lot A").unwrap_err();
        assert_eq!(
            err,
            GraphError::NodeNotFound {
                kind: NodeKind::Permit,
                identifier: "Lot A".into()
            }
        );
    }

    #[test]
    fn unknown_lot_is_not_found() {
        let graph = sample();
        let err = graph.permits_for_lot("Lot Z").unwrap_err();
        assert_eq!(
            err,
            GraphError::NodeNotFound {
                kind: NodeKind::Lot,
                identifier: "Lot Z".into()
            }
        );
    }

    #[test]
    fn queries_never_mutate_the_graph() {
        let graph = sample();
        let before = graph.clone();

        let _ = graph.lots_for_permit("Gold");
        let _ = graph.permits_for_lot("Lot B");
        let _ = graph.lots_for_permit("Bronze");

        assert_eq!(graph, before);
    }

    #[test]
    fn edgeless_permit_queries_to_empty() {
        let mut pairs = PairSet::from_pairs([("Gold", "Lot A")]);
        pairs.edgeless_permits.insert("Visitor".into());
        let graph = PermitGraph::build(&pairs).unwrap();

        assert_eq!(graph.lots_for_permit("Visitor").unwrap(), Vec::<String>::new());
    }
}
