//! Graph construction from the canonical pair set.

use crate::error::GraphError;
use crate::graph::node::NodeKind;
use crate::roster::normalize::PairSet;
use std::collections::BTreeMap;

/// The bipartite permit → lot graph.
///
/// Storage is an explicit kind table plus two adjacency maps kept in edge
/// insertion order. All fields are private: the graph is populated once by
/// [`PermitGraph::build`] and only read afterwards; queries hand out owned
/// copies, never internal handles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermitGraph {
    /// identifier -> kind, the authoritative node set.
    kinds: BTreeMap<String, NodeKind>,
    /// permit -> lots it grants. Nodes without outgoing edges have no entry.
    grants: BTreeMap<String, Vec<String>>,
    /// lot -> permits granting it. Nodes without incoming edges have no entry.
    granted_by: BTreeMap<String, Vec<String>>,
}

impl PermitGraph {
    /// Build a graph from a normalized pair set.
    ///
    /// One node per distinct identifier, one edge per distinct pair; the
    /// set input means duplicate grants already collapsed, so building
    /// twice from the same input yields an identical graph. Permits
    /// recorded with an empty lot list get a node and no edges.
    ///
    /// Fails with `IdentifierCollision` when a string is used as a permit
    /// in one pair and as a lot in another, anywhere in the input. The
    /// check is against the kind table, never first-insertion-wins.
    pub fn build(pairs: &PairSet) -> Result<Self, GraphError> {
        let mut graph = PermitGraph::default();

        for (permit, lot) in &pairs.pairs {
            graph.insert_node(permit, NodeKind::Permit)?;
            graph.insert_node(lot, NodeKind::Lot)?;

            graph
                .grants
                .entry(permit.clone())
                .or_default()
                .push(lot.clone());
            graph
                .granted_by
                .entry(lot.clone())
                .or_default()
                .push(permit.clone());
        }

        for permit in &pairs.edgeless_permits {
            graph.insert_node(permit, NodeKind::Permit)?;
        }

        Ok(graph)
    }

    /// Record a node, enforcing one kind per identifier.
    ///
    /// Also the seam a future edge-less insertion API would go through,
    /// which is why `validate` must not assume isolation cannot happen.
    pub(crate) fn insert_node(&mut self, id: &str, kind: NodeKind) -> Result<(), GraphError> {
        match self.kinds.get(id) {
            None => {
                self.kinds.insert(id.to_string(), kind);
                Ok(())
            }
            Some(existing) if *existing == kind => Ok(()),
            Some(_) => Err(GraphError::IdentifierCollision {
                identifier: id.to_string(),
            }),
        }
    }

    /// Kind of `id`, or `None` if the identifier is not in the graph.
    pub fn node_kind(&self, id: &str) -> Option<NodeKind> {
        self.kinds.get(id).copied()
    }

    /// All nodes with their kinds, ordered by identifier.
    pub fn nodes(&self) -> impl Iterator<Item = (&String, NodeKind)> {
        self.kinds.iter().map(|(id, kind)| (id, *kind))
    }

    /// All permit identifiers, ordered.
    pub fn permit_ids(&self) -> impl Iterator<Item = &str> {
        self.kinds
            .iter()
            .filter(|(_, kind)| **kind == NodeKind::Permit)
            .map(|(id, _)| id.as_str())
    }

    /// All lot identifiers, ordered.
    pub fn lot_ids(&self) -> impl Iterator<Item = &str> {
        self.kinds
            .iter()
            .filter(|(_, kind)| **kind == NodeKind::Lot)
            .map(|(id, _)| id.as_str())
    }

    /// Total number of grant edges.
    pub fn grant_count(&self) -> usize {
        self.grants.values().map(Vec::len).sum()
    }

    /// Outgoing edges of `id`, in insertion order. Empty for unknown ids.
    pub(crate) fn out_edges(&self, id: &str) -> &[String] {
        self.grants.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Incoming edges of `id`, in insertion order. Empty for unknown ids.
    pub(crate) fn in_edges(&self, id: &str) -> &[String] {
        self.granted_by.get(id).map(Vec::as_slice).unwrap_or_default()
    }
}
