//! Record normalization: raw roster rows into a canonical pair set.

use crate::error::GraphError;
use crate::roster::row::RawRecord;
use std::collections::BTreeSet;

/// Canonical output of normalization.
///
/// `pairs` carries every distinct (permit, lot) grant. A permit whose lot
/// cell normalized to zero tokens cannot appear in `pairs`, so those are
/// kept separately: they still become graph nodes, just with no edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairSet {
    pub pairs: BTreeSet<(String, String)>,
    pub edgeless_permits: BTreeSet<String>,
}

impl PairSet {
    /// Build a `PairSet` from bare pairs, for callers that already hold
    /// canonical data.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        PairSet {
            pairs: pairs
                .into_iter()
                .map(|(permit, lot)| (permit.into(), lot.into()))
                .collect(),
            edgeless_permits: BTreeSet::new(),
        }
    }
}

/// Normalize raw roster rows into the canonical pair set.
///
/// Each lot cell is split on ',', every token trimmed, and empty tokens
/// dropped, so a trailing comma or a run of commas never produces a lot
/// named "". Permit strings are trimmed too. Duplicate grants across rows
/// collapse via set semantics.
///
/// Fails with `MalformedRow` when a row's permit is empty after trimming;
/// the row number in the error is 1-based. Pure transformation, no I/O.
pub fn normalize(records: &[RawRecord]) -> Result<PairSet, GraphError> {
    let mut out = PairSet::default();

    for (idx, record) in records.iter().enumerate() {
        let permit = record.permit.trim();
        if permit.is_empty() {
            return Err(GraphError::MalformedRow {
                row: idx + 1,
                permit: record.permit.clone(),
            });
        }

        let mut saw_lot = false;
        for token in record.lots.split(',') {
            let lot = token.trim();
            if lot.is_empty() {
                continue;
            }
            saw_lot = true;
            out.pairs.insert((permit.to_string(), lot.to_string()));
        }

        if !saw_lot {
            out.edgeless_permits.insert(permit.to_string());
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(permit: &str, lots: &str) -> RawRecord {
        RawRecord {
            permit: permit.to_string(),
            lots: lots.to_string(),
        }
    }

    #[test]
    fn trims_whitespace_and_drops_empty_tokens() {
        let out = normalize(&[record(" A ", "L1, L2 ,,L3")]).unwrap();

        let pairs: Vec<_> = out.pairs.iter().cloned().collect();
        assert_eq!(
            pairs,
            [
                ("A".to_string(), "L1".to_string()),
                ("A".to_string(), "L2".to_string()),
                ("A".to_string(), "L3".to_string()),
            ]
        );
        assert!(out.edgeless_permits.is_empty());
    }

    #[test]
    fn duplicate_grants_collapse() {
        let out = normalize(&[record("A", "L1, L1"), record("A", "L1")]).unwrap();
        assert_eq!(out.pairs.len(), 1);
    }

    #[test]
    fn empty_permit_is_malformed() {
        let err = normalize(&[record("A", "L1"), record("   ", "L2")]).unwrap_err();
        assert_eq!(
            err,
            GraphError::MalformedRow {
                row: 2,
                permit: "   ".into()
            }
        );
    }

    #[test]
    fn empty_lot_cell_marks_the_permit_edgeless() {
        let out = normalize(&[record("Visitor", ""), record("Staff", " , ,")]).unwrap();
        assert!(out.pairs.is_empty());
        let edgeless: Vec<_> = out.edgeless_permits.iter().cloned().collect();
        assert_eq!(edgeless, ["Staff", "Visitor"]);
    }

    #[test]
    fn permit_with_lots_elsewhere_may_still_have_an_empty_row() {
        // The edgeless marker only means "this row had no lots"; build
        // merges it with the permit's other grants.
        let out = normalize(&[record("Gold", "Lot A"), record("Gold", "")]).unwrap();
        assert_eq!(out.pairs.len(), 1);
        assert!(out.edgeless_permits.contains("Gold"));
    }
}
