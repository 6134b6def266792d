//! Report views: the built graph flattened into serializable structures
//! for rendering and the JSON summary.

use crate::Result;
use crate::graph::{IsolationReport, PermitGraph};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PermitView {
    pub permit: String,
    /// Lots in query order (BFS discovery order).
    pub lots: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsView {
    pub permits: usize,
    pub lots: usize,
    pub grants: usize,
    pub isolated_permits: usize,
    pub isolated_lots: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub permits: Vec<PermitView>,
    /// Every lot identifier, ordered.
    pub lots: Vec<String>,
    pub totals: TotalsView,
    pub isolation: IsolationReport,
}

/// Flatten a built graph into report data.
pub fn build_report_data(graph: &PermitGraph) -> Result<ReportData> {
    let isolation = graph.validate();

    let mut permits = Vec::new();
    for permit in graph.permit_ids() {
        let lots = graph.lots_for_permit(permit)?;
        permits.push(PermitView {
            permit: permit.to_string(),
            lots,
        });
    }

    let lots: Vec<String> = graph.lot_ids().map(str::to_string).collect();

    let totals = TotalsView {
        permits: permits.len(),
        lots: lots.len(),
        grants: graph.grant_count(),
        isolated_permits: isolation.isolated_permits.len(),
        isolated_lots: isolation.isolated_lots.len(),
    };

    Ok(ReportData {
        permits,
        lots,
        totals,
        isolation,
    })
}
