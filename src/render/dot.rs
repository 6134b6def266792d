//! Graphviz DOT rendering of the permit graph.

use crate::model::ReportData;

/// Render the report as a Graphviz digraph.
///
/// Permits are boxes, lots ellipses, one edge per grant. Output follows
/// the report's ordering, so repeated renders of the same graph are
/// byte-identical.
pub fn render_dot(data: &ReportData) -> String {
    let mut out = String::new();
    out.push_str("digraph permits {\n");
    out.push_str("  rankdir=LR;\n");
    out.push_str("  node [fontname=\"Helvetica\"];\n\n");

    for view in &data.permits {
        out.push_str(&format!("  {} [shape=box];\n", quote(&view.permit)));
    }
    out.push('\n');

    for lot in &data.lots {
        out.push_str(&format!("  {} [shape=ellipse];\n", quote(lot)));
    }
    out.push('\n');

    for view in &data.permits {
        for lot in &view.lots {
            out.push_str(&format!("  {} -> {};\n", quote(&view.permit), quote(lot)));
        }
    }

    out.push_str("}\n");
    out
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
