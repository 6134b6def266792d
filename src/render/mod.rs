//! Rendering layer. Purely presentational; nothing here feeds back into
//! the graph.

pub mod dot;

pub use dot::render_dot;
