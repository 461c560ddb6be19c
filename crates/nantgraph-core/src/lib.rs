//! Graph model for nantgraph.
//!
//! Nodes, edges and graphs are immutable once built. Styles are mutable
//! "stamps" that produce them. Consumers walk a graph through the
//! [`GraphVisitor`] protocol, and [`GraphFactory`] assembles graphs from
//! loosely nested content.
//!
//! # Module Structure
//!
//! - [`style`]: colors, shapes and the node/edge style factories
//! - [`node`], [`edge`], [`graph`]: the model itself
//! - [`visit`]: the post-order visitor protocol
//! - [`factory`]: flattening construction of graphs

pub mod edge;
pub mod factory;
pub mod graph;
pub mod node;
pub mod style;
pub mod visit;

pub use edge::Edge;
pub use factory::{GraphContent, GraphFactory};
pub use graph::Graph;
pub use nantgraph_error::{Error, ErrorKind, Result};
pub use node::Node;
pub use style::{ArrowShape, Color, EdgeStyle, NodeShape, NodeStyle};
pub use visit::{GraphVisitor, walk};
