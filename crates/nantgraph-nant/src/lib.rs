//! NAnt build files as dependency graphs.
//!
//! A [`Project`] is loaded from a NAnt build file. [`NodeGenerator`] turns
//! each of its targets into a node, [`EdgeGenerator`] turns each declared
//! dependency into an edge, and [`GraphGenerator`] runs both over a set of
//! projects to produce one [`Graph`](nantgraph_core::Graph) with a subgraph
//! per project.

pub mod edges;
pub mod generator;
pub mod nodes;
pub mod project;
pub mod text;

pub use edges::EdgeGenerator;
pub use generator::GraphGenerator;
pub use nodes::NodeGenerator;
pub use project::{Project, ProjectVisitor, Target};
