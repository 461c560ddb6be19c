//! Immutable graph: ordered nodes, edges and nested subgraphs.

use std::sync::Arc;

use crate::visit::{GraphVisitor, walk};
use crate::{Edge, Node, Result};

/// A graph, possibly containing subgraphs.
///
/// A graph has no name or identity of its own; two graphs are "the same"
/// only if they are the same allocation (`std::ptr::eq`). Subgraphs are held
/// behind `Arc` so that identity survives being placed in a parent.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Arc<Node>>,
    edges: Vec<Edge>,
    subgraphs: Vec<Arc<Graph>>,
}

impl Graph {
    /// Build a graph from copies of the three sequences.
    pub fn new<N, E, G>(nodes: N, edges: E, subgraphs: G) -> Self
    where
        N: IntoIterator<Item = Arc<Node>>,
        E: IntoIterator<Item = Edge>,
        G: IntoIterator<Item = Arc<Graph>>,
    {
        Self {
            nodes: nodes.into_iter().collect(),
            edges: edges.into_iter().collect(),
            subgraphs: subgraphs.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Arc<Node>] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn subgraphs(&self) -> &[Arc<Graph>] {
        &self.subgraphs
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty() && self.subgraphs.is_empty()
    }

    /// Find a node of this graph (not its subgraphs) by name.
    pub fn find_node(&self, name: &str) -> Option<&Arc<Node>> {
        self.nodes.iter().find(|n| n.name() == name)
    }

    /// Walk this graph bottom-up with `visitor`; see [`walk`].
    pub fn visit<R, V>(&self, visitor: &mut V) -> Result<R>
    where
        V: GraphVisitor<R> + ?Sized,
    {
        walk(self, visitor)
    }
}
