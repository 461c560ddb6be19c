//! Double-dispatch visitor protocol over the graph model.
//!
//! Renderers and other consumers implement [`GraphVisitor`] for some result
//! type `R`; [`walk`] drives the traversal. The model never needs to change
//! to support a new consumer.
//!
//! # Traversal Order
//!
//! Traversal is post-order and bottom-up. For every graph:
//!
//! 1. each node, in sequence order
//! 2. each edge, in sequence order
//! 3. each subgraph, recursively (depth-first, left to right)
//! 4. `visit_graph` with the three ordered result lists
//!
//! A graph's own visit therefore always happens after everything it contains.
//! The first error returned by any visit stops the traversal and is
//! propagated unchanged.

use crate::{Edge, Graph, Node, Result};

/// Consumer of a graph traversal producing one `R` per element.
pub trait GraphVisitor<R> {
    /// Visit a node.
    fn visit_node(&mut self, node: &Node) -> Result<R>;

    /// Visit an edge.
    fn visit_edge(&mut self, edge: &Edge) -> Result<R>;

    /// Visit a graph once all of its contents have been visited.
    ///
    /// The three lists hold the results for the graph's nodes, edges and
    /// subgraphs, each in the graph's own order.
    fn visit_graph(
        &mut self,
        graph: &Graph,
        nodes: Vec<R>,
        edges: Vec<R>,
        subgraphs: Vec<R>,
    ) -> Result<R>;
}

/// Walk `graph` with `visitor` in post-order.
pub fn walk<R, V>(graph: &Graph, visitor: &mut V) -> Result<R>
where
    V: GraphVisitor<R> + ?Sized,
{
    let mut nodes = Vec::with_capacity(graph.nodes().len());
    for node in graph.nodes() {
        nodes.push(visitor.visit_node(node)?);
    }

    let mut edges = Vec::with_capacity(graph.edges().len());
    for edge in graph.edges() {
        edges.push(visitor.visit_edge(edge)?);
    }

    let mut subgraphs = Vec::with_capacity(graph.subgraphs().len());
    for subgraph in graph.subgraphs() {
        subgraphs.push(walk(subgraph, visitor)?);
    }

    visitor.visit_graph(graph, nodes, edges, subgraphs)
}
