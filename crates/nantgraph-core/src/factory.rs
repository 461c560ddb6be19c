//! Graph construction from loosely nested content.
//!
//! [`GraphContent`] is the closed set of things a graph can be assembled
//! from: nodes, edges, graphs (which become subgraphs) and sequences of any
//! of these nested to arbitrary depth. Because the set is closed, content the
//! factory cannot classify is a compile error rather than a runtime one.

use std::sync::Arc;

use crate::{Edge, Graph, Node};

/// One piece of input for [`GraphFactory::create_graph`].
#[derive(Debug, Clone)]
pub enum GraphContent {
    Node(Arc<Node>),
    Edge(Edge),
    Graph(Arc<Graph>),
    Seq(Vec<GraphContent>),
}

impl GraphContent {
    /// Content that contributes nothing.
    pub fn nothing() -> Self {
        GraphContent::Seq(Vec::new())
    }
}

impl From<Node> for GraphContent {
    fn from(node: Node) -> Self {
        GraphContent::Node(Arc::new(node))
    }
}

impl From<Arc<Node>> for GraphContent {
    fn from(node: Arc<Node>) -> Self {
        GraphContent::Node(node)
    }
}

impl From<&Arc<Node>> for GraphContent {
    fn from(node: &Arc<Node>) -> Self {
        GraphContent::Node(Arc::clone(node))
    }
}

impl From<Edge> for GraphContent {
    fn from(edge: Edge) -> Self {
        GraphContent::Edge(edge)
    }
}

impl From<&Edge> for GraphContent {
    fn from(edge: &Edge) -> Self {
        GraphContent::Edge(edge.clone())
    }
}

impl From<Graph> for GraphContent {
    fn from(graph: Graph) -> Self {
        GraphContent::Graph(Arc::new(graph))
    }
}

impl From<Arc<Graph>> for GraphContent {
    fn from(graph: Arc<Graph>) -> Self {
        GraphContent::Graph(graph)
    }
}

impl From<&Arc<Graph>> for GraphContent {
    fn from(graph: &Arc<Graph>) -> Self {
        GraphContent::Graph(Arc::clone(graph))
    }
}

impl<T: Into<GraphContent>> From<Vec<T>> for GraphContent {
    fn from(items: Vec<T>) -> Self {
        GraphContent::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T> From<&[T]> for GraphContent
where
    T: Clone + Into<GraphContent>,
{
    fn from(items: &[T]) -> Self {
        GraphContent::Seq(items.iter().cloned().map(Into::into).collect())
    }
}

/// A missing value is skipped.
impl<T: Into<GraphContent>> From<Option<T>> for GraphContent {
    fn from(item: Option<T>) -> Self {
        item.map_or_else(GraphContent::nothing, Into::into)
    }
}

/// Build a `Vec<GraphContent>` from heterogeneous arguments.
///
/// ```
/// use std::sync::Arc;
/// use nantgraph_core::{GraphFactory, Node, graph_content};
///
/// let a = Arc::new(Node::new("a", "A").unwrap());
/// let b = Arc::new(Node::new("b", "B").unwrap());
/// let graph = GraphFactory::new().create_graph(graph_content![a, vec![b]]);
/// assert_eq!(graph.nodes().len(), 2);
/// ```
#[macro_export]
macro_rules! graph_content {
    ($($item:expr),* $(,)?) => {
        vec![$($crate::GraphContent::from($item)),*]
    };
}

/// Assembles graphs from [`GraphContent`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphFactory;

impl GraphFactory {
    pub fn new() -> Self {
        Self
    }

    /// Flatten `content` into a graph.
    ///
    /// Nodes, edges and graphs each keep the order in which a depth-first,
    /// left-to-right scan first meets them, so nesting never changes the
    /// result: `[a, [b, c]]` and `[a, b, c]` build identical graphs.
    pub fn create_graph<I>(&self, content: I) -> Graph
    where
        I: IntoIterator,
        I::Item: Into<GraphContent>,
    {
        let mut collector = Collector::default();
        for item in content {
            collector.scan(item.into());
        }
        Graph::new(collector.nodes, collector.edges, collector.graphs)
    }
}

#[derive(Default)]
struct Collector {
    nodes: Vec<Arc<Node>>,
    edges: Vec<Edge>,
    graphs: Vec<Arc<Graph>>,
}

impl Collector {
    fn scan(&mut self, content: GraphContent) {
        match content {
            GraphContent::Node(node) => self.nodes.push(node),
            GraphContent::Edge(edge) => self.edges.push(edge),
            GraphContent::Graph(graph) => self.graphs.push(graph),
            GraphContent::Seq(items) => {
                for item in items {
                    self.scan(item);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str) -> Arc<Node> {
        Arc::new(Node::new(name, name).unwrap())
    }

    fn names(graph: &Graph) -> Vec<&str> {
        graph.nodes().iter().map(|n| n.name()).collect()
    }

    #[test]
    fn empty_content_builds_empty_graph() {
        let graph = GraphFactory::new().create_graph(Vec::<GraphContent>::new());
        assert!(graph.is_empty());
    }

    #[test]
    fn classifies_each_kind_of_content() {
        let a = node("a");
        let b = node("b");
        let edge = Edge::new(Arc::clone(&a), Arc::clone(&b));
        let sub = Arc::new(Graph::empty());

        let graph = GraphFactory::new().create_graph(graph_content![
            &a,
            edge,
            &sub,
            Arc::clone(&b)
        ]);

        assert_eq!(names(&graph), vec!["a", "b"]);
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.subgraphs().len(), 1);
        assert!(Arc::ptr_eq(&graph.subgraphs()[0], &sub));
    }

    #[test]
    fn nesting_does_not_change_the_result() {
        let a = node("a");
        let b = node("b");
        let c = node("c");
        let factory = GraphFactory::new();

        let nested = factory.create_graph(graph_content![
            &a,
            vec![GraphContent::from(&b), GraphContent::from(vec![&c])]
        ]);
        let flat = factory.create_graph(graph_content![&a, &b, &c]);

        assert_eq!(names(&nested), names(&flat));
        assert_eq!(names(&flat), vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_values_are_skipped() {
        let a = node("a");
        let graph = GraphFactory::new().create_graph(graph_content![
            None::<Arc<Node>>,
            Some(Arc::clone(&a)),
            GraphContent::nothing()
        ]);
        assert_eq!(names(&graph), vec!["a"]);
    }

    #[test]
    fn slices_are_flattened_in_order() {
        let nodes = vec![node("x"), node("y")];
        let edges = vec![Edge::new(Arc::clone(&nodes[0]), Arc::clone(&nodes[1]))];
        let graph = GraphFactory::new()
            .create_graph(graph_content![edges.as_slice(), nodes.as_slice()]);

        assert_eq!(names(&graph), vec!["x", "y"]);
        assert_eq!(graph.edges()[0].finish().name(), "y");
    }
}
