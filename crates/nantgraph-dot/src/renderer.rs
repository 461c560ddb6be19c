//! Graph to DOT statement tree, and on to an image.

use std::time::Instant;

use tracing::{debug, info};

use nantgraph_core::{Edge, Graph, GraphVisitor, Node};
use nantgraph_error::Result;

use crate::config::RenderConfig;
use crate::dot::{self, arrow_name, quote, shape_name};
use crate::process::{locate_renderer, run_renderer};
use crate::statement::{DotStatement, Statement, StatementBlock};

/// Name given to the top-level graph.
const GRAPH_NAME: &str = "build";

/// Result of [`DotRenderer::render_image`].
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// The DOT script that was sent to the renderer.
    pub dot_text: String,
    /// Image bytes, or `None` when the renderer produced no output file.
    pub image: Option<Vec<u8>>,
}

/// Renders one graph as DOT.
///
/// The graph given to [`DotRenderer::new`] becomes the `digraph`; every other
/// graph met during traversal is a `subgraph g<N>`, numbered in the order the
/// subgraphs finish.
pub struct DotRenderer<'g> {
    graph: &'g Graph,
    nested: usize,
}

impl<'g> DotRenderer<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph, nested: 0 }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Build the statement tree for the bound graph.
    pub fn render_statement(&mut self) -> Result<DotStatement> {
        self.nested = 0;
        let graph = self.graph;
        graph.visit(self)
    }

    /// Serialize the bound graph to DOT text.
    pub fn render_text(&mut self) -> Result<String> {
        Ok(self.render_statement()?.as_text())
    }

    /// Render the bound graph to an image with the external renderer.
    ///
    /// A renderer that runs but writes no file gives `image: None`; failing to
    /// find or run the renderer is an error.
    pub fn render_image(&mut self, config: &RenderConfig) -> Result<RenderOutput> {
        let dot_text = self.render_text()?;
        let renderer = locate_renderer(config)?;

        let render_start = Instant::now();
        let image = run_renderer(&renderer, &dot_text, config)?;
        info!(
            "Image rendering: {:.2}s",
            render_start.elapsed().as_secs_f64()
        );

        Ok(RenderOutput { dot_text, image })
    }
}

impl GraphVisitor<DotStatement> for DotRenderer<'_> {
    fn visit_node(&mut self, node: &Node) -> Result<DotStatement> {
        let mut statement =
            Statement::new(quote(node.name()))?.add_attribute(dot::LABEL, node.label())?;

        if let Some(shape) = shape_name(node.shape()) {
            statement = statement.add_attribute(dot::NODE_SHAPE, shape)?;
        }

        if let Some(fill) = node.fill_color() {
            statement = statement
                .add_attribute(dot::FILL_COLOR, &fill.to_hex())?
                .add_attribute(dot::STYLE, "filled")?;
        }

        if let Some(color) = node.font_color() {
            statement = statement.add_attribute(dot::FONT_COLOR, &color.to_hex())?;
        }

        if let Some(font) = node.font() {
            statement = statement.add_attribute(dot::FONT, font)?;
        }

        if node.font_size() > 0 {
            statement = statement.add_attribute(dot::FONT_SIZE, &node.font_size().to_string())?;
        }

        Ok(statement.into())
    }

    fn visit_edge(&mut self, edge: &Edge) -> Result<DotStatement> {
        let text = format!(
            "{} -> {}",
            quote(edge.start().name()),
            quote(edge.finish().name())
        );
        let mut statement = Statement::new(text)?
            .add_attribute(dot::ARROW_HEAD, arrow_name(edge.arrow_head()))?
            .add_attribute(dot::ARROW_TAIL, arrow_name(edge.arrow_tail()))?
            .add_attribute(dot::COLOR, &edge.color().to_hex())?;

        if !edge.constraining() {
            statement = statement.add_attribute(dot::EDGE_CONSTRAINT, "false")?;
        }

        Ok(statement.into())
    }

    fn visit_graph(
        &mut self,
        graph: &Graph,
        nodes: Vec<DotStatement>,
        edges: Vec<DotStatement>,
        subgraphs: Vec<DotStatement>,
    ) -> Result<DotStatement> {
        let header = if std::ptr::eq(graph, self.graph) {
            format!("{} {}", dot::TOP_LEVEL_KEYWORD, GRAPH_NAME)
        } else {
            let header = format!("{} g{}", dot::NESTED_KEYWORD, self.nested);
            self.nested += 1;
            header
        };

        debug!(
            header = %header,
            nodes = nodes.len(),
            edges = edges.len(),
            subgraphs = subgraphs.len(),
            "closing graph block"
        );

        let children = nodes.into_iter().chain(edges).chain(subgraphs);
        Ok(StatementBlock::new(header, children)?.into())
    }
}
