//! Projects in, DOT script and image out.

use nantgraph_core::Graph;
use nantgraph_dot::{DotRenderer, RenderConfig, RenderOutput};
use nantgraph_error::Result;
use nantgraph_nant::{EdgeGenerator, GraphGenerator, NodeGenerator, Project};

/// Renders the dependency graph of a set of projects.
#[derive(Debug, Clone, Default)]
pub struct GraphRenderer {
    pub include_descriptions: bool,
    pub label_font: Option<String>,
    pub label_font_size: u32,
    pub render: RenderConfig,
}

impl GraphRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include_descriptions(mut self, include: bool) -> Self {
        self.include_descriptions = include;
        self
    }

    pub fn with_label_font(mut self, font: Option<String>) -> Self {
        self.label_font = font;
        self
    }

    pub fn with_label_font_size(mut self, size: u32) -> Self {
        self.label_font_size = size;
        self
    }

    pub fn with_render_config(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    pub fn generate_graph(&self, projects: &[Project]) -> Result<Graph> {
        let nodes = NodeGenerator::new()
            .with_include_descriptions(self.include_descriptions)
            .with_label_font(self.label_font.clone())
            .with_label_font_size(self.label_font_size);
        GraphGenerator::new(projects, nodes, EdgeGenerator::new())?.generate_graph()
    }

    /// DOT script only; the external renderer is not run.
    pub fn render_text(&self, projects: &[Project]) -> Result<String> {
        let graph = self.generate_graph(projects)?;
        DotRenderer::new(&graph).render_text()
    }

    pub fn render(&self, projects: &[Project]) -> Result<RenderOutput> {
        let graph = self.generate_graph(projects)?;
        DotRenderer::new(&graph).render_image(&self.render)
    }
}
