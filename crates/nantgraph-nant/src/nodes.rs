//! One node per target.

use std::sync::Arc;

use tracing::debug;

use nantgraph_core::{Node, NodeShape, NodeStyle};
use nantgraph_error::Result;

use crate::project::{Project, ProjectVisitor, Target};
use crate::text::describe;

/// Column width for target descriptions in node labels.
pub const LABEL_WIDTH: usize = 30;

/// Creates a node for every target visited, in visit order.
#[derive(Debug, Clone, Default)]
pub struct NodeGenerator {
    include_descriptions: bool,
    label_font: Option<String>,
    label_font_size: u32,
    nodes: Vec<Arc<Node>>,
}

impl NodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold each target's description into its label.
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

    pub fn include_descriptions(&self) -> bool {
        self.include_descriptions
    }

    /// Every node generated so far.
    pub fn nodes(&self) -> &[Arc<Node>] {
        &self.nodes
    }

    fn style(&self) -> NodeStyle {
        NodeStyle::new()
            .with_shape(NodeShape::Box)
            .with_font(self.label_font.clone())
            .with_font_size(self.label_font_size)
    }

    fn label(&self, target: &Target) -> Result<String> {
        if self.include_descriptions {
            describe(target.name(), target.description(), LABEL_WIDTH)
        } else {
            Ok(target.name().to_string())
        }
    }
}

impl ProjectVisitor for NodeGenerator {
    fn visit_project(&mut self, project: &Project) -> Result<()> {
        debug!(
            project = %project.name(),
            targets = project.targets().len(),
            "generating nodes"
        );
        Ok(())
    }

    fn visit_target(&mut self, target: &Target) -> Result<()> {
        let label = self.label(target)?;
        let node = self.style().create_node(target.name(), label)?;
        self.nodes.push(Arc::new(node));
        Ok(())
    }
}
