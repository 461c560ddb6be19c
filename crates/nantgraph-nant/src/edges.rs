//! One edge per declared dependency.
//!
//! Dependencies are resolved against the nodes registered with
//! [`EdgeGenerator::reset`]. A name with no node gets a placeholder, created
//! once per name and styled so that it stands out in the rendered graph.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::{debug, warn};

use nantgraph_core::{ArrowShape, Color, Edge, EdgeStyle, Node, NodeShape, NodeStyle};
use nantgraph_error::Result;

use crate::project::{Project, ProjectVisitor, Target};

/// Creates dependency edges, inventing placeholder nodes for unknown names.
#[derive(Debug, Clone)]
pub struct EdgeGenerator {
    /// `None` until [`EdgeGenerator::reset`] has been called.
    known: Option<HashMap<String, Arc<Node>>>,
    missing: Vec<Arc<Node>>,
    edges: Vec<Edge>,
    missing_style: NodeStyle,
    dependency_style: EdgeStyle,
    warned_unprimed: bool,
}

impl Default for EdgeGenerator {
    fn default() -> Self {
        Self {
            known: None,
            missing: Vec::new(),
            edges: Vec::new(),
            missing_style: NodeStyle::new()
                .with_shape(NodeShape::Octagon)
                .with_fill_color(Color::RED)
                .with_font_color(Color::WHITE),
            dependency_style: EdgeStyle::new()
                .with_arrow_head(ArrowShape::Normal)
                .with_arrow_tail(ArrowShape::None)
                .with_color(Color::GRAY),
            warned_unprimed: false,
        }
    }
}

impl EdgeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the nodes dependencies resolve to.
    ///
    /// When two nodes share a name the first one is kept.
    pub fn reset<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = Arc<Node>>,
    {
        let mut known = HashMap::new();
        for node in nodes {
            match known.entry(node.name().to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(node);
                }
                Entry::Occupied(_) => {
                    warn!(name = %node.name(), "duplicate target name, keeping the first");
                }
            }
        }
        debug!(nodes = known.len(), "edge generator reset");
        self.known = Some(known);
    }

    /// Edges created so far, in visit order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Placeholders created so far, one per unknown name.
    pub fn missing_nodes(&self) -> &[Arc<Node>] {
        &self.missing
    }

    fn find_node(&mut self, name: &str) -> Result<Arc<Node>> {
        if let Some(node) = self.known.as_ref().and_then(|known| known.get(name)) {
            return Ok(Arc::clone(node));
        }

        if let Some(node) = self.missing.iter().find(|n| n.name() == name) {
            return Ok(Arc::clone(node));
        }

        debug!(name = %name, "creating placeholder for missing target");
        let node = Arc::new(self.missing_style.create_node(name, name)?);
        self.missing.push(Arc::clone(&node));
        Ok(node)
    }
}

impl ProjectVisitor for EdgeGenerator {
    fn visit_project(&mut self, project: &Project) -> Result<()> {
        debug!(project = %project.name(), "generating edges");
        Ok(())
    }

    fn visit_target(&mut self, target: &Target) -> Result<()> {
        if self.known.is_none() && !self.warned_unprimed {
            warn!("edge generator used before reset; every target becomes a placeholder");
            self.warned_unprimed = true;
        }

        let start = self.find_node(target.name())?;
        for dependency in target.depends() {
            let finish = self.find_node(dependency)?;
            self.edges
                .push(self.dependency_style.create_edge(&start, &finish));
        }
        Ok(())
    }
}
