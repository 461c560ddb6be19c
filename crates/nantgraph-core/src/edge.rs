//! Immutable directed edge between two nodes.

use std::sync::Arc;

use crate::visit::GraphVisitor;
use crate::{ArrowShape, Color, EdgeStyle, Node, Result};

/// A directed connection from `start` to `finish`.
///
/// The edge shares its endpoints with whatever graph holds the nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    start: Arc<Node>,
    finish: Arc<Node>,
    arrow_head: ArrowShape,
    arrow_tail: ArrowShape,
    color: Color,
    constraining: bool,
}

impl Edge {
    /// Create an edge with the default style.
    pub fn new(start: Arc<Node>, finish: Arc<Node>) -> Self {
        Self::with_style(start, finish, &EdgeStyle::default())
    }

    pub fn with_style(start: Arc<Node>, finish: Arc<Node>, style: &EdgeStyle) -> Self {
        Self {
            start,
            finish,
            arrow_head: style.arrow_head,
            arrow_tail: style.arrow_tail,
            color: style.color,
            constraining: style.constraining,
        }
    }

    pub fn start(&self) -> &Arc<Node> {
        &self.start
    }

    pub fn finish(&self) -> &Arc<Node> {
        &self.finish
    }

    pub fn arrow_head(&self) -> ArrowShape {
        self.arrow_head
    }

    pub fn arrow_tail(&self) -> ArrowShape {
        self.arrow_tail
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn constraining(&self) -> bool {
        self.constraining
    }

    /// Dispatch this edge to `visitor`.
    pub fn visit<R, V>(&self, visitor: &mut V) -> Result<R>
    where
        V: GraphVisitor<R> + ?Sized,
    {
        visitor.visit_edge(self)
    }
}
