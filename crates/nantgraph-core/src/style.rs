//! Colors, shapes and the style factories that stamp out nodes and edges.

use std::fmt;
use std::sync::Arc;

use strum_macros::EnumIter;

use crate::{Edge, Node, Result};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const LIGHT_YELLOW: Color = Color::rgb(255, 255, 224);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lower-case `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Outline of a node.
///
/// `None` means "let the renderer pick its default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
#[non_exhaustive]
pub enum NodeShape {
    #[default]
    None,
    Box,
    Circle,
    Diamond,
    DoubleCircle,
    DoubleOctagon,
    Egg,
    Ellipse,
    Hexagon,
    House,
    InvHouse,
    InvTrapezium,
    InvTriangle,
    MCircle,
    MDiamond,
    MSquare,
    Octagon,
    Parallelogram,
    Pentagon,
    Plaintext,
    Point,
    Polygon,
    Record,
    Septagon,
    Trapezium,
    Triangle,
    TripleOctagon,
}

/// Decoration at either end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
#[non_exhaustive]
pub enum ArrowShape {
    Box,
    Crow,
    Diamond,
    Dot,
    Inv,
    None,
    #[default]
    Normal,
    Tee,
    Vee,
}

/// Configuration stamp for nodes.
///
/// Change the fields freely; every node created keeps a snapshot of the
/// style as it was at creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeStyle {
    pub shape: NodeShape,
    /// `None` leaves the node unfilled.
    pub fill_color: Option<Color>,
    pub font: Option<String>,
    /// Zero leaves the renderer default in place.
    pub font_size: u32,
    pub font_color: Option<Color>,
}

impl NodeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(mut self, shape: NodeShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn with_font(mut self, font: Option<String>) -> Self {
        self.font = font;
        self
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    /// Create a node carrying this style.
    pub fn create_node(&self, name: impl Into<String>, label: impl Into<String>) -> Result<Node> {
        Node::with_style(name, label, self)
    }
}

/// Configuration stamp for edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeStyle {
    pub arrow_head: ArrowShape,
    pub arrow_tail: ArrowShape,
    pub color: Color,
    /// Whether edges take part in rank assignment.
    pub constraining: bool,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            arrow_head: ArrowShape::Normal,
            arrow_tail: ArrowShape::None,
            color: Color::BLACK,
            constraining: true,
        }
    }
}

impl EdgeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_arrow_head(mut self, shape: ArrowShape) -> Self {
        self.arrow_head = shape;
        self
    }

    pub fn with_arrow_tail(mut self, shape: ArrowShape) -> Self {
        self.arrow_tail = shape;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_constraining(mut self, constraining: bool) -> Self {
        self.constraining = constraining;
        self
    }

    /// Create an edge between two existing nodes carrying this style.
    pub fn create_edge(&self, start: &Arc<Node>, finish: &Arc<Node>) -> Edge {
        Edge::with_style(Arc::clone(start), Arc::clone(finish), self)
    }
}
