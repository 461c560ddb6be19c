//! Immutable graph node.

use crate::visit::GraphVisitor;
use crate::{Color, Error, NodeShape, NodeStyle, Result};

/// A single vertex of the graph.
///
/// `name` is the identity within a graph; `label` is what the reader sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    label: String,
    shape: NodeShape,
    fill_color: Option<Color>,
    font: Option<String>,
    font_size: u32,
    font_color: Option<Color>,
}

impl Node {
    /// Create an unstyled node.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let label = label.into();

        if name.is_empty() {
            return Err(Error::invalid_argument("name", "node name is required")
                .with_operation("core::Node::new"));
        }

        if label.is_empty() {
            return Err(Error::invalid_argument("label", "node label is required")
                .with_operation("core::Node::new")
                .with_context("name", name));
        }

        Ok(Self {
            name,
            label,
            shape: NodeShape::None,
            fill_color: None,
            font: None,
            font_size: 0,
            font_color: None,
        })
    }

    /// Create a node initialised from `style`.
    pub fn with_style(
        name: impl Into<String>,
        label: impl Into<String>,
        style: &NodeStyle,
    ) -> Result<Self> {
        let mut node = Self::new(name, label)?;
        node.shape = style.shape;
        node.fill_color = style.fill_color;
        node.font = style.font.clone().filter(|f| !f.is_empty());
        node.font_size = style.font_size;
        node.font_color = style.font_color;
        Ok(node)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn shape(&self) -> NodeShape {
        self.shape
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn font_color(&self) -> Option<Color> {
        self.font_color
    }

    /// Dispatch this node to `visitor`.
    pub fn visit<R, V>(&self, visitor: &mut V) -> Result<R>
    where
        V: GraphVisitor<R> + ?Sized,
    {
        visitor.visit_node(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn new_node_keeps_name_and_label() {
        let node = Node::new("compile", "Compile sources").unwrap();
        assert_eq!(node.name(), "compile");
        assert_eq!(node.label(), "Compile sources");
        assert_eq!(node.shape(), NodeShape::None);
        assert_eq!(node.fill_color(), None);
        assert_eq!(node.font(), None);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Node::new("", "label").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.context_value("parameter"), Some("name"));
    }

    #[test]
    fn empty_label_is_rejected() {
        let err = Node::new("name", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.context_value("parameter"), Some("label"));
    }

    #[test]
    fn empty_font_in_style_counts_as_unset() {
        let style = NodeStyle::new().with_font(Some(String::new()));
        let node = Node::with_style("a", "a", &style).unwrap();
        assert_eq!(node.font(), None);
    }

    #[test]
    fn style_is_copied_onto_node() {
        let style = NodeStyle::new()
            .with_shape(NodeShape::Box)
            .with_fill_color(Color::LIGHT_YELLOW)
            .with_font(Some("Verdana".to_string()))
            .with_font_size(9)
            .with_font_color(Color::WHITE);
        let node = Node::with_style("a", "A", &style).unwrap();

        assert_eq!(node.shape(), NodeShape::Box);
        assert_eq!(node.fill_color(), Some(Color::LIGHT_YELLOW));
        assert_eq!(node.font(), Some("Verdana"));
        assert_eq!(node.font_size(), 9);
        assert_eq!(node.font_color(), Some(Color::WHITE));
    }
}
