//! DOT vocabulary: attribute names, shape and arrow names, escaping.

use nantgraph_core::{ArrowShape, NodeShape};

pub const ARROW_HEAD: &str = "arrowhead";
pub const ARROW_TAIL: &str = "arrowtail";
pub const COLOR: &str = "color";
pub const EDGE_CONSTRAINT: &str = "constraint";
pub const FILL_COLOR: &str = "fillcolor";
pub const FONT: &str = "fontname";
pub const FONT_SIZE: &str = "fontsize";
pub const FONT_COLOR: &str = "fontcolor";
pub const LABEL: &str = "label";
pub const NODE_SHAPE: &str = "shape";
pub const STYLE: &str = "style";

/// Keyword for the graph rendering was invoked on.
pub const TOP_LEVEL_KEYWORD: &str = "digraph";
/// Keyword for every graph nested inside it.
pub const NESTED_KEYWORD: &str = "subgraph";

/// Map a node shape to its DOT name.
///
/// Returns `None` for [`NodeShape::None`]: no shape attribute is written and
/// the renderer default applies. Anything unknown falls back to `box`.
pub fn shape_name(shape: NodeShape) -> Option<&'static str> {
    let name = match shape {
        NodeShape::None => return None,
        NodeShape::Box => "box",
        NodeShape::Circle => "circle",
        NodeShape::Diamond => "diamond",
        NodeShape::DoubleCircle => "doublecircle",
        NodeShape::DoubleOctagon => "doubleoctagon",
        NodeShape::Egg => "egg",
        NodeShape::Ellipse => "ellipse",
        NodeShape::Hexagon => "hexagon",
        NodeShape::House => "house",
        NodeShape::InvHouse => "invhouse",
        NodeShape::InvTrapezium => "invtrapezium",
        NodeShape::InvTriangle => "invtriangle",
        NodeShape::MCircle => "Mcircle",
        NodeShape::MDiamond => "Mdiamond",
        NodeShape::MSquare => "Msquare",
        NodeShape::Octagon => "octagon",
        NodeShape::Parallelogram => "parallelogram",
        NodeShape::Pentagon => "pentagon",
        NodeShape::Plaintext => "plaintext",
        NodeShape::Point => "point",
        NodeShape::Polygon => "polygon",
        NodeShape::Record => "record",
        NodeShape::Septagon => "septagon",
        NodeShape::Trapezium => "trapezium",
        NodeShape::Triangle => "triangle",
        NodeShape::TripleOctagon => "tripleoctagon",
        _ => "box",
    };
    Some(name)
}

/// Map an arrow shape to its DOT name; anything unknown is `normal`.
pub fn arrow_name(shape: ArrowShape) -> &'static str {
    match shape {
        ArrowShape::Box => "box",
        ArrowShape::Crow => "crow",
        ArrowShape::Diamond => "diamond",
        ArrowShape::Dot => "dot",
        ArrowShape::Inv => "inv",
        ArrowShape::None => "none",
        ArrowShape::Normal => "normal",
        ArrowShape::Tee => "tee",
        ArrowShape::Vee => "vee",
        _ => "normal",
    }
}

/// Escape special characters for a double-quoted DOT string.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Quote an identifier, escaping as needed.
pub fn quote(input: &str) -> String {
    format!("\"{}\"", escape_label(input))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_shape_but_none_has_a_distinct_name() {
        let names: Vec<&str> = NodeShape::iter().filter_map(shape_name).collect();
        let unique: HashSet<&str> = names.iter().copied().collect();

        assert_eq!(shape_name(NodeShape::None), None);
        assert_eq!(names.len(), NodeShape::iter().count() - 1);
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn shape_names_follow_graphviz_spelling() {
        assert_eq!(shape_name(NodeShape::MCircle), Some("Mcircle"));
        assert_eq!(shape_name(NodeShape::MDiamond), Some("Mdiamond"));
        assert_eq!(shape_name(NodeShape::MSquare), Some("Msquare"));
        assert_eq!(shape_name(NodeShape::InvTrapezium), Some("invtrapezium"));
        assert_eq!(shape_name(NodeShape::TripleOctagon), Some("tripleoctagon"));
    }

    #[test]
    fn every_arrow_has_a_distinct_name() {
        let names: HashSet<&str> = ArrowShape::iter().map(arrow_name).collect();
        assert_eq!(names.len(), ArrowShape::iter().count());
        assert_eq!(arrow_name(ArrowShape::None), "none");
        assert_eq!(arrow_name(ArrowShape::Normal), "normal");
    }

    #[test]
    fn escape_handles_quotes_backslashes_and_newlines() {
        assert_eq!(escape_label(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_label("a\\b"), "a\\\\b");
        assert_eq!(escape_label("line1\nline2"), "line1\\nline2");
        assert_eq!(quote("build"), "\"build\"");
    }
}
