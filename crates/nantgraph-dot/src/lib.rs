//! Graphviz rendering for nantgraph.
//!
//! A [`Graph`](nantgraph_core::Graph) is turned into a tree of DOT
//! statements by [`DotRenderer`], serialized to text, and piped through the
//! external `dot` executable to obtain an image.
//!
//! # Module Structure
//!
//! - [`statement`]: immutable statements and statement blocks
//! - [`dot`]: DOT vocabulary for shapes, arrows and colors, plus escaping
//! - [`renderer`]: the graph visitor producing the statement tree
//! - [`process`]: locating and driving the `dot` executable
//! - [`config`]: render settings

pub mod config;
pub mod dot;
pub mod process;
pub mod renderer;
pub mod statement;

pub use config::{OutputFormat, RenderConfig};
pub use process::{locate_renderer, run_renderer};
pub use renderer::{DotRenderer, RenderOutput};
pub use statement::{Attributes, DotStatement, Statement, StatementBlock};
