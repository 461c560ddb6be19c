//! nantgraph command-line interface.

pub mod driver;
pub mod options;
pub mod renderer;

pub use driver::{Driver, Generated};
pub use options::RenderArgs;
pub use renderer::GraphRenderer;
