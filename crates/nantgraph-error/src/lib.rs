//! # nantgraph-error
//!
//! Unified error handling for nantgraph.
//!
//! - **ErrorKind**: what went wrong (e.g. `InvalidArgument`, `RendererNotFound`)
//! - **Operation**: where it went wrong (`dot::render_image`, `nant::load`)
//! - **Context**: key/value pairs that help locate the cause
//! - **Source**: the wrapped underlying error, if any
//!
//! ```rust
//! use nantgraph_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ProjectLoadFailed, "unexpected end of document")
//!         .with_operation("nant::load")
//!         .with_context("path", "default.build"))
//! }
//! ```
//!
//! All errors are raised where they are detected and returned to the caller;
//! nothing in the library retries or swallows them.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the nantgraph Error
pub type Result<T> = std::result::Result<T, Error>;
