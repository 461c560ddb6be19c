//! Settings for turning DOT text into an image.

use std::path::PathBuf;
use std::time::Duration;

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Default bound on a single renderer run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Image format requested from the renderer with `-T<format>`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Png,
    Gif,
    Jpg,
    Bmp,
    Svg,
}

impl OutputFormat {
    /// Name passed after `-T`, also used as the file extension.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

/// How and where to run the renderer.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Explicit renderer executable; when unset the renderer is searched for.
    pub dot_path: Option<PathBuf>,
    pub format: OutputFormat,
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dot_path: None,
            format: OutputFormat::default(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dot_path(mut self, path: Option<PathBuf>) -> Self {
        self.dot_path = path;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
