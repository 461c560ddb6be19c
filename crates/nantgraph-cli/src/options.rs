//! Command-line options shared by the renderer-facing commands.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

use nantgraph_dot::{OutputFormat, RenderConfig};

/// How to find and run Graphviz.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Path to the Graphviz `dot` executable (searched for when omitted)
    #[arg(long = "dot", value_name = "PATH", env = "NANTGRAPH_DOT")]
    pub dot: Option<PathBuf>,

    /// Image format: png, gif, jpg, bmp or svg
    #[arg(long, value_name = "FMT", default_value = "png")]
    pub format: OutputFormat,

    /// Seconds to wait for the renderer; 0 waits indefinitely
    #[arg(long, value_name = "SECS", default_value_t = 60)]
    pub timeout: u64,
}

impl RenderArgs {
    pub fn to_config(&self) -> RenderConfig {
        let timeout = (self.timeout > 0).then(|| Duration::from_secs(self.timeout));
        RenderConfig::new()
            .with_dot_path(self.dot.clone())
            .with_format(self.format)
            .with_timeout(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_means_no_limit() {
        let args = RenderArgs {
            dot: None,
            format: OutputFormat::Svg,
            timeout: 0,
        };
        let config = args.to_config();
        assert_eq!(config.timeout, None);
        assert_eq!(config.format, OutputFormat::Svg);
    }

    #[test]
    fn timeout_is_in_seconds() {
        let args = RenderArgs {
            dot: Some(PathBuf::from("/usr/bin/dot")),
            format: OutputFormat::Png,
            timeout: 5,
        };
        let config = args.to_config();
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.dot_path, Some(PathBuf::from("/usr/bin/dot")));
    }
}
