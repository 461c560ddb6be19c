//! Build files in, image and DOT script files out.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use nantgraph_dot::RenderConfig;
use nantgraph_error::{Error, Result};
use nantgraph_nant::Project;

use crate::renderer::GraphRenderer;

/// Files written by [`Driver::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Image file, or `None` when the renderer produced no image.
    pub image_file: Option<PathBuf>,
    pub dot_file: Option<PathBuf>,
}

/// Collects settings one at a time, then loads, renders and saves.
#[derive(Debug, Clone, Default)]
pub struct Driver {
    build_files: Vec<PathBuf>,
    image_file: Option<PathBuf>,
    dot_file: Option<PathBuf>,
    font: Option<String>,
    font_size: u32,
    show_descriptions: bool,
    render: RenderConfig,
}

impl Driver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_build_files(&mut self) {
        self.build_files.clear();
    }

    pub fn add_build_file(&mut self, path: impl Into<PathBuf>) {
        self.build_files.push(path.into());
    }

    pub fn build_files(&self) -> &[PathBuf] {
        &self.build_files
    }

    /// Set where the image goes; may only be set once.
    pub fn set_image_file(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        if self.image_file.is_some() {
            return Err(Error::invalid_argument(
                "image_file",
                "image output file has already been specified",
            )
            .with_operation("cli::Driver::set_image_file"));
        }
        self.image_file = Some(path.into());
        Ok(())
    }

    /// Set where the DOT script goes; may only be set once.
    pub fn set_dot_file(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        if self.dot_file.is_some() {
            return Err(Error::invalid_argument(
                "dot_file",
                "dot output file has already been specified",
            )
            .with_operation("cli::Driver::set_dot_file"));
        }
        self.dot_file = Some(path.into());
        Ok(())
    }

    pub fn set_font(&mut self, font: Option<String>) {
        self.font = font;
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = size;
    }

    pub fn show_descriptions(&mut self, show: bool) {
        self.show_descriptions = show;
    }

    pub fn set_render_config(&mut self, render: RenderConfig) {
        self.render = render;
    }

    /// The image path in effect: the one set, or the first build file with
    /// the image format's extension.
    pub fn image_file(&self) -> Option<PathBuf> {
        self.image_file.clone().or_else(|| {
            self.build_files
                .first()
                .map(|first| first.with_extension(self.render.format.extension()))
        })
    }

    /// Load every build file, render the graph and write the outputs.
    ///
    /// The DOT script is written whenever one was requested, even if no
    /// image was produced.
    pub fn generate(&self) -> Result<Generated> {
        const OP: &str = "cli::Driver::generate";

        if self.build_files.is_empty() {
            return Err(Error::empty_input("no build files specified").with_operation(OP));
        }
        let image_file = self
            .image_file()
            .ok_or_else(|| Error::unexpected("no image file resolved").with_operation(OP))?;

        let projects = self
            .build_files
            .iter()
            .map(|path| {
                info!("Loading {}", path.display());
                Project::load(path)
            })
            .collect::<Result<Vec<_>>>()?;

        let generate_start = Instant::now();
        let renderer = GraphRenderer::new()
            .with_include_descriptions(self.show_descriptions)
            .with_label_font(self.font.clone())
            .with_label_font_size(self.font_size)
            .with_render_config(self.render.clone());
        let output = renderer.render(&projects)?;
        info!(
            "Graph generation: {:.2}s",
            generate_start.elapsed().as_secs_f64()
        );

        let image_file = match output.image {
            Some(bytes) => {
                write_output(&image_file, &bytes).map_err(|err| err.with_operation(OP))?;
                info!("Saved graph image to {}", image_file.display());
                Some(image_file)
            }
            None => {
                warn!("Failed to generate image");
                None
            }
        };

        if let Some(dot_file) = &self.dot_file {
            write_output(dot_file, output.dot_text.as_bytes())
                .map_err(|err| err.with_operation(OP))?;
            info!("Saved dot script to {}", dot_file.display());
        }

        Ok(Generated {
            image_file,
            dot_file: self.dot_file.clone(),
        })
    }
}

fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents)
        .map_err(|err| Error::from(err).with_context("path", path.display().to_string()))
}
