use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};

use nantgraph_cli::{Driver, RenderArgs};

#[derive(Parser, Debug)]
#[command(
    name = "nantgraph",
    about = "nantgraph: draw the target dependency graph of NAnt build files",
    version
)]
pub struct Cli {
    /// Image file to write (defaults to the first build file with the image extension)
    #[arg(long = "out", value_name = "FILE")]
    out: Option<PathBuf>,

    /// Build file to graph (repeatable)
    #[arg(
        short = 'b',
        long = "build-file",
        value_name = "FILE",
        action = ArgAction::Append
    )]
    build_files: Vec<PathBuf>,

    /// Include target descriptions in node labels
    #[arg(long, default_value_t = false)]
    descriptions: bool,

    /// Also write the generated DOT script to this file
    #[arg(long = "dotscript", value_name = "FILE")]
    dotscript: Option<PathBuf>,

    /// Font for node labels
    #[arg(long, value_name = "NAME")]
    font: Option<String>,

    /// Font size for node labels (0 keeps the renderer default)
    #[arg(long = "fontsize", value_name = "N", default_value_t = 0)]
    font_size: u32,

    #[command(flatten)]
    render: RenderArgs,

    /// Additional build files
    #[arg(value_name = "BUILD_FILE")]
    extra_build_files: Vec<PathBuf>,
}

pub fn run(args: Cli) -> anyhow::Result<()> {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let mut driver = Driver::new();
    for file in args.build_files.into_iter().chain(args.extra_build_files) {
        driver.add_build_file(file);
    }
    if let Some(out) = args.out {
        driver.set_image_file(out)?;
    }
    if let Some(dotscript) = args.dotscript {
        driver.set_dot_file(dotscript)?;
    }
    driver.set_font(args.font);
    driver.set_font_size(args.font_size);
    driver.show_descriptions(args.descriptions);
    driver.set_render_config(args.render.to_config());

    let generated = driver.generate()?;
    match &generated.image_file {
        Some(path) => eprintln!("Saved graph image to {}", path.display()),
        None => eprintln!("Failed to generate image."),
    }
    if let Some(path) = &generated.dot_file {
        eprintln!("Saved dot script to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Generation failed:");
            for cause in err.chain() {
                eprintln!("    {cause}");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use nantgraph_dot::OutputFormat;

    use super::*;

    #[test]
    fn trailing_arguments_are_build_files() {
        let cli = Cli::try_parse_from([
            "nantgraph",
            "-b",
            "core.build",
            "--build-file",
            "app.build",
            "tools.build",
            "--descriptions",
        ])
        .unwrap();

        assert_eq!(cli.build_files.len(), 2);
        assert_eq!(cli.extra_build_files, vec![PathBuf::from("tools.build")]);
        assert!(cli.descriptions);
    }

    #[test]
    fn output_and_style_flags_parse() {
        let cli = Cli::try_parse_from([
            "nantgraph",
            "--out",
            "deps.svg",
            "--dotscript",
            "deps.dot",
            "--font",
            "Verdana",
            "--fontsize",
            "9",
            "--format",
            "svg",
            "--timeout",
            "5",
            "--dot",
            "/opt/graphviz/bin/dot",
            "core.build",
        ])
        .unwrap();

        assert_eq!(cli.out, Some(PathBuf::from("deps.svg")));
        assert_eq!(cli.dotscript, Some(PathBuf::from("deps.dot")));
        assert_eq!(cli.font.as_deref(), Some("Verdana"));
        assert_eq!(cli.font_size, 9);
        assert_eq!(cli.render.format, OutputFormat::Svg);
        assert_eq!(cli.render.timeout, 5);
        assert_eq!(cli.render.dot, Some(PathBuf::from("/opt/graphviz/bin/dot")));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["nantgraph", "--format", "tiff", "a.build"]).is_err());
    }
}
