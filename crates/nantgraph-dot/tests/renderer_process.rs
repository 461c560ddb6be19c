//! Drives the renderer pipeline against small shell scripts standing in for `dot`.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use nantgraph_core::{Edge, Graph, Node};
use nantgraph_dot::{DotRenderer, OutputFormat, RenderConfig, run_renderer};
use nantgraph_error::ErrorKind;
use tempfile::TempDir;

/// Writes an executable script into `dir` and returns its path.
fn fake_renderer(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Finds the `-o<path>` argument and copies stdin there.
const COPY_INPUT: &str = r#"out=""
for arg in "$@"; do
  case "$arg" in
    -o*) out="${arg#-o}" ;;
  esac
done
cat > "$out""#;

fn config_for(renderer: &Path) -> RenderConfig {
    RenderConfig::new()
        .with_dot_path(Some(renderer.to_path_buf()))
        .with_timeout(Some(Duration::from_secs(20)))
}

fn sample_graph() -> Graph {
    let build = Arc::new(Node::new("build", "build").unwrap());
    let clean = Arc::new(Node::new("clean", "clean").unwrap());
    let project = Arc::new(Graph::new(
        vec![Arc::clone(&build), Arc::clone(&clean)],
        Vec::new(),
        Vec::new(),
    ));
    Graph::new(Vec::new(), vec![Edge::new(build, clean)], vec![project])
}

#[test]
fn image_bytes_come_from_the_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = fake_renderer(&dir, "dot", COPY_INPUT);
    let graph = sample_graph();

    let output = DotRenderer::new(&graph)
        .render_image(&config_for(&renderer))
        .unwrap();

    assert!(output.dot_text.starts_with("digraph build\n{\n"));
    assert_eq!(output.image.as_deref(), Some(output.dot_text.as_bytes()));
}

#[test]
fn format_is_passed_as_argument_and_extension() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = fake_renderer(
        &dir,
        "dot",
        r#"for arg in "$@"; do
  case "$arg" in
    -o*) out="${arg#-o}" ;;
  esac
done
printf '%s %s' "$1" "${out##*/}" > "$out""#,
    );
    let config = config_for(&renderer).with_format(OutputFormat::Svg);

    let image = run_renderer(&renderer, "digraph build {}", &config)
        .unwrap()
        .unwrap();
    assert_eq!(String::from_utf8(image).unwrap(), "-Tsvg graph.svg");
}

#[test]
fn missing_output_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = fake_renderer(&dir, "dot", "cat > /dev/null\necho 'syntax error' >&2\nexit 1");

    let image = run_renderer(&renderer, "digraph {", &config_for(&renderer)).unwrap();
    assert!(image.is_none());
}

#[test]
fn chatty_renderer_does_not_deadlock() {
    let dir = tempfile::tempdir().unwrap();
    let body = format!(
        "head -c 262144 /dev/zero\nhead -c 262144 /dev/zero >&2\n{COPY_INPUT}"
    );
    let renderer = fake_renderer(&dir, "dot", &body);
    let script = "x".repeat(512 * 1024);

    let image = run_renderer(&renderer, &script, &config_for(&renderer))
        .unwrap()
        .unwrap();
    assert_eq!(image.len(), script.len());
}

#[test]
fn hung_renderer_is_killed_after_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = fake_renderer(&dir, "dot", "exec sleep 30");
    let config = config_for(&renderer).with_timeout(Some(Duration::from_millis(300)));

    let err = run_renderer(&renderer, "digraph build {}", &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(err.is_retryable());
}

#[test]
fn timeout_returns_while_a_background_child_holds_the_pipes() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = fake_renderer(&dir, "dot", "sleep 5 &\nexec sleep 30");
    let config = config_for(&renderer).with_timeout(Some(Duration::from_millis(300)));

    let started = Instant::now();
    let err = run_renderer(&renderer, "digraph build {}", &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[test]
fn unknown_configured_renderer_surfaces_as_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let graph = sample_graph();
    let config = RenderConfig::new().with_dot_path(Some(dir.path().join("missing-dot")));

    let err = DotRenderer::new(&graph).render_image(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RendererNotFound);
}
