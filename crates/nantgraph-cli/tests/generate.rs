#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::time::Duration;

use nantgraph_cli::Driver;
use nantgraph_dot::RenderConfig;
use tempfile::TempDir;

const BUILD_FILE: &str = r#"<project name="sample">
    <target name="build" depends="clean,compile" description="Build everything" />
    <target name="clean" />
    <target name="compile" depends="generate" />
</project>"#;

fn fixture() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let build_file = dir.path().join("sample.build");
    fs::write(&build_file, BUILD_FILE).unwrap();
    (dir, build_file)
}

fn fake_renderer(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("fake-dot");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn driver_for(build_file: PathBuf, renderer: PathBuf) -> Driver {
    let mut driver = Driver::new();
    driver.add_build_file(build_file);
    driver.set_render_config(
        RenderConfig::new()
            .with_dot_path(Some(renderer))
            .with_timeout(Some(Duration::from_secs(20))),
    );
    driver
}

#[test]
fn writes_image_next_to_the_build_file_and_the_dot_script() {
    let (dir, build_file) = fixture();
    let renderer = fake_renderer(
        &dir,
        r#"for arg in "$@"; do
  case "$arg" in
    -o*) out="${arg#-o}" ;;
  esac
done
cat > /dev/null
printf 'IMAGE' > "$out""#,
    );
    let dot_file = dir.path().join("sample.dot");

    let mut driver = driver_for(build_file, renderer);
    driver.set_dot_file(&dot_file).unwrap();
    driver.show_descriptions(true);
    let generated = driver.generate().unwrap();

    let image_file = dir.path().join("sample.png");
    assert_eq!(generated.image_file.as_deref(), Some(image_file.as_path()));
    assert_eq!(fs::read(&image_file).unwrap(), b"IMAGE");

    let script = fs::read_to_string(&dot_file).unwrap();
    assert!(script.starts_with("digraph build"));
    assert!(script.contains(r#"label = "build\nBuild everything""#));
    assert!(script.contains(r#""generate" [ label = "generate" shape = "octagon""#));
}

#[test]
fn dot_script_is_written_even_without_an_image() {
    let (dir, build_file) = fixture();
    let renderer = fake_renderer(&dir, "cat > /dev/null\nexit 3");
    let dot_file = dir.path().join("sample.dot");
    let image_file = dir.path().join("graph.gif");

    let mut driver = driver_for(build_file, renderer);
    driver.set_image_file(&image_file).unwrap();
    driver.set_dot_file(&dot_file).unwrap();
    let generated = driver.generate().unwrap();

    assert_eq!(generated.image_file, None);
    assert!(!image_file.exists());
    assert!(fs::read_to_string(&dot_file).unwrap().contains("\"build\" -> \"clean\""));
}
