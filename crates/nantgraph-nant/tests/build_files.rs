use std::fs;
use std::path::PathBuf;

use nantgraph_dot::DotRenderer;
use nantgraph_nant::{EdgeGenerator, GraphGenerator, NodeGenerator, Project};
use tempfile::TempDir;
use textwrap::dedent;

fn write_build_file(dir: &TempDir, name: &str, xml: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, dedent(xml).trim()).unwrap();
    path
}

const CORE_BUILD: &str = r#"
    <?xml version="1.0"?>
    <project name="core" default="build" xmlns="http://nant.sf.net/release/0.86-beta1/nant.xsd">
        <target name="clean" description="Deletes every build output" />
        <target name="compile" depends="clean" description="Compiles the core assemblies" />
        <target name="build" depends="clean, compile" />
    </project>
"#;

const APP_BUILD: &str = r#"
    <project name="app">
        <target name="package" depends="build deploy" />
    </project>
"#;

#[test]
fn build_files_become_one_graph() {
    let dir = tempfile::tempdir().unwrap();
    let projects = vec![
        Project::load(write_build_file(&dir, "core.build", CORE_BUILD)).unwrap(),
        Project::load(write_build_file(&dir, "app.build", APP_BUILD)).unwrap(),
    ];

    let graph = GraphGenerator::new(&projects, NodeGenerator::new(), EdgeGenerator::new())
        .unwrap()
        .generate_graph()
        .unwrap();

    assert_eq!(graph.subgraphs().len(), 2);
    assert_eq!(graph.subgraphs()[0].nodes().len(), 3);
    assert_eq!(graph.subgraphs()[1].nodes().len(), 1);
    assert_eq!(graph.edges().len(), 5);

    let placeholders: Vec<&str> = graph.nodes().iter().map(|n| n.name()).collect();
    assert_eq!(placeholders, vec!["deploy"]);
}

#[test]
fn rendered_script_names_every_target_and_dependency() {
    let dir = tempfile::tempdir().unwrap();
    let projects = vec![Project::load(write_build_file(&dir, "core.build", CORE_BUILD)).unwrap()];

    let nodes = NodeGenerator::new()
        .with_include_descriptions(true)
        .with_label_font(Some("Verdana".to_string()))
        .with_label_font_size(10);
    let graph = GraphGenerator::new(&projects, nodes, EdgeGenerator::new())
        .unwrap()
        .generate_graph()
        .unwrap();
    let text = DotRenderer::new(&graph).render_text().unwrap();

    assert!(text.starts_with("digraph build\n{\n"));
    assert!(text.contains("subgraph g0\n{\n"));
    assert!(text.contains(
        r#""compile" [ label = "compile\nCompiles the core assemblies" shape = "box" fontname = "Verdana" fontsize = "10" ] ;"#
    ));
    assert!(text.contains(
        r##""build" -> "compile" [ arrowhead = "normal" arrowtail = "none" color = "#808080" ] ;"##
    ));
    assert!(text.contains(r#""build" [ label = "build" shape = "box""#));
    assert!(text.ends_with("}\n}\n"));
}
