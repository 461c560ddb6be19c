//! Whole-build dependency graph.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use nantgraph_core::{Graph, GraphFactory, graph_content};
use nantgraph_error::{Error, Result};

use crate::edges::EdgeGenerator;
use crate::nodes::NodeGenerator;
use crate::project::Project;

/// Builds one graph from a set of projects.
///
/// Nodes are generated for every project before any edge is, so that a
/// dependency on a target in another project resolves to that target's node.
pub struct GraphGenerator<'p> {
    projects: &'p [Project],
    node_generator: NodeGenerator,
    edge_generator: EdgeGenerator,
    factory: GraphFactory,
}

impl<'p> GraphGenerator<'p> {
    pub fn new(
        projects: &'p [Project],
        node_generator: NodeGenerator,
        edge_generator: EdgeGenerator,
    ) -> Result<Self> {
        if projects.is_empty() {
            return Err(Error::empty_input("no projects to graph")
                .with_operation("nant::GraphGenerator::new"));
        }

        Ok(Self {
            projects,
            node_generator,
            edge_generator,
            factory: GraphFactory::new(),
        })
    }

    pub fn projects(&self) -> &'p [Project] {
        self.projects
    }

    /// Generate the graph.
    ///
    /// The result holds one subgraph per project with that project's target
    /// nodes, every dependency edge, and a node for each placeholder.
    pub fn generate_graph(mut self) -> Result<Graph> {
        let start = Instant::now();

        let mut subgraphs = Vec::with_capacity(self.projects.len());
        for project in self.projects {
            let mark = self.node_generator.nodes().len();
            project.visit(&mut self.node_generator)?;
            let nodes = &self.node_generator.nodes()[mark..];
            subgraphs.push(Arc::new(self.factory.create_graph(nodes)));
        }

        self.edge_generator
            .reset(self.node_generator.nodes().iter().cloned());
        for project in self.projects {
            project.visit(&mut self.edge_generator)?;
        }

        let graph = self.factory.create_graph(graph_content![
            self.edge_generator.missing_nodes(),
            self.edge_generator.edges(),
            subgraphs
        ]);

        info!(
            "Graph generation: {} projects, {} targets, {} edges, {} placeholders in {:.2}s",
            self.projects.len(),
            self.node_generator.nodes().len(),
            self.edge_generator.edges().len(),
            self.edge_generator.missing_nodes().len(),
            start.elapsed().as_secs_f64()
        );

        Ok(graph)
    }
}
