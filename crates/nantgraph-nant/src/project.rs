//! NAnt projects and targets.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use nantgraph_error::{Error, Result};

const PROJECT: &str = "project";
const PROJECT_NAME: &str = "name";
const TARGET: &str = "target";
const TARGET_NAME: &str = "name";
const TARGET_DESCRIPTION: &str = "description";
const TARGET_DEPENDS: &str = "depends";

/// Receives a project and then each of its targets, in document order.
pub trait ProjectVisitor {
    fn visit_project(&mut self, project: &Project) -> Result<()>;

    fn visit_target(&mut self, target: &Target) -> Result<()>;
}

/// A named unit of work with the names of the targets it depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    name: String,
    description: String,
    depends: Vec<String>,
}

impl Target {
    /// `depends` is the raw attribute text: names separated by commas and/or
    /// spaces.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        depends: &str,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid_argument("name", "target name is required")
                .with_operation("nant::Target::new"));
        }

        let depends = depends
            .split([',', ' '])
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            name,
            description: description.into(),
            depends,
        })
    }

    fn from_element(element: roxmltree::Node<'_, '_>) -> Result<Self> {
        let name = element.attribute(TARGET_NAME).unwrap_or_default();
        let description = element.attribute(TARGET_DESCRIPTION).unwrap_or_default();
        let depends = element.attribute(TARGET_DEPENDS).unwrap_or_default();

        Target::new(name, description, depends).map_err(|err| {
            let position = element.document().text_pos_at(element.range().start);
            err.with_context("line", position.row.to_string())
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn depends(&self) -> &[String] {
        &self.depends
    }

    pub fn visit<V>(&self, visitor: &mut V) -> Result<()>
    where
        V: ProjectVisitor + ?Sized,
    {
        visitor.visit_target(self)
    }
}

/// A build file: a name and its targets in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    targets: Vec<Target>,
}

impl Project {
    pub fn new<I>(name: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = Target>,
    {
        Self {
            name: name.into(),
            targets: targets.into_iter().collect(),
        }
    }

    /// Parse the text of a NAnt build file.
    ///
    /// The root element must be `<project>` in any namespace; only `<target>`
    /// children in that same namespace are read.
    pub fn from_xml(text: &str) -> Result<Self> {
        const OP: &str = "nant::Project::from_xml";

        let document = roxmltree::Document::parse(text).map_err(|err| {
            Error::invalid_argument("xml", format!("malformed build file: {err}"))
                .with_operation(OP)
                .set_source(err)
        })?;

        let root = document.root_element();
        if root.tag_name().name() != PROJECT {
            return Err(Error::invalid_argument(
                "xml",
                format!(
                    "expected <{PROJECT}> element, found <{}>",
                    root.tag_name().name()
                ),
            )
            .with_operation(OP));
        }

        let namespace = root.tag_name().namespace();
        let targets = root
            .children()
            .filter(|child| {
                child.is_element()
                    && child.tag_name().name() == TARGET
                    && child.tag_name().namespace() == namespace
            })
            .map(Target::from_element)
            .collect::<Result<Vec<_>>>()
            .map_err(|err| err.with_operation(OP))?;

        let name = root.attribute(PROJECT_NAME).unwrap_or_default();
        Ok(Project::new(name, targets))
    }

    /// Read and parse the build file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let text = fs::read_to_string(path).map_err(|err| {
            let failed =
                Error::project_load_failed(shown.clone()).with_operation("nant::Project::load");
            if err.kind() == io::ErrorKind::NotFound {
                failed.set_source(Error::file_not_found(shown.clone()).set_source(err))
            } else {
                failed.set_source(err)
            }
        })?;

        let project = Project::from_xml(&text).map_err(|err| {
            Error::project_load_failed(shown.clone())
                .with_operation("nant::Project::load")
                .set_source(err)
        })?;

        debug!(
            path = %shown,
            project = %project.name,
            targets = project.targets.len(),
            "loaded build file"
        );
        Ok(project)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Visit the project, then each target in order.
    pub fn visit<V>(&self, visitor: &mut V) -> Result<()>
    where
        V: ProjectVisitor + ?Sized,
    {
        visitor.visit_project(self)?;
        for target in &self.targets {
            target.visit(visitor)?;
        }
        Ok(())
    }
}
