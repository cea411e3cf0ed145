//! Project generation: drives the writer across the manifest and reports the result.

use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::DOCS;
use crate::context::Context;
use crate::error::Result;
use crate::manifest::{project_manifest, ManifestEntry};
use crate::style::{code, link, success};
use crate::templates::Templates;
use crate::writer::{Status, Writer};

/// A Bocadillo project about to be scaffolded at `location`.
pub struct Project {
    location: PathBuf,
    context: Context,
}

impl Project {
    pub fn new<P: Into<PathBuf>>(location: P, context: Context) -> Self {
        Self { location: location.into(), context }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn manifest(&self) -> Vec<ManifestEntry> {
        project_manifest(&self.location, &self.context.package)
    }

    /// Writes every file of the project, then prints the success summary.
    ///
    /// # Returns
    /// * `Result<Vec<Status>>` - Every writer decision, in emission order
    pub fn create(&self, writer: &Writer<'_>, templates: &Templates<'_>) -> Result<Vec<Status>> {
        debug!("Creating project '{}' in '{}'.", self.context.name, self.location.display());

        let log = writer.generate(&self.manifest(), templates)?;
        self.after_success();

        Ok(log)
    }

    fn after_success(&self) {
        println!("\n---\n");
        println!("{}", success("Success! 🌟"));
        println!("Created project {} at {}.", self.context.name, code(self.location.display()));

        println!();
        println!("- Read {} to get started.", code(self.location.join("README.md").display()));
        println!("- To learn more about Bocadillo, visit the docs: {}", link(DOCS));

        println!();
        println!("Happy coding!");
    }
}
