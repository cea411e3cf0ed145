//! Project naming and the rendering context shared by every template.

use std::fmt;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::constants::VERSION;
use crate::error::{Error, Result};

/// Unicode identifier: an XID start character or underscore, then XID continue characters.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{XID_Start}_]\p{XID_Continue}*$").expect("identifier pattern is valid")
});

/// Returns true when `s` can be used as a package identifier.
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

/// Derives the package identifier from a project name.
pub fn package_name(name: &str) -> String {
    name.replace('-', "_")
}

/// A validated project name together with its derived package identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName {
    name: String,
    package: String,
}

impl ProjectName {
    /// Validates `name` and derives its package.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the package is not a valid identifier
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        let package = package_name(&name);

        if !is_identifier(&package) {
            return Err(Error::ValidationError(format!(
                "{package} is not a valid Python identifier. Please use another project name"
            )));
        }

        debug!("Project '{}' maps to package '{}'.", name, package);
        Ok(Self { name, package })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package(&self) -> &str {
        &self.package
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Values substituted into every template. Built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub package: String,
    pub version: String,
}

impl Context {
    pub fn new(project: &ProjectName) -> Self {
        Self {
            name: project.name().to_string(),
            package: project.package().to_string(),
            version: VERSION.to_string(),
        }
    }

    /// JSON form handed to the template renderer.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "package": self.package,
            "version": self.version,
        })
    }
}
