//! Bundled project templates.
//! Resolves logical template names to the resources compiled into the binary
//! and renders them against the project context.

use log::debug;

use crate::constants::TEMPLATE_EXTENSION;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

macro_rules! bundled {
    ($($name:literal),+ $(,)?) => {
        &[$((
            $name,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $name, ".jinja")),
        )),+]
    };
}

/// Every template shipped with the tool, keyed by logical name.
pub const BUNDLED: &[(&str, &str)] = bundled![
    ".gitignore",
    "README.md",
    "requirements.txt",
    "__init__.py",
    "app.py",
    "asgi.py",
    "settings.py",
    "providerconf.py",
];

/// Returns the raw source of a bundled template.
///
/// # Errors
/// * `Error::TemplateNotFoundError` if no resource exists for `name`
pub fn get_template(name: &str) -> Result<&'static str> {
    debug!("Loading template '{}.{}'.", name, TEMPLATE_EXTENSION);
    BUNDLED
        .iter()
        .find(|(bundled, _)| *bundled == name)
        .map(|(_, source)| *source)
        .ok_or_else(|| Error::TemplateNotFoundError {
            name: format!("{name}.{TEMPLATE_EXTENSION}"),
        })
}

/// Renders bundled templates against a fixed context.
pub struct Templates<'a> {
    engine: &'a dyn TemplateRenderer,
    context: serde_json::Value,
}

impl<'a> Templates<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, context: &Context) -> Self {
        Self { engine, context: context.to_value() }
    }

    /// Renders the template registered under `name`.
    ///
    /// # Errors
    /// * `Error::TemplateNotFoundError` if the template is not bundled
    /// * `Error::TemplateError` if rendering fails
    pub fn render(&self, name: &str) -> Result<String> {
        let source = get_template(name)?;
        self.engine.render(source, &self.context)
    }
}
