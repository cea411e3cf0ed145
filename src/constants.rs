//! Common constants used throughout the Bocadillo CLI.

/// Version of this tool, also exposed to templates as `{{ version }}`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bocadillo documentation home page.
pub const DOCS: &str = "https://bocadilloproject.github.io";

/// Extension carried by every bundled template resource.
pub const TEMPLATE_EXTENSION: &str = "jinja";

/// Files written at the project root.
pub const META_FILES: [&str; 3] = [".gitignore", "README.md", "requirements.txt"];

/// Source stubs written inside the package directory.
pub const PACKAGE_FILES: [&str; 5] =
    ["__init__.py", "app.py", "asgi.py", "settings.py", "providerconf.py"];

/// Marker displayed by `--version` when the framework cannot be imported.
pub const NOT_INSTALLED: &str = "[not installed]";
