//! The fixed list of directories and files a scaffold run produces.

use std::path::{Path, PathBuf};

use crate::constants::{META_FILES, PACKAGE_FILES};

/// A directory and the templates materialized inside it, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub directory: PathBuf,
    pub files: Vec<&'static str>,
}

/// Builds the project manifest rooted at `location`.
///
/// The project root comes first, followed by the package directory.
pub fn project_manifest<P: AsRef<Path>>(location: P, package: &str) -> Vec<ManifestEntry> {
    let location = location.as_ref();

    vec![
        ManifestEntry { directory: location.to_path_buf(), files: META_FILES.to_vec() },
        ManifestEntry { directory: location.join(package), files: PACKAGE_FILES.to_vec() },
    ]
}
