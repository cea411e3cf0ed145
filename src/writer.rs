//! Idempotent directory and file writer.
//!
//! Every decision taken by the [`Writer`] is reported as a [`Status`] line:
//! existing paths are skipped unless the operator agrees to overwrite them,
//! and dry mode reports the same decisions without touching the filesystem.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::manifest::ManifestEntry;
use crate::prompt::Prompter;
use crate::style::{muted, success, warning};
use crate::templates::Templates;

/// Outcome of a single writer decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Skip,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Create => write!(f, "{}", success("CREATE")),
            Action::Skip => write!(f, "{}", warning("SKIP")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Directory,
    /// UTF-8 length of the written content, trailing newline excluded.
    File { bytes: usize },
}

/// One line of the writer's log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub action: Action,
    pub path: PathBuf,
    pub kind: Kind,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action, self.path.display())?;
        match (self.action, self.kind) {
            (_, Kind::Directory) => write!(f, " {}", muted("directory")),
            (Action::Create, Kind::File { bytes }) => {
                write!(f, " {}", muted(format!("({bytes} bytes)")))
            }
            (Action::Skip, Kind::File { .. }) => Ok(()),
        }
    }
}

/// Materializes directories and files, one status line per operation.
pub struct Writer<'a> {
    prompt: &'a dyn Prompter,
    dry: bool,
    no_input: bool,
}

impl<'a> Writer<'a> {
    /// Creates a writer.
    ///
    /// # Arguments
    /// * `prompt` - Prompter used to confirm overwrites
    /// * `dry` - Report decisions without touching the filesystem
    /// * `no_input` - Never prompt, skip every existing file
    pub fn new(prompt: &'a dyn Prompter, dry: bool, no_input: bool) -> Self {
        Self { prompt, dry, no_input }
    }

    pub fn is_dry(&self) -> bool {
        self.dry
    }

    fn emit(&self, status: Status) -> Status {
        println!("{status}");
        status
    }

    /// Creates `path` unless it already exists as a directory.
    ///
    /// Missing ancestors are not created.
    ///
    /// # Errors
    /// * `Error::DirectoryCreationError` if `path` exists but is not a directory,
    ///   or if creating it fails
    pub fn ensure_directory<P: AsRef<Path>>(&self, path: P) -> Result<Status> {
        let path = path.as_ref();

        if path.is_dir() {
            debug!("Directory '{}' already exists.", path.display());
            return Ok(self.emit(Status {
                action: Action::Skip,
                path: path.to_path_buf(),
                kind: Kind::Directory,
            }));
        }

        if path.exists() {
            return Err(Error::DirectoryCreationError {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::AlreadyExists, "not a directory"),
            });
        }

        if !self.dry {
            fs::create_dir(path).map_err(|source| Error::DirectoryCreationError {
                path: path.to_path_buf(),
                source,
            })?;
        }

        Ok(self.emit(Status {
            action: Action::Create,
            path: path.to_path_buf(),
            kind: Kind::Directory,
        }))
    }

    /// Decides whether an existing file may be replaced.
    ///
    /// Without a terminal to ask on, the writer behaves as in no-input mode.
    fn confirm_overwrite(&self, path: &Path) -> Result<bool> {
        if self.no_input || !self.prompt.is_interactive() {
            debug!("Skipping '{}' without prompting.", path.display());
            return Ok(false);
        }

        self.prompt
            .confirm(format!("File '{}' already exists. Overwrite it?", path.display()), false)
    }

    /// Writes `content` followed by a newline to `path`.
    ///
    /// An existing file is left untouched unless the operator confirms the
    /// overwrite, which never happens in no-input mode or without a terminal.
    ///
    /// # Errors
    /// * `Error::FileWriteError` if writing fails
    /// * `Error::PromptError` if the confirmation prompt fails
    pub fn write_file<P: AsRef<Path>>(&self, path: P, content: &str) -> Result<Status> {
        let path = path.as_ref();

        if path.exists() && !self.confirm_overwrite(path)? {
            return Ok(self.emit(Status {
                action: Action::Skip,
                path: path.to_path_buf(),
                kind: Kind::File { bytes: content.len() },
            }));
        }

        if !self.dry {
            debug!("Writing file '{}'.", path.display());
            fs::write(path, format!("{content}\n")).map_err(|source| {
                Error::FileWriteError { path: path.to_path_buf(), source }
            })?;
        }

        Ok(self.emit(Status {
            action: Action::Create,
            path: path.to_path_buf(),
            kind: Kind::File { bytes: content.len() },
        }))
    }

    /// Ensures `directory` exists, then runs `f` with it as the active directory.
    ///
    /// The directory status is prepended to the statuses returned by `f`.
    pub fn with_directory<P, F>(&self, directory: P, f: F) -> Result<Vec<Status>>
    where
        P: AsRef<Path>,
        F: FnOnce(&Self, &Path) -> Result<Vec<Status>>,
    {
        let directory = directory.as_ref();
        let mut log = vec![self.ensure_directory(directory)?];
        log.extend(f(self, directory)?);
        Ok(log)
    }

    /// Renders and writes every manifest entry in declaration order.
    ///
    /// Stops at the first error; files written before it stay on disk.
    pub fn generate(
        &self,
        manifest: &[ManifestEntry],
        templates: &Templates<'_>,
    ) -> Result<Vec<Status>> {
        let mut log = Vec::new();

        for entry in manifest {
            log.extend(self.with_directory(&entry.directory, |writer, root| {
                entry
                    .files
                    .iter()
                    .map(|name| {
                        let content = templates.render(name)?;
                        writer.write_file(root.join(name), &content)
                    })
                    .collect()
            })?);
        }

        Ok(log)
    }
}
