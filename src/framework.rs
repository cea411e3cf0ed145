//! Detection of the companion Bocadillo framework, reported by `--version`.

use std::process::{Command, Stdio};

use log::debug;

use crate::constants::{NOT_INSTALLED, VERSION};
use crate::style::{muted, version};

/// Interpreters tried in order when looking for the framework.
const INTERPRETERS: [&str; 2] = ["python3", "python"];

const PROBE: &str = "import bocadillo; print(bocadillo.__version__)";

/// Asks `interpreter` for the installed framework version.
fn probe(interpreter: &str) -> Option<String> {
    let output = Command::new(interpreter)
        .args(["-c", PROBE])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|e| debug!("Could not run '{}': {}", interpreter, e))
        .ok()?;

    if !output.status.success() {
        debug!("'{}' cannot import bocadillo.", interpreter);
        return None;
    }

    let detected = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!detected.is_empty()).then_some(detected)
}

/// Returns the installed framework version, if any interpreter can import it.
pub fn detect_version() -> Option<String> {
    INTERPRETERS.iter().find_map(|interpreter| probe(interpreter))
}

/// Text printed by `--version`.
pub fn version_message(framework: Option<&str>) -> String {
    let framework = match framework {
        Some(detected) => version(detected),
        None => muted(NOT_INSTALLED),
    };
    format!("Bocadillo CLI: {}\nBocadillo: {}", version(VERSION), framework)
}
