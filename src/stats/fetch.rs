use crate::error::{AuthorsError, Result};
use std::ffi::OsString;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Header git prints before each commit's numstat block.
pub const PRETTY_FORMAT: &str = "--pretty=format:> %aN <%aE>";

/// `core.quotePath` makes git C-quote paths with non-ASCII bytes, so the
/// lossy UTF-8 decode below can never merge two distinct paths.
const BASE_ARGS: [&str; 7] = [
    "-c",
    "core.quotePath=true",
    "log",
    "--use-mailmap",
    "--no-merges",
    "--numstat",
    PRETTY_FORMAT,
];

/// Runs `git log` in the current directory and hands back its stdout.
#[derive(Debug, Clone)]
pub struct GitLog {
    program: OsString,
}

impl GitLog {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self { program: program.into() }
    }

    /// Base template followed by `extra`, untouched and in order.
    pub fn args<S: AsRef<str>>(extra: &[S]) -> Vec<String> {
        BASE_ARGS
            .iter()
            .map(|a| a.to_string())
            .chain(extra.iter().map(|a| a.as_ref().to_string()))
            .collect()
    }

    pub fn fetch<S: AsRef<str>>(&self, extra: &[S]) -> Result<Vec<String>> {
        let args = Self::args(extra);
        let program = self.program.to_string_lossy().into_owned();
        log::debug!("Running {program} {}", args.join(" "));

        let start = Instant::now();
        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| AuthorsError::Spawn { program: program.clone(), source })?;

        if !output.status.success() {
            return Err(AuthorsError::GitFailed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect();

        log::debug!(
            "{program} produced {} lines in {:.3}s",
            lines.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(lines)
    }
}

impl Default for GitLog {
    fn default() -> Self {
        Self::new()
    }
}
