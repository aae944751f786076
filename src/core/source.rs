//! Where the show-keys text comes from.
//!
//! Normally the configured command (`wezterm show-keys`) is run and its
//! stdout captured. A saved dump can be read from a file instead, with `-`
//! meaning stdin. Output is decoded lossily; the parser only needs text.

use log::{info, warn};
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Command { program: String, args: Vec<String> },
    File(PathBuf),
    Stdin,
}

impl Source {
    /// `-` selects stdin, anything else is a file path.
    pub fn from_input_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            Source::Stdin
        } else {
            Source::File(arg.to_path_buf())
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Command { program, args } if args.is_empty() => write!(f, "'{program}'"),
            Source::Command { program, args } => write!(f, "'{program} {}'", args.join(" ")),
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => write!(f, "stdin"),
        }
    }
}

#[derive(Debug)]
pub enum SourceError {
    /// The command could not be started (not installed, not executable).
    Spawn(std::io::Error),
    /// The command ran but exited unsuccessfully.
    Failed { status: ExitStatus, stderr: String },
    Read(std::io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Spawn(e) => write!(f, "{e}"),
            SourceError::Failed { status, stderr } if stderr.is_empty() => write!(f, "{status}"),
            SourceError::Failed { status, stderr } => write!(f, "{status}: {stderr}"),
            SourceError::Read(e) => write!(f, "read error: {e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Spawn(e) | SourceError::Read(e) => Some(e),
            SourceError::Failed { .. } => None,
        }
    }
}

/// Fetch the raw show-keys text.
pub fn read(source: &Source) -> Result<String, SourceError> {
    info!("Reading keybindings from {source}");
    match source {
        Source::Command { program, args } => run_command(program, args),
        Source::File(path) => std::fs::read(path)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .map_err(SourceError::Read),
        Source::Stdin => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .map_err(SourceError::Read)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

fn run_command(program: &str, args: &[String]) -> Result<String, SourceError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(SourceError::Spawn)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!("{program} exited with {}: {stderr}", output.status);
        return Err(SourceError::Failed {
            status: output.status,
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
