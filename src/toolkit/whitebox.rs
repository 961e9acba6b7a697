//! Queries answered by running the `whitebox_tools` executable.

use std::path::PathBuf;
use std::process::Command;

use super::Toolkit;
use crate::error::{Result, StubGenError};

/// Executable name looked up in PATH when no explicit path is configured
pub const WBT_EXECUTABLE: &str = "whitebox_tools";

/// A `whitebox_tools` binary on disk
#[derive(Debug, Clone)]
pub struct WhiteboxCli {
    exe: PathBuf,
}

impl WhiteboxCli {
    pub fn new(exe: impl Into<PathBuf>) -> Self {
        Self { exe: exe.into() }
    }

    /// Use `explicit` if given, otherwise find `whitebox_tools` in PATH
    pub fn locate(explicit: Option<PathBuf>) -> Result<Self> {
        let exe = match explicit {
            Some(path) => path,
            None => which::which(WBT_EXECUTABLE)?,
        };
        log::debug!("Using toolkit executable {}", exe.display());
        Ok(Self::new(exe))
    }

    /// Run the executable with a single argument and return its stdout
    fn run(&self, arg: &str) -> Result<String> {
        let command = format!("{} {arg}", self.exe.display());
        log::trace!("Running {command}");

        let output = Command::new(&self.exe)
            .arg(arg)
            .output()
            .map_err(|e| StubGenError::io(format!("failed to run `{command}`"), e))?;

        if !output.status.success() {
            return Err(StubGenError::Command {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| StubGenError::NonUtf8 { command })
    }
}

impl Toolkit for WhiteboxCli {
    fn list_toolboxes(&self) -> Result<String> {
        self.run("--toolbox=")
    }

    fn list_tools(&self) -> Result<Vec<(String, String)>> {
        parse_tool_listing(&self.run("--listtools")?)
    }

    fn tool_toolbox(&self, tool: &str) -> Result<String> {
        Ok(self.run(&format!("--toolbox={tool}"))?.trim().to_string())
    }

    fn tool_parameters(&self, tool: &str) -> Result<String> {
        self.run(&format!("--toolparameters={tool}"))
    }
}

/// Parse `--listtools` output: a count header, then `Name: description` lines
fn parse_tool_listing(stdout: &str) -> Result<Vec<(String, String)>> {
    stdout
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (name, description) = line.split_once(':').ok_or_else(|| {
                StubGenError::MalformedListing {
                    line: line.to_string(),
                }
            })?;
            Ok((name.trim().to_string(), description.trim().to_string()))
        })
        .collect()
}
