//! Error types for stub generation.
//!
//! Every variant is fatal: the generator either renders every tool or writes
//! nothing at all.

use std::path::PathBuf;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, StubGenError>;

#[derive(Debug, thiserror::Error)]
pub enum StubGenError {
    /// The `whitebox_tools` executable could not be located
    #[error("whitebox_tools executable not found in PATH (set --wbt-path or WBT_PATH): {0}")]
    ToolkitNotFound(#[from] which::Error),

    /// The toolkit process ran but reported failure
    #[error("`{command}` exited with {status}: {stderr}")]
    Command {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` produced output that is not valid UTF-8")]
    NonUtf8 { command: String },

    /// A toolbox listing line without the `Tool: Toolbox` separator
    #[error("malformed toolbox listing line: {line:?}")]
    MalformedListing { line: String },

    #[error("unparseable parameter schema for tool {tool}: {source}")]
    Schema {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("parameter {parameter:?} of tool {tool} declares no flags")]
    MissingFlags { tool: String, parameter: String },

    #[error("tool {tool} reports toolbox {toolbox:?}, which is not in the toolbox listing")]
    UnknownToolbox { tool: String, toolbox: String },

    #[error("failed to load catalog {}: {source}", path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("tool {tool} is not present in the catalog")]
    UnknownTool { tool: String },

    #[error("could not determine the home directory")]
    NoHomeDir,
}

impl StubGenError {
    /// Wrap an I/O error with a human-readable description of what was attempted
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
