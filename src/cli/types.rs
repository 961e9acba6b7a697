use clap::Parser;
use std::path::PathBuf;

use wbt_stubgen::output::default_output_path;
use wbt_stubgen::toolkit::{CatalogToolkit, Toolkit, WBT_EXECUTABLE, WhiteboxCli};

/// Generate Julia wrapper stubs for every WhiteboxTools tool
///
/// With no arguments, runs the `whitebox_tools` found in PATH and writes
/// the stubs, grouped by toolbox, to ~/Downloads/deleteme.txt
/// (overwriting it).
#[derive(Parser, Debug)]
#[command(name = "wbt-stubgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the `whitebox_tools` executable
    ///
    /// If not specified, `whitebox_tools` is looked up in PATH.
    #[arg(long, value_name = "PATH", env = "WBT_PATH")]
    pub wbt_path: Option<PathBuf>,

    /// Read tool metadata from a recorded JSON catalog instead of running
    /// the toolkit. Takes precedence over --wbt-path.
    ///
    /// JSON format:
    /// ```json
    /// {
    ///   "tools": [
    ///     { "name": "Slope", "description": "...", "toolbox": "...", "parameters": [] }
    ///   ]
    /// }
    /// ```
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output file (default: ~/Downloads/deleteme.txt)
    #[arg(short, long, value_name = "PATH", env = "WBT_STUBGEN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// List the toolboxes the toolkit reports and exit without writing
    #[arg(long)]
    pub list_toolboxes: bool,
}

impl Cli {
    /// Build the metadata source selected by --catalog / --wbt-path
    pub fn toolkit(&self) -> anyhow::Result<Box<dyn Toolkit>> {
        if let Some(ref path) = self.catalog {
            return Ok(Box::new(CatalogToolkit::from_file(path)?));
        }
        Ok(Box::new(WhiteboxCli::locate(self.wbt_path.clone())?))
    }

    /// Where tool metadata comes from, for logging before the harvest
    pub fn toolkit_source(&self) -> String {
        match (&self.catalog, &self.wbt_path) {
            (Some(path), _) => format!("catalog {}", path.display()),
            (None, Some(path)) => format!("{} (--wbt-path / WBT_PATH)", path.display()),
            (None, None) => format!("{WBT_EXECUTABLE} from PATH"),
        }
    }

    /// Whether the output path was overridden or is the downloads default
    pub fn output_source(&self) -> &'static str {
        if self.output.is_some() {
            "--output / WBT_STUBGEN_OUTPUT"
        } else {
            "default"
        }
    }

    /// Explicit --output, falling back to the downloads directory
    pub fn output_path(&self) -> anyhow::Result<PathBuf> {
        match self.output {
            Some(ref path) => Ok(path.clone()),
            None => Ok(default_output_path()?),
        }
    }
}
