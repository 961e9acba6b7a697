//! Sources of tool metadata.
//!
//! The generator only needs four queries from the toolkit. They are answered
//! either by the `whitebox_tools` executable itself or by a recorded JSON
//! catalog, so stubs can be regenerated without a toolkit install.

mod catalog;
mod whitebox;

pub use catalog::{CatalogTool, CatalogToolkit};
pub use whitebox::{WhiteboxCli, WBT_EXECUTABLE};

use crate::error::Result;

/// The introspection surface of a WhiteboxTools build
pub trait Toolkit {
    /// Newline-separated `ToolName: Toolbox` records for every tool
    fn list_toolboxes(&self) -> Result<String>;

    /// Tool names and descriptions, in the toolkit's listing order
    fn list_tools(&self) -> Result<Vec<(String, String)>>;

    /// Toolbox a single tool belongs to
    fn tool_toolbox(&self, tool: &str) -> Result<String>;

    /// JSON document with a top-level `parameters` array
    fn tool_parameters(&self, tool: &str) -> Result<String>;
}
