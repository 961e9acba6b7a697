//! Queries answered from a recorded JSON catalog.
//!
//! Catalog format:
//! ```json
//! {
//!   "tools": [
//!     {
//!       "name": "BufferRaster",
//!       "description": "Maps a distance-based buffer around each non-background cell.",
//!       "toolbox": "GIS Analysis",
//!       "parameters": [ { "flags": ["-i", "--input"], "...": "..." } ]
//!     }
//!   ]
//! }
//! ```
//! `parameters` holds the same objects `--toolparameters` reports.

use serde::Deserialize;
use serde_json::{Value, json};
use std::path::Path;

use super::Toolkit;
use crate::error::{Result, StubGenError};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    tools: Vec<CatalogTool>,
}

/// One recorded tool
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogTool {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub toolbox: String,
    #[serde(default)]
    pub parameters: Vec<Value>,
}

/// A toolkit backed by recorded metadata instead of a live executable
#[derive(Debug, Clone)]
pub struct CatalogToolkit {
    tools: Vec<CatalogTool>,
}

impl CatalogToolkit {
    pub fn new(tools: Vec<CatalogTool>) -> Self {
        Self { tools }
    }

    /// Load a catalog from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StubGenError::io(format!("failed to read catalog {}", path.display()), e)
        })?;

        let file: CatalogFile =
            serde_json::from_str(&content).map_err(|source| StubGenError::Catalog {
                path: path.to_path_buf(),
                source,
            })?;

        log::debug!("Loaded {} tools from {}", file.tools.len(), path.display());
        Ok(Self::new(file.tools))
    }

    fn find(&self, tool: &str) -> Result<&CatalogTool> {
        self.tools
            .iter()
            .find(|t| t.name == tool)
            .ok_or_else(|| StubGenError::UnknownTool {
                tool: tool.to_string(),
            })
    }
}

impl Toolkit for CatalogToolkit {
    fn list_toolboxes(&self) -> Result<String> {
        Ok(self
            .tools
            .iter()
            .map(|t| format!("{}: {}\n", t.name, t.toolbox))
            .collect())
    }

    fn list_tools(&self) -> Result<Vec<(String, String)>> {
        Ok(self
            .tools
            .iter()
            .map(|t| (t.name.clone(), t.description.clone()))
            .collect())
    }

    fn tool_toolbox(&self, tool: &str) -> Result<String> {
        Ok(self.find(tool)?.toolbox.clone())
    }

    fn tool_parameters(&self, tool: &str) -> Result<String> {
        let parameters = &self.find(tool)?.parameters;
        Ok(json!({ "parameters": parameters }).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> CatalogToolkit {
        CatalogToolkit::new(vec![CatalogTool {
            name: "Slope".to_string(),
            description: "Calculates a slope raster.".to_string(),
            toolbox: "Geomorphometric Analysis".to_string(),
            parameters: vec![json!({
                "flags": ["-i", "--dem"],
                "description": "Input raster DEM file.",
                "parameter_type": {"ExistingFile": "Raster"},
                "default_value": null,
                "optional": false
            })],
        }])
    }

    #[test]
    fn answers_every_query() {
        let catalog = sample();
        assert_eq!(
            catalog.list_toolboxes().unwrap(),
            "Slope: Geomorphometric Analysis\n"
        );
        assert_eq!(catalog.list_tools().unwrap()[0].0, "Slope");
        assert_eq!(catalog.tool_toolbox("Slope").unwrap(), "Geomorphometric Analysis");

        let params: Value = serde_json::from_str(&catalog.tool_parameters("Slope").unwrap()).unwrap();
        assert_eq!(params["parameters"][0]["flags"][1], "--dem");
    }

    #[test]
    fn unknown_tool_is_an_error() {
        assert!(matches!(
            sample().tool_toolbox("Aspect"),
            Err(StubGenError::UnknownTool { .. })
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tools": [{{"name": "Aspect", "toolbox": "Geomorphometric Analysis"}}]}}"#
        )
        .unwrap();

        let catalog = CatalogToolkit::from_file(file.path()).unwrap();
        assert_eq!(catalog.list_tools().unwrap(), vec![("Aspect".to_string(), String::new())]);
    }

    #[test]
    fn invalid_catalog_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let err = CatalogToolkit::from_file(file.path()).unwrap_err();
        assert!(matches!(err, StubGenError::Catalog { ref path, .. } if path == file.path()));
    }
}
