//! Parameter schemas as reported by `whitebox_tools --toolparameters=<Tool>`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

use crate::error::{Result, StubGenError};

/// Everything harvested about one tool
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    /// Name as the toolkit spells it, e.g. `BufferRaster`
    pub name: String,
    pub description: String,
    pub toolbox: String,
    pub parameters: Vec<ParameterDescriptor>,
}

/// Top-level document returned for one tool
#[derive(Debug, Deserialize)]
pub struct ParameterSchema {
    pub parameters: Vec<ParameterDescriptor>,
}

/// One parameter of a tool, verbatim from the toolkit
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDescriptor {
    /// Human-readable label, e.g. "Input File"
    #[serde(default)]
    pub name: String,

    /// Command-line switches, short form first (e.g. `["-i", "--input"]`)
    pub flags: Vec<String>,

    #[serde(default)]
    pub description: String,

    pub parameter_type: ParameterType,

    #[serde(default)]
    pub default_value: Option<String>,

    #[serde(default)]
    pub optional: bool,
}

impl ParameterDescriptor {
    /// The switch passed to the toolkit, which is always the last flag listed
    pub fn switch(&self) -> Option<&str> {
        self.flags.last().map(String::as_str)
    }
}

/// Parameter kind, decoded from the toolkit's externally tagged encoding.
///
/// Unit kinds arrive as a bare string (`"Float"`), kinds with detail as a
/// single-key object (`{"ExistingFile": "Raster"}`). The detail is kept
/// as raw JSON since stub generation never inspects it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterType {
    Boolean,
    Integer,
    Float,
    String,
    StringList,
    StringOrNumber,
    Directory,
    ExistingFile(Value),
    ExistingFileOrFloat(Value),
    NewFile(Value),
    FileList(Value),
    OptionList(Value),
    VectorAttributeField(Value),
    /// A tag this generator does not know yet
    Other(String),
}

impl ParameterType {
    /// Decode a `parameter_type` JSON value
    pub fn from_value(value: Value) -> std::result::Result<Self, String> {
        let (tag, detail) = match value {
            Value::String(tag) => (tag, Value::Null),
            Value::Object(map) => {
                let keys = map.len();
                let mut entries = map.into_iter();
                match (entries.next(), entries.next()) {
                    (Some(entry), None) => entry,
                    _ => {
                        return Err(format!(
                            "expected a single-key parameter type object, found {keys} keys"
                        ));
                    }
                }
            }
            other => return Err(format!("expected a parameter type tag, found {other}")),
        };

        Ok(match tag.as_str() {
            "Boolean" => Self::Boolean,
            "Integer" => Self::Integer,
            "Float" => Self::Float,
            "String" => Self::String,
            "StringList" => Self::StringList,
            "StringOrNumber" => Self::StringOrNumber,
            "Directory" => Self::Directory,
            "ExistingFile" => Self::ExistingFile(detail),
            "ExistingFileOrFloat" => Self::ExistingFileOrFloat(detail),
            "NewFile" => Self::NewFile(detail),
            "FileList" => Self::FileList(detail),
            "OptionList" => Self::OptionList(detail),
            "VectorAttributeField" => Self::VectorAttributeField(detail),
            _ => Self::Other(tag),
        })
    }

    /// Tag name as the toolkit spells it
    pub fn tag(&self) -> &str {
        match self {
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::String => "String",
            Self::StringList => "StringList",
            Self::StringOrNumber => "StringOrNumber",
            Self::Directory => "Directory",
            Self::ExistingFile(_) => "ExistingFile",
            Self::ExistingFileOrFloat(_) => "ExistingFileOrFloat",
            Self::NewFile(_) => "NewFile",
            Self::FileList(_) => "FileList",
            Self::OptionList(_) => "OptionList",
            Self::VectorAttributeField(_) => "VectorAttributeField",
            Self::Other(tag) => tag,
        }
    }

    /// Whether the parameter is a bare on/off switch with no value
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Boolean)
    }
}

impl<'de> Deserialize<'de> for ParameterType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parse the parameter document for `tool`
pub fn parse_parameters(tool: &str, json: &str) -> Result<Vec<ParameterDescriptor>> {
    let schema: ParameterSchema =
        serde_json::from_str(json).map_err(|source| StubGenError::Schema {
            tool: tool.to_string(),
            source,
        })?;
    Ok(schema.parameters)
}
