//! Julia stub rendering for a single tool.
//!
//! Each parameter is classified into a [`Binding`] which decides three
//! things at once: whether the argument is positional or defaulted in the
//! signature, its default literal, and how it is marshalled into the
//! `args` vector handed to `run_tool`.

use crate::error::{Result, StubGenError};
use crate::naming::{argument_name, function_name};
use crate::schema::{ParameterDescriptor, ToolDescriptor};

/// Trailing keyword argument present on every generated function
const CALLBACK_PARAM: &str = "callback::Union{Nothing,Function}";

const CALLBACK_DOC: &str = "Custom function for handling tool text outputs.";

/// Rendered source of one tool, tagged with the toolbox it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedStub {
    pub toolbox: String,
    pub source_text: String,
}

/// How one parameter appears in the signature and the marshalling body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// Boolean switch, passed bare when `=== true`
    Switch { default: bool },
    /// Defaulted value, always passed as `switch=value`
    Defaulted { literal: String },
    /// Positional argument with no default, always passed
    Required,
    /// Defaults to `nothing` and is passed only when set
    Optional,
}

impl Binding {
    pub fn for_parameter(param: &ParameterDescriptor) -> Self {
        if param.parameter_type.is_flag() {
            let default = param
                .default_value
                .as_deref()
                .is_some_and(|value| value != "false");
            return Self::Switch { default };
        }

        match (param.default_value.as_deref(), param.optional) {
            (Some(value), _) => Self::Defaulted {
                literal: default_literal(value),
            },
            (None, false) => Self::Required,
            (None, true) => Self::Optional,
        }
    }

    /// Signature entry for defaulted bindings; `None` means positional
    fn signature_default(&self, name: &str) -> Option<String> {
        match self {
            Self::Switch { default } => Some(format!("{name}={default}")),
            Self::Defaulted { literal } => Some(format!("{name}={literal}")),
            Self::Optional => Some(format!("{name}=nothing")),
            Self::Required => None,
        }
    }

    fn marshalling(&self, name: &str, switch: &str) -> String {
        match self {
            Self::Switch { .. } => format!(
                "    if {name} === true\n        push!(args, \"{switch}\")\n    end\n"
            ),
            Self::Defaulted { .. } | Self::Required => {
                format!("    push!(args, \"{switch}=\" * string({name}))\n")
            }
            Self::Optional => format!(
                "    if isnothing({name}) === false\n        push!(args, \"{switch}=\" * string({name}))\n    end\n"
            ),
        }
    }
}

/// Numeric defaults are emitted bare, everything else as a Julia string
fn default_literal(value: &str) -> String {
    if is_numeric(value) {
        value.to_string()
    } else {
        format!("\"{}\"", escape_julia(value))
    }
}

/// Digits with at most one decimal point; `-1.0` and `1e3` are not numeric.
fn is_numeric(value: &str) -> bool {
    let digits = value.replacen('.', "", 1);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn escape_julia(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Render the Julia wrapper for `tool`
pub fn emit(tool: &ToolDescriptor) -> Result<EmittedStub> {
    let mut signature = format!(
        "function {}(wbt_info::WhiteboxTools = wbt_info; ",
        function_name(&tool.name)
    );
    let mut defaulted = Vec::new();
    let mut docs = String::new();
    let mut body = String::new();

    for param in &tool.parameters {
        let switch = param.switch().ok_or_else(|| StubGenError::MissingFlags {
            tool: tool.name.clone(),
            parameter: param.name.clone(),
        })?;
        let name = argument_name(switch);
        let binding = Binding::for_parameter(param);
        log::debug!(
            "{}: {} ({}) -> {:?}",
            tool.name,
            name,
            param.parameter_type,
            binding
        );

        docs.push_str(&format!(
            "- `{name}`: {}.\n",
            param.description.trim_end_matches('.')
        ));

        match binding.signature_default(&name) {
            Some(entry) => defaulted.push(entry),
            None => signature.push_str(&format!("{name}, ")),
        }
        body.push_str(&binding.marshalling(&name, switch));
    }

    for entry in &defaulted {
        signature.push_str(entry);
        signature.push_str(", ");
    }
    signature.push_str(CALLBACK_PARAM);
    signature.push_str("=nothing)");
    docs.push_str(&format!("- `{CALLBACK_PARAM}`: {CALLBACK_DOC}"));

    let call_form = signature.strip_prefix("function ").unwrap_or(&signature);
    let source_text = format!(
        "\n\n\"\"\"\n    {call_form}\n\n{description}.\n# Arguments\n{docs}\n\"\"\"\n{signature}\n    args = []\n    {body}\n    return run_tool(\"{name}\"; args, callback) # returns 1 if error\n    \nend\n    ",
        description = tool.description.trim_end_matches('.'),
        body = body.trim(),
        name = tool.name,
    );

    Ok(EmittedStub {
        toolbox: tool.toolbox.clone(),
        source_text,
    })
}
