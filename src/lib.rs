//! Julia wrapper generation for WhiteboxTools.
//!
//! Run once per WhiteboxTools release: every tool the toolkit exposes becomes
//! a Julia function that marshals its keyword arguments into command-line
//! switches and hands them to `run_tool`. The stubs are grouped by toolbox
//! into a single text file meant for copy-paste into the wrapper library.
//!
//! The pipeline is a single forward pass:
//! [`harvest`](harvest::harvest) → [`emit`](emit::emit) per tool →
//! [`ToolboxGroups`](aggregate::ToolboxGroups) → [`write_report`](output::write_report).

pub mod aggregate;
pub mod emit;
pub mod error;
pub mod harvest;
pub mod naming;
pub mod output;
pub mod schema;
pub mod toolkit;

pub use error::{Result, StubGenError};

use aggregate::ToolboxGroups;
use harvest::Harvest;
use toolkit::Toolkit;

/// The rendered report and what went into it
#[derive(Debug, Clone)]
pub struct Report {
    pub text: String,
    pub toolboxes: usize,
    pub stubs: usize,
}

/// Render every harvested tool, grouped by toolbox
pub fn render(harvest: &Harvest) -> Result<Report> {
    let mut groups = ToolboxGroups::new(&harvest.toolboxes);
    for tool in &harvest.tools {
        groups.insert(&tool.name, emit::emit(tool)?)?;
    }

    Ok(Report {
        text: groups.render(),
        toolboxes: harvest.toolboxes.len(),
        stubs: groups.len(),
    })
}

/// Harvest `toolkit` and render the full report
pub fn generate(toolkit: &dyn Toolkit) -> Result<Report> {
    render(&harvest::harvest(toolkit)?)
}
