//! Groups rendered stubs by toolbox and serializes the final report.

use std::collections::{BTreeMap, BTreeSet};

use crate::emit::EmittedStub;
use crate::error::{Result, StubGenError};

/// Stubs keyed by toolbox, seeded with every harvested toolbox
#[derive(Debug)]
pub struct ToolboxGroups {
    groups: BTreeMap<String, Vec<String>>,
}

impl ToolboxGroups {
    pub fn new(toolboxes: &BTreeSet<String>) -> Self {
        Self {
            groups: toolboxes
                .iter()
                .map(|toolbox| (toolbox.clone(), Vec::new()))
                .collect(),
        }
    }

    /// Add a stub to its toolbox. `tool` is only used for the error message.
    pub fn insert(&mut self, tool: &str, stub: EmittedStub) -> Result<()> {
        let Some(group) = self.groups.get_mut(&stub.toolbox) else {
            return Err(StubGenError::UnknownToolbox {
                tool: tool.to_string(),
                toolbox: stub.toolbox,
            });
        };
        group.push(stub.source_text);
        Ok(())
    }

    /// Total number of stubs across all toolboxes
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Toolboxes in ascending order, each followed by its stubs sorted by text
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (toolbox, stubs) in &self.groups {
            out.push_str(&banner(toolbox));
            let mut sorted: Vec<&String> = stubs.iter().collect();
            sorted.sort();
            for stub in sorted {
                out.push_str(stub);
                out.push('\n');
            }
        }
        out
    }
}

/// Toolbox name framed by a `#` border sized to the name
pub fn banner(toolbox: &str) -> String {
    let border = "#".repeat(toolbox.chars().count() + 4);
    format!("\n{border}\n# {toolbox} #\n{border}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn toolboxes(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn stub(toolbox: &str, text: &str) -> EmittedStub {
        EmittedStub {
            toolbox: toolbox.to_string(),
            source_text: text.to_string(),
        }
    }

    #[test]
    fn banner_border_matches_name_width() {
        assert_eq!(
            banner("GIS Analysis"),
            "\n################\n# GIS Analysis #\n################\n"
        );
    }

    #[test]
    fn groups_and_stubs_are_sorted() {
        let mut groups = ToolboxGroups::new(&toolboxes(&["Stream Network Analysis", "Data Tools"]));
        groups.insert("B", stub("Stream Network Analysis", "fn b")).unwrap();
        groups.insert("A", stub("Stream Network Analysis", "fn a")).unwrap();
        groups.insert("C", stub("Data Tools", "fn c")).unwrap();

        let rendered = groups.render();
        let data = rendered.find("# Data Tools #").unwrap();
        let stream = rendered.find("# Stream Network Analysis #").unwrap();
        let a = rendered.find("fn a").unwrap();
        let b = rendered.find("fn b").unwrap();
        let c = rendered.find("fn c").unwrap();
        assert!(data < c && c < stream && stream < a && a < b);
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn empty_toolboxes_still_get_a_banner() {
        let groups = ToolboxGroups::new(&toolboxes(&["Math and Stats Tools"]));
        assert!(groups.is_empty());
        assert_eq!(groups.render(), banner("Math and Stats Tools"));
    }

    #[test]
    fn unknown_toolbox_is_an_error() {
        let mut groups = ToolboxGroups::new(&toolboxes(&["Data Tools"]));
        let err = groups.insert("Slope", stub("Terrain Analysis", "fn slope")).unwrap_err();
        assert!(matches!(
            err,
            StubGenError::UnknownToolbox { ref tool, ref toolbox } if tool == "Slope" && toolbox == "Terrain Analysis"
        ));
    }
}
