//! Collects toolboxes, tools and parameter schemas from a [`Toolkit`].

use std::collections::BTreeSet;

use crate::error::{Result, StubGenError};
use crate::schema::{ToolDescriptor, parse_parameters};
use crate::toolkit::Toolkit;

/// Everything the emitter needs, gathered up front
#[derive(Debug)]
pub struct Harvest {
    pub toolboxes: BTreeSet<String>,
    pub tools: Vec<ToolDescriptor>,
}

/// Extract the toolbox names from `Tool: Toolbox` records
pub fn parse_toolboxes(listing: &str) -> Result<BTreeSet<String>> {
    let mut toolboxes = BTreeSet::new();
    for line in listing.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let toolbox = line
            .split(':')
            .nth(1)
            .ok_or_else(|| StubGenError::MalformedListing {
                line: line.to_string(),
            })?;
        toolboxes.insert(toolbox.trim().to_string());
    }
    Ok(toolboxes)
}

/// Query the toolkit for every tool it exposes
pub fn harvest(toolkit: &dyn Toolkit) -> Result<Harvest> {
    let toolboxes = parse_toolboxes(&toolkit.list_toolboxes()?)?;
    log::info!("Found {} toolboxes", toolboxes.len());

    let listing = toolkit.list_tools()?;
    let mut tools = Vec::with_capacity(listing.len());
    for (n, (name, description)) in listing.into_iter().enumerate() {
        log::info!("{} {}", n + 1, name);

        let toolbox = toolkit.tool_toolbox(&name)?.trim().to_string();
        let parameters = parse_parameters(&name, &toolkit.tool_parameters(&name)?)?;
        tools.push(ToolDescriptor {
            name,
            description,
            toolbox,
            parameters,
        });
    }

    Ok(Harvest { toolboxes, tools })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolbox_names_are_deduplicated_and_trimmed() {
        let listing = "Aspect: Geomorphometric Analysis\n\
                       Slope:  Geomorphometric Analysis \n\
                       \n\
                       Clip: GIS Analysis\n";

        let toolboxes = parse_toolboxes(listing).unwrap();
        assert_eq!(
            toolboxes.into_iter().collect::<Vec<_>>(),
            vec!["GIS Analysis".to_string(), "Geomorphometric Analysis".to_string()]
        );
    }

    #[test]
    fn listing_line_without_toolbox_is_malformed() {
        assert!(matches!(
            parse_toolboxes("Aspect Geomorphometric Analysis"),
            Err(StubGenError::MalformedListing { .. })
        ));
    }
}
