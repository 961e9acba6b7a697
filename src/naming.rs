//! Identifier normalization from WhiteboxTools' CamelCase to Julia snake_case.
//!
//! Tool names and parameter switches go through different override tables:
//! reserved words only collide as function names, while `class`/`input` only
//! collide as argument names.

use once_cell::sync::Lazy;
use regex::Regex;

/// Boundary before a capitalized word, e.g. `RGB|To`
static CAPITALIZED_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("static regex"));

/// Boundary between a lowercase letter or digit and an uppercase letter
static LOWER_TO_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("static regex"));

/// Julia keywords a tool name may normalize to
const RESERVED_FUNCTION_NAMES: &[(&str, &str)] = &[("and", "And"), ("or", "Or"), ("not", "Not")];

/// Switch names that cannot be used verbatim as Julia arguments
const ARGUMENT_OVERRIDES: &[(&str, &str)] = &[("class", "cls"), ("input", "i")];

/// Convert a CamelCase identifier into lowercase snake_case.
///
/// ```
/// use wbt_stubgen::naming::camel_to_snake;
///
/// assert_eq!(camel_to_snake("ElevationAboveStream"), "elevation_above_stream");
/// assert_eq!(camel_to_snake("RGBToUint32"), "rgb_to_uint32");
/// ```
pub fn camel_to_snake(s: &str) -> String {
    let subbed = CAPITALIZED_WORD.replace_all(s, "${1}_${2}");
    LOWER_TO_UPPER
        .replace_all(&subbed, "${1}_${2}")
        .to_lowercase()
}

/// Julia function name for a tool
pub fn function_name(tool: &str) -> String {
    let snaked = camel_to_snake(tool);
    lookup(RESERVED_FUNCTION_NAMES, &snaked).map_or(snaked, str::to_string)
}

/// Julia argument name for a command-line switch such as `--out_type`
pub fn argument_name(switch: &str) -> String {
    let bare = switch.replace('-', "");
    let renamed = lookup(ARGUMENT_OVERRIDES, &bare).unwrap_or(bare.as_str());
    camel_to_snake(renamed)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_camel_case_words() {
        assert_eq!(camel_to_snake("ElevationAboveStream"), "elevation_above_stream");
        assert_eq!(camel_to_snake("BufferRaster"), "buffer_raster");
        assert_eq!(camel_to_snake("D8Pointer"), "d8_pointer");
        assert_eq!(camel_to_snake("Lidar2Las"), "lidar2_las");
    }

    #[test]
    fn splits_acronyms_before_capitalized_words() {
        assert_eq!(camel_to_snake("RGBToUint32"), "rgb_to_uint32");
        assert_eq!(camel_to_snake("LasToShapefile"), "las_to_shapefile");
        assert_eq!(camel_to_snake("HSIToRGB"), "hsi_to_rgb");
    }

    #[test]
    fn normalization_is_idempotent() {
        for name in [
            "ElevationAboveStream",
            "RGBToUint32",
            "D8FlowAccumulation",
            "already_snake",
            "LiDARTINGridding",
        ] {
            let once = camel_to_snake(name);
            assert_eq!(camel_to_snake(&once), once, "not idempotent for {name}");
        }
    }

    #[test]
    fn reserved_tool_names_are_capitalized() {
        assert_eq!(function_name("And"), "And");
        assert_eq!(function_name("Or"), "Or");
        assert_eq!(function_name("Not"), "Not");
        assert_eq!(function_name("Xor"), "xor");
    }

    #[test]
    fn argument_overrides_apply_to_switches_only() {
        assert_eq!(argument_name("--class"), "cls");
        assert_eq!(argument_name("--input"), "i");
        assert_eq!(argument_name("-i"), "i");
        assert_eq!(argument_name("--out_type"), "out_type");
        // function names never see the argument table
        assert_eq!(function_name("Class"), "class");
        assert_eq!(function_name("Input"), "input");
    }

    #[test]
    fn argument_names_drop_every_dash() {
        assert_eq!(argument_name("--max-dist"), "maxdist");
        assert_eq!(argument_name("--zFactor"), "z_factor");
    }
}
