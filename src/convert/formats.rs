//! Format conversion between JSON, YAML, and CSV.
//!
//! Every conversion is normalized through `serde_json::Value` so failures
//! surface early with a single error type and round-trips stay deterministic.

use crate::convert::json_utils::{encode_json, parse_json, yaml_to_json};
use crate::convert::tabular::{csv_to_json, json_to_csv};
use crate::error::ToolError;

const FORMAT_JSON: &str = "JSON";
const FORMAT_YAML: &str = "YAML";
const FORMAT_CSV: &str = "CSV";

/// Converts between the supported structured-text formats. Same-format
/// conversion returns the input untouched; use [`format_content`] to reflow.
pub fn convert_formats(from: &str, to: &str, input: &str) -> Result<String, ToolError> {
    if from == to {
        return Ok(input.to_string());
    }
    let value = match from {
        FORMAT_JSON => parse_json(input)?,
        FORMAT_YAML => yaml_to_json(
            serde_yaml::from_str(input)
                .map_err(|err| ToolError::parse("YAML", err.to_string()))?,
        ),
        FORMAT_CSV => csv_to_json(input)?,
        _ => return Err(ToolError::input(format!("unsupported source format: {from}"))),
    };
    match to {
        FORMAT_JSON => encode_json(&value, false),
        FORMAT_YAML => serde_yaml::to_string(&value)
            .map_err(|err| ToolError::parse("YAML", err.to_string())),
        FORMAT_CSV => json_to_csv(&value),
        _ => Err(ToolError::input(format!("unsupported target format: {to}"))),
    }
}

/// Pretty-prints or minifies a document in place. YAML has no minified form,
/// so both paths re-emit canonical YAML; CSV cannot be reflowed.
pub fn format_content(format_name: &str, input: &str, minify: bool) -> Result<String, ToolError> {
    match format_name {
        FORMAT_JSON => {
            let value = parse_json(input)?;
            encode_json(&value, minify)
        }
        FORMAT_YAML => {
            let value = yaml_to_json(
                serde_yaml::from_str(input)
                    .map_err(|err| ToolError::parse("YAML", err.to_string()))?,
            );
            serde_yaml::to_string(&value)
                .map_err(|err| ToolError::parse("YAML", err.to_string()))
        }
        _ => Err(ToolError::input("formatting is not available for this format")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_yaml_round_trip() {
        let yaml = convert_formats("JSON", "YAML", r#"{"id":1,"name":"Ada"}"#).unwrap();
        assert!(yaml.contains("id: 1"));
        assert!(yaml.contains("name: Ada"));
        let back = convert_formats("YAML", "JSON", &yaml).unwrap();
        assert!(back.contains("\"id\": 1"));
    }

    #[test]
    fn json_csv_round_trip_preserves_header_order() {
        let json = r#"[{"name":"Ada","age":36},{"name":"Alan","age":41}]"#;
        let csv = convert_formats("JSON", "CSV", json).unwrap();
        assert_eq!(csv, "name,age\nAda,36\nAlan,41\n");
        let back = convert_formats("CSV", "JSON", &csv).unwrap();
        assert!(back.contains("\"name\": \"Ada\""));
        assert!(back.contains("\"age\": \"36\""));
    }

    #[test]
    fn yaml_to_csv_goes_through_json() {
        let csv = convert_formats("YAML", "CSV", "- a: 1\n- a: 2\n").unwrap();
        assert_eq!(csv, "a\n1\n2\n");
    }

    #[test]
    fn same_format_is_identity() {
        assert_eq!(
            convert_formats("JSON", "JSON", "{ \"a\":1 }").unwrap(),
            "{ \"a\":1 }"
        );
    }

    #[test]
    fn unknown_formats_are_rejected() {
        assert!(convert_formats("TOML", "JSON", "a = 1").is_err());
        assert!(convert_formats("JSON", "TOML", "{}").is_err());
    }

    #[test]
    fn format_content_json() {
        assert_eq!(
            format_content("JSON", "{ \"a\": 1 }", true).unwrap(),
            "{\"a\":1}"
        );
        assert_eq!(
            format_content("JSON", "{\"a\":1}", false).unwrap(),
            "{\n  \"a\": 1\n}"
        );
        assert!(format_content("CSV", "a\n1\n", false).is_err());
    }
}
