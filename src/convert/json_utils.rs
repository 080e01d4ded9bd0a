// Shared JSON/YAML helpers used by the format converters.
use serde_json::{Map, Number, Value};

use crate::error::ToolError;

/// Parses a JSON string into `serde_json::Value`, keeping the parser's
/// line/column message intact for the UI.
pub fn parse_json(input: &str) -> Result<Value, ToolError> {
    serde_json::from_str(input).map_err(|err| ToolError::parse("JSON", err.to_string()))
}

/// Encodes a JSON `Value` with optional minification, trimming trailing
/// newlines so the output is UI-friendly.
pub fn encode_json(value: &Value, minify: bool) -> Result<String, ToolError> {
    let serialized = if minify {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .map_err(|err| ToolError::parse("JSON", err.to_string()))?;
    Ok(serialized.trim_end().to_string())
}

/// Converts a `serde_yaml::Value` into a JSON `Value`, normalizing tagged values too.
pub fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(num) => {
            if let Some(i) = num.as_i64() {
                Value::Number(Number::from(i))
            } else if let Some(u) = num.as_u64() {
                Value::Number(Number::from(u))
            } else if let Some(f) = num.as_f64() {
                Number::from_f64(f)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            } else {
                Value::Null
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            let items = seq.into_iter().map(yaml_to_json).collect();
            Value::Array(items)
        }
        serde_yaml::Value::Mapping(map) => {
            let mut obj = Map::new();
            for (k, v) in map.into_iter() {
                let key = match k {
                    serde_yaml::Value::String(s) => s,
                    other => serde_yaml::to_string(&other)
                        .unwrap_or_default()
                        .trim()
                        .to_string(),
                };
                obj.insert(key, yaml_to_json(v));
            }
            Value::Object(obj)
        }
        serde_yaml::Value::Tagged(tagged) => {
            let tagged_value = *tagged;
            yaml_to_json(tagged_value.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_json_reports_format() {
        let err = parse_json("{bad").unwrap_err();
        assert!(matches!(err, ToolError::Parse { ref format, .. } if format == "JSON"));
    }

    #[test]
    fn encode_json_minify_toggle() {
        let value = json!({"a": 1});
        assert_eq!(encode_json(&value, true).unwrap(), "{\"a\":1}");
        assert_eq!(encode_json(&value, false).unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn yaml_tagged_values_unwrap() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("!Tag 5").unwrap();
        assert_eq!(yaml_to_json(yaml), json!(5));
    }
}
