//! JSON array ⇄ CSV conversion for the data converter tool.
//!
//! CSV maps to a flat table, so the JSON side must be an array of objects
//! whose values are scalars. Anything nested is rejected with a schema error
//! instead of being silently stringified.

use std::collections::HashSet;
use std::io::Cursor;

use serde_json::{Map, Value};

use crate::error::ToolError;

/// Renders a JSON array of flat objects as CSV. The header row is the union
/// of all keys in first-seen order; missing cells are empty.
pub fn json_to_csv(value: &Value) -> Result<String, ToolError> {
    let rows = value
        .as_array()
        .ok_or_else(|| ToolError::Schema("CSV conversion requires a JSON array".into()))?;
    if rows.is_empty() {
        return Ok(String::new());
    }

    let mut headers: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut objects: Vec<&Map<String, Value>> = Vec::with_capacity(rows.len());
    for row in rows {
        let obj = row
            .as_object()
            .ok_or_else(|| ToolError::Schema("CSV rows must be JSON objects".into()))?;
        for key in obj.keys() {
            if seen.insert(key) {
                headers.push(key);
            }
        }
        objects.push(obj);
    }

    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer
        .write_record(&headers)
        .map_err(|err| ToolError::parse("CSV", err.to_string()))?;
    for obj in objects {
        let record: Vec<String> = headers
            .iter()
            .map(|key| cell_to_string(obj.get(*key)))
            .collect::<Result<_, _>>()?;
        writer
            .write_record(&record)
            .map_err(|err| ToolError::parse("CSV", err.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ToolError::parse("CSV", err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ToolError::parse("CSV", err.to_string()))
}

fn cell_to_string(value: Option<&Value>) -> Result<String, ToolError> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(Value::Number(num)) => Ok(num.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Array(_)) | Some(Value::Object(_)) => Err(ToolError::Schema(
            "CSV cells must be scalar values".into(),
        )),
    }
}

/// Parses CSV into a JSON array of objects. The first record supplies the
/// keys and every cell stays a string, matching what the grid editor shows.
pub fn csv_to_json(input: &str) -> Result<Value, ToolError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(Cursor::new(input.as_bytes()));

    let headers = reader
        .headers()
        .map_err(|err| ToolError::parse("CSV", err.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| ToolError::parse("CSV", err.to_string()))?;
        let mut obj = Map::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            obj.insert(header.to_string(), Value::String(field.to_string()));
        }
        rows.push(Value::Object(obj));
    }
    Ok(Value::Array(rows))
}
