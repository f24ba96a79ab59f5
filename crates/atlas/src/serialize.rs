//! JSON, YAML, XML and CSV output.

use serde::Serialize;
use thiserror::Error;

use crate::output::OutputMode;

#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("XML serialization failed: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("CSV serialization failed: {0}")]
    Csv(String),

    #[error("not a structured output mode")]
    NotStructured,
}

/// Serializes `data` for a structured `mode`.
pub fn serialize_structured<T: Serialize>(
    data: &T,
    mode: OutputMode,
) -> Result<String, SerializeError> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(data)?),
        OutputMode::Xml => Ok(quick_xml::se::to_string(data)?),
        OutputMode::Csv => to_csv(data),
        _ => Err(SerializeError::NotStructured),
    }
}

/// CSV for a list of flat records: one header row from the first record's
/// keys, then one row per record. Nested values are written as JSON.
///
/// An empty list yields an empty string, since there is no header to infer.
pub fn to_csv<T: Serialize>(data: &T) -> Result<String, SerializeError> {
    use serde_json::Value;

    let value = serde_json::to_value(data)?;
    let records = match value {
        Value::Array(items) => items,
        other => vec![other],
    };

    let mut wtr = csv::Writer::from_writer(vec![]);
    let csv_err = |e: csv::Error| SerializeError::Csv(e.to_string());

    match records.first() {
        None => {}
        Some(Value::Object(first)) => {
            let headers: Vec<String> = first.keys().cloned().collect();
            wtr.write_record(&headers).map_err(csv_err)?;
            for record in &records {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| record.get(h).map(cell).unwrap_or_default())
                    .collect();
                wtr.write_record(&row).map_err(csv_err)?;
            }
        }
        Some(_) => {
            wtr.write_record(["value"]).map_err(csv_err)?;
            for record in &records {
                wtr.write_record([cell(record)]).map_err(csv_err)?;
            }
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| SerializeError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SerializeError::Csv(e.to_string()))
}

fn cell(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
