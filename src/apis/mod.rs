pub mod file_catalog;
pub mod superhero;

pub use file_catalog::FileCatalog;
pub use superhero::SuperheroApi;

use serde_json::Value;

use crate::error::{Result, ScraperError};
use crate::types::CharacterRecord;

/// Decode a catalog payload, which must be a top-level JSON array.
pub fn records_from_payload(bytes: &[u8]) -> Result<Vec<CharacterRecord>> {
    match serde_json::from_slice::<Value>(bytes)? {
        Value::Array(records) => Ok(records),
        other => Err(ScraperError::UnexpectedShape {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_payload_decodes() {
        let records = records_from_payload(br#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_object_payload_is_rejected() {
        let err = records_from_payload(br#"{"heroes": []}"#).unwrap_err();
        assert!(matches!(err, ScraperError::UnexpectedShape { found: "object" }));
    }

    #[test]
    fn test_garbage_payload_is_json_error() {
        let err = records_from_payload(b"<html>502</html>").unwrap_err();
        assert!(matches!(err, ScraperError::Json(_)));
    }
}
