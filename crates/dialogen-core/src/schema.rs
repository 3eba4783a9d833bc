//! Shared schema capability for all dialogue records.
//!
//! Every record in this crate is a plain serde struct; this trait layers the
//! common operations on top: validated construction from a JSON mapping,
//! conversion back to a mapping, structured-text encode/decode, and JSON
//! schema generation (field doc comments become schema descriptions).

use crate::error::{DialogenError, Result};
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Validated construction, mapping conversion, and JSON (de)serialization
/// for a schema-described record.
///
/// All methods are provided; implementors only opt in:
///
/// ```
/// use dialogen_core::schema::SchemaModel;
/// use schemars::JsonSchema;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
/// struct Probe {
///     label: String,
/// }
///
/// impl SchemaModel for Probe {}
///
/// let probe = Probe::from_json(r#"{"label": "x"}"#).unwrap();
/// assert_eq!(probe, Probe { label: "x".to_string() });
/// ```
pub trait SchemaModel: Serialize + DeserializeOwned + JsonSchema + Sized {
    /// Constructs a record from a JSON mapping, validating field presence
    /// and primitive shape.
    ///
    /// Returns `DialogenError::Validation` when a required field is missing
    /// or a value has an incompatible type.
    fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(DialogenError::from_json_error)
    }

    /// Converts the record to a JSON mapping.
    fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| DialogenError::internal(e.to_string()))
    }

    /// Decodes a record from structured text.
    ///
    /// Malformed text returns `DialogenError::Parse`; well-formed text that
    /// does not match the schema returns `DialogenError::Validation`.
    fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(DialogenError::from_json_error)
    }

    /// Encodes the record as structured text, indented when `pretty` is set.
    fn to_json(&self, pretty: bool) -> Result<String> {
        let encoded = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        encoded.map_err(|e| DialogenError::internal(e.to_string()))
    }

    /// Generates the JSON schema for this record, carrying per-field
    /// descriptions.
    fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    struct Sample {
        /// A labelled thing.
        label: String,
        count: u32,
    }

    impl SchemaModel for Sample {}

    #[test]
    fn test_from_value_validates_required_fields() {
        let err = Sample::from_value(serde_json::json!({"label": "a"})).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_value_validates_primitive_shape() {
        let err =
            Sample::from_value(serde_json::json!({"label": "a", "count": "three"})).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_value_round_trip() {
        let sample = Sample {
            label: "a".to_string(),
            count: 3,
        };
        let value = sample.to_value().unwrap();
        assert_eq!(Sample::from_value(value).unwrap(), sample);
    }

    #[test]
    fn test_pretty_and_compact_forms_decode_identically() {
        let sample = Sample {
            label: "a".to_string(),
            count: 3,
        };
        let pretty = sample.to_json(true).unwrap();
        let compact = sample.to_json(false).unwrap();
        assert!(pretty.contains('\n'));
        assert!(!compact.contains('\n'));
        assert_eq!(Sample::from_json(&pretty).unwrap(), sample);
        assert_eq!(Sample::from_json(&compact).unwrap(), sample);
    }

    #[test]
    fn test_from_json_reports_parse_on_malformed_text() {
        let err = Sample::from_json("{oops").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_schema_carries_field_descriptions() {
        let schema = <Sample as SchemaModel>::json_schema();
        let value = schema.as_value();
        assert_eq!(
            value["properties"]["label"]["description"],
            "A labelled thing."
        );
    }
}
