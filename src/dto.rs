use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single recorder setting. The server owns the schema, so only the JSON
/// primitive kinds are modelled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl ParamValue {
    /// Parses a command-line literal: `true`/`false`, `null` and numbers keep
    /// their JSON kind, everything else is a string.
    pub fn parse_literal(raw: &str) -> Self {
        match raw {
            "true" => return ParamValue::Bool(true),
            "false" => return ParamValue::Bool(false),
            "null" => return ParamValue::Null,
            _ => {}
        }

        // only literals that print back unchanged; "007" and "+5" stay strings
        if let Ok(n) = raw.parse::<i64>() {
            if n.to_string() == raw {
                return ParamValue::Number(n.into());
            }
        }
        if let Some(n) = raw
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .filter(|n| n.to_string() == raw)
        {
            return ParamValue::Number(n);
        }

        ParamValue::String(raw.to_string())
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Number(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Number(value.into())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Null => write!(f, "null"),
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Number(n) => write!(f, "{n}"),
            ParamValue::String(s) => write!(f, "{s}"),
        }
    }
}

/// Body of a create-recorder request, sent as-is.
pub type RecorderParameters = BTreeMap<String, ParamValue>;

/// Splits `key=value` into a recorder parameter. The value may itself contain `=`.
pub fn parse_param_pair(s: &str) -> Result<(String, ParamValue), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected key=value, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("Empty parameter name in '{s}'"));
    }
    Ok((key.to_string(), ParamValue::parse_literal(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal_kinds() {
        assert_eq!(ParamValue::parse_literal("true"), ParamValue::Bool(true));
        assert_eq!(ParamValue::parse_literal("null"), ParamValue::Null);
        assert_eq!(ParamValue::parse_literal("42"), ParamValue::from(42i64));
        assert_eq!(
            ParamValue::parse_literal("mp4"),
            ParamValue::String("mp4".to_string())
        );
        assert_eq!(ParamValue::parse_literal("-3"), ParamValue::from(-3i64));
        assert!(matches!(
            ParamValue::parse_literal("1.5"),
            ParamValue::Number(_)
        ));
    }

    #[test]
    fn test_parse_literal_keeps_non_canonical_numbers_as_strings() {
        for raw in ["007", "+5", "1e3", "1.50", "-0"] {
            assert_eq!(
                ParamValue::parse_literal(raw),
                ParamValue::String(raw.to_string()),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_recorder_parameters_serialize_as_flat_object() {
        let mut params = RecorderParameters::new();
        params.insert("recorderName".to_string(), "myStream".into());
        params.insert("segmentDuration".to_string(), 900000i64.into());
        params.insert("moveFirstVideoFrameToZero".to_string(), true.into());
        params.insert("outputPath".to_string(), ParamValue::Null);

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "recorderName": "myStream",
                "segmentDuration": 900000,
                "moveFirstVideoFrameToZero": true,
                "outputPath": null
            })
        );
    }

    #[test]
    fn test_deserialize_rejects_nested_values() {
        let nested = r#"{"a": {"b": 1}}"#;
        assert!(serde_json::from_str::<RecorderParameters>(nested).is_err());

        let flat = r#"{"a": 1, "b": "x", "c": false, "d": null}"#;
        let params: RecorderParameters = serde_json::from_str(flat).unwrap();
        assert_eq!(params.len(), 4);
        assert_eq!(params["c"], ParamValue::Bool(false));
    }

    #[test]
    fn test_parse_param_pair() {
        let (key, value) = parse_param_pair("fileFormat=mp4").unwrap();
        assert_eq!(key, "fileFormat");
        assert_eq!(value, ParamValue::from("mp4"));

        let (_, value) = parse_param_pair("fileTemplate=${SourceStreamName}=x").unwrap();
        assert_eq!(value, ParamValue::from("${SourceStreamName}=x"));

        assert!(parse_param_pair("novalue").is_err());
        assert!(parse_param_pair("=1").is_err());
    }
}
