//! Scalar-or-list field values
//!
//! Corpus fields appear as a bare string, a number, or a list of strings,
//! with no schema guarantee on which. `FieldValue` accepts any JSON shape so
//! a surprising field never aborts deserialization of its record.

use serde::Deserialize;
use serde_json::Value;

use crate::warn::Warning;

/// A corpus field value of tolerant shape.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    List(Vec<FieldValue>),
    Other(Value),
}

impl FieldValue {
    /// Scalar rendering, if this is a scalar.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.clone()),
            Self::Number(n) => Some(n.to_string()),
            Self::List(_) | Self::Other(_) => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

/// Coerce an optional scalar-or-list value into an ordered list of strings.
///
/// Absent values yield an empty list; a scalar yields one element; a list
/// passes through in order (elements are assumed scalar, no deep
/// validation). Any other shape is reported and treated as empty.
pub fn normalize_to_list(
    value: Option<&FieldValue>,
    field: &str,
    iri: Option<&str>,
) -> (Vec<String>, Vec<Warning>) {
    match value {
        None => (Vec::new(), Vec::new()),
        Some(FieldValue::Text(s)) => (vec![s.clone()], Vec::new()),
        Some(FieldValue::Number(n)) => (vec![n.to_string()], Vec::new()),
        Some(FieldValue::List(items)) => (
            items.iter().filter_map(FieldValue::as_text).collect(),
            Vec::new(),
        ),
        Some(FieldValue::Other(_)) => (
            Vec::new(),
            vec![Warning::InvalidFieldShape {
                field: field.to_string(),
                iri: iri.map(Into::into),
            }],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> FieldValue {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn absent_normalizes_to_empty() {
        let (list, warnings) = normalize_to_list(None, "contributor", None);
        assert!(list.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn scalar_normalizes_to_singleton() {
        let value = parse(json!("x"));
        let (list, warnings) = normalize_to_list(Some(&value), "contributor", None);
        assert_eq!(list, vec!["x"]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn list_passes_through_in_order() {
        let value = parse(json!(["x", "y"]));
        let (list, warnings) = normalize_to_list(Some(&value), "contributor", None);
        assert_eq!(list, vec!["x", "y"]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn number_renders_as_text() {
        let value = parse(json!(2015));
        let (list, warnings) = normalize_to_list(Some(&value), "year", None);
        assert_eq!(list, vec!["2015"]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn object_warns_and_yields_empty() {
        let value = parse(json!({"nested": true}));
        let (list, warnings) = normalize_to_list(Some(&value), "identifier", Some("gbr:1"));
        assert!(list.is_empty());
        assert_eq!(
            warnings,
            vec![Warning::InvalidFieldShape {
                field: "identifier".to_string(),
                iri: Some("gbr:1".to_string()),
            }]
        );
    }

    #[test]
    fn as_text_rejects_collections() {
        assert_eq!(parse(json!("a")).as_text(), Some("a".to_string()));
        assert_eq!(parse(json!(7)).as_text(), Some("7".to_string()));
        assert_eq!(parse(json!(["a"])).as_text(), None);
        assert_eq!(parse(json!({"k": 1})).as_text(), None);
    }

    #[test]
    fn untagged_shapes_deserialize() {
        assert!(matches!(parse(json!("s")), FieldValue::Text(_)));
        assert!(matches!(parse(json!(1)), FieldValue::Number(_)));
        assert!(matches!(parse(json!(["s"])), FieldValue::List(_)));
        assert!(matches!(parse(json!({})), FieldValue::Other(_)));
        assert!(matches!(parse(json!(true)), FieldValue::Other(_)));
    }
}
