//! Bibliographic-entry records (raw reference strings)

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::schema::EntityKind;
use crate::value::FieldValue;
use crate::warn::Warning;

use super::{record_type, text_or_empty, Record};

#[derive(Debug, Default, Deserialize)]
pub struct BeRecord {
    #[serde(default)]
    pub iri: Option<String>,
    #[serde(default)]
    pub label: Option<FieldValue>,
    #[serde(default)]
    pub a: Option<FieldValue>,
    /// The reference string exactly as it appeared in the citing work.
    #[serde(default)]
    pub content: Option<FieldValue>,
    #[serde(default)]
    pub crossref: Option<FieldValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for BeRecord {
    const KIND: EntityKind = EntityKind::Be;

    fn iri(&self) -> Option<&str> {
        self.iri.as_deref()
    }

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    fn project(&self) -> (Vec<String>, Vec<Warning>) {
        let (record_type, warnings) = record_type(self.a.as_ref(), self.iri());
        let row = vec![
            self.iri.clone().unwrap_or_default(),
            text_or_empty(self.label.as_ref()),
            record_type,
            text_or_empty(self.content.as_ref()),
            text_or_empty(self.crossref.as_ref()),
        ];
        (row, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn projection_follows_column_order() {
        let rec: BeRecord = serde_json::from_value(json!({
            "iri": "gbe:1",
            "label": "entry 1",
            "a": "entry",
            "content": "Doe, J. (2001). On Things.",
            "crossref": "gbr:7"
        }))
        .unwrap();
        let (row, warnings) = rec.project();
        assert_eq!(
            row,
            vec!["gbe:1", "entry 1", "entry", "Doe, J. (2001). On Things.", "gbr:7"]
        );
        assert!(warnings.is_empty());
        assert_eq!(row.len(), EntityKind::Be.columns().len());
    }

    #[test]
    fn absent_fields_project_as_empty() {
        let rec: BeRecord = serde_json::from_value(json!({"iri": "gbe:2", "a": "entry"})).unwrap();
        let (row, _) = rec.project();
        assert_eq!(row, vec!["gbe:2", "", "entry", "", ""]);
    }

    #[test]
    fn recognized_fields_leave_no_extras() {
        let mut obj = serde_json::Map::new();
        for field in EntityKind::Be.recognized_fields() {
            obj.insert(field.to_string(), json!("x"));
        }
        let rec: BeRecord = serde_json::from_value(Value::Object(obj)).unwrap();
        assert!(rec.extra.is_empty());
    }
}
