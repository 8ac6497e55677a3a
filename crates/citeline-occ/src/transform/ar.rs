//! Agent-role records linking agents to the resources they worked on

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::schema::EntityKind;
use crate::value::FieldValue;
use crate::warn::Warning;

use super::{record_type, text_or_empty, Record};

#[derive(Debug, Default, Deserialize)]
pub struct ArRecord {
    #[serde(default)]
    pub iri: Option<String>,
    #[serde(default)]
    pub label: Option<FieldValue>,
    #[serde(default)]
    pub a: Option<FieldValue>,
    #[serde(default)]
    pub role_of: Option<FieldValue>,
    #[serde(default)]
    pub role_type: Option<FieldValue>,
    /// Next role in the ordered chain of roles on the same resource.
    #[serde(default)]
    pub next: Option<FieldValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for ArRecord {
    const KIND: EntityKind = EntityKind::Ar;

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
            text_or_empty(self.role_of.as_ref()),
            text_or_empty(self.role_type.as_ref()),
            text_or_empty(self.next.as_ref()),
        ];
        (row, warnings)
    }
}
