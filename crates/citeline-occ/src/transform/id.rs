//! Identifier records (DOI, ISSN, ORCID, ...)

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::schema::EntityKind;
use crate::value::FieldValue;
use crate::warn::Warning;

use super::{record_type, text_or_empty, Record};

#[derive(Debug, Default, Deserialize)]
pub struct IdRecord {
    #[serde(default)]
    pub iri: Option<String>,
    #[serde(default)]
    pub label: Option<FieldValue>,
    #[serde(default)]
    pub a: Option<FieldValue>,
    #[serde(default)]
    pub r#type: Option<FieldValue>,
    #[serde(default)]
    pub id: Option<FieldValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for IdRecord {
    const KIND: EntityKind = EntityKind::Id;

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
            record_type,
            text_or_empty(self.r#type.as_ref()),
            text_or_empty(self.id.as_ref()),
            text_or_empty(self.label.as_ref()),
        ];
        (row, warnings)
    }
}
