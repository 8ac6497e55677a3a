//! Resource-embodiment records (page ranges of a format)

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::schema::EntityKind;
use crate::value::FieldValue;
use crate::warn::Warning;

use super::{record_type, text_or_empty, Record};

#[derive(Debug, Default, Deserialize)]
pub struct ReRecord {
    #[serde(default)]
    pub iri: Option<String>,
    #[serde(default)]
    pub label: Option<FieldValue>,
    #[serde(default)]
    pub a: Option<FieldValue>,
    #[serde(default)]
    pub fpage: Option<FieldValue>,
    #[serde(default)]
    pub lpage: Option<FieldValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for ReRecord {
    const KIND: EntityKind = EntityKind::Re;

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
            text_or_empty(self.fpage.as_ref()),
            text_or_empty(self.lpage.as_ref()),
        ];
        (row, warnings)
    }
}
