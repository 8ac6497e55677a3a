//! Record models and projections for the corpus entity kinds
//!
//! One module per entity kind: the record struct mirrors the JSON fields,
//! `project` flattens it into the kind's column schema, and BR additionally
//! resolves its type tag and extracts link tuples. Unknown fields land in a
//! flattened extras map so validation can report them without losing the
//! record.

pub mod ar;
pub mod be;
pub mod br;
pub mod id;
pub mod ra;
pub mod re;

use serde_json::{Map, Value};

use crate::schema::{EntityKind, Relation};
use crate::value::FieldValue;
use crate::warn::Warning;

// Re-exports
pub use ar::ArRecord;
pub use be::BeRecord;
pub use br::{resolve_type, BrRecord};
pub use id::IdRecord;
pub use ra::RaRecord;
pub use re::ReRecord;

/// A destination edge extracted from a one-to-many relationship field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub src: String,
    pub dst: String,
    pub relation: Relation,
}

/// Common surface of the per-kind record structs.
pub trait Record: serde::de::DeserializeOwned {
    const KIND: EntityKind;

    fn iri(&self) -> Option<&str>;

    /// Fields the deserializer did not recognize.
    fn extra(&self) -> &Map<String, Value>;

    /// Flatten into the kind's column schema; absent fields become empty.
    ///
    /// Pure with respect to the record: repeated invocations yield the same
    /// row and the same warnings.
    fn project(&self) -> (Vec<String>, Vec<Warning>);

    /// Extract link tuples; only BR records carry relationship fields.
    fn links(&self) -> (Vec<Link>, Vec<Warning>) {
        (Vec::new(), Vec::new())
    }

    /// Missing mandatory fields first, then unrecognized fields.
    fn validate(&self) -> Vec<Warning> {
        let mut warnings = Vec::new();
        if self.iri().is_none() {
            warnings.push(Warning::MissingMandatoryField {
                field: "iri",
                iri: None,
            });
        }
        for field in self.extra().keys() {
            warnings.push(Warning::UnrecognizedField {
                field: field.clone(),
                iri: self.iri().map(Into::into),
            });
        }
        warnings
    }
}

/// Everything the sinks need for one processed record.
#[derive(Debug)]
pub struct Emitted {
    pub row: Vec<String>,
    pub links: Vec<Link>,
    pub warnings: Vec<Warning>,
}

/// Validate, project, and extract links from one raw record value.
pub fn process<R: Record>(value: Value) -> Result<Emitted, serde_json::Error> {
    let record: R = serde_json::from_value(value)?;
    let mut warnings = record.validate();
    let (row, w) = record.project();
    warnings.extend(w);
    let (links, w) = record.links();
    warnings.extend(w);
    Ok(Emitted {
        row,
        links,
        warnings,
    })
}

/// Dispatch [`process`] on the entity kind.
pub fn process_value(kind: EntityKind, value: Value) -> Result<Emitted, serde_json::Error> {
    match kind {
        EntityKind::Br => process::<BrRecord>(value),
        EntityKind::Id => process::<IdRecord>(value),
        EntityKind::Ar => process::<ArRecord>(value),
        EntityKind::Be => process::<BeRecord>(value),
        EntityKind::Re => process::<ReRecord>(value),
        EntityKind::Ra => process::<RaRecord>(value),
    }
}

/// Scalar column projection: absent or non-scalar values become empty.
fn text_or_empty(value: Option<&FieldValue>) -> String {
    value.and_then(FieldValue::as_text).unwrap_or_default()
}

/// Record-type projection for kinds whose `a` must be a single tag.
///
/// The corpus occasionally carries a list here; the first element is kept so
/// the row is still produced.
fn record_type(value: Option<&FieldValue>, iri: Option<&str>) -> (String, Vec<Warning>) {
    let malformed = || {
        vec![Warning::MalformedTypeShape {
            iri: iri.map(Into::into),
        }]
    };
    match value {
        Some(FieldValue::Text(s)) => (s.clone(), Vec::new()),
        Some(FieldValue::Number(n)) => (n.to_string(), malformed()),
        Some(FieldValue::List(items)) => (
            items
                .iter()
                .filter_map(FieldValue::as_text)
                .next()
                .unwrap_or_default(),
            malformed(),
        ),
        Some(FieldValue::Other(_)) | None => (String::new(), malformed()),
    }
}
