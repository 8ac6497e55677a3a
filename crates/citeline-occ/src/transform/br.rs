//! Bibliographic resources: type resolution, projection, link extraction

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::schema::{EntityKind, Relation, BR_CATEGORIES, DOCUMENT_TAG, UNKNOWN_CATEGORY};
use crate::value::{normalize_to_list, FieldValue};
use crate::warn::Warning;

use super::{text_or_empty, Link, Record};

/// A bibliographic resource as it appears under `@graph`.
#[derive(Debug, Default, Deserialize)]
pub struct BrRecord {
    #[serde(default)]
    pub iri: Option<String>,
    /// Polymorphic type tag: expected a list of candidate category strings.
    #[serde(default)]
    pub a: Option<FieldValue>,
    #[serde(default)]
    pub label: Option<FieldValue>,
    #[serde(default)]
    pub r#type: Option<FieldValue>,
    #[serde(default)]
    pub title: Option<FieldValue>,
    #[serde(default)]
    pub subtitle: Option<FieldValue>,
    #[serde(default)]
    pub year: Option<FieldValue>,
    #[serde(default)]
    pub number: Option<FieldValue>,
    #[serde(default)]
    pub part_of: Option<FieldValue>,
    #[serde(default)]
    pub contributor: Option<FieldValue>,
    #[serde(default)]
    pub identifier: Option<FieldValue>,
    #[serde(default)]
    pub format: Option<FieldValue>,
    #[serde(default)]
    pub citation: Option<FieldValue>,
    #[serde(default)]
    pub reference: Option<FieldValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BrRecord {
    fn relation_value(&self, relation: Relation) -> Option<&FieldValue> {
        match relation {
            Relation::PartOf => self.part_of.as_ref(),
            Relation::Identifier => self.identifier.as_ref(),
            Relation::Format => self.format.as_ref(),
            Relation::Citation => self.citation.as_ref(),
            Relation::Reference => self.reference.as_ref(),
            Relation::Contributor => self.contributor.as_ref(),
        }
    }
}

impl Record for BrRecord {
    const KIND: EntityKind = EntityKind::Br;

    fn iri(&self) -> Option<&str> {
        self.iri.as_deref()
    }

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    fn project(&self) -> (Vec<String>, Vec<Warning>) {
        let (category, warnings) = resolve_type(self.a.as_ref(), self.iri());
        let row = vec![
            self.iri.clone().unwrap_or_default(),
            text_or_empty(self.label.as_ref()),
            category,
            text_or_empty(self.title.as_ref()),
            text_or_empty(self.subtitle.as_ref()),
            text_or_empty(self.year.as_ref()),
            text_or_empty(self.number.as_ref()),
        ];
        (row, warnings)
    }

    fn links(&self) -> (Vec<Link>, Vec<Warning>) {
        let src = self.iri.clone().unwrap_or_default();
        let mut links = Vec::new();
        let mut warnings = Vec::new();

        for relation in Relation::all() {
            let value = self.relation_value(*relation);
            let (mut dsts, w) = normalize_to_list(value, relation.field(), self.iri());
            warnings.extend(w);

            if relation.single_valued() && value.is_some_and(FieldValue::is_list) {
                warnings.push(Warning::UnexpectedMultiValue {
                    field: relation.field(),
                    iri: self.iri.clone(),
                });
                dsts.truncate(1);
            }

            links.extend(dsts.into_iter().map(|dst| Link {
                src: src.clone(),
                dst,
                relation: *relation,
            }));
        }

        (links, warnings)
    }
}

/// Resolve the polymorphic `a` tag into exactly one concrete category.
///
/// The tag is expected to be a list of candidates scanned in order: the
/// first element found in [`BR_CATEGORIES`] wins, and the generic
/// "document" wrapper is skipped. A bare scalar is returned as-is (a few
/// corpus records carry one). When nothing matches, the sentinel
/// [`UNKNOWN_CATEGORY`] is returned.
pub fn resolve_type(tag: Option<&FieldValue>, iri: Option<&str>) -> (String, Vec<Warning>) {
    match tag {
        Some(FieldValue::Text(s)) => (
            s.clone(),
            vec![Warning::MalformedTypeShape {
                iri: iri.map(Into::into),
            }],
        ),
        Some(FieldValue::Number(n)) => (
            n.to_string(),
            vec![Warning::MalformedTypeShape {
                iri: iri.map(Into::into),
            }],
        ),
        Some(FieldValue::List(items)) => {
            let mut warnings = Vec::new();
            for item in items {
                let Some(candidate) = item.as_text() else {
                    continue;
                };
                if candidate == DOCUMENT_TAG {
                    continue;
                }
                if BR_CATEGORIES.contains(&candidate.as_str()) {
                    return (candidate, warnings);
                }
                warnings.push(Warning::UnknownCategory {
                    candidate,
                    iri: iri.map(Into::into),
                });
            }
            warnings.push(Warning::NoCategoryFound {
                iri: iri.map(Into::into),
            });
            (UNKNOWN_CATEGORY.to_string(), warnings)
        }
        Some(FieldValue::Other(_)) | None => (
            UNKNOWN_CATEGORY.to_string(),
            vec![Warning::NoCategoryFound {
                iri: iri.map(Into::into),
            }],
        ),
    }
}
