//! Per-record diagnostics
//!
//! The corpus is noisy by design, so none of these abort processing. Core
//! components return warnings as values; the runner decides how to report
//! them. Tests assert on the variants directly instead of parsing log text.

use std::fmt;

/// A recoverable problem found while processing one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A field from the kind's mandatory set is absent.
    MissingMandatoryField {
        field: &'static str,
        iri: Option<String>,
    },
    /// A field outside the kind's recognized set is present.
    UnrecognizedField { field: String, iri: Option<String> },
    /// The type tag is not the expected list of candidate categories.
    MalformedTypeShape { iri: Option<String> },
    /// A type-list element is neither a known category nor the wrapper tag.
    UnknownCategory {
        candidate: String,
        iri: Option<String>,
    },
    /// The type list held no usable category.
    NoCategoryFound { iri: Option<String> },
    /// A documented single-valued field carried a list.
    UnexpectedMultiValue {
        field: &'static str,
        iri: Option<String>,
    },
    /// A field has a shape the normalizer cannot use (e.g. an object).
    InvalidFieldShape { field: String, iri: Option<String> },
}

impl Warning {
    /// The record iri this warning refers to, when known.
    pub fn iri(&self) -> Option<&str> {
        match self {
            Self::MissingMandatoryField { iri, .. }
            | Self::UnrecognizedField { iri, .. }
            | Self::MalformedTypeShape { iri }
            | Self::UnknownCategory { iri, .. }
            | Self::NoCategoryFound { iri }
            | Self::UnexpectedMultiValue { iri, .. }
            | Self::InvalidFieldShape { iri, .. } => iri.as_deref(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMandatoryField { field, .. } => {
                write!(f, "mandatory field '{field}' missing")?;
            }
            Self::UnrecognizedField { field, .. } => {
                write!(f, "unrecognized field '{field}'")?;
            }
            Self::MalformedTypeShape { .. } => {
                write!(f, "type tag is not a list of categories")?;
            }
            Self::UnknownCategory { candidate, .. } => {
                write!(f, "unknown category '{candidate}'")?;
            }
            Self::NoCategoryFound { .. } => {
                write!(f, "no category found in type list")?;
            }
            Self::UnexpectedMultiValue { field, .. } => {
                write!(f, "multiple values in single-valued field '{field}'")?;
            }
            Self::InvalidFieldShape { field, .. } => {
                write!(f, "field '{field}' has an unusable shape")?;
            }
        }
        if let Some(iri) = self.iri() {
            write!(f, " (record {iri})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_record_iri() {
        let w = Warning::UnknownCategory {
            candidate: "pamphlet".to_string(),
            iri: Some("gbr:42".to_string()),
        };
        assert_eq!(format!("{w}"), "unknown category 'pamphlet' (record gbr:42)");
    }

    #[test]
    fn display_without_iri() {
        let w = Warning::MissingMandatoryField {
            field: "iri",
            iri: None,
        };
        assert_eq!(format!("{w}"), "mandatory field 'iri' missing");
    }

    #[test]
    fn iri_accessor_covers_all_variants() {
        let with = Some("gbr:1".to_string());
        let variants = [
            Warning::MissingMandatoryField {
                field: "iri",
                iri: with.clone(),
            },
            Warning::UnrecognizedField {
                field: "x".to_string(),
                iri: with.clone(),
            },
            Warning::MalformedTypeShape { iri: with.clone() },
            Warning::UnknownCategory {
                candidate: "x".to_string(),
                iri: with.clone(),
            },
            Warning::NoCategoryFound { iri: with.clone() },
            Warning::UnexpectedMultiValue {
                field: "format",
                iri: with.clone(),
            },
            Warning::InvalidFieldShape {
                field: "x".to_string(),
                iri: with,
            },
        ];
        for w in variants {
            assert_eq!(w.iri(), Some("gbr:1"));
        }
    }
}
