//! Entity kinds, column schemas, and link relations of the OCC corpus

use std::fmt;

/// The corpus entity kinds, one per directory subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Bibliographic resources (articles, books, journals, ...)
    Br,
    /// External identifiers (DOI, ISSN, ORCID, ...)
    Id,
    /// Agent roles (author, editor, publisher)
    Ar,
    /// Bibliographic entries (raw reference strings)
    Be,
    /// Resource embodiments (page ranges)
    Re,
    /// Responsible agents (people and organizations)
    Ra,
}

impl EntityKind {
    /// List all entity kinds in processing order
    pub fn all() -> &'static [EntityKind] {
        &[
            Self::Br,
            Self::Id,
            Self::Ar,
            Self::Be,
            Self::Re,
            Self::Ra,
        ]
    }

    /// Corpus subdirectory holding this kind's JSON files
    pub fn dir(&self) -> &'static str {
        match self {
            Self::Br => "br",
            Self::Id => "id",
            Self::Ar => "ar",
            Self::Be => "be",
            Self::Re => "re",
            Self::Ra => "ra",
        }
    }

    /// Output table file name (CSV mode)
    pub fn table(&self) -> &'static str {
        match self {
            Self::Br => "br.csv",
            Self::Id => "id.csv",
            Self::Ar => "ar.csv",
            Self::Be => "be.csv",
            Self::Re => "re.csv",
            Self::Ra => "ra.csv",
        }
    }

    /// Statement file name (graph mode)
    pub fn statement_file(&self) -> &'static str {
        match self {
            Self::Br => "br.cypher",
            Self::Id => "id.cypher",
            Self::Ar => "ar.cypher",
            Self::Be => "be.cypher",
            Self::Re => "re.cypher",
            Self::Ra => "ra.cypher",
        }
    }

    /// Node label (graph mode)
    pub fn node_label(&self) -> &'static str {
        self.dir()
    }

    /// Output column schema, in header order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Br => &["iri", "label", "type", "title", "subtitle", "year", "number"],
            Self::Id => &["iri", "record_type", "type", "id", "label"],
            Self::Ar => &["iri", "label", "record_type", "role_of", "role_type", "next"],
            Self::Be => &["iri", "label", "record_type", "content", "crossref"],
            Self::Re => &["iri", "label", "record_type", "fpage", "lpage"],
            Self::Ra => &[
                "iri",
                "label",
                "record_type",
                "given_name",
                "family_name",
                "name",
                "identifier",
            ],
        }
    }

    /// Fields that must be present on every record of this kind
    pub fn mandatory_fields(&self) -> &'static [&'static str] {
        &["iri"]
    }

    /// Fields the importer understands; anything else draws a warning
    pub fn recognized_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Br => &[
                "iri",
                "a",
                "label",
                "type",
                "title",
                "subtitle",
                "number",
                "year",
                "part_of",
                "contributor",
                "identifier",
                "format",
                "citation",
                "reference",
            ],
            Self::Id => &["iri", "label", "a", "type", "id"],
            Self::Ar => &["iri", "label", "a", "role_of", "next", "role_type"],
            Self::Be => &["iri", "label", "a", "content", "crossref"],
            Self::Re => &["iri", "label", "a", "fpage", "lpage"],
            Self::Ra => &["iri", "label", "a", "gname", "fname", "identifier", "name"],
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir())
    }
}

/// One-to-many relationship fields on BR records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    PartOf,
    Identifier,
    Format,
    Citation,
    Reference,
    Contributor,
}

impl Relation {
    /// List all relations in extraction order
    pub fn all() -> &'static [Relation] {
        &[
            Self::PartOf,
            Self::Identifier,
            Self::Format,
            Self::Citation,
            Self::Reference,
            Self::Contributor,
        ]
    }

    /// Record field holding the destination iris
    pub fn field(&self) -> &'static str {
        match self {
            Self::PartOf => "part_of",
            Self::Identifier => "identifier",
            Self::Format => "format",
            Self::Citation => "citation",
            Self::Reference => "reference",
            Self::Contributor => "contributor",
        }
    }

    /// Link table file name (CSV mode)
    pub fn table(&self) -> &'static str {
        match self {
            Self::PartOf => "br-part-link.csv",
            Self::Identifier => "br-id-link.csv",
            Self::Format => "br-format-link.csv",
            Self::Citation => "br-citation-link.csv",
            Self::Reference => "br-reference-link.csv",
            Self::Contributor => "br-contrib-link.csv",
        }
    }

    /// Relationship label (graph mode)
    pub fn graph_label(&self) -> &'static str {
        match self {
            Self::PartOf => "PARTOF",
            Self::Identifier => "ID",
            Self::Format => "RESOURCE",
            Self::Citation => "CITATION",
            Self::Reference => "REFERENCE",
            Self::Contributor => "CONTRIBUTOR",
        }
    }

    /// Whether the corpus documents this field as single-valued
    pub fn single_valued(&self) -> bool {
        matches!(self, Self::Format)
    }
}

/// Concrete BR categories, matched in record order during type resolution.
pub const BR_CATEGORIES: &[&str] = &[
    "article",
    "periodical_issue",
    "periodical_volume",
    "periodical_journal",
    "collection",
    "reference_entry",
    "inbook",
    "book",
    "inproceedings",
    "proceedings",
    "reference_book",
    "thesis",
    "standard",
    "dataset",
    "techreport",
    "book_series",
    "book_part",
    "series",
];

/// Generic wrapper tag skipped during type resolution.
pub const DOCUMENT_TAG: &str = "document";

/// Sentinel category when resolution fails.
pub const UNKNOWN_CATEGORY: &str = "unknown";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_kinds() {
        assert_eq!(EntityKind::all().len(), 6);
    }

    #[test]
    fn kind_display_matches_dir() {
        assert_eq!(format!("{}", EntityKind::Br), "br");
        assert_eq!(format!("{}", EntityKind::Ra), "ra");
    }

    #[test]
    fn recognized_covers_mandatory() {
        for kind in EntityKind::all() {
            for field in kind.mandatory_fields() {
                assert!(
                    kind.recognized_fields().contains(field),
                    "{kind}: mandatory '{field}' not recognized"
                );
            }
        }
    }

    #[test]
    fn iri_is_first_column_everywhere() {
        for kind in EntityKind::all() {
            assert_eq!(kind.columns()[0], "iri", "{kind}");
        }
    }

    #[test]
    fn relation_fields_are_recognized_br_fields() {
        for relation in Relation::all() {
            assert!(
                EntityKind::Br.recognized_fields().contains(&relation.field()),
                "{:?}",
                relation
            );
        }
    }

    #[test]
    fn only_format_is_single_valued() {
        let single: Vec<_> = Relation::all()
            .iter()
            .filter(|r| r.single_valued())
            .collect();
        assert_eq!(single, vec![&Relation::Format]);
    }

    #[test]
    fn categories_exclude_wrapper_and_sentinel() {
        assert_eq!(BR_CATEGORIES.len(), 18);
        assert!(!BR_CATEGORIES.contains(&DOCUMENT_TAG));
        assert!(!BR_CATEGORIES.contains(&UNKNOWN_CATEGORY));
    }
}
