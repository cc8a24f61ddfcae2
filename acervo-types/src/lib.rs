//! Core types for the acervo search engine.
//!
//! This crate provides the fundamental types that are shared across
//! the acervo ecosystem. Keeping types separate ensures:
//!
//! - **Cross-crate compatibility**: Core and CLI share the same types
//! - **Clean boundaries**: No circular dependencies between crates
//! - **Stable wire shapes**: Records serialize as flat JSON objects

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Upstream source a record was merged from.
///
/// Inventory consultation unifies three upstream tables; each record is
/// tagged with the table it came from so the origin remains a searchable,
/// filterable field after the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Origin {
    /// National institute table.
    Inea,
    /// State institute table.
    Itea,
    /// State government table.
    Tlaxcala,
}

impl Origin {
    /// Returns the canonical uppercase tag for this origin.
    #[inline(always)]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Origin::Inea => "INEA",
            Origin::Itea => "ITEA",
            Origin::Tlaxcala => "TLAXCALA",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical record field.
///
/// Both instantiations (inventory items and custody records) conform to
/// "named field → searchable value, possibly absent". The same enumeration
/// covers the union of their field sets; a [`Schema`] decides which fields
/// participate in each view and in what priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Inventory number or custody folio - the primary identifier.
    Id,
    /// Free-text description of the asset.
    Description,
    /// Organizational area the asset belongs to.
    Area,
    /// Final user / directing officer (usufinal, director).
    Director,
    /// Person holding custody (resguardante).
    Custodian,
    /// Budget rubric category.
    Rubro,
    /// Physical condition of the asset.
    Estado,
    /// Administrative status.
    Estatus,
    /// Upstream source tag, see [`Origin`].
    Origin,
    /// Custody record date (fecha).
    Date,
}

impl FieldKind {
    /// Human-readable label, used by search-box badges and filter chips.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FieldKind::Id => "identifier",
            FieldKind::Description => "description",
            FieldKind::Area => "area",
            FieldKind::Director => "director",
            FieldKind::Custodian => "custodian",
            FieldKind::Rubro => "rubro",
            FieldKind::Estado => "estado",
            FieldKind::Estatus => "estatus",
            FieldKind::Origin => "origin",
            FieldKind::Date => "date",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a field name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field name: {0:?}")]
pub struct ParseFieldError(pub String);

impl FromStr for FieldKind {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" | "id_inv" | "folio" => Ok(FieldKind::Id),
            "description" | "descripcion" => Ok(FieldKind::Description),
            "area" => Ok(FieldKind::Area),
            "director" | "usufinal" => Ok(FieldKind::Director),
            "custodian" | "resguardante" => Ok(FieldKind::Custodian),
            "rubro" => Ok(FieldKind::Rubro),
            "estado" => Ok(FieldKind::Estado),
            "estatus" => Ok(FieldKind::Estatus),
            "origin" | "origen" => Ok(FieldKind::Origin),
            "date" | "fecha" => Ok(FieldKind::Date),
            other => Err(ParseFieldError(other.to_string())),
        }
    }
}

/// A single field value.
///
/// Records carry a small fixed set of scalar types. Text and origin tags
/// are searchable; numbers participate in sorting (numerically) but not in
/// substring search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integer value (e.g., a year or quantity column).
    Number(i64),
    /// Upstream origin tag.
    Origin(Origin),
    /// Plain text value.
    Text(String),
}

impl FieldValue {
    /// Returns the searchable text form of this value, if it has one.
    ///
    /// Empty text is treated as absent - it never matches and is never
    /// indexed. Numbers have no searchable text form.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) if !s.is_empty() => Some(s),
            FieldValue::Text(_) => None,
            FieldValue::Origin(o) => Some(o.as_str()),
            FieldValue::Number(_) => None,
        }
    }

    /// Returns the numeric form, if this is a number.
    #[inline(always)]
    #[must_use]
    pub const fn number(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<Origin> for FieldValue {
    fn from(o: Origin) -> Self {
        FieldValue::Origin(o)
    }
}

/// One inventory item or custody-record entry.
///
/// A flat field → value mapping. Records are immutable snapshots from the
/// engine's perspective; the data-fetch layer supplies them wholesale and
/// the engine only derives transient state from them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: FxHashMap<FieldKind, FieldValue>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field assignment.
    #[must_use]
    pub fn with(mut self, kind: FieldKind, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(kind, value.into());
        self
    }

    /// Sets a field value.
    pub fn set(&mut self, kind: FieldKind, value: impl Into<FieldValue>) {
        self.fields.insert(kind, value.into());
    }

    /// Returns the raw value of a field, if present.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, kind: FieldKind) -> Option<&FieldValue> {
        self.fields.get(&kind)
    }

    /// Returns the non-empty searchable text of a field.
    ///
    /// Absent fields, empty strings and numeric values all yield `None`,
    /// so callers never distinguish "missing" from "unsearchable".
    #[inline(always)]
    #[must_use]
    pub fn text(&self, kind: FieldKind) -> Option<&str> {
        self.fields.get(&kind).and_then(FieldValue::text)
    }

    /// Returns the number of populated fields.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is populated.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A committed search constraint, shown as a removable chip.
///
/// `kind` is `None` for the "unspecified" chip the UI can produce when a
/// raw query is pinned without a classified field; such filters (and
/// filters with an empty term) are vacuously satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilter {
    /// Field the term is constrained to, or `None` for unspecified.
    pub kind: Option<FieldKind>,
    /// Case-insensitive substring the field must contain.
    pub term: String,
}

impl ActiveFilter {
    /// Creates a new filter.
    #[must_use]
    pub fn new(kind: Option<FieldKind>, term: impl Into<String>) -> Self {
        Self {
            kind,
            term: term.into(),
        }
    }

    /// Returns `true` if this filter constrains nothing.
    #[inline(always)]
    #[must_use]
    pub fn is_vacuous(&self) -> bool {
        self.kind.is_none() || self.term.is_empty()
    }
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Some(kind) => write!(f, "{}: {}", kind, self.term),
            None => write!(f, "any: {}", self.term),
        }
    }
}

/// One candidate autocomplete entry.
///
/// Ephemeral - recomputed on every query change, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The value as it appears in the record (original casing).
    pub text: String,
    /// Field the value was drawn from.
    pub kind: FieldKind,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.kind)
    }
}

/// Sort direction for the visible record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first. Absent values still sort last.
    Descending,
}

/// Maximum number of classifier tiers a schema may declare.
///
/// Tier `i` scores exact = 6 − i and substring = 4 − i; with more than four
/// tiers a substring match would score zero and never register.
pub const MAX_TIERS: usize = 4;

/// Field orderings for one instantiation of the engine.
///
/// Inventory items and custody records share the engine but differ in which
/// fields exist, which the classifier prioritizes, and which free text
/// searches. A `Schema` pins those orderings; every list is fixed for the
/// lifetime of the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    tiers: Vec<FieldKind>,
    fallback: Vec<FieldKind>,
    indexed: Vec<FieldKind>,
    searchable: Vec<FieldKind>,
}

impl Schema {
    /// Creates a schema from explicit field orderings.
    ///
    /// `tiers` is the classifier's priority cascade (at most [`MAX_TIERS`]),
    /// `fallback` the unscored second-pass fields, `indexed` the
    /// index/suggestion field order, `searchable` the free-text OR set.
    #[must_use]
    pub fn new(
        tiers: Vec<FieldKind>,
        fallback: Vec<FieldKind>,
        indexed: Vec<FieldKind>,
        searchable: Vec<FieldKind>,
    ) -> Self {
        debug_assert!(
            tiers.len() <= MAX_TIERS,
            "at most {} classifier tiers supported",
            MAX_TIERS
        );
        Self {
            tiers,
            fallback,
            indexed,
            searchable,
        }
    }

    /// Schema for the unified inventory consultation view.
    ///
    /// Identifier outranks area, then the final-user field, then the
    /// description; person/categorical leftovers are fallback-only.
    #[must_use]
    pub fn inventory() -> Self {
        Self::new(
            vec![
                FieldKind::Id,
                FieldKind::Area,
                FieldKind::Director,
                FieldKind::Description,
            ],
            vec![
                FieldKind::Custodian,
                FieldKind::Rubro,
                FieldKind::Estado,
                FieldKind::Estatus,
            ],
            vec![
                FieldKind::Id,
                FieldKind::Description,
                FieldKind::Area,
                FieldKind::Director,
                FieldKind::Custodian,
                FieldKind::Rubro,
            ],
            vec![
                FieldKind::Id,
                FieldKind::Description,
                FieldKind::Area,
                FieldKind::Director,
                FieldKind::Custodian,
                FieldKind::Rubro,
                FieldKind::Estado,
                FieldKind::Estatus,
                FieldKind::Origin,
            ],
        )
    }

    /// Schema for the custody-record (resguardo) consultation view.
    ///
    /// The folio plays the identifier role; people fields outrank the
    /// description since resguardos are usually looked up by holder.
    #[must_use]
    pub fn custody() -> Self {
        Self::new(
            vec![
                FieldKind::Id,
                FieldKind::Director,
                FieldKind::Custodian,
                FieldKind::Description,
            ],
            vec![FieldKind::Area, FieldKind::Estatus],
            vec![
                FieldKind::Id,
                FieldKind::Director,
                FieldKind::Custodian,
                FieldKind::Area,
            ],
            vec![
                FieldKind::Id,
                FieldKind::Director,
                FieldKind::Custodian,
                FieldKind::Area,
                FieldKind::Description,
                FieldKind::Date,
            ],
        )
    }

    /// Classifier priority cascade, highest tier first.
    #[inline(always)]
    #[must_use]
    pub fn tiers(&self) -> &[FieldKind] {
        &self.tiers
    }

    /// Unscored fallback fields for the classifier's second pass.
    #[inline(always)]
    #[must_use]
    pub fn fallback(&self) -> &[FieldKind] {
        &self.fallback
    }

    /// Indexed fields in suggestion priority order.
    #[inline(always)]
    #[must_use]
    pub fn indexed(&self) -> &[FieldKind] {
        &self.indexed
    }

    /// Fields free text is OR-matched against.
    #[inline(always)]
    #[must_use]
    pub fn searchable(&self) -> &[FieldKind] {
        &self.searchable
    }
}
