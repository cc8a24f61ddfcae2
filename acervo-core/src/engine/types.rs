//! Engine types and constants.

use acervo_types::{ActiveFilter, FieldKind, Record, Schema};
use rustc_hash::FxHashMap;

use crate::latest::Latest;

/// Minimum query length (in characters) before suggestions are produced.
pub const MIN_SUGGEST_QUERY: usize = 2;

/// Hard cap on raw suggestion candidates collected before ranking.
///
/// Collection stops dead at this count, even if better-ranked values exist
/// later in lower-priority fields. The cap-then-sort order is part of the
/// observable contract; see [`crate::engine::suggest`].
pub const RAW_SUGGESTION_CAP: usize = 10;

/// Maximum number of suggestions returned after ranking.
pub const MAX_SUGGESTIONS: usize = 7;

/// Base score for an exact match on the top classifier tier.
///
/// Tier `i` scores `EXACT_BASE - i` for exact and `PARTIAL_BASE - i` for
/// substring matches. The bands interleave deliberately: a tier-1 substring
/// match (4) loses to a tier-2 exact match (5).
pub const EXACT_BASE: u8 = 6;

/// Base score for a substring match on the top classifier tier.
pub const PARTIAL_BASE: u8 = 4;

/// Highest possible classifier score; scanning short-circuits here.
pub const TOP_SCORE: u8 = EXACT_BASE;

/// One indexed field value: original text plus its folded form.
///
/// Folding is done once at index build so per-keystroke suggestion scans
/// compare bytes without re-lowercasing record text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedValue {
    /// The value as it appears in the record.
    pub text: String,
    /// Lowercased form used for matching and deduplication.
    pub folded: String,
}

/// Per-field value arrays derived from one record-set snapshot.
///
/// For each indexed field, the non-empty values of every record in record
/// order - no deduplication, no trimming. Always rebuilt wholesale from a
/// snapshot, never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    pub(crate) fields: FxHashMap<FieldKind, Vec<IndexedValue>>,
}

impl SearchIndex {
    /// Returns the indexed values for a field, empty if the field is not
    /// indexed or no record populates it.
    #[inline(always)]
    #[must_use]
    pub fn values(&self, kind: FieldKind) -> &[IndexedValue] {
        self.fields.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Returns the number of indexed fields with at least one value.
    #[inline(always)]
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.values().filter(|v| !v.is_empty()).count()
    }

    /// Returns the total number of indexed values across all fields.
    #[inline(always)]
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }
}

/// Unified search, ranking and filtering engine.
///
/// Owns a read-only snapshot of records plus the transient state derived
/// from it (index, query, active filters). All derived state is safe to
/// discard and rebuild at any time; the engine is intentionally not shared
/// across threads - one instance per view.
pub struct Engine {
    pub(crate) schema: Schema,
    pub(crate) records: Vec<Record>,
    pub(crate) index: SearchIndex,
    pub(crate) filters: Vec<ActiveFilter>,
    pub(crate) query: String,
    pub(crate) deferred: Latest<String>,
    pub(crate) needs_rebuild: bool,
    /// Total number of suggestion/classification queries evaluated.
    pub(crate) query_count: u64,
    /// Total number of records ever loaded into this engine.
    pub(crate) records_indexed: u64,
}

impl Engine {
    /// Creates a new, empty engine for the given schema.
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            records: Vec::new(),
            index: SearchIndex::default(),
            filters: Vec::new(),
            query: String::new(),
            deferred: Latest::new(),
            needs_rebuild: false,
            query_count: 0,
            records_indexed: 0,
        }
    }

    /// Convenience constructor for the inventory consultation view.
    #[must_use]
    pub fn inventory() -> Self {
        Self::new(Schema::inventory())
    }

    /// Convenience constructor for the custody-record consultation view.
    #[must_use]
    pub fn custody() -> Self {
        Self::new(Schema::custody())
    }

    /// Returns the schema this engine was built with.
    #[inline(always)]
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the current record snapshot.
    #[inline(always)]
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records in the snapshot.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the snapshot holds no records.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the current free-text query.
    #[inline(always)]
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Sets the free-text query immediately.
    ///
    /// For coalesced updates under rapid typing, see
    /// [`Engine::queue_query`] and [`Engine::flush_queries`].
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Removes all records, filters and derived state.
    pub fn clear(&mut self) {
        self.records.clear();
        self.index = SearchIndex::default();
        self.filters.clear();
        self.query.clear();
        self.deferred.clear();
        self.needs_rebuild = false;
        self.query_count = 0;
        self.records_indexed = 0;
    }

    /// Returns basic metrics about the engine's operation.
    #[inline(always)]
    #[must_use]
    pub fn metrics(&self) -> EngineMetrics {
        EngineMetrics {
            records_indexed: self.records_indexed,
            queries_executed: self.query_count,
            current_record_count: self.records.len() as u64,
            active_filter_count: self.filters.len() as u64,
        }
    }
}

/// Basic operational metrics for the engine.
#[derive(Debug, Clone, Copy)]
pub struct EngineMetrics {
    /// Total number of records loaded (including replaced snapshots).
    pub records_indexed: u64,
    /// Total number of queries evaluated.
    pub queries_executed: u64,
    /// Current number of records in the snapshot.
    pub current_record_count: u64,
    /// Current number of committed active filters.
    pub active_filter_count: u64,
}
