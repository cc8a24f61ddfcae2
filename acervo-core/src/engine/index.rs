//! Searchable index building.

use acervo_types::{Record, Schema};
use rustc_hash::FxHashMap;

use crate::engine::types::{Engine, IndexedValue, SearchIndex};
use crate::text::fold;

/// Builds a searchable index from a record-set snapshot.
///
/// For each field in the schema's indexed list, collects the non-empty
/// searchable values of every record in record order. Duplicates are kept
/// (deduplication happens at suggestion time), whitespace is preserved, and
/// a missing field key is simply absent for that record.
///
/// Pure and cheap enough to recompute on every record-set change:
/// O(records × indexed fields), one combined pass.
#[must_use]
pub fn build_index(schema: &Schema, records: &[Record]) -> SearchIndex {
    let mut fields: FxHashMap<_, Vec<IndexedValue>> = FxHashMap::default();
    for &kind in schema.indexed() {
        fields.insert(kind, Vec::new());
    }

    for record in records {
        for &kind in schema.indexed() {
            if let Some(text) = record.text(kind) {
                // Entry always exists: seeded from the schema above.
                if let Some(values) = fields.get_mut(&kind) {
                    values.push(IndexedValue {
                        text: text.to_string(),
                        folded: fold(text),
                    });
                }
            }
        }
    }

    SearchIndex { fields }
}

impl Engine {
    /// Replaces the record snapshot.
    ///
    /// The index is marked stale and rebuilt lazily on the next read, so
    /// bulk loads interleaved with state changes pay for one rebuild.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records_indexed += records.len() as u64;
        self.records = records;
        self.needs_rebuild = true;
    }

    /// Returns the current index, rebuilding it first if stale.
    pub fn index(&mut self) -> &SearchIndex {
        if self.needs_rebuild {
            self.rebuild_index();
        }
        &self.index
    }

    pub(crate) fn rebuild_index(&mut self) {
        self.index = build_index(&self.schema, &self.records);
        self.needs_rebuild = false;
        tracing::debug!(
            records = self.records.len(),
            fields = self.index.field_count(),
            values = self.index.value_count(),
            "rebuilt searchable index"
        );
    }
}
