//! Autocomplete suggestion generation.

use acervo_types::{FieldKind, Schema, Suggestion};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::engine::types::{
    Engine, IndexedValue, SearchIndex, MAX_SUGGESTIONS, MIN_SUGGEST_QUERY, RAW_SUGGESTION_CAP,
};
use crate::text::{fold_query, matcher};

/// Generates ranked autocomplete suggestions for a query.
///
/// Returns an empty list for queries shorter than two characters.
///
/// Candidates are collected field by field in the schema's indexed order,
/// deduplicated on `(field, folded value)`, and capped hard at
/// [`RAW_SUGGESTION_CAP`] - collection breaks out of both loops at the cap,
/// so a lower-priority field can be starved entirely. Only then is the
/// collected set stable-sorted (prefix matches first, ties keep
/// field-priority/first-occurrence order) and truncated to
/// [`MAX_SUGGESTIONS`]. Sorting after the cap rather than before it is a
/// preserved contract: the result is not a globally optimal top seven.
#[must_use]
pub fn suggest(schema: &Schema, query: &str, index: &SearchIndex) -> Vec<Suggestion> {
    let query = fold_query(query);
    if query.chars().count() < MIN_SUGGEST_QUERY {
        return Vec::new();
    }

    let mut seen: FxHashSet<(FieldKind, &str)> = FxHashSet::default();
    let mut collected: SmallVec<[(&IndexedValue, FieldKind); RAW_SUGGESTION_CAP]> =
        SmallVec::new();

    'fields: for &kind in schema.indexed() {
        for value in index.values(kind) {
            if !matcher::contains(&value.folded, &query) {
                continue;
            }
            if !seen.insert((kind, value.folded.as_str())) {
                continue;
            }
            collected.push((value, kind));
            if collected.len() == RAW_SUGGESTION_CAP {
                break 'fields;
            }
        }
    }

    // Stable: ties keep field-priority, then first-occurrence order.
    collected.sort_by_key(|(value, _)| !matcher::starts_with(&value.folded, &query));
    collected.truncate(MAX_SUGGESTIONS);

    collected
        .into_iter()
        .map(|(value, kind)| Suggestion {
            text: value.text.clone(),
            kind,
        })
        .collect()
}

impl Engine {
    /// Generates suggestions for the engine's current query.
    ///
    /// Rebuilds the index first if the record snapshot changed. Counts as
    /// one executed query in [`Engine::metrics`].
    pub fn suggestions(&mut self) -> Vec<Suggestion> {
        self.query_count += 1;
        if self.needs_rebuild {
            self.rebuild_index();
        }
        let out = suggest(&self.schema, &self.query, &self.index);
        tracing::trace!(query = %self.query, count = out.len(), "generated suggestions");
        out
    }
}
