//! Match-type classification.
//!
//! Given a free-text query, decide which field the user is most likely
//! targeting. The result labels the search box and biases suggestion
//! ordering; it never filters anything by itself.

use acervo_types::{FieldKind, Record, Schema};

use crate::engine::types::{Engine, EXACT_BASE, PARTIAL_BASE, TOP_SCORE};
use crate::text::{fold_into, fold_query, matcher};

/// Classifies a query against a record set.
///
/// Returns `None` for an empty/whitespace query or an empty record set.
///
/// The primary pass walks records in order. Per record, the schema's tier
/// cascade has `else if` semantics: only the first *matching* tier is
/// scored, even when a lower tier of the same record would score higher.
/// Tier `i` scores exact = 6 − i, substring = 4 − i; the bands interleave
/// so a second-tier exact match (5) outranks a first-tier substring match
/// (4). The running best is replaced only on a strictly greater score and
/// the scan stops early at the maximum score of 6.
///
/// If the primary pass finds nothing, a second pass walks the schema's
/// fallback fields in order and returns the first field any record matches.
/// The fallback pass is first-found rather than best-scored; the asymmetry
/// is part of the observable contract.
#[must_use]
pub fn classify(schema: &Schema, query: &str, records: &[Record]) -> Option<FieldKind> {
    if records.is_empty() {
        return None;
    }
    let query = fold_query(query);
    if query.is_empty() {
        return None;
    }

    let mut best: Option<(FieldKind, u8)> = None;
    let mut value_buf = String::new();

    'records: for record in records {
        for (tier, &kind) in schema.tiers().iter().enumerate() {
            let Some(text) = record.text(kind) else {
                continue;
            };
            fold_into(text, &mut value_buf);
            if !matcher::contains(&value_buf, &query) {
                continue;
            }

            let base = if value_buf == query {
                EXACT_BASE
            } else {
                PARTIAL_BASE
            };
            let score = base - tier as u8;
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((kind, score));
            }
            if score == TOP_SCORE {
                break 'records;
            }
            // Cascade: the first matching tier settles this record.
            break;
        }
    }

    if let Some((kind, _)) = best {
        return Some(kind);
    }

    // Fallback pass: first field, first record, no scoring.
    for &kind in schema.fallback() {
        for record in records {
            if let Some(text) = record.text(kind) {
                fold_into(text, &mut value_buf);
                if matcher::contains(&value_buf, &query) {
                    return Some(kind);
                }
            }
        }
    }

    None
}

impl Engine {
    /// Classifies the engine's current query against its record snapshot.
    #[must_use]
    pub fn match_kind(&self) -> Option<FieldKind> {
        classify(&self.schema, &self.query, &self.records)
    }
}
