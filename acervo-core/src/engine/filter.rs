//! Active filters and record filtering.

use acervo_types::{ActiveFilter, Record, Schema, Suggestion};

use crate::engine::types::Engine;
use crate::text::{fold, fold_into, fold_query, matcher};

/// Filters a record snapshot by committed filters plus free text.
///
/// A record passes when every active filter's term is a case-insensitive
/// substring of the record's corresponding field (vacuous filters - no
/// field, empty term - always pass), AND, if `free_text` is non-empty, at
/// least one of the schema's searchable fields contains it. Filters are
/// AND-combined; free text is OR-combined across fields.
///
/// With no filters and no free text, every record passes.
#[must_use]
pub fn filter_records<'a>(
    schema: &Schema,
    records: &'a [Record],
    filters: &[ActiveFilter],
    free_text: &str,
) -> Vec<&'a Record> {
    // Fold constraint terms once, not per record.
    let terms: Vec<_> = filters
        .iter()
        .filter(|f| !f.is_vacuous())
        .filter_map(|f| f.kind.map(|kind| (kind, fold(&f.term))))
        .collect();
    let free = fold_query(free_text);

    let mut value_buf = String::new();
    records
        .iter()
        .filter(|record| {
            for (kind, term) in &terms {
                let Some(text) = record.text(*kind) else {
                    return false;
                };
                fold_into(text, &mut value_buf);
                if !matcher::contains(&value_buf, term) {
                    return false;
                }
            }

            if free.is_empty() {
                return true;
            }
            schema.searchable().iter().any(|&kind| {
                record.text(kind).is_some_and(|text| {
                    fold_into(text, &mut value_buf);
                    matcher::contains(&value_buf, &free)
                })
            })
        })
        .collect()
}

impl Engine {
    /// Returns the committed active filters in insertion order.
    #[inline(always)]
    #[must_use]
    pub fn filters(&self) -> &[ActiveFilter] {
        &self.filters
    }

    /// Appends a filter to the active sequence.
    pub fn add_filter(&mut self, filter: ActiveFilter) {
        self.filters.push(filter);
    }

    /// Removes the filter at `index`. Out-of-range indices are ignored -
    /// a stale chip dismissal must not panic the view.
    pub fn remove_filter(&mut self, index: usize) {
        if index < self.filters.len() {
            self.filters.remove(index);
        }
    }

    /// Clears the whole filter sequence in one step.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Commits a suggestion: atomically appends one active filter and
    /// clears the free-text query.
    pub fn commit_suggestion(&mut self, suggestion: Suggestion) {
        self.filters
            .push(ActiveFilter::new(Some(suggestion.kind), suggestion.text));
        self.query.clear();
    }

    /// Returns the records that pass the current filters and query.
    #[must_use]
    pub fn visible(&self) -> Vec<&Record> {
        filter_records(&self.schema, &self.records, &self.filters, &self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acervo_types::FieldKind;

    fn rec(area: &str, desc: &str) -> Record {
        Record::new()
            .with(FieldKind::Area, area)
            .with(FieldKind::Description, desc)
    }

    #[test]
    fn filters_and_free_text_combine_as_and_or() {
        let schema = Schema::inventory();
        let records = vec![
            rec("LEGAL", "chair"),
            rec("LEGAL", "table"),
            rec("HR", "chair"),
        ];
        let filters = vec![ActiveFilter::new(Some(FieldKind::Area), "LEGAL")];

        let out = filter_records(&schema, &records, &filters, "chair");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text(FieldKind::Description), Some("chair"));
    }

    #[test]
    fn no_constraints_passes_everything() {
        let schema = Schema::inventory();
        let records = vec![rec("LEGAL", "chair"), rec("HR", "table")];
        assert_eq!(filter_records(&schema, &records, &[], "").len(), 2);
    }

    #[test]
    fn vacuous_filters_pass_everything() {
        let schema = Schema::inventory();
        let records = vec![rec("LEGAL", "chair"), rec("HR", "table")];
        let filters = vec![
            ActiveFilter::new(None, "chair"),
            ActiveFilter::new(Some(FieldKind::Area), ""),
        ];
        assert_eq!(filter_records(&schema, &records, &filters, "").len(), 2);
    }

    #[test]
    fn filter_on_absent_field_rejects() {
        let schema = Schema::inventory();
        let records = vec![rec("LEGAL", "chair"), Record::new()];
        let filters = vec![ActiveFilter::new(Some(FieldKind::Area), "leg")];
        assert_eq!(filter_records(&schema, &records, &filters, "").len(), 1);
    }

    #[test]
    fn filters_are_conjunctive() {
        let schema = Schema::inventory();
        let records = vec![rec("LEGAL", "silla azul"), rec("LEGAL", "mesa azul")];
        let filters = vec![
            ActiveFilter::new(Some(FieldKind::Area), "legal"),
            ActiveFilter::new(Some(FieldKind::Description), "silla"),
        ];
        let out = filter_records(&schema, &records, &filters, "");
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn free_text_matches_any_searchable_field() {
        let schema = Schema::inventory();
        let records = vec![
            Record::new().with(FieldKind::Custodian, "PEREZ LOPEZ"),
            Record::new().with(FieldKind::Description, "mesa de perez"),
            Record::new().with(FieldKind::Description, "mesa lisa"),
        ];
        assert_eq!(filter_records(&schema, &records, &[], "perez").len(), 2);
    }

    #[test]
    fn commit_suggestion_appends_filter_and_clears_query() {
        let mut engine = Engine::inventory();
        engine.set_records(vec![rec("LEGAL", "silla")]);
        engine.set_query("sil");
        let before = engine.filters().len();

        engine.commit_suggestion(Suggestion {
            text: "silla".to_string(),
            kind: FieldKind::Description,
        });

        assert_eq!(engine.filters().len(), before + 1);
        assert_eq!(engine.query(), "");
        assert_eq!(engine.visible().len(), 1);
    }

    #[test]
    fn remove_filter_by_position() {
        let mut engine = Engine::inventory();
        engine.add_filter(ActiveFilter::new(Some(FieldKind::Area), "legal"));
        engine.add_filter(ActiveFilter::new(Some(FieldKind::Description), "silla"));

        engine.remove_filter(0);
        assert_eq!(engine.filters().len(), 1);
        assert_eq!(engine.filters()[0].kind, Some(FieldKind::Description));

        // Stale index: ignored.
        engine.remove_filter(5);
        assert_eq!(engine.filters().len(), 1);

        engine.clear_filters();
        assert!(engine.filters().is_empty());
    }
}
