//! Unified search, ranking and filtering for record snapshots.
//!
//! The engine powers two consultation views (inventory items and custody
//! records) through one pipeline: a record snapshot feeds the searchable
//! index; the classifier and suggestion generator consume the query plus
//! index; committed suggestions become active filters; the filtering stage
//! derives the visible record list, sorted on demand.
//!
//! Everything here is synchronous, pure computation over an in-memory
//! snapshot. Derived state is owned by one render cycle and safe to
//! discard; re-invocation simply recomputes.
//!
//! Threading:
//! - [`Engine`] is single-view state and is not meant to be shared across
//!   threads; each view owns its own instance.

mod classify;
mod filter;
mod index;
mod sort;
mod stats;
mod suggest;
mod types;

pub use classify::classify;
pub use filter::filter_records;
pub use index::build_index;
pub use sort::sort_by_field;
pub use stats::EngineStats;
pub use suggest::suggest;
pub use types::{
    Engine, EngineMetrics, IndexedValue, SearchIndex, EXACT_BASE, MAX_SUGGESTIONS,
    MIN_SUGGEST_QUERY, PARTIAL_BASE, RAW_SUGGESTION_CAP, TOP_SCORE,
};

#[cfg(test)]
mod tests {
    use super::*;
    use acervo_types::{ActiveFilter, FieldKind, Origin, Record, SortDirection};

    fn inventory_fixture() -> Vec<Record> {
        vec![
            Record::new()
                .with(FieldKind::Id, "INV-0001")
                .with(FieldKind::Description, "SILLA SECRETARIAL")
                .with(FieldKind::Area, "DIRECCION JURIDICA")
                .with(FieldKind::Director, "LIC. PEREZ")
                .with(FieldKind::Origin, Origin::Inea),
            Record::new()
                .with(FieldKind::Id, "INV-0002")
                .with(FieldKind::Description, "MESA PLEGABLE")
                .with(FieldKind::Area, "DIRECCION JURIDICA")
                .with(FieldKind::Custodian, "GARCIA LOPEZ")
                .with(FieldKind::Origin, Origin::Itea),
            Record::new()
                .with(FieldKind::Id, "INV-0003")
                .with(FieldKind::Description, "SILLA DE VISITA")
                .with(FieldKind::Area, "RECURSOS HUMANOS")
                .with(FieldKind::Origin, Origin::Tlaxcala),
        ]
    }

    #[test]
    fn keystroke_to_commit_flow() {
        let mut engine = Engine::inventory();
        engine.set_records(inventory_fixture());

        // Typing coalesces; only the final query is evaluated.
        engine.queue_query("si");
        engine.queue_query("silla");
        assert!(engine.flush_queries());

        assert_eq!(engine.match_kind(), Some(FieldKind::Description));

        let suggestions = engine.suggestions();
        assert!(!suggestions.is_empty());
        assert!(suggestions.iter().all(|s| s.kind == FieldKind::Description));

        // Committing the first suggestion pins a chip and empties the box.
        engine.commit_suggestion(suggestions[0].clone());
        assert_eq!(engine.query(), "");
        assert_eq!(engine.filters().len(), 1);

        let visible = engine.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].text(FieldKind::Id), Some("INV-0001"));
    }

    #[test]
    fn origin_tag_is_searchable() {
        let mut engine = Engine::inventory();
        engine.set_records(inventory_fixture());
        engine.set_query("itea");
        assert_eq!(engine.visible().len(), 1);
        assert_eq!(engine.visible()[0].text(FieldKind::Id), Some("INV-0002"));
    }

    #[test]
    fn filters_survive_query_changes() {
        let mut engine = Engine::inventory();
        engine.set_records(inventory_fixture());
        engine.add_filter(ActiveFilter::new(Some(FieldKind::Area), "juridica"));

        engine.set_query("silla");
        assert_eq!(engine.visible().len(), 1);

        engine.set_query("");
        assert_eq!(engine.visible().len(), 2);

        // Dismissing the chip does not touch the query.
        engine.set_query("mesa");
        engine.remove_filter(0);
        assert_eq!(engine.query(), "mesa");
        assert_eq!(engine.visible().len(), 1);
    }

    #[test]
    fn visible_sorted_applies_direction() {
        let mut engine = Engine::inventory();
        engine.set_records(inventory_fixture());

        let asc = engine.visible_sorted(FieldKind::Id, SortDirection::Ascending);
        assert_eq!(asc[0].text(FieldKind::Id), Some("INV-0001"));

        let desc = engine.visible_sorted(FieldKind::Id, SortDirection::Descending);
        assert_eq!(desc[0].text(FieldKind::Id), Some("INV-0003"));
    }

    #[test]
    fn empty_engine_degrades_to_empty() {
        let mut engine = Engine::custody();
        engine.set_query("perez");
        assert_eq!(engine.match_kind(), None);
        assert!(engine.suggestions().is_empty());
        assert!(engine.visible().is_empty());
        assert!(engine.stats().is_idle());
    }

    #[test]
    fn metrics_track_operations_and_clear_resets() {
        let mut engine = Engine::inventory();
        engine.set_records(inventory_fixture());
        engine.set_query("silla");
        let _ = engine.suggestions();
        let _ = engine.suggestions();
        engine.add_filter(ActiveFilter::new(Some(FieldKind::Area), "rh"));

        let m = engine.metrics();
        assert_eq!(m.records_indexed, 3);
        assert_eq!(m.queries_executed, 2);
        assert_eq!(m.current_record_count, 3);
        assert_eq!(m.active_filter_count, 1);

        engine.clear();
        let m = engine.metrics();
        assert_eq!(m.records_indexed, 0);
        assert_eq!(m.queries_executed, 0);
        assert_eq!(m.current_record_count, 0);
        assert_eq!(m.active_filter_count, 0);
        assert!(engine.query().is_empty());
    }

    #[test]
    fn replacing_records_rebuilds_derived_state() {
        let mut engine = Engine::inventory();
        engine.set_records(inventory_fixture());
        engine.set_query("silla");
        assert_eq!(engine.suggestions().len(), 2);

        engine.set_records(vec![Record::new()
            .with(FieldKind::Id, "INV-9999")
            .with(FieldKind::Description, "ARCHIVERO")]);
        assert!(engine.suggestions().is_empty());
        assert_eq!(engine.stats().num_records, 1);
        // Cumulative load count keeps both snapshots.
        assert_eq!(engine.metrics().records_indexed, 4);
    }

    #[test]
    fn custody_schema_prioritizes_people() {
        let mut engine = Engine::custody();
        engine.set_records(vec![
            Record::new()
                .with(FieldKind::Id, "F-2021-07")
                .with(FieldKind::Director, "MTRO. SANCHEZ")
                .with(FieldKind::Date, "2021-07-15"),
            Record::new()
                .with(FieldKind::Id, "F-2021-08")
                .with(FieldKind::Custodian, "SANCHEZ RUIZ"),
        ]);
        engine.set_query("sanchez");
        assert_eq!(engine.match_kind(), Some(FieldKind::Director));
        assert_eq!(engine.visible().len(), 2);
    }
}
