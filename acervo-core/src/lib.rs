//! Unified search, ranking and filtering engine for inventory and
//! custody-record ("resguardo") consultation.
//!
//! The crate is organized in three layers:
//!
//! - [`text`]: case folding and substring matching primitives
//! - [`engine`]: the searchable index, match-type classifier, suggestion
//!   generator, active-filter store and filtering/sorting stages
//! - [`latest`]: latest-value coalescing for rapid query updates
//!
//! The typical entry point is [`Engine`], a per-view controller owning a
//! record snapshot and all transient derived state:
//!
//! ```
//! use acervo_core::Engine;
//! use acervo_types::{FieldKind, Record};
//!
//! let mut engine = Engine::inventory();
//! engine.set_records(vec![
//!     Record::new()
//!         .with(FieldKind::Id, "INV-0001")
//!         .with(FieldKind::Description, "SILLA SECRETARIAL"),
//! ]);
//!
//! engine.set_query("silla");
//! let suggestions = engine.suggestions();
//! assert_eq!(suggestions.len(), 1);
//!
//! engine.commit_suggestion(suggestions[0].clone());
//! assert_eq!(engine.visible().len(), 1);
//! ```

#![warn(missing_docs)]

pub mod engine;
pub mod latest;
pub mod text;

pub use engine::{
    build_index, classify, filter_records, sort_by_field, suggest, Engine, EngineMetrics,
    EngineStats, SearchIndex,
};
pub use latest::Latest;
