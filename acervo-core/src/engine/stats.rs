//! Engine statistics.

use crate::engine::types::Engine;

/// A snapshot of engine statistics.
#[derive(Debug, Clone, Copy)]
pub struct EngineStats {
    /// Number of records in the current snapshot.
    pub num_records: usize,
    /// Number of indexed fields with at least one value.
    pub indexed_fields: usize,
    /// Total number of indexed values across all fields.
    pub indexed_values: usize,
    /// Number of committed active filters.
    pub active_filters: usize,
}

impl Engine {
    /// Returns engine statistics, rebuilding the index first if stale.
    pub fn stats(&mut self) -> EngineStats {
        if self.needs_rebuild {
            self.rebuild_index();
        }
        EngineStats {
            num_records: self.records.len(),
            indexed_fields: self.index.field_count(),
            indexed_values: self.index.value_count(),
            active_filters: self.filters.len(),
        }
    }
}

impl EngineStats {
    /// Returns `true` if the engine holds no records and no filters.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.num_records == 0 && self.active_filters == 0
    }
}

impl core::fmt::Display for EngineStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} records, {} indexed fields, {} indexed values, {} active filters",
            self.num_records, self.indexed_fields, self.indexed_values, self.active_filters
        )
    }
}
