//! Stable sorting of the visible record list.

use core::cmp::Ordering;

use acervo_types::{FieldKind, FieldValue, Record, SortDirection};

use crate::engine::types::Engine;

/// Stable-sorts records by one field.
///
/// Absent values sort after all defined values regardless of direction;
/// equal values keep their relative order. Numbers compare numerically,
/// everything else compares lexicographically on its text form.
pub fn sort_by_field(rows: &mut [&Record], kind: FieldKind, direction: SortDirection) {
    rows.sort_by(|a, b| {
        match (a.get(kind), b.get(kind)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => {
                let ord = compare_values(x, y);
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            }
        }
    });
}

fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    if let (Some(x), Some(y)) = (a.number(), b.number()) {
        return x.cmp(&y);
    }
    sort_text(a).cmp(&sort_text(b))
}

/// Textual form used for mixed-type comparison.
fn sort_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s.clone(),
        FieldValue::Origin(o) => o.as_str().to_string(),
        FieldValue::Number(n) => n.to_string(),
    }
}

impl Engine {
    /// Returns the visible records sorted by `kind` in `direction`.
    #[must_use]
    pub fn visible_sorted(&self, kind: FieldKind, direction: SortDirection) -> Vec<&Record> {
        let mut rows = self.visible();
        sort_by_field(&mut rows, kind, direction);
        rows
    }
}
