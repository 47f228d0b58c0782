use std::{cmp::Ordering, fmt::Debug};

use super::sort::ResolvedSortTerm;

/// Entities that can be ordered by a typed field selector.
pub trait Sortable {
    type Field: Copy + Debug + Send + Sync + 'static;

    /// Natural ascending order of `self` against `other` on one field.
    fn compare_by(&self, other: &Self, field: Self::Field) -> Ordering;
}

/// Compares two items term by term; later terms only break ties of earlier ones.
pub fn compare<T: Sortable>(left: &T, right: &T, terms: &[ResolvedSortTerm<T::Field>]) -> Ordering {
    terms.iter().fold(Ordering::Equal, |ordering, term| {
        ordering.then_with(|| {
            let ordering = left.compare_by(right, term.field);
            if term.descending {
                ordering.reverse()
            } else {
                ordering
            }
        })
    })
}

/// Stable multi-key sort. Items equal on every term keep their input order.
pub fn apply_sort<T: Sortable>(mut items: Vec<T>, terms: &[ResolvedSortTerm<T::Field>]) -> Vec<T> {
    if !terms.is_empty() {
        items.sort_by(|left, right| compare(left, right, terms));
    }
    items
}
