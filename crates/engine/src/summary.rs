use crate::model::{CanonicalRecord, Category};

/// Row count per category, in order of first appearance.
///
/// On sorter output this is category-label order.
pub fn summarize(records: &[CanonicalRecord]) -> Vec<(Category, usize)> {
    let mut counts: Vec<(Category, usize)> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|(c, _)| *c == record.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((record.category, 1)),
        }
    }
    counts
}
