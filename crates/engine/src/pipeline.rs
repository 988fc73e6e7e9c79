use tracing::debug;

use crate::augment::augment;
use crate::model::{CanonicalRecord, RawRecord};
use crate::normalize::normalize_and_sort;
use crate::options::PipelineOptions;

/// Run the whole pipeline: append curated and filler rows, then classify,
/// split, order and cap.
///
/// The result has exactly `min(source + curated + filler, target)` rows, which
/// is `target` whenever the source is no larger than the target.
pub fn organize(records: Vec<RawRecord>, options: &PipelineOptions) -> Vec<CanonicalRecord> {
    let augmented = augment(records, options);
    debug!(rows = augmented.len(), "augmented record set");
    normalize_and_sort(augmented, options)
}
