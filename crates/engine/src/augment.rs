use tracing::{debug, info, warn};

use crate::curated::CURATED;
use crate::model::RawRecord;
use crate::options::PipelineOptions;

/// Technique label given to every filler record.
pub const FILLER_TECHNIQUE: &str = "Various";

/// Append the curated table, then filler records until `options.target` rows
/// exist.
///
/// Output order is source rows, curated rows, filler rows. Nothing is
/// deduplicated and nothing is removed: a source larger than the target is
/// left for the sorter to truncate.
pub fn augment(mut records: Vec<RawRecord>, options: &PipelineOptions) -> Vec<RawRecord> {
    let source_len = records.len();
    records.extend(CURATED.iter().map(|p| p.to_record()));

    let missing = options.target.saturating_sub(records.len());
    debug!(source = source_len, curated = CURATED.len(), "appended curated problems");

    if missing > 0 {
        if options.last_filler_number().is_none() {
            warn!(start = options.synthetic_start, "filler numbers overflow, extra rows left unnumbered");
        }
        info!(count = missing, start = options.synthetic_start, "adding filler problems");
        records.extend(filler_records(options.synthetic_start, missing));
    }

    records
}

/// `count` placeholder records numbered from `start`. The k-th record (1-based)
/// is named "{start + k - 1}. Extra Problem {k}". Records whose number would
/// not fit in an `i64` are left unnumbered.
pub fn filler_records(start: i64, count: usize) -> impl Iterator<Item = RawRecord> {
    (1..=count).map(move |k| {
        let number = i64::try_from(k - 1).ok().and_then(|offset| start.checked_add(offset));
        let name = match number {
            Some(n) => format!("{n}. Extra Problem {k}"),
            None => format!("Extra Problem {k}"),
        };
        RawRecord {
            problem_number: number,
            problem_name: Some(name),
            technique: Some(FILLER_TECHNIQUE.to_string()),
            completed: None,
            link: Some(format!("https://leetcode.com/problems/extra-problem-{k}/")),
        }
    })
}
