use std::cmp::Ordering;

use tracing::info;

use crate::classify::classify;
use crate::model::{CanonicalRecord, RawRecord};
use crate::options::PipelineOptions;
use crate::split::{resolve_problem_no, split_name};

/// Derive the export row for one raw record.
pub fn canonicalize(record: RawRecord) -> CanonicalRecord {
    let category = classify(record.technique.as_deref());
    let problem_name = record.problem_name.as_deref();
    let (title, _) = split_name(problem_name);
    let problem_no = resolve_problem_no(problem_name, record.problem_number);

    CanonicalRecord {
        category,
        problem_no,
        link: format_link(record.link),
        problem_name: title,
        technique: record.technique,
        completed: record.completed,
    }
}

/// Non-empty links get one trailing space. Empty and absent links are
/// returned untouched.
pub fn format_link(link: Option<String>) -> Option<String> {
    link.map(|l| if l.is_empty() { l } else { format!("{l} ") })
}

/// Numeric value of a `Problem No`, or `None` when it does not parse.
/// `NaN` is treated as not parsing.
pub fn sort_key(problem_no: &str) -> Option<f64> {
    problem_no
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| !n.is_nan())
}

/// Numbers ascending, then every `None`.
fn compare_keys(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Canonicalize, order by (category label, numeric problem no) and keep the
/// first `options.target` rows.
///
/// The sort is stable: rows with equal keys keep their input order.
pub fn normalize_and_sort(records: Vec<RawRecord>, options: &PipelineOptions) -> Vec<CanonicalRecord> {
    let mut keyed: Vec<(Option<f64>, CanonicalRecord)> = records
        .into_iter()
        .map(|r| {
            let canonical = canonicalize(r);
            (sort_key(&canonical.problem_no), canonical)
        })
        .collect();

    keyed.sort_by(|(ka, a), (kb, b)| {
        a.category
            .label()
            .cmp(b.category.label())
            .then_with(|| compare_keys(*ka, *kb))
    });

    if keyed.len() > options.target {
        info!(from = keyed.len(), to = options.target, "truncating export");
        keyed.truncate(options.target);
    }

    keyed.into_iter().map(|(_, record)| record).collect()
}
