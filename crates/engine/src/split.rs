// "N. Title" splitting

/// Split a problem name on its first `.` into `(title, numeric_prefix)`.
///
/// The prefix is returned as text and is not checked to be a number. Names
/// without a `.` come back unchanged with no prefix.
pub fn split_name(problem_name: Option<&str>) -> (String, Option<String>) {
    let name = match problem_name {
        Some(n) if !n.is_empty() => n,
        _ => return (String::new(), None),
    };

    match name.split_once('.') {
        Some((prefix, title)) => (title.trim().to_string(), Some(prefix.trim().to_string())),
        None => (name.to_string(), None),
    }
}

/// The `Problem No` for a row: the name's numeric prefix when it has one,
/// otherwise the raw problem number (empty when that is absent too).
pub fn resolve_problem_no(problem_name: Option<&str>, fallback: Option<i64>) -> String {
    match split_name(problem_name).1 {
        Some(prefix) => prefix,
        None => fallback.map(|n| n.to_string()).unwrap_or_default(),
    }
}
