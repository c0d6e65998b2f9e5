use chrono::NaiveDate;

/// Reports whether a dated sequence runs newest-to-oldest.
///
/// Deliberately compares only the first and last dates. This is the cheap
/// endpoint heuristic callers expect when normalizing provider output, not a
/// full monotonicity scan; behavior on shuffled input is whatever the two
/// endpoints say. Empty and single-element sequences read as not descending.
pub fn is_descending_by_date<T, F>(records: &[T], date_of: F) -> bool
where
    F: Fn(&T) -> NaiveDate,
{
    match (records.first(), records.last()) {
        (Some(first), Some(last)) if records.len() > 1 => date_of(first) > date_of(last),
        _ => false,
    }
}

/// Reverses the sequence in place when the endpoint check says it is
/// descending, so fusion inputs read oldest-first.
pub fn normalize_ascending<T, F>(records: &mut [T], date_of: F)
where
    F: Fn(&T) -> NaiveDate,
{
    if is_descending_by_date(records, &date_of) {
        records.reverse();
    }
}
