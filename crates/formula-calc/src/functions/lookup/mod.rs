//! Lookup helpers built on [`LookupComparer`].
//!
//! The comparer only reports ordering; choosing the closest bound for the approximate modes is
//! done here.

use std::cmp::Ordering;
use std::mem::discriminant;

use crate::functions::compare::{LookupComparer, LookupMatchMode};
use crate::{ErrorKind, Value};

/// Returns the 0-based index of the candidate selected by `mode`, or `#N/A`.
///
/// - Exact and wildcard modes return the first equal candidate.
/// - `ExactMatchOrNextSmaller` returns the first exact match, otherwise the largest candidate
///   below `lookup` among candidates of the same type.
/// - `ExactMatchOrNextLarger` is the mirror image.
///
/// An error `lookup` value propagates. Candidates are scanned linearly and need not be sorted.
pub fn match_position(
    lookup: &Value,
    candidates: &[Value],
    mode: LookupMatchMode,
) -> Result<usize, ErrorKind> {
    if let Value::Error(e) = lookup {
        return Err(*e);
    }

    let comparer = LookupComparer::new(mode);
    let wanted = match mode {
        LookupMatchMode::ExactMatch | LookupMatchMode::Wildcard => {
            let prepared = comparer.prepare(lookup);
            return candidates
                .iter()
                .position(|c| prepared.equals(c))
                .ok_or(ErrorKind::NA);
        }
        LookupMatchMode::ExactMatchOrNextSmaller => Ordering::Less,
        LookupMatchMode::ExactMatchOrNextLarger => Ordering::Greater,
    };

    let mut best: Option<usize> = None;
    for (idx, candidate) in candidates.iter().enumerate() {
        if discriminant(candidate) != discriminant(lookup) {
            continue;
        }
        match comparer.compare(candidate, lookup) {
            Ordering::Equal => return Ok(idx),
            ord if ord == wanted => {
                // Keep the candidate closest to `lookup`; ties keep the earliest.
                let closer = best.map_or(true, |b| {
                    comparer.compare(candidate, &candidates[b]) == wanted.reverse()
                });
                if closer {
                    best = Some(idx);
                }
            }
            _ => {}
        }
    }
    best.ok_or(ErrorKind::NA)
}

/// XMATCH(lookup_value, lookup_array, [match_mode]) searching first-to-last.
///
/// Returns a 1-based position.
pub fn xmatch(
    lookup_value: &Value,
    lookup_array: &[Value],
    mode: LookupMatchMode,
) -> Result<i32, ErrorKind> {
    let idx = match_position(lookup_value, lookup_array, mode)?;
    Ok(i32::try_from(idx + 1).unwrap_or(i32::MAX))
}

/// XLOOKUP(lookup_value, lookup_array, return_array, [if_not_found], [match_mode]).
pub fn xlookup(
    lookup_value: &Value,
    lookup_array: &[Value],
    return_array: &[Value],
    if_not_found: Option<Value>,
    mode: LookupMatchMode,
) -> Result<Value, ErrorKind> {
    if lookup_array.len() != return_array.len() {
        return Err(ErrorKind::Value);
    }

    match match_position(lookup_value, lookup_array, mode) {
        Ok(idx) => return_array.get(idx).cloned().ok_or(ErrorKind::Value),
        Err(ErrorKind::NA) => if_not_found.ok_or(ErrorKind::NA),
        Err(e) => Err(e),
    }
}
