//! Value comparison shared by deduplication and lookup functions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::functions::wildcard::WildcardPattern;
use crate::value::{ErrorKind, Value};

/// Match policy of a lookup. Numeric codes follow XLOOKUP's `match_mode` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LookupMatchMode {
    #[default]
    ExactMatch,
    ExactMatchOrNextSmaller,
    ExactMatchOrNextLarger,
    Wildcard,
}

impl TryFrom<i64> for LookupMatchMode {
    type Error = ErrorKind;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(LookupMatchMode::ExactMatch),
            -1 => Ok(LookupMatchMode::ExactMatchOrNextSmaller),
            1 => Ok(LookupMatchMode::ExactMatchOrNextLarger),
            2 => Ok(LookupMatchMode::Wildcard),
            _ => Err(ErrorKind::Value),
        }
    }
}

/// Three-way comparer bound to one [`LookupMatchMode`].
///
/// The comparer holds no scratch state; construct one per call (it is `Copy`) or share it freely
/// between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LookupComparer {
    mode: LookupMatchMode,
}

impl LookupComparer {
    pub const fn new(mode: LookupMatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> LookupMatchMode {
        self.mode
    }

    /// Compares `a` (the lookup value or pattern) against `b` (a candidate).
    ///
    /// Values of different types are never equal; they order as
    /// `blank < number < text < boolean < error`. In wildcard mode a text `a` is treated as a
    /// pattern and a match compares `Equal`.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        if self.mode == LookupMatchMode::Wildcard {
            if let (Value::Text(pattern), Value::Text(text)) = (a, b) {
                if WildcardPattern::new(pattern).matches(text) {
                    return Ordering::Equal;
                }
                // A failed pattern match stays non-equal even when the raw strings are equal
                // (`a~*` only matches the literal `a*`).
                return match cmp_case_insensitive(pattern, text) {
                    Ordering::Equal => Ordering::Less,
                    other => other,
                };
            }
        }
        exact_order(a, b)
    }

    pub fn equals(&self, a: &Value, b: &Value) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Element-wise equality of two vectors of the same length.
    pub fn vectors_equal(&self, a: &[Value], b: &[Value]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| self.equals(x, y))
    }

    /// Binds `lookup` to this comparer for repeated equality tests against many candidates.
    pub(crate) fn prepare<'a>(&self, lookup: &'a Value) -> PreparedLookup<'a> {
        let pattern = match (self.mode, lookup) {
            (LookupMatchMode::Wildcard, Value::Text(pattern)) => {
                Some(WildcardPattern::new(pattern))
            }
            _ => None,
        };
        PreparedLookup {
            comparer: *self,
            lookup,
            pattern,
        }
    }
}

/// A lookup value whose wildcard pattern (if any) is compiled once.
#[derive(Debug, Clone)]
pub(crate) struct PreparedLookup<'a> {
    comparer: LookupComparer,
    lookup: &'a Value,
    pattern: Option<WildcardPattern>,
}

impl PreparedLookup<'_> {
    /// Same result as [`LookupComparer::equals`] with the bound lookup value on the left.
    pub(crate) fn equals(&self, candidate: &Value) -> bool {
        match (&self.pattern, candidate) {
            (Some(pattern), Value::Text(text)) => pattern.matches(text),
            // A text pattern never equals a value of another type.
            (Some(_), _) => false,
            (None, candidate) => self.comparer.equals(self.lookup, candidate),
        }
    }
}

fn type_rank(v: &Value) -> u8 {
    match v {
        Value::Blank => 0,
        Value::Number(_) => 1,
        Value::Text(_) => 2,
        Value::Bool(_) => 3,
        Value::Error(_) => 4,
    }
}

fn exact_order(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            x.partial_cmp(y).unwrap_or_else(|| x.total_cmp(y))
        }
        (Value::Text(x), Value::Text(y)) => cmp_case_insensitive(x, y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Error(x), Value::Error(y)) => x.cmp(y),
        (Value::Blank, Value::Blank) => Ordering::Equal,
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Case-insensitive ordering using Unicode uppercase folding.
pub(crate) fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    if a.is_ascii() && b.is_ascii() {
        return a
            .bytes()
            .map(|c| c.to_ascii_uppercase())
            .cmp(b.bytes().map(|c| c.to_ascii_uppercase()));
    }
    a.chars()
        .flat_map(char::to_uppercase)
        .cmp(b.chars().flat_map(char::to_uppercase))
}
