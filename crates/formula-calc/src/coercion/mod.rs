//! Spreadsheet value coercion primitives shared by the argument resolver.

mod number;

use serde::{Deserialize, Serialize};

use crate::value::{ErrorKind, Value};

pub use number::{format_general, parse_number};

/// Locale configuration used when parsing *values* (text -> number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueLocaleConfig {
    pub decimal_separator: char,
    pub group_separator: char,
}

impl Default for ValueLocaleConfig {
    fn default() -> Self {
        Self::en_us()
    }
}

impl ValueLocaleConfig {
    #[must_use]
    pub const fn en_us() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
        }
    }

    #[must_use]
    pub const fn de_de() -> Self {
        Self {
            decimal_separator: ',',
            group_separator: '.',
        }
    }

    /// French uses a (narrow) no-break space for grouping.
    #[must_use]
    pub const fn fr_fr() -> Self {
        Self {
            decimal_separator: ',',
            group_separator: '\u{202F}',
        }
    }

    /// Resolves a BCP-47-ish locale id (`de-DE`, `fr_FR`, `en`) to a preset.
    #[must_use]
    pub fn for_locale_id(id: &str) -> Option<Self> {
        let normalized = id.trim().replace('_', "-").to_ascii_lowercase();
        let lang = normalized.split('-').next().unwrap_or_default();
        match lang {
            "en" => Some(Self::en_us()),
            "de" => Some(Self::de_de()),
            "fr" => Some(Self::fr_fr()),
            _ => None,
        }
    }
}

impl Value {
    /// Numeric coercion: blank is `0`, booleans are `0`/`1`, text is parsed with `locale`.
    pub fn coerce_to_number_with_locale(
        &self,
        locale: ValueLocaleConfig,
    ) -> Result<f64, ErrorKind> {
        match self {
            Value::Number(n) if n.is_finite() => Ok(*n),
            Value::Number(_) => Err(ErrorKind::Num),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Blank => Ok(0.0),
            Value::Text(s) => parse_number(s, locale).ok_or(ErrorKind::Value),
            Value::Error(e) => Err(*e),
        }
    }

    pub fn coerce_to_number(&self) -> Result<f64, ErrorKind> {
        self.coerce_to_number_with_locale(ValueLocaleConfig::en_us())
    }

    /// Numeric coercion followed by truncation toward zero.
    pub fn coerce_to_i64_with_locale(&self, locale: ValueLocaleConfig) -> Result<i64, ErrorKind> {
        let n = self.coerce_to_number_with_locale(locale)?.trunc();
        if n < i64::MIN as f64 || n >= i64::MAX as f64 {
            return Err(ErrorKind::Num);
        }
        Ok(n as i64)
    }

    /// Boolean coercion: non-zero numbers are TRUE, text must be `TRUE`/`FALSE` (any case) or
    /// numeric, blank is FALSE.
    pub fn coerce_to_bool_with_locale(&self, locale: ValueLocaleConfig) -> Result<bool, ErrorKind> {
        match self {
            Value::Bool(b) => Ok(*b),
            Value::Number(n) => Ok(*n != 0.0),
            Value::Blank => Ok(false),
            Value::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(false);
                }
                if trimmed.eq_ignore_ascii_case("TRUE") {
                    return Ok(true);
                }
                if trimmed.eq_ignore_ascii_case("FALSE") {
                    return Ok(false);
                }
                parse_number(trimmed, locale)
                    .map(|n| n != 0.0)
                    .ok_or(ErrorKind::Value)
            }
            Value::Error(e) => Err(*e),
        }
    }

    /// Text coercion. Blank becomes the empty string; errors propagate.
    pub fn coerce_to_string(&self) -> Result<String, ErrorKind> {
        match self {
            Value::Error(e) => Err(*e),
            other => Ok(other.to_string()),
        }
    }
}
