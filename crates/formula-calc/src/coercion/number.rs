use super::ValueLocaleConfig;

/// Parses text the way spreadsheets coerce it to a number.
///
/// Accepts surrounding whitespace, a sign, accounting parentheses (`(1,000)`), a leading `$`,
/// group separators in the integer part, a trailing `%` and an exponent. Empty text is `0`.
/// Returns `None` for anything else.
pub fn parse_number(text: &str, locale: ValueLocaleConfig) -> Option<f64> {
    let mut s = text.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    let mut negative = false;
    if let Some(inner) = s.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
        negative = true;
        s = inner.trim();
    }
    if let Some(rest) = s.strip_prefix('-') {
        if negative {
            return None;
        }
        negative = true;
        s = rest.trim_start();
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest.trim_start();
    }
    if let Some(rest) = s.strip_prefix('$') {
        s = rest.trim_start();
    }

    let mut scale = 1.0;
    if let Some(rest) = s.strip_suffix('%') {
        scale = 0.01;
        s = rest.trim_end();
    }
    if s.is_empty() {
        return None;
    }

    let normalized = normalize_separators(s, locale)?;
    let n: f64 = normalized.parse().ok()?;
    if !n.is_finite() {
        return None;
    }
    let n = n * scale;
    let n = if negative { -n } else { n };
    // Excel never surfaces negative zero.
    Some(if n == 0.0 { 0.0 } else { n })
}

/// Rewrites `s` into Rust float syntax, rejecting characters outside a numeric literal.
fn normalize_separators(s: &str, locale: ValueLocaleConfig) -> Option<String> {
    let mut out = String::with_capacity(s.len());
    let mut seen_decimal = false;
    let mut seen_exponent = false;
    let mut digits = 0usize;
    let mut prev: Option<char> = None;

    for ch in s.chars() {
        match ch {
            '0'..='9' => {
                digits += 1;
                out.push(ch);
            }
            c if c == locale.decimal_separator && !seen_decimal && !seen_exponent => {
                seen_decimal = true;
                out.push('.');
            }
            c if c == locale.group_separator && !seen_decimal && !seen_exponent => {
                // Group separators must sit between digits.
                if !prev.is_some_and(|p| p.is_ascii_digit()) {
                    return None;
                }
            }
            'e' | 'E' if !seen_exponent && digits > 0 => {
                seen_exponent = true;
                out.push('e');
            }
            '+' | '-' if matches!(prev, Some('e' | 'E')) => out.push(ch),
            _ => return None,
        }
        prev = Some(ch);
    }

    if digits == 0 || matches!(prev, Some(c) if c == locale.group_separator) {
        return None;
    }
    Some(out)
}

/// Renders a number the way the "General" format shows it: at most 15 significant digits,
/// no trailing zeros, scientific notation for very large or very small magnitudes.
pub fn format_general(n: f64) -> String {
    if !n.is_finite() {
        return crate::value::ErrorKind::Num.as_code().to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    // Round to 15 significant digits first so the notation is chosen from the rounded
    // exponent (999999999999999.9 rounds to 1E+15).
    let sci = format!("{n:.14e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if !(-9..15).contains(&exp) {
        let mantissa = trim_fraction(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}E{sign}{:02}", exp.unsigned_abs());
    }

    let rounded: f64 = sci.parse().unwrap_or(n);
    let decimals = (14 - exp).clamp(0, 23) as usize;
    let s = format!("{rounded:.decimals$}");
    let s = trim_fraction(&s);
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Drops trailing zeros (and a dangling decimal point) from a fixed-point rendering.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
