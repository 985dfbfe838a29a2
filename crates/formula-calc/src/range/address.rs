use std::fmt;

use thiserror::Error;

/// Excel's worksheet limits: column `XFD` and row 1,048,576.
pub const EXCEL_MAX_COLS: u32 = 16_384;
pub const EXCEL_MAX_ROWS: u32 = 1_048_576;

/// 0-indexed worksheet coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddr {
    pub row: u32,
    pub col: u32,
}

impl CellAddr {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Renders the address in relative A1 form (`B3`).
    pub fn to_a1(self) -> String {
        let mut letters = Vec::new();
        let mut n = self.col + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(char::from(b'A' + rem as u8));
            n = (n - 1) / 26;
        }
        letters.reverse();
        let mut out: String = letters.into_iter().collect();
        out.push_str(&(self.row + 1).to_string());
        out
    }
}

impl fmt::Display for CellAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    #[error("invalid A1 address: {0}")]
    InvalidA1(String),
    #[error("column out of range")]
    ColumnOutOfRange,
    #[error("row out of range")]
    RowOutOfRange,
}

/// Parse an A1-style address like `A1` or `$B$12` into a 0-indexed [`CellAddr`].
pub fn parse_a1(input: &str) -> Result<CellAddr, AddressParseError> {
    let input = input.trim();
    let invalid = || AddressParseError::InvalidA1(input.to_string());

    let body = input.strip_prefix('$').unwrap_or(input);
    let letters_end = body
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(body.len());
    let (letters, rest) = body.split_at(letters_end);
    if letters.is_empty() {
        return Err(invalid());
    }
    let digits = rest.strip_prefix('$').unwrap_or(rest);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let mut col: u32 = 0;
    for b in letters.bytes() {
        let digit = u32::from(b.to_ascii_uppercase() - b'A' + 1);
        col = col
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .filter(|&v| v <= EXCEL_MAX_COLS)
            .ok_or(AddressParseError::ColumnOutOfRange)?;
    }

    let row: u32 = digits
        .parse()
        .map_err(|_| AddressParseError::RowOutOfRange)?;
    if row == 0 || row > EXCEL_MAX_ROWS {
        return Err(AddressParseError::RowOutOfRange);
    }

    Ok(CellAddr::new(row - 1, col - 1))
}

/// Parse `A1:C3` (or a single `A1`) into normalized top-left / bottom-right corners.
pub fn parse_a1_range(input: &str) -> Result<(CellAddr, CellAddr), AddressParseError> {
    let (a, b) = match input.split_once(':') {
        Some((a, b)) => (parse_a1(a)?, parse_a1(b)?),
        None => {
            let a = parse_a1(input)?;
            (a, a)
        }
    };
    Ok((
        CellAddr::new(a.row.min(b.row), a.col.min(b.col)),
        CellAddr::new(a.row.max(b.row), a.col.max(b.col)),
    ))
}
