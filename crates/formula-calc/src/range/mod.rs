//! Two-dimensional range views and owned result buffers.
//!
//! [`RangeInfo`] is the read-only view functions receive for range arguments. [`InMemoryRange`]
//! is the fixed-shape buffer array-producing functions fill and hand back inside a
//! [`crate::CompileResult`].

mod address;

use std::fmt;
use std::sync::Arc;

use crate::value::{ErrorKind, Value};

pub use address::{
    parse_a1, parse_a1_range, AddressParseError, CellAddr, EXCEL_MAX_COLS, EXCEL_MAX_ROWS,
};

/// Row/column extent of a range. A zero in either dimension denotes an empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RangeDefinition {
    pub rows: usize,
    pub cols: usize,
}

impl RangeDefinition {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn is_single_cell(self) -> bool {
        self.rows == 1 && self.cols == 1
    }

    /// Number of cells, or `None` if `rows * cols` overflows.
    pub fn cell_count(self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    pub fn contains(self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

/// Read-only, offset-addressable view over a rectangular block of values.
pub trait RangeInfo: fmt::Debug + Send + Sync {
    fn size(&self) -> RangeDefinition;

    /// Returns the value at a 0-based offset.
    ///
    /// # Panics
    ///
    /// Implementations panic when `(row, col)` lies outside [`RangeInfo::size`].
    fn get_offset(&self, row: usize, col: usize) -> Value;

    fn try_get_offset(&self, row: usize, col: usize) -> Option<Value> {
        self.size()
            .contains(row, col)
            .then(|| self.get_offset(row, col))
    }
}

/// Owned row-major buffer with a fixed extent.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryRange {
    size: RangeDefinition,
    values: Vec<Value>,
}

impl InMemoryRange {
    /// Allocates a blank-initialized buffer.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`. Use [`InMemoryRange::try_new`] for sizes derived
    /// from user input.
    pub fn new(size: RangeDefinition) -> Self {
        let total = size
            .cell_count()
            .unwrap_or_else(|| panic!("range {}x{} is too large", size.rows, size.cols));
        Self {
            size,
            values: vec![Value::Blank; total],
        }
    }

    /// Fallible allocation bounded by `max_cells`.
    ///
    /// Oversized shapes are `#SPILL!`; a failed reservation is `#NUM!`.
    pub fn try_new(size: RangeDefinition, max_cells: usize) -> Result<Self, ErrorKind> {
        let total = size.cell_count().ok_or(ErrorKind::Spill)?;
        if total > max_cells {
            return Err(ErrorKind::Spill);
        }
        let mut values = Vec::new();
        if values.try_reserve_exact(total).is_err() {
            return Err(ErrorKind::Num);
        }
        values.resize(total, Value::Blank);
        Ok(Self { size, values })
    }

    /// Builds a range from row vectors. Short rows are padded with blanks.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let n_rows = if cols == 0 { 0 } else { rows.len() };
        let mut values = Vec::with_capacity(n_rows * cols);
        for mut row in rows.into_iter().take(n_rows) {
            row.resize(cols, Value::Blank);
            values.extend(row);
        }
        Self {
            size: RangeDefinition::new(n_rows, cols),
            values,
        }
    }

    /// Copies an arbitrary view into an owned buffer.
    pub fn from_view(view: &dyn RangeInfo) -> Self {
        let size = view.size();
        let mut values = Vec::with_capacity(size.cell_count().unwrap_or(0));
        for row in 0..size.rows {
            for col in 0..size.cols {
                values.push(view.get_offset(row, col));
            }
        }
        Self { size, values }
    }

    pub fn size(&self) -> RangeDefinition {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        if !self.size.contains(row, col) {
            return None;
        }
        self.values.get(row * self.size.cols + col)
    }

    /// Writes one cell.
    ///
    /// # Panics
    ///
    /// Panics when `(row, col)` is outside the extent fixed at construction.
    pub fn set_value(&mut self, row: usize, col: usize, value: Value) {
        assert!(
            self.size.contains(row, col),
            "offset ({row}, {col}) outside {}x{} range",
            self.size.rows,
            self.size.cols
        );
        self.values[row * self.size.cols + col] = value;
    }

    /// Row slices in top-to-bottom order.
    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        // `chunks_exact(0)` panics; an empty range simply has no rows to yield.
        let cols = self.size.cols.max(1);
        self.values.chunks_exact(cols).take(self.size.rows)
    }

    /// Column vectors in left-to-right order.
    pub fn cols(&self) -> impl Iterator<Item = Vec<Value>> + '_ {
        (0..self.size.cols).map(move |col| {
            (0..self.size.rows)
                .map(|row| self.values[row * self.size.cols + col].clone())
                .collect()
        })
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn to_rows(&self) -> Vec<Vec<Value>> {
        self.rows().map(<[Value]>::to_vec).collect()
    }
}

impl RangeInfo for InMemoryRange {
    fn size(&self) -> RangeDefinition {
        self.size
    }

    fn get_offset(&self, row: usize, col: usize) -> Value {
        match self.get(row, col) {
            Some(v) => v.clone(),
            None => panic!(
                "offset ({row}, {col}) outside {}x{} range",
                self.size.rows, self.size.cols
            ),
        }
    }
}

/// Read-only workbook cell access supplied by the host.
pub trait CellSource: fmt::Debug + Send + Sync {
    fn get_cell_value(&self, sheet: &str, addr: CellAddr) -> Value;
}

/// A [`RangeInfo`] view over a rectangular worksheet area of a [`CellSource`].
#[derive(Debug, Clone)]
pub struct SheetRange {
    source: Arc<dyn CellSource>,
    sheet: String,
    start: CellAddr,
    end: CellAddr,
}

impl SheetRange {
    pub fn new(
        source: Arc<dyn CellSource>,
        sheet: impl Into<String>,
        a: CellAddr,
        b: CellAddr,
    ) -> Self {
        Self {
            source,
            sheet: sheet.into(),
            start: CellAddr::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellAddr::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    pub fn from_a1(
        source: Arc<dyn CellSource>,
        sheet: impl Into<String>,
        a1: &str,
    ) -> Result<Self, AddressParseError> {
        let (start, end) = parse_a1_range(a1)?;
        Ok(Self::new(source, sheet, start, end))
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    pub fn start(&self) -> CellAddr {
        self.start
    }

    pub fn end(&self) -> CellAddr {
        self.end
    }
}

impl RangeInfo for SheetRange {
    fn size(&self) -> RangeDefinition {
        RangeDefinition::new(
            (self.end.row - self.start.row) as usize + 1,
            (self.end.col - self.start.col) as usize + 1,
        )
    }

    fn get_offset(&self, row: usize, col: usize) -> Value {
        let size = self.size();
        assert!(
            size.contains(row, col),
            "offset ({row}, {col}) outside {}x{} range",
            size.rows,
            size.cols
        );
        let addr = CellAddr::new(self.start.row + row as u32, self.start.col + col as u32);
        self.source.get_cell_value(&self.sheet, addr)
    }
}
