use crate::range::{CellAddr, CellSource};
use crate::settings::{CalcSettings, ValueLocaleConfig};

/// The formula cell currently being evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentCell {
    pub sheet: String,
    pub addr: CellAddr,
}

/// Per-evaluation context handed to every function.
///
/// Functions only ever receive `&ParsingContext`; nothing they do can mutate workbook data or
/// settings, so independent formulas may share one context across threads.
#[derive(Debug, Clone, Default)]
pub struct ParsingContext<'a> {
    settings: CalcSettings,
    current_cell: Option<CurrentCell>,
    cells: Option<&'a dyn CellSource>,
}

impl<'a> ParsingContext<'a> {
    pub fn new(settings: CalcSettings) -> Self {
        Self {
            settings,
            current_cell: None,
            cells: None,
        }
    }

    #[must_use]
    pub fn with_current_cell(mut self, sheet: impl Into<String>, addr: CellAddr) -> Self {
        self.current_cell = Some(CurrentCell {
            sheet: sheet.into(),
            addr,
        });
        self
    }

    #[must_use]
    pub fn with_cells(mut self, cells: &'a dyn CellSource) -> Self {
        self.cells = Some(cells);
        self
    }

    pub fn settings(&self) -> &CalcSettings {
        &self.settings
    }

    pub fn value_locale(&self) -> ValueLocaleConfig {
        self.settings.value_locale
    }

    pub fn max_materialized_cells(&self) -> usize {
        self.settings.max_materialized_cells
    }

    pub fn current_cell(&self) -> Option<&CurrentCell> {
        self.current_cell.as_ref()
    }

    /// Read-only workbook access, if the host attached one.
    pub fn cells(&self) -> Option<&'a dyn CellSource> {
        self.cells
    }
}
