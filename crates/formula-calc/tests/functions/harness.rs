#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use formula_calc::range::parse_a1;
use formula_calc::{
    call_function, CalcSettings, CellAddr, CellSource, CompileResult, FunctionArgument,
    InMemoryRange, ParsingContext, SheetRange, Value, ValueLocaleConfig,
};

#[derive(Debug, Default, Clone)]
struct Cells {
    values: HashMap<(String, CellAddr), Value>,
}

impl CellSource for Cells {
    fn get_cell_value(&self, sheet: &str, addr: CellAddr) -> Value {
        self.values
            .get(&(sheet.to_string(), addr))
            .cloned()
            .unwrap_or(Value::Blank)
    }
}

/// A single worksheet plus the settings functions are evaluated with.
pub struct TestSheet {
    cells: Cells,
    settings: CalcSettings,
    sheet: &'static str,
}

impl TestSheet {
    pub fn new() -> Self {
        Self {
            cells: Cells::default(),
            settings: CalcSettings::default(),
            sheet: "Sheet1",
        }
    }

    pub fn set_value_locale(&mut self, locale: ValueLocaleConfig) {
        self.settings.value_locale = locale;
    }

    pub fn set_max_materialized_cells(&mut self, max: usize) {
        self.settings.max_materialized_cells = max;
    }

    pub fn set(&mut self, addr: &str, value: impl Into<Value>) {
        let addr = parse_a1(addr).expect("cell address");
        self.cells
            .values
            .insert((self.sheet.to_string(), addr), value.into());
    }

    /// Writes `values` row by row starting at `top_left`.
    pub fn set_range_values(&mut self, top_left: &str, values: &[Vec<Value>]) {
        let origin = parse_a1(top_left).expect("cell address");
        for (r, row) in values.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                let addr = CellAddr::new(origin.row + r as u32, origin.col + c as u32);
                self.cells
                    .values
                    .insert((self.sheet.to_string(), addr), value.clone());
            }
        }
    }

    /// A reference argument over a snapshot of the current cell contents.
    pub fn range(&self, a1: &str) -> FunctionArgument {
        let source: Arc<dyn CellSource> = Arc::new(self.cells.clone());
        FunctionArgument::range(SheetRange::from_a1(source, self.sheet, a1).expect("range"))
    }

    pub fn ctx(&self) -> ParsingContext<'_> {
        ParsingContext::new(self.settings)
            .with_current_cell(self.sheet, CellAddr::new(0, 25))
            .with_cells(&self.cells)
    }

    pub fn call(&self, name: &str, args: &[FunctionArgument]) -> CompileResult {
        call_function(name, args, &self.ctx()).expect("function is registered")
    }

    pub fn call_rows(&self, name: &str, args: &[FunctionArgument]) -> Vec<Vec<Value>> {
        rows_of(&self.call(name, args))
    }
}

pub fn array(rows: Vec<Vec<Value>>) -> FunctionArgument {
    FunctionArgument::Array(InMemoryRange::from_rows(rows))
}

pub fn rows_of(result: &CompileResult) -> Vec<Vec<Value>> {
    result
        .as_range()
        .unwrap_or_else(|| panic!("expected a range result, got {result:?}"))
        .to_rows()
}

pub fn t(s: &str) -> Value {
    Value::from(s)
}

pub fn n(v: f64) -> Value {
    Value::Number(v)
}
