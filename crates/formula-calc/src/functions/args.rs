//! Call-site arguments and their coercion into typed scalars.
//!
//! Every coercion reports failure through a `Result<_, ErrorKind>` so callers can turn it into a
//! [`CompileResult::Error`] (or a per-cell error in an array result) without unwinding.

use std::sync::Arc;

use crate::context::ParsingContext;
use crate::range::{InMemoryRange, RangeInfo};
use crate::result::CompileResult;
use crate::value::{ErrorKind, Value};

/// One resolved argument of a function call.
#[derive(Debug, Clone)]
pub enum FunctionArgument {
    Text(String),
    Number(f64),
    Bool(bool),
    /// An omitted argument (`=F(a,,c)`) or a reference to a blank cell.
    Empty,
    /// The error produced by a nested expression.
    Error(ErrorKind),
    /// A reference into workbook data.
    Range(Arc<dyn RangeInfo>),
    /// An array literal or the range result of a nested call.
    Array(InMemoryRange),
}

impl FunctionArgument {
    pub fn range(view: impl RangeInfo + 'static) -> Self {
        FunctionArgument::Range(Arc::new(view))
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Number(n) => FunctionArgument::Number(n),
            Value::Text(s) => FunctionArgument::Text(s),
            Value::Bool(b) => FunctionArgument::Bool(b),
            Value::Blank => FunctionArgument::Empty,
            Value::Error(e) => FunctionArgument::Error(e),
        }
    }

    /// `true` for workbook references and in-memory arrays.
    pub fn is_range(&self) -> bool {
        matches!(self, FunctionArgument::Range(_) | FunctionArgument::Array(_))
    }

    pub fn as_range_info(&self) -> Option<&dyn RangeInfo> {
        match self {
            FunctionArgument::Range(r) => Some(r.as_ref()),
            FunctionArgument::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<ErrorKind> {
        match self {
            FunctionArgument::Error(e) => Some(*e),
            _ => None,
        }
    }

    /// Resolves the argument to one cell value.
    ///
    /// A single-cell range yields its only value; larger (or empty) ranges are `#VALUE!`.
    pub fn scalar_value(&self) -> Result<Value, ErrorKind> {
        match self {
            FunctionArgument::Text(s) => Ok(Value::Text(s.clone())),
            FunctionArgument::Number(n) => Ok(Value::Number(*n)),
            FunctionArgument::Bool(b) => Ok(Value::Bool(*b)),
            FunctionArgument::Empty => Ok(Value::Blank),
            FunctionArgument::Error(e) => Err(*e),
            FunctionArgument::Range(_) | FunctionArgument::Array(_) => {
                let view = self.as_range_info().ok_or(ErrorKind::Value)?;
                if view.size().is_single_cell() {
                    Ok(view.get_offset(0, 0))
                } else {
                    Err(ErrorKind::Value)
                }
            }
        }
    }
}

impl From<Value> for FunctionArgument {
    fn from(value: Value) -> Self {
        FunctionArgument::from_value(value)
    }
}

impl From<f64> for FunctionArgument {
    fn from(value: f64) -> Self {
        FunctionArgument::Number(value)
    }
}

impl From<i64> for FunctionArgument {
    fn from(value: i64) -> Self {
        FunctionArgument::Number(value as f64)
    }
}

impl From<bool> for FunctionArgument {
    fn from(value: bool) -> Self {
        FunctionArgument::Bool(value)
    }
}

impl From<&str> for FunctionArgument {
    fn from(value: &str) -> Self {
        FunctionArgument::Text(value.to_string())
    }
}

impl From<String> for FunctionArgument {
    fn from(value: String) -> Self {
        FunctionArgument::Text(value)
    }
}

impl From<ErrorKind> for FunctionArgument {
    fn from(value: ErrorKind) -> Self {
        FunctionArgument::Error(value)
    }
}

impl From<InMemoryRange> for FunctionArgument {
    fn from(value: InMemoryRange) -> Self {
        FunctionArgument::Array(value)
    }
}

/// A nested call's result used as an argument of the enclosing call.
impl From<CompileResult> for FunctionArgument {
    fn from(result: CompileResult) -> Self {
        match result {
            CompileResult::Scalar { value, .. } => FunctionArgument::from_value(value),
            CompileResult::Range(range) => FunctionArgument::Array(range),
            CompileResult::Error(e) => FunctionArgument::Error(e),
        }
    }
}

/// Checks the minimum argument count before any argument is read.
pub fn validate_arguments(args: &[FunctionArgument], min_args: usize) -> Result<(), ErrorKind> {
    if args.len() < min_args {
        return Err(ErrorKind::Value);
    }
    Ok(())
}

/// The scalar value of argument `index`; a missing argument is blank.
pub fn arg_to_value(args: &[FunctionArgument], index: usize) -> Result<Value, ErrorKind> {
    match args.get(index) {
        Some(arg) => arg.scalar_value(),
        None => Ok(Value::Blank),
    }
}

/// Text coercion. Missing and empty arguments are `""`, never an error.
pub fn arg_to_string(
    args: &[FunctionArgument],
    index: usize,
    _ctx: &ParsingContext<'_>,
) -> Result<String, ErrorKind> {
    arg_to_value(args, index)?.coerce_to_string()
}

pub fn arg_to_number(
    args: &[FunctionArgument],
    index: usize,
    ctx: &ParsingContext<'_>,
) -> Result<f64, ErrorKind> {
    arg_to_value(args, index)?.coerce_to_number_with_locale(ctx.value_locale())
}

/// Integer coercion (truncating). Check the error before trusting the value.
pub fn arg_to_int(
    args: &[FunctionArgument],
    index: usize,
    ctx: &ParsingContext<'_>,
) -> Result<i64, ErrorKind> {
    arg_to_value(args, index)?.coerce_to_i64_with_locale(ctx.value_locale())
}

pub fn arg_to_bool(
    args: &[FunctionArgument],
    index: usize,
    ctx: &ParsingContext<'_>,
) -> Result<bool, ErrorKind> {
    arg_to_value(args, index)?.coerce_to_bool_with_locale(ctx.value_locale())
}
