use crate::range::{InMemoryRange, RangeInfo};
use crate::value::{DataType, ErrorKind, Value};

/// The uniform return value of every function execution.
///
/// Spreadsheet-domain failures are returned as [`CompileResult::Error`], never raised, so a
/// containing expression (or an error-handling function such as `IFERROR`) can observe them.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileResult {
    Scalar { value: Value, data_type: DataType },
    Range(InMemoryRange),
    Error(ErrorKind),
}

impl CompileResult {
    /// Builds a scalar result with an explicit type tag.
    ///
    /// Error values are normalized to [`CompileResult::Error`] so there is a single
    /// representation for failures.
    pub fn scalar(value: Value, data_type: DataType) -> Self {
        match value {
            Value::Error(e) => CompileResult::Error(e),
            value => CompileResult::Scalar { value, data_type },
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        CompileResult::Scalar {
            value: Value::Text(value.into()),
            data_type: DataType::String,
        }
    }

    pub fn number(value: f64) -> Self {
        if !value.is_finite() {
            return CompileResult::Error(ErrorKind::Num);
        }
        CompileResult::Scalar {
            value: Value::Number(value),
            data_type: DataType::Number,
        }
    }

    pub fn boolean(value: bool) -> Self {
        CompileResult::Scalar {
            value: Value::Bool(value),
            data_type: DataType::Boolean,
        }
    }

    pub fn range(range: InMemoryRange) -> Self {
        CompileResult::Range(range)
    }

    pub fn error(kind: ErrorKind) -> Self {
        CompileResult::Error(kind)
    }

    /// Wraps a plain value, inferring the type tag from the value itself.
    pub fn from_value(value: Value) -> Self {
        let data_type = value.data_type();
        Self::scalar(value, data_type)
    }

    pub fn data_type(&self) -> DataType {
        match self {
            CompileResult::Scalar { data_type, .. } => *data_type,
            CompileResult::Range(_) => DataType::ExcelRange,
            CompileResult::Error(_) => DataType::ExcelError,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CompileResult::Error(_))
    }

    pub fn as_error(&self) -> Option<ErrorKind> {
        match self {
            CompileResult::Error(e) => Some(*e),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<&InMemoryRange> {
        match self {
            CompileResult::Range(r) => Some(r),
            _ => None,
        }
    }

    /// Collapses the result to one cell value.
    ///
    /// Range results yield their top-left cell; an empty range yields `#VALUE!`.
    pub fn into_value(self) -> Value {
        match self {
            CompileResult::Scalar { value, .. } => value,
            CompileResult::Error(e) => Value::Error(e),
            CompileResult::Range(range) => range
                .try_get_offset(0, 0)
                .unwrap_or(Value::Error(ErrorKind::Value)),
        }
    }
}

impl From<ErrorKind> for CompileResult {
    fn from(kind: ErrorKind) -> Self {
        CompileResult::Error(kind)
    }
}

impl From<InMemoryRange> for CompileResult {
    fn from(range: InMemoryRange) -> Self {
        CompileResult::Range(range)
    }
}

impl From<Result<Value, ErrorKind>> for CompileResult {
    fn from(result: Result<Value, ErrorKind>) -> Self {
        match result {
            Ok(v) => CompileResult::from_value(v),
            Err(e) => CompileResult::Error(e),
        }
    }
}
