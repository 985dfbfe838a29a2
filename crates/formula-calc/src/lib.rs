#![forbid(unsafe_code)]
#![deny(unreachable_patterns)]

//! Function-execution core of a spreadsheet calculation engine.
//!
//! A host resolves a function name through the [`FunctionRegistry`] (or the process-wide
//! [`functions::registry`]), converts its call-site operands into [`FunctionArgument`]s and calls
//! [`FunctionSpec::execute`] with a [`ParsingContext`]. Every call produces exactly one
//! [`CompileResult`]: a typed scalar, an [`InMemoryRange`] or a spreadsheet [`ErrorKind`].
//! Spreadsheet-level failures never surface as `Result` errors or panics.
//!
//! ## Array behaviour
//!
//! Functions declare how they treat ranges through [`ArrayBehaviour`]. Functions marked
//! [`ArrayBehaviour::FirstArgCouldBeARange`] are evaluated once per cell of a multi-cell first
//! argument; the per-cell results (errors included) form a range of the same shape.
//!
//! ## Comparisons
//!
//! Deduplication and lookups share [`LookupComparer`], which applies one [`LookupMatchMode`]
//! consistently: case-insensitive text, type-aware ordering and wildcard patterns.
//!
//! ## Built-in functions
//!
//! - `UNIQUE(array, [by_col], [exactly_once])`
//! - `RIGHT(text, num_chars)`
//!
//! Run the `function_catalog` binary to list every registered function with its metadata.

pub mod coercion;
pub mod context;
pub mod error;
pub mod functions;
pub mod parallel;
pub mod range;
pub mod result;
pub mod settings;
pub mod value;

pub use context::{CurrentCell, ParsingContext};
pub use error::{RegistryError, SettingsError};
pub use functions::{
    call_function, lookup_function, ArrayBehaviour, FunctionArgument, FunctionCategory,
    FunctionMetadata, FunctionRegistry, FunctionSpec, LookupComparer, LookupMatchMode,
};
pub use parallel::{execute_batch, FunctionCall};
pub use range::{CellAddr, CellSource, InMemoryRange, RangeDefinition, RangeInfo, SheetRange};
pub use result::CompileResult;
pub use settings::{CalcSettings, ValueLocaleConfig};
pub use value::{DataType, ErrorKind, Value};
