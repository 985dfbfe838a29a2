use crate::context::ParsingContext;
use crate::functions::{arg_to_bool, ArrayBehaviour, FunctionArgument, FunctionSpec};
use crate::functions::{FunctionCategory, FunctionMetadata, LookupComparer, LookupMatchMode};
use crate::range::{InMemoryRange, RangeDefinition, RangeInfo};
use crate::result::CompileResult;
use crate::value::{ErrorKind, Value};

inventory::submit! {
    FunctionSpec {
        name: "UNIQUE",
        min_args: 1,
        max_args: 3,
        array_behaviour: ArrayBehaviour::ReturnsArray,
        metadata: FunctionMetadata {
            category: FunctionCategory::LookupAndReference,
            introduced_in: "0.1",
            description: "Returns a list of unique values in a list or range",
            supports_arrays: true,
        },
        implementation: unique_fn,
    }
}

/// UNIQUE(array, [by_col], [exactly_once])
fn unique_fn(args: &[FunctionArgument], ctx: &ParsingContext<'_>) -> CompileResult {
    let Some(first) = args.first() else {
        return CompileResult::Error(ErrorKind::Value);
    };
    let Some(source) = first.as_range_info() else {
        return CompileResult::Error(first.as_error().unwrap_or(ErrorKind::Value));
    };
    let by_col = match arg_to_bool(args, 1, ctx) {
        Ok(v) => v,
        Err(e) => return CompileResult::Error(e),
    };
    let exactly_once = match arg_to_bool(args, 2, ctx) {
        Ok(v) => v,
        Err(e) => return CompileResult::Error(e),
    };

    let size = source.size();
    let vectors = if by_col {
        column_vectors(source)
    } else {
        row_vectors(source)
    };
    let kept = distinct_vectors(vectors, exactly_once);

    let out_size = if by_col {
        RangeDefinition::new(size.rows, kept.len())
    } else {
        RangeDefinition::new(kept.len(), size.cols)
    };
    let mut out = match InMemoryRange::try_new(out_size, ctx.max_materialized_cells()) {
        Ok(range) => range,
        Err(e) => return CompileResult::Error(e),
    };
    for (i, vector) in kept.into_iter().enumerate() {
        for (j, value) in vector.into_iter().enumerate() {
            if by_col {
                out.set_value(j, i, value);
            } else {
                out.set_value(i, j, value);
            }
        }
    }
    CompileResult::range(out)
}

fn row_vectors(source: &dyn RangeInfo) -> Vec<Vec<Value>> {
    let size = source.size();
    (0..size.rows)
        .map(|row| (0..size.cols).map(|col| source.get_offset(row, col)).collect())
        .collect()
}

fn column_vectors(source: &dyn RangeInfo) -> Vec<Vec<Value>> {
    let size = source.size();
    (0..size.cols)
        .map(|col| (0..size.rows).map(|row| source.get_offset(row, col)).collect())
        .collect()
}

/// Keeps the first occurrence of each distinct vector in source order.
///
/// With `exactly_once`, vectors seen more than once are dropped entirely, however many times
/// they repeat.
fn distinct_vectors(vectors: Vec<Vec<Value>>, exactly_once: bool) -> Vec<Vec<Value>> {
    let comparer = LookupComparer::new(LookupMatchMode::ExactMatch);
    let mut accepted: Vec<(Vec<Value>, usize)> = Vec::new();
    for candidate in vectors {
        match accepted
            .iter_mut()
            .find(|(seen, _)| comparer.vectors_equal(seen, &candidate))
        {
            Some((_, count)) => *count += 1,
            None => accepted.push((candidate, 1)),
        }
    }
    accepted
        .into_iter()
        .filter(|(_, count)| !exactly_once || *count == 1)
        .map(|(vector, _)| vector)
        .collect()
}

// On wasm targets, `inventory` registrations can be dropped by the linker if the object file
// contains no otherwise-referenced symbols. `functions/mod.rs` references this function so the
// module (and its `inventory::submit!` entry) is retained.
#[cfg(target_arch = "wasm32")]
pub(super) fn __force_link() {}
