use crate::context::ParsingContext;
use crate::functions::{FunctionArgument, FunctionSpec};
use crate::range::InMemoryRange;
use crate::result::CompileResult;

/// Evaluates `spec` once per cell of a multi-cell first argument.
///
/// Returns `None` when the first argument is a scalar or a single cell, in which case the caller
/// runs the implementation directly. Per-cell failures become error cells in the output; they do
/// not abort the remaining cells.
pub(crate) fn lift_first_arg(
    spec: &FunctionSpec,
    args: &[FunctionArgument],
    ctx: &ParsingContext<'_>,
) -> Option<CompileResult> {
    let view = args.first()?.as_range_info()?;
    let size = view.size();
    if size.is_single_cell() {
        return None;
    }

    log::trace!(
        "{}: lifting over {}x{} first argument",
        spec.name,
        size.rows,
        size.cols
    );

    let mut out = match InMemoryRange::try_new(size, ctx.max_materialized_cells()) {
        Ok(range) => range,
        Err(e) => return Some(CompileResult::Error(e)),
    };

    let mut cell_args = args.to_vec();
    for row in 0..size.rows {
        for col in 0..size.cols {
            cell_args[0] = FunctionArgument::from_value(view.get_offset(row, col));
            let value = (spec.implementation)(&cell_args, ctx).into_value();
            out.set_value(row, col, value);
        }
    }
    Some(CompileResult::Range(out))
}
