//! Batch execution of independent function calls.

#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
use rayon::prelude::*;
#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
use rayon::ThreadPool;
#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
use std::sync::OnceLock;

use crate::context::ParsingContext;
use crate::functions::{FunctionArgument, FunctionRegistry};
use crate::result::CompileResult;
use crate::value::ErrorKind;

/// One pending call: a function name plus its resolved arguments.
#[derive(Debug, Clone)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<FunctionArgument>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, args: Vec<FunctionArgument>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// Best-effort crate-local Rayon thread pool.
///
/// Building the global pool can fail under heavy resource pressure, after which Rayon panics on
/// first use. A local pool that fails to build just means batches run on the calling thread.
#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
static RAYON_POOL: OnceLock<Option<ThreadPool>> = OnceLock::new();

#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
fn desired_rayon_threads() -> usize {
    let from_env = std::env::var("RAYON_NUM_THREADS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0);
    from_env.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    })
}

#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
fn build_rayon_pool() -> Option<ThreadPool> {
    let requested = desired_rayon_threads().max(1);
    let try_build = |n| rayon::ThreadPoolBuilder::new().num_threads(n).build();

    match try_build(requested) {
        Ok(pool) => Some(pool),
        Err(err) if requested > 1 => {
            log::warn!("failed to build {requested}-thread pool ({err}); retrying with 1 thread");
            try_build(1).ok()
        }
        Err(err) => {
            log::warn!("failed to build thread pool ({err}); batches run sequentially");
            None
        }
    }
}

#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
fn rayon_pool() -> Option<&'static ThreadPool> {
    RAYON_POOL.get_or_init(build_rayon_pool).as_ref()
}

fn execute_one(
    registry: &FunctionRegistry,
    call: &FunctionCall,
    ctx: &ParsingContext<'_>,
) -> CompileResult {
    match registry.call(&call.name, &call.args, ctx) {
        Some(result) => result,
        None => {
            log::debug!("unknown function {}", call.name);
            CompileResult::Error(ErrorKind::Name)
        }
    }
}

/// Executes every call against `registry`, returning results in call order.
///
/// Unknown names produce `#NAME?`. Calls share nothing but `ctx` and the read-only argument
/// views, so with the `parallel` feature they run concurrently on a crate-local pool.
pub fn execute_batch_with(
    registry: &FunctionRegistry,
    calls: &[FunctionCall],
    ctx: &ParsingContext<'_>,
) -> Vec<CompileResult> {
    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    {
        if calls.len() > 1 {
            if let Some(pool) = rayon_pool() {
                return pool.install(|| {
                    calls
                        .par_iter()
                        .map(|call| execute_one(registry, call, ctx))
                        .collect()
                });
            }
        }
    }

    calls
        .iter()
        .map(|call| execute_one(registry, call, ctx))
        .collect()
}

/// [`execute_batch_with`] against the built-in registry.
pub fn execute_batch(calls: &[FunctionCall], ctx: &ParsingContext<'_>) -> Vec<CompileResult> {
    execute_batch_with(crate::functions::registry(), calls, ctx)
}
