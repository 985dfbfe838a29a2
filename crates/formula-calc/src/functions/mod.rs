use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use crate::context::ParsingContext;
use crate::error::RegistryError;
use crate::result::CompileResult;
use crate::value::ErrorKind;

pub(crate) mod array_lift;
pub mod args;
pub mod compare;
pub mod lookup;
pub(crate) mod wildcard;

// Built-in functions registered with the inventory-backed registry live in dedicated modules.
mod builtins_dynamic_arrays;
mod builtins_text;

pub use args::{
    arg_to_bool, arg_to_int, arg_to_number, arg_to_string, arg_to_value, validate_arguments,
    FunctionArgument,
};
pub use compare::{LookupComparer, LookupMatchMode};

// On wasm targets the linker may drop a codegen unit whose only contents are `inventory::submit!`
// statics, leaving the registry empty. Referencing each registering module's `__force_link()`
// through `black_box` keeps those units alive through LTO.
#[cfg(target_arch = "wasm32")]
fn force_link_inventory_modules() {
    let builtins: &[fn()] = &[
        builtins_dynamic_arrays::__force_link,
        builtins_text::__force_link,
    ];

    for f in builtins {
        let f = std::hint::black_box(*f);
        f();
    }
}

/// How a function treats range arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArrayBehaviour {
    /// Arguments are used as given.
    None,
    /// A multi-cell first argument is evaluated cell by cell, producing a same-shaped range.
    FirstArgCouldBeARange,
    /// The function always produces a range result.
    ReturnsArray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FunctionCategory {
    DateAndTime,
    Engineering,
    Financial,
    Information,
    Logical,
    LookupAndReference,
    MathAndTrig,
    Statistical,
    Text,
}

/// Discovery metadata; it never changes how a function executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunctionMetadata {
    pub category: FunctionCategory,
    /// Release of the engine in which the function first shipped.
    pub introduced_in: &'static str,
    pub description: &'static str,
    pub supports_arrays: bool,
}

pub type FunctionImpl = fn(&[FunctionArgument], &ParsingContext<'_>) -> CompileResult;

#[derive(Clone, Copy)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub min_args: usize,
    pub max_args: usize,
    pub array_behaviour: ArrayBehaviour,
    pub metadata: FunctionMetadata,
    pub implementation: FunctionImpl,
}

impl fmt::Debug for FunctionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionSpec")
            .field("name", &self.name)
            .field("min_args", &self.min_args)
            .field("max_args", &self.max_args)
            .field("array_behaviour", &self.array_behaviour)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

impl FunctionSpec {
    /// Runs the function: argument-count validation, array lifting, then the implementation.
    pub fn execute(&self, args: &[FunctionArgument], ctx: &ParsingContext<'_>) -> CompileResult {
        if let Err(e) = validate_arguments(args, self.min_args) {
            log::debug!(
                "{}: {} argument(s) supplied, at least {} required",
                self.name,
                args.len(),
                self.min_args
            );
            return CompileResult::Error(e);
        }
        if args.len() > self.max_args {
            log::debug!(
                "{}: {} argument(s) supplied, at most {} allowed",
                self.name,
                args.len(),
                self.max_args
            );
            return CompileResult::Error(ErrorKind::Value);
        }

        if self.array_behaviour == ArrayBehaviour::FirstArgCouldBeARange {
            if let Some(lifted) = array_lift::lift_first_arg(self, args, ctx) {
                return lifted;
            }
        }

        (self.implementation)(args, ctx)
    }
}

inventory::collect!(FunctionSpec);

/// Iterate all [`FunctionSpec`] registrations collected via [`inventory`].
pub fn iter_function_specs() -> impl Iterator<Item = &'static FunctionSpec> {
    inventory::iter::<FunctionSpec>.into_iter()
}

/// Name → implementation map with case-insensitive lookup.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, FunctionSpec>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with every built-in function.
    pub fn with_builtins() -> Self {
        #[cfg(target_arch = "wasm32")]
        force_link_inventory_modules();

        let mut registry = Self::new();
        for spec in iter_function_specs() {
            if let Err(err) = registry.register(*spec) {
                log::warn!("skipping built-in registration: {err}");
            }
        }
        registry
    }

    pub fn register(&mut self, spec: FunctionSpec) -> Result<(), RegistryError> {
        if spec.min_args > spec.max_args {
            return Err(RegistryError::InvalidArity {
                name: spec.name.to_string(),
                min_args: spec.min_args,
                max_args: spec.max_args,
            });
        }
        let key = spec.name.to_ascii_uppercase();
        if self.functions.contains_key(&key) {
            return Err(RegistryError::Duplicate(key));
        }
        self.functions.insert(key, spec);
        Ok(())
    }

    /// Case-insensitive lookup. Names stored in files with an `_xlfn.` prefix resolve to the
    /// unprefixed function.
    pub fn get(&self, name: &str) -> Option<&FunctionSpec> {
        let upper = name.to_ascii_uppercase();
        if let Some(spec) = self.functions.get(&upper) {
            return Some(spec);
        }
        upper
            .strip_prefix("_XLFN.")
            .and_then(|stripped| self.functions.get(stripped))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered specs sorted by name.
    pub fn specs(&self) -> Vec<&FunctionSpec> {
        let mut specs: Vec<_> = self.functions.values().collect();
        specs.sort_by_key(|spec| spec.name);
        specs
    }

    /// Looks up `name` and executes it. `None` means the name is unknown; reporting that is the
    /// caller's job.
    pub fn call(
        &self,
        name: &str,
        args: &[FunctionArgument],
        ctx: &ParsingContext<'_>,
    ) -> Option<CompileResult> {
        self.get(name).map(|spec| spec.execute(args, ctx))
    }
}

/// The process-wide built-in registry, built on first use and immutable afterwards.
pub fn registry() -> &'static FunctionRegistry {
    static REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();
    REGISTRY.get_or_init(FunctionRegistry::with_builtins)
}

pub fn lookup_function(name: &str) -> Option<&'static FunctionSpec> {
    registry().get(name)
}

pub fn call_function(
    name: &str,
    args: &[FunctionArgument],
    ctx: &ParsingContext<'_>,
) -> Option<CompileResult> {
    registry().call(name, args, ctx)
}
