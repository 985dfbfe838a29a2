use formula_calc::functions::{iter_function_specs, registry};
use formula_calc::{
    ArrayBehaviour, CompileResult, FunctionArgument, FunctionCategory, FunctionMetadata,
    FunctionRegistry, FunctionSpec, ParsingContext, RegistryError,
};
use pretty_assertions::assert_eq;

fn echo_len(args: &[FunctionArgument], _ctx: &ParsingContext<'_>) -> CompileResult {
    CompileResult::number(args.len() as f64)
}

const ECHO: FunctionSpec = FunctionSpec {
    name: "ECHOLEN",
    min_args: 0,
    max_args: 4,
    array_behaviour: ArrayBehaviour::None,
    metadata: FunctionMetadata {
        category: FunctionCategory::Information,
        introduced_in: "0.1",
        description: "Returns the number of arguments",
        supports_arrays: false,
    },
    implementation: echo_len,
};

#[test]
fn builtins_expose_their_contract() {
    let unique = registry().get("unique").expect("UNIQUE registered");
    assert_eq!((unique.min_args, unique.max_args), (1, 3));
    assert_eq!(unique.array_behaviour, ArrayBehaviour::ReturnsArray);
    assert_eq!(
        unique.metadata.category,
        FunctionCategory::LookupAndReference
    );

    let right = registry().get("_xlfn.right").expect("RIGHT registered");
    assert_eq!((right.min_args, right.max_args), (2, 2));
    assert_eq!(right.array_behaviour, ArrayBehaviour::FirstArgCouldBeARange);
    assert!(right.metadata.supports_arrays);
}

#[test]
fn inventory_and_registry_agree() {
    let mut names: Vec<_> = iter_function_specs().map(|s| s.name).collect();
    names.sort_unstable();
    let registered: Vec<_> = registry().specs().into_iter().map(|s| s.name).collect();
    assert_eq!(names, registered);
    assert!(registered.contains(&"RIGHT"));
    assert!(registered.contains(&"UNIQUE"));
}

#[test]
fn hosts_can_extend_a_registry() {
    let mut reg = FunctionRegistry::with_builtins();
    let before = reg.len();
    reg.register(ECHO).expect("register ECHOLEN");
    assert_eq!(reg.len(), before + 1);
    assert_eq!(
        reg.register(ECHO),
        Err(RegistryError::Duplicate("ECHOLEN".to_string()))
    );

    let ctx = ParsingContext::default();
    assert_eq!(
        reg.call("EchoLen", &[FunctionArgument::Empty, FunctionArgument::from(1.0)], &ctx),
        Some(CompileResult::number(2.0))
    );
    // The process-wide registry is unaffected.
    assert!(registry().get("ECHOLEN").is_none());
}
