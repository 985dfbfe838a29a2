use std::sync::Arc;
use std::thread;

use formula_calc::parallel::execute_batch_with;
use formula_calc::{
    call_function, execute_batch, CompileResult, FunctionArgument, FunctionCall,
    FunctionRegistry, ParsingContext,
};
use pretty_assertions::assert_eq;

use super::harness::{array, n, t};

fn calls() -> Vec<FunctionCall> {
    let mut calls = Vec::new();
    for i in 0i64..32 {
        let rows = (0i64..8).map(|r| vec![n(((r * i) % 5) as f64), t("x")]).collect();
        calls.push(FunctionCall::new("UNIQUE", vec![array(rows)]));
        calls.push(FunctionCall::new(
            "RIGHT",
            vec![FunctionArgument::from(format!("value-{i}")), (i % 4).into()],
        ));
    }
    calls
}

#[test]
fn batch_matches_sequential_execution() {
    let ctx = ParsingContext::default();
    let calls = calls();
    let expected: Vec<CompileResult> = calls
        .iter()
        .map(|c| call_function(&c.name, &c.args, &ctx).expect("registered"))
        .collect();
    assert_eq!(execute_batch(&calls, &ctx), expected);
    assert_eq!(
        execute_batch_with(&FunctionRegistry::with_builtins(), &calls, &ctx),
        expected
    );
}

#[test]
fn concurrent_callers_see_identical_results() {
    let calls = Arc::new(calls());
    let baseline = execute_batch(&calls, &ParsingContext::default());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let calls = Arc::clone(&calls);
            thread::spawn(move || execute_batch(&calls, &ParsingContext::default()))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("worker thread"), baseline);
    }
}
