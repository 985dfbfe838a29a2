use formula_calc::functions::{registry, ArrayBehaviour, FunctionCategory};
use serde::Serialize;

#[derive(Serialize)]
struct FunctionCatalog {
    functions: Vec<FunctionCatalogEntry>,
}

#[derive(Serialize)]
struct FunctionCatalogEntry {
    name: String,
    min_args: usize,
    max_args: usize,
    array_behaviour: ArrayBehaviour,
    category: FunctionCategory,
    introduced_in: &'static str,
    description: &'static str,
    supports_arrays: bool,
}

fn main() {
    let functions = registry()
        .specs()
        .into_iter()
        .map(|spec| FunctionCatalogEntry {
            name: spec.name.to_ascii_uppercase(),
            min_args: spec.min_args,
            max_args: spec.max_args,
            array_behaviour: spec.array_behaviour,
            category: spec.metadata.category,
            introduced_in: spec.metadata.introduced_in,
            description: spec.metadata.description,
            supports_arrays: spec.metadata.supports_arrays,
        })
        .collect();

    let catalog = FunctionCatalog { functions };
    let json = serde_json::to_string_pretty(&catalog).expect("serialize function catalog");
    println!("{json}");
}
