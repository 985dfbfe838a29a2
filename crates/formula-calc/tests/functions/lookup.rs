use formula_calc::functions::lookup::{xlookup, xmatch};
use formula_calc::{ErrorKind, LookupMatchMode, Value};

use super::harness::{n, t};

#[test]
fn xmatch_modes_from_numeric_codes() {
    let prices = vec![n(5.0), n(15.0), n(10.0)];
    let mode = |code: i64| LookupMatchMode::try_from(code).expect("valid match mode");

    assert_eq!(xmatch(&n(10.0), &prices, mode(0)), Ok(3));
    assert_eq!(xmatch(&n(12.0), &prices, mode(-1)), Ok(3));
    assert_eq!(xmatch(&n(12.0), &prices, mode(1)), Ok(2));
    assert_eq!(xmatch(&n(12.0), &prices, mode(0)), Err(ErrorKind::NA));
    assert_eq!(LookupMatchMode::try_from(5), Err(ErrorKind::Value));
}

#[test]
fn xlookup_with_wildcards() {
    let names = vec![t("Banana"), t("Cherry"), t("Blueberry")];
    let stock = vec![n(3.0), n(7.0), n(11.0)];
    assert_eq!(
        xlookup(&t("b*y"), &names, &stock, None, LookupMatchMode::Wildcard),
        Ok(n(11.0))
    );
    assert_eq!(
        xlookup(&t("?herry"), &names, &stock, None, LookupMatchMode::Wildcard),
        Ok(n(7.0))
    );
    assert_eq!(
        xlookup(&t("kiwi"), &names, &stock, Some(Value::Blank), LookupMatchMode::Wildcard),
        Ok(Value::Blank)
    );
}
