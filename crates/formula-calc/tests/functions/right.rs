use formula_calc::{CompileResult, DataType, ErrorKind, FunctionArgument, Value, ValueLocaleConfig};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::harness::{array, n, rows_of, t, TestSheet};

#[test]
fn right_returns_trailing_characters() {
    let sheet = TestSheet::new();
    assert_eq!(
        sheet.call("RIGHT", &["Hello".into(), FunctionArgument::from(2.0)]),
        CompileResult::text("lo")
    );
    assert_eq!(
        sheet.call("RIGHT", &["Hi".into(), FunctionArgument::from(5.0)]),
        CompileResult::text("Hi")
    );
    assert_eq!(
        sheet.call("RIGHT", &["Hi".into(), FunctionArgument::from(0.0)]),
        CompileResult::text("")
    );
    assert_eq!(
        sheet.call("RIGHT", &["Hello".into(), FunctionArgument::from(2.9)]),
        CompileResult::text("lo")
    );
}

#[test]
fn right_result_is_typed_text() {
    let sheet = TestSheet::new();
    let result = sheet.call("RIGHT", &["abc".into(), FunctionArgument::from(1.0)]);
    assert_eq!(result.data_type(), DataType::String);
}

#[test]
fn right_rejects_negative_lengths() {
    let sheet = TestSheet::new();
    assert_eq!(
        sheet.call("RIGHT", &["Hi".into(), FunctionArgument::from(-1.0)]),
        CompileResult::Error(ErrorKind::Value)
    );
}

#[test]
fn right_with_huge_lengths_returns_whole_text() {
    let sheet = TestSheet::new();
    for len in [i64::MAX as f64, 1e16, 1e300] {
        assert_eq!(
            sheet.call("RIGHT", &["Hi".into(), FunctionArgument::from(len)]),
            CompileResult::text("Hi")
        );
    }
    assert_eq!(
        sheet.call("RIGHT", &["Hi".into(), FunctionArgument::from(i64::MAX)]),
        CompileResult::text("Hi")
    );
}

#[test]
fn right_coerces_arguments() {
    let mut sheet = TestSheet::new();
    assert_eq!(
        sheet.call("RIGHT", &[FunctionArgument::from(12345.0), "3".into()]),
        CompileResult::text("345")
    );
    assert_eq!(
        sheet.call("RIGHT", &[true.into(), FunctionArgument::from(2.0)]),
        CompileResult::text("UE")
    );
    assert_eq!(
        sheet.call("RIGHT", &[FunctionArgument::Empty, FunctionArgument::from(2.0)]),
        CompileResult::text("")
    );
    assert_eq!(
        sheet.call("RIGHT", &["abc".into(), "two".into()]),
        CompileResult::Error(ErrorKind::Value)
    );

    sheet.set_value_locale(ValueLocaleConfig::de_de());
    assert_eq!(
        sheet.call("RIGHT", &["abcdef".into(), "2,5".into()]),
        CompileResult::text("ef")
    );
}

#[test]
fn right_propagates_argument_errors() {
    let sheet = TestSheet::new();
    assert_eq!(
        sheet.call("RIGHT", &[ErrorKind::NA.into(), FunctionArgument::from(1.0)]),
        CompileResult::Error(ErrorKind::NA)
    );
    assert_eq!(
        sheet.call("RIGHT", &["abc".into(), ErrorKind::Div0.into()]),
        CompileResult::Error(ErrorKind::Div0)
    );
}

#[test]
fn right_requires_exactly_two_arguments() {
    let sheet = TestSheet::new();
    assert_eq!(
        sheet.call("RIGHT", &["abc".into()]),
        CompileResult::Error(ErrorKind::Value)
    );
    assert_eq!(
        sheet.call(
            "RIGHT",
            &["abc".into(), FunctionArgument::from(1.0), FunctionArgument::from(1.0)],
        ),
        CompileResult::Error(ErrorKind::Value)
    );
}

#[test]
fn right_lifts_over_a_range_first_argument() {
    let sheet = TestSheet::new();
    let grid = array(vec![
        vec![t("alpha"), t("beta")],
        vec![Value::Error(ErrorKind::NA), n(2024.0)],
    ]);
    assert_eq!(
        rows_of(&sheet.call("RIGHT", &[grid, FunctionArgument::from(2.0)])),
        vec![
            vec![t("ha"), t("ta")],
            vec![Value::Error(ErrorKind::NA), t("24")],
        ]
    );
}

#[test]
fn right_lifts_over_worksheet_references() {
    let mut sheet = TestSheet::new();
    sheet.set("A1", "left");
    sheet.set("A2", "right");
    assert_eq!(
        rows_of(&sheet.call("RIGHT", &[sheet.range("A1:A3"), FunctionArgument::from(3.0)])),
        vec![vec![t("eft")], vec![t("ght")], vec![t("")]]
    );
    // A single cell reference is evaluated as a scalar.
    assert_eq!(
        sheet.call("RIGHT", &[sheet.range("A2"), FunctionArgument::from(1.0)]),
        CompileResult::text("t")
    );
}

#[test]
fn right_lifting_respects_cell_limit() {
    let mut sheet = TestSheet::new();
    sheet.set_max_materialized_cells(3);
    let grid = array(vec![vec![t("a"), t("b")], vec![t("c"), t("d")]]);
    assert_eq!(
        sheet.call("RIGHT", &[grid, FunctionArgument::from(1.0)]),
        CompileResult::Error(ErrorKind::Spill)
    );
}

proptest! {
    #[test]
    fn prop_right_is_a_suffix_of_bounded_length(text in "\\PC{0,12}", len in 0i64..20) {
        let sheet = TestSheet::new();
        let result = sheet.call("RIGHT", &[text.as_str().into(), FunctionArgument::from(len)]);
        let CompileResult::Scalar { value: Value::Text(out), .. } = result else {
            panic!("expected text, got {result:?}");
        };
        prop_assert!(text.ends_with(&out));
        let expected = (len as usize).min(text.chars().count());
        prop_assert_eq!(out.chars().count(), expected);
    }

    #[test]
    fn prop_right_rejects_every_negative_length(text in "\\PC{0,12}", len in -20i64..0) {
        let sheet = TestSheet::new();
        prop_assert_eq!(
            sheet.call("RIGHT", &[text.as_str().into(), FunctionArgument::from(len)]),
            CompileResult::Error(ErrorKind::Value)
        );
    }
}
