//! Tests for formula evaluation and rendering against a sheet

use gridcalc::prelude::*;
use gridcalc::{evaluate, parse_argument, render};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn addr(s: &str) -> CellAddress {
    CellAddress::parse(s).unwrap()
}

fn reference(s: &str) -> Content {
    Reference::parse(s).unwrap().into()
}

fn binary(name: &str, left: impl Into<Content>, right: impl Into<Content>) -> Content {
    BinaryFunction::new(name, left.into(), right.into())
        .unwrap()
        .into()
}

/// Test rendering of a function over literal operands
#[test]
fn test_render_literal_operands() {
    init_logging();
    let ctx = EvaluationContext::simple();

    let content = binary("ADD", 5, 3);
    assert_eq!(evaluate(&content, &ctx).unwrap(), Literal::Number(8.0));
    assert_eq!(render(&content, &ctx).unwrap(), "8=ADD(5,3)");

    // Every literal operand is echoed as its own rendering
    for (l, r) in [(1, 2), (-4, 10), (0, 0)] {
        let content = binary("SUB", l, r);
        let expected = format!("{}=SUB({},{})", l - r, l, r);
        assert_eq!(render(&content, &ctx).unwrap(), expected);
    }
}

/// Test rendering of a function over a cell reference
#[test]
fn test_render_reference_operand() {
    init_logging();
    let mut sheet = Sheet::new(5, 5);
    sheet.insert(addr("0;1"), 12).unwrap();

    let ctx = EvaluationContext::new(&sheet);
    let content = binary("SUB", reference("0;1"), 4);

    assert_eq!(reference("0;1").render(&ctx).unwrap(), "12=0;1");
    assert_eq!(render(&content, &ctx).unwrap(), "8=SUB(0;1,4)");
}

/// Test rendering of nested functions
#[test]
fn test_render_nested_functions() {
    init_logging();
    let ctx = EvaluationContext::simple();

    let inner = binary("ADD", 2, 3);
    assert_eq!(render(&inner, &ctx).unwrap(), "5=ADD(2,3)");

    let outer = binary("MUL", inner.clone(), 10);
    assert_eq!(render(&outer, &ctx).unwrap(), "50=MUL(ADD(2,3),10)");

    // The nested operand contributes exactly what follows its first '='
    let inner_rendering = render(&inner, &ctx).unwrap();
    assert_eq!(parse_argument(&inner_rendering), inner.argument_text());
}

/// Test a chain of formula cells
#[test]
fn test_formula_cells_referencing_formula_cells() {
    init_logging();
    let mut sheet = Sheet::new(5, 5);
    sheet.insert(addr("0;0"), 10).unwrap();
    sheet.insert(addr("0;1"), 20).unwrap();
    sheet
        .insert(addr("1;0"), binary("ADD", reference("0;0"), reference("0;1")))
        .unwrap();
    sheet
        .insert(addr("2;0"), binary("DIV", reference("1;0"), 3))
        .unwrap();

    assert_eq!(sheet.render_at(addr("1;0")).unwrap(), "30=ADD(0;0,0;1)");
    assert_eq!(sheet.render_at(addr("2;0")).unwrap(), "10=DIV(1;0,3)");

    // A reference to a formula cell shows the computed value before the address
    let ctx = EvaluationContext::new(&sheet);
    assert_eq!(reference("1;0").render(&ctx).unwrap(), "30=1;0");
}

/// Test that evaluation sees the current grid state
#[test]
fn test_reevaluation_after_change() {
    init_logging();
    let mut sheet = Sheet::new(3, 3);
    sheet.insert(addr("0;0"), 2).unwrap();
    sheet
        .insert(addr("0;1"), binary("MUL", reference("0;0"), reference("0;0")))
        .unwrap();

    assert_eq!(sheet.value_at(addr("0;1")).unwrap(), Literal::Number(4.0));
    assert_eq!(sheet.value_at(addr("0;1")).unwrap(), Literal::Number(4.0));

    sheet.insert(addr("0;0"), 7).unwrap();
    assert_eq!(sheet.render_at(addr("0;1")).unwrap(), "49=MUL(0;0,0;0)");

    sheet.clear(addr("0;0"));
    assert_eq!(sheet.render_at(addr("0;1")).unwrap(), "0=MUL(0;0,0;0)");
}

/// Test interval functions inside binary functions
#[test]
fn test_interval_functions() {
    init_logging();
    let mut sheet = Sheet::new(4, 4);
    sheet.insert(addr("0;0"), 1).unwrap();
    sheet.insert(addr("1;0"), 2).unwrap();
    sheet.insert(addr("2;0"), 6).unwrap();

    let average =
        IntervalFunction::new("AVERAGE", CellRange::parse("0;0:2;0").unwrap()).unwrap();
    sheet
        .insert(addr("0;3"), binary("ADD", average, 1))
        .unwrap();

    assert_eq!(sheet.render_at(addr("0;3")).unwrap(), "4=ADD(AVERAGE(0;0:2;0),1)");
}

/// Test error propagation in formulas
#[test]
fn test_error_propagation() {
    init_logging();
    let ctx = EvaluationContext::simple();

    // Division by zero is a value, not a failure
    let content = binary("ADD", binary("DIV", 1, 0), 5);
    assert_eq!(
        evaluate(&content, &ctx).unwrap(),
        Literal::Error(CellError::Div0)
    );

    // An unresolvable reference fails the whole evaluation
    let sheet = Sheet::new(2, 2);
    let ctx = EvaluationContext::new(&sheet);
    let content = binary("ADD", binary("MUL", reference("9;9"), 2), 1);
    assert!(matches!(
        evaluate(&content, &ctx),
        Err(FormulaError::InvalidReference(_))
    ));
}

/// Test that missing operands are rejected at construction
#[test]
fn test_missing_operands_rejected() {
    init_logging();
    let err = BinaryFunction::try_new("MUL", Some(Content::from(2)), None).unwrap_err();
    assert!(matches!(err, FormulaError::MissingOperand { position: "right", .. }));

    let err = BinaryFunction::from_args("MUL", vec![]).unwrap_err();
    assert!(matches!(err, FormulaError::ArgumentCount { actual: 0, .. }));
}

/// Test the sheet display pass
#[test]
fn test_display_sheet() {
    init_logging();
    let mut sheet = Sheet::new(3, 3);
    sheet.insert(addr("0;0"), "total").unwrap();
    sheet.insert(addr("0;1"), binary("ADD", 2, 3)).unwrap();
    sheet
        .insert(addr("0;2"), binary("ADD", "total", reference("0;1")))
        .unwrap();

    let report = sheet
        .display_range(CellRange::parse("0;0:0;2").unwrap(), &DisplayOptions::default())
        .unwrap();
    let lines: Vec<String> = report.cells.iter().map(|c| c.to_string()).collect();

    assert_eq!(lines, vec!["0;0|total", "0;1|5=ADD(2,3)", "0;2|#VALUE!"]);
    assert_eq!(report.stats.formula_cells, 2);
    assert_eq!(report.stats.errors, 1);
}
