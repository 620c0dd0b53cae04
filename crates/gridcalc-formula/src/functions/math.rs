//! Math functions

use crate::error::{FormulaError, FormulaResult};
use gridcalc_core::{CellError, Literal};

/// Coerce an operand to a number for arithmetic
fn expect_number(value: &Literal) -> FormulaResult<f64> {
    value.as_number().ok_or_else(|| {
        FormulaError::Evaluation(format!("Expected number, got {}", value.type_name()))
    })
}

/// Wrap an arithmetic result, #NUM! when it is infinite or NaN
fn finite(n: f64) -> Literal {
    if n.is_finite() {
        Literal::Number(n)
    } else {
        Literal::Error(CellError::Num)
    }
}

/// Shared shape of the binary arithmetic functions
///
/// Error literals in either operand become the result.
fn arithmetic(
    left: &Literal,
    right: &Literal,
    op: impl FnOnce(f64, f64) -> Literal,
) -> FormulaResult<Literal> {
    // Propagate errors
    if let Some(e) = left.get_error() {
        return Ok(Literal::Error(e));
    }
    if let Some(e) = right.get_error() {
        return Ok(Literal::Error(e));
    }

    let l = expect_number(left)?;
    let r = expect_number(right)?;
    Ok(match op(l, r) {
        Literal::Number(n) => finite(n),
        other => other,
    })
}

/// ADD(a, b) - Sum of two values
pub fn fn_add(left: &Literal, right: &Literal) -> FormulaResult<Literal> {
    arithmetic(left, right, |l, r| Literal::Number(l + r))
}

/// SUB(a, b) - Difference of two values
pub fn fn_sub(left: &Literal, right: &Literal) -> FormulaResult<Literal> {
    arithmetic(left, right, |l, r| Literal::Number(l - r))
}

/// MUL(a, b) - Product of two values
pub fn fn_mul(left: &Literal, right: &Literal) -> FormulaResult<Literal> {
    arithmetic(left, right, |l, r| Literal::Number(l * r))
}

/// DIV(a, b) - Quotient of two values, #DIV/0! when b is zero
pub fn fn_div(left: &Literal, right: &Literal) -> FormulaResult<Literal> {
    arithmetic(left, right, |l, r| {
        if r == 0.0 {
            Literal::Error(CellError::Div0)
        } else {
            Literal::Number(l / r)
        }
    })
}

/// AVERAGE(range) - Mean of the numbers in a range
///
/// Non-numeric cells are skipped; a range with no numbers is #DIV/0!.
pub fn fn_average(values: &[Literal]) -> FormulaResult<Literal> {
    let mut sum = 0.0;
    let mut count = 0;

    for value in values {
        match value {
            Literal::Number(n) => {
                sum += n;
                count += 1;
            }
            Literal::Error(e) => return Ok(Literal::Error(*e)),
            _ => {} // Ignore non-numeric
        }
    }

    if count == 0 {
        Ok(Literal::Error(CellError::Div0))
    } else {
        Ok(finite(sum / count as f64))
    }
}

/// PRODUCT(range) - Product of the numbers in a range
///
/// Non-numeric cells are skipped; a range with no numbers is 0.
pub fn fn_product(values: &[Literal]) -> FormulaResult<Literal> {
    let mut product = 1.0;
    let mut found = false;

    for value in values {
        match value {
            Literal::Number(n) => {
                product *= n;
                found = true;
            }
            Literal::Error(e) => return Ok(Literal::Error(*e)),
            _ => {} // Ignore non-numeric
        }
    }

    Ok(if found { finite(product) } else { Literal::Number(0.0) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_arithmetic() {
        let (a, b) = (Literal::from(5), Literal::from(3));
        assert_eq!(fn_add(&a, &b).unwrap(), Literal::Number(8.0));
        assert_eq!(fn_sub(&a, &b).unwrap(), Literal::Number(2.0));
        assert_eq!(fn_mul(&a, &b).unwrap(), Literal::Number(15.0));
        assert_eq!(
            fn_div(&Literal::from(9), &b).unwrap(),
            Literal::Number(3.0)
        );
    }

    #[test]
    fn test_arithmetic_coercion() {
        assert_eq!(
            fn_add(&Literal::Empty, &Literal::from(true)).unwrap(),
            Literal::Number(1.0)
        );
        assert_eq!(
            fn_mul(&Literal::text("4"), &Literal::from(2)).unwrap(),
            Literal::Number(8.0)
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            fn_div(&Literal::from(1), &Literal::from(0)).unwrap(),
            Literal::Error(CellError::Div0)
        );
    }

    #[test]
    fn test_error_operands_propagate() {
        let err = Literal::Error(CellError::Ref);
        assert_eq!(fn_add(&err, &Literal::from(1)).unwrap(), err);
        assert_eq!(fn_div(&Literal::from(1), &err).unwrap(), err);
    }

    #[test]
    fn test_overflow_is_num_error() {
        let big = Literal::from(1e308);
        assert_eq!(fn_add(&big, &big).unwrap(), Literal::Error(CellError::Num));
        assert_eq!(
            fn_mul(&big, &Literal::from(-10)).unwrap(),
            Literal::Error(CellError::Num)
        );
        assert_eq!(
            fn_product(&[big.clone(), big]).unwrap(),
            Literal::Error(CellError::Num)
        );
        assert_eq!(
            fn_sub(&Literal::from(1e308), &Literal::from(1.0)).unwrap(),
            Literal::Number(1e308)
        );
    }

    #[test]
    fn test_type_mismatch_fails() {
        let err = fn_sub(&Literal::text("abc"), &Literal::from(1)).unwrap_err();
        assert!(matches!(err, FormulaError::Evaluation(_)));
        assert_eq!(err.to_string(), "Evaluation error: Expected number, got text");
    }

    #[test]
    fn test_average() {
        let values = [
            Literal::from(2),
            Literal::Empty,
            Literal::from(4),
            Literal::text("x"),
            Literal::from(6),
        ];
        assert_eq!(fn_average(&values).unwrap(), Literal::Number(4.0));
        assert_eq!(
            fn_average(&[Literal::Empty]).unwrap(),
            Literal::Error(CellError::Div0)
        );
    }

    #[test]
    fn test_product() {
        let values = [Literal::from(2), Literal::from(3), Literal::Empty];
        assert_eq!(fn_product(&values).unwrap(), Literal::Number(6.0));
        assert_eq!(fn_product(&[]).unwrap(), Literal::Number(0.0));
        assert_eq!(
            fn_product(&[Literal::from(2), Literal::Error(CellError::Value)]).unwrap(),
            Literal::Error(CellError::Value)
        );
    }
}
