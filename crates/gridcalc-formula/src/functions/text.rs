//! Text functions

use crate::error::FormulaResult;
use gridcalc_core::Literal;

/// CONCAT(range) - Joins the values of a range
pub fn fn_concat(values: &[Literal]) -> FormulaResult<Literal> {
    let mut out = String::new();
    for value in values {
        if let Literal::Error(e) = value {
            return Ok(Literal::Error(*e));
        }
        out.push_str(&value.to_string());
    }
    Ok(Literal::Text(out))
}

/// COALESCE(range) - First text value in a range, or empty text
pub fn fn_coalesce(values: &[Literal]) -> FormulaResult<Literal> {
    let first = values
        .iter()
        .find_map(Literal::as_text)
        .unwrap_or_default();
    Ok(Literal::text(first))
}
