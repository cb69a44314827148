//! Dimensioned-value evaluation for style and attribute expressions
//!
//! Reduces a value expression to a single dimensioned number (`110px`,
//! `0.5`) or a plain string (`auto`, `red`, quoted text). Arithmetic is
//! unit-aware: mixed units are an error, at most one operand of a product
//! may carry a unit, and divisors must be unitless and non-zero.

use thiserror::Error;

use crate::parser::ast::{BinaryOp, Expr};

/// Errors raised while evaluating a value expression
#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("non-numeric operand in arithmetic: '{operand}'")]
    NonNumericOperand { operand: String },

    #[error("unit mismatch: '{left}' vs '{right}'")]
    UnitMismatch { left: String, right: String },

    #[error("cannot multiply two dimensioned values ({left} * {right})")]
    UnitProduct { left: String, right: String },

    #[error("cannot divide by a value with unit '{unit}'")]
    UnitDivisor { unit: String },

    #[error("division by zero")]
    DivisionByZero,

    /// A var reference illegally survived resolution; the generator
    /// reports this as an internal invariant failure
    #[error("unresolved reference '{name}' reached evaluation")]
    UnresolvedReference { name: String },
}

/// A fully evaluated style or attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    /// Number with optional unit (`10px`, `50%`, unitless `2`)
    Number { value: f64, unit: Option<String> },
    /// Non-numeric value, rendered verbatim
    Text(String),
}

impl CssValue {
    /// Render for output. Numbers use the shortest decimal form with no
    /// trailing zeros, immediately followed by their unit.
    pub fn render(&self) -> String {
        match self {
            CssValue::Number { value, unit } => {
                format!("{}{}", value, unit.as_deref().unwrap_or(""))
            }
            CssValue::Text(s) => s.clone(),
        }
    }
}

/// Evaluate a value expression to a single CSS value
pub fn evaluate(expr: &Expr) -> Result<CssValue, ValueError> {
    match expr {
        Expr::Literal(raw) => Ok(classify(raw)),
        Expr::Var { group, .. } => Err(ValueError::UnresolvedReference {
            name: group.clone(),
        }),
        Expr::Binary { left, op, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            apply(*op, left, right)
        }
    }
}

/// Classify a raw literal: lexically numeric-with-optional-unit becomes a
/// number, everything else is a plain string value
fn classify(raw: &str) -> CssValue {
    match parse_dimension(raw) {
        Some((value, unit)) => CssValue::Number { value, unit },
        None => CssValue::Text(raw.to_string()),
    }
}

/// Split a token like `100px` / `50%` / `2` into number and unit
fn parse_dimension(raw: &str) -> Option<(f64, Option<String>)> {
    let split = raw
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(raw.len());
    let (number, unit) = raw.split_at(split);
    if number.is_empty() {
        return None;
    }
    let value: f64 = number.parse().ok()?;

    if unit.is_empty() {
        Some((value, None))
    } else if unit == "%" || unit.chars().all(|c| c.is_ascii_alphabetic()) {
        Some((value, Some(unit.to_string())))
    } else {
        None
    }
}

fn apply(op: BinaryOp, left: CssValue, right: CssValue) -> Result<CssValue, ValueError> {
    let (ln, lu) = expect_number(left)?;
    let (rn, ru) = expect_number(right)?;

    match op {
        BinaryOp::Add | BinaryOp::Sub => {
            let unit = combine_units(lu, ru)?;
            let value = if op == BinaryOp::Add { ln + rn } else { ln - rn };
            Ok(CssValue::Number { value, unit })
        }
        BinaryOp::Mul => {
            if let (Some(lu), Some(ru)) = (&lu, &ru) {
                return Err(ValueError::UnitProduct {
                    left: lu.clone(),
                    right: ru.clone(),
                });
            }
            Ok(CssValue::Number {
                value: ln * rn,
                unit: lu.or(ru),
            })
        }
        BinaryOp::Div => {
            if let Some(unit) = ru {
                return Err(ValueError::UnitDivisor { unit });
            }
            if rn == 0.0 {
                return Err(ValueError::DivisionByZero);
            }
            Ok(CssValue::Number {
                value: ln / rn,
                unit: lu,
            })
        }
    }
}

fn expect_number(value: CssValue) -> Result<(f64, Option<String>), ValueError> {
    match value {
        CssValue::Number { value, unit } => Ok((value, unit)),
        CssValue::Text(s) => Err(ValueError::NonNumericOperand { operand: s }),
    }
}

/// Unit rule for additive operators: differing non-empty units fail, one
/// sided units win, unitless stays unitless
fn combine_units(
    left: Option<String>,
    right: Option<String>,
) -> Result<Option<String>, ValueError> {
    match (left, right) {
        (Some(l), Some(r)) => {
            if l == r {
                Ok(Some(l))
            } else {
                Err(ValueError::UnitMismatch { left: l, right: r })
            }
        }
        (Some(l), None) => Ok(Some(l)),
        (None, Some(r)) => Ok(Some(r)),
        (None, None) => Ok(None),
    }
}
