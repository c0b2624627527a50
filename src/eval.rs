use crate::ast::{BinaryOp, Expression, UnaryOp};
use crate::error::EvalError;

enum Frame<'a> {
    Unary(UnaryOp),
    // waiting for the lhs, holds the rhs still to evaluate
    Lhs(BinaryOp, &'a Expression),
    // lhs done, waiting for the rhs
    Rhs(BinaryOp, f64),
}

/// Reduces the tree bottom-up: both operands are evaluated before their operator.
///
/// Walks with an explicit stack so tree height is bounded by memory, not by the call stack.
pub fn evaluate(expr: &Expression) -> Result<f64, EvalError> {
    let mut frames = vec![];
    let mut node = expr;

    loop {
        let mut value = loop {
            match node {
                Expression::Literal(v) => break *v,
                Expression::UnaryOp(op, child) => {
                    frames.push(Frame::Unary(*op));
                    node = child.as_ref();
                }
                Expression::BinaryOp(op, lhs, rhs) => {
                    frames.push(Frame::Lhs(*op, rhs.as_ref()));
                    node = lhs.as_ref();
                }
            }
        };

        loop {
            match frames.pop() {
                None => return Ok(value),
                Some(Frame::Unary(op)) => value = evaluate_unary_op(op, value),
                Some(Frame::Lhs(op, rhs)) => {
                    frames.push(Frame::Rhs(op, value));
                    node = rhs;
                    break;
                }
                Some(Frame::Rhs(op, lhs)) => value = evaluate_binary_op(op, lhs, value)?,
            }
        }
    }
}

fn evaluate_unary_op(op: UnaryOp, v: f64) -> f64 {
    match op {
        UnaryOp::Neg => -v,
    }
}

fn evaluate_binary_op(op: BinaryOp, l: f64, r: f64) -> Result<f64, EvalError> {
    let v = match op {
        BinaryOp::Add => l + r,
        BinaryOp::Sub => l - r,
        BinaryOp::Mul => l * r,
        BinaryOp::Div => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            l / r
        }
    };
    Ok(v)
}

/// Narrows a result to `i64`, rejecting fractional, non-finite and out-of-range values.
pub fn to_integer(value: f64) -> Result<i64, EvalError> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    const UPPER: f64 = i64::MAX as f64;
    const LOWER: f64 = i64::MIN as f64;

    if value.is_finite() && value.fract() == 0.0 && (LOWER..UPPER).contains(&value) {
        Ok(value as i64)
    } else {
        Err(EvalError::NotAnInteger(value))
    }
}
