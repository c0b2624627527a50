use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    #[display("+")]
    Add,
    #[display("-")]
    Sub,
    #[display("*")]
    Mul,
    #[display("/")]
    Div,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    #[display("-")]
    Neg,
}

/// Parsed expression. Every child is owned by exactly one parent.
///
/// Operator chains like `1+1+...+1` nest one level per operator, so nothing that
/// walks the tree may recurse on it: see [`crate::eval::evaluate`] and the `Drop` below.
#[derive(Debug, PartialEq)]
pub enum Expression {
    Literal(f64),
    UnaryOp(UnaryOp, Box<Expression>),
    BinaryOp(BinaryOp, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(op: BinaryOp, lhs: Expression, rhs: Expression) -> Self {
        Expression::BinaryOp(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn unary(op: UnaryOp, node: Expression) -> Self {
        Expression::UnaryOp(op, Box::new(node))
    }
}

// The derived drop would recurse once per level.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut stack = vec![];
        take_children(self, &mut stack);
        while let Some(mut node) = stack.pop() {
            take_children(&mut node, &mut stack);
        }
    }
}

fn take_children(expr: &mut Expression, stack: &mut Vec<Expression>) {
    let mut take = |node: &mut Box<Expression>| {
        if !matches!(**node, Expression::Literal(_)) {
            stack.push(std::mem::replace(node.as_mut(), Expression::Literal(0.0)));
        }
    };
    match expr {
        Expression::Literal(_) => {}
        Expression::UnaryOp(_, node) => take(node),
        Expression::BinaryOp(_, lhs, rhs) => {
            take(lhs);
            take(rhs);
        }
    }
}
