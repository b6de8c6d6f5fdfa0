use crate::{
    error::{ErrorKind, PResult},
    syntax::{Expression, ExpressionTree, MathOperator},
};

/// Walks the tree post-order and folds it to a single value. An empty tree
/// evaluates to 0.
pub(crate) fn evaluate(tree: &ExpressionTree) -> PResult<f64> {
    match tree.root() {
        None => Ok(0.0),
        Some(root) => eval_expr(root),
    }
}

fn eval_expr(expr: &Expression) -> PResult<f64> {
    match expr {
        Expression::Value(number) => Ok(*number),
        Expression::Unary { operand, op } => match op {
            MathOperator::None => Ok(*operand),
            MathOperator::Subtract => Ok(-operand),
            other => Err(ErrorKind::EvalError(format!(
                "Invalid unary operator {other:?}"
            ))),
        },
        Expression::Binary { lhs, op, rhs } => {
            let left = eval_expr(lhs)?;
            let right = eval_expr(rhs)?;

            match op {
                MathOperator::Add => Ok(left + right),
                MathOperator::Subtract => Ok(left - right),
                MathOperator::Multiply => Ok(left * right),
                MathOperator::Divide => {
                    if right == 0.0 {
                        return Err(ErrorKind::DivisionByZero);
                    }

                    Ok(left / right)
                }
                MathOperator::Exponentiate => Ok(left.powf(right)),
                MathOperator::None => Err(ErrorKind::EvalError(format!(
                    "Invalid binary operator {op:?}"
                ))),
            }
        }
    }
}
