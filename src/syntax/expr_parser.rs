use crate::error::PResult;

use super::{
    expr::Expression,
    parser::ConsumeStatus,
    token::{MathOperator, TokenKind},
    ExprParser, Parser,
};

impl ExprParser for Parser {
    fn parse_term(&mut self) -> PResult<Box<Expression>> {
        let mut lhs = self.parse_factor()?;

        while self.lookahead_is(TokenKind::Plus, TokenKind::Minus) {
            let op = match self.consume_token(TokenKind::Plus, TokenKind::Minus)? {
                ConsumeStatus::Eof => break,
                ConsumeStatus::Ok => MathOperator::Add,
                ConsumeStatus::Optional => MathOperator::Subtract,
            };

            let rhs = self.parse_factor()?;
            lhs = Box::new(Expression::Binary { lhs, op, rhs });
        }

        Ok(lhs)
    }

    fn parse_factor(&mut self) -> PResult<Box<Expression>> {
        let mut lhs = self.parse_power()?;

        while self.lookahead_is(TokenKind::Times, TokenKind::Slash) {
            let op = match self.consume_token(TokenKind::Times, TokenKind::Slash)? {
                ConsumeStatus::Eof => break,
                ConsumeStatus::Ok => MathOperator::Multiply,
                ConsumeStatus::Optional => MathOperator::Divide,
            };

            let rhs = self.parse_power()?;
            lhs = Box::new(Expression::Binary { lhs, op, rhs });
        }

        Ok(lhs)
    }

    // Chained `^` folds left like the other levels, so 2^3^2 is (2^3)^2.
    fn parse_power(&mut self) -> PResult<Box<Expression>> {
        let mut lhs = self.parse_unary()?;

        while self.lookahead_is(TokenKind::Caret, TokenKind::Caret) {
            if self.consume_token(TokenKind::Caret, TokenKind::Caret)? == ConsumeStatus::Eof {
                break;
            }

            let rhs = self.parse_unary()?;
            lhs = Box::new(Expression::Binary {
                lhs,
                op: MathOperator::Exponentiate,
                rhs,
            });
        }

        Ok(lhs)
    }

    fn parse_unary(&mut self) -> PResult<Box<Expression>> {
        match self.consume_token(TokenKind::Number, TokenKind::Minus)? {
            ConsumeStatus::Eof => Ok(Box::new(Expression::Value(0.0))),
            ConsumeStatus::Ok => {
                let number = self.previous_number()?;

                Ok(Box::new(Expression::Value(number)))
            }
            ConsumeStatus::Optional => {
                let operand = match self.consume_token(TokenKind::Number, TokenKind::Number)? {
                    ConsumeStatus::Eof => 0.0,
                    _ => self.previous_number()?,
                };

                Ok(Box::new(Expression::Unary {
                    operand,
                    op: MathOperator::Subtract,
                }))
            }
        }
    }
}
