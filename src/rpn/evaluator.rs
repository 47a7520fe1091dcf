use crate::rpn::{EvalError, Token};
use log::{debug, trace};

/// Stack machine reducing a postfix token sequence to a single number.
pub struct PostfixEvaluator {
    stack: Vec<f64>,
}

impl PostfixEvaluator {
    fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Evaluates a postfix sequence as produced by the shunting-yard parser.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` when the sequence reduces to exactly one value.
    /// * `Err(EvalError)` on missing operands, division by zero, or leftover values.
    pub fn evaluate_postfix(tokens: &[Token]) -> Result<f64, EvalError> {
        let mut evaluator = Self::new();
        for token in tokens {
            evaluator.step(token)?;
        }

        match evaluator.stack.as_slice() {
            [result] => {
                debug!("Evaluation result: {}", result);
                Ok(*result)
            }
            rest => {
                debug!("Evaluation left {} values on the stack", rest.len());
                Err(EvalError::MalformedExpression)
            }
        }
    }

    fn step(&mut self, token: &Token) -> Result<(), EvalError> {
        match token {
            Token::Number(value) => self.stack.push(*value),
            Token::UnaryMinus => {
                let value = self.pop_operand(token)?;
                self.stack.push(-value);
            }
            Token::Function(function) => {
                let value = self.pop_operand(token)?;
                self.stack.push(function.apply(value));
            }
            Token::Operator(operator) => {
                if self.stack.len() < 2 {
                    return Err(EvalError::InsufficientOperands(token.describe()));
                }
                let right = self.pop_operand(token)?;
                let left = self.pop_operand(token)?;
                self.stack.push(operator.apply(left, right)?);
            }
            Token::LeftParen | Token::RightParen => return Err(EvalError::MalformedExpression),
        }
        trace!("{} -> {:?}", token, self.stack);
        Ok(())
    }

    fn pop_operand(&mut self, token: &Token) -> Result<f64, EvalError> {
        self.stack
            .pop()
            .ok_or_else(|| EvalError::InsufficientOperands(token.describe()))
    }
}

/// Shorthand for [`PostfixEvaluator::evaluate_postfix`].
pub fn evaluate(tokens: &[Token]) -> Result<f64, EvalError> {
    PostfixEvaluator::evaluate_postfix(tokens)
}
