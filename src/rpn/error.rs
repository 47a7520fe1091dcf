use thiserror::Error;

/// Failures raised while turning infix text into postfix tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty expression.")]
    EmptyExpression,
    #[error("Unknown function or identifier: {0}. Only 'abs' is supported.")]
    UnknownIdentifier(String),
    #[error("Mismatched parentheses.")]
    MismatchedParentheses,
    #[error("Invalid number literal: {0}")]
    InvalidNumberLiteral(String),
}

/// Failures raised while reducing a postfix sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Insufficient operands for '{0}'.")]
    InsufficientOperands(String),
    #[error("Division by zero.")]
    DivisionByZero,
    #[error("Expression contains extraneous values or operators.")]
    MalformedExpression,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
