pub mod convert;
pub mod format;
pub mod rpn;
pub mod shell;

pub use convert::{convert, ConversionError, Dimension, Unit};
pub use format::format_number;
pub use rpn::{
    evaluate, parse, Associativity, CalcError, EvalError, Function, Operator, ParseError, Token,
};

/// Parses and evaluates an infix expression in one call.
pub fn evaluate_expression(expression: &str) -> Result<f64, CalcError> {
    let postfix = parse(expression)?;
    Ok(evaluate(&postfix)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_expression() {
        assert_eq!(evaluate_expression("2 + 3 * 4"), Ok(14.0));
        assert_eq!(evaluate_expression("( 2 + 3 ) * 4"), Ok(20.0));
        assert_eq!(evaluate_expression("2 ^ 3 ^ 2"), Ok(512.0));
        assert_eq!(evaluate_expression("-2 ^ 2"), Ok(4.0));
        assert_eq!(evaluate_expression("abs(-5) + 3"), Ok(8.0));
    }

    #[test]
    fn test_error_cases() {
        assert_eq!(
            evaluate_expression(""),
            Err(CalcError::Parse(ParseError::EmptyExpression))
        );
        assert_eq!(
            evaluate_expression("(1+2"),
            Err(CalcError::Parse(ParseError::MismatchedParentheses))
        );
        assert!(matches!(
            evaluate_expression("1+"),
            Err(CalcError::Eval(EvalError::InsufficientOperands(_)))
        ));
        assert_eq!(
            evaluate_expression("5/0"),
            Err(CalcError::Eval(EvalError::DivisionByZero))
        );
        assert_eq!(
            evaluate_expression("1 2"),
            Err(CalcError::Eval(EvalError::MalformedExpression))
        );
        assert_eq!(
            evaluate_expression("sin(1)"),
            Err(CalcError::Parse(ParseError::UnknownIdentifier(
                "sin".to_string()
            )))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = evaluate_expression("5/0").unwrap_err();
        assert_eq!(err.to_string(), "Division by zero.");
        let err = evaluate_expression("(1").unwrap_err();
        assert_eq!(err.to_string(), "Mismatched parentheses.");
        let err = evaluate_expression("(-)").unwrap_err();
        assert_eq!(err.to_string(), "Insufficient operands for 'unary minus'.");
    }

    #[test]
    fn test_every_input_yields_value_or_error() {
        let insufficient = |symbol: &str| -> Result<f64, CalcError> {
            Err(CalcError::Eval(EvalError::InsufficientOperands(
                symbol.to_string(),
            )))
        };
        let mismatched: Result<f64, CalcError> =
            Err(CalcError::Parse(ParseError::MismatchedParentheses));

        assert_eq!(evaluate_expression("1+2"), Ok(3.0));
        assert_eq!(evaluate_expression("(("), mismatched);
        assert_eq!(evaluate_expression("))"), mismatched);
        assert_eq!(evaluate_expression("abs("), mismatched);
        assert_eq!(evaluate_expression("-"), insufficient("unary minus"));
        assert_eq!(evaluate_expression("abs"), insufficient("abs"));
        assert_eq!(evaluate_expression("2^^3"), insufficient("^"));
        assert_eq!(evaluate_expression("+"), insufficient("+"));
        assert_eq!(
            evaluate_expression("3..4"),
            Err(CalcError::Parse(ParseError::InvalidNumberLiteral(
                "3..4".to_string()
            )))
        );
        assert_eq!(
            evaluate_expression("4/-0"),
            Err(CalcError::Eval(EvalError::DivisionByZero))
        );
        assert_eq!(
            evaluate_expression("abs(1)(2)"),
            Err(CalcError::Eval(EvalError::MalformedExpression))
        );
    }

    #[test]
    fn test_overflowing_literal_is_not_a_result() {
        let literal = "9".repeat(400);
        assert_eq!(
            evaluate_expression(&literal),
            Err(CalcError::Parse(ParseError::InvalidNumberLiteral(literal)))
        );
    }
}
