use crate::rpn::{format_tokens, Function, Operator, ParseError, Token};
use log::{debug, trace, warn};
use std::iter::Peekable;
use std::str::Chars;

/// Infix to postfix conversion with an explicit operator stack.
pub struct ShuntingYard {
    output: Vec<Token>,
    operators: Vec<Token>,
    // true at the start, after `(` and after any operator: a `-` here is unary
    expect_value: bool,
}

impl ShuntingYard {
    fn new() -> Self {
        Self {
            output: Vec::new(),
            operators: Vec::new(),
            expect_value: true,
        }
    }

    /// Converts an infix expression into its postfix token sequence.
    ///
    /// Whitespace is discarded, but it still ends a numeric run, so `"1 2"`
    /// produces two separate numbers.
    pub fn parse_expression(expression: &str) -> Result<Vec<Token>, ParseError> {
        debug!("Parsing expression: {}", expression);
        if expression.chars().all(char::is_whitespace) {
            return Err(ParseError::EmptyExpression);
        }

        let mut state = Self::new();
        let mut chars = expression.chars().peekable();

        while let Some(c) = chars.next() {
            if c.is_whitespace() {
                continue;
            }

            if c.is_ascii_digit() || c == '.' {
                let literal = take_run(c, &mut chars, |next| next.is_ascii_digit() || next == '.');
                state.push_number(&literal)?;
            } else if c.is_alphabetic() {
                let name = take_run(c, &mut chars, char::is_alphabetic);
                let function: Function = name.parse()?;
                trace!("push function {}", function);
                state.operators.push(Token::Function(function));
            } else if c == '(' {
                state.operators.push(Token::LeftParen);
                state.expect_value = true;
            } else if c == ')' {
                state.close_group()?;
            } else if let Ok(operator) = Operator::try_from(c) {
                let token = if operator == Operator::Subtract && state.expect_value {
                    Token::UnaryMinus
                } else {
                    Token::Operator(operator)
                };
                state.push_operator(token);
            } else {
                warn!("Skipping unexpected character '{}' in '{}'", c, expression);
            }
        }

        let postfix = state.finish()?;
        debug!("Postfix: {}", format_tokens(&postfix));
        Ok(postfix)
    }

    fn push_number(&mut self, literal: &str) -> Result<(), ParseError> {
        let value = literal
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ParseError::InvalidNumberLiteral(literal.to_string()))?;
        self.output.push(Token::Number(value));
        self.expect_value = false;
        Ok(())
    }

    fn push_operator(&mut self, incoming: Token) {
        while let Some(top) = self.operators.last() {
            if !top.dominates(&incoming) {
                break;
            }
            if let Some(top) = self.operators.pop() {
                trace!("pop {} before {}", top, incoming);
                self.output.push(top);
            }
        }
        self.operators.push(incoming);
        self.expect_value = true;
    }

    fn close_group(&mut self) -> Result<(), ParseError> {
        loop {
            match self.operators.pop() {
                Some(Token::LeftParen) => break,
                Some(token) => self.output.push(token),
                None => return Err(ParseError::MismatchedParentheses),
            }
        }

        // a function waits on the stack until its argument group closes
        if let Some(Token::Function(function)) = self.operators.last() {
            self.output.push(Token::Function(*function));
            self.operators.pop();
        }

        self.expect_value = false;
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Token>, ParseError> {
        while let Some(token) = self.operators.pop() {
            if matches!(token, Token::LeftParen | Token::RightParen) {
                return Err(ParseError::MismatchedParentheses);
            }
            self.output.push(token);
        }
        Ok(self.output)
    }
}

fn take_run<F>(first: char, chars: &mut Peekable<Chars<'_>>, accept: F) -> String
where
    F: Fn(char) -> bool,
{
    let mut run = String::from(first);
    while let Some(&next) = chars.peek() {
        if !accept(next) {
            break;
        }
        run.push(next);
        chars.next();
    }
    run
}

/// Shorthand for [`ShuntingYard::parse_expression`].
pub fn parse(expression: &str) -> Result<Vec<Token>, ParseError> {
    ShuntingYard::parse_expression(expression)
}
