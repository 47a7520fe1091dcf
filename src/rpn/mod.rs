use std::fmt;
use std::str::FromStr;

mod error;
mod evaluator;
mod parser;

pub use error::{CalcError, EvalError, ParseError};
pub use evaluator::{evaluate, PostfixEvaluator};
pub use parser::{parse, ShuntingYard};

/// Unary minus outranks every binary operator, `^` included.
pub const UNARY_MINUS_PRECEDENCE: u8 = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    UnaryMinus,
    Function(Function),
    LeftParen,
    RightParen,
}

impl Token {
    /// Precedence and associativity for tokens that take part in the
    /// shunting-yard pop loop. Parentheses and functions return `None`.
    pub fn binding(&self) -> Option<(u8, Associativity)> {
        match self {
            Token::Operator(operator) => Some((operator.precedence(), operator.associativity())),
            Token::UnaryMinus => Some((UNARY_MINUS_PRECEDENCE, Associativity::Right)),
            _ => None,
        }
    }

    /// Name used in error messages; unary minus has no printable symbol of its own.
    pub fn describe(&self) -> String {
        match self {
            Token::UnaryMinus => "unary minus".to_string(),
            other => other.to_string(),
        }
    }

    /// Whether `self`, sitting on the operator stack, must be emitted before
    /// `incoming` is pushed.
    pub fn dominates(&self, incoming: &Token) -> bool {
        match (self.binding(), incoming.binding()) {
            (Some((top, _)), Some((next, associativity))) => {
                top > next || (top == next && associativity == Associativity::Left)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::UnaryMinus => write!(f, "~"),
            Token::Function(function) => write!(f, "{}", function),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Renders a token sequence space separated, e.g. `2 3 4 * +`.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Power => 3,
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            Operator::Power => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }

    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Operator::Power => Ok(left.powf(right)),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            '^' => Ok(Operator::Power),
            other => Err(other),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Built-in single-argument functions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Abs,
}

impl Function {
    pub fn name(&self) -> &'static str {
        match self {
            Function::Abs => "abs",
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Function::Abs => value.abs(),
        }
    }
}

impl FromStr for Function {
    type Err = ParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "abs" => Ok(Function::Abs),
            _ => Err(ParseError::UnknownIdentifier(name.to_string())),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
