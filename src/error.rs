use crate::span::Span;
use crate::token::Token;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    #[error("Unexpected character `{0}` at position {1}")]
    UnexpectedCharacter(char, Span),

    #[error("Invalid number literal at position {0}")]
    InvalidNumber(Span),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Parenthesis opened at position {0} is never closed")]
    UnmatchedParen(Span),

    #[error("Unexpected token `{0}` at position {1}{}", diagnostic_expect_token(.2))]
    UnexpectedToken(Token, Span, Option<Token>),

    #[error("Parse have leftover tokens starting at position {0}")]
    TrailingInput(Span),

    #[error("Unexpected end of input, expected a number or `(`")]
    UnexpectedEnd,

    #[error("Expression nesting exceeds the limit of {0}")]
    TooDeep(usize),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Divide by 0")]
    DivisionByZero,

    #[error("Result `{0}` is not an integer")]
    NotAnInteger(f64),
}

/// Failure of any stage of [`crate::evaluate_expression`]; only the first error is reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpressionError {
    #[error("Lex error: {0}")]
    Token(#[from] TokenError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

impl TokenError {
    pub fn span(&self) -> Span {
        match self {
            TokenError::UnexpectedCharacter(_, s) => *s,
            TokenError::InvalidNumber(s) => *s,
        }
    }
}

impl ParseError {
    pub fn span(&self) -> Option<Span> {
        use ParseError::*;
        match self {
            UnmatchedParen(s) => Some(*s),
            UnexpectedToken(_, s, _) => Some(*s),
            TrailingInput(s) => Some(*s),
            UnexpectedEnd | TooDeep(_) => None,
        }
    }
}

impl ExpressionError {
    /// Position of the offending input, where the failing stage knows one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ExpressionError::Token(e) => Some(e.span()),
            ExpressionError::Parse(e) => e.span(),
            ExpressionError::Eval(_) => None,
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self, ExpressionError::Token(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, ExpressionError::Parse(_))
    }

    pub fn is_eval(&self) -> bool {
        matches!(self, ExpressionError::Eval(_))
    }

    /// 1-based row and column of [`ExpressionError::span`] within `input`.
    pub fn get_source_start(&self, input: &str) -> Option<(usize, usize)> {
        self.span().map(|s| s.to_start_row_col(input))
    }
}

fn diagnostic_expect_token(o: &Option<Token>) -> String {
    match o {
        None => "".to_string(),
        Some(t) => format!(", expected token `{}`", t),
    }
}
