use log::trace;
use phf::phf_map;

use crate::error::TokenError;
use crate::span::Span;
use crate::token::Token;

static SINGLE_CHAR_TOKENS: phf::Map<char, Token> = phf_map! {
    '(' => Token::LeftParen,
    ')' => Token::RightParen,
    '+' => Token::Plus,
    '-' => Token::Minus,
    '*' => Token::Star,
    '/' => Token::Slash,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexItem {
    pub span: Span,
    pub token: Token,
    // only set for `Token::Number`
    pub value: f64,
}

impl LexItem {
    pub fn new(token: Token, span: Span) -> Self {
        LexItem {
            token,
            span,
            value: 0.0,
        }
    }

    pub fn number(value: f64, span: Span) -> Self {
        LexItem {
            token: Token::Number,
            span,
            value,
        }
    }
}

/// Splits `input` into lex items. The last item is always `Token::Eof`.
pub fn lex(input: &str) -> Result<Vec<LexItem>, TokenError> {
    let chars = input.chars().collect::<Vec<char>>();
    let mut curr_offset = 0;
    let mut result = vec![];

    while let Some(&c) = chars.get(curr_offset) {
        if let Some(&token) = SINGLE_CHAR_TOKENS.get(&c) {
            result.push(LexItem::new(token, Span::one(curr_offset)));
        } else if c.is_whitespace() {
            // skip
        } else if c.is_ascii_digit() {
            result.push(lex_number(input, &chars, &mut curr_offset)?);
        } else {
            return Err(TokenError::UnexpectedCharacter(c, Span::one(curr_offset)));
        }
        curr_offset += 1;
    }

    result.push(LexItem::new(Token::Eof, Span::one(chars.len())));

    for item in &result {
        trace!("{} - {:?}", item.span, item.token);
    }

    Ok(result)
}

// Leaves `offset` on the last char of the numeral.
fn lex_number(input: &str, chars: &[char], offset: &mut usize) -> Result<LexItem, TokenError> {
    let start_offset = *offset;

    consume_digits(chars, offset);

    if chars.get(*offset + 1) == Some(&'.') {
        *offset += 1;
        if !chars.get(*offset + 1).is_some_and(char::is_ascii_digit) {
            return Err(TokenError::InvalidNumber(Span::new(start_offset, *offset)));
        }
        *offset += 1;
        consume_digits(chars, offset);
    }

    let span = Span::new(start_offset, *offset);
    match span.str_from_source(input).parse::<f64>() {
        Err(_) => Err(TokenError::InvalidNumber(span)),
        Ok(num) => Ok(LexItem::number(num, span)),
    }
}

fn consume_digits(chars: &[char], offset: &mut usize) {
    while let Some(c) = chars.get(*offset + 1) {
        if !c.is_ascii_digit() {
            break;
        }
        *offset += 1;
    }
}
