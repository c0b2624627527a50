use log::trace;

use crate::ast::{BinaryOp, Expression, UnaryOp};
use crate::error::ParseError;
use crate::lex::LexItem;
use crate::token::Token;

use super::context::Context;

// expr    := term (("+" | "-") term)*
// term    := factor (("*" | "/") factor)*
// factor  := NUMBER | "(" expr ")" | "-" factor
pub fn parse(items: &[LexItem], max_depth: usize) -> Result<Expression, ParseError> {
    let mut state = Context::new(items, max_depth);
    let expr = parse_expr(&mut state)?;
    match state.get_curr() {
        Err(_) => {
            trace!("parsed {} lex items", items.len());
            Ok(expr)
        }
        Ok(li) => Err(ParseError::TrailingInput(li.span)),
    }
}

fn parse_expr(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(
        state,
        &[(Token::Plus, BinaryOp::Add), (Token::Minus, BinaryOp::Sub)],
        parse_term,
    )
}

fn parse_term(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(
        state,
        &[(Token::Star, BinaryOp::Mul), (Token::Slash, BinaryOp::Div)],
        parse_factor,
    )
}

fn parse_recursive_binary<F>(
    state: &mut Context,
    match_ops: &'static [(Token, BinaryOp)],
    lower_fn: F,
) -> Result<Expression, ParseError>
where
    F: Fn(&mut Context) -> Result<Expression, ParseError>,
{
    let mut lhs = lower_fn(state)?;

    while let Ok(li) = state.get_curr() {
        let Some(&(_, op)) = match_ops.iter().find(|(token, _)| *token == li.token) else {
            break;
        };
        state.advance();
        let rhs = lower_fn(state)?;
        lhs = Expression::binary(op, lhs, rhs);
    }

    Ok(lhs)
}

fn parse_factor(state: &mut Context) -> Result<Expression, ParseError> {
    let li = state.get_curr()?;
    match li.token {
        Token::Number => {
            state.advance();
            Ok(Expression::Literal(li.value))
        }
        Token::LeftParen => parse_group(state),
        Token::Minus => parse_negation(state),
        _ => Err(ParseError::UnexpectedToken(li.token, li.span, None)),
    }
}

fn parse_group(state: &mut Context) -> Result<Expression, ParseError> {
    let open = state.get_curr()?;
    state.advance();
    state.descend()?;

    let expr = parse_expr(state)?;

    if !state.peek(&[Token::RightParen]) {
        if state.is_at_end() || !state.is_ahead(Token::RightParen) {
            return Err(ParseError::UnmatchedParen(open.span));
        }
        let li = state.get_curr()?;
        return Err(ParseError::UnexpectedToken(
            li.token,
            li.span,
            Some(Token::RightParen),
        ));
    }
    state.advance();

    state.ascend();
    Ok(expr)
}

fn parse_negation(state: &mut Context) -> Result<Expression, ParseError> {
    state.advance();
    state.descend()?;
    let node = parse_factor(state)?;
    state.ascend();
    Ok(Expression::unary(UnaryOp::Neg, node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::lex;
    use crate::parse::DEFAULT_MAX_DEPTH;
    use crate::span::Span;

    use BinaryOp::*;
    use Expression::Literal;

    fn parse_str(input: &str) -> Result<Expression, ParseError> {
        parse(&lex(input).unwrap(), DEFAULT_MAX_DEPTH)
    }

    fn neg(node: Expression) -> Expression {
        Expression::unary(UnaryOp::Neg, node)
    }

    #[test]
    fn parse_number() {
        assert_eq!(parse_str("42"), Ok(Literal(42.0)));
        assert_eq!(parse_str("(3.5)"), Ok(Literal(3.5)));
    }

    #[test]
    fn parse_precedence() {
        assert_eq!(
            parse_str("2 + 3 * 4"),
            Ok(Expression::binary(
                Add,
                Literal(2.0),
                Expression::binary(Mul, Literal(3.0), Literal(4.0))
            ))
        );
        assert_eq!(
            parse_str("(2 + 3) * 4"),
            Ok(Expression::binary(
                Mul,
                Expression::binary(Add, Literal(2.0), Literal(3.0)),
                Literal(4.0)
            ))
        );
    }

    #[test]
    fn parse_left_associative() {
        assert_eq!(
            parse_str("8 - 4 - 2"),
            Ok(Expression::binary(
                Sub,
                Expression::binary(Sub, Literal(8.0), Literal(4.0)),
                Literal(2.0)
            ))
        );
        assert_eq!(
            parse_str("8 / 4 * 2"),
            Ok(Expression::binary(
                Mul,
                Expression::binary(Div, Literal(8.0), Literal(4.0)),
                Literal(2.0)
            ))
        );
    }

    #[test]
    fn parse_unary_minus() {
        assert_eq!(parse_str("-5"), Ok(neg(Literal(5.0))));
        assert_eq!(parse_str("--5"), Ok(neg(neg(Literal(5.0)))));
        assert_eq!(
            parse_str("-(3+4)"),
            Ok(neg(Expression::binary(Add, Literal(3.0), Literal(4.0))))
        );
        assert_eq!(
            parse_str("2 * -3"),
            Ok(Expression::binary(Mul, Literal(2.0), neg(Literal(3.0))))
        );
        assert_eq!(
            parse_str("-2 * 3"),
            Ok(Expression::binary(Mul, neg(Literal(2.0)), Literal(3.0)))
        );
    }

    #[test]
    fn parse_unmatched_paren() {
        assert_eq!(
            parse_str("(1 + 2"),
            Err(ParseError::UnmatchedParen(Span::one(0)))
        );
        assert_eq!(
            parse_str("2 * ((1)"),
            Err(ParseError::UnmatchedParen(Span::one(4)))
        );
        assert_eq!(
            parse_str("(1 2"),
            Err(ParseError::UnmatchedParen(Span::one(0)))
        );
        assert_eq!(
            parse_str("3 * (4 5 + 1"),
            Err(ParseError::UnmatchedParen(Span::one(4)))
        );
    }

    #[test]
    fn parse_unexpected_token() {
        assert_eq!(
            parse_str("1 + )"),
            Err(ParseError::UnexpectedToken(
                Token::RightParen,
                Span::one(4),
                None
            ))
        );
        assert_eq!(
            parse_str("()"),
            Err(ParseError::UnexpectedToken(
                Token::RightParen,
                Span::one(1),
                None
            ))
        );
        assert_eq!(
            parse_str("(1 2)"),
            Err(ParseError::UnexpectedToken(
                Token::Number,
                Span::one(3),
                Some(Token::RightParen)
            ))
        );
        assert_eq!(
            parse_str("* 2"),
            Err(ParseError::UnexpectedToken(Token::Star, Span::one(0), None))
        );
    }

    #[test]
    fn parse_trailing_input() {
        assert_eq!(
            parse_str("1 )"),
            Err(ParseError::TrailingInput(Span::one(2)))
        );
        assert_eq!(
            parse_str("2 (3)"),
            Err(ParseError::TrailingInput(Span::one(2)))
        );
        assert_eq!(
            parse_str("1 2"),
            Err(ParseError::TrailingInput(Span::one(2)))
        );
    }

    #[test]
    fn parse_unexpected_end() {
        assert_eq!(parse_str("3 * "), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse_str(""), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse_str("-"), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse_str("("), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn parse_depth_limit() {
        let items = lex("((1))").unwrap();
        assert_eq!(parse(&items, 2), Ok(Literal(1.0)));
        assert_eq!(parse(&items, 1), Err(ParseError::TooDeep(1)));

        let items = lex("--1").unwrap();
        assert_eq!(parse(&items, 1), Err(ParseError::TooDeep(1)));
    }

    #[test]
    fn parse_depth_resets_between_groups() {
        let items = lex("(1) + (2) + (3)").unwrap();
        assert!(parse(&items, 1).is_ok());
    }

    #[test]
    fn parse_long_chain_without_depth_limit() {
        let input = format!("{}1", "1*".repeat(100_000));
        assert!(parse_str(&input).is_ok());
    }

    #[test]
    fn parse_deeply_nested_input_fails_cleanly() {
        let input = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(
            parse_str(&input),
            Err(ParseError::TooDeep(DEFAULT_MAX_DEPTH))
        );
    }
}
