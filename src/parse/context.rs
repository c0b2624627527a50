use crate::error::ParseError;
use crate::lex::LexItem;
use crate::token::Token;

pub const DEFAULT_MAX_DEPTH: usize = 256;

pub struct Context<'a> {
    items: &'a [LexItem],
    curr_pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Context<'a> {
    pub fn new(items: &'a [LexItem], max_depth: usize) -> Self {
        Self {
            items,
            curr_pos: 0,
            depth: 0,
            max_depth,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.peek(&[Token::Eof]) || self.curr_pos >= self.items.len()
    }

    pub fn advance(&mut self) {
        self.curr_pos += 1;
    }

    pub fn peek(&self, match_tokens: &'static [Token]) -> bool {
        self.items
            .get(self.curr_pos)
            .map(|li| match_tokens.contains(&li.token))
            .unwrap_or(false)
    }

    /// Whether `token` appears anywhere from the cursor onwards.
    pub fn is_ahead(&self, token: Token) -> bool {
        self.items
            .get(self.curr_pos..)
            .is_some_and(|rest| rest.iter().any(|li| li.token == token))
    }

    pub fn get_curr(&self) -> Result<LexItem, ParseError> {
        match self.items.get(self.curr_pos) {
            Some(li) if li.token != Token::Eof => Ok(*li),
            _ => Err(ParseError::UnexpectedEnd),
        }
    }

    /// Enter one more level of `(` or unary minus.
    pub fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::TooDeep(self.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn ascend(&mut self) {
        self.depth -= 1;
    }
}
