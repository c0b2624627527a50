use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[display("(")]
    LeftParen,
    #[display(")")]
    RightParen,

    #[display("number")]
    Number,

    #[display("+")]
    Plus,
    #[display("-")]
    Minus,
    #[display("*")]
    Star,
    #[display("/")]
    Slash,

    #[display("end of input")]
    Eof,
}
