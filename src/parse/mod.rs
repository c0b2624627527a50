mod context;
mod parser;

pub use context::DEFAULT_MAX_DEPTH;
pub use parser::parse;
