//! Path-expression tokenizer
//!
//! Lexical analysis converting raw query text into a classified token sequence.
//! Malformed escapes, raw control characters and whitespace after shorthand
//! dots are rejected here, before any parsing happens.

mod characters;
mod core;
mod numbers;
mod operators;
mod stream;
mod strings;

pub use self::core::{Tokenizer, is_blank, tokenize};
pub use stream::{MAX_NESTING_DEPTH, TokenStream};
