//! Lexical analysis module
//!
//! This module handles tokenization of Lox source code.

pub mod scanner;
pub mod token;

pub use scanner::Lexer;
pub use token::{keyword, Literal, Token, TokenKind, KEYWORDS};
