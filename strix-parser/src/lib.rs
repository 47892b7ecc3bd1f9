// strix-parser - Reader and value model for the Strix programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # strix-parser
//!
//! Lexer, parser, printer, and value model for the Strix programming
//! language. Produces `StrixVal` AST from source code strings; the same
//! representation is the runtime data model.

pub mod keyword;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod symbol;
pub mod value;

pub use im::{OrdMap, Vector};
pub use keyword::Keyword;
pub use lexer::{Lexer, LexerError, Token};
pub use parser::{read_str, Parser, ReadError};
pub use printer::pr_str;
pub use symbol::Symbol;
pub use value::{MapKey, StrixAtom, StrixFn, StrixNativeFn, StrixVal};
