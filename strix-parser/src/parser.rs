// strix-parser - Parser for Strix
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Recursive descent parser for Strix source code.
//!
//! Converts tokens into `StrixVal` AST nodes. The AST is the runtime data
//! model: reading `(+ 1 2)` yields the same list value that `(list '+ 1 2)`
//! builds at runtime.

use std::fmt;

use crate::keyword::Keyword;
use crate::lexer::{Lexer, LexerError, Token};
use crate::symbol::Symbol;
use crate::value::StrixVal;

/// Reader failure.
///
/// `Blank` is a control signal rather than a reportable error: it means the
/// input held no forms at all (empty, or only whitespace and comments), so
/// a driver can skip the line silently.
#[derive(Debug, Clone)]
pub enum ReadError {
    /// The input contained no forms
    Blank,
    /// Malformed input, with position information
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Blank => write!(f, "blank input"),
            ReadError::Syntax {
                message,
                line,
                column,
            } => {
                write!(f, "Syntax error at {}:{}: {}", line, column, message)
            }
        }
    }
}

impl std::error::Error for ReadError {}

impl From<LexerError> for ReadError {
    fn from(e: LexerError) -> Self {
        ReadError::Syntax {
            message: e.message,
            line: e.line,
            column: e.column,
        }
    }
}

/// The parser converts tokens into `StrixVal` AST nodes.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    line: usize,
    column: usize,
}

/// Read the first form from a source string.
///
/// Fails with [`ReadError::Blank`] when the input holds no forms.
pub fn read_str(source: &str) -> Result<StrixVal, ReadError> {
    let mut parser = Parser::new(source)?;
    parser.parse()?.ok_or(ReadError::Blank)
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source code.
    pub fn new(source: &'a str) -> Result<Self, ReadError> {
        let mut lexer = Lexer::new(source);
        // Capture position before the first token
        let line = lexer.line();
        let column = lexer.column();
        let current = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current,
            line,
            column,
        })
    }

    /// Parse a single form from the source.
    /// Returns None if at end of input.
    pub fn parse(&mut self) -> Result<Option<StrixVal>, ReadError> {
        if matches!(self.current, Token::Eof) {
            return Ok(None);
        }
        let val = self.parse_form()?;
        Ok(Some(val))
    }

    /// Parse all forms from the source.
    pub fn parse_all(&mut self) -> Result<Vec<StrixVal>, ReadError> {
        let mut forms = Vec::new();
        while let Some(form) = self.parse()? {
            forms.push(form);
        }
        Ok(forms)
    }

    // ========================================================================
    // Internal parsing methods
    // ========================================================================

    fn advance(&mut self) -> Result<Token, ReadError> {
        let prev = std::mem::replace(&mut self.current, Token::Eof);
        // Capture position of the next token before fetching it
        self.line = self.lexer.line();
        self.column = self.lexer.column();
        self.current = self.lexer.next_token()?;
        Ok(prev)
    }

    fn error(&self, message: String) -> ReadError {
        ReadError::Syntax {
            message,
            line: self.line,
            column: self.column,
        }
    }

    fn parse_form(&mut self) -> Result<StrixVal, ReadError> {
        match &self.current {
            // Literals
            Token::Nil => {
                self.advance()?;
                Ok(StrixVal::nil())
            }
            Token::True => {
                self.advance()?;
                Ok(StrixVal::bool(true))
            }
            Token::False => {
                self.advance()?;
                Ok(StrixVal::bool(false))
            }
            Token::Number(n) => {
                let n = *n;
                self.advance()?;
                Ok(StrixVal::number(n))
            }
            Token::String(s) => {
                let s = s.clone();
                self.advance()?;
                Ok(StrixVal::string(s))
            }
            Token::Symbol(s) => {
                let s = s.clone();
                self.advance()?;
                Ok(StrixVal::symbol(Symbol::new(&s)))
            }
            Token::Keyword(s) => {
                let s = s.clone();
                self.advance()?;
                Ok(StrixVal::keyword(Keyword::new(&s)))
            }

            // Collections
            Token::LParen => self.parse_list(),
            Token::LBracket => self.parse_vector(),
            Token::LBrace => self.parse_map(),

            // Reader macros
            Token::Quote => self.parse_quote("quote"),
            Token::Quasiquote => self.parse_quote("quasiquote"),
            Token::Unquote => self.parse_quote("unquote"),
            Token::SpliceUnquote => self.parse_quote("splice-unquote"),
            Token::Deref => self.parse_quote("deref"),
            Token::Meta => self.parse_meta(),

            // Unexpected tokens
            Token::RParen => Err(self.error("Unexpected ')'".to_string())),
            Token::RBracket => Err(self.error("Unexpected ']'".to_string())),
            Token::RBrace => Err(self.error("Unexpected '}'".to_string())),
            Token::Eof => Err(self.error("Unexpected end of input".to_string())),
        }
    }

    fn parse_seq(&mut self, close: &Token) -> Result<Vec<StrixVal>, ReadError> {
        self.advance()?; // consume the opening delimiter
        let mut elements = Vec::new();

        loop {
            if self.current == *close {
                self.advance()?;
                return Ok(elements);
            }
            if matches!(self.current, Token::Eof) {
                return Err(self.error(format!("Unexpected end of input, expected '{}'", close)));
            }
            elements.push(self.parse_form()?);
        }
    }

    fn parse_list(&mut self) -> Result<StrixVal, ReadError> {
        let elements = self.parse_seq(&Token::RParen)?;
        Ok(StrixVal::list(elements))
    }

    fn parse_vector(&mut self) -> Result<StrixVal, ReadError> {
        let elements = self.parse_seq(&Token::RBracket)?;
        Ok(StrixVal::vector(elements))
    }

    fn parse_map(&mut self) -> Result<StrixVal, ReadError> {
        let forms = self.parse_seq(&Token::RBrace)?;
        let map = StrixVal::map_from_seq(&forms).map_err(|msg| self.error(msg))?;
        Ok(StrixVal::map(map))
    }

    fn parse_quote(&mut self, name: &str) -> Result<StrixVal, ReadError> {
        self.advance()?; // consume the quote token
        let form = self.parse_form()?;
        Ok(StrixVal::list(vec![
            StrixVal::symbol(Symbol::new(name)),
            form,
        ]))
    }

    /// `^meta target` reads the metadata form first in source order, but
    /// yields `(with-meta target meta)`.
    fn parse_meta(&mut self) -> Result<StrixVal, ReadError> {
        self.advance()?; // consume ^
        let meta = self.parse_form()?;
        let target = self.parse_form()?;
        Ok(StrixVal::list(vec![
            StrixVal::symbol(Symbol::new("with-meta")),
            target,
            meta,
        ]))
    }
}

// ============================================================================
// Tests
// ============================================================================
