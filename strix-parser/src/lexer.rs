// strix-parser - Lexer for Strix
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Lexer (tokeniser) for Strix source code.
//!
//! Converts a source string into a stream of tokens. Whitespace and commas
//! separate tokens; `;` starts a comment running to the end of the line.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Delimiters
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    LBrace,   // {
    RBrace,   // }

    // Reader macros
    Quote,         // '
    Quasiquote,    // `
    Unquote,       // ~
    SpliceUnquote, // ~@
    Deref,         // @
    Meta,          // ^

    // Literals
    Nil,
    True,
    False,
    Number(f64),
    String(String),
    Symbol(String),
    Keyword(String),

    // Special
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::Quote => write!(f, "'"),
            Token::Quasiquote => write!(f, "`"),
            Token::Unquote => write!(f, "~"),
            Token::SpliceUnquote => write!(f, "~@"),
            Token::Deref => write!(f, "@"),
            Token::Meta => write!(f, "^"),
            Token::Nil => write!(f, "nil"),
            Token::True => write!(f, "true"),
            Token::False => write!(f, "false"),
            Token::Number(n) => write!(f, "{}", n),
            Token::String(s) => write!(f, "\"{}\"", s),
            Token::Symbol(s) => write!(f, "{}", s),
            Token::Keyword(s) => write!(f, ":{}", s),
            Token::Eof => write!(f, "EOF"),
        }
    }
}

/// Lexer error with position information.
#[derive(Debug, Clone)]
pub struct LexerError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Syntax error at {}:{}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for LexerError {}

/// The lexer converts source code into tokens.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Lexer {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token from the source.
    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        self.skip_whitespace_and_comments();

        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(Token::Eof),
        };

        match c {
            // Delimiters
            '(' => {
                self.advance();
                Ok(Token::LParen)
            }
            ')' => {
                self.advance();
                Ok(Token::RParen)
            }
            '[' => {
                self.advance();
                Ok(Token::LBracket)
            }
            ']' => {
                self.advance();
                Ok(Token::RBracket)
            }
            '{' => {
                self.advance();
                Ok(Token::LBrace)
            }
            '}' => {
                self.advance();
                Ok(Token::RBrace)
            }

            // Reader macros
            '\'' => {
                self.advance();
                Ok(Token::Quote)
            }
            '`' => {
                self.advance();
                Ok(Token::Quasiquote)
            }
            '~' => {
                self.advance();
                if self.peek() == Some('@') {
                    self.advance();
                    Ok(Token::SpliceUnquote)
                } else {
                    Ok(Token::Unquote)
                }
            }
            '@' => {
                self.advance();
                Ok(Token::Deref)
            }
            '^' => {
                self.advance();
                Ok(Token::Meta)
            }

            // String
            '"' => self.read_string(),

            // Bare atom: number, keyword, reserved word, or symbol
            _ => self.read_atom(),
        }
    }

    /// Collect all tokens into a vector.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if matches!(token, Token::Eof) {
                break;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Get the current line number (1-indexed).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the current column number (1-indexed).
    pub fn column(&self) -> usize {
        self.column
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next();
        if let Some(ch) = c {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        c
    }

    fn error(&self, message: String) -> LexerError {
        LexerError {
            message,
            line: self.line,
            column: self.column,
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() || c == ',' => {
                    self.advance();
                }
                Some(';') => {
                    // Skip to end of line
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn read_string(&mut self) -> Result<Token, LexerError> {
        self.advance(); // consume opening "
        let mut s = String::new();

        loop {
            match self.advance() {
                Some('"') => break,
                Some('\\') => match self.advance() {
                    Some('n') => s.push('\n'),
                    // Any other escaped character stands for itself
                    Some(c) => s.push(c),
                    None => return Err(self.error("Unterminated string".to_string())),
                },
                Some(c) => s.push(c),
                None => return Err(self.error("Unterminated string".to_string())),
            }
        }

        Ok(Token::String(s))
    }

    fn read_atom(&mut self) -> Result<Token, LexerError> {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if is_atom_terminator(c) {
                break;
            }
            text.push(c);
            self.advance();
        }

        Ok(classify_atom(&text))
    }
}

/// Check if a character ends a bare atom.
fn is_atom_terminator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '(' | ')' | '[' | ']' | '{' | '}' | '\'' | '"' | '`' | ';')
}

/// Classify a bare atom, in order: integer, float, keyword, reserved
/// word, symbol. The float shape accepts a single digit before the
/// decimal point only; anything else falls through to symbol.
fn classify_atom(text: &str) -> Token {
    if is_integer(text) {
        // All-digit text always fits the grammar, so the parse cannot fail
        if let Ok(n) = text.parse::<f64>() {
            return Token::Number(n);
        }
    }
    if is_float(text) {
        if let Ok(n) = text.parse::<f64>() {
            return Token::Number(n);
        }
    }
    if let Some(name) = text.strip_prefix(':') {
        return Token::Keyword(name.to_string());
    }
    match text {
        "nil" => Token::Nil,
        "true" => Token::True,
        "false" => Token::False,
        _ => Token::Symbol(text.to_string()),
    }
}

/// `-?[0-9]+`
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// `-?[0-9]\.[0-9]+`
fn is_float(text: &str) -> bool {
    let text = text.strip_prefix('-').unwrap_or(text);
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(d), Some('.')) if d.is_ascii_digit() => {}
        _ => return false,
    }
    let frac: Vec<char> = chars.collect();
    !frac.is_empty() && frac.iter().all(|c| c.is_ascii_digit())
}

// ============================================================================
// Tests
// ============================================================================
