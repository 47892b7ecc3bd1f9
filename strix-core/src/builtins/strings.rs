// strix-core - Name conversion built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Conversions between strings, symbols, and keywords.

use strix_parser::{Keyword, StrixVal, Symbol};

use crate::error::{Error, Result};

/// (symbol s) - intern a string as a symbol
pub(crate) fn builtin_symbol(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("symbol", 1, args.len()));
    }
    match &args[0] {
        StrixVal::String(s) => Ok(StrixVal::symbol(Symbol::new(s))),
        other => Err(Error::type_error_in("symbol", "string", other.type_name())),
    }
}

/// (keyword s) - intern a string as a keyword; idempotent on keywords
pub(crate) fn builtin_keyword(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("keyword", 1, args.len()));
    }
    match &args[0] {
        StrixVal::Keyword(_) => Ok(args[0].clone()),
        StrixVal::String(s) => Ok(StrixVal::keyword(Keyword::new(s))),
        other => Err(Error::type_error_in(
            "keyword",
            "string or keyword",
            other.type_name(),
        )),
    }
}
