// strix-core - Exception built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! User-raised exceptions: throw

use strix_parser::StrixVal;

use crate::error::{Error, Result};

/// (throw x) - raise x; unwinds to the nearest try*/catch*
pub(crate) fn builtin_throw(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("throw", 1, args.len()));
    }
    Err(Error::Thrown(args[0].clone()))
}
