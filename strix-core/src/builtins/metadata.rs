// strix-core - Metadata built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Metadata operations: meta, with-meta

use std::rc::Rc;

use strix_parser::StrixVal;

use crate::error::{Error, Result};

/// (meta x) - the attached metadata, or nil
pub(crate) fn builtin_meta(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("meta", 1, args.len()));
    }
    Ok(args[0]
        .meta()
        .map(|meta| (**meta).clone())
        .unwrap_or(StrixVal::Nil))
}

/// (with-meta x meta) - a copy of x carrying meta; x is untouched
pub(crate) fn builtin_with_meta(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 2 {
        return Err(Error::arity_named("with-meta", 2, args.len()));
    }
    args[0]
        .with_meta(Rc::new(args[1].clone()))
        .ok_or_else(|| {
            Error::type_error_in(
                "with-meta",
                "collection, function, or atom",
                args[0].type_name(),
            )
        })
}
