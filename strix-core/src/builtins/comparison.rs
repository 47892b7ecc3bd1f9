// strix-core - Comparison built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Comparison operations: =, <, <=, >, >=
//!
//! `=` is structural equality over the whole value model; the ordering
//! operators are defined on numbers only.

use strix_parser::StrixVal;

use super::expect_number;
use crate::error::{Error, Result};

/// (= a b) - structural equality
pub(crate) fn builtin_eq(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 2 {
        return Err(Error::arity_named("=", 2, args.len()));
    }
    Ok(StrixVal::bool(args[0] == args[1]))
}

fn binary_numbers(name: &'static str, args: &[StrixVal]) -> Result<(f64, f64)> {
    if args.len() != 2 {
        return Err(Error::arity_named(name, 2, args.len()));
    }
    Ok((expect_number(name, &args[0])?, expect_number(name, &args[1])?))
}

/// (< a b)
pub(crate) fn builtin_lt(args: &[StrixVal]) -> Result<StrixVal> {
    let (a, b) = binary_numbers("<", args)?;
    Ok(StrixVal::bool(a < b))
}

/// (<= a b)
pub(crate) fn builtin_le(args: &[StrixVal]) -> Result<StrixVal> {
    let (a, b) = binary_numbers("<=", args)?;
    Ok(StrixVal::bool(a <= b))
}

/// (> a b)
pub(crate) fn builtin_gt(args: &[StrixVal]) -> Result<StrixVal> {
    let (a, b) = binary_numbers(">", args)?;
    Ok(StrixVal::bool(a > b))
}

/// (>= a b)
pub(crate) fn builtin_ge(args: &[StrixVal]) -> Result<StrixVal> {
    let (a, b) = binary_numbers(">=", args)?;
    Ok(StrixVal::bool(a >= b))
}
