// strix-core - Higher-order built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Higher-order functions: apply, map

use strix_parser::StrixVal;

use super::seq_items;
use crate::error::{Error, Result};
use crate::eval::apply;

/// (apply f & args seq) - call f with the leading args followed by the
/// elements of the final sequence
pub(crate) fn builtin_apply(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() < 2 {
        return Err(Error::arity_at_least("apply", 2, args.len()));
    }
    let func = &args[0];
    let last = &args[args.len() - 1];
    let tail = seq_items(last)
        .ok_or_else(|| Error::type_error_in("apply", "list or vector", last.type_name()))?;

    let mut call_args: Vec<StrixVal> = args[1..args.len() - 1].to_vec();
    call_args.extend(tail);
    apply(func, &call_args)
}

/// (map f seq) - a new list of f applied to each element
pub(crate) fn builtin_map(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 2 {
        return Err(Error::arity_named("map", 2, args.len()));
    }
    if !matches!(args[0], StrixVal::Fn(_) | StrixVal::NativeFn(_)) {
        return Err(Error::type_error_in(
            "map",
            "function",
            args[0].type_name(),
        ));
    }
    let items = seq_items(&args[1])
        .ok_or_else(|| Error::type_error_in("map", "list or vector", args[1].type_name()))?;

    let mut result = Vec::with_capacity(items.len());
    for item in items {
        result.push(apply(&args[0], &[item])?);
    }
    Ok(StrixVal::list(result))
}
