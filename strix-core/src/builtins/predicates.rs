// strix-core - Type predicate built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Type predicates: list?, vector?, map?, nil?, true?, false?, symbol?,
//! string?, number?, fn?, macro?, keyword?, atom?, sequential?

use strix_parser::StrixVal;

use crate::error::{Error, Result};

fn unary<'a>(name: &'static str, args: &'a [StrixVal]) -> Result<&'a StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named(name, 1, args.len()));
    }
    Ok(&args[0])
}

/// (list? x)
pub(crate) fn builtin_list_p(args: &[StrixVal]) -> Result<StrixVal> {
    let arg = unary("list?", args)?;
    Ok(StrixVal::bool(matches!(arg, StrixVal::List(_, _))))
}

/// (vector? x)
pub(crate) fn builtin_vector_p(args: &[StrixVal]) -> Result<StrixVal> {
    let arg = unary("vector?", args)?;
    Ok(StrixVal::bool(matches!(arg, StrixVal::Vector(_, _))))
}

/// (map? x)
pub(crate) fn builtin_map_p(args: &[StrixVal]) -> Result<StrixVal> {
    let arg = unary("map?", args)?;
    Ok(StrixVal::bool(matches!(arg, StrixVal::Map(_, _))))
}

/// (nil? x)
pub(crate) fn builtin_nil_p(args: &[StrixVal]) -> Result<StrixVal> {
    let arg = unary("nil?", args)?;
    Ok(StrixVal::bool(matches!(arg, StrixVal::Nil)))
}

/// (true? x)
pub(crate) fn builtin_true_p(args: &[StrixVal]) -> Result<StrixVal> {
    let arg = unary("true?", args)?;
    Ok(StrixVal::bool(matches!(arg, StrixVal::Bool(true))))
}

/// (false? x)
pub(crate) fn builtin_false_p(args: &[StrixVal]) -> Result<StrixVal> {
    let arg = unary("false?", args)?;
    Ok(StrixVal::bool(matches!(arg, StrixVal::Bool(false))))
}

/// (symbol? x)
pub(crate) fn builtin_symbol_p(args: &[StrixVal]) -> Result<StrixVal> {
    let arg = unary("symbol?", args)?;
    Ok(StrixVal::bool(matches!(arg, StrixVal::Symbol(_))))
}

/// (string? x)
pub(crate) fn builtin_string_p(args: &[StrixVal]) -> Result<StrixVal> {
    let arg = unary("string?", args)?;
    Ok(StrixVal::bool(matches!(arg, StrixVal::String(_))))
}

/// (number? x)
pub(crate) fn builtin_number_p(args: &[StrixVal]) -> Result<StrixVal> {
    let arg = unary("number?", args)?;
    Ok(StrixVal::bool(matches!(arg, StrixVal::Number(_))))
}

/// (fn? x) - true for primitives and non-macro closures
pub(crate) fn builtin_fn_p(args: &[StrixVal]) -> Result<StrixVal> {
    let arg = unary("fn?", args)?;
    let result = match arg {
        StrixVal::NativeFn(_) => true,
        StrixVal::Fn(f) => !f.is_macro(),
        _ => false,
    };
    Ok(StrixVal::bool(result))
}

/// (macro? x) - true only for closures flagged as macros
pub(crate) fn builtin_macro_p(args: &[StrixVal]) -> Result<StrixVal> {
    let arg = unary("macro?", args)?;
    let result = matches!(arg, StrixVal::Fn(f) if f.is_macro());
    Ok(StrixVal::bool(result))
}

/// (keyword? x)
pub(crate) fn builtin_keyword_p(args: &[StrixVal]) -> Result<StrixVal> {
    let arg = unary("keyword?", args)?;
    Ok(StrixVal::bool(matches!(arg, StrixVal::Keyword(_))))
}

/// (atom? x)
pub(crate) fn builtin_atom_p(args: &[StrixVal]) -> Result<StrixVal> {
    let arg = unary("atom?", args)?;
    Ok(StrixVal::bool(matches!(arg, StrixVal::Atom(_))))
}

/// (sequential? x) - true for lists and vectors
pub(crate) fn builtin_sequential_p(args: &[StrixVal]) -> Result<StrixVal> {
    let arg = unary("sequential?", args)?;
    Ok(StrixVal::bool(matches!(
        arg,
        StrixVal::List(_, _) | StrixVal::Vector(_, _)
    )))
}
