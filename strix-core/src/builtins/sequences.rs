// strix-core - Sequence built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Sequence operations: list, empty?, count, cons, concat, nth, first,
//! rest, conj, seq

use strix_parser::StrixVal;

use super::seq_items;
use crate::error::{Error, Result};

/// (list & items) - build a list of the arguments
pub(crate) fn builtin_list(args: &[StrixVal]) -> Result<StrixVal> {
    Ok(StrixVal::list(args.to_vec()))
}

/// (empty? coll) - true for nil and empty sequences, false otherwise
pub(crate) fn builtin_empty_p(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("empty?", 1, args.len()));
    }
    let result = match &args[0] {
        StrixVal::Nil => true,
        other => seq_items(other).map(|items| items.is_empty()).unwrap_or(false),
    };
    Ok(StrixVal::bool(result))
}

/// (count coll) - element count; 0 for anything that is not a sequence
pub(crate) fn builtin_count(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("count", 1, args.len()));
    }
    let count = seq_items(&args[0]).map(|items| items.len()).unwrap_or(0);
    Ok(StrixVal::number(count as f64))
}

/// (cons x seq) - a new list with x prepended
pub(crate) fn builtin_cons(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 2 {
        return Err(Error::arity_named("cons", 2, args.len()));
    }
    let rest = seq_items(&args[1]).ok_or_else(|| {
        Error::type_error_in("cons", "list or vector", args[1].type_name())
    })?;
    let mut items = Vec::with_capacity(rest.len() + 1);
    items.push(args[0].clone());
    items.extend(rest);
    Ok(StrixVal::list(items))
}

/// (concat & seqs) - a new list of all elements in order
pub(crate) fn builtin_concat(args: &[StrixVal]) -> Result<StrixVal> {
    let mut items = Vec::new();
    for arg in args {
        let seq = seq_items(arg).ok_or_else(|| {
            Error::type_error_in("concat", "list or vector", arg.type_name())
        })?;
        items.extend(seq);
    }
    Ok(StrixVal::list(items))
}

/// (nth seq idx) - element at index, bounds-checked
pub(crate) fn builtin_nth(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 2 {
        return Err(Error::arity_named("nth", 2, args.len()));
    }
    let items = seq_items(&args[0]).ok_or_else(|| {
        Error::type_error_in("nth", "list or vector", args[0].type_name())
    })?;
    let idx = match &args[1] {
        StrixVal::Number(n) => *n as i64,
        other => return Err(Error::type_error_in("nth", "number", other.type_name())),
    };
    if idx < 0 || idx as usize >= items.len() {
        return Err(Error::IndexOutOfBounds {
            index: idx,
            length: items.len(),
        });
    }
    Ok(items[idx as usize].clone())
}

/// (first seq) - first element; nil for nil or an empty sequence
pub(crate) fn builtin_first(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("first", 1, args.len()));
    }
    if matches!(args[0], StrixVal::Nil) {
        return Ok(StrixVal::Nil);
    }
    let items = seq_items(&args[0]).ok_or_else(|| {
        Error::type_error_in("first", "list or vector", args[0].type_name())
    })?;
    Ok(items.first().cloned().unwrap_or(StrixVal::Nil))
}

/// (rest seq) - all but the first element as a list; () for nil
pub(crate) fn builtin_rest(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("rest", 1, args.len()));
    }
    if matches!(args[0], StrixVal::Nil) {
        return Ok(StrixVal::empty_list());
    }
    let items = seq_items(&args[0]).ok_or_else(|| {
        Error::type_error_in("rest", "list or vector", args[0].type_name())
    })?;
    let rest: Vec<StrixVal> = items.into_iter().skip(1).collect();
    Ok(StrixVal::list(rest))
}

/// (conj coll & items) - prepend reversed onto a list, append onto a vector
pub(crate) fn builtin_conj(args: &[StrixVal]) -> Result<StrixVal> {
    if args.is_empty() {
        return Err(Error::arity_at_least("conj", 1, args.len()));
    }
    match &args[0] {
        StrixVal::List(items, _) => {
            let mut result: Vec<StrixVal> = args[1..].iter().rev().cloned().collect();
            result.extend(items.iter().cloned());
            Ok(StrixVal::list(result))
        }
        StrixVal::Vector(items, _) => {
            let mut result: Vec<StrixVal> = items.iter().cloned().collect();
            result.extend(args[1..].iter().cloned());
            Ok(StrixVal::vector(result))
        }
        other => Err(Error::type_error_in(
            "conj",
            "list or vector",
            other.type_name(),
        )),
    }
}

/// (seq coll) - normalise a list, vector, or string to a list; nil when
/// empty, nil for nil
pub(crate) fn builtin_seq(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("seq", 1, args.len()));
    }
    match &args[0] {
        StrixVal::Nil => Ok(StrixVal::Nil),
        StrixVal::List(items, _) | StrixVal::Vector(items, _) => {
            if items.is_empty() {
                Ok(StrixVal::Nil)
            } else {
                Ok(StrixVal::list(items.iter().cloned().collect()))
            }
        }
        StrixVal::String(s) => {
            if s.is_empty() {
                Ok(StrixVal::Nil)
            } else {
                let chars: Vec<StrixVal> =
                    s.chars().map(|c| StrixVal::string(c.to_string())).collect();
                Ok(StrixVal::list(chars))
            }
        }
        other => Err(Error::type_error_in(
            "seq",
            "list, vector, or string",
            other.type_name(),
        )),
    }
}
