// strix-core - Atom built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Atom operations: atom, deref, reset!, swap!
//!
//! The atom cell is shared by reference, so a mutation through one holder
//! is immediately visible to every closure that captured the atom.

use strix_parser::{StrixAtom, StrixVal};

use crate::error::{Error, Result};
use crate::eval::apply;

fn expect_atom<'a>(context: &'static str, val: &'a StrixVal) -> Result<&'a StrixAtom> {
    match val {
        StrixVal::Atom(a) => Ok(a),
        other => Err(Error::type_error_in(context, "atom", other.type_name())),
    }
}

/// (atom x) - create an atom holding x
pub(crate) fn builtin_atom(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("atom", 1, args.len()));
    }
    Ok(StrixVal::atom(args[0].clone()))
}

/// (deref atom) - the current value
pub(crate) fn builtin_deref(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("deref", 1, args.len()));
    }
    Ok(expect_atom("deref", &args[0])?.deref())
}

/// (reset! atom newval) - replace the value, returning newval
pub(crate) fn builtin_reset(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 2 {
        return Err(Error::arity_named("reset!", 2, args.len()));
    }
    Ok(expect_atom("reset!", &args[0])?.reset(args[1].clone()))
}

/// (swap! atom f & args) - apply f to the current value plus the extra
/// arguments, store and return the result
pub(crate) fn builtin_swap(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() < 2 {
        return Err(Error::arity_at_least("swap!", 2, args.len()));
    }
    let atom = expect_atom("swap!", &args[0])?;
    if !matches!(args[1], StrixVal::Fn(_) | StrixVal::NativeFn(_)) {
        return Err(Error::type_error_in(
            "swap!",
            "function",
            args[1].type_name(),
        ));
    }

    let mut call_args = vec![atom.deref()];
    call_args.extend(args[2..].iter().cloned());
    let new_val = apply(&args[1], &call_args)?;
    Ok(atom.reset(new_val))
}
