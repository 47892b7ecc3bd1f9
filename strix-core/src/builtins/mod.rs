// strix-core - Built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Built-in functions for Strix.
//!
//! Each built-in validates its argument count and kinds up front and is
//! registered in the root environment by [`register_builtins`].

mod arithmetic;
mod atoms;
mod collections;
mod comparison;
mod exceptions;
mod higher_order;
mod io;
mod metadata;
mod predicates;
mod sequences;
mod strings;

use strix_parser::{StrixVal, Symbol};

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::make_native_fn;

use arithmetic::{builtin_add, builtin_div, builtin_mul, builtin_sub, builtin_sum};
use atoms::{builtin_atom, builtin_deref, builtin_reset, builtin_swap};
use collections::{
    builtin_assoc, builtin_contains_p, builtin_dissoc, builtin_get, builtin_hash_map,
    builtin_keys, builtin_vals, builtin_vector,
};
use comparison::{builtin_eq, builtin_ge, builtin_gt, builtin_le, builtin_lt};
use exceptions::builtin_throw;
use higher_order::{builtin_apply, builtin_map};
use io::{
    builtin_pr_str, builtin_println, builtin_prn, builtin_read_string, builtin_readline,
    builtin_slurp, builtin_str, builtin_time_ms,
};
use metadata::{builtin_meta, builtin_with_meta};
use predicates::{
    builtin_atom_p, builtin_false_p, builtin_fn_p, builtin_keyword_p, builtin_list_p,
    builtin_macro_p, builtin_map_p, builtin_nil_p, builtin_number_p, builtin_sequential_p,
    builtin_string_p, builtin_symbol_p, builtin_true_p, builtin_vector_p,
};
use sequences::{
    builtin_concat, builtin_conj, builtin_cons, builtin_count, builtin_empty_p, builtin_first,
    builtin_list, builtin_nth, builtin_rest, builtin_seq,
};
use strings::{builtin_keyword, builtin_symbol};

/// Register all built-in functions in the given environment.
pub fn register_builtins(env: &Env) {
    // Arithmetic
    env.define_native("+", builtin_add);
    env.define_native("-", builtin_sub);
    env.define_native("*", builtin_mul);
    env.define_native("/", builtin_div);
    env.define_native("add", builtin_sum);

    // Comparison
    env.define_native("=", builtin_eq);
    env.define_native("<", builtin_lt);
    env.define_native("<=", builtin_le);
    env.define_native(">", builtin_gt);
    env.define_native(">=", builtin_ge);

    // Sequences
    env.define_native("list", builtin_list);
    env.define_native("empty?", builtin_empty_p);
    env.define_native("count", builtin_count);
    env.define_native("cons", builtin_cons);
    env.define_native("concat", builtin_concat);
    env.define_native("nth", builtin_nth);
    env.define_native("first", builtin_first);
    env.define_native("rest", builtin_rest);
    env.define_native("conj", builtin_conj);
    env.define_native("seq", builtin_seq);

    // Higher-order functions
    env.define_native("apply", builtin_apply);
    env.define_native("map", builtin_map);

    // Collections
    env.define_native("vector", builtin_vector);
    env.define_native("hash-map", builtin_hash_map);
    env.define_native("assoc", builtin_assoc);
    env.define_native("dissoc", builtin_dissoc);
    env.define_native("get", builtin_get);
    env.define_native("contains?", builtin_contains_p);
    env.define_native("keys", builtin_keys);
    env.define_native("vals", builtin_vals);

    // Type predicates
    env.define_native("list?", builtin_list_p);
    env.define_native("vector?", builtin_vector_p);
    env.define_native("map?", builtin_map_p);
    env.define_native("nil?", builtin_nil_p);
    env.define_native("true?", builtin_true_p);
    env.define_native("false?", builtin_false_p);
    env.define_native("symbol?", builtin_symbol_p);
    env.define_native("string?", builtin_string_p);
    env.define_native("number?", builtin_number_p);
    env.define_native("fn?", builtin_fn_p);
    env.define_native("macro?", builtin_macro_p);
    env.define_native("keyword?", builtin_keyword_p);
    env.define_native("atom?", builtin_atom_p);
    env.define_native("sequential?", builtin_sequential_p);

    // Conversions
    env.define_native("symbol", builtin_symbol);
    env.define_native("keyword", builtin_keyword);

    // Atoms
    env.define_native("atom", builtin_atom);
    env.define_native("deref", builtin_deref);
    env.define_native("reset!", builtin_reset);
    env.define_native("swap!", builtin_swap);

    // Printing
    env.define_native("pr-str", builtin_pr_str);
    env.define_native("str", builtin_str);
    env.define_native("prn", builtin_prn);
    env.define_native("println", builtin_println);

    // Metadata
    env.define_native("meta", builtin_meta);
    env.define_native("with-meta", builtin_with_meta);

    // Exceptions
    env.define_native("throw", builtin_throw);

    // Time and I/O boundary
    env.define_native("time-ms", builtin_time_ms);
    env.define_native("read-string", builtin_read_string);
    env.define_native("slurp", builtin_slurp);
    env.define_native("readline", builtin_readline);
}

/// Helper trait to define native functions more easily.
pub trait EnvExt {
    fn define_native(&self, name: &'static str, func: fn(&[StrixVal]) -> Result<StrixVal>);
}

impl EnvExt for Env {
    fn define_native(&self, name: &'static str, func: fn(&[StrixVal]) -> Result<StrixVal>) {
        let native = make_native_fn(name, func);
        self.define(Symbol::new(name), StrixVal::NativeFn(native));
    }
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Elements of a list or vector, or None for any other kind.
pub(crate) fn seq_items(val: &StrixVal) -> Option<Vec<StrixVal>> {
    match val {
        StrixVal::List(items, _) | StrixVal::Vector(items, _) => {
            Some(items.iter().cloned().collect())
        }
        _ => None,
    }
}

/// Extract a number, or fail naming the operation.
pub(crate) fn expect_number(context: &'static str, val: &StrixVal) -> Result<f64> {
    match val {
        StrixVal::Number(n) => Ok(*n),
        other => Err(Error::type_error_in(context, "number", other.type_name())),
    }
}
