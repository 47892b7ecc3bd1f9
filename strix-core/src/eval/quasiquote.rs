// strix-core - Quasiquote rewriting
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Quasiquote template rewriting.
//!
//! A pure transform on unevaluated AST; no environment is involved. The
//! evaluator tail-continues on the rewritten form, so the `cons`/`concat`
//! calls it produces are evaluated like any other code.

use strix_parser::{StrixVal, Symbol};

/// Rewrite a quasiquoted form:
///
/// - a non-pair (scalar or empty sequence) `x` becomes `(quote x)`
/// - `(unquote x ...)` becomes `x` verbatim
/// - a pair whose head is `(splice-unquote x ...)` becomes
///   `(concat x (quasiquote rest))`
/// - any other pair becomes `(cons (quasiquote head) (quasiquote rest))`
///
/// A pair is a non-empty list or vector.
pub(crate) fn quasiquote(ast: &StrixVal) -> StrixVal {
    let items: Vec<StrixVal> = match ast {
        StrixVal::List(items, _) | StrixVal::Vector(items, _) if !items.is_empty() => {
            items.iter().cloned().collect()
        }
        other => {
            return StrixVal::list(vec![
                StrixVal::symbol(Symbol::new("quote")),
                other.clone(),
            ])
        }
    };

    if is_symbol(&items[0], "unquote") {
        return items.get(1).cloned().unwrap_or(StrixVal::Nil);
    }

    if let StrixVal::List(head_items, _) | StrixVal::Vector(head_items, _) = &items[0] {
        if head_items.front().is_some_and(|h| is_symbol(h, "splice-unquote")) {
            let spliced = head_items.get(1).cloned().unwrap_or(StrixVal::Nil);
            return StrixVal::list(vec![
                StrixVal::symbol(Symbol::new("concat")),
                spliced,
                quasiquote(&StrixVal::list(items[1..].to_vec())),
            ]);
        }
    }

    StrixVal::list(vec![
        StrixVal::symbol(Symbol::new("cons")),
        quasiquote(&items[0]),
        quasiquote(&StrixVal::list(items[1..].to_vec())),
    ])
}

fn is_symbol(val: &StrixVal, name: &str) -> bool {
    matches!(val, StrixVal::Symbol(sym) if sym.name() == name)
}
