// strix-core - AST-walking evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! AST-walking evaluator for Strix expressions.
//!
//! The main loop is a trampoline over an `(ast, env)` pair: whenever the
//! next step is in tail position (`let*`/`do`/`if` bodies, `quasiquote`
//! results, closure application, `catch*` handlers) the loop rebinds both
//! and continues instead of recursing, so self- and mutual tail recursion
//! run in bounded stack space regardless of depth. Primitive calls return
//! directly and are not tail-eliminated.

pub mod apply;
mod quasiquote;

pub use apply::{apply, make_native_fn, NativeFnImpl};

use std::rc::Rc;

use strix_parser::{OrdMap, StrixFn, StrixVal, Symbol};

use crate::env::Env;
use crate::error::{Error, Result};

use apply::{apply_fn, apply_native, bind_call_env};
use quasiquote::quasiquote;

/// Evaluate a Strix expression in the given environment.
///
/// This is the main entry point for interpreting Strix code. It handles
/// all expression types including special forms, macro expansion,
/// function application, and symbol resolution.
///
/// # Examples
///
/// ```
/// use strix_core::{eval, register_builtins, Env};
/// use strix_parser::{read_str, StrixVal};
///
/// let env = Env::new();
/// register_builtins(&env);
///
/// let expr = read_str("(+ 1 (* 2 3))").unwrap();
/// assert_eq!(eval(&expr, &env).unwrap(), StrixVal::number(7.0));
/// ```
///
/// # Errors
///
/// Returns an error if a symbol cannot be resolved, a non-function is
/// applied, a special form is malformed, or a built-in rejects its
/// arguments. `throw` surfaces as [`Error::Thrown`].
pub fn eval(expr: &StrixVal, env: &Env) -> Result<StrixVal> {
    let mut ast = expr.clone();
    let mut env = env.clone();

    loop {
        if !matches!(ast, StrixVal::List(_, _)) {
            return eval_elements(&ast, &env);
        }

        ast = macroexpand(ast, &env)?;

        let items: Vec<StrixVal> = match &ast {
            StrixVal::List(items, _) => items.iter().cloned().collect(),
            other => return eval_elements(other, &env),
        };

        // Empty list evaluates to itself
        if items.is_empty() {
            return Ok(ast);
        }

        if let StrixVal::Symbol(sym) = &items[0] {
            match sym.name() {
                "def!" => return eval_def(&items[1..], &env),
                "defmacro!" => return eval_defmacro(&items[1..], &env),
                "macroexpand" => {
                    let form = arg_at(&items, 1, "macroexpand")?;
                    return macroexpand(form, &env);
                }
                "quote" => return arg_at(&items, 1, "quote"),
                "quasiquote" => {
                    let form = arg_at(&items, 1, "quasiquote")?;
                    ast = quasiquote(&form);
                    continue;
                }
                "let*" => {
                    (ast, env) = eval_let(&items[1..], &env)?;
                    continue;
                }
                "do" => {
                    if items.len() == 1 {
                        return Ok(StrixVal::Nil);
                    }
                    for form in &items[1..items.len() - 1] {
                        eval(form, &env)?;
                    }
                    ast = items[items.len() - 1].clone();
                    continue;
                }
                "if" => {
                    ast = eval_if(&items[1..], &env)?;
                    continue;
                }
                "fn*" => return eval_fn(&items[1..], &env),
                "try*" => match eval_try(&items[1..], &env)? {
                    Handled::Done(val) => return Ok(val),
                    Handled::Continue(handler, catch_env) => {
                        ast = handler;
                        env = catch_env;
                        continue;
                    }
                },
                _ => {}
            }
        }

        // Apply path: evaluate the whole list, then call its head
        let evaluated: Vec<StrixVal> = items
            .iter()
            .map(|item| eval(item, &env))
            .collect::<Result<_>>()?;
        let func = &evaluated[0];
        let args = &evaluated[1..];

        match func {
            StrixVal::Fn(f) => {
                // Tail-call elimination point: loop into the closure body
                env = bind_call_env(f, args)?;
                ast = f.body().clone();
            }
            StrixVal::NativeFn(f) => return apply_native(f, args),
            other => {
                return Err(Error::type_error_in(
                    "cannot call value",
                    "function",
                    other.type_name(),
                ))
            }
        }
    }
}

/// Element evaluation for non-list nodes (and the members of a call form):
/// symbols resolve through the environment, sequences and map values are
/// evaluated recursively and rebuilt, everything else returns unchanged.
fn eval_elements(ast: &StrixVal, env: &Env) -> Result<StrixVal> {
    match ast {
        StrixVal::Symbol(sym) => env.get(sym),
        StrixVal::List(items, _) => {
            let evaluated: Result<Vec<_>> = items.iter().map(|e| eval(e, env)).collect();
            Ok(StrixVal::list(evaluated?))
        }
        StrixVal::Vector(items, _) => {
            let evaluated: Result<Vec<_>> = items.iter().map(|e| eval(e, env)).collect();
            Ok(StrixVal::vector(evaluated?))
        }
        StrixVal::Map(map, _) => {
            let mut result = OrdMap::new();
            for (k, v) in map.iter() {
                result.insert(k.clone(), eval(v, env)?);
            }
            Ok(StrixVal::map(result))
        }
        other => Ok(other.clone()),
    }
}

// ============================================================================
// Macro Expansion
// ============================================================================

/// Repeatedly expand a form while its head symbol resolves to a macro,
/// applying the macro to the unevaluated remaining elements. Returns the
/// expanded form without evaluating it.
pub fn macroexpand(mut ast: StrixVal, env: &Env) -> Result<StrixVal> {
    while let Some((func, args)) = as_macro_call(&ast, env) {
        ast = apply_fn(&func, &args)?;
    }
    Ok(ast)
}

fn as_macro_call(ast: &StrixVal, env: &Env) -> Option<(StrixFn, Vec<StrixVal>)> {
    let StrixVal::List(items, _) = ast else {
        return None;
    };
    let Some(StrixVal::Symbol(sym)) = items.front() else {
        return None;
    };
    let holder = env.find(sym)?;
    match holder.get(sym).ok()? {
        StrixVal::Fn(f) if f.is_macro() => {
            let args: Vec<StrixVal> = items.iter().skip(1).cloned().collect();
            Some((f, args))
        }
        _ => None,
    }
}

// ============================================================================
// Special Forms
// ============================================================================

fn arg_at(items: &[StrixVal], idx: usize, form: &'static str) -> Result<StrixVal> {
    items
        .get(idx)
        .cloned()
        .ok_or_else(|| Error::syntax(form, "missing operand"))
}

/// (def! sym val) - evaluate val, bind in the current frame, return it
fn eval_def(args: &[StrixVal], env: &Env) -> Result<StrixVal> {
    if args.len() != 2 {
        return Err(Error::syntax("def!", "requires a symbol and a value"));
    }
    let StrixVal::Symbol(sym) = &args[0] else {
        return Err(Error::type_error_in("def!", "symbol", args[0].type_name()));
    };
    let val = eval(&args[1], env)?;
    env.define(sym.clone(), val.clone());
    Ok(val)
}

/// (defmacro! sym val) - val must evaluate to a closure; flag it as a
/// macro and bind it
fn eval_defmacro(args: &[StrixVal], env: &Env) -> Result<StrixVal> {
    if args.len() != 2 {
        return Err(Error::syntax("defmacro!", "requires a symbol and a value"));
    }
    let StrixVal::Symbol(sym) = &args[0] else {
        return Err(Error::type_error_in(
            "defmacro!",
            "symbol",
            args[0].type_name(),
        ));
    };
    let val = eval(&args[1], env)?;
    let StrixVal::Fn(f) = &val else {
        return Err(Error::type_error_in(
            "defmacro!",
            "function",
            val.type_name(),
        ));
    };
    f.set_macro();
    env.define(sym.clone(), val.clone());
    Ok(val)
}

/// (let* (sym val ...) body) - returns the body and the child frame for
/// the trampoline to continue on
fn eval_let(args: &[StrixVal], env: &Env) -> Result<(StrixVal, Env)> {
    if args.len() != 2 {
        return Err(Error::syntax("let*", "requires a binding list and a body"));
    }
    let bindings: Vec<StrixVal> = match &args[0] {
        StrixVal::List(items, _) | StrixVal::Vector(items, _) => items.iter().cloned().collect(),
        other => {
            return Err(Error::type_error_in(
                "let*",
                "list or vector",
                other.type_name(),
            ))
        }
    };
    if bindings.len() % 2 != 0 {
        return Err(Error::syntax("let*", "odd number of binding forms"));
    }

    // Later bindings see earlier ones: values evaluate in the growing frame
    let let_env = env.child();
    for pair in bindings.chunks(2) {
        let StrixVal::Symbol(sym) = &pair[0] else {
            return Err(Error::type_error_in("let*", "symbol", pair[0].type_name()));
        };
        let val = eval(&pair[1], &let_env)?;
        let_env.define(sym.clone(), val);
    }

    Ok((args[1].clone(), let_env))
}

/// (if cond then else?) - returns the branch for the trampoline to
/// continue on; Nil when the else branch is absent
fn eval_if(args: &[StrixVal], env: &Env) -> Result<StrixVal> {
    if args.len() < 2 || args.len() > 3 {
        return Err(Error::syntax(
            "if",
            "requires a condition, a then branch, and an optional else branch",
        ));
    }
    let cond = eval(&args[0], env)?;
    if cond.is_truthy() {
        Ok(args[1].clone())
    } else if let Some(alt) = args.get(2) {
        Ok(alt.clone())
    } else {
        Ok(StrixVal::Nil)
    }
}

/// (fn* (params...) body) - build a closure capturing the current
/// environment. A `&` in the parameter list makes the following symbol
/// collect the remaining arguments as a list.
fn eval_fn(args: &[StrixVal], env: &Env) -> Result<StrixVal> {
    if args.len() != 2 {
        return Err(Error::syntax("fn*", "requires a parameter list and a body"));
    }
    let param_forms: Vec<StrixVal> = match &args[0] {
        StrixVal::List(items, _) | StrixVal::Vector(items, _) => items.iter().cloned().collect(),
        other => {
            return Err(Error::type_error_in(
                "fn*",
                "list or vector",
                other.type_name(),
            ))
        }
    };

    let mut params = Vec::new();
    let mut rest_param = None;
    let mut forms = param_forms.iter();
    while let Some(form) = forms.next() {
        let StrixVal::Symbol(sym) = form else {
            return Err(Error::type_error_in("fn*", "symbol", form.type_name()));
        };
        if sym.name() == "&" {
            match forms.next() {
                Some(StrixVal::Symbol(rest)) => rest_param = Some(rest.clone()),
                Some(other) => {
                    return Err(Error::type_error_in("fn*", "symbol", other.type_name()))
                }
                None => {
                    return Err(Error::syntax("fn*", "'&' must be followed by a parameter"))
                }
            }
            break;
        }
        params.push(sym.clone());
    }

    Ok(StrixVal::Fn(StrixFn::new(
        params,
        rest_param,
        args[1].clone(),
        Rc::new(env.clone()),
    )))
}

/// Outcome of a `try*` form: either a finished value, or a handler to
/// tail-evaluate in the catch frame.
enum Handled {
    Done(StrixVal),
    Continue(StrixVal, Env),
}

/// (try* body (catch* errsym handler)?) - evaluate body; on failure with
/// a catch clause, bind errsym to the failure payload and continue on the
/// handler; without a catch clause, rethrow.
fn eval_try(args: &[StrixVal], env: &Env) -> Result<Handled> {
    if args.is_empty() || args.len() > 2 {
        return Err(Error::syntax(
            "try*",
            "requires a body and an optional catch* clause",
        ));
    }

    let catch = match args.get(1) {
        None => None,
        Some(clause) => Some(parse_catch_clause(clause)?),
    };

    match eval(&args[0], env) {
        Ok(val) => Ok(Handled::Done(val)),
        Err(err) => match catch {
            None => Err(err),
            Some((errsym, handler)) => {
                // Host-level failures are coerced to their message string
                // so the handler always receives a language value
                let payload = match err {
                    Error::Thrown(val) => val,
                    other => StrixVal::string(other.to_string()),
                };
                let catch_env = env.child();
                catch_env.define(errsym, payload);
                Ok(Handled::Continue(handler, catch_env))
            }
        },
    }
}

fn parse_catch_clause(clause: &StrixVal) -> Result<(Symbol, StrixVal)> {
    let items: Vec<StrixVal> = match clause {
        StrixVal::List(items, _) | StrixVal::Vector(items, _) => items.iter().cloned().collect(),
        other => {
            return Err(Error::type_error_in(
                "try*",
                "list or vector",
                other.type_name(),
            ))
        }
    };
    let is_catch = matches!(items.first(), Some(StrixVal::Symbol(sym)) if sym.name() == "catch*");
    if !is_catch || items.len() != 3 {
        return Err(Error::syntax(
            "try*",
            "catch clause must be (catch* sym handler)",
        ));
    }
    let StrixVal::Symbol(errsym) = &items[1] else {
        return Err(Error::type_error_in(
            "catch*",
            "symbol",
            items[1].type_name(),
        ));
    };
    Ok((errsym.clone(), items[2].clone()))
}

// ============================================================================
// Tests
// ============================================================================
