// strix-core - Function application
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Function application for Strix.
//!
//! Built-ins that take functions as arguments (`apply`, `map`, `swap!`)
//! call [`apply`] directly; closure calls in tail position go through the
//! evaluator's trampoline instead and only use [`bind_call_env`].

use std::any::Any;
use std::rc::Rc;

use strix_parser::{StrixFn, StrixNativeFn, StrixVal};

use super::eval;
use crate::env::Env;
use crate::error::{Error, Result};

/// Type alias for native function signature.
pub type NativeFnImpl = dyn Fn(&[StrixVal]) -> Result<StrixVal>;

/// Apply a function value to arguments.
pub fn apply(func: &StrixVal, args: &[StrixVal]) -> Result<StrixVal> {
    match func {
        StrixVal::Fn(f) => apply_fn(f, args),
        StrixVal::NativeFn(f) => apply_native(f, args),
        other => Err(Error::type_error_in(
            "cannot call value",
            "function",
            other.type_name(),
        )),
    }
}

/// Apply a closure by evaluating its body in a fresh call frame.
pub(crate) fn apply_fn(func: &StrixFn, args: &[StrixVal]) -> Result<StrixVal> {
    let fn_env = bind_call_env(func, args)?;
    eval(func.body(), &fn_env)
}

/// Build the call frame for a closure: a child of its captured
/// environment with parameters bound to arguments positionally. The rest
/// parameter, if any, collects the remaining arguments as a list.
pub(crate) fn bind_call_env(func: &StrixFn, args: &[StrixVal]) -> Result<Env> {
    let captured = func
        .env()
        .downcast_ref::<Env>()
        .ok_or_else(|| Error::Internal("function environment has invalid type".into()))?;

    let params = func.params();
    if func.rest_param().is_some() {
        if args.len() < params.len() {
            return Err(Error::ArityError {
                expected: crate::error::AritySpec::AtLeast(params.len()),
                got: args.len(),
                name: None,
            });
        }
    } else if args.len() != params.len() {
        return Err(Error::ArityError {
            expected: crate::error::AritySpec::Exact(params.len()),
            got: args.len(),
            name: None,
        });
    }

    let fn_env = captured.child();
    for (param, arg) in params.iter().zip(args.iter()) {
        fn_env.define(param.clone(), arg.clone());
    }
    if let Some(rest) = func.rest_param() {
        fn_env.define(rest.clone(), StrixVal::list(args[params.len()..].to_vec()));
    }

    Ok(fn_env)
}

/// Apply a native function.
pub(crate) fn apply_native(func: &StrixNativeFn, args: &[StrixVal]) -> Result<StrixVal> {
    // Downcast the type-erased implementation
    let f = func
        .func()
        .downcast_ref::<Rc<NativeFnImpl>>()
        .ok_or_else(|| Error::Internal("native function has invalid type".into()))?;
    f(args)
}

/// Create a native function value.
pub fn make_native_fn(
    name: &'static str,
    func: impl Fn(&[StrixVal]) -> Result<StrixVal> + 'static,
) -> StrixNativeFn {
    let func_rc: Rc<NativeFnImpl> = Rc::new(func);
    let func_any: Rc<dyn Any> = Rc::new(func_rc);
    StrixNativeFn::new(name, func_any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strix_parser::Symbol;

    fn make_identity() -> StrixFn {
        let env = Env::new();
        StrixFn::new(
            vec![Symbol::new("a")],
            None,
            StrixVal::symbol(Symbol::new("a")),
            Rc::new(env),
        )
    }

    #[test]
    fn test_apply_closure() {
        let f = make_identity();
        let result = apply_fn(&f, &[StrixVal::number(5.0)]).unwrap();
        assert_eq!(result, StrixVal::number(5.0));
    }

    #[test]
    fn test_apply_native() {
        let native = make_native_fn("first-arg", |args| Ok(args[0].clone()));
        let result = apply(
            &StrixVal::NativeFn(native),
            &[StrixVal::number(1.0), StrixVal::number(2.0)],
        )
        .unwrap();
        assert_eq!(result, StrixVal::number(1.0));
    }

    #[test]
    fn test_apply_non_function() {
        let result = apply(&StrixVal::number(1.0), &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rest_parameter_collects_remaining() {
        let env = Env::new();
        let f = StrixFn::new(
            vec![Symbol::new("a")],
            Some(Symbol::new("more")),
            StrixVal::symbol(Symbol::new("more")),
            Rc::new(env),
        );
        let result = apply_fn(
            &f,
            &[
                StrixVal::number(1.0),
                StrixVal::number(2.0),
                StrixVal::number(3.0),
            ],
        )
        .unwrap();
        assert_eq!(
            result,
            StrixVal::list(vec![StrixVal::number(2.0), StrixVal::number(3.0)])
        );
    }

    #[test]
    fn test_rest_parameter_may_be_empty() {
        let env = Env::new();
        let f = StrixFn::new(
            vec![],
            Some(Symbol::new("more")),
            StrixVal::symbol(Symbol::new("more")),
            Rc::new(env),
        );
        let result = apply_fn(&f, &[]).unwrap();
        assert_eq!(result, StrixVal::empty_list());
    }
}
