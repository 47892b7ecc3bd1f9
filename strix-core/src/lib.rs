// strix-core - Runtime and evaluator for the Strix programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # strix-core
//!
//! Runtime and evaluator for the Strix programming language: lexical
//! environments, the trampolined AST-walking evaluator, built-in
//! functions, and the embedded prelude.

pub mod builtins;
pub mod env;
pub mod error;
pub mod eval;

pub use builtins::register_builtins;
pub use env::Env;
pub use error::{Error, Result};
pub use eval::{apply, eval, macroexpand, make_native_fn};

// Re-export parser types for convenience
pub use strix_parser::{Keyword, StrixVal, Symbol};

/// Embedded prelude source (functions and macros defined in the language).
const PRELUDE: &str = include_str!("../../strix-std/prelude.strix");

/// Initialise the prelude: the `eval` primitive (closed over the root
/// environment), `*ARGV*`, `*host-language*`, and the embedded
/// language-level definitions (`not`, `load-file`, `cond`, `gensym`,
/// `or`, ...). Call this after [`register_builtins`].
pub fn init_prelude(env: &Env) -> Result<()> {
    // eval runs in the root environment, not the caller's lexical scope
    let root = env.clone();
    let eval_native = make_native_fn("eval", move |args: &[StrixVal]| {
        if args.len() != 1 {
            return Err(Error::arity_named("eval", 1, args.len()));
        }
        eval::eval(&args[0], &root)
    });
    env.define(Symbol::new("eval"), StrixVal::NativeFn(eval_native));
    env.define(Symbol::new("*ARGV*"), StrixVal::empty_list());
    env.define(Symbol::new("*host-language*"), StrixVal::string("strix"));

    let mut parser = strix_parser::Parser::new(PRELUDE)?;
    while let Some(form) = parser.parse().map_err(Error::from)? {
        eval::eval(&form, env)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_loads() {
        let env = Env::new();
        register_builtins(&env);
        init_prelude(&env).unwrap();

        for name in [
            "not",
            "load-file",
            "cond",
            "*gensym-counter*",
            "gensym",
            "or",
            "eval",
            "*ARGV*",
            "*host-language*",
        ] {
            assert!(env.is_defined(&Symbol::new(name)), "missing {}", name);
        }
    }

    #[test]
    fn test_host_language() {
        let env = Env::new();
        register_builtins(&env);
        init_prelude(&env).unwrap();

        assert_eq!(
            env.get(&Symbol::new("*host-language*")).unwrap(),
            StrixVal::string("strix")
        );
    }
}
