// strix-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers for Strix integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`new_env`] - Create an environment with builtins and the prelude
//! - [`eval_all`] - Evaluate every form in a string, returning the last value
//! - [`rep`] - Evaluate every form and return the last value printed readably
//!
//! # Macros
//!
//! - [`assert_rep!`] - Assert that code prints to an expected string
//! - [`assert_rep_err!`] - Assert that code produces an error

#[allow(unused_imports)]
pub use strix_core::{eval, init_prelude, register_builtins, Env, Error};
#[allow(unused_imports)]
pub use strix_parser::{pr_str, Keyword, Parser, StrixVal, Symbol};

/// Create a new environment with builtins and the prelude loaded.
///
/// # Panics
///
/// Panics if the prelude fails to load (should never happen).
#[must_use]
pub fn new_env() -> Env {
    let env = Env::new();
    register_builtins(&env);
    init_prelude(&env).expect("Failed to load prelude");
    env
}

/// Evaluate every form in the string, returning the last value.
#[allow(dead_code)]
pub fn eval_all(s: &str, env: &Env) -> Result<StrixVal, String> {
    let mut parser = Parser::new(s).map_err(|e| e.to_string())?;
    let mut result = StrixVal::Nil;

    while let Some(form) = parser.parse().map_err(|e| e.to_string())? {
        result = eval(&form, env).map_err(|e| e.to_string())?;
    }

    Ok(result)
}

/// Evaluate every form in the string and print the last value readably.
#[allow(dead_code)]
pub fn rep(s: &str, env: &Env) -> Result<String, String> {
    eval_all(s, env).map(|val| pr_str(&val, true))
}

/// Assert that evaluating `input` prints the expected string.
///
/// # Example
///
/// ```ignore
/// let env = new_env();
/// assert_rep!(&env, "(+ 1 2)", "3");
/// ```
#[macro_export]
macro_rules! assert_rep {
    ($env:expr, $input:expr, $expected:expr) => {
        let result = $crate::common::rep($input, $env);
        assert!(
            result.is_ok(),
            "Failed to evaluate '{}': {:?}",
            $input,
            result.err()
        );
        assert_eq!(
            result.unwrap(),
            $expected,
            "Evaluation of '{}' did not match expected",
            $input
        );
    };
}

/// Assert that evaluating `input` produces an error.
///
/// # Example
///
/// ```ignore
/// let env = new_env();
/// assert_rep_err!(&env, "(+ 1 :not-a-number)");
/// ```
#[macro_export]
macro_rules! assert_rep_err {
    ($env:expr, $input:expr) => {
        let result = $crate::common::rep($input, $env);
        assert!(
            result.is_err(),
            "Expected error for '{}' but got {:?}",
            $input,
            result.ok()
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rep_basic() {
        let env = new_env();
        assert_eq!(rep("(+ 1 2)", &env).unwrap(), "3");
    }

    #[test]
    fn test_eval_all_threads_definitions() {
        let env = new_env();
        let result = eval_all("(def! x 1) (def! y 2) (+ x y)", &env).unwrap();
        assert_eq!(result, StrixVal::number(3.0));
    }
}
