// strix-core - Macro and quasiquote integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

mod common;
use common::*;

#[test]
fn test_defmacro_and_call() {
    let env = new_env();
    assert_rep!(&env, "(defmacro! one (fn* () 1)) (one)", "1");
    assert_rep!(&env, "(defmacro! two (fn* () 2)) (two)", "2");
}

#[test]
fn test_macro_receives_unevaluated_arguments() {
    let env = new_env();
    assert_rep!(
        &env,
        "(defmacro! unless (fn* (pred a b) `(if ~pred ~b ~a))) (unless false 7 8)",
        "7"
    );
    assert_rep!(&env, "(unless true 7 8)", "8");
    assert_rep!(
        &env,
        "(defmacro! unless2 (fn* (pred a b) `(if (not ~pred) ~a ~b))) (unless2 false 7 8)",
        "7"
    );
    assert_rep!(&env, "(unless2 true 7 8)", "8");
}

#[test]
fn test_macroexpand_returns_without_evaluating() {
    let env = new_env();
    eval_all(
        "(defmacro! unless2 (fn* (pred a b) `(if (not ~pred) ~a ~b)))",
        &env,
    )
    .unwrap();
    assert_rep!(&env, "(macroexpand (unless2 2 3 4))", "(if (not 2) 3 4)");
    assert_rep!(&env, "(macroexpand (+ 1 2))", "(+ 1 2)");
}

#[test]
fn test_macro_expansion_sees_call_site_environment() {
    let env = new_env();
    assert_rep!(
        &env,
        "(defmacro! identity (fn* (x) x)) (let* (a 123) (identity a))",
        "123"
    );
}

#[test]
fn test_macro_function_distinction() {
    let env = new_env();
    eval_all("(defmacro! two (fn* () 2)) (def! add1 (fn* (x) (+ x 1)))", &env).unwrap();
    assert_rep!(&env, "(two)", "2");
    assert_rep!(&env, "(macro? two)", "true");
    assert_rep!(&env, "(fn? two)", "false");
    assert_rep!(&env, "(fn? +)", "true");
    assert_rep!(&env, "(fn? add1)", "true");
    assert_rep!(&env, "(macro? add1)", "false");
    assert_rep!(&env, "(macro? cond)", "true");
    assert_rep!(&env, "(fn? cond)", "false");
    assert_rep!(&env, "(macro? +)", "false");
    assert_rep!(&env, "(fn? \"+\")", "false");
    assert_rep!(&env, "(macro? :+)", "false");
}

#[test]
fn test_defmacro_requires_a_closure() {
    let env = new_env();
    assert_rep_err!(&env, "(defmacro! m 7)");
}

#[test]
fn test_quote() {
    let env = new_env();
    assert_rep!(&env, "(quote 7)", "7");
    assert_rep!(&env, "'(1 2 3)", "(1 2 3)");
    assert_rep!(&env, "'(1 2 (3 4))", "(1 2 (3 4))");
}

#[test]
fn test_quasiquote_plain() {
    let env = new_env();
    assert_rep!(&env, "`7", "7");
    assert_rep!(&env, "`(1 2 3)", "(1 2 3)");
    assert_rep!(&env, "`(1 2 (3 4))", "(1 2 (3 4))");
    assert_rep!(&env, "`(nil)", "(nil)");
}

#[test]
fn test_quasiquote_unquote() {
    let env = new_env();
    assert_rep!(&env, "(let* (x 7) `(a ~x))", "(a 7)");
    assert_rep!(&env, "`(1 ~(+ 1 1) 3)", "(1 2 3)");
    assert_rep!(&env, "(def! a 8) `(1 ~a 3)", "(1 8 3)");
}

#[test]
fn test_quasiquote_splice_unquote() {
    let env = new_env();
    assert_rep!(&env, "(let* (x (list 1 2)) `(0 ~@x 3))", "(0 1 2 3)");
    assert_rep!(&env, "(def! c '(1 \"b\" \"d\")) `(1 c 3)", "(1 c 3)");
    assert_rep!(&env, "`(1 ~@c 3)", "(1 1 \"b\" \"d\" 3)");
}

#[test]
fn test_cond() {
    let env = new_env();
    assert_rep!(&env, "(cond)", "nil");
    assert_rep!(&env, "(cond true 7)", "7");
    assert_rep!(&env, "(cond true 7 true 8)", "7");
    assert_rep!(&env, "(cond false 7 true 8)", "8");
    assert_rep!(&env, "(cond false 7 false 8 \"else\" 9)", "9");
    assert_rep!(&env, "(cond false 7 (= 2 2) 8 \"else\" 9)", "8");
    assert_rep!(&env, "(cond false 7 false 8 false 9)", "nil");
}

#[test]
fn test_cond_odd_clause_throws() {
    let env = new_env();
    assert_rep_err!(&env, "(cond true)");
    assert_rep!(
        &env,
        "(try* (cond false 7 \"else\") (catch* e e))",
        "\"odd number of forms to cond\""
    );
}

#[test]
fn test_or() {
    let env = new_env();
    assert_rep!(&env, "(or)", "nil");
    assert_rep!(&env, "(or 1)", "1");
    assert_rep!(&env, "(or 1 2 3 4)", "1");
    assert_rep!(&env, "(or false 2)", "2");
    assert_rep!(&env, "(or false nil 3)", "3");
    assert_rep!(&env, "(or false nil false false nil 4)", "4");
    assert_rep!(&env, "(or false nil 3 false nil 4)", "3");
    assert_rep!(&env, "(or (or false 4))", "4");
    assert_rep!(&env, "(let* (x (or nil \"yes\")) x)", "\"yes\"");
}

#[test]
fn test_or_is_hygienic() {
    let env = new_env();
    // The expansion binds through a gensym, so user bindings survive
    assert_rep!(
        &env,
        "(let* [or_FIXME 23] (or false (+ or_FIXME 100)))",
        "123"
    );
}

#[test]
fn test_gensym_is_fresh() {
    let env = new_env();
    assert_rep!(&env, "(= (gensym) (gensym))", "false");
    assert_rep!(&env, "(symbol? (gensym))", "true");
}
