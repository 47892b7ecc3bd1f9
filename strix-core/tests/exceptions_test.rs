// strix-core - Exception handling integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

mod common;
use common::*;

#[test]
fn test_throw_uncaught() {
    let env = new_env();
    assert_rep_err!(&env, "(throw \"err1\")");
    assert_rep_err!(&env, "(throw {:msg \"boom\"})");
}

#[test]
fn test_try_without_failure() {
    let env = new_env();
    assert_rep!(&env, "(try* 123 (catch* e 456))", "123");
    assert_rep!(&env, "(try* 123)", "123");
}

#[test]
fn test_catch_thrown_value() {
    let env = new_env();
    assert_rep!(
        &env,
        "(try* (throw \"my exception\") (catch* exc (str \"exc:\" exc)))",
        "\"exc:my exception\""
    );
    // Arbitrary values pass through as the payload
    assert_rep!(
        &env,
        "(try* (throw (list 1 2 3)) (catch* exc (first exc)))",
        "1"
    );
    assert_rep!(
        &env,
        "(try* (throw {:msg \"x\"}) (catch* exc (get exc :msg)))",
        "\"x\""
    );
}

#[test]
fn test_native_failures_coerce_to_strings() {
    let env = new_env();
    assert_rep!(
        &env,
        "(try* abc (catch* exc (str \"exc is: \" exc)))",
        "\"exc is: 'abc' not found\""
    );
    assert_rep!(
        &env,
        "(try* (nth [] 1) (catch* exc (string? exc)))",
        "true"
    );
}

#[test]
fn test_without_catch_clause_rethrows() {
    let env = new_env();
    assert_rep_err!(&env, "(try* (throw \"inner\"))");
    // The payload survives an intermediate try* without a catch
    assert_rep!(
        &env,
        "(try* (try* (throw \"inner\")) (catch* e (str \"caught: \" e)))",
        "\"caught: inner\""
    );
}

#[test]
fn test_handler_runs_in_child_frame() {
    let env = new_env();
    eval_all("(def! e \"outer\")", &env).unwrap();
    assert_rep!(&env, "(try* (throw \"inner\") (catch* e e))", "\"inner\"");
    assert_rep!(&env, "e", "\"outer\"");
}

#[test]
fn test_range_error() {
    let env = new_env();
    assert_rep!(&env, "(nth (list 1) 0)", "1");
    assert_rep!(&env, "(nth (list 1 2) 1)", "2");
    assert_rep!(&env, "(nth [1 2 3] 2)", "3");
    assert_rep_err!(&env, "(nth (list 1 2) 2)");
    assert_rep_err!(&env, "(nth [1 2 3] 5)");
    assert_rep_err!(&env, "(nth [1 2 3] -1)");
}

#[test]
fn test_failed_form_leaves_bindings_untouched() {
    let env = new_env();
    eval_all("(def! x \"x\")", &env).unwrap();
    assert_rep_err!(&env, "(def! x (nth (list 1 2) 2))");
    assert_rep!(&env, "x", "\"x\"");
}

#[test]
fn test_macro_expansion_failures_propagate() {
    let env = new_env();
    eval_all(
        "(defmacro! broken (fn* () (throw \"expansion failed\")))",
        &env,
    )
    .unwrap();
    assert_rep_err!(&env, "(broken)");
    assert_rep!(
        &env,
        "(try* (broken) (catch* e e))",
        "\"expansion failed\""
    );
}

#[test]
fn test_catch_handler_is_in_tail_position() {
    let env = new_env();
    eval_all(
        "(def! retry (fn* (n) (if (= n 0) :ok (try* (throw n) (catch* e (retry (- e 1)))))))",
        &env,
    )
    .unwrap();
    assert_rep!(&env, "(retry 10000)", ":ok");
}
