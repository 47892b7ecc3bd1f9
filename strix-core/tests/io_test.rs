// strix-core - Reader and file boundary integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

mod common;
use common::*;

use std::fs;
use std::path::PathBuf;

/// A scratch file that cleans up after itself.
struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("strix-{}-{}", std::process::id(), name));
        fs::write(&path, contents).expect("failed to write scratch file");
        ScratchFile { path }
    }

    fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn test_read_string() {
    let env = new_env();
    assert_rep!(&env, "(read-string \"(1 2 (3 4) nil)\")", "(1 2 (3 4) nil)");
    assert_rep!(&env, "(read-string \"(+ 2 3)\")", "(+ 2 3)");
    assert_rep!(&env, "(read-string \"7 ;; comment\")", "7");
    assert_rep_err!(&env, "(read-string 1)");
}

#[test]
fn test_read_string_blank_is_a_distinct_signal() {
    let env = new_env();
    let result = eval_all("(read-string \";; comment\")", &env);
    assert!(result.is_err());

    // A blank read does not poison the session
    assert_rep!(&env, "(eval (read-string \"(+ 2 3)\"))", "5");
}

#[test]
fn test_slurp() {
    let env = new_env();
    let file = ScratchFile::new("slurp.txt", "A line of text\n");
    assert_rep!(
        &env,
        &format!("(slurp \"{}\")", file.path_str()),
        "\"A line of text\\n\""
    );
    assert_rep_err!(&env, "(slurp 1)");
}

#[test]
fn test_slurp_missing_resource() {
    let env = new_env();
    assert_rep_err!(&env, "(slurp \"/nonexistent/strix-no-such-file\")");
}

#[test]
fn test_load_file() {
    let env = new_env();
    let file = ScratchFile::new(
        "inc.strix",
        "(def! inc1 (fn* (a) (+ 1 a)))\n(def! inc2 (fn* (a) (+ 2 a)))\n",
    );
    eval_all(&format!("(load-file \"{}\")", file.path_str()), &env).unwrap();
    assert_rep!(&env, "(inc1 7)", "8");
    assert_rep!(&env, "(inc2 7)", "9");
}

#[test]
fn test_load_file_returns_last_value() {
    let env = new_env();
    let file = ScratchFile::new(
        "ret.strix",
        "(def! inc4 (fn* (a) (+ 4 a)))\n\"file return string\"\n",
    );
    assert_rep!(
        &env,
        &format!("(load-file \"{}\")", file.path_str()),
        "\"file return string\""
    );
    assert_rep!(&env, "(inc4 7)", "11");
}

#[test]
fn test_load_file_tolerates_comments_and_defs_persist() {
    let env = new_env();
    let file = ScratchFile::new(
        "map.strix",
        "; a comment at the top\n(def! mymap {\"a\" 1})\n",
    );
    eval_all(&format!("(load-file \"{}\")", file.path_str()), &env).unwrap();
    assert_rep!(&env, "mymap", "{\"a\" 1}");
}

#[test]
fn test_argv_defaults_to_empty_list() {
    let env = new_env();
    assert_rep!(&env, "(list? *ARGV*)", "true");
    assert_rep!(&env, "*ARGV*", "()");
}

#[test]
fn test_host_language_is_bound() {
    let env = new_env();
    assert_rep!(&env, "(= \"something bogus\" *host-language*)", "false");
    assert_rep!(&env, "(string? *host-language*)", "true");
}
