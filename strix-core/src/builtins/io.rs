// strix-core - I/O built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Printing, the clock, and the narrow host boundary: pr-str, str, prn,
//! println, time-ms, read-string, slurp, readline.
//!
//! `slurp` and `readline` block the single thread of execution until the
//! host returns.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use strix_parser::{pr_str, read_str, StrixVal};

use crate::error::{Error, Result};

fn join(args: &[StrixVal], readably: bool, separator: &str) -> String {
    let parts: Vec<String> = args.iter().map(|a| pr_str(a, readably)).collect();
    parts.join(separator)
}

/// (pr-str & args) - readable representations joined with spaces
pub(crate) fn builtin_pr_str(args: &[StrixVal]) -> Result<StrixVal> {
    Ok(StrixVal::string(join(args, true, " ")))
}

/// (str & args) - display representations concatenated
pub(crate) fn builtin_str(args: &[StrixVal]) -> Result<StrixVal> {
    Ok(StrixVal::string(join(args, false, "")))
}

/// (prn & args) - print readable representations, return nil
pub(crate) fn builtin_prn(args: &[StrixVal]) -> Result<StrixVal> {
    println!("{}", join(args, true, " "));
    Ok(StrixVal::Nil)
}

/// (println & args) - print display representations, return nil
pub(crate) fn builtin_println(args: &[StrixVal]) -> Result<StrixVal> {
    println!("{}", join(args, false, " "));
    Ok(StrixVal::Nil)
}

/// (time-ms) - milliseconds since the Unix epoch
pub(crate) fn builtin_time_ms(args: &[StrixVal]) -> Result<StrixVal> {
    if !args.is_empty() {
        return Err(Error::arity_named("time-ms", 0, args.len()));
    }
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::Internal(format!("system clock before Unix epoch: {}", e)))?;
    Ok(StrixVal::number(now.as_millis() as f64))
}

/// (read-string s) - read the first form in s
pub(crate) fn builtin_read_string(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("read-string", 1, args.len()));
    }
    match &args[0] {
        StrixVal::String(s) => read_str(s).map_err(Error::from),
        other => Err(Error::type_error_in(
            "read-string",
            "string",
            other.type_name(),
        )),
    }
}

/// (slurp path) - contents of the named text resource
pub(crate) fn builtin_slurp(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("slurp", 1, args.len()));
    }
    match &args[0] {
        StrixVal::String(path) => std::fs::read_to_string(path.as_ref())
            .map(StrixVal::string)
            .map_err(|e| Error::Io(format!("slurp: {}: {}", path, e))),
        other => Err(Error::type_error_in("slurp", "string", other.type_name())),
    }
}

/// (readline prompt) - a line from standard input, or nil at end of input
pub(crate) fn builtin_readline(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("readline", 1, args.len()));
    }
    let prompt = match &args[0] {
        StrixVal::String(s) => s,
        other => {
            return Err(Error::type_error_in(
                "readline",
                "string",
                other.type_name(),
            ))
        }
    };

    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| Error::Io(format!("readline: {}", e)))?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| Error::Io(format!("readline: {}", e)))?;
    if read == 0 {
        return Ok(StrixVal::Nil);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(StrixVal::string(line))
}
