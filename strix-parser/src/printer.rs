// strix-parser - Printer for Strix
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Serialisation of `StrixVal` back to text.
//!
//! Readable mode escapes strings so that output re-parses to an equal
//! value; display mode prints string contents raw (for `str`/`println`).
//! Metadata is never printed.

use crate::value::{MapKey, StrixVal};

/// Serialise a value.
pub fn pr_str(val: &StrixVal, readably: bool) -> String {
    match val {
        StrixVal::Nil => "nil".to_string(),
        StrixVal::Bool(b) => b.to_string(),
        StrixVal::Number(n) => format_number(*n),
        StrixVal::String(s) => {
            if readably {
                format!("\"{}\"", escape_string(s))
            } else {
                s.to_string()
            }
        }
        StrixVal::Symbol(sym) => sym.to_string(),
        StrixVal::Keyword(kw) => kw.to_string(),
        StrixVal::List(items, _) => {
            let parts: Vec<String> = items.iter().map(|v| pr_str(v, readably)).collect();
            format!("({})", parts.join(" "))
        }
        StrixVal::Vector(items, _) => {
            let parts: Vec<String> = items.iter().map(|v| pr_str(v, readably)).collect();
            format!("[{}]", parts.join(" "))
        }
        StrixVal::Map(map, _) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{} {}", pr_key(k, readably), pr_str(v, readably)))
                .collect();
            format!("{{{}}}", parts.join(" "))
        }
        StrixVal::Fn(_) | StrixVal::NativeFn(_) => "#<function>".to_string(),
        StrixVal::Atom(a) => format!("(atom {})", pr_str(&a.deref(), readably)),
    }
}

fn pr_key(key: &MapKey, readably: bool) -> String {
    pr_str(&key.to_value(), readably)
}

/// Numbers with no fractional part print as integers.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }
    result
}

impl std::fmt::Display for StrixVal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", pr_str(self, true))
    }
}

impl std::fmt::Debug for StrixVal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
