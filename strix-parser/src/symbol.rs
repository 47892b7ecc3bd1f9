// strix-parser - Symbol type with interning
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Symbols are plain identifiers.
//!
//! # Interning
//!
//! Symbols are interned using a global string interner, meaning that two
//! symbols with the same name share the same underlying storage. This
//! provides several benefits:
//!
//! - **O(1) equality**: Comparing symbols is a pointer comparison, not string comparison
//! - **O(1) hashing**: Hash is computed from the pointer address
//! - **Memory efficiency**: Identical symbols share storage
//!
//! # Memory Behaviour
//!
//! **Important**: Interned symbols are never deallocated. The global interner
//! maintains strong references (`Arc`) to all symbols created during the
//! program's lifetime. Memory usage grows monotonically with unique symbols;
//! programs that generate many unique symbols (e.g. via `gensym`) will
//! accumulate them. In practice most programs use a bounded set of symbols.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, OnceLock};

/// An interned identifier.
///
/// Two symbols with the same name share the same underlying storage,
/// so equality and hashing are pointer operations.
#[derive(Clone)]
pub struct Symbol {
    inner: Arc<SymbolInner>,
}

#[derive(Debug)]
struct SymbolInner {
    name: Arc<str>,
}

/// Global symbol interner
static SYMBOL_INTERNER: OnceLock<Mutex<SymbolInterner>> = OnceLock::new();

struct SymbolInterner {
    /// Map from name to interned symbol
    symbols: HashMap<String, Arc<SymbolInner>>,
}

impl SymbolInterner {
    fn new() -> Self {
        SymbolInterner {
            symbols: HashMap::new(),
        }
    }

    fn intern(&mut self, name: &str) -> Arc<SymbolInner> {
        if let Some(existing) = self.symbols.get(name) {
            Arc::clone(existing)
        } else {
            let inner = Arc::new(SymbolInner {
                name: Arc::from(name),
            });
            self.symbols.insert(name.to_string(), Arc::clone(&inner));
            inner
        }
    }
}

fn get_interner() -> &'static Mutex<SymbolInterner> {
    SYMBOL_INTERNER.get_or_init(|| Mutex::new(SymbolInterner::new()))
}

impl Symbol {
    /// Create a new symbol, interning its name.
    pub fn new(name: &str) -> Self {
        let inner = get_interner()
            .lock()
            .expect(
                "Symbol interner mutex poisoned: another thread panicked while holding the lock",
            )
            .intern(name);
        Symbol { inner }
    }

    /// Get the name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.name)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self)
    }
}

impl PartialEq for Symbol {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // Due to interning, pointer comparison is sufficient
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Symbol {}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.name.cmp(&other.inner.name)
    }
}

impl Hash for Symbol {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Use pointer hash for interned symbols
        Arc::as_ptr(&self.inner).hash(state);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_symbol() {
        let sym = Symbol::new("foo");
        assert_eq!(sym.name(), "foo");
        assert_eq!(format!("{}", sym), "foo");
    }

    #[test]
    fn test_interning() {
        let sym1 = Symbol::new("foo");
        let sym2 = Symbol::new("foo");
        assert_eq!(sym1, sym2);
        // Interned symbols share the same Arc
        assert!(Arc::ptr_eq(&sym1.inner, &sym2.inner));
    }

    #[test]
    fn test_equality() {
        let sym1 = Symbol::new("foo");
        let sym2 = Symbol::new("foo");
        let sym3 = Symbol::new("bar");

        assert_eq!(sym1, sym2);
        assert_ne!(sym1, sym3);
    }

    #[test]
    fn test_ordering() {
        let a = Symbol::new("a");
        let b = Symbol::new("b");
        assert!(a < b);
    }

    #[test]
    fn test_operator_symbols() {
        let plus = Symbol::new("+");
        assert_eq!(plus.name(), "+");
        let arrow = Symbol::new("->");
        assert_eq!(arrow.name(), "->");
    }
}
