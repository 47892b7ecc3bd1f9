// strix-parser - Keyword type with interning
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Keywords are self-evaluating identifiers written with a leading colon.
//!
//! # Interning
//!
//! Keywords are interned using a global string interner, meaning that two
//! keywords with the same name share the same underlying storage. This
//! provides several benefits:
//!
//! - **O(1) equality**: Comparing keywords is a pointer comparison, not string comparison
//! - **O(1) hashing**: Hash is computed from the pointer address
//! - **Memory efficiency**: Identical keywords share storage
//!
//! Keywords occupy the same map key space as strings but are tagged
//! distinctly, so `:abc` and `"abc"` never collide or compare equal.
//!
//! # Memory Behaviour
//!
//! **Important**: Interned keywords are never deallocated. The global
//! interner maintains strong references (`Arc`) to all keywords created
//! during the program's lifetime, so memory usage grows monotonically with
//! unique keywords.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, OnceLock};

/// A self-evaluating identifier, printed with a leading colon.
#[derive(Clone)]
pub struct Keyword {
    inner: Arc<KeywordInner>,
}

#[derive(Debug)]
struct KeywordInner {
    name: Arc<str>,
}

/// Global keyword interner
static KEYWORD_INTERNER: OnceLock<Mutex<KeywordInterner>> = OnceLock::new();

struct KeywordInterner {
    /// Map from name to interned keyword
    keywords: HashMap<String, Arc<KeywordInner>>,
}

impl KeywordInterner {
    fn new() -> Self {
        KeywordInterner {
            keywords: HashMap::new(),
        }
    }

    fn intern(&mut self, name: &str) -> Arc<KeywordInner> {
        if let Some(existing) = self.keywords.get(name) {
            Arc::clone(existing)
        } else {
            let inner = Arc::new(KeywordInner {
                name: Arc::from(name),
            });
            self.keywords.insert(name.to_string(), Arc::clone(&inner));
            inner
        }
    }
}

fn get_interner() -> &'static Mutex<KeywordInterner> {
    KEYWORD_INTERNER.get_or_init(|| Mutex::new(KeywordInterner::new()))
}

impl Keyword {
    /// Create a new keyword, interning its name. The name excludes the colon.
    pub fn new(name: &str) -> Self {
        let inner = get_interner()
            .lock()
            .expect(
                "Keyword interner mutex poisoned: another thread panicked while holding the lock",
            )
            .intern(name);
        Keyword { inner }
    }

    /// Get the name (without the leading colon).
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.inner.name)
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keyword({})", self)
    }
}

impl PartialEq for Keyword {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // Due to interning, pointer comparison is sufficient
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Keyword {}

impl PartialOrd for Keyword {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyword {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.name.cmp(&other.inner.name)
    }
}

impl Hash for Keyword {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Use pointer hash for interned keywords
        Arc::as_ptr(&self.inner).hash(state);
    }
}

// ============================================================================
// Tests
// ============================================================================
