// strix-core - Environment for lexical scoping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Environment for variable bindings with lexical scoping.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use strix_parser::{StrixVal, Symbol};

use crate::error::{Error, Result};

/// A lexical environment for variable bindings.
///
/// Environments form a chain through outer references, enabling lexical
/// scoping. Each environment owns its bindings map and optionally points
/// at an outer environment for enclosing-scope lookup. Environments are
/// shared by reference: a closure capturing a frame and a caller holding
/// the same frame observe each other's mutations.
///
/// # Examples
///
/// ```
/// use strix_core::Env;
/// use strix_parser::{StrixVal, Symbol};
///
/// // Create a root environment
/// let env = Env::new();
///
/// // Define a binding
/// env.define(Symbol::new("x"), StrixVal::number(42.0));
///
/// // Look up the binding
/// assert_eq!(env.get(&Symbol::new("x")).unwrap(), StrixVal::number(42.0));
///
/// // Create a child environment that inherits parent bindings
/// let child = env.child();
/// assert_eq!(child.get(&Symbol::new("x")).unwrap(), StrixVal::number(42.0));
///
/// // Child can shadow parent bindings
/// child.define(Symbol::new("x"), StrixVal::number(100.0));
/// assert_eq!(child.get(&Symbol::new("x")).unwrap(), StrixVal::number(100.0));
/// assert_eq!(env.get(&Symbol::new("x")).unwrap(), StrixVal::number(42.0));
/// ```
#[derive(Debug, Clone)]
pub struct Env {
    inner: Rc<RefCell<EnvInner>>,
}

#[derive(Debug)]
struct EnvInner {
    bindings: HashMap<Symbol, StrixVal>,
    outer: Option<Env>,
}

impl Env {
    /// Create a new root environment with no outer frame.
    pub fn new() -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                outer: None,
            })),
        }
    }

    /// Create a child environment with this environment as its outer frame.
    #[must_use]
    pub fn child(&self) -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                outer: Some(self.clone()),
            })),
        }
    }

    /// Define a binding in this environment (never in an outer frame),
    /// shadowing any outer binding of the same symbol.
    pub fn define(&self, sym: Symbol, val: StrixVal) {
        self.inner.borrow_mut().bindings.insert(sym, val);
    }

    /// Find the nearest environment containing the symbol, if any.
    /// Uses iterative traversal to avoid stack overflow on deep chains.
    #[must_use]
    pub fn find(&self, sym: &Symbol) -> Option<Env> {
        let mut current = self.clone();
        loop {
            let inner = current.inner.borrow();
            if inner.bindings.contains_key(sym) {
                drop(inner);
                return Some(current);
            }
            let outer = inner.outer.clone();
            drop(inner);
            match outer {
                Some(o) => current = o,
                None => return None,
            }
        }
    }

    /// Look up a symbol in this environment or the outer chain.
    pub fn get(&self, sym: &Symbol) -> Result<StrixVal> {
        match self.find(sym) {
            Some(env) => {
                let val = env.inner.borrow().bindings.get(sym).cloned();
                val.ok_or_else(|| Error::Undefined(sym.clone()))
            }
            None => Err(Error::Undefined(sym.clone())),
        }
    }

    /// Check if a symbol is bound in this environment or the outer chain.
    #[must_use]
    pub fn is_defined(&self, sym: &Symbol) -> bool {
        self.find(sym).is_some()
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
