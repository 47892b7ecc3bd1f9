// strix-parser - Value types for Strix
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for Strix.
//!
//! `StrixVal` is the central enum representing all Strix values. The reader
//! produces `StrixVal` trees and the evaluator consumes them: source code
//! and runtime data share one representation.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use im::{OrdMap, Vector};

use crate::keyword::Keyword;
use crate::symbol::Symbol;

// ============================================================================
// Map Keys
// ============================================================================

/// A map key: a string or a keyword.
///
/// Strings and keywords live in the same key space but are tagged
/// distinctly, so `"abc"` and `:abc` can never collide.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MapKey {
    String(Rc<str>),
    Keyword(Keyword),
}

impl MapKey {
    /// Convert a value into a map key. Only strings and keywords qualify.
    pub fn from_value(val: &StrixVal) -> Option<MapKey> {
        match val {
            StrixVal::String(s) => Some(MapKey::String(Rc::clone(s))),
            StrixVal::Keyword(k) => Some(MapKey::Keyword(k.clone())),
            _ => None,
        }
    }

    /// Convert the key back into a value.
    pub fn to_value(&self) -> StrixVal {
        match self {
            MapKey::String(s) => StrixVal::String(Rc::clone(s)),
            MapKey::Keyword(k) => StrixVal::Keyword(k.clone()),
        }
    }
}

// ============================================================================
// The Value Type
// ============================================================================

/// The core value type for Strix.
///
/// All values are immutable except atom cells; composite values use
/// reference counting and structural sharing. Types that support metadata
/// (lists, vectors, maps, functions, atoms) carry an optional
/// `Rc<StrixVal>` slot. Metadata never affects equality.
#[derive(Clone)]
pub enum StrixVal {
    /// The nil value, representing nothing/absence
    Nil,
    /// Boolean true or false
    Bool(bool),
    /// The single numeric kind
    Number(f64),
    /// Immutable string
    String(Rc<str>),
    /// Interned identifier
    Symbol(Symbol),
    /// Interned self-evaluating identifier
    Keyword(Keyword),
    /// Sequence in round brackets (with optional metadata)
    List(Vector<StrixVal>, Option<Rc<StrixVal>>),
    /// Sequence in square brackets (with optional metadata)
    Vector(Vector<StrixVal>, Option<Rc<StrixVal>>),
    /// Map with string/keyword keys (with optional metadata)
    Map(OrdMap<MapKey, StrixVal>, Option<Rc<StrixVal>>),
    /// User-defined function (closure)
    Fn(StrixFn),
    /// Native (Rust) function
    NativeFn(StrixNativeFn),
    /// Atom (mutable reference cell)
    Atom(StrixAtom),
}

// ============================================================================
// Function Types
// ============================================================================

/// A user-defined function (closure).
///
/// Stores the parameter symbols, an optional rest parameter (written `&`
/// in source), a single body form, and a type-erased reference to the
/// defining environment (the actual environment type lives in strix-core).
/// The macro flag is mutable because `defmacro!` flips it after the
/// closure has been constructed; every handle on the closure observes the
/// change.
#[derive(Clone)]
pub struct StrixFn {
    inner: Rc<StrixFnInner>,
    meta: Option<Rc<StrixVal>>,
}

struct StrixFnInner {
    params: Vec<Symbol>,
    rest_param: Option<Symbol>,
    body: StrixVal,
    env: Rc<dyn Any>,
    is_macro: Cell<bool>,
}

impl StrixFn {
    /// Create a new closure.
    pub fn new(
        params: Vec<Symbol>,
        rest_param: Option<Symbol>,
        body: StrixVal,
        env: Rc<dyn Any>,
    ) -> Self {
        StrixFn {
            inner: Rc::new(StrixFnInner {
                params,
                rest_param,
                body,
                env,
                is_macro: Cell::new(false),
            }),
            meta: None,
        }
    }

    /// Positional parameter symbols (excluding the rest parameter).
    pub fn params(&self) -> &[Symbol] {
        &self.inner.params
    }

    /// The rest parameter, if the parameter list contained `&`.
    pub fn rest_param(&self) -> Option<&Symbol> {
        self.inner.rest_param.as_ref()
    }

    /// The function body form.
    pub fn body(&self) -> &StrixVal {
        &self.inner.body
    }

    /// The captured defining environment (type-erased).
    pub fn env(&self) -> &Rc<dyn Any> {
        &self.inner.env
    }

    /// Whether this closure is flagged as a macro.
    pub fn is_macro(&self) -> bool {
        self.inner.is_macro.get()
    }

    /// Flag this closure as a macro. Visible to every holder.
    pub fn set_macro(&self) {
        self.inner.is_macro.set(true);
    }

    /// The attached metadata, if any.
    pub fn meta(&self) -> Option<&Rc<StrixVal>> {
        self.meta.as_ref()
    }

    /// A copy of this closure carrying the given metadata. The underlying
    /// closure is shared; the original is untouched.
    #[must_use]
    pub fn with_meta(&self, meta: Rc<StrixVal>) -> StrixFn {
        StrixFn {
            inner: Rc::clone(&self.inner),
            meta: Some(meta),
        }
    }
}

impl std::fmt::Debug for StrixFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#<function>")
    }
}

impl PartialEq for StrixFn {
    fn eq(&self, other: &Self) -> bool {
        // Functions compare by identity only
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// A native (Rust) function.
///
/// The function itself is type-erased to avoid a circular dependency on
/// the evaluator's result type; strix-core downcasts when applying.
#[derive(Clone)]
pub struct StrixNativeFn {
    name: &'static str,
    func: Rc<dyn Any>,
    meta: Option<Rc<StrixVal>>,
}

impl StrixNativeFn {
    /// Create a new native function with a type-erased implementation.
    pub fn new(name: &'static str, func: Rc<dyn Any>) -> Self {
        StrixNativeFn {
            name,
            func,
            meta: None,
        }
    }

    /// Get the function name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the inner function reference.
    pub fn func(&self) -> &Rc<dyn Any> {
        &self.func
    }

    /// The attached metadata, if any.
    pub fn meta(&self) -> Option<&Rc<StrixVal>> {
        self.meta.as_ref()
    }

    /// A copy of this native function carrying the given metadata.
    #[must_use]
    pub fn with_meta(&self, meta: Rc<StrixVal>) -> StrixNativeFn {
        StrixNativeFn {
            name: self.name,
            func: Rc::clone(&self.func),
            meta: Some(meta),
        }
    }
}

impl std::fmt::Debug for StrixNativeFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#<function {}>", self.name)
    }
}

impl PartialEq for StrixNativeFn {
    fn eq(&self, other: &Self) -> bool {
        // Native functions compare by identity of the implementation
        Rc::ptr_eq(&self.func, &other.func)
    }
}

// ============================================================================
// Atom Type
// ============================================================================

/// The sole mutable container: a single replaceable slot.
///
/// The cell is shared by reference: every closure or binding that holds
/// the atom observes mutations immediately.
#[derive(Clone)]
pub struct StrixAtom {
    value: Rc<RefCell<StrixVal>>,
    meta: Option<Rc<StrixVal>>,
}

impl StrixAtom {
    /// Create a new atom with an initial value.
    pub fn new(value: StrixVal) -> Self {
        StrixAtom {
            value: Rc::new(RefCell::new(value)),
            meta: None,
        }
    }

    /// Get the current value (deref).
    pub fn deref(&self) -> StrixVal {
        self.value.borrow().clone()
    }

    /// Replace the value in place, returning the new value.
    pub fn reset(&self, new_val: StrixVal) -> StrixVal {
        *self.value.borrow_mut() = new_val.clone();
        new_val
    }

    /// The attached metadata, if any.
    pub fn meta(&self) -> Option<&Rc<StrixVal>> {
        self.meta.as_ref()
    }

    /// A copy of this atom carrying the given metadata. The cell is
    /// shared: both copies see the same contents.
    #[must_use]
    pub fn with_meta(&self, meta: Rc<StrixVal>) -> StrixAtom {
        StrixAtom {
            value: Rc::clone(&self.value),
            meta: Some(meta),
        }
    }
}

impl std::fmt::Debug for StrixAtom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(atom {:?})", self.value.borrow())
    }
}

impl PartialEq for StrixAtom {
    fn eq(&self, other: &Self) -> bool {
        // Atoms compare by identity of the cell
        Rc::ptr_eq(&self.value, &other.value)
    }
}

// ============================================================================
// Constructors and Accessors
// ============================================================================

impl StrixVal {
    /// Create a nil value
    pub fn nil() -> Self {
        StrixVal::Nil
    }

    /// Create a boolean value
    pub fn bool(b: bool) -> Self {
        StrixVal::Bool(b)
    }

    /// Create a number value
    pub fn number(n: f64) -> Self {
        StrixVal::Number(n)
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        StrixVal::String(Rc::from(s.into()))
    }

    /// Create a symbol value
    pub fn symbol(sym: Symbol) -> Self {
        StrixVal::Symbol(sym)
    }

    /// Create a keyword value
    pub fn keyword(kw: Keyword) -> Self {
        StrixVal::Keyword(kw)
    }

    /// Create a list from a vector of elements
    pub fn list(items: Vec<StrixVal>) -> Self {
        StrixVal::List(items.into_iter().collect(), None)
    }

    /// Create an empty list
    pub fn empty_list() -> Self {
        StrixVal::List(Vector::new(), None)
    }

    /// Create a vector from a vector of elements
    pub fn vector(items: Vec<StrixVal>) -> Self {
        StrixVal::Vector(items.into_iter().collect(), None)
    }

    /// Create a map value from an existing key map
    pub fn map(map: OrdMap<MapKey, StrixVal>) -> Self {
        StrixVal::Map(map, None)
    }

    /// Build a map from an alternating key/value sequence.
    ///
    /// Fails when the sequence has an odd length or a key is neither a
    /// string nor a keyword.
    pub fn map_from_seq(forms: &[StrixVal]) -> Result<OrdMap<MapKey, StrixVal>, String> {
        if forms.len() % 2 != 0 {
            return Err("odd number of forms in hash map".to_string());
        }
        let mut map = OrdMap::new();
        for pair in forms.chunks(2) {
            let key = MapKey::from_value(&pair[0]).ok_or_else(|| {
                format!(
                    "unexpected map key: {}, expected: string or keyword",
                    pair[0].type_name()
                )
            })?;
            map.insert(key, pair[1].clone());
        }
        Ok(map)
    }

    /// Create an atom value
    pub fn atom(value: StrixVal) -> Self {
        StrixVal::Atom(StrixAtom::new(value))
    }

    /// Check if this value is truthy (not nil and not false)
    pub fn is_truthy(&self) -> bool {
        !matches!(self, StrixVal::Nil | StrixVal::Bool(false))
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            StrixVal::Nil => "nil",
            StrixVal::Bool(_) => "bool",
            StrixVal::Number(_) => "number",
            StrixVal::String(_) => "string",
            StrixVal::Symbol(_) => "symbol",
            StrixVal::Keyword(_) => "keyword",
            StrixVal::List(_, _) => "list",
            StrixVal::Vector(_, _) => "vector",
            StrixVal::Map(_, _) => "map",
            StrixVal::Fn(_) => "function",
            StrixVal::NativeFn(_) => "function",
            StrixVal::Atom(_) => "atom",
        }
    }

    /// Get the metadata of this value, if any.
    /// Returns None for types that don't support metadata.
    pub fn meta(&self) -> Option<&Rc<StrixVal>> {
        match self {
            StrixVal::List(_, meta) => meta.as_ref(),
            StrixVal::Vector(_, meta) => meta.as_ref(),
            StrixVal::Map(_, meta) => meta.as_ref(),
            StrixVal::Fn(f) => f.meta(),
            StrixVal::NativeFn(f) => f.meta(),
            StrixVal::Atom(a) => a.meta(),
            _ => None,
        }
    }

    /// Return a new value sharing this value's content but carrying the
    /// given metadata. The receiver is untouched. Returns None for types
    /// that don't support metadata.
    #[must_use]
    pub fn with_meta(&self, meta: Rc<StrixVal>) -> Option<StrixVal> {
        match self {
            StrixVal::List(items, _) => Some(StrixVal::List(items.clone(), Some(meta))),
            StrixVal::Vector(items, _) => Some(StrixVal::Vector(items.clone(), Some(meta))),
            StrixVal::Map(map, _) => Some(StrixVal::Map(map.clone(), Some(meta))),
            StrixVal::Fn(f) => Some(StrixVal::Fn(f.with_meta(meta))),
            StrixVal::NativeFn(f) => Some(StrixVal::NativeFn(f.with_meta(meta))),
            StrixVal::Atom(a) => Some(StrixVal::Atom(a.with_meta(meta))),
            _ => None,
        }
    }
}

// ============================================================================
// Equality
// ============================================================================

impl PartialEq for StrixVal {
    fn eq(&self, other: &Self) -> bool {
        // Metadata is intentionally ignored in equality comparisons, and
        // lists and vectors compare by element sequence regardless of kind.
        match (self, other) {
            (StrixVal::Nil, StrixVal::Nil) => true,
            (StrixVal::Bool(a), StrixVal::Bool(b)) => a == b,
            (StrixVal::Number(a), StrixVal::Number(b)) => a == b,
            (StrixVal::String(a), StrixVal::String(b)) => a == b,
            (StrixVal::Symbol(a), StrixVal::Symbol(b)) => a == b,
            (StrixVal::Keyword(a), StrixVal::Keyword(b)) => a == b,
            (
                StrixVal::List(a, _) | StrixVal::Vector(a, _),
                StrixVal::List(b, _) | StrixVal::Vector(b, _),
            ) => a == b,
            (StrixVal::Map(a, _), StrixVal::Map(b, _)) => a == b,
            (StrixVal::Fn(a), StrixVal::Fn(b)) => a == b,
            (StrixVal::NativeFn(a), StrixVal::NativeFn(b)) => a == b,
            (StrixVal::Atom(a), StrixVal::Atom(b)) => a == b,
            _ => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
