// strix-core - Collection built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Collection operations: vector, hash-map, assoc, dissoc, get,
//! contains?, keys, vals
//!
//! Maps are copy-on-write: assoc and dissoc build new maps and leave the
//! receiver untouched. Keys are restricted to strings and keywords.

use strix_parser::{MapKey, OrdMap, StrixVal};

use crate::error::{Error, Result};

/// (vector & items) - build a vector of the arguments
pub(crate) fn builtin_vector(args: &[StrixVal]) -> Result<StrixVal> {
    Ok(StrixVal::vector(args.to_vec()))
}

/// (hash-map & kvs) - build a map from alternating keys and values
pub(crate) fn builtin_hash_map(args: &[StrixVal]) -> Result<StrixVal> {
    let map = StrixVal::map_from_seq(args).map_err(|msg| Error::syntax("hash-map", msg))?;
    Ok(StrixVal::map(map))
}

fn expect_map(
    context: &'static str,
    val: &StrixVal,
) -> Result<OrdMap<MapKey, StrixVal>> {
    match val {
        StrixVal::Map(map, _) => Ok(map.clone()),
        other => Err(Error::type_error_in(context, "map", other.type_name())),
    }
}

fn expect_key(context: &'static str, val: &StrixVal) -> Result<MapKey> {
    MapKey::from_value(val)
        .ok_or_else(|| Error::type_error_in(context, "string or keyword", val.type_name()))
}

/// (assoc map & kvs) - a new map with the pairs added
pub(crate) fn builtin_assoc(args: &[StrixVal]) -> Result<StrixVal> {
    if args.is_empty() {
        return Err(Error::arity_at_least("assoc", 1, args.len()));
    }
    let mut map = expect_map("assoc", &args[0])?;
    let additions =
        StrixVal::map_from_seq(&args[1..]).map_err(|msg| Error::syntax("assoc", msg))?;
    for (k, v) in additions {
        map.insert(k, v);
    }
    Ok(StrixVal::map(map))
}

/// (dissoc map & keys) - a new map with the keys removed
pub(crate) fn builtin_dissoc(args: &[StrixVal]) -> Result<StrixVal> {
    if args.is_empty() {
        return Err(Error::arity_at_least("dissoc", 1, args.len()));
    }
    let mut map = expect_map("dissoc", &args[0])?;
    for key in &args[1..] {
        map.remove(&expect_key("dissoc", key)?);
    }
    Ok(StrixVal::map(map))
}

/// (get map key) - value for key, nil when missing; nil tolerated as an
/// empty map
pub(crate) fn builtin_get(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 2 {
        return Err(Error::arity_named("get", 2, args.len()));
    }
    if matches!(args[0], StrixVal::Nil) {
        return Ok(StrixVal::Nil);
    }
    let map = expect_map("get", &args[0])?;
    let key = expect_key("get", &args[1])?;
    Ok(map.get(&key).cloned().unwrap_or(StrixVal::Nil))
}

/// (contains? map key) - whether the key is present; nil tolerated as an
/// empty map
pub(crate) fn builtin_contains_p(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 2 {
        return Err(Error::arity_named("contains?", 2, args.len()));
    }
    if matches!(args[0], StrixVal::Nil) {
        return Ok(StrixVal::bool(false));
    }
    let map = expect_map("contains?", &args[0])?;
    let key = expect_key("contains?", &args[1])?;
    Ok(StrixVal::bool(map.contains_key(&key)))
}

/// (keys map) - a list of the keys
pub(crate) fn builtin_keys(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("keys", 1, args.len()));
    }
    let map = expect_map("keys", &args[0])?;
    Ok(StrixVal::list(map.keys().map(MapKey::to_value).collect()))
}

/// (vals map) - a list of the values
pub(crate) fn builtin_vals(args: &[StrixVal]) -> Result<StrixVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("vals", 1, args.len()));
    }
    let map = expect_map("vals", &args[0])?;
    Ok(StrixVal::list(map.values().cloned().collect()))
}
