// strix-core - Printer/reader round-trip property tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! For any literal value without metadata, printing readably and
//! re-reading yields a structurally equal value.

use std::rc::Rc;

use proptest::prelude::*;

use strix_parser::{pr_str, read_str, Keyword, MapKey, OrdMap, StrixVal, Symbol};

fn leaf_value() -> impl Strategy<Value = StrixVal> {
    prop_oneof![
        Just(StrixVal::Nil),
        any::<bool>().prop_map(StrixVal::bool),
        (-1_000_000i64..1_000_000i64).prop_map(|n| StrixVal::number(n as f64)),
        // The float grammar accepts a single digit before the point
        (0u8..=9u8, 1u16..=999u16).prop_map(|(d, frac)| {
            let text = format!("{}.{:03}", d, frac);
            StrixVal::number(text.parse().expect("generated float text"))
        }),
        "[ -~]{0,12}".prop_map(StrixVal::string),
        "[a-z][a-z0-9-]{0,8}".prop_map(|s| StrixVal::keyword(Keyword::new(&s))),
        "[a-z][a-z0-9-]{0,8}"
            .prop_filter("reserved words read as other kinds", |s| {
                !matches!(s.as_str(), "nil" | "true" | "false")
            })
            .prop_map(|s| StrixVal::symbol(Symbol::new(&s))),
    ]
}

fn map_key() -> impl Strategy<Value = MapKey> {
    prop_oneof![
        "[ -~]{0,8}".prop_map(|s| MapKey::String(Rc::from(s))),
        "[a-z][a-z0-9-]{0,6}".prop_map(|s| MapKey::Keyword(Keyword::new(&s))),
    ]
}

fn literal_value() -> impl Strategy<Value = StrixVal> {
    leaf_value().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(StrixVal::list),
            prop::collection::vec(inner.clone(), 0..6).prop_map(StrixVal::vector),
            prop::collection::vec((map_key(), inner), 0..4).prop_map(|pairs| {
                let mut map = OrdMap::new();
                for (k, v) in pairs {
                    map.insert(k, v);
                }
                StrixVal::map(map)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn readable_print_reparses_to_equal_value(val in literal_value()) {
        let printed = pr_str(&val, true);
        let reread = read_str(&printed).expect("printed form must re-parse");
        prop_assert_eq!(reread, val);
    }

    #[test]
    fn printing_is_stable_across_one_round_trip(val in literal_value()) {
        let printed = pr_str(&val, true);
        let reread = read_str(&printed).expect("printed form must re-parse");
        prop_assert_eq!(pr_str(&reread, true), printed);
    }

    #[test]
    fn strings_survive_escaping(s in "[ -~]{0,24}") {
        let val = StrixVal::string(s.clone());
        let reread = read_str(&pr_str(&val, true)).expect("escaped string must re-parse");
        match reread {
            StrixVal::String(out) => prop_assert_eq!(out.as_ref(), s.as_str()),
            other => prop_assert!(false, "expected string, got {}", other),
        }
    }
}
