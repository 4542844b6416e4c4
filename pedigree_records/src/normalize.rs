// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Record normalization: container resolution, identifier coercion, and table-driven
//! field lookup.
//!
//! Normalization never fails. Items without a usable identifier are dropped and
//! everything else is coerced into a [`Person`].

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::slice;

use serde_json::{Map, Value};

use crate::types::{FIELD_KEYS, Person};

/// Keys tried, in order, for the Ahnentafel identifier.
pub const ID_KEYS: [&str; 5] = ["id", "ID", "Id", "sosa", "Sosa"];

/// Key holding the explicit generation number.
pub const GENERATION_KEY: &str = "generation";

/// Key holding the gender marker.
pub const GENDER_KEY: &str = "gender";

/// Largest identifier that survives a round trip through an `f64` unchanged.
const MAX_EXACT_ID: f64 = 9_007_199_254_740_991.0;

/// Normalize an arbitrary JSON document into canonical persons.
///
/// Output order is input order. Duplicate identifiers are kept; they collapse when
/// the records are keyed by identifier downstream.
pub fn normalize(input: &Value) -> Vec<Person> {
    let items = records(input);
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match person_from_item(item) {
            Some(person) => out.push(person),
            None => tracing::trace!(index, "dropping record without a usable identifier"),
        }
    }
    tracing::debug!(
        received = items.len(),
        kept = out.len(),
        "normalized records"
    );
    out
}

/// Resolve the record sequence held by a document.
///
/// A top-level array is used as is; otherwise a `people` array, then a `records`
/// array; otherwise the document itself is the only record. `null` holds none.
pub fn records(input: &Value) -> &[Value] {
    match input {
        Value::Null => &[],
        Value::Array(items) => items,
        Value::Object(map) => {
            if let Some(Value::Array(items)) = map.get("people") {
                items
            } else if let Some(Value::Array(items)) = map.get("records") {
                items
            } else {
                slice::from_ref(input)
            }
        }
        other => slice::from_ref(other),
    }
}

/// Convert one raw item, or `None` when it carries no usable identifier.
pub fn person_from_item(item: &Value) -> Option<Person> {
    let map = item.as_object()?;
    let id = first_present(map, &ID_KEYS).and_then(coerce_id)?;

    let mut person = Person::new(id);
    person.generation = map.get(GENERATION_KEY).and_then(coerce_generation);
    person.gender = map.get(GENDER_KEY).and_then(display_string);
    for (field, keys) in &FIELD_KEYS {
        if let Some(value) = first_present(map, keys).and_then(display_string) {
            *person.field_mut(*field) = value;
        }
    }
    Some(person)
}

/// Returns the first value among `keys` that is present and not `null`.
pub fn first_present<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| !value.is_null())
}

/// Coerce a JSON value to a finite number.
///
/// Numbers are taken as is; strings are trimmed and parsed. Empty strings and
/// every other kind of value yield `None`.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn coerce_id(value: &Value) -> Option<u64> {
    if let Some(id) = value.as_u64() {
        return (id >= 1).then_some(id);
    }
    let n = coerce_number(value)?;
    if !(1.0..=MAX_EXACT_ID).contains(&n) {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "range checked above; fractional values are rejected below."
    )]
    let id = n as u64;
    let exact = id as f64 == n;
    exact.then_some(id)
}

fn coerce_generation(value: &Value) -> Option<u32> {
    let n = coerce_number(value)?;
    if !(0.0..=f64::from(u32::MAX)).contains(&n) {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "range checked above; fractional values are rejected below."
    )]
    let generation = n as u32;
    (f64::from(generation) == n).then_some(generation)
}

/// String form of a non-null value. Strings are passed through verbatim.
fn display_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn top_level_array_is_used() {
        let people = normalize(&json!([{ "id": 1 }, { "id": 2 }]));
        let ids: Vec<u64> = people.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn people_wins_over_records() {
        let doc = json!({
            "people": [{ "id": 4 }],
            "records": [{ "id": 9 }],
        });
        let people = normalize(&doc);
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].id, 4);
    }

    #[test]
    fn records_used_when_people_is_not_a_sequence() {
        let doc = json!({ "people": "nope", "records": [{ "sosa": 3 }] });
        let people = normalize(&doc);
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].id, 3);
    }

    #[test]
    fn single_object_is_one_record() {
        let people = normalize(&json!({ "Sosa": "7", "name": "Solo" }));
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].id, 7);
        assert_eq!(people[0].name, "Solo");
    }

    #[test]
    fn null_and_garbage_yield_nothing() {
        assert!(normalize(&Value::Null).is_empty());
        assert!(normalize(&json!([])).is_empty());
        assert!(normalize(&json!([{ "foo": 1 }])).is_empty());
        assert!(normalize(&json!(42)).is_empty());
    }

    #[test]
    fn identifier_keys_are_tried_in_order() {
        let people = normalize(&json!([
            { "ID": 2 },
            { "Id": "3" },
            { "sosa": 4.0 },
            { "id": null, "Sosa": 5 },
            { "id": 6, "sosa": 60 },
        ]));
        let ids: Vec<u64> = people.iter().map(|p| p.id).collect();
        assert_eq!(ids, [2, 3, 4, 5, 6]);
    }

    #[test]
    fn unusable_identifiers_are_dropped() {
        let people = normalize(&json!([
            { "id": "abc" },
            { "id": "" },
            { "id": 0 },
            { "id": -3 },
            { "id": 2.5 },
            { "id": true },
            { "id": "NaN" },
            { "id": "inf" },
            { "id": [1] },
            { "id": " 8 " },
        ]));
        let ids: Vec<u64> = people.iter().map(|p| p.id).collect();
        assert_eq!(ids, [8]);
    }

    #[test]
    fn first_present_identifier_decides() {
        // A present but unusable `id` is not rescued by a later key.
        assert!(normalize(&json!({ "id": "x", "sosa": 4 })).is_empty());
    }

    #[test]
    fn duplicates_are_kept_in_input_order() {
        let people = normalize(&json!([
            { "id": 1, "name": "first" },
            { "id": 1, "name": "second" },
        ]));
        assert_eq!(people.len(), 2);
        assert_eq!(people[1].name, "second");
    }

    #[test]
    fn fields_resolve_label_then_snake_then_camel() {
        let people = normalize(&json!([
            {
                "id": 1,
                "Date de naissance": "1801",
                "birth_date": "ignored",
                "birthPlace": "Nantes",
                "union_date": null,
                "unionDate": "1825",
            },
        ]));
        let p = &people[0];
        assert_eq!(p.birth_date, "1801");
        assert_eq!(p.birth_place, "Nantes");
        assert_eq!(p.union_date, "1825");
        assert_eq!(p.death_date, "");
    }

    #[test]
    fn non_string_fields_are_stringified() {
        let people = normalize(&json!([
            { "id": 1, "children_count": 3, "spouse": false, "Nom": "Ana" },
        ]));
        let p = &people[0];
        assert_eq!(p.children_count, "3");
        assert_eq!(p.spouse, "false");
        assert_eq!(p.name, "Ana");
    }

    #[test]
    fn generation_and_gender() {
        let people = normalize(&json!([
            { "id": 1, "generation": "0", "gender": "H" },
            { "id": 2, "generation": "x" },
            { "id": 3, "generation": -1, "gender": null },
        ]));
        assert_eq!(people[0].generation, Some(0));
        assert_eq!(people[0].gender.as_deref(), Some("H"));
        assert_eq!(people[1].generation, None);
        assert_eq!(people[2].generation, None);
        assert_eq!(people[2].gender, None);
    }

    #[test]
    fn coerce_number_accepts_trimmed_text() {
        assert_eq!(coerce_number(&json!(" 12 ")), Some(12.0));
        assert_eq!(coerce_number(&json!("1e2")), Some(100.0));
        assert_eq!(coerce_number(&json!("   ")), None);
        assert_eq!(coerce_number(&json!(null)), None);
    }
}
