//! Object utilities
//!
//! Deep copy, deep merge and dotted-path access on [`serde_json::Value`]
//! trees. `merge` and `set` mutate their first argument through `&mut`;
//! everything else borrows.

use serde_json::{Map, Value};

/// Returns a fully independent copy of `value`.
///
/// Owned trees never share nodes, so the copy can be mutated without
/// touching the source.
pub fn deep_clone<T: Clone>(value: &T) -> T {
    value.clone()
}

/// Deep-merges every source into `target`, left to right.
///
/// For each key of a source mapping, a mapping value is merged into the
/// target's mapping at that key (created when the key is absent or holds
/// anything else); any other value overwrites. Sources that are not
/// mappings are skipped, and so is everything when `target` is not one.
pub fn merge<'a>(target: &'a mut Value, sources: &[Value]) -> &'a mut Value {
    for source in sources {
        if let (Value::Object(target_map), Value::Object(source_map)) = (&mut *target, source) {
            merge_maps(target_map, source_map);
        }
    }
    target
}

fn merge_maps(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        match value {
            Value::Object(inner) => {
                let slot = target
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(slot_map) = slot {
                    merge_maps(slot_map, inner);
                }
            }
            other => {
                target.insert(key.clone(), other.clone());
            }
        }
    }
}

fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|idx| items.get(idx)),
        _ => None,
    }
}

/// Looks up a dotted `path` such as `a.b.c`.
///
/// Mappings are walked by key and sequences by numeric index. Returns
/// `None` as soon as a segment is missing or its parent is a scalar.
pub fn get_opt<'a>(obj: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(obj, child)
}

/// Like [`get_opt`], falling back to `default`.
///
/// A `null` stored at the path is returned as is.
///
/// ```rust
/// use pure_utils::object::get;
/// use serde_json::json;
///
/// let obj = json!({ "a": { "b": { "c": 1 } } });
/// assert_eq!(get(&obj, "a.b.c", &json!(null)), &json!(1));
/// assert_eq!(get(&json!({}), "a.b.c", &json!(42)), &json!(42));
/// ```
pub fn get<'a>(obj: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    get_opt(obj, path).unwrap_or(default)
}

/// Largest gap of `null`s [`set`] pads a sequence with.
pub const MAX_ARRAY_PADDING: usize = 1024;

fn child_mut<'a>(value: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    let index = match &*value {
        Value::Array(_) => key.parse::<usize>().ok(),
        _ => None,
    };
    match (value, index) {
        (Value::Array(items), Some(idx)) => {
            if idx >= items.len() {
                if idx - items.len() > MAX_ARRAY_PADDING {
                    return None;
                }
                items.resize(idx + 1, Value::Null);
            }
            items.get_mut(idx)
        }
        (value, _) => {
            if !value.is_object() {
                *value = Value::Object(Map::new());
            }
            value
                .as_object_mut()
                .map(|map| map.entry(key.to_string()).or_insert(Value::Null))
        }
    }
}

/// Assigns `value` at a dotted `path`, creating mappings along the way.
///
/// Missing or scalar intermediates (and a scalar root) are replaced by
/// empty mappings. Sequences are indexed numerically; assigning past their
/// end pads them with `null`, up to [`MAX_ARRAY_PADDING`] slots.
///
/// Returns `false` when the write is refused because an index lies further
/// past the end of its sequence. Mappings created before that segment are
/// kept.
pub fn set(obj: &mut Value, path: &str, value: Value) -> bool {
    let mut keys = path.split('.');
    let Some(last) = keys.next_back() else {
        return false;
    };

    let mut current = obj;
    for key in keys {
        match child_mut(current, key) {
            Some(next) => current = next,
            None => return refuse(path),
        }
    }
    match child_mut(current, last) {
        Some(slot) => {
            *slot = value;
            true
        }
        None => refuse(path),
    }
}

fn refuse(_path: &str) -> bool {
    #[cfg(feature = "tracing")]
    tracing::warn!("set: index too far past the end of a sequence in {:?}", _path);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deep_clone_is_independent() {
        let source = json!({ "a": [1, { "b": 2 }], "c": { "d": "x" } });
        let mut copy = deep_clone(&source);

        copy["a"][1]["b"] = json!(3);
        copy["c"]["d"] = json!("y");

        assert_eq!(source, json!({ "a": [1, { "b": 2 }], "c": { "d": "x" } }));
        assert_eq!(copy["a"][1]["b"], json!(3));
    }

    #[test]
    fn test_deep_clone_primitives_and_dates() {
        assert_eq!(deep_clone(&json!(null)), json!(null));
        assert_eq!(deep_clone(&42), 42);
        let date = chrono::Utc::now();
        assert_eq!(deep_clone(&date), date);
    }

    #[test]
    fn test_merge_nested() {
        let mut target = json!({ "a": 1, "b": { "x": 1, "y": 2 } });
        merge(
            &mut target,
            &[json!({ "b": { "y": 3, "z": 4 } }), json!({ "c": [1, 2] })],
        );

        assert_eq!(
            target,
            json!({ "a": 1, "b": { "x": 1, "y": 3, "z": 4 }, "c": [1, 2] })
        );
    }

    #[test]
    fn test_merge_left_to_right_overwrite() {
        let mut target = json!({ "a": 1 });
        let merged = merge(&mut target, &[json!({ "a": 2 }), json!({ "a": 3 })]);
        assert_eq!(merged, &json!({ "a": 3 }));
    }

    #[test]
    fn test_merge_creates_or_replaces_mapping_slots() {
        let mut target = json!({ "a": null, "b": 5 });
        merge(&mut target, &[json!({ "a": { "x": 1 }, "b": { "y": 2 }, "c": { "z": 3 } })]);
        assert_eq!(
            target,
            json!({ "a": { "x": 1 }, "b": { "y": 2 }, "c": { "z": 3 } })
        );
    }

    #[test]
    fn test_merge_arrays_and_nulls_overwrite() {
        let mut target = json!({ "list": [1, 2, 3], "keep": { "k": 1 } });
        merge(&mut target, &[json!({ "list": [9], "keep": null })]);
        assert_eq!(target, json!({ "list": [9], "keep": null }));
    }

    #[test]
    fn test_merge_ignores_non_mappings() {
        let mut target = json!([1, 2]);
        merge(&mut target, &[json!({ "a": 1 })]);
        assert_eq!(target, json!([1, 2]));

        let mut target = json!({ "a": 1 });
        merge(&mut target, &[json!("text"), json!([1])]);
        assert_eq!(target, json!({ "a": 1 }));
    }

    #[test]
    fn test_merge_no_sources() {
        let mut target = json!({ "a": 1 });
        merge(&mut target, &[]);
        assert_eq!(target, json!({ "a": 1 }));
    }

    #[test]
    fn test_get() {
        let obj = json!({ "a": { "b": { "c": 1 } } });
        assert_eq!(get(&obj, "a.b.c", &Value::Null), &json!(1));
        assert_eq!(get(&obj, "a.b", &Value::Null), &json!({ "c": 1 }));
        assert_eq!(get(&json!({}), "a.b.c", &json!(42)), &json!(42));
    }

    #[test]
    fn test_get_stops_at_scalars() {
        let obj = json!({ "a": { "b": 5 } });
        assert_eq!(get(&obj, "a.b.c", &json!("fallback")), &json!("fallback"));
        assert_eq!(get_opt(&obj, "a.x"), None);
        assert_eq!(get_opt(&json!(3), "a"), None);
    }

    #[test]
    fn test_get_returns_stored_null() {
        let obj = json!({ "a": null });
        assert_eq!(get(&obj, "a", &json!(1)), &Value::Null);
        assert_eq!(get(&obj, "a.b", &json!(1)), &json!(1));
    }

    #[test]
    fn test_get_indexes_sequences() {
        let obj = json!({ "items": [{ "id": 7 }, { "id": 8 }] });
        assert_eq!(get_opt(&obj, "items.1.id"), Some(&json!(8)));
        assert_eq!(get_opt(&obj, "items.2.id"), None);
        assert_eq!(get_opt(&obj, "items.first"), None);
    }

    #[test]
    fn test_set_creates_intermediates() {
        let mut obj = json!({});
        set(&mut obj, "a.b.c", json!(1));
        assert_eq!(obj, json!({ "a": { "b": { "c": 1 } } }));

        set(&mut obj, "a.b.d", json!("x"));
        assert_eq!(obj, json!({ "a": { "b": { "c": 1, "d": "x" } } }));
    }

    #[test]
    fn test_set_overwrites_scalar_intermediates() {
        let mut obj = json!({ "a": 5, "n": null });
        set(&mut obj, "a.b", json!(true));
        set(&mut obj, "n.m", json!(0));
        assert_eq!(obj, json!({ "a": { "b": true }, "n": { "m": 0 } }));
    }

    #[test]
    fn test_set_top_level_and_scalar_root() {
        let mut obj = json!({ "a": 1 });
        set(&mut obj, "a", json!(2));
        assert_eq!(obj, json!({ "a": 2 }));

        let mut root = json!("scalar");
        set(&mut root, "k", json!(1));
        assert_eq!(root, json!({ "k": 1 }));
    }

    #[test]
    fn test_set_into_sequences() {
        let mut obj = json!({ "items": [{ "id": 1 }] });
        set(&mut obj, "items.0.id", json!(9));
        set(&mut obj, "items.2", json!("z"));
        assert_eq!(obj, json!({ "items": [{ "id": 9 }, null, "z"] }));
    }

    #[test]
    fn test_set_refuses_huge_sequence_index() {
        let mut obj = json!({ "items": [1] });

        assert!(!set(&mut obj, "items.18446744073709551615", json!(2)));
        assert!(!set(&mut obj, "items.1000000000000", json!(2)));
        assert!(!set(&mut obj, "items.1000000000000.deep", json!(2)));
        assert_eq!(obj, json!({ "items": [1] }));
    }

    #[test]
    fn test_set_pads_up_to_the_limit() {
        let mut obj = json!([]);

        assert!(set(&mut obj, &MAX_ARRAY_PADDING.to_string(), json!("end")));
        let items = obj.as_array().unwrap();
        assert_eq!(items.len(), MAX_ARRAY_PADDING + 1);
        assert_eq!(items[MAX_ARRAY_PADDING], json!("end"));
        assert!(items[..MAX_ARRAY_PADDING].iter().all(Value::is_null));

        assert!(!set(&mut obj, &(2 * MAX_ARRAY_PADDING + 2).to_string(), json!(0)));
    }
}
