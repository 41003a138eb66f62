//! Widget field bags and patch merging.

use serde_json::{Map, Value};

/// Type-specific field bag of a widget (field name → value)
pub type WidgetData = Map<String, Value>;

/// Shallow-merge `patch` into `data`.
///
/// Keys present in the patch overwrite the stored value; keys absent from the
/// patch are left untouched. A `null` in the patch removes the key so the field
/// falls back to its variant default; nulls are never stored.
///
/// Returns the previous value of every patched key (`Value::Null` for keys that
/// were absent), which is exactly the patch that undoes this merge.
pub fn merge_patch(data: &mut WidgetData, patch: &WidgetData) -> WidgetData {
    let mut previous = WidgetData::new();

    for (key, value) in patch {
        let old = if value.is_null() {
            data.remove(key)
        } else {
            data.insert(key.clone(), value.clone())
        };
        previous.insert(key.clone(), old.unwrap_or(Value::Null));
    }

    previous
}

/// Drop explicit nulls from a bag supplied from outside
pub fn strip_nulls(data: &mut WidgetData) {
    data.retain(|_, value| !value.is_null());
}

/// Whether merging `patch` into `data` would change anything
pub fn patch_changes(data: &WidgetData, patch: &WidgetData) -> bool {
    patch.iter().any(|(key, value)| match data.get(key) {
        Some(current) => current != value,
        None => !value.is_null(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: Value) -> WidgetData {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let mut data = bag(json!({ "a": 1 }));
        merge_patch(&mut data, &bag(json!({ "b": 2 })));

        assert_eq!(Value::Object(data), json!({ "a": 1, "b": 2 }));
    }

    #[test]
    fn test_merge_overwrites_patched_fields() {
        let mut data = bag(json!({ "title": "Old", "subtitle": "Sub" }));
        merge_patch(&mut data, &bag(json!({ "title": "New" })));

        assert_eq!(Value::Object(data), json!({ "title": "New", "subtitle": "Sub" }));
    }

    #[test]
    fn test_null_removes_field() {
        let mut data = bag(json!({ "title": "Old", "subtitle": "Sub" }));
        merge_patch(&mut data, &bag(json!({ "title": null })));

        assert!(!data.contains_key("title"));
        assert_eq!(data.get("subtitle"), Some(&json!("Sub")));
    }

    #[test]
    fn test_previous_values_undo_the_merge() {
        let original = bag(json!({ "title": "Old" }));
        let mut data = original.clone();

        let previous = merge_patch(&mut data, &bag(json!({ "title": "New", "extra": true })));
        assert_eq!(Value::Object(previous.clone()), json!({ "title": "Old", "extra": null }));

        merge_patch(&mut data, &previous);
        assert_eq!(data, original);
    }

    #[test]
    fn test_strip_nulls() {
        let mut data = bag(json!({ "title": null, "subtitle": "Sub", "items": [null] }));
        strip_nulls(&mut data);
        assert_eq!(Value::Object(data), json!({ "subtitle": "Sub", "items": [null] }));
    }

    #[test]
    fn test_patch_changes() {
        let data = bag(json!({ "title": "Hi" }));

        assert!(!patch_changes(&data, &bag(json!({ "title": "Hi" }))));
        assert!(!patch_changes(&data, &bag(json!({ "subtitle": null }))));
        assert!(patch_changes(&data, &bag(json!({ "title": null }))));
        assert!(patch_changes(&data, &bag(json!({ "title": "Hey" }))));
        assert!(patch_changes(&data, &bag(json!({ "subtitle": "" }))));
    }
}
