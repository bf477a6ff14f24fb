//! Presence checks over structured values.

use serde_json::Value;

/// Stateless guard predicates.
pub struct Guard;

impl Guard {
    /// Whether `value` counts as "not provided".
    ///
    /// Numbers and booleans are never empty. Null, `""`, `{}` and `[]` are.
    /// An array whose elements are all empty is empty too; an object is empty
    /// only when it has no keys at all.
    pub fn is_empty(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::Bool(_) | Value::Number(_) => false,
            Value::String(s) => s.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.iter().all(Guard::is_empty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_are_never_empty() {
        assert!(!Guard::is_empty(&json!(0)));
        assert!(!Guard::is_empty(&json!(false)));
        assert!(!Guard::is_empty(&json!("x")));
    }

    #[test]
    fn absent_and_hollow_values_are_empty() {
        assert!(Guard::is_empty(&Value::Null));
        assert!(Guard::is_empty(&json!("")));
        assert!(Guard::is_empty(&json!({})));
        assert!(Guard::is_empty(&json!([])));
    }

    #[test]
    fn arrays_of_empty_elements_are_empty() {
        assert!(Guard::is_empty(&json!([null, "", {}])));
        assert!(!Guard::is_empty(&json!([null, 1])));
    }

    #[test]
    fn objects_with_empty_fields_are_not_empty() {
        assert!(!Guard::is_empty(&json!({ "name": null })));
    }
}
