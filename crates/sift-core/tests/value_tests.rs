use sift_core::value::{self, Value};
use sift_core::SiftError;

/// Helper: build a Value from JSON text.
fn val(text: &str) -> Value {
    sift_core::json::from_str(text).expect("test input must be valid JSON")
}

// ============================================================================
// Predicates and accessors
// ============================================================================

#[test]
fn type_names_cover_every_variant() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::Bool(true).type_name(), "boolean");
    assert_eq!(Value::Number(1.0).type_name(), "number");
    assert_eq!(Value::String("x".into()).type_name(), "string");
    assert_eq!(Value::Array(vec![]).type_name(), "array");
    assert_eq!(Value::Object(vec![]).type_name(), "object");
}

#[test]
fn predicates_match_variants() {
    assert!(Value::Null.is_null());
    assert!(Value::Bool(false).is_bool());
    assert!(Value::Number(0.0).is_number());
    assert!(Value::String(String::new()).is_string());
    assert!(Value::Array(vec![]).is_array());
    assert!(Value::Object(vec![]).is_object());
    assert!(!Value::Null.is_object());
    assert!(!Value::Array(vec![]).is_string());
}

#[test]
fn accessors_return_payloads() {
    assert!(Value::Bool(true).as_bool().unwrap());
    assert_eq!(Value::Number(2.5).as_number().unwrap(), 2.5);
    assert_eq!(Value::String("hi".into()).as_str().unwrap(), "hi");
    assert_eq!(val("[1,2]").as_array().unwrap().len(), 2);
    assert_eq!(val(r#"{"a":1}"#).as_object().unwrap().len(), 1);
}

#[test]
fn accessors_fail_with_type_mismatch() {
    let err = Value::Null.as_number().unwrap_err();
    assert_eq!(
        err,
        SiftError::TypeMismatch {
            expected: "number",
            actual: "null"
        }
    );

    let err = Value::Number(1.0).as_object().unwrap_err();
    assert_eq!(
        err,
        SiftError::TypeMismatch {
            expected: "object",
            actual: "number"
        }
    );
}

#[test]
fn get_finds_keys_by_linear_scan() {
    let obj = val(r#"{"a":1,"b":2}"#);
    assert_eq!(obj.get("b").unwrap(), &Value::Number(2.0));
}

#[test]
fn get_misses_with_key_not_found() {
    let obj = val(r#"{"a":1}"#);
    assert_eq!(
        obj.get("z").unwrap_err(),
        SiftError::KeyNotFound { key: "z".into() }
    );
}

#[test]
fn get_on_non_object_is_type_mismatch() {
    let err = val("[1,2]").get("a").unwrap_err();
    assert!(matches!(err, SiftError::TypeMismatch { .. }));
}

// ============================================================================
// Ordered-object insertion
// ============================================================================

#[test]
fn insert_appends_new_keys_in_order() {
    let mut entries = Vec::new();
    value::object_insert(&mut entries, "a".into(), Value::Number(1.0));
    value::object_insert(&mut entries, "b".into(), Value::Number(2.0));
    value::object_insert(&mut entries, "c".into(), Value::Number(3.0));
    let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["a", "b", "c"]);
}

#[test]
fn insert_overwrites_existing_key_in_place() {
    let mut entries = Vec::new();
    value::object_insert(&mut entries, "a".into(), Value::Number(1.0));
    value::object_insert(&mut entries, "b".into(), Value::Number(2.0));
    value::object_insert(&mut entries, "a".into(), Value::Number(99.0));

    // Still two entries, "a" still first, value updated.
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].0, "a");
    assert_eq!(entries[0].1, Value::Number(99.0));
    assert_eq!(entries[1].0, "b");
}

// ============================================================================
// Arithmetic: add / subtract
// ============================================================================

#[test]
fn add_numbers() {
    let sum = value::add(&Value::Number(5.0), &Value::Number(3.0)).unwrap();
    assert_eq!(sum, Value::Number(8.0));
}

#[test]
fn add_strings_concatenates() {
    let joined = value::add(&Value::String("foo".into()), &Value::String("bar".into())).unwrap();
    assert_eq!(joined, Value::String("foobar".into()));
}

#[test]
fn add_mixed_types_is_invalid_operand() {
    let err = value::add(&Value::Number(1.0), &Value::String("x".into())).unwrap_err();
    assert_eq!(
        err,
        SiftError::InvalidOperand {
            op: '+',
            left: "number",
            right: "string"
        }
    );
}

#[test]
fn add_arrays_is_invalid_operand() {
    let err = value::add(&val("[1]"), &val("[2]")).unwrap_err();
    assert!(matches!(err, SiftError::InvalidOperand { op: '+', .. }));
}

#[test]
fn subtract_numbers() {
    let diff = value::subtract(&Value::Number(5.0), &Value::Number(3.0)).unwrap();
    assert_eq!(diff, Value::Number(2.0));
}

#[test]
fn subtract_strings_removes_first_occurrence() {
    let out = value::subtract(
        &Value::String("banana".into()),
        &Value::String("an".into()),
    )
    .unwrap();
    assert_eq!(out, Value::String("bana".into()));
}

#[test]
fn subtract_string_absent_returns_lhs_unchanged() {
    let out = value::subtract(&Value::String("hello".into()), &Value::String("xyz".into())).unwrap();
    assert_eq!(out, Value::String("hello".into()));
}

#[test]
fn subtract_mixed_types_is_invalid_operand() {
    let err = value::subtract(&Value::String("a".into()), &Value::Number(1.0)).unwrap_err();
    assert!(matches!(err, SiftError::InvalidOperand { op: '-', .. }));
}

// ============================================================================
// length / keys
// ============================================================================

#[test]
fn length_of_array_is_element_count() {
    assert_eq!(value::length(&val(r#"["x","y"]"#)).unwrap(), 2);
}

#[test]
fn length_of_string_counts_characters_not_bytes() {
    assert_eq!(value::length(&Value::String("hello".into())).unwrap(), 5);
    // Multibyte characters count once each.
    assert_eq!(value::length(&Value::String("héllo".into())).unwrap(), 5);
}

#[test]
fn length_of_object_is_entry_count() {
    assert_eq!(value::length(&val(r#"{"a":1}"#)).unwrap(), 1);
}

#[test]
fn length_of_scalars_is_unsupported() {
    for v in [Value::Null, Value::Bool(true), Value::Number(7.0)] {
        let err = value::length(&v).unwrap_err();
        assert!(matches!(
            err,
            SiftError::UnsupportedType {
                builtin: "length",
                ..
            }
        ));
    }
}

#[test]
fn keys_returns_insertion_order() {
    let obj = val(r#"{"a":1,"b":2,"c":3}"#);
    assert_eq!(value::keys(&obj).unwrap(), val(r#"["a","b","c"]"#));
}

#[test]
fn keys_order_survives_overwrite() {
    let mut entries = val(r#"{"a":1,"b":2,"c":3}"#).as_object().unwrap().clone();
    value::object_insert(&mut entries, "a".into(), Value::Number(99.0));
    let obj = Value::Object(entries);
    assert_eq!(value::keys(&obj).unwrap(), val(r#"["a","b","c"]"#));
    assert_eq!(obj.get("a").unwrap(), &Value::Number(99.0));
}

#[test]
fn keys_of_array_is_unsupported() {
    // Deliberate: no numeric-index fallback for arrays.
    let err = value::keys(&val("[1,2,3]")).unwrap_err();
    assert_eq!(
        err,
        SiftError::UnsupportedType {
            builtin: "keys",
            actual: "array"
        }
    );
}

#[test]
fn keys_of_scalar_is_unsupported() {
    let err = value::keys(&Value::Number(1.0)).unwrap_err();
    assert!(matches!(err, SiftError::UnsupportedType { .. }));
}

// ============================================================================
// Ownership: deep copies are independent
// ============================================================================

#[test]
fn clone_is_a_deep_copy() {
    let original = val(r#"{"a":{"b":[1,2,3]}}"#);
    let mut copy = original.clone();

    // Mutate the copy's innards; the original must be untouched.
    if let Value::Object(entries) = &mut copy {
        entries[0].1 = Value::Null;
    }
    assert_eq!(original, val(r#"{"a":{"b":[1,2,3]}}"#));
    assert_eq!(copy, val(r#"{"a":null}"#));
}

#[test]
fn extracted_values_outlive_the_source() {
    let child = {
        let parent = val(r#"{"inner":[1,2]}"#);
        parent.get("inner").unwrap().clone()
    };
    // `parent` is dropped; the extracted child is still fully owned.
    assert_eq!(child, val("[1,2]"));
}

// ============================================================================
// Construction API and serde integration
// ============================================================================

#[test]
fn from_impls_build_scalars() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(1.5), Value::Number(1.5));
    assert_eq!(Value::from("hi"), Value::String("hi".into()));
    assert_eq!(
        Value::from(vec![Value::Null]),
        Value::Array(vec![Value::Null])
    );
}

#[test]
fn serializes_into_natural_json_shape() {
    let v = val(r#"{"name":"Ada","tags":["a","b"],"n":2.5}"#);
    let text = serde_json::to_string(&v).unwrap();
    assert_eq!(text, r#"{"name":"Ada","tags":["a","b"],"n":2.5}"#);
}
