//! Typed lookup tests for the configuration store.
//!
//! Responsibilities:
//! - Test integer parsing, including signs and overflow.
//! - Test float parsing, including special values and out-of-range literals.
//! - Test that missing keys surface as `UndefinedKey`, not conversion errors.

use super::store_with;
use crate::error::{ConfigError, ConversionError, ErrorKind};
use crate::types::ConfigEntry;

#[test]
fn test_get_int_parses_decimal() {
    let store = store_with(&[
        ConfigEntry::new("n", "42"),
        ConfigEntry::new("neg", "-17"),
        ConfigEntry::new("plus", "+5"),
        ConfigEntry::new("zero", "0007"),
        ConfigEntry::new("max", "9223372036854775807"),
    ]);

    assert_eq!(store.get_int("n").unwrap(), 42);
    assert_eq!(store.get_int("neg").unwrap(), -17);
    assert_eq!(store.get_int("plus").unwrap(), 5);
    assert_eq!(store.get_int("zero").unwrap(), 7);
    assert_eq!(store.get_int("max").unwrap(), i64::MAX);
}

#[test]
fn test_get_int_rejects_invalid_values() {
    let store = store_with(&[
        ConfigEntry::new("alpha", "abc"),
        ConfigEntry::new("float", "1.5"),
        ConfigEntry::new("spaced", " 42"),
        ConfigEntry::new("empty", ""),
        ConfigEntry::new("overflow", "9223372036854775808"),
    ]);

    for key in ["alpha", "float", "spaced", "empty", "overflow"] {
        let err = store.get_int(key).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConversionError, "key: {key}");
    }
}

#[test]
fn test_get_int_conversion_error_carries_context() {
    let store = store_with(&[ConfigEntry::new("n", "abc")]);

    match store.get_int("n").unwrap_err() {
        ConfigError::Conversion { key, value, source } => {
            assert_eq!(key, "n");
            assert_eq!(value, "abc");
            assert!(matches!(source, ConversionError::Int(_)));
        }
        other => panic!("expected conversion error, got {other:?}"),
    }
}

#[test]
fn test_get_int_missing_key_is_undefined() {
    let store = store_with(&[ConfigEntry::new("n", "1")]);
    assert_eq!(store.get_int("N").unwrap_err().kind(), ErrorKind::UndefinedKey);
}

#[test]
fn test_get_float_parses_values() {
    let store = store_with(&[
        ConfigEntry::new("x", "3.14"),
        ConfigEntry::new("int", "2"),
        ConfigEntry::new("exp", "1.5e3"),
        ConfigEntry::new("neg", "-0.25"),
    ]);

    assert_eq!(store.get_float("x").unwrap().to_string(), "3.14");
    assert_eq!(store.get_float("int").unwrap(), 2.0);
    assert_eq!(store.get_float("exp").unwrap(), 1500.0);
    assert_eq!(store.get_float("neg").unwrap(), -0.25);
}

#[test]
fn test_get_float_accepts_special_literals() {
    let store = store_with(&[
        ConfigEntry::new("inf", "inf"),
        ConfigEntry::new("neg_inf", "-Infinity"),
        ConfigEntry::new("nan", "NaN"),
    ]);

    assert_eq!(store.get_float("inf").unwrap(), f64::INFINITY);
    assert_eq!(store.get_float("neg_inf").unwrap(), f64::NEG_INFINITY);
    assert!(store.get_float("nan").unwrap().is_nan());
}

#[test]
fn test_get_float_rejects_out_of_range() {
    let store = store_with(&[
        ConfigEntry::new("huge", "1e400"),
        ConfigEntry::new("neg_huge", "-1e400"),
    ]);

    for key in ["huge", "neg_huge"] {
        match store.get_float(key).unwrap_err() {
            ConfigError::Conversion { source, .. } => {
                assert_eq!(source, ConversionError::FloatOutOfRange, "key: {key}");
            }
            other => panic!("expected conversion error, got {other:?}"),
        }
    }
}

#[test]
fn test_get_float_rejects_invalid_syntax() {
    let store = store_with(&[
        ConfigEntry::new("alpha", "abc"),
        ConfigEntry::new("comma", "3,14"),
        ConfigEntry::new("empty", ""),
    ]);

    for key in ["alpha", "comma", "empty"] {
        let err = store.get_float(key).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConversionError, "key: {key}");
    }
}

#[test]
fn test_get_float_missing_key_is_undefined() {
    let store = store_with(&[]);
    assert_eq!(store.get_float("x").unwrap_err().kind(), ErrorKind::UndefinedKey);
}
