use crate::*;
use crate::config::validate_budget;
use crate::text::{char_len, head_chars, tail_chars};
use crate::types::savings_pct;
use serde_json::json;
use std::collections::BTreeMap;

// ========== Payload ==========

#[test]
fn test_text_passes_through() {
    let p = Payload::from("hello\n  world ");
    assert_eq!(p.canonical_text().unwrap(), "hello\n  world ");
    assert!(!p.is_structured());
}

#[test]
fn test_sequence_two_space_indent() {
    let p = Payload::from(vec![json!(1), json!("two")]);
    assert_eq!(p.canonical_text().unwrap(), "[\n  1,\n  \"two\"\n]");
    assert!(p.is_structured());
}

#[test]
fn test_mapping_preserves_insertion_order() {
    let p: Payload = serde_json::from_str(r#"{"zeta":1,"alpha":{"b":2,"a":3}}"#).unwrap();
    let text = p.canonical_text().unwrap();
    assert_eq!(
        text,
        "{\n  \"zeta\": 1,\n  \"alpha\": {\n    \"b\": 2,\n    \"a\": 3\n  }\n}"
    );
}

#[test]
fn test_mapping_keeps_raw_utf8() {
    let p: Payload = serde_json::from_str(r#"{"a":"caf\u00e9"}"#).unwrap();
    let text = p.canonical_text().unwrap();
    assert_eq!(text, "{\n  \"a\": \"café\"\n}");
    assert_eq!(char_len(&text), 17);
}

#[test]
fn test_untagged_deserialize() {
    let text: Payload = serde_json::from_str(r#""plain""#).unwrap();
    assert_eq!(text, Payload::Text("plain".into()));
    let seq: Payload = serde_json::from_str("[1,2]").unwrap();
    assert!(matches!(seq, Payload::Sequence(ref v) if v.len() == 2));
    let map: Payload = serde_json::from_str(r#"{"k":"v"}"#).unwrap();
    assert!(matches!(map, Payload::Mapping(_)));
}

#[test]
fn test_untagged_rejects_scalar() {
    assert!(serde_json::from_str::<Payload>("42").is_err());
}

#[test]
fn test_from_value_scalar_becomes_text() {
    assert_eq!(Payload::from_value(json!(42)), Payload::Text("42".into()));
    assert_eq!(Payload::from_value(json!(null)), Payload::Text("null".into()));
    assert_eq!(Payload::from_value(json!("s")), Payload::Text("s".into()));
}

#[test]
fn test_structured_from_struct() {
    #[derive(serde::Serialize)]
    struct Event {
        id: u32,
        kind: &'static str,
    }
    let p = Payload::structured(&Event { id: 7, kind: "deploy" }).unwrap();
    assert_eq!(
        p.canonical_text().unwrap(),
        "{\n  \"id\": 7,\n  \"kind\": \"deploy\"\n}"
    );
}

#[test]
fn test_structured_non_string_keys_fail() {
    let mut m: BTreeMap<(u8, u8), u8> = BTreeMap::new();
    m.insert((1, 2), 3);
    let err = Payload::structured(&m).unwrap_err();
    assert!(matches!(err, AgError::Serialization(_)));
}

#[test]
fn test_structured_with_volatile_fields() {
    let id = uuid::Uuid::new_v4();
    let at = chrono::Utc::now();
    let p = Payload::structured(&json!({"id": id, "at": at})).unwrap();
    let text = p.canonical_text().unwrap();
    assert!(text.contains(&id.to_string()));
}

// ========== Config ==========

#[test]
fn test_default_config() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.crusher.max_chars, DEFAULT_MAX_CHARS);
    assert_eq!(cfg.retention.keep_recent, 4);
    assert!(cfg.retention.keep_system);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_zero_budget_rejected() {
    let err = CrusherConfig::with_max_chars(0).validate().unwrap_err();
    assert!(matches!(err, AgError::InvalidConfig(_)));
    assert!(validate_budget(1).is_ok());
}

#[test]
fn test_partial_json_config() {
    let cfg = EngineConfig::from_json_str(r#"{"crusher":{"max_chars":1000}}"#).unwrap();
    assert_eq!(cfg.crusher.max_chars, 1000);
    assert_eq!(cfg.retention, RetentionConfig::default());
}

#[test]
fn test_json_config_invalid_budget() {
    let err = EngineConfig::from_json_str(r#"{"crusher":{"max_chars":0}}"#).unwrap_err();
    assert!(matches!(err, AgError::InvalidConfig(_)));
}

#[test]
fn test_json_config_malformed() {
    let err = EngineConfig::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, AgError::Serialization(_)));
}

#[test]
fn test_retention_config_validation() {
    let mut cfg = RetentionConfig::default();
    cfg.keep_recent = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = RetentionConfig::default();
    cfg.user_keep_chars = 50;
    assert!(cfg.validate().is_err());

    let mut cfg = RetentionConfig::default();
    cfg.other_keep_chars = 200;
    assert!(cfg.validate().is_err());
}

// ========== Text helpers ==========

#[test]
fn test_char_helpers_ascii() {
    assert_eq!(char_len("abcdef"), 6);
    assert_eq!(head_chars("abcdef", 2), "ab");
    assert_eq!(tail_chars("abcdef", 2), "ef");
    assert_eq!(head_chars("abc", 10), "abc");
    assert_eq!(tail_chars("abc", 10), "abc");
    assert_eq!(head_chars("abc", 0), "");
    assert_eq!(tail_chars("abc", 0), "");
}

#[test]
fn test_char_helpers_multibyte() {
    let s = "héllo wörld";
    assert_eq!(char_len(s), 11);
    assert_eq!(head_chars(s, 2), "hé");
    assert_eq!(tail_chars(s, 4), "örld");
}

// ========== Result record ==========

#[test]
fn test_result_counts_chars() {
    let r = CompactionResult::new(10, "héllo".into(), "abc".into());
    assert_eq!(r.crushed_chars(), 5);
    assert_eq!(r.savings_pct(), 50.0);
    assert_eq!(r.fingerprint(), "abc");
}

#[test]
fn test_savings_rounding() {
    assert_eq!(savings_pct(0, 0), 0.0);
    assert_eq!(savings_pct(3, 2), 33.3);
    assert_eq!(savings_pct(3, 1), 66.7);
    assert_eq!(savings_pct(5, 5), 0.0);
    assert_eq!(savings_pct(10, 12), -20.0);
}

#[test]
fn test_savings_rounds_ties_to_even() {
    assert_eq!(savings_pct(400, 351), 12.2);
    assert_eq!(savings_pct(1984, 1860), 6.2);
    assert_eq!(savings_pct(8, 7), 12.5);
}

#[test]
fn test_result_serializes() {
    let r = CompactionResult::new(5, "hello".into(), "0123456789ab".into());
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["crushed_chars"], 5);
    assert_eq!(v["fingerprint"], "0123456789ab");
}

// ========== Messages ==========

#[test]
fn test_message_name_skipped_when_absent() {
    let m = ChatMessage::user("hi");
    let s = serde_json::to_string(&m).unwrap();
    assert_eq!(s, r#"{"role":"user","content":"hi"}"#);
    let named = ChatMessage::assistant("ok").with_name("ops-bot");
    let back: ChatMessage = serde_json::from_str(&serde_json::to_string(&named).unwrap()).unwrap();
    assert_eq!(back, named);
}
