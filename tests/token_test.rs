use nowplaying::{
    management::{EXPIRY_MARGIN_SECS, is_valid, is_valid_at, record_from_grant},
    types::{StoredRecord, TokenRecord},
    utils::now_ms,
};

fn record(created: i64, expiry: i64) -> TokenRecord {
    TokenRecord {
        value: "token".to_string(),
        expiry_offset_ms: expiry,
        created_at_ms: created,
    }
}

#[test]
fn test_is_valid_at_boundary() {
    let token = record(1_000, 3_300_000);

    assert!(is_valid_at(&token, 1_000));
    assert!(is_valid_at(&token, 3_300_999));

    // The expiry instant itself is already invalid
    assert!(!is_valid_at(&token, 3_301_000));
    assert!(!is_valid_at(&token, 3_301_001));
}

#[test]
fn test_is_valid_against_clock() {
    let fresh = record(now_ms(), 3_300_000);
    assert!(is_valid(&fresh));

    let stale = record(now_ms() - 3_300_001, 3_300_000);
    assert!(!is_valid(&stale));

    // Never stored
    assert!(!is_valid(&TokenRecord::default()));
}

#[test]
fn test_record_from_grant_expiry() {
    let token = record_from_grant("abc".to_string(), 3600, 42);

    assert_eq!(EXPIRY_MARGIN_SECS, 300);
    assert_eq!(token.value, "abc");
    assert_eq!(token.expiry_offset_ms, 3_300_000);
    assert_eq!(token.created_at_ms, 42);
}

#[test]
fn test_out_of_range_expiry_saturates() {
    let forever = record(1_700_000_000_000, i64::MAX);
    assert_eq!(forever.expires_at_ms(), i64::MAX);
    assert!(is_valid_at(&forever, 1_700_000_000_000));
    assert!(is_valid(&forever));

    // Far in the past instead of wrapping into the future
    let never = record(-1, i64::MIN);
    assert_eq!(never.expires_at_ms(), i64::MIN);
    assert!(!is_valid_at(&never, i64::MIN));
    assert!(!is_valid(&never));
}

#[test]
fn test_record_from_grant_extreme_lifetimes() {
    let long = record_from_grant("abc".to_string(), i64::MAX, 0);
    assert_eq!(long.expiry_offset_ms, i64::MAX);

    let negative = record_from_grant("abc".to_string(), i64::MIN, 0);
    assert_eq!(negative.expiry_offset_ms, i64::MIN);
    assert!(!is_valid_at(&negative, 0));
}

#[test]
fn test_token_record_serializes_store_columns() {
    let token = record(5, 6);
    let json = serde_json::to_value(&token).unwrap();

    assert_eq!(json["token"], "token");
    assert_eq!(json["expiry"], 6);
    assert_eq!(json["created"], 5);
}

#[test]
fn test_stored_record_envelope() {
    let body = r#"{
        "id": "rec1",
        "createdTime": "2024-01-01T00:00:00.000Z",
        "fields": { "token": "abc", "expiry": 3300000, "created": 1700000000000 }
    }"#;

    let token = serde_json::from_str::<StoredRecord>(body)
        .unwrap()
        .into_token();
    assert_eq!(
        token,
        TokenRecord {
            value: "abc".to_string(),
            expiry_offset_ms: 3_300_000,
            created_at_ms: 1_700_000_000_000,
        }
    );
}

#[test]
fn test_stored_record_flat() {
    let body = r#"{ "token": "abc", "expiry": 10, "created": 20 }"#;

    let token = serde_json::from_str::<StoredRecord>(body)
        .unwrap()
        .into_token();
    assert_eq!(token.value, "abc");
    assert_eq!(token.expiry_offset_ms, 10);
    assert_eq!(token.created_at_ms, 20);
}

#[test]
fn test_stored_record_empty_fields_reads_as_absent() {
    let body = r#"{ "id": "rec1", "fields": {} }"#;

    let token = serde_json::from_str::<StoredRecord>(body)
        .unwrap()
        .into_token();
    assert!(token.value.is_empty());
    assert!(!is_valid(&token));
}
