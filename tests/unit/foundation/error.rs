use super::*;

#[test]
fn validation_message_keeps_the_detail() {
    let err = WalkthroughError::validation("excerpt start line must be >= 1");
    assert_eq!(
        err.to_string(),
        "validation error: excerpt start line must be >= 1"
    );
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let bad = serde_json::from_str::<u32>("not json").unwrap_err();
    let err = WalkthroughError::from(bad);
    assert!(matches!(err, WalkthroughError::Serde(_)));
    assert!(err.to_string().starts_with("serialization error:"));
}
