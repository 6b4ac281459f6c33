use super::*;

#[test]
fn normalize_orders_modifiers_and_lowercases_key() {
    let event = KeyEvent::new("G").with_shift().with_ctrl();
    assert_eq!(normalize(&event), "ctrl+shift+g");
}

#[test]
fn normalize_all_modifiers() {
    let event = KeyEvent::new("F5").with_alt().with_shift().with_ctrl();
    assert_eq!(normalize(&event), "ctrl+shift+alt+f5");
}

#[test]
fn normalize_without_modifiers() {
    assert_eq!(normalize(&KeyEvent::new("Escape")), "escape");
}

#[test]
fn normalized_event_is_canonical() {
    let event = KeyEvent::new("G").with_ctrl().with_shift();
    assert!(is_canonical(&normalize(&event)));
}

#[test]
fn accepts_punctuation_keys() {
    assert!(is_canonical("ctrl+a"));
    assert!(is_canonical("ctrl+/"));
    assert!(is_canonical("ctrl+."));
    assert!(is_canonical("ctrl+{"));
    assert!(is_canonical("f1"));
    assert!(is_canonical("ctrl+shift+alt+delete"));
}

#[test]
fn rejects_wrong_modifier_order() {
    assert_eq!(
        KeyToken::parse("f1+ctrl"),
        Err(KeyParseError::NotCanonical {
            expected: "ctrl+f1".to_string()
        })
    );
    assert!(!is_canonical("shift+ctrl+a"));
    assert!(!is_canonical("alt+shift+a"));
}

#[test]
fn rejects_modifier_only_token() {
    assert_eq!(KeyToken::parse("ctrl"), Err(KeyParseError::MissingKey));
    assert_eq!(KeyToken::parse("ctrl+shift"), Err(KeyParseError::MissingKey));
}

#[test]
fn rejects_empty_token() {
    assert_eq!(KeyToken::parse(""), Err(KeyParseError::Empty));
}

#[test]
fn rejects_duplicate_modifier() {
    assert_eq!(
        KeyToken::parse("ctrl+ctrl+a"),
        Err(KeyParseError::DuplicateModifier("ctrl".to_string()))
    );
}

#[test]
fn rejects_more_than_one_key() {
    assert!(matches!(
        KeyToken::parse("ctrl+a+b"),
        Err(KeyParseError::MultipleKeys { .. })
    ));
}

#[test]
fn rejects_too_many_segments() {
    assert_eq!(
        KeyToken::parse("ctrl+shift+alt+a+b"),
        Err(KeyParseError::TooManySegments(5))
    );
}

#[test]
fn rejects_uppercase() {
    assert!(!is_canonical("ctrl+G"));
    assert!(!is_canonical("Ctrl+g"));
}

#[test]
fn parse_then_display_is_identity() {
    let token = KeyToken::parse("ctrl+alt+k").unwrap();
    assert!(token.modifiers.ctrl);
    assert!(!token.modifiers.shift);
    assert!(token.modifiers.alt);
    assert_eq!(token.key, "k");
    assert_eq!(token.to_string(), "ctrl+alt+k");
}

#[test]
fn prevent_default_marks_event() {
    let mut event = KeyEvent::new("a");
    assert!(!event.is_default_prevented());
    event.prevent_default();
    assert!(event.is_default_prevented());
}
