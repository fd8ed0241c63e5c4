use super::*;

#[test]
fn test_normalize_basic() {
    assert_eq!(normalize_token("Hand Embroidery"), "hand_embroidery");
    assert_eq!(normalize_token("hand_embroidery"), "hand_embroidery");
}

#[test]
fn test_normalize_folds_separator_runs() {
    assert_eq!(normalize_token("hand - embroidery"), "hand_embroidery");
    assert_eq!(normalize_token("hand---embroidery"), "hand_embroidery");
    assert_eq!(normalize_token("hand   embroidery"), "hand_embroidery");
    assert_eq!(normalize_token("hand_-_embroidery"), "hand_embroidery");
}

#[test]
fn test_normalize_strips_symbols() {
    assert_eq!(normalize_token("Mehndi (Bridal)!"), "mehndi_bridal");
    assert_eq!(normalize_token("crochet/art?id=3"), "crochetartid3");
}

#[test]
fn test_normalize_trims_edge_underscores() {
    assert_eq!(normalize_token("-rangoli-design-"), "rangoli_design");
    assert_eq!(normalize_token("  pottery  "), "pottery");
}

#[test]
fn test_normalize_transliterates_non_latin() {
    // deunicode romanizes; the exact spelling is its concern, not ours,
    // but the result must stay inside the token alphabet.
    let token = normalize_token("手刺繍");
    assert!(!token.is_empty());
    assert!(token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
}

#[test]
fn test_normalize_total_on_garbage() {
    assert_eq!(normalize_token(""), "");
    assert_eq!(normalize_token("!!!"), "");
    assert_eq!(normalize_token("---"), "");
    assert_eq!(normalize_token("   "), "");
}

#[test]
fn test_normalize_idempotent() {
    let samples = [
        "Hand Embroidery",
        "festive-craft-delight",
        "a _ . _ b",
        "手刺繍",
        "%%%@@!!",
        "MIXED case-Token_99",
        "",
    ];
    for raw in samples {
        let once = normalize_token(raw);
        assert_eq!(normalize_token(&once), once, "not idempotent for {raw:?}");
    }
}
