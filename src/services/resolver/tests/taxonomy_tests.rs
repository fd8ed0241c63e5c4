use super::*;
use crate::test_utils;
use crate::types::models::{Category, ServiceTaxonomy};

fn fixture_index() -> TaxonomyIndex {
    TaxonomyIndex::build(&test_utils::fixture_taxonomy())
}

#[test]
fn test_category_of_known_tokens() {
    let index = fixture_index();

    assert_eq!(index.category_of("hand_embroidery"), Some("needlework"));
    assert_eq!(
        index.category_of("festive_craft_delight"),
        Some("festive_crafts")
    );
    assert_eq!(index.category_of("clay_modelling"), Some("pottery"));
}

#[test]
fn test_category_of_unknown_token() {
    let index = fixture_index();
    assert_eq!(index.category_of("antique_restoration"), None);
    assert_eq!(index.category_of(""), None);
}

#[test]
fn test_display_name_lookup() {
    let index = fixture_index();

    assert_eq!(index.display_name_of("hand_embroidery"), Some("Hand Embroidery"));
    assert_eq!(index.display_name_of("unknown_token"), None);
}

#[test]
fn test_empty_display_name_is_filtered() {
    let taxonomy = ServiceTaxonomy {
        categories: vec![Category {
            name: "Pottery".to_string(),
            sub_services: vec![test_utils::sub_service("glazing", "")],
        }],
    };
    let index = TaxonomyIndex::build(&taxonomy);

    assert_eq!(index.category_of("glazing"), Some("pottery"));
    assert_eq!(index.display_name_of("glazing"), None);
}

#[test]
fn test_sub_services_preserve_taxonomy_order() {
    let index = fixture_index();

    assert_eq!(
        index.sub_services_of("needlework"),
        &[
            "hand_embroidery".to_string(),
            "crochet_art".to_string(),
            "fabric_painting".to_string(),
        ]
    );
    assert!(index.sub_services_of("unknown_category").is_empty());
}

#[test]
fn test_entries_are_flattened_in_order() {
    let index = fixture_index();
    let tokens: Vec<&str> = index.entries().iter().map(|e| e.token.as_str()).collect();

    assert_eq!(tokens.first(), Some(&"hand_embroidery"));
    assert_eq!(tokens.last(), Some(&"clay_modelling"));
    assert_eq!(tokens.len(), 8);
}

#[test]
fn test_keys_are_normalized_on_build() {
    let taxonomy = ServiceTaxonomy {
        categories: vec![Category {
            name: "Festive Crafts".to_string(),
            sub_services: vec![test_utils::sub_service("Diwali-Decor", "Diwali Decor")],
        }],
    };
    let index = TaxonomyIndex::build(&taxonomy);

    assert_eq!(index.category_of("diwali_decor"), Some("festive_crafts"));
}

#[test]
fn test_empty_taxonomy() {
    let index = TaxonomyIndex::build(&ServiceTaxonomy::default());
    assert!(index.is_empty());
    assert_eq!(index.category_of("anything"), None);
}
