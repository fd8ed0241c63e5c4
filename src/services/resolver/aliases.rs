//! Static alias table for known-bad service tokens.
//!
//! The single place new misspellings and slug variants get patched; no other
//! component special-cases strings. Keys and values are both normalized
//! tokens, and every target must itself be canonical (never an alias of an
//! alias), so one lookup is always enough.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Hand-curated mapping of known-bad normalized tokens → canonical tokens.
static ALIAS_TABLE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Embroidery misspellings seen in stored provider/product data.
        ("hand_embroidry", "hand_embroidery"),
        ("hand_embroidary", "hand_embroidery"),
        ("hand_embriodery", "hand_embroidery"),
        // Word-order variants of the festive crafts slug.
        ("festive_delight_crafts", "festive_craft_delight"),
        ("festive_crafts_delight", "festive_craft_delight"),
        // Regional spellings.
        ("mehendi_design", "mehndi_design"),
        ("mehandi_design", "mehndi_design"),
        ("mehendi", "mehndi_design"),
        // Shorthand slugs coming from old bookmarked URLs.
        ("pot_painting", "pottery_painting"),
        ("clay_moulding", "clay_modelling"),
        ("crochet", "crochet_art"),
        ("rangoli", "rangoli_design"),
    ])
});

/// Map a normalized token to its canonical form.
///
/// Identity for tokens the table does not know. O(1), never fails.
pub fn resolve_alias(token: &str) -> String {
    match ALIAS_TABLE.get(token) {
        Some(canonical) => (*canonical).to_string(),
        None => token.to_string(),
    }
}

/// Table invariant check used by tests: no alias target is itself an alias.
#[cfg(test)]
pub(crate) fn targets_are_canonical() -> bool {
    ALIAS_TABLE
        .values()
        .all(|target| !ALIAS_TABLE.contains_key(target))
}

#[cfg(test)]
#[path = "tests/aliases_tests.rs"]
mod tests;
