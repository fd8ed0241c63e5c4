//! Key normalization for service tokens.
//!
//! Canonicalizes any human/URL-supplied identifier into a comparable token:
//! lowercase, underscore-delimited, alphabet restricted to `[a-z0-9_]`.

use deunicode::deunicode;
use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for stripping characters outside the token alphabet
/// (separators are kept and folded afterwards).
static RE_INVALID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s_\-]").expect("Invalid regex"));

/// Compiled regex for folding separator runs into a single underscore.
static RE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_\-]+").expect("Invalid regex"));

/// Canonicalize a raw identifier into a comparable token.
///
/// Pipeline:
/// 1. Transliterate non-Latin characters via deunicode
/// 2. Lowercase
/// 3. Strip characters outside `[a-z0-9]` + separators
/// 4. Fold runs of whitespace/hyphens/underscores into a single `_`
/// 5. Trim leading/trailing underscores
///
/// Total and pure: never fails, garbage input yields an empty token.
/// Idempotent: `normalize_token(normalize_token(x)) == normalize_token(x)`.
pub fn normalize_token(raw: &str) -> String {
    let latin = deunicode(raw);
    let lower = latin.to_lowercase();
    let stripped = RE_INVALID.replace_all(&lower, "");
    let folded = RE_SEPARATORS.replace_all(&stripped, "_");
    folded.trim_matches('_').to_string()
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
