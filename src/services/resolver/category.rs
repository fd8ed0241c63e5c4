//! Category consistency filter.
//!
//! The guard that keeps a request for one category from silently resolving
//! to a provider in an unrelated category whose token happens to partially
//! match (the original "festive crafts" defect).

use super::normalizer;
use super::taxonomy::TaxonomyIndex;
use crate::types::models::ProviderRecord;

/// Decide whether `provider` is plausible for `target_category`.
///
/// An unknown target (`None`) cannot disprove anything and always passes.
/// Otherwise the provider's own normalized service token must map to the
/// target category in the taxonomy. Orphan providers (token unknown to the
/// taxonomy) fail any known target.
pub fn is_plausible(
    provider: &ProviderRecord,
    target_category: Option<&str>,
    index: &TaxonomyIndex,
) -> bool {
    let Some(target) = target_category else {
        return true;
    };

    let token = normalizer::normalize_token(&provider.service_token);
    index.category_of(&token) == Some(target)
}

#[cfg(test)]
#[path = "tests/category_tests.rs"]
mod tests;
