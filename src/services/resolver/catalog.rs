//! Catalog filter: attribute products to a chosen provider.

use super::normalizer;
use crate::types::models::{ProductRecord, ProviderRecord};

/// All products belonging to `provider`.
///
/// A product belongs when its normalized service token equals the provider's,
/// or when its explicit `provider_id` equals the provider's id (data sources
/// that track the relation explicitly). Untagged products never attach via
/// the token path: an empty token matching an empty token is noise, not a
/// relation. An empty result is a valid answer, not an error.
pub fn products_for(provider: &ProviderRecord, products: &[ProductRecord]) -> Vec<ProductRecord> {
    let provider_token = normalizer::normalize_token(&provider.service_token);

    products
        .iter()
        .filter(|product| {
            let by_token = !provider_token.is_empty()
                && normalizer::normalize_token(&product.service_token) == provider_token;
            let by_id = product.provider_id.as_deref() == Some(provider.id.as_str());
            by_token || by_id
        })
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
