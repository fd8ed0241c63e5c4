//! Immutable reference snapshot consumed by the resolver.
//!
//! The host application loads providers, products, and the service taxonomy
//! once at startup; everything after that is a pure read. To refresh the
//! data, build a new snapshot and swap it in atomically (e.g. behind an
//! `Arc`), never mutating in place, so concurrent readers stay lock-free.

use super::catalog;
use super::normalizer;
use super::taxonomy::TaxonomyIndex;
use crate::types::errors::{ResolveError, ResolveResult};
use crate::types::models::{ProductRecord, ProviderRecord, ResolutionResult, ServiceTaxonomy};

use std::collections::HashSet;

/// All reference data the engine resolves against, plus prebuilt indexes.
#[derive(Debug, Clone)]
pub struct ReferenceSnapshot {
    pub providers: Vec<ProviderRecord>,
    pub products: Vec<ProductRecord>,
    pub taxonomy: ServiceTaxonomy,
    pub(crate) taxonomy_index: TaxonomyIndex,
}

impl ReferenceSnapshot {
    /// Validate the collections and build the taxonomy index.
    ///
    /// An *empty* provider collection is accepted here: that condition is
    /// surfaced as `NoProvidersAvailable` at resolve time, not at load time.
    /// Malformed records (missing identities, duplicate sub-service tokens)
    /// fail immediately with `InvalidReferenceData`.
    pub fn new(
        providers: Vec<ProviderRecord>,
        products: Vec<ProductRecord>,
        taxonomy: ServiceTaxonomy,
    ) -> ResolveResult<Self> {
        validate_providers(&providers)?;
        validate_products(&products)?;
        validate_taxonomy(&taxonomy)?;

        let taxonomy_index = TaxonomyIndex::build(&taxonomy);
        log::info!(
            "Reference snapshot loaded: {} providers, {} products, {} categories",
            providers.len(),
            products.len(),
            taxonomy.categories.len()
        );

        Ok(Self {
            providers,
            products,
            taxonomy,
            taxonomy_index,
        })
    }

    /// Load from the host app's raw JSON blobs (one per collection).
    pub fn from_json(
        providers_json: &str,
        products_json: &str,
        taxonomy_json: &str,
    ) -> ResolveResult<Self> {
        let providers: Vec<ProviderRecord> = serde_json::from_str(providers_json)
            .map_err(|e| ResolveError::InvalidReferenceData(format!("providers: {e}")))?;
        let products: Vec<ProductRecord> = serde_json::from_str(products_json)
            .map_err(|e| ResolveError::InvalidReferenceData(format!("products: {e}")))?;
        let taxonomy: ServiceTaxonomy = serde_json::from_str(taxonomy_json)
            .map_err(|e| ResolveError::InvalidReferenceData(format!("taxonomy: {e}")))?;

        Self::new(providers, products, taxonomy)
    }

    /// Resolve a request against this snapshot. See [`super::resolve`].
    pub fn resolve(
        &self,
        raw_token: &str,
        category_hint: Option<&str>,
    ) -> ResolveResult<ResolutionResult> {
        super::resolve(self, raw_token, category_hint)
    }

    /// Products attributed to `provider`. See [`catalog::products_for`].
    pub fn products_for(&self, provider: &ProviderRecord) -> Vec<ProductRecord> {
        catalog::products_for(provider, &self.products)
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    pub fn has_providers(&self) -> bool {
        !self.providers.is_empty()
    }

    pub(crate) fn index(&self) -> &TaxonomyIndex {
        &self.taxonomy_index
    }
}

fn validate_providers(providers: &[ProviderRecord]) -> ResolveResult<()> {
    for (pos, provider) in providers.iter().enumerate() {
        if provider.id.trim().is_empty() {
            return Err(ResolveError::InvalidReferenceData(format!(
                "provider at position {pos} has an empty id"
            )));
        }
        if provider.name.trim().is_empty() {
            return Err(ResolveError::InvalidReferenceData(format!(
                "provider '{}' has an empty name",
                provider.id
            )));
        }
    }
    Ok(())
}

fn validate_products(products: &[ProductRecord]) -> ResolveResult<()> {
    for (pos, product) in products.iter().enumerate() {
        if product.id.trim().is_empty() {
            return Err(ResolveError::InvalidReferenceData(format!(
                "product at position {pos} has an empty id"
            )));
        }
        if product.name.trim().is_empty() {
            return Err(ResolveError::InvalidReferenceData(format!(
                "product '{}' has an empty name",
                product.id
            )));
        }
    }
    Ok(())
}

/// Every sub-service token must belong to exactly one category.
fn validate_taxonomy(taxonomy: &ServiceTaxonomy) -> ResolveResult<()> {
    let mut seen: HashSet<String> = HashSet::new();

    for category in &taxonomy.categories {
        if category.name.trim().is_empty() {
            return Err(ResolveError::InvalidReferenceData(
                "taxonomy contains a category with an empty name".to_string(),
            ));
        }

        for sub in &category.sub_services {
            let token = normalizer::normalize_token(&sub.token);
            if token.is_empty() {
                return Err(ResolveError::InvalidReferenceData(format!(
                    "category '{}' contains a sub-service with an empty token",
                    category.name
                )));
            }
            if !seen.insert(token.clone()) {
                return Err(ResolveError::InvalidReferenceData(format!(
                    "sub-service token '{token}' appears in more than one category"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/snapshot_tests.rs"]
mod tests;
