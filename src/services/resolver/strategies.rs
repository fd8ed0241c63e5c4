//! The six ordered resolution strategies (S1-S6).
//!
//! Each strategy shares one signature, consumes only the immutable snapshot,
//! and returns the first satisfying provider or `None`. The orchestrator in
//! `mod.rs` runs them in fixed order and short-circuits on the first hit;
//! adding a strategy means appending to that list, not editing a monolith.
//!
//! `token` is always the normalized, alias-resolved target; `category` is the
//! normalized target category when one was hinted or derivable.

use super::aliases;
use super::category;
use super::normalizer;
use super::snapshot::ReferenceSnapshot;
use crate::types::models::{ProductRecord, ProviderRecord};

/// Common shape of a strategy, usable in a fixed-order table.
pub type StrategyFn =
    for<'a> fn(&'a ReferenceSnapshot, &str, Option<&str>) -> Option<&'a ProviderRecord>;

/// S1: provider whose normalized service token equals the target token,
/// category-guarded.
pub fn exact_token_match<'a>(
    snapshot: &'a ReferenceSnapshot,
    token: &str,
    target_category: Option<&str>,
) -> Option<&'a ProviderRecord> {
    if token.is_empty() {
        return None;
    }

    snapshot.providers.iter().find(|provider| {
        normalizer::normalize_token(&provider.service_token) == token
            && category::is_plausible(provider, target_category, snapshot.index())
    })
}

/// S2: provider whose normalized display name equals or is *prefixed by* the
/// target token, category-guarded.
///
/// Prefix, not contains: a short token buried inside an unrelated name must
/// not hijack the request.
pub fn name_prefix_match<'a>(
    snapshot: &'a ReferenceSnapshot,
    token: &str,
    target_category: Option<&str>,
) -> Option<&'a ProviderRecord> {
    if token.is_empty() {
        return None;
    }

    snapshot.providers.iter().find(|provider| {
        normalizer::normalize_token(&provider.name).starts_with(token)
            && category::is_plausible(provider, target_category, snapshot.index())
    })
}

/// S3: seed the search from the product catalog.
///
/// Find a product carrying the target token (exact token match has priority
/// over name/category prefix matches), then hop to the provider sharing the
/// product's alias-resolved token. When no provider shares the token but the
/// product tracks an explicit `provider_id`, match by that id as a weaker
/// fallback. Both hops stay category-guarded.
pub fn product_seeded_match<'a>(
    snapshot: &'a ReferenceSnapshot,
    token: &str,
    target_category: Option<&str>,
) -> Option<&'a ProviderRecord> {
    if token.is_empty() {
        return None;
    }

    let product = find_seed_product(&snapshot.products, token)?;
    let product_token = aliases::resolve_alias(&normalizer::normalize_token(&product.service_token));

    if !product_token.is_empty() {
        let by_token = snapshot.providers.iter().find(|provider| {
            normalizer::normalize_token(&provider.service_token) == product_token
                && category::is_plausible(provider, target_category, snapshot.index())
        });
        if by_token.is_some() {
            return by_token;
        }
    }

    let provider_id = product.provider_id.as_deref()?;
    snapshot.providers.iter().find(|provider| {
        provider.id == provider_id
            && category::is_plausible(provider, target_category, snapshot.index())
    })
}

/// S4: cross-reference through the taxonomy.
///
/// Locate a sub-service whose token or display name equals the target, then
/// find a provider carrying that sub-service token, guarded by the
/// sub-service's *actual* owning category, not the request's.
pub fn taxonomy_cross_reference<'a>(
    snapshot: &'a ReferenceSnapshot,
    token: &str,
    _target_category: Option<&str>,
) -> Option<&'a ProviderRecord> {
    if token.is_empty() {
        return None;
    }

    for entry in snapshot.index().entries() {
        if entry.token != token && normalizer::normalize_token(&entry.display_name) != token {
            continue;
        }

        let hit = snapshot.providers.iter().find(|provider| {
            normalizer::normalize_token(&provider.service_token) == entry.token
                && category::is_plausible(provider, Some(&entry.category), snapshot.index())
        });
        if hit.is_some() {
            return hit;
        }
    }
    None
}

/// S5: provider whose normalized service token is *prefixed by* the target
/// token. Looser than S1 but still category-guarded.
pub fn partial_token_match<'a>(
    snapshot: &'a ReferenceSnapshot,
    token: &str,
    target_category: Option<&str>,
) -> Option<&'a ProviderRecord> {
    if token.is_empty() {
        return None;
    }

    snapshot.providers.iter().find(|provider| {
        normalizer::normalize_token(&provider.service_token).starts_with(token)
            && category::is_plausible(provider, target_category, snapshot.index())
    })
}

/// S6: the guaranteed terminal case.
///
/// First provider passing the category filter when a category was
/// determined; otherwise (or when no provider in that category exists) the
/// very first provider in the collection, unconditionally. Succeeds whenever
/// the collection is non-empty. Callers can spot this via
/// `MatchedBy::Default`; resolution here implies determinism, not
/// relevance.
pub fn default_provider<'a>(
    snapshot: &'a ReferenceSnapshot,
    target_category: Option<&str>,
) -> Option<&'a ProviderRecord> {
    if let Some(target) = target_category {
        let in_category = snapshot
            .providers
            .iter()
            .find(|provider| category::is_plausible(provider, Some(target), snapshot.index()));
        if in_category.is_some() {
            return in_category;
        }
    }

    snapshot.providers.first()
}

/// Pick the product that seeds S3: exact token matches win over prefix
/// matches on the product's name or category field.
fn find_seed_product<'a>(products: &'a [ProductRecord], token: &str) -> Option<&'a ProductRecord> {
    let exact = products
        .iter()
        .find(|product| normalizer::normalize_token(&product.service_token) == token);
    if exact.is_some() {
        return exact;
    }

    products.iter().find(|product| {
        normalizer::normalize_token(&product.name).starts_with(token)
            || product
                .category
                .as_deref()
                .map(|c| normalizer::normalize_token(c).starts_with(token))
                .unwrap_or(false)
    })
}

#[cfg(test)]
#[path = "tests/strategies_tests.rs"]
mod tests;
