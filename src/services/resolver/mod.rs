//! Service-to-Provider Resolution Engine.
//!
//! Runs the ordered strategy pipeline
//! S1 (Exact Token) → S2 (Name Prefix) → S3 (Product Seeded) →
//! S4 (Taxonomy Cross-Ref) → S5 (Partial Token) → S6 (Default)
//! over an immutable [`ReferenceSnapshot`] and short-circuits on the first
//! hit. Resolution is a pure function of its inputs: identical arguments
//! against identical reference data always yield the same provider.

pub mod aliases;
pub mod catalog;
pub mod category;
pub mod normalizer;
pub mod snapshot;
pub mod strategies;
pub mod taxonomy;

pub use snapshot::ReferenceSnapshot;

use crate::types::errors::{ResolveError, ResolveResult};
use crate::types::models::{MatchedBy, ResolutionRequest, ResolutionResult};
use strategies::StrategyFn;

#[cfg(feature = "debug_resolver")]
use log::debug;

/// The fixed strategy order. S6 is not listed here: it is the guaranteed
/// terminal case and runs unconditionally when S1-S5 all miss.
const STRATEGIES: &[(MatchedBy, StrategyFn)] = &[
    (MatchedBy::ExactToken, strategies::exact_token_match),
    (MatchedBy::NamePrefix, strategies::name_prefix_match),
    (MatchedBy::ProductSeeded, strategies::product_seeded_match),
    (MatchedBy::TaxonomyCrossRef, strategies::taxonomy_cross_reference),
    (MatchedBy::PartialToken, strategies::partial_token_match),
];

/// Resolve a raw request token to exactly one provider plus its catalog.
///
/// The token is normalized and alias-resolved first. When no category hint
/// is given, one is derived from the taxonomy where possible, so un-hinted
/// requests still benefit from the category consistency filter.
///
/// Fails only with [`ResolveError::NoProvidersAvailable`] when the provider
/// collection is empty; every other input, including garbage, resolves.
pub fn resolve(
    snapshot: &ReferenceSnapshot,
    raw_token: &str,
    category_hint: Option<&str>,
) -> ResolveResult<ResolutionResult> {
    if snapshot.providers.is_empty() {
        return Err(ResolveError::NoProvidersAvailable(
            "provider collection is empty".to_string(),
        ));
    }

    let token = aliases::resolve_alias(&normalizer::normalize_token(raw_token));

    // Prefer the caller's hint; otherwise derive the category from the
    // taxonomy via the aliased token.
    let category = category_hint
        .map(normalizer::normalize_token)
        .filter(|hint| !hint.is_empty())
        .or_else(|| snapshot.index().category_of(&token).map(str::to_string));
    let category_ref = category.as_deref();

    let mut chosen = None;
    for (tag, strategy) in STRATEGIES {
        if let Some(provider) = strategy(snapshot, &token, category_ref) {
            #[cfg(feature = "debug_resolver")]
            debug!(
                "[RESOLVER] strategy hit | strategy={tag} token={token} provider={}",
                provider.id
            );
            chosen = Some((provider, *tag));
            break;
        }
        #[cfg(feature = "debug_resolver")]
        debug!("[RESOLVER] strategy miss | strategy={tag} token={token}");
    }

    let (provider, matched_by) = match chosen {
        Some(hit) => hit,
        None => {
            let fallback = strategies::default_provider(snapshot, category_ref).ok_or_else(|| {
                ResolveError::NoProvidersAvailable("provider collection is empty".to_string())
            })?;
            (fallback, MatchedBy::Default)
        }
    };

    let products = catalog::products_for(provider, &snapshot.products);
    let display_label = snapshot
        .index()
        .display_name_of(&token)
        .map(str::to_string)
        .unwrap_or_else(|| provider.name.clone());

    log::debug!(
        "Resolved '{raw_token}' -> provider '{}' ({} products) via {matched_by}",
        provider.name,
        products.len()
    );

    Ok(ResolutionResult {
        provider: provider.clone(),
        products,
        display_label,
        matched_by,
        resolved_token: token,
        category,
    })
}

/// Convenience wrapper over [`resolve`] for callers holding a
/// [`ResolutionRequest`].
pub fn resolve_request(
    snapshot: &ReferenceSnapshot,
    request: &ResolutionRequest,
) -> ResolveResult<ResolutionResult> {
    resolve(snapshot, &request.raw_token, request.category_hint.as_deref())
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod resolver_tests;
