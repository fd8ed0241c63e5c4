//! Reference-data and request/result models for the resolution engine.
//!
//! Providers and products are tied together by a *derived* relation: both
//! carry a loosely-maintained `service_token` string, and attribution happens
//! by comparing normalized tokens (plus an optional explicit `provider_id` on
//! products). This is intentionally not a hard foreign key; the fallback
//! strategies exist precisely to route around inconsistent tagging.

use serde::{Deserialize, Serialize};

/// A single sub-service within a category (e.g. "hand_embroidery").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubService {
    pub token: String,
    #[serde(default)]
    pub display_name: String,
}

/// A service category owning an ordered set of sub-services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub sub_services: Vec<SubService>,
}

/// The static category → sub-service reference hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceTaxonomy {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// A provider entry from the providers collection.
///
/// `service_token` SHOULD map to a taxonomy sub-service once normalized, but
/// records where it does not (orphan providers) are tolerated. They remain
/// reachable via the name-based and positional fallback strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub service_token: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A catalog entry from the products collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub service_token: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Explicit provider relation, present in some data sources only.
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// A single resolution request from the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionRequest {
    pub raw_token: String,
    #[serde(default)]
    pub category_hint: Option<String>,
}

/// Which strategy produced the winning provider.
///
/// `Default` marks the unconditional terminal fallback; callers (and the
/// category-safety tests) use it to tell "relevant match" apart from
/// "deterministic answer of last resort".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedBy {
    ExactToken,
    NamePrefix,
    ProductSeeded,
    TaxonomyCrossRef,
    PartialToken,
    Default,
}

impl std::fmt::Display for MatchedBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchedBy::ExactToken => write!(f, "exact_token"),
            MatchedBy::NamePrefix => write!(f, "name_prefix"),
            MatchedBy::ProductSeeded => write!(f, "product_seeded"),
            MatchedBy::TaxonomyCrossRef => write!(f, "taxonomy_cross_ref"),
            MatchedBy::PartialToken => write!(f, "partial_token"),
            MatchedBy::Default => write!(f, "default"),
        }
    }
}

/// The outcome of a resolution: exactly one provider (never empty, a defined
/// fallback always exists) plus the products attributed to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub provider: ProviderRecord,
    pub products: Vec<ProductRecord>,
    /// Human-readable label for the resolved sub-service: the taxonomy
    /// display name when the token is known, else the provider's own name.
    pub display_label: String,
    pub matched_by: MatchedBy,
    /// The normalized, alias-resolved token the strategies actually ran with.
    pub resolved_token: String,
    /// The category the consistency filter was guarding, when determinable.
    #[serde(default)]
    pub category: Option<String>,
}

#[cfg(test)]
#[path = "tests/models_tests.rs"]
mod tests;
