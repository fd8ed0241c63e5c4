//! CraftLink resolution core.
//!
//! Given a loosely-specified service request (a human-typed or URL-derived
//! category/sub-service slug), deterministically resolves it to exactly one
//! provider record plus the subset of the product catalog attributed to it.
//! The reference data (providers, products, service taxonomy) is loaded once
//! into an immutable [`ReferenceSnapshot`] and never mutated by this crate.

pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::resolver::snapshot::ReferenceSnapshot;
pub use services::resolver::{resolve, resolve_request};
pub use types::errors::{ResolveError, ResolveResult};
pub use types::models::{
    Category, MatchedBy, ProductRecord, ProviderRecord, ResolutionRequest, ResolutionResult,
    ServiceTaxonomy, SubService,
};
