//! Taxonomy index: deterministic lookups over the static service hierarchy.
//!
//! Built once from the category → sub-service reference data and never
//! mutated afterwards. Answers "which category owns sub-service token X?" in
//! O(1) and preserves taxonomy order for scans that need it.

use std::collections::HashMap;

use super::normalizer;
use crate::types::models::ServiceTaxonomy;

/// One flattened sub-service row, in taxonomy order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyEntry {
    /// Normalized sub-service token.
    pub token: String,
    /// Display name as stored in the reference data.
    pub display_name: String,
    /// Normalized token of the owning category.
    pub category: String,
}

/// Precomputed lookup structures over the service taxonomy.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyIndex {
    entries: Vec<TaxonomyEntry>,
    category_by_token: HashMap<String, String>,
    display_by_token: HashMap<String, String>,
    tokens_by_category: HashMap<String, Vec<String>>,
}

impl TaxonomyIndex {
    /// Build the index from raw taxonomy data, normalizing every key.
    ///
    /// Duplicate sub-service tokens are rejected upstream by snapshot
    /// validation; if one slips through, the first occurrence wins.
    pub fn build(taxonomy: &ServiceTaxonomy) -> Self {
        let mut index = Self::default();

        for category in &taxonomy.categories {
            let category_token = normalizer::normalize_token(&category.name);
            if category_token.is_empty() {
                continue;
            }

            for sub in &category.sub_services {
                let token = normalizer::normalize_token(&sub.token);
                if token.is_empty() || index.category_by_token.contains_key(&token) {
                    continue;
                }

                index
                    .category_by_token
                    .insert(token.clone(), category_token.clone());
                index
                    .display_by_token
                    .insert(token.clone(), sub.display_name.clone());
                index
                    .tokens_by_category
                    .entry(category_token.clone())
                    .or_default()
                    .push(token.clone());
                index.entries.push(TaxonomyEntry {
                    token,
                    display_name: sub.display_name.clone(),
                    category: category_token.clone(),
                });
            }
        }

        index
    }

    /// Normalized category token owning `sub_token`, if any.
    pub fn category_of(&self, sub_token: &str) -> Option<&str> {
        self.category_by_token.get(sub_token).map(String::as_str)
    }

    /// Display name for a sub-service token.
    ///
    /// Returns `None` for unknown tokens and for known tokens whose display
    /// name is empty, so callers can fall back to something presentable.
    pub fn display_name_of(&self, sub_token: &str) -> Option<&str> {
        self.display_by_token
            .get(sub_token)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Sub-service tokens of a category, in taxonomy order.
    pub fn sub_services_of(&self, category_token: &str) -> &[String] {
        self.tokens_by_category
            .get(category_token)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All sub-service rows in taxonomy order.
    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/taxonomy_tests.rs"]
mod tests;
