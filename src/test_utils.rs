//! Shared fixture builders for unit tests.

use std::sync::Once;

use crate::services::resolver::snapshot::ReferenceSnapshot;
use crate::types::models::{
    Category, ProductRecord, ProviderRecord, ServiceTaxonomy, SubService,
};

static INIT: Once = Once::new();

/// Initialize the test logger once per process.
pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub fn provider(id: &str, name: &str, service_token: &str) -> ProviderRecord {
    ProviderRecord {
        id: id.to_string(),
        name: name.to_string(),
        service_token: service_token.to_string(),
        location: None,
        rating: None,
        description: None,
    }
}

pub fn product(id: &str, name: &str, service_token: &str) -> ProductRecord {
    ProductRecord {
        id: id.to_string(),
        name: name.to_string(),
        service_token: service_token.to_string(),
        category: None,
        provider_id: None,
        price: None,
    }
}

pub fn sub_service(token: &str, display_name: &str) -> SubService {
    SubService {
        token: token.to_string(),
        display_name: display_name.to_string(),
    }
}

/// The baseline taxonomy shared by most fixtures: three categories with
/// known sub-services, covering the token shapes the strategies care about.
pub fn fixture_taxonomy() -> ServiceTaxonomy {
    ServiceTaxonomy {
        categories: vec![
            Category {
                name: "Needlework".to_string(),
                sub_services: vec![
                    sub_service("hand_embroidery", "Hand Embroidery"),
                    sub_service("crochet_art", "Crochet Art"),
                    sub_service("fabric_painting", "Fabric Painting"),
                ],
            },
            Category {
                name: "Festive Crafts".to_string(),
                sub_services: vec![
                    sub_service("festive_craft_delight", "Festive Craft Delight"),
                    sub_service("rangoli_design", "Rangoli Design"),
                    sub_service("diwali_decor", "Diwali Decor"),
                ],
            },
            Category {
                name: "Pottery".to_string(),
                sub_services: vec![
                    sub_service("pottery_painting", "Pottery Painting"),
                    sub_service("clay_modelling", "Clay Modelling"),
                ],
            },
        ],
    }
}

/// The baseline provider collection. Ordering matters: the positional S6
/// fallback is part of observable behavior, so tests rely on it.
pub fn fixture_providers() -> Vec<ProviderRecord> {
    vec![
        provider("prov-1", "Threads & Needles Studio", "hand_embroidery"),
        provider("prov-2", "Rangoli House", "rangoli_design"),
        provider("prov-3", "Mud & Fire Pottery", "pottery_painting"),
        // Orphan: token unknown to the taxonomy, reachable only via
        // name/positional fallback.
        provider("prov-4", "Vintage Corner", "antique_restoration"),
    ]
}

pub fn fixture_products() -> Vec<ProductRecord> {
    let mut hamper = product("prod-3", "Festive Craft Hamper", "festive_craft_delight");
    // No provider carries this token; the explicit relation is the only way
    // back to a provider (S3's weaker id fallback).
    hamper.provider_id = Some("prov-2".to_string());

    vec![
        product("prod-1", "Floral Hoop Art", "hand_embroidery"),
        product("prod-2", "Peacock Rangoli Stencil", "rangoli_design"),
        hamper,
        product("prod-4", "Hand-painted Vase", "pottery_painting"),
        // Typo'd tag straight from the stored data; S3's provider hop goes
        // through the alias table to reach the embroidery studio.
        product("prod-5", "Beginner Embroidery Kit", "hand_embroidry"),
    ]
}

pub fn fixture_snapshot() -> ReferenceSnapshot {
    init_logger();
    ReferenceSnapshot::new(fixture_providers(), fixture_products(), fixture_taxonomy())
        .expect("fixture snapshot must be valid")
}
