//! Starter catalog
//!
//! `POST /init-products` seeds an empty store with this built-in catalog.
//! Seeding is idempotent: if any product already exists the call is a no-op
//! that reports the current count.

use rust_decimal::Decimal;
use shared::error::AppResult;
use shared::models::ProductDraft;
use shared::payloads::InitProductsResponse;

use crate::catalog::CatalogStore;

fn entry(
    name: &str,
    category: &str,
    subcategory: &str,
    price: i64,
    unit: &str,
    description: &str,
    stock: u32,
) -> ProductDraft {
    ProductDraft {
        name: name.into(),
        category: category.into(),
        subcategory: subcategory.into(),
        price: Decimal::from(price),
        unit: unit.into(),
        description: description.into(),
        image: String::new(),
        stock,
    }
}

/// The built-in starter catalog
pub fn starter_catalog() -> Vec<ProductDraft> {
    vec![
        entry(
            "Country Chicken",
            "Country Chicken",
            "Chicken",
            450,
            "kg",
            "Free-range country chicken, farm raised without antibiotics",
            20,
        ),
        entry(
            "Kadaknath Chicken",
            "Country Chicken",
            "Chicken",
            900,
            "kg",
            "Rare black-meat Kadaknath breed, rich and lean",
            8,
        ),
        entry(
            "Broiler Chicken",
            "Broiler",
            "Chicken",
            220,
            "kg",
            "Fresh broiler chicken, skinless curry cut on request",
            50,
        ),
        entry(
            "Chicken Curry Cut",
            "Broiler",
            "Chicken",
            240,
            "kg",
            "Bone-in curry cut pieces, cleaned and ready to cook",
            35,
        ),
        entry(
            "Country Eggs",
            "Eggs",
            "Country Eggs",
            120,
            "dozen",
            "Brown country eggs from free-range hens",
            60,
        ),
        entry(
            "White Eggs",
            "Eggs",
            "Farm Eggs",
            90,
            "dozen",
            "Farm-fresh white eggs, graded and cleaned",
            100,
        ),
        entry(
            "Quail Eggs",
            "Eggs",
            "Quail Eggs",
            60,
            "tray of 12",
            "Delicate quail eggs, a dozen to a tray",
            40,
        ),
    ]
}

/// Seed the store if it is empty; report the existing count otherwise
pub fn init_products(store: &CatalogStore) -> AppResult<InitProductsResponse> {
    if !store.is_empty()? {
        return Ok(InitProductsResponse {
            message: "Products already initialized".into(),
            count: store.count()?,
            products: None,
        });
    }

    let mut products = Vec::new();
    for draft in starter_catalog() {
        products.push(store.create(draft)?);
    }

    tracing::info!(count = products.len(), "Seeded starter catalog");
    Ok(InitProductsResponse {
        message: "Products initialized successfully".into(),
        count: products.len() as u64,
        products: Some(products),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_seeds_once_then_noops() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::open(dir.path().join("catalog.redb")).unwrap();

        let first = init_products(&store).unwrap();
        assert!(first.products.is_some());
        assert_eq!(first.count, starter_catalog().len() as u64);

        let second = init_products(&store).unwrap();
        assert!(second.products.is_none());
        assert_eq!(second.count, first.count);
        assert_eq!(store.count().unwrap(), first.count);
    }
}
