use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::{DisplayFilterState, Product, ProductId, SortKey};

/// Distinct category and brand tags present in the catalog
///
/// Drives the choices offered by the filter and preference forms; always
/// derived from the live catalog, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogFacets {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
}

/// Derives the displayed catalog for the given display filters
///
/// Pure function over a catalog snapshot: category filter, then brand
/// filter, then the selected sort. The sort is stable, so products that
/// compare equal keep their post-filter relative order. The source catalog
/// is never reordered; every call returns a fresh vector.
pub fn derive(catalog: &[Product], filters: &DisplayFilterState) -> Vec<Product> {
    let mut items: Vec<Product> = catalog
        .iter()
        .filter(|product| filters.category.matches(&product.category))
        .filter(|product| filters.brand.matches(&product.brand))
        .cloned()
        .collect();

    match filters.sort_by {
        SortKey::Default => {}
        SortKey::PriceAsc => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rating => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    items
}

/// Collects the facet tag sets from the catalog, sorted and deduplicated
pub fn facets(catalog: &[Product]) -> CatalogFacets {
    let categories: BTreeSet<&str> = catalog
        .iter()
        .map(|product| product.category.as_str())
        .collect();
    let brands: BTreeSet<&str> = catalog
        .iter()
        .map(|product| product.brand.as_str())
        .collect();

    CatalogFacets {
        categories: categories.into_iter().map(str::to_string).collect(),
        brands: brands.into_iter().map(str::to_string).collect(),
    }
}

/// Joins recorded history ids against the current catalog
///
/// Preserves first-click order and skips ids no longer present, e.g. after
/// a catalog reload dropped a product.
pub fn history_products(catalog: &[Product], history: &[ProductId]) -> Vec<Product> {
    history
        .iter()
        .filter_map(|id| catalog.iter().find(|product| &product.id == id))
        .cloned()
        .collect()
}
