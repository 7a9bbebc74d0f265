use serde::{Deserialize, Serialize};

use crate::models::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Name,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Catalog view constraints. Every field is optional; an absent field means
/// no constraint on that axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub search: Option<String>,
    pub category: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

impl FilterSpec {
    /// Whether any constraint that narrows the result set is active. Sort
    /// state alone does not count; the UI uses this to decide whether to
    /// offer "clear filters".
    pub fn has_filters(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty())
            || self.category.as_deref().is_some_and(|c| !c.is_empty())
            || self.price_min.is_some()
            || self.price_max.is_some()
    }

    /// Lenient price-bound parse: malformed or non-finite input becomes an
    /// unset bound rather than an error.
    pub fn parse_bound(raw: &str) -> Option<f64> {
        raw.trim().parse::<f64>().ok().filter(|f| f.is_finite())
    }
}

/// Filters and sorts a product list. Discards non-live products first, then
/// applies search, category and price range in that order, then sorts.
/// Pure: same inputs always yield the same output, and it never fails; an
/// empty result is a valid result.
pub fn apply(products: &[Product], spec: &FilterSpec) -> Vec<Product> {
    let mut out: Vec<Product> = products.iter().filter(|p| p.is_live()).cloned().collect();

    if let Some(search) = spec.search.as_deref().filter(|s| !s.is_empty()) {
        let needle = search.to_lowercase();
        out.retain(|p| matches_search(p, &needle));
    }

    if let Some(category) = spec.category.as_deref().filter(|c| !c.is_empty()) {
        out.retain(|p| matches_category(p, category));
    }

    if spec.price_min.is_some() || spec.price_max.is_some() {
        out.retain(|p| in_price_range(p, spec.price_min, spec.price_max));
    }

    sort(&mut out, spec);
    out
}

/// Substring match over every searchable field, case-insensitive. The needle
/// must already be lowercased.
fn matches_search(product: &Product, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&product.name)
        || product.description.as_deref().is_some_and(contains)
        || product.sku.as_deref().is_some_and(contains)
        || product.categories.iter().any(|c| contains(&c.name))
        || product
            .attributes
            .iter()
            .any(|a| contains(&a.name) || contains(&a.value))
}

/// Category id equality (as strings), falling back to a case-insensitive
/// name match. A product with no categories never matches.
fn matches_category(product: &Product, wanted: &str) -> bool {
    let wanted_lower = wanted.to_lowercase();
    product
        .categories
        .iter()
        .any(|c| c.id == wanted || c.name.to_lowercase() == wanted_lower)
}

/// Inclusive bounds against `base_price`. A product without a base price
/// never passes a bounded range.
fn in_price_range(product: &Product, min: Option<f64>, max: Option<f64>) -> bool {
    let Some(price) = product.base_price else {
        return false;
    };
    min.is_none_or(|m| price >= m) && max.is_none_or(|m| price <= m)
}

fn sort(products: &mut [Product], spec: &FilterSpec) {
    let sort_by = spec.sort_by.unwrap_or(SortBy::CreatedAt);
    // Default catalog order is most-recent-first; name defaults ascending.
    let order = spec.sort_order.unwrap_or(match sort_by {
        SortBy::Name => SortOrder::Asc,
        SortBy::CreatedAt => SortOrder::Desc,
    });

    products.sort_by(|a, b| {
        let ord = match sort_by {
            SortBy::Name => a.name.cmp(&b.name),
            SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}
