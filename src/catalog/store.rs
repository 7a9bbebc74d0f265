use crate::catalog::filter::{self, FilterSpec};
use crate::models::Product;

/// One entry of the derived category index: how many live products carry the
/// category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFacet {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    pub count: usize,
}

pub const FEATURED_LIMIT: usize = 8;

/// In-memory catalog state: the product list as fetched, the active filter,
/// and the filtered view derived from both. The view is recomputed whenever
/// either input changes, so the same list and spec always yield the same
/// view.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    spec: FilterSpec,
    filtered: Vec<Product>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.refresh();
    }

    pub fn set_filter(&mut self, spec: FilterSpec) {
        self.spec = spec;
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.set_filter(FilterSpec::default());
    }

    fn refresh(&mut self) {
        self.filtered = filter::apply(&self.products, &self.spec);
        tracing::debug!(
            total = self.products.len(),
            filtered = self.filtered.len(),
            has_filters = self.spec.has_filters(),
            "catalog view refreshed"
        );
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.spec
    }

    pub fn has_filters(&self) -> bool {
        self.spec.has_filters()
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.slug.as_deref() == Some(slug))
    }

    /// Best sellers among live products, capped at [`FEATURED_LIMIT`].
    pub fn featured(&self) -> Vec<&Product> {
        let mut live: Vec<&Product> = self.products.iter().filter(|p| p.is_live()).collect();
        live.sort_by(|a, b| b.sales_count.cmp(&a.sales_count));
        live.truncate(FEATURED_LIMIT);
        live
    }

    /// Category index over live products, in first-seen order.
    pub fn category_facets(&self) -> Vec<CategoryFacet> {
        let mut facets: Vec<CategoryFacet> = Vec::new();
        for product in self.products.iter().filter(|p| p.is_live()) {
            for category in &product.categories {
                match facets.iter_mut().find(|f| f.id == category.id) {
                    Some(facet) => facet.count += 1,
                    None => facets.push(CategoryFacet {
                        id: category.id.clone(),
                        name: category.name.clone(),
                        slug: category.slug.clone(),
                        count: 1,
                    }),
                }
            }
        }
        facets
    }
}
