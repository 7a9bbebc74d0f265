use crate::catalog::{images, pricing, pricing::StockStatus};
use crate::models::{Product, ProductType, ProductVariant};

/// One row in an admin or listing table. A VARIABLE product expands into one
/// row per variant; everything else is a single product row. The tag makes
/// "which fields exist here" a compile-time question instead of a runtime
/// one.
#[derive(Debug, Clone)]
pub enum DisplayRow<'a> {
    Product(&'a Product),
    Variant {
        variant: &'a ProductVariant,
        parent: &'a Product,
    },
}

impl<'a> DisplayRow<'a> {
    pub fn rows_for(product: &'a Product) -> Vec<DisplayRow<'a>> {
        match product.product_type {
            ProductType::Variable if !product.variants.is_empty() => product
                .variants
                .iter()
                .map(|variant| DisplayRow::Variant {
                    variant,
                    parent: product,
                })
                .collect(),
            _ => vec![DisplayRow::Product(product)],
        }
    }

    pub fn label(&self) -> String {
        match self {
            DisplayRow::Product(product) => product.name.clone(),
            DisplayRow::Variant { variant, parent } => {
                if variant.attributes.is_empty() {
                    parent.name.clone()
                } else {
                    let detail = variant
                        .attributes
                        .iter()
                        .map(|(name, value)| format!("{name}: {value}"))
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("{} ({detail})", parent.name)
                }
            }
        }
    }

    pub fn sku(&self) -> Option<String> {
        match self {
            DisplayRow::Product(product) => product.sku.clone(),
            DisplayRow::Variant { variant, parent } => match (&parent.sku, &variant.sku_suffix) {
                (Some(sku), Some(suffix)) => Some(format!("{sku}-{suffix}")),
                (Some(sku), None) => Some(sku.clone()),
                (None, suffix) => suffix.clone(),
            },
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            DisplayRow::Product(product) => pricing::display_price(product),
            DisplayRow::Variant { variant, .. } => variant.price,
        }
    }

    pub fn stock(&self) -> i64 {
        match self {
            DisplayRow::Product(product) => pricing::display_stock(product),
            DisplayRow::Variant { variant, .. } => variant.stock,
        }
    }

    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self.stock())
    }

    pub fn is_active(&self) -> bool {
        match self {
            DisplayRow::Product(product) => product.is_active,
            DisplayRow::Variant { variant, .. } => variant.is_active,
        }
    }

    /// Thumbnail URL. A variant without its own images falls back to the
    /// parent product's gallery.
    pub fn image(&self) -> Option<&str> {
        match self {
            DisplayRow::Product(product) => images::primary_image(&product.images),
            DisplayRow::Variant { variant, parent } => images::primary_image(&variant.images)
                .or_else(|| images::primary_image(&parent.images)),
        }
    }
}
