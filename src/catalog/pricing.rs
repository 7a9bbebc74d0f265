use crate::models::{Product, ProductType};

/// At or below this resolved stock a product is flagged as running low.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Price shown in listings: the minimum active-variant price for a VARIABLE
/// product with at least one active variant, otherwise the base price.
/// Always a finite number, 0.0 when nothing applies.
pub fn display_price(product: &Product) -> f64 {
    if product.product_type == ProductType::Variable {
        let min = product
            .active_variants()
            .map(|v| v.price)
            .fold(None, |acc: Option<f64>, p| {
                Some(acc.map_or(p, |m: f64| m.min(p)))
            });
        if let Some(price) = min {
            return price;
        }
    }
    product.base_price.unwrap_or(0.0)
}

/// Stock shown in listings: the sum over active variants for a VARIABLE
/// product, otherwise the product's own stock. Inactive variants contribute
/// nothing.
pub fn display_stock(product: &Product) -> i64 {
    match product.product_type {
        ProductType::Variable => product.active_variants().map(|v| v.stock).sum(),
        ProductType::Simple => product.stock,
    }
}

/// Three-tier stock badge shared by the catalog grid and the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    LowStock { remaining: i64 },
    OutOfStock,
}

impl StockStatus {
    pub fn classify(stock: i64) -> Self {
        if stock > LOW_STOCK_THRESHOLD {
            StockStatus::InStock
        } else if stock > 0 {
            StockStatus::LowStock { remaining: stock }
        } else {
            StockStatus::OutOfStock
        }
    }

    pub fn for_product(product: &Product) -> Self {
        Self::classify(display_stock(product))
    }

    /// Out-of-stock disables the add-to-cart action.
    pub fn can_add_to_cart(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }

    pub fn message(&self) -> String {
        match self {
            StockStatus::InStock => "En stock".to_string(),
            StockStatus::LowStock { remaining } => {
                format!("¡Solo quedan {remaining} unidades!")
            }
            StockStatus::OutOfStock => "Agotado".to_string(),
        }
    }
}
