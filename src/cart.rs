use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{images, pricing, pricing::StockStatus};
use crate::error::CatalogResult;
use crate::models::{Product, ProductVariant};

/// Cart line key: the product id alone, or `productId-variantId` when a
/// variant is attached. Two lines must never share a key.
pub fn cart_key(product_id: &str, variant_id: Option<&str>) -> String {
    match variant_id {
        Some(variant_id) => format!("{product_id}-{variant_id}"),
        None => product_id.to_string(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub key: String,
    pub product_id: String,
    pub variant_id: Option<String>,
    pub name: String,
    pub unit_price: f64,
    pub image: Option<String>,
    pub quantity: u32,
}

/// Client-side cart. Persisted to a local JSON file, the desktop analogue of
/// the browser's local storage; never sent to the backend as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product (optionally a specific variant) to the cart. An
    /// existing line with the same key has its quantity incremented instead
    /// of being duplicated. Returns false without touching the cart when the
    /// item is out of stock.
    pub fn add(
        &mut self,
        product: &Product,
        variant: Option<&ProductVariant>,
        quantity: u32,
    ) -> bool {
        if quantity == 0 {
            return false;
        }
        let stock = match variant {
            Some(variant) => variant.stock,
            None => pricing::display_stock(product),
        };
        if !StockStatus::classify(stock).can_add_to_cart() {
            return false;
        }

        let key = cart_key(&product.id, variant.map(|v| v.id.as_str()));
        if let Some(line) = self.lines.iter_mut().find(|l| l.key == key) {
            line.quantity += quantity;
            return true;
        }

        let unit_price = match variant {
            Some(variant) => variant.price,
            None => pricing::display_price(product),
        };
        let image = match variant {
            Some(variant) => images::primary_image(&variant.images)
                .or_else(|| images::primary_image(&product.images)),
            None => images::primary_image(&product.images),
        };
        self.lines.push(CartLine {
            key,
            product_id: product.id.clone(),
            variant_id: variant.map(|v| v.id.clone()),
            name: product.name.clone(),
            unit_price,
            image: image.map(str::to_string),
            quantity,
        });
        true
    }

    /// Sets the quantity of an existing line; zero removes it. Returns false
    /// when no line has the key.
    pub fn set_quantity(&mut self, key: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(key);
        }
        match self.lines.iter_mut().find(|l| l.key == key) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.key != key);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.unit_price * f64::from(l.quantity))
            .sum()
    }

    /// Loads a cart from disk. A missing or unreadable file yields an empty
    /// cart; a corrupt cart must not take down the storefront.
    pub fn load(path: &Path) -> Cart {
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, path = %path.display(), "discarding corrupt cart file");
                Cart::new()
            }),
            Err(_) => Cart::new(),
        }
    }

    pub fn save(&self, path: &Path) -> CatalogResult<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }
}
