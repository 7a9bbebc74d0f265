use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// How a product resolves price and stock: by itself or via its variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    #[default]
    Simple,
    Variable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "de_opt_amount")]
    pub base_price: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_int")]
    pub stock: i64,
    #[serde(rename = "type", default)]
    pub product_type: ProductType,
    #[serde(default)]
    pub categories: Vec<ProductCategory>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub attributes: Vec<AttributePair>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sales_count: i64,
}

impl Product {
    /// The catalog display predicate: active and not soft-deleted.
    pub fn is_live(&self) -> bool {
        self.is_active && self.deleted_at.is_none()
    }

    pub fn active_variants(&self) -> impl Iterator<Item = &ProductVariant> {
        self.variants.iter().filter(|v| v.is_active)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_id_default")]
    pub product_id: String,
    #[serde(default)]
    pub sku_suffix: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_int")]
    pub stock: i64,
    #[serde(default, deserialize_with = "de_amount")]
    pub price: f64,
    #[serde(default, deserialize_with = "de_lenient_int")]
    pub min_stock: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Category as embedded in a product payload. Backends ship the id as a JSON
/// number or a string; the filter layer compares it as a string either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategory {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "de_id_default")]
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

/// A name/value attribute on a product. Names are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributePair {
    pub name: String,
    pub value: String,
}

impl AttributePair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

fn default_true() -> bool {
    true
}

// Backends are inconsistent about scalar types: ids arrive as numbers or
// strings, stock as integers or numeric strings, prices as numbers, strings
// or null. A decode failure must degrade to a default, never abort the
// catalog render, so every helper below coerces instead of erroring.

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Str(String),
    Int(i64),
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Str(s) => s,
        IdRepr::Int(n) => n.to_string(),
    })
}

fn de_id_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<IdRepr>::deserialize(deserializer)? {
        Some(IdRepr::Str(s)) => s,
        Some(IdRepr::Int(n)) => n.to_string(),
        None => String::new(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumRepr {
    Int(i64),
    Float(f64),
    Str(String),
}

fn de_lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumRepr>::deserialize(deserializer)? {
        Some(NumRepr::Int(n)) => n,
        Some(NumRepr::Float(f)) if f.is_finite() => f as i64,
        Some(NumRepr::Str(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_opt_amount(deserializer)?.unwrap_or(0.0))
}

fn de_opt_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumRepr>::deserialize(deserializer)? {
        Some(NumRepr::Int(n)) => Some(n as f64),
        Some(NumRepr::Float(f)) if f.is_finite() => Some(f),
        Some(NumRepr::Str(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    })
}
