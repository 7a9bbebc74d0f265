use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response envelope used by the backend on every endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
pub struct CreateVariantRequest {
    pub sku_suffix: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub min_stock: Option<i64>,
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Default, Serialize)]
pub struct UpdateVariantRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Serialize)]
pub struct AttachImageRequest {
    pub url: String,
    pub alt_text: Option<String>,
    pub is_primary: bool,
}
