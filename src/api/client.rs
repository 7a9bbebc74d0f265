use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::api::dto::{AttachImageRequest, CreateVariantRequest, Envelope, UpdateVariantRequest};
use crate::config::AppConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Image, Product, ProductVariant};

/// HTTP client for the storefront backend. Requests are one-shot: no retry,
/// no backoff; a request outlives whoever started it.
#[derive(Debug, Clone)]
pub struct CatalogApi {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogApi {
    pub fn new(config: &AppConfig) -> CatalogResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends a request and unwraps the response envelope. Every outbound
    /// request carries a fresh `x-request-id` so client and server logs can
    /// be correlated.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> CatalogResult<T> {
        let request_id = Uuid::new_v4();
        let response = request
            .header("x-request-id", request_id.to_string())
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }
        if !status.is_success() {
            let message = match response.json::<Envelope<serde_json::Value>>().await {
                Ok(body) => body.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            };
            tracing::warn!(%request_id, status = status.as_u16(), message, "api request failed");
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> = response.json().await?;
        envelope.data.ok_or(CatalogError::NotFound)
    }

    pub async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        self.send(self.http.get(self.url("/api/products"))).await
    }

    pub async fn get_product(&self, id: &str) -> CatalogResult<Product> {
        self.send(self.http.get(self.url(&format!("/api/products/{id}"))))
            .await
    }

    pub async fn get_product_by_slug(&self, slug: &str) -> CatalogResult<Product> {
        self.send(
            self.http
                .get(self.url(&format!("/api/products/slug/{slug}"))),
        )
        .await
    }

    pub async fn list_variants(&self, product_id: &str) -> CatalogResult<Vec<ProductVariant>> {
        self.send(
            self.http
                .get(self.url(&format!("/api/products/{product_id}/variants"))),
        )
        .await
    }

    pub async fn create_variant(
        &self,
        product_id: &str,
        payload: &CreateVariantRequest,
    ) -> CatalogResult<ProductVariant> {
        self.send(
            self.http
                .post(self.url(&format!("/api/products/{product_id}/variants")))
                .json(payload),
        )
        .await
    }

    pub async fn update_variant(
        &self,
        product_id: &str,
        variant_id: &str,
        payload: &UpdateVariantRequest,
    ) -> CatalogResult<ProductVariant> {
        self.send(
            self.http
                .put(self.url(&format!(
                    "/api/products/{product_id}/variants/{variant_id}"
                )))
                .json(payload),
        )
        .await
    }

    pub async fn delete_variant(&self, product_id: &str, variant_id: &str) -> CatalogResult<()> {
        self.send::<serde_json::Value>(self.http.delete(self.url(&format!(
            "/api/products/{product_id}/variants/{variant_id}"
        ))))
        .await?;
        Ok(())
    }

    pub async fn attach_image(
        &self,
        product_id: &str,
        payload: &AttachImageRequest,
    ) -> CatalogResult<Image> {
        self.send(
            self.http
                .post(self.url(&format!("/api/products/{product_id}/images")))
                .json(payload),
        )
        .await
    }

    pub async fn delete_image(&self, product_id: &str, image_id: &str) -> CatalogResult<()> {
        self.send::<serde_json::Value>(self.http.delete(
            self.url(&format!("/api/products/{product_id}/images/{image_id}")),
        ))
        .await?;
        Ok(())
    }

    pub async fn set_active(&self, product_id: &str, active: bool) -> CatalogResult<Product> {
        let action = if active { "activate" } else { "deactivate" };
        self.send(
            self.http
                .post(self.url(&format!("/api/products/{product_id}/{action}"))),
        )
        .await
    }

    pub async fn soft_delete(&self, product_id: &str) -> CatalogResult<()> {
        self.send::<serde_json::Value>(
            self.http
                .delete(self.url(&format!("/api/products/{product_id}"))),
        )
        .await?;
        Ok(())
    }

    pub async fn restore(&self, product_id: &str) -> CatalogResult<Product> {
        self.send(
            self.http
                .post(self.url(&format!("/api/products/{product_id}/restore"))),
        )
        .await
    }
}
