use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub placeholder_image: String,
    pub cart_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_base_url = env::var("API_BASE_URL")?;
        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);
        let placeholder_image = env::var("PLACEHOLDER_IMAGE")
            .unwrap_or_else(|_| "/assets/placeholder-producto.png".to_string());
        let cart_path = env::var("CART_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cart.json"));
        Ok(Self {
            api_base_url,
            request_timeout_secs,
            placeholder_image,
            cart_path,
        })
    }
}
