use std::time::Duration;

use serde::de::{DeserializeOwned, IgnoredAny};
use thiserror::Error;
use tracing::debug;

use crate::records::{FavoritePayload, FoodRecord, NewOrder, OrderRecord};

const DEFAULT_API_BASE: &str = "http://localhost:3333";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Client for the GoRestaurant REST backend
pub struct GoRestaurantClient {
    client: reqwest::Client,
    base_url: String,
}

impl GoRestaurantClient {
    /// Client for the local development backend
    pub fn local() -> Result<Self> {
        Self::new(DEFAULT_API_BASE)
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("GoRestaurant/0.1.0"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Get a food with its extras
    pub async fn get_food(&self, id: u64) -> Result<FoodRecord> {
        let url = self.url(&format!("foods/{}", id));
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = check_status(response, &format!("food {}", id)).await?;
        read_json(response).await
    }

    /// List every order placed so far, in backend order
    pub async fn list_orders(&self) -> Result<Vec<OrderRecord>> {
        let url = self.url("orders");
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = check_status(response, "orders").await?;
        read_json(response).await
    }

    /// Number of orders stored, whatever shape each entry has
    pub async fn count_orders(&self) -> Result<usize> {
        let url = self.url("orders");
        debug!("GET {} (count)", url);

        let response = self.client.get(&url).send().await?;
        let response = check_status(response, "orders").await?;
        let orders: Vec<IgnoredAny> = read_json(response).await?;
        Ok(orders.len())
    }

    pub async fn add_favorite(&self, favorite: &FavoritePayload) -> Result<()> {
        let url = self.url("favorites");
        debug!("POST {} (food {})", url, favorite.id);

        let response = self.client.post(&url).json(favorite).send().await?;
        check_status(response, &format!("favorite {}", favorite.id)).await?;
        Ok(())
    }

    pub async fn remove_favorite(&self, id: u64) -> Result<()> {
        let url = self.url(&format!("favorites/{}", id));
        debug!("DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        check_status(response, &format!("favorite {}", id)).await?;
        Ok(())
    }

    pub async fn create_order(&self, order: &NewOrder) -> Result<()> {
        let url = self.url("orders");
        debug!("POST {} (product {})", url, order.product_id);

        let response = self.client.post(&url).json(order).send().await?;
        check_status(response, "order").await?;
        Ok(())
    }
}

/// Turn non-2xx responses into errors, keeping the body for context
async fn check_status(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
    let status = response.status();

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(what.to_string()));
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::RequestFailed(format!(
            "Status {}: {}",
            status, body
        )));
    }

    Ok(response)
}

// Parse through serde_json so malformed bodies surface as ParseError
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
