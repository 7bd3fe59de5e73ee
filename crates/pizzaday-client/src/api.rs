//! HTTP client for the pizza-day backend. One method per endpoint, no
//! retries: every failure is terminal for that user action.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use pizzaday_proto::{MenuFeedback, MenuItem, Order, OrdersResponse, PartyDate};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build the client with the configured timeout and a cookie store,
    /// so same-origin session cookies ride along like the browser's
    /// `credentials: 'same-origin'` fetches did.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.server.timeout_seconds))
            .cookie_store(true)
            .build()?;
        Ok(Self {
            client,
            base_url: config.server.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `/orders?date=`: aggregates plus the full order list for the
    /// selected date.
    pub async fn fetch_orders(&self, date: PartyDate) -> Result<OrdersResponse> {
        let url = format!("{}/orders", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("date", date.to_string())])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// POST `/orders?date=`: submit one order. Success is judged by HTTP
    /// status alone; the response body is not used.
    pub async fn submit_order(&self, date: PartyDate, order: &Order) -> Result<()> {
        let url = format!("{}/orders", self.base_url);
        let response = self
            .client
            .post(&url)
            .query(&[("date", date.to_string())])
            .json(order)
            .send()
            .await?;

        Self::check_status(response).await?;
        debug!("Order submitted for {date}");
        Ok(())
    }

    /// GET `/manager/orders`: the unscoped order collection, kept as raw
    /// JSON for verbatim display.
    pub async fn manager_orders(&self) -> Result<serde_json::Value> {
        let url = format!("{}/manager/orders", self.base_url);
        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// POST `/manager/menu`: add one menu item. The backend answers with
    /// a feedback body on success and failure alike, so non-success
    /// statuses still try to parse it.
    pub async fn add_menu_item(&self, item: &MenuItem) -> Result<MenuFeedback> {
        let url = format!("{}/manager/menu", self.base_url);
        let response = self.client.post(&url).json(item).send().await?;
        Ok(response.json().await?)
    }

    /// GET `/health`: backend reachability probe.
    pub async fn health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Health check failed: {e}");
                false
            }
        }
    }

    /// Turn a non-success status into `ClientError::Api`, logging the
    /// error body best-effort the way the browser client logged it to
    /// the console.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        error!("API error ({status}): {body}");
        Err(ClientError::Api {
            status: status.as_u16(),
            body,
        })
    }
}
