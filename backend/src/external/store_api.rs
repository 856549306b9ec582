//! HTTP client for the upstream store API
//!
//! The store API is a Django REST backend that owns all record storage.
//! Every resource exposes the same CRUD surface under its own path, so a
//! single generic client covers customers, products, vendors, sales,
//! purchases and payments. Purchases are the one quirk: the upstream
//! only accepts them as multipart form data.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use shared::models::{
    Customer, NewCustomer, NewPayment, NewProduct, NewPurchase, NewSale, NewVendor, Payment,
    Product, Sale, Vendor, WholesalePurchase,
};
use shared::validation::line_total_consistent;

use crate::config::UpstreamConfig;
use crate::error::{AppError, AppResult};

/// A record type served by the store API
pub trait ApiResource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Write payload accepted by create and update
    type Payload: Serialize + DeserializeOwned + Validate + Send + Sync + 'static;

    /// URL path segment, e.g. "products"
    const PATH: &'static str;

    /// Singular name used in error messages
    const NAME: &'static str;

    /// Whether writes must be sent as multipart form data
    const MULTIPART: bool = false;

    /// Payload checks beyond what the derive-based rules express
    fn validate_payload(payload: &Self::Payload) -> AppResult<()> {
        payload.validate()?;
        Ok(())
    }
}

impl ApiResource for Customer {
    type Payload = NewCustomer;
    const PATH: &'static str = "customers";
    const NAME: &'static str = "customer";
}

impl ApiResource for Product {
    type Payload = NewProduct;
    const PATH: &'static str = "products";
    const NAME: &'static str = "product";
}

impl ApiResource for Vendor {
    type Payload = NewVendor;
    const PATH: &'static str = "vendors";
    const NAME: &'static str = "vendor";
}

impl ApiResource for Sale {
    type Payload = NewSale;
    const PATH: &'static str = "sales";
    const NAME: &'static str = "sale";

    fn validate_payload(payload: &NewSale) -> AppResult<()> {
        payload.validate()?;
        if payload.items.is_empty() {
            return Err(AppError::Validation {
                field: "items".to_string(),
                message: "at least one line item is required".to_string(),
            });
        }
        for item in &payload.items {
            if !line_total_consistent(item) {
                return Err(AppError::Validation {
                    field: "items".to_string(),
                    message: "line total must equal quantity times unit price".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl ApiResource for WholesalePurchase {
    type Payload = NewPurchase;
    // The upstream never renamed its collection; only our local route is
    // called /purchases.
    const PATH: &'static str = "wholesalepurchases";
    const NAME: &'static str = "purchase";
    const MULTIPART: bool = true;
}

impl ApiResource for Payment {
    type Payload = NewPayment;
    const PATH: &'static str = "payments";
    const NAME: &'static str = "payment";
}

/// Store API client
#[derive(Clone)]
pub struct StoreApi {
    client: Client,
    base_url: String,
    token: String,
}

impl StoreApi {
    /// Create a client from the upstream configuration
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}/", self.base_url, path)
    }

    fn item_url(&self, path: &str, id: i64) -> String {
        format!("{}/{}/{}/", self.base_url, path, id)
    }

    fn auth_header(&self) -> String {
        format!("Token {}", self.token)
    }

    /// Fetch every record of a resource
    pub async fn list<R: ApiResource>(&self) -> AppResult<Vec<R>> {
        let response = self
            .client
            .get(self.url(R::PATH))
            .header("Authorization", self.auth_header())
            .send()
            .await?;
        let body = check_status::<R>(response, None).await?;

        parse_list(body.json().await?)
            .map_err(|e| AppError::Internal(format!("Failed to parse {} list: {}", R::NAME, e)))
    }

    /// Fetch one record by id
    pub async fn get<R: ApiResource>(&self, id: i64) -> AppResult<R> {
        let response = self
            .client
            .get(self.item_url(R::PATH, id))
            .header("Authorization", self.auth_header())
            .send()
            .await?;
        let body = check_status::<R>(response, Some(id)).await?;

        Ok(body.json().await?)
    }

    /// Create a record
    pub async fn create<R: ApiResource>(&self, payload: &R::Payload) -> AppResult<R> {
        let request = self
            .client
            .post(self.url(R::PATH))
            .header("Authorization", self.auth_header());
        let request = if R::MULTIPART {
            request.multipart(multipart_form(payload)?)
        } else {
            request.json(payload)
        };

        let response = request.send().await?;
        let body = check_status::<R>(response, None).await?;

        Ok(body.json().await?)
    }

    /// Replace a record
    pub async fn update<R: ApiResource>(&self, id: i64, payload: &R::Payload) -> AppResult<R> {
        let request = self
            .client
            .put(self.item_url(R::PATH, id))
            .header("Authorization", self.auth_header());
        let request = if R::MULTIPART {
            request.multipart(multipart_form(payload)?)
        } else {
            request.json(payload)
        };

        let response = request.send().await?;
        let body = check_status::<R>(response, Some(id)).await?;

        Ok(body.json().await?)
    }

    /// Delete a record
    pub async fn delete<R: ApiResource>(&self, id: i64) -> AppResult<()> {
        let response = self
            .client
            .delete(self.item_url(R::PATH, id))
            .header("Authorization", self.auth_header())
            .send()
            .await?;
        check_status::<R>(response, Some(id)).await?;
        Ok(())
    }
}

/// Map non-success responses to application errors
async fn check_status<R: ApiResource>(
    response: reqwest::Response,
    id: Option<i64>,
) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        let name = match id {
            Some(id) => format!("{} {}", R::NAME, id),
            None => R::NAME.to_string(),
        };
        return Err(AppError::NotFound(name));
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(
        resource = R::PATH,
        status = status.as_u16(),
        "store API request failed"
    );
    Err(AppError::UpstreamApi {
        status: status.as_u16(),
        message: if body.is_empty() {
            format!("store API returned {}", status)
        } else {
            body
        },
    })
}

/// Accept both a bare JSON array and a paginated `{"results": [...]}` body
fn parse_list<R: DeserializeOwned>(value: serde_json::Value) -> Result<Vec<R>, serde_json::Error> {
    match value {
        serde_json::Value::Object(mut map) => {
            let results = map
                .remove("results")
                .unwrap_or(serde_json::Value::Array(vec![]));
            serde_json::from_value(results)
        }
        other => serde_json::from_value(other),
    }
}

/// Flatten a payload into text form fields.
///
/// Nested values and nulls are skipped; strings go through unquoted.
fn multipart_form<P: Serialize>(payload: &P) -> AppResult<reqwest::multipart::Form> {
    let value = serde_json::to_value(payload)
        .map_err(|e| AppError::Internal(format!("Failed to serialize payload: {}", e)))?;
    let serde_json::Value::Object(map) = value else {
        return Err(AppError::Internal(
            "multipart payload must be a JSON object".to_string(),
        ));
    };

    let mut form = reqwest::multipart::Form::new();
    for (key, value) in map {
        let text = match value {
            serde_json::Value::Null => continue,
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        form = form.text(key, text);
    }
    Ok(form)
}
