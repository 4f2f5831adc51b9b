//! Transaction list client

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::error::ApiError;
use crate::model::{TransactionList, TransactionType};
use crate::Result;

/// Parameters for `GET /extended/v1/tx`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionListRequest {
    pub api_server: String,
    pub types: Vec<TransactionType>,
    pub limit: Option<u32>,
}

impl TransactionListRequest {
    pub fn new(api_server: impl Into<String>) -> Self {
        Self {
            api_server: api_server.into(),
            types: Vec::new(),
            limit: None,
        }
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = TransactionType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Build the request URL. Each type becomes its own `type=` pair.
    pub fn url(&self) -> Result<Url> {
        let base = self.api_server.trim().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/extended/v1/tx"))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.api_server, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ApiError::InvalidUrl(self.api_server.clone()));
        }

        if !self.types.is_empty() || self.limit.is_some() {
            let mut pairs = url.query_pairs_mut();
            for tx_type in &self.types {
                pairs.append_pair("type", tx_type.as_str());
            }
            if let Some(limit) = self.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
        }

        Ok(url)
    }
}

/// Source of recent transactions
#[async_trait]
pub trait TransactionApi: Send + Sync {
    async fn fetch_tx_list(&self, request: &TransactionListRequest) -> Result<TransactionList>;
}

/// `TransactionApi` over HTTP
#[derive(Clone)]
pub struct HttpTransactionApi {
    http: Client,
}

impl HttpTransactionApi {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl TransactionApi for HttpTransactionApi {
    async fn fetch_tx_list(&self, request: &TransactionListRequest) -> Result<TransactionList> {
        let url = request.url()?;

        tracing::debug!(url = %url, "Fetching transaction list");

        let resp = self.http.get(url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            tracing::warn!(status, api_server = %request.api_server, "Transaction list request failed");
            return Err(ApiError::Server {
                status,
                message: resp.text().await.unwrap_or_default(),
            });
        }

        let body = resp.text().await?;
        let list: TransactionList = serde_json::from_str(&body)?;

        tracing::debug!(count = list.results.len(), "Fetched transaction list");

        Ok(list)
    }
}
