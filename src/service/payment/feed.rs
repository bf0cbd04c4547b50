//! Sources of incoming payments.

use async_trait::async_trait;

use crate::{error::AppError, model::payment::IncomingPayment};

/// Source of recently received payments.
#[async_trait]
pub trait PaymentFeed: Send + Sync {
    /// Returns payments received recently. Entries may repeat between calls.
    async fn fetch_recent(&self) -> Result<Vec<IncomingPayment>, AppError>;
}

/// Payment feed served as a JSON array over HTTP.
pub struct HttpPaymentFeed {
    http_client: reqwest::Client,
    url: String,
}

impl HttpPaymentFeed {
    pub fn new(http_client: reqwest::Client, url: String) -> Self {
        Self { http_client, url }
    }
}

#[async_trait]
impl PaymentFeed for HttpPaymentFeed {
    async fn fetch_recent(&self) -> Result<Vec<IncomingPayment>, AppError> {
        let payments = self
            .http_client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<IncomingPayment>>()
            .await?;

        Ok(payments)
    }
}

/// Feed returning a fixed list, used in tests.
#[cfg(test)]
pub struct StaticPaymentFeed(pub Vec<IncomingPayment>);

#[cfg(test)]
#[async_trait]
impl PaymentFeed for StaticPaymentFeed {
    async fn fetch_recent(&self) -> Result<Vec<IncomingPayment>, AppError> {
        Ok(self.0.clone())
    }
}
