use std::time::Duration;

use anyhow::Context;
use reqwest::{
    Client,
    StatusCode,
    Url,
};

use crate::domain::SubscriberEmail;
use crate::subscription_client::errors::SubscriptionError;
use crate::subscription_client::request::SubscriptionRequest;

const SUBSCRIPTIONS_PATH: &str = "client/subscriptions/";

/// Client for the third-party marketing service that owns the subscription
/// list. One instance is shared across the whole app.
#[derive(Debug)]
pub struct SubscriptionClient {
    http_client: Client,
    base_url: Url,
    company_id: String,
    list_id: Option<String>,
    revision: String,
}

impl SubscriptionClient {
    pub fn new(
        base_url: Url,
        company_id: String,
        list_id: Option<String>,
        revision: String,
        timeout_secs: u64,
    ) -> Result<Self, anyhow::Error> {
        Ok(Self {
            http_client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .context(format!(
                    "Error creating subscription client with:\nbase_url: {}\ncompany_id: \
                     {}\nrevision: {}\ntimeout_secs: {}",
                    base_url, company_id, revision, timeout_secs
                ))?,
            base_url,
            company_id,
            list_id,
            revision,
        })
    }

    /// Subscribe `email` to the configured account (and list, when one is
    /// configured). Exactly one request is sent per call; the vendor
    /// answering `202 Accepted` is the only success signal.
    pub async fn subscribe(&self, email: &SubscriberEmail) -> Result<(), SubscriptionError> {
        let response = self
            .http_client
            .post(self.base_url.join(SUBSCRIPTIONS_PATH)?)
            .query(&[("company_id", self.company_id.as_str())])
            .header("Content-Type", "application/json")
            .header("revision", self.revision.as_str())
            .json(&SubscriptionRequest::new(
                email.as_ref(),
                self.list_id.as_deref(),
            ))
            .send()
            .await?;

        if response.status() != StatusCode::ACCEPTED {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                "subscription for {} rejected with status: {} and body: {}",
                email.as_ref(),
                status,
                body
            );
            return Err(SubscriptionError::RejectedSubscription { status, body });
        }
        Ok(())
    }
}
