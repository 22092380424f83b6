use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config::RuntimeConfig;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("email delivery is not configured")]
    NotConfigured,
    #[error("email request failed: {0}")]
    Request(String),
    #[error("email service responded with status {0}")]
    Status(u16),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

#[async_trait(?Send)]
pub trait EmailSender {
    async fn send(&self, payload: &ContactPayload) -> Result<(), DeliveryError>;
}

#[derive(Serialize)]
struct SendBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsClient {
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsClient {
    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self {
            endpoint: config.emailjs_endpoint.clone(),
            service_id: config.emailjs_service_id.trim().to_string(),
            template_id: config.emailjs_template_id.trim().to_string(),
            public_key: config.emailjs_public_key.trim().to_string(),
        }
    }

    fn is_configured(&self) -> bool {
        !(self.endpoint.trim().is_empty()
            || self.service_id.is_empty()
            || self.template_id.is_empty()
            || self.public_key.is_empty())
    }

    fn body<'a>(&'a self, payload: &'a ContactPayload) -> SendBody<'a> {
        SendBody {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: payload,
        }
    }
}

#[async_trait(?Send)]
impl EmailSender for EmailJsClient {
    async fn send(&self, payload: &ContactPayload) -> Result<(), DeliveryError> {
        if !self.is_configured() {
            tracing::warn!("email: send skipped, EmailJS identifiers missing");
            return Err(DeliveryError::NotConfigured);
        }
        let body = serde_json::to_string(&self.body(payload))
            .map_err(|err| DeliveryError::Request(err.to_string()))?;
        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|err| DeliveryError::Request(err.to_string()))?
            .send()
            .await
            .map_err(|err| {
                tracing::warn!("email: request failed: {err}");
                DeliveryError::Request(err.to_string())
            })?;
        if !response.ok() {
            tracing::warn!("email: service responded {}", response.status());
            return Err(DeliveryError::Status(response.status()));
        }
        tracing::debug!("email: message delivered");
        Ok(())
    }
}
