//! Contract with the transactional email service.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::{config::MailConfig, error::MailError};

/// Snapshot of the contact form fields, sent as template parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A send request addressed to one service/template pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailRequest {
    pub service_id: String,
    pub template_id: String,
    /// Public account key.
    pub user_id: String,
    pub template_params: ContactFields,
}

impl MailRequest {
    pub fn new(config: &MailConfig, params: ContactFields) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: params,
        }
    }
}

/// Success payload from the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MailReceipt {
    pub status: u16,
    pub text: String,
}

/// Route a send takes to the mail service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailDelivery {
    /// JSON `POST` to the configured endpoint, authenticated by the public key.
    Rest,
    /// The `emailjs` SDK the page loads and initializes itself.
    PageSdk,
}

/// The mail-sending collaborator.
///
/// Only success or failure is surfaced; delivery is not confirmed.
pub trait MailTransport {
    fn send(&self, request: &MailRequest) -> impl Future<Output = Result<MailReceipt, MailError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let config = MailConfig {
            public_key: "pk_123".to_string(),
            ..MailConfig::default()
        };
        let request = MailRequest::new(
            &config,
            ContactFields {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                subject: "Hello".to_string(),
                message: "Nice site".to_string(),
            },
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["service_id"], "service_mcqdcm7");
        assert_eq!(json["template_id"], "template_en7uyv7");
        assert_eq!(json["user_id"], "pk_123");
        assert_eq!(json["template_params"]["email"], "ada@example.com");
        assert_eq!(json["template_params"]["message"], "Nice site");
    }

    #[test]
    fn test_delivery_follows_public_key() {
        assert_eq!(MailConfig::default().delivery(), MailDelivery::PageSdk);

        let config = MailConfig {
            public_key: "pk_123".to_string(),
            ..MailConfig::default()
        };
        assert_eq!(config.delivery(), MailDelivery::Rest);
    }
}
