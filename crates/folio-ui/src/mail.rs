//! Clients for the transactional email service.

use folio_core::{
    FolioError, MailDelivery, MailError, MailReceipt, MailRequest, MailTransport, Result,
    config::MailConfig,
};
use gloo_net::http::Request;
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    /// `emailjs.send` from the SDK the page loads and initializes.
    #[wasm_bindgen(catch, js_namespace = emailjs, js_name = send)]
    fn emailjs_send(
        service_id: &str,
        template_id: &str,
        params: &JsValue,
    ) -> std::result::Result<Promise, JsValue>;
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Whether the page defines the `emailjs` global.
pub fn page_sdk_available() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("emailjs")).unwrap_or(false)
}

/// Sends contact form messages through the service's REST endpoint.
#[derive(Debug, Clone)]
pub struct EmailJsTransport {
    endpoint: String,
}

impl EmailJsTransport {
    pub fn new(config: &MailConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
        }
    }
}

impl MailTransport for EmailJsTransport {
    async fn send(&self, request: &MailRequest) -> std::result::Result<MailReceipt, MailError> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| MailError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| MailError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| MailError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(MailError::Status { status, text });
        }

        Ok(MailReceipt { status, text })
    }
}

/// Sends through the page's `emailjs` SDK, which holds the account key.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailJsSdk;

impl MailTransport for EmailJsSdk {
    async fn send(&self, request: &MailRequest) -> std::result::Result<MailReceipt, MailError> {
        let params = serde_wasm_bindgen::to_value(&request.template_params)
            .map_err(|e| MailError::Encode(e.to_string()))?;
        let promise = emailjs_send(&request.service_id, &request.template_id, &params)
            .map_err(|e| MailError::Network(describe(&e)))?;

        match JsFuture::from(promise).await {
            // A resolved promise means the service accepted the message.
            Ok(value) => Ok(serde_wasm_bindgen::from_value(value).unwrap_or(MailReceipt {
                status: 200,
                text: String::new(),
            })),
            Err(err) => match serde_wasm_bindgen::from_value::<MailReceipt>(err.clone()) {
                Ok(MailReceipt { status, text }) => Err(MailError::Status { status, text }),
                Err(_) => Err(MailError::Network(describe(&err))),
            },
        }
    }
}

/// The transport picked for the configured delivery route.
#[derive(Debug, Clone)]
pub enum MailClient {
    Rest(EmailJsTransport),
    PageSdk(EmailJsSdk),
}

impl MailClient {
    /// Fails when no key is configured and the page has no SDK to fall
    /// back on.
    pub fn for_config(config: &MailConfig) -> Result<Self> {
        match config.delivery() {
            MailDelivery::Rest => Ok(Self::Rest(EmailJsTransport::new(config))),
            MailDelivery::PageSdk if page_sdk_available() => Ok(Self::PageSdk(EmailJsSdk)),
            MailDelivery::PageSdk => Err(FolioError::config(
                "mail.public_key is empty and the page has no emailjs SDK",
            )),
        }
    }
}

impl MailTransport for MailClient {
    async fn send(&self, request: &MailRequest) -> std::result::Result<MailReceipt, MailError> {
        match self {
            MailClient::Rest(transport) => transport.send(request).await,
            MailClient::PageSdk(sdk) => sdk.send(request).await,
        }
    }
}
