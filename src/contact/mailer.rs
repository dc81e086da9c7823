use futures::future::{select, Either};
use gloo_console as console;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;

use crate::config::{self, EmailRelayConfig};
use crate::contact::form::ContactSubmission;

#[derive(Debug, Error, PartialEq)]
pub enum DeliveryError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to send email (status {status})")]
    Rejected { status: u16 },
    #[error("The request timed out. Please try again.")]
    Timeout,
    #[error("Could not prepare the message: {0}")]
    Encode(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// No relay credentials were baked into the build; nothing left the browser.
    Demo,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub phone: &'a str,
    pub service: &'a str,
    pub message: &'a str,
    pub to_name: &'a str,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

impl<'a> EmailJsRequest<'a> {
    pub fn new(relay: &'a EmailRelayConfig, submission: &'a ContactSubmission) -> Self {
        Self {
            service_id: &relay.service_id,
            template_id: &relay.template_id,
            user_id: &relay.public_key,
            template_params: TemplateParams {
                from_name: &submission.name,
                from_email: &submission.email,
                phone: submission.phone.as_deref().unwrap_or("Not provided"),
                service: &submission.service,
                message: &submission.message,
                to_name: config::MAIL_RECIPIENT,
            },
        }
    }
}

pub fn check_status(status: u16) -> Result<Delivery, DeliveryError> {
    if status == 200 {
        Ok(Delivery::Sent)
    } else {
        Err(DeliveryError::Rejected { status })
    }
}

async fn post(payload: EmailJsRequest<'_>) -> Result<Delivery, DeliveryError> {
    let request = Request::post(config::EMAILJS_ENDPOINT)
        .header("Content-Type", "application/json")
        .json(&payload)
        .map_err(|e| DeliveryError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| DeliveryError::Network(e.to_string()))?;

    check_status(response.status())
}

/// Relays a validated submission through EmailJS. Resolves within
/// `SUBMIT_TIMEOUT_MS` whatever the network does.
pub async fn send_contact_email(submission: &ContactSubmission) -> Result<Delivery, DeliveryError> {
    let Some(relay) = EmailRelayConfig::from_env() else {
        console::warn!("EmailJS is not configured. Contact form is running in demo mode.");
        return Ok(Delivery::Demo);
    };

    let send = Box::pin(post(EmailJsRequest::new(&relay, submission)));
    let timeout = TimeoutFuture::new(config::SUBMIT_TIMEOUT_MS);

    let result = match select(send, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(DeliveryError::Timeout),
    };
    if let Err(e) = &result {
        console::error!(format!("EmailJS error: {}", e));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relay() -> EmailRelayConfig {
        EmailRelayConfig {
            service_id: "service_abc".into(),
            template_id: "template_xyz".into(),
            public_key: "pk_123".into(),
        }
    }

    fn submission(phone: Option<&str>) -> ContactSubmission {
        ContactSubmission {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: phone.map(str::to_string),
            service: "web-development".into(),
            message: "We need a new storefront.".into(),
        }
    }

    #[test]
    fn payload_matches_relay_schema() {
        let relay = relay();
        let submission = submission(Some("+1 555 0100"));
        let json = serde_json::to_value(EmailJsRequest::new(&relay, &submission)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "from_name": "Jane Doe",
                    "from_email": "jane@example.com",
                    "phone": "+1 555 0100",
                    "service": "web-development",
                    "message": "We need a new storefront.",
                    "to_name": "Yuvaog Team"
                }
            })
        );
    }

    #[test]
    fn missing_phone_is_spelled_out() {
        let relay = relay();
        let submission = submission(None);
        let payload = EmailJsRequest::new(&relay, &submission);
        assert_eq!(payload.template_params.phone, "Not provided");
    }

    #[test]
    fn only_200_counts_as_sent() {
        assert_eq!(check_status(200), Ok(Delivery::Sent));
        assert_eq!(check_status(201), Err(DeliveryError::Rejected { status: 201 }));
        assert_eq!(check_status(400), Err(DeliveryError::Rejected { status: 400 }));
    }

    #[test]
    fn timeout_message_is_user_facing() {
        assert_eq!(
            DeliveryError::Timeout.to_string(),
            "The request timed out. Please try again."
        );
    }
}
