//! Hand-off point for consultation requests.
//!
//! The contact form talks to an [`InquiryDesk`]. The site ships with
//! [`SimulatedDesk`], which waits a moment and accepts everything; a mail or
//! CRM integration would implement the same trait.

use std::rc::Rc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::form::FormState;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
}

impl From<&FormState> for Inquiry {
    fn from(form: &FormState) -> Self {
        let phone = form.phone.trim();
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            service: form.service.clone(),
            message: form.message.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Receipt {
    pub reference: String,
    pub received_at: DateTime<Utc>,
}

impl Receipt {
    pub fn issue(received_at: DateTime<Utc>) -> Self {
        Self {
            reference: format!("INQ-{}", received_at.format("%Y%m%d%H%M%S%3f")),
            received_at,
        }
    }
}

#[derive(Debug, Error)]
pub enum InquiryError {
    #[error("inquiry desk unavailable: {0}")]
    Unavailable(String),
    #[error("inquiry rejected: {0}")]
    Rejected(String),
}

#[async_trait(?Send)]
pub trait InquiryDesk {
    async fn submit(&self, inquiry: Inquiry) -> Result<Receipt, InquiryError>;
}

/// Accepts every inquiry after [`config::SUBMIT_DELAY_MS`]. Nothing leaves
/// the browser.
#[derive(Clone, Debug)]
pub struct SimulatedDesk {
    delay_ms: u32,
}

impl Default for SimulatedDesk {
    fn default() -> Self {
        Self { delay_ms: config::SUBMIT_DELAY_MS }
    }
}

#[async_trait(?Send)]
impl InquiryDesk for SimulatedDesk {
    async fn submit(&self, inquiry: Inquiry) -> Result<Receipt, InquiryError> {
        match serde_json::to_string(&inquiry) {
            Ok(payload) => debug!("simulated inquiry payload: {}", payload),
            Err(e) => debug!("could not render inquiry payload: {}", e),
        }
        TimeoutFuture::new(self.delay_ms).await;
        let receipt = Receipt::issue(Utc::now());
        info!("inquiry {} accepted for {}", receipt.reference, inquiry.service);
        Ok(receipt)
    }
}

/// Shared handle passed to the contact section as a prop.
#[derive(Clone)]
pub struct DeskHandle(pub Rc<dyn InquiryDesk>);

impl DeskHandle {
    pub fn new(desk: impl InquiryDesk + 'static) -> Self {
        Self(Rc::new(desk))
    }
}

impl Default for DeskHandle {
    fn default() -> Self {
        Self::new(SimulatedDesk::default())
    }
}

impl PartialEq for DeskHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::form::tests::filled;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    /// Answers immediately, for driving the submit flow off the browser.
    pub(crate) struct InstantDesk;

    #[async_trait(?Send)]
    impl InquiryDesk for InstantDesk {
        async fn submit(&self, _inquiry: Inquiry) -> Result<Receipt, InquiryError> {
            Ok(Receipt::issue(Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()))
        }
    }

    #[test]
    fn inquiry_trims_and_drops_blank_phone() {
        let mut form = (*filled()).clone();
        form.name = "  Ngozi Eze ".into();
        form.phone = "   ".into();
        let inquiry = Inquiry::from(&form);
        assert_eq!(inquiry.name, "Ngozi Eze");
        assert_eq!(inquiry.phone, None);

        let json = serde_json::to_value(&inquiry).unwrap();
        assert!(json.get("phone").is_none());
        assert_eq!(json["service"], "Family Law");
    }

    #[test]
    fn receipt_reference_encodes_timestamp() {
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        assert_eq!(Receipt::issue(at).reference, "INQ-20250314093000000");
    }

    #[test]
    fn error_messages_are_readable() {
        let err = InquiryError::Unavailable("timeout".into());
        assert_eq!(err.to_string(), "inquiry desk unavailable: timeout");
        let err = InquiryError::Rejected("intake closed".into());
        assert_eq!(err.to_string(), "inquiry rejected: intake closed");
    }

    #[test]
    fn simulated_desk_waits_fixed_delay() {
        assert_eq!(SimulatedDesk::default().delay_ms, config::SUBMIT_DELAY_MS);
        assert_eq!(config::SUBMIT_DELAY_MS, 1_500);
    }

    #[test]
    fn desk_handles_compare_by_identity() {
        let a = DeskHandle::new(InstantDesk);
        let b = a.clone();
        assert!(a == b);
        assert!(a != DeskHandle::new(InstantDesk));
    }
}
