//! Quote DTOs

use domain_quote::{Notification, QuoteRecord};
use serde::Serialize;

/// Body of a successful validation
#[derive(Debug, Serialize)]
pub struct ValidateQuoteResponse {
    pub record: QuoteRecord,
    pub notification: Notification,
}

impl ValidateQuoteResponse {
    pub fn new(record: QuoteRecord) -> Self {
        let notification = Notification::quote_submitted(&record);
        Self {
            record,
            notification,
        }
    }
}
