//! UI/backend events and error modeling for the desktop GUI controller.

use shared::domain::{OrderReceipt, Product, Review};

pub enum UiEvent {
    Info(String),
    CatalogLoaded(Vec<Product>),
    CatalogFailed(UiError),
    ReviewsLoaded(Vec<Review>),
    OrderPlaced(OrderReceipt),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Catalog,
    Checkout,
    Validation,
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadCatalog,
    PlaceOrder,
}

/// Folds a raw catalog error into the line shown in the catalog banner.
pub fn classify_catalog_failure(message: &str) -> String {
    let lower = message.to_ascii_lowercase();
    if lower.contains("catalog source failed") || lower.contains("no such file") {
        "Catalog unavailable; check the catalog path and use Reload.".to_string()
    } else if lower.contains("catalog has no products") {
        "Catalog is empty; nothing to sell yet.".to_string()
    } else {
        format!("Catalog error: {message}")
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("catalog") {
            UiErrorCategory::Catalog
        } else if message_lower.contains("order")
            || message_lower.contains("checkout")
            || message_lower.contains("cart")
        {
            UiErrorCategory::Checkout
        } else if message_lower.contains("required")
            || message_lower.contains("invalid")
            || message_lower.contains("must be valid")
            || message_lower.contains("missing")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_wording_lands_in_the_catalog_bucket() {
        let err = UiError::from_message(
            UiErrorContext::LoadCatalog,
            "catalog source failed: read error",
        );
        assert_eq!(err.category(), UiErrorCategory::Catalog);
        assert_eq!(err.context(), UiErrorContext::LoadCatalog);
    }

    #[test]
    fn order_rejections_land_in_the_checkout_bucket() {
        let err = UiError::from_message(UiErrorContext::PlaceOrder, "order rejected: cart empty");
        assert_eq!(err.category(), UiErrorCategory::Checkout);
    }

    #[test]
    fn transport_wording_wins_when_nothing_domain_specific_matches() {
        let err = UiError::from_message(UiErrorContext::PlaceOrder, "connection reset by peer");
        assert_eq!(err.category(), UiErrorCategory::Transport);
    }

    #[test]
    fn unmatched_messages_stay_unknown_but_keep_their_text() {
        let err = UiError::from_message(UiErrorContext::BackendStartup, "something odd happened");
        assert_eq!(err.category(), UiErrorCategory::Unknown);
        assert_eq!(err.message(), "something odd happened");
    }

    #[test]
    fn catalog_failure_lines_are_user_facing() {
        let line = classify_catalog_failure("catalog source failed: /tmp/x.json: No such file");
        assert_eq!(
            line,
            "Catalog unavailable; check the catalog path and use Reload."
        );
        let line = classify_catalog_failure("catalog has no products");
        assert_eq!(line, "Catalog is empty; nothing to sell yet.");
    }
}
