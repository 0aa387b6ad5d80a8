use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use shared::{
    domain::{Address, OrderDraft, OrderId, OrderReceipt},
    error::StorefrontError,
};
use tracing::info;
use uuid::Uuid;

use crate::cart::Cart;

pub const ADDRESS_SAVED_TOAST: &str = "Address updated successfully!";
pub const ADDRESS_FAILED_TOAST: &str = "Failed to update address!";
pub const MISSING_ADDRESS_TOAST: &str = "Please provide a delivery address!";
pub const EMPTY_CART_TOAST: &str = "Your cart is empty!";
pub const ORDER_PLACED_TOAST: &str = "Guest order placed successfully!";
pub const ORDER_FAILED_TOAST: &str = "Failed to place order!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Email,
    Phone,
    Name,
    Address,
    City,
    PostalCode,
    State,
    Country,
}

impl AddressField {
    pub const ALL: [AddressField; 8] = [
        AddressField::Email,
        AddressField::Phone,
        AddressField::Name,
        AddressField::Address,
        AddressField::City,
        AddressField::PostalCode,
        AddressField::State,
        AddressField::Country,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AddressField::Email => "Email",
            AddressField::Phone => "Phone",
            AddressField::Name => "Name",
            AddressField::Address => "Address",
            AddressField::City => "City",
            AddressField::PostalCode => "Postal Code",
            AddressField::State => "State",
            AddressField::Country => "Country",
        }
    }

    /// Stable key for widget identity and persistence.
    pub fn id(self) -> &'static str {
        match self {
            AddressField::Email => "address_email",
            AddressField::Phone => "address_phone",
            AddressField::Name => "address_name",
            AddressField::Address => "address_street",
            AddressField::City => "address_city",
            AddressField::PostalCode => "address_postal_code",
            AddressField::State => "address_state",
            AddressField::Country => "address_country",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            AddressField::Email => "user@example.com",
            AddressField::Phone => "phone eg. +92300 1234567",
            AddressField::Name => "Name",
            AddressField::Address => "Address",
            AddressField::City => "City",
            AddressField::PostalCode => "Postal Code",
            AddressField::State => "State",
            AddressField::Country => "Country",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: AddressField,
    pub message: &'static str,
}

/// Draft of the delivery address as typed; `validate` turns it into an
/// `Address` or reports every failing field at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressForm {
    pub email: String,
    pub phone: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub state: String,
    pub country: String,
}

impl AddressForm {
    pub fn from_address(address: &Address) -> Self {
        Self {
            email: address.email.clone(),
            phone: address.phone.clone(),
            name: address.name.clone(),
            address: address.address.clone(),
            city: address.city.clone(),
            postal_code: address.postal_code.clone(),
            state: address.state.clone(),
            country: address.country.clone(),
        }
    }

    pub fn field_mut(&mut self, field: AddressField) -> &mut String {
        match field {
            AddressField::Email => &mut self.email,
            AddressField::Phone => &mut self.phone,
            AddressField::Name => &mut self.name,
            AddressField::Address => &mut self.address,
            AddressField::City => &mut self.city,
            AddressField::PostalCode => &mut self.postal_code,
            AddressField::State => &mut self.state,
            AddressField::Country => &mut self.country,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<Address, Vec<FieldError>> {
        let mut errors = Vec::new();
        if !is_valid_email(&self.email) {
            errors.push(FieldError {
                field: AddressField::Email,
                message: "Must be valid",
            });
        }
        let required = [
            (AddressField::Phone, &self.phone, "Phone number is required"),
            (AddressField::Name, &self.name, "Name is required"),
            (AddressField::Address, &self.address, "Address is required"),
            (AddressField::City, &self.city, "City is required"),
            (
                AddressField::PostalCode,
                &self.postal_code,
                "Postal code is required",
            ),
            (AddressField::State, &self.state, "State is required"),
            (AddressField::Country, &self.country, "Country is required"),
        ];
        for (field, value, message) in required {
            if value.is_empty() {
                errors.push(FieldError { field, message });
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Address {
            email: self.email.clone(),
            phone: self.phone.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            postal_code: self.postal_code.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
        })
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutBlocked {
    EmptyCart,
    MissingAddress,
}

impl CheckoutBlocked {
    pub fn toast(self) -> &'static str {
        match self {
            CheckoutBlocked::EmptyCart => EMPTY_CART_TOAST,
            CheckoutBlocked::MissingAddress => MISSING_ADDRESS_TOAST,
        }
    }
}

/// Assembles the cash-on-delivery order from the cart, refusing when there
/// is nothing to order or nowhere to deliver it.
pub fn build_cod_draft(cart: &Cart) -> Result<OrderDraft, CheckoutBlocked> {
    if cart.is_empty() {
        return Err(CheckoutBlocked::EmptyCart);
    }
    let address = cart
        .address()
        .cloned()
        .ok_or(CheckoutBlocked::MissingAddress)?;
    Ok(OrderDraft {
        lines: cart.order_lines(),
        customer_email: address.email.clone(),
        customer_name: address.name.clone(),
        customer_phone: address.phone.clone(),
        subtotal_cents: cart.subtotal_cents(),
        shipping_address: address,
    })
}

#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn place_cod_order(&self, draft: &OrderDraft) -> Result<OrderReceipt, StorefrontError>;
}

/// Demo gateway that accepts every well-formed order after a short artificial
/// delay, long enough for the submitting state to be visible.
#[derive(Debug, Clone)]
pub struct LocalOrderGateway {
    latency: Duration,
}

impl LocalOrderGateway {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for LocalOrderGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(400))
    }
}

#[async_trait]
impl OrderGateway for LocalOrderGateway {
    async fn place_cod_order(&self, draft: &OrderDraft) -> Result<OrderReceipt, StorefrontError> {
        if draft.lines.is_empty() {
            return Err(StorefrontError::OrderRejected(
                "order has no lines".to_string(),
            ));
        }
        tokio::time::sleep(self.latency).await;
        let receipt = OrderReceipt {
            order_id: OrderId(Uuid::new_v4()),
            total_cents: draft.subtotal_cents,
            placed_at: Utc::now(),
        };
        info!(
            "checkout: cod order accepted id={} total_cents={}",
            receipt.order_id.0, receipt.total_cents
        );
        Ok(receipt)
    }
}

#[cfg(test)]
#[path = "tests/checkout_tests.rs"]
mod tests;
