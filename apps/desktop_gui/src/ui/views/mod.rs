//! Storefront pages rendered inside the central panel.

mod checkout;
mod products;
mod reviews;
mod showcase;
