//! UI layer for the storefront GUI: app shell, themes, shared widgets, and
//! the per-page views.

pub mod app;
pub mod media;
pub mod theme;
pub mod views;
pub mod widgets;

pub use app::StorefrontApp;
