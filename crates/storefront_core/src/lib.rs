pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod grid;
pub mod reviews;
pub mod showcase;

pub use cart::Cart;
pub use catalog::{demo_products, demo_reviews, BundledCatalog, CatalogSource, JsonFileCatalog};
pub use checkout::{build_cod_draft, AddressForm, CheckoutBlocked, LocalOrderGateway, OrderGateway};
pub use grid::{PriceBand, ProductGrid, SortKey};
pub use reviews::ReviewHistory;
pub use showcase::{Direction, Phase, ShowcaseController, TRANSITION_DURATION};
