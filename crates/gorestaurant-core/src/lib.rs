// Screen logic for GoRestaurant - everything between the HTTP client and the UI
pub mod backend;
pub mod cart;
pub mod config;
pub mod detail;
pub mod error;
pub mod format;
pub mod models;
pub mod orders;

pub use backend::Backend;
pub use cart::CartState;
pub use config::Config;
pub use detail::DetailController;
pub use error::Error;
pub use format::PriceFormatter;
pub use models::{Extra, Food, OrderSummary};
pub use orders::OrderListController;

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
