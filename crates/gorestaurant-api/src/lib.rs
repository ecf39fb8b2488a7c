// HTTP client for the GoRestaurant backend
pub mod client;
pub mod records;

// Re-export common types
pub use client::{ApiError, GoRestaurantClient, Result};
pub use records::{ExtraRecord, FavoritePayload, FoodRecord, NewOrder, OrderId, OrderRecord};
