// Seam between the controllers and the HTTP client
use async_trait::async_trait;
use gorestaurant_api::{FavoritePayload, FoodRecord, GoRestaurantClient, NewOrder, OrderRecord};

/// Remote operations the screens depend on
///
/// `GoRestaurantClient` is the real implementation; tests swap in a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    async fn fetch_food(&self, id: u64) -> gorestaurant_api::Result<FoodRecord>;
    async fn fetch_orders(&self) -> gorestaurant_api::Result<Vec<OrderRecord>>;
    async fn count_orders(&self) -> gorestaurant_api::Result<usize>;
    async fn add_favorite(&self, favorite: FavoritePayload) -> gorestaurant_api::Result<()>;
    async fn remove_favorite(&self, id: u64) -> gorestaurant_api::Result<()>;
    async fn submit_order(&self, order: NewOrder) -> gorestaurant_api::Result<()>;
}

#[async_trait]
impl Backend for GoRestaurantClient {
    async fn fetch_food(&self, id: u64) -> gorestaurant_api::Result<FoodRecord> {
        self.get_food(id).await
    }

    async fn fetch_orders(&self) -> gorestaurant_api::Result<Vec<OrderRecord>> {
        self.list_orders().await
    }

    async fn count_orders(&self) -> gorestaurant_api::Result<usize> {
        GoRestaurantClient::count_orders(self).await
    }

    async fn add_favorite(&self, favorite: FavoritePayload) -> gorestaurant_api::Result<()> {
        GoRestaurantClient::add_favorite(self, &favorite).await
    }

    async fn remove_favorite(&self, id: u64) -> gorestaurant_api::Result<()> {
        GoRestaurantClient::remove_favorite(self, id).await
    }

    async fn submit_order(&self, order: NewOrder) -> gorestaurant_api::Result<()> {
        self.create_order(&order).await
    }
}
