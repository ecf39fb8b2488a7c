// Order history screen
use std::sync::Arc;

use tracing::info;

use crate::{backend::Backend, format::PriceFormatter, models::OrderSummary, Error, Result};

/// Controller behind the "my orders" list
pub struct OrderListController {
    backend: Arc<dyn Backend>,
    formatter: PriceFormatter,
    orders: Vec<OrderSummary>,
}

impl OrderListController {
    pub fn new(backend: Arc<dyn Backend>, formatter: PriceFormatter) -> Self {
        Self {
            backend,
            formatter,
            orders: Vec::new(),
        }
    }

    /// Fetch all orders, in backend order. On failure the previous list stays.
    pub async fn load_orders(&mut self) -> Result<&[OrderSummary]> {
        let records = self.backend.fetch_orders().await.map_err(Error::Fetch)?;

        self.orders = records
            .into_iter()
            .map(|record| OrderSummary::from_record(record, &self.formatter))
            .collect();

        info!("Loaded {} orders", self.orders.len());
        Ok(&self.orders)
    }

    pub fn orders(&self) -> &[OrderSummary] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use gorestaurant_api::{ApiError, OrderId, OrderRecord};
    use rust_decimal::Decimal;

    fn order(id: u64, price: Decimal) -> OrderRecord {
        OrderRecord {
            id: OrderId::Number(id),
            name: format!("Order {}", id),
            description: "Prato".into(),
            price,
            thumbnail_url: Some(format!("{}.png", id)),
        }
    }

    #[tokio::test]
    async fn test_empty_collection() {
        let mut backend = MockBackend::new();
        backend.expect_fetch_orders().returning(|| Ok(Vec::new()));
        let mut list = OrderListController::new(Arc::new(backend), PriceFormatter::default());

        let orders = list.load_orders().await.unwrap();

        assert!(orders.is_empty());
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_orders_keep_fetch_order_and_get_formatted() {
        let mut backend = MockBackend::new();
        backend.expect_fetch_orders().returning(|| {
            Ok(vec![
                order(7, Decimal::new(199, 1)),
                order(2, Decimal::from(1250)),
                order(5, Decimal::new(5, 1)),
            ])
        });
        let mut list = OrderListController::new(Arc::new(backend), PriceFormatter::default());

        list.load_orders().await.unwrap();

        let ids: Vec<String> = list.orders().iter().map(|o| o.id.to_string()).collect();
        assert_eq!(ids, vec!["7", "2", "5"]);
        let prices: Vec<&str> = list
            .orders()
            .iter()
            .map(|o| o.formatted_price.as_str())
            .collect();
        assert_eq!(prices, vec!["R$ 19,90", "R$ 1.250,00", "R$ 0,50"]);
        assert_eq!(list.len(), 3);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_list() {
        let mut backend = MockBackend::new();
        let mut calls = 0;
        backend.expect_fetch_orders().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![order(1, Decimal::ONE)])
            } else {
                Err(ApiError::RequestFailed("Status 503".into()))
            }
        });
        let mut list = OrderListController::new(Arc::new(backend), PriceFormatter::default());

        list.load_orders().await.unwrap();
        let result = list.load_orders().await;

        assert!(matches!(result, Err(Error::Fetch(_))));
        assert_eq!(list.len(), 1);
    }
}
