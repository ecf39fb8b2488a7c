// Food detail screen: extras, quantities, favorite flag and checkout
use std::sync::Arc;

use gorestaurant_api::{FavoritePayload, NewOrder};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    backend::Backend,
    cart::CartState,
    config::OrderIdStrategy,
    format::PriceFormatter,
    models::{Extra, Food},
    Error, Result,
};

/// Controller behind the food detail screen
///
/// Built by [`DetailController::load`], so a controller always holds a
/// loaded food. State is only replaced after every remote call it depends
/// on has succeeded; dropping an in-flight future leaves it untouched.
pub struct DetailController {
    backend: Arc<dyn Backend>,
    formatter: PriceFormatter,
    id_strategy: OrderIdStrategy,
    cart: CartState,
    favorite: bool,
}

impl DetailController {
    /// Fetch a food and start a fresh selection for it
    pub async fn load(
        backend: Arc<dyn Backend>,
        formatter: PriceFormatter,
        food_id: u64,
    ) -> Result<Self> {
        let cart = fetch_cart(backend.as_ref(), &formatter, food_id).await?;
        info!(
            "Loaded food {} with {} extras",
            food_id,
            cart.extras().len()
        );

        Ok(Self {
            backend,
            formatter,
            id_strategy: OrderIdStrategy::default(),
            cart,
            favorite: false,
        })
    }

    pub fn with_id_strategy(mut self, id_strategy: OrderIdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    /// For callers that already know the food is bookmarked
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Fetch the same food again and start the selection over.
    ///
    /// The favorite flag survives: it tracks the backend, not the selection.
    /// Keeps the old state on failure.
    pub async fn reload(&mut self) -> Result<()> {
        let food_id = self.cart.food().id;
        let cart = fetch_cart(self.backend.as_ref(), &self.formatter, food_id).await?;
        self.cart = cart;
        Ok(())
    }

    pub fn food(&self) -> &Food {
        self.cart.food()
    }

    pub fn extras(&self) -> &[Extra] {
        self.cart.extras()
    }

    pub fn extra(&self, id: u64) -> Option<&Extra> {
        self.cart.extra(id)
    }

    pub fn quantity(&self) -> u32 {
        self.cart.quantity()
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// Icon name for the header button
    pub fn favorite_icon(&self) -> &'static str {
        if self.favorite {
            "favorite"
        } else {
            "favorite-border"
        }
    }

    pub fn increment_extra(&mut self, extra_id: u64) {
        if !self.cart.increment_extra(extra_id) {
            debug!("Extra {} on food {} left as is", extra_id, self.cart.food().id);
        }
    }

    pub fn decrement_extra(&mut self, extra_id: u64) {
        if !self.cart.decrement_extra(extra_id) {
            debug!("No extra {} on food {}", extra_id, self.cart.food().id);
        }
    }

    pub fn increment_food(&mut self) {
        if !self.cart.increment_food() {
            debug!("Quantity of food {} left as is", self.cart.food().id);
        }
    }

    pub fn decrement_food(&mut self) {
        // Floors at one; never refused
        self.cart.decrement_food();
    }

    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    pub fn formatted_total(&self) -> String {
        self.formatter.format(self.cart.total())
    }

    /// Add or remove the food from favorites.
    ///
    /// The flag only flips once the backend accepted the change.
    pub async fn toggle_favorite(&mut self) -> Result<bool> {
        let food = self.cart.food();

        if self.favorite {
            self.backend
                .remove_favorite(food.id)
                .await
                .map_err(Error::Submit)?;
        } else {
            let favorite = FavoritePayload {
                id: food.id,
                name: food.name.clone(),
                description: food.description.clone(),
                price: food.price,
                image_url: food.image_url.clone(),
            };
            self.backend
                .add_favorite(favorite)
                .await
                .map_err(Error::Submit)?;
        }

        self.favorite = !self.favorite;
        info!("Food {} favorite: {}", self.cart.food().id, self.favorite);
        Ok(self.favorite)
    }

    /// Place an order for the current selection and return what was sent
    pub async fn submit_order(&self) -> Result<NewOrder> {
        let id = match self.id_strategy {
            OrderIdStrategy::Sequential => {
                // count + 1 races with other clients; see OrderIdStrategy
                let existing = self.backend.count_orders().await.map_err(Error::Submit)?;
                Some(existing as u64 + 1)
            }
            OrderIdStrategy::ServerAssigned => None,
        };

        let order = self.cart.to_order(id);
        self.backend
            .submit_order(order.clone())
            .await
            .map_err(Error::Submit)?;

        info!(
            "Submitted order {:?} for food {} ({})",
            order.id,
            order.product_id,
            self.formatted_total()
        );
        Ok(order)
    }
}

async fn fetch_cart(
    backend: &dyn Backend,
    formatter: &PriceFormatter,
    food_id: u64,
) -> Result<CartState> {
    debug!("Fetching food {}", food_id);
    let record = backend.fetch_food(food_id).await.map_err(Error::Fetch)?;
    Ok(CartState::from_record(&record, formatter))
}
