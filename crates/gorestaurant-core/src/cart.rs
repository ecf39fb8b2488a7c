use gorestaurant_api::{FoodRecord, NewOrder};
use rust_decimal::Decimal;
use tracing::warn;

use crate::format::PriceFormatter;
use crate::models::{Extra, Food};

/// What the user is about to order: one food, its extras and how many of each
///
/// Quantities only move through the methods below, which keep extras at
/// zero or more and the food itself at one or more, and refuse any change
/// whose total would not fit in a `Decimal`. The total is derived on every
/// call.
#[derive(Debug, Clone, PartialEq)]
pub struct CartState {
    food: Food,
    extras: Vec<Extra>,
    quantity: u32,
}

impl CartState {
    pub fn new(food: Food, extras: Vec<Extra>) -> Self {
        Self {
            food,
            extras,
            quantity: 1,
        }
    }

    /// Normalize a backend record: formatted price, extras at zero, one food
    pub fn from_record(record: &FoodRecord, formatter: &PriceFormatter) -> Self {
        let food = Food::from_record(record, formatter);
        let extras = record.extras.iter().map(Extra::from_record).collect();
        Self::new(food, extras)
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }

    pub fn extra(&self, id: u64) -> Option<&Extra> {
        self.extras.iter().find(|extra| extra.id == id)
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns false if there is no extra with that id or the total would overflow
    pub fn increment_extra(&mut self, id: u64) -> bool {
        self.change_extra(id, |quantity| quantity.checked_add(1))
    }

    /// Floors at zero. Returns false if there is no extra with that id.
    pub fn decrement_extra(&mut self, id: u64) -> bool {
        self.change_extra(id, |quantity| Some(quantity.saturating_sub(1)))
    }

    pub fn increment_food(&mut self) -> bool {
        match self.quantity.checked_add(1) {
            Some(quantity) => self.set_food_quantity(quantity),
            None => false,
        }
    }

    pub fn decrement_food(&mut self) -> bool {
        if self.quantity > 1 {
            self.set_food_quantity(self.quantity - 1)
        } else {
            true
        }
    }

    /// price × quantity + Σ(extra value × extra quantity)
    pub fn total(&self) -> Decimal {
        // Mutators never leave a state whose total overflows
        self.checked_total().unwrap_or(Decimal::MAX)
    }

    /// `None` if the total does not fit in a `Decimal`
    pub fn checked_total(&self) -> Option<Decimal> {
        let food = self.food.price.checked_mul(Decimal::from(self.quantity))?;
        self.extras.iter().try_fold(food, |total, extra| {
            total.checked_add(extra.value.checked_mul(Decimal::from(extra.quantity))?)
        })
    }

    fn change_extra(&mut self, id: u64, change: impl FnOnce(u32) -> Option<u32>) -> bool {
        let Some(index) = self.extras.iter().position(|extra| extra.id == id) else {
            return false;
        };
        let previous = self.extras[index].quantity;
        let Some(quantity) = change(previous) else {
            return false;
        };

        self.extras[index].quantity = quantity;
        if self.checked_total().is_none() {
            warn!("Extra {} quantity {} would overflow the total", id, quantity);
            self.extras[index].quantity = previous;
            return false;
        }
        true
    }

    fn set_food_quantity(&mut self, quantity: u32) -> bool {
        let previous = self.quantity;
        self.quantity = quantity;
        if self.checked_total().is_none() {
            warn!("Food quantity {} would overflow the total", quantity);
            self.quantity = previous;
            return false;
        }
        true
    }

    /// Order body for the current selection. The formatted price stays behind.
    pub fn to_order(&self, id: Option<u64>) -> NewOrder {
        let mut other = self.food.other.clone();
        for key in ORDER_FIELDS {
            other.remove(*key);
        }

        NewOrder {
            id,
            product_id: self.food.id,
            name: self.food.name.clone(),
            description: self.food.description.clone(),
            price: self.food.price,
            image_url: self.food.image_url.clone(),
            thumbnail_url: self.food.thumbnail_url.clone(),
            quantity: self.quantity,
            extras: self.extras.iter().map(Extra::to_record).collect(),
            other,
        }
    }
}

/// Keys the order sets itself; a food field with the same name is dropped
const ORDER_FIELDS: &[&str] = &["id", "product_id", "quantity", "extras", "formattedPrice"];
