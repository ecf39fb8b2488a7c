use gorestaurant_api::{ExtraRecord, FoodRecord, OrderId, OrderRecord};
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::format::PriceFormatter;

/// A food ready for display. Never changes after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub formatted_price: String,
    pub image_url: String,
    pub thumbnail_url: Option<String>,
    /// Backend fields with no meaning here, sent back with orders
    pub other: Map<String, Value>,
}

impl Food {
    pub fn from_record(record: &FoodRecord, formatter: &PriceFormatter) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price,
            formatted_price: formatter.format(record.price),
            image_url: record.image_url.clone(),
            thumbnail_url: record.thumbnail_url.clone(),
            other: record.other.clone(),
        }
    }
}

/// An add-on with the quantity the user picked
#[derive(Debug, Clone, PartialEq)]
pub struct Extra {
    pub id: u64,
    pub name: String,
    pub value: Decimal,
    pub quantity: u32,
}

impl Extra {
    /// Seed from the backend; whatever quantity came along is dropped
    pub fn from_record(record: &ExtraRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            value: record.value,
            quantity: 0,
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.value * Decimal::from(self.quantity)
    }

    pub fn to_record(&self) -> ExtraRecord {
        ExtraRecord {
            id: self.id,
            name: self.name.clone(),
            value: self.value,
            quantity: self.quantity,
        }
    }
}

/// One line of the order history
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub id: OrderId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub formatted_price: String,
    pub thumbnail_url: Option<String>,
}

impl OrderSummary {
    pub fn from_record(record: OrderRecord, formatter: &PriceFormatter) -> Self {
        Self {
            formatted_price: formatter.format(record.price),
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
            thumbnail_url: record.thumbnail_url,
        }
    }
}
