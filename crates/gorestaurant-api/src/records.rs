// Wire records exactly as the backend sends and expects them
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A food as returned by `GET /foods/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub image_url: String,
    /// Only some backends send a thumbnail next to the full image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub extras: Vec<ExtraRecord>,
    /// Fields this client doesn't model (category, ...), passed on to orders
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// An add-on attached to a food.
///
/// `quantity` is absent on `/foods` responses and filled in when the
/// extra is sent back as part of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraRecord {
    pub id: u64,
    pub name: String,
    pub value: Decimal,
    #[serde(default)]
    pub quantity: u32,
}

/// Order id as stored by the backend.
///
/// Orders placed with a count-based id are numbers; backends that assign
/// ids themselves (json-server 1.x) hand out strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Number(u64),
    Text(String),
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderId::Number(id) => fmt::Display::fmt(id, f),
            OrderId::Text(id) => f.pad(id),
        }
    }
}

/// An entry of `GET /orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Body of `POST /favorites`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritePayload {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
}

/// Body of `POST /orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Left out when the backend assigns ids itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub product_id: u64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub quantity: u32,
    pub extras: Vec<ExtraRecord>,
    /// Backend fields carried over from the food record
    #[serde(flatten)]
    pub other: Map<String, Value>,
}
