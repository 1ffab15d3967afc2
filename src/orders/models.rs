//! Order wire model.
//!
//! The complete record served by the order-lookup endpoint. Fields that feed
//! the rendered regions are required; the remaining fields of the wire
//! contract are tolerated when absent so that a trimmed-down backend response
//! still renders.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while turning a fetched document into a renderable order.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The document was valid JSON but does not match the order shape.
    #[error("malformed order payload: {0}")]
    Shape(#[source] serde_json::Error),
}

/// Order record returned by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_uid: String,
    pub track_number: String,
    pub entry: String,
    pub delivery: Delivery,
    pub payment: Payment,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub internal_signature: String,
    pub customer_id: String,
    #[serde(default)]
    pub delivery_service: String,
    #[serde(default)]
    pub shardkey: String,
    #[serde(default)]
    pub sm_id: i64,
    /// Creation date, rendered verbatim.
    pub date_created: String,
    #[serde(default)]
    pub oof_shard: String,
}

impl Order {
    /// Decode an order from a JSON document parsed out of a success response.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when the document does not match the order
    /// shape.
    pub fn from_document(document: Value) -> Result<Self, RenderError> {
        serde_json::from_value(document).map_err(RenderError::Shape)
    }
}

/// Delivery address block of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub name: String,
    pub phone: String,
    pub zip: String,
    pub city: String,
    pub address: String,
    pub region: String,
    pub email: String,
}

/// Payment block of an order. Monetary amounts are in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub transaction: String,
    #[serde(default)]
    pub request_id: String,
    pub currency: String,
    pub provider: String,
    pub amount: i64,
    /// Payment instant as Unix seconds.
    pub payment_dt: i64,
    pub bank: String,
    #[serde(default)]
    pub delivery_cost: i64,
    #[serde(default)]
    pub goods_total: i64,
    #[serde(default)]
    pub custom_fee: i64,
}

/// One line item of an order. Prices are in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub chrt_id: i64,
    #[serde(default)]
    pub track_number: String,
    pub price: i64,
    #[serde(default)]
    pub rid: String,
    pub name: String,
    #[serde(default)]
    pub sale: i64,
    #[serde(default)]
    pub size: String,
    pub total_price: i64,
    #[serde(default)]
    pub nm_id: i64,
    pub brand: String,
    pub status: i64,
}
