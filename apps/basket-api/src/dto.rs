//! # Request / Response DTOs
//!
//! Wire shapes for the basket endpoints. All field names are camelCase and
//! every monetary value is a JSON number carrying the exact decimal text.
//!
//! ```text
//! POST /api/baskets
//!   { "items": [ { "name": "보호필름", "price": 5000, "quantity": 1 } ] }
//!   → { "basketId": "1" }
//!
//! GET /api/baskets/1
//!   → { "basketId": "1",
//!       "items": [ { "name": "보호필름", "quantity": 1, "price": 5000, "total": 5000 } ],
//!       "subtotal": 5000, "discount": 0, "finalAmount": 5000 }
//! ```
//!
//! TypeScript bindings are exported with ts-rs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use basket_core::{Basket, BasketId, BasketItem, Money, Receipt};

// =============================================================================
// Requests
// =============================================================================

/// Body of `POST /api/baskets`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateBasketRequest {
    pub items: Vec<BasketItemRequest>,
}

/// One requested line. Validated by `BasketItem::new`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BasketItemRequest {
    pub name: String,
    #[ts(type = "number")]
    pub price: Money,
    #[ts(type = "number")]
    pub quantity: i64,
}

// =============================================================================
// Responses
// =============================================================================

/// Body returned by `POST /api/baskets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateBasketResponse {
    pub basket_id: String,
}

impl From<BasketId> for CreateBasketResponse {
    fn from(id: BasketId) -> Self {
        CreateBasketResponse {
            basket_id: id.to_string(),
        }
    }
}

/// Body returned by `GET /api/baskets/{basketId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BasketDetailsResponse {
    pub basket_id: String,
    pub items: Vec<BasketItemDto>,
    #[ts(type = "number")]
    pub subtotal: Money,
    #[ts(type = "number")]
    pub discount: Money,
    #[ts(type = "number")]
    pub final_amount: Money,
}

/// One stored line as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BasketItemDto {
    pub name: String,
    #[ts(type = "number")]
    pub quantity: i64,
    #[ts(type = "number")]
    pub price: Money,
    #[ts(type = "number")]
    pub total: Money,
}

impl From<&BasketItem> for BasketItemDto {
    fn from(item: &BasketItem) -> Self {
        BasketItemDto {
            name: item.name().to_string(),
            quantity: item.quantity(),
            price: item.unit_price(),
            total: item.line_total(),
        }
    }
}

impl BasketDetailsResponse {
    /// Combines a stored basket with its freshly computed receipt.
    pub fn new(basket: &Basket, receipt: &Receipt) -> Self {
        BasketDetailsResponse {
            basket_id: basket.id.to_string(),
            items: basket.items.iter().map(BasketItemDto::from).collect(),
            subtotal: receipt.subtotal,
            discount: receipt.discount,
            final_amount: receipt.final_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::compute_receipt;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_keeps_decimal_exact() {
        let body = r#"{"items":[{"name":"상품","price":10000.01,"quantity":2}]}"#;
        let request: CreateBasketRequest = serde_json::from_str(body).unwrap();

        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].price, Money::from_decimal(dec!(10000.01)));
        assert_eq!(request.items[0].quantity, 2);
    }

    #[test]
    fn test_details_response_shape() {
        let items = vec![
            BasketItem::new("스마트폰 케이스", Money::from_units(12_000), 1).unwrap(),
            BasketItem::new("보호필름", Money::from_units(3_000), 1).unwrap(),
        ];
        let receipt = compute_receipt(&items);
        let basket = Basket {
            id: BasketId::new(3),
            items,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(BasketDetailsResponse::new(&basket, &receipt)).unwrap();

        assert_eq!(json["basketId"], "3");
        assert_eq!(json["items"][0]["name"], "스마트폰 케이스");
        assert_eq!(json["items"][1]["total"], serde_json::json!(3000));
        assert_eq!(json["subtotal"], serde_json::json!(15000));
        assert_eq!(json["discount"], serde_json::json!(750));
        assert_eq!(json["finalAmount"], serde_json::json!(14250));
    }

    #[test]
    fn test_create_response_shape() {
        let json = serde_json::to_string(&CreateBasketResponse::from(BasketId::new(1))).unwrap();
        assert_eq!(json, r#"{"basketId":"1"}"#);
    }
}
