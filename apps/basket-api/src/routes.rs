//! # HTTP Routes
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Method  Path                              Handler          Success     │
//! │  ──────  ────────────────────────────────  ───────────────  ─────────── │
//! │  POST    /api/baskets                      create_basket    200 JSON    │
//! │  GET     /api/baskets/{basket_id}          get_basket       200 JSON    │
//! │  GET     /api/baskets/{basket_id}/receipt  get_receipt      200 text    │
//! │  GET     /health                           health_handler   200 "OK"    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is an [`ApiError`] rendered as `{ code, message }` with the
//! status its code maps to.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::debug;

use crate::dto::{BasketDetailsResponse, CreateBasketRequest, CreateBasketResponse};
use crate::error::{ApiError, ApiResult};
use crate::service::BasketService;

/// Builds the application router.
pub fn router(service: BasketService) -> Router {
    Router::new()
        .route("/api/baskets", post(create_basket))
        .route("/api/baskets/{basket_id}", get(get_basket))
        .route("/api/baskets/{basket_id}/receipt", get(get_receipt))
        .route("/health", get(health_handler))
        .with_state(service)
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /api/baskets`
pub async fn create_basket(
    State(service): State<BasketService>,
    payload: Result<Json<CreateBasketRequest>, JsonRejection>,
) -> ApiResult<Json<CreateBasketResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Rejected basket body");
        ApiError::from(rejection)
    })?;

    let id = service.create_basket(request.items).await?;
    Ok(Json(CreateBasketResponse::from(id)))
}

/// `GET /api/baskets/{basket_id}`
pub async fn get_basket(
    State(service): State<BasketService>,
    Path(basket_id): Path<String>,
) -> ApiResult<Json<BasketDetailsResponse>> {
    let (basket, receipt) = service.get_basket(&basket_id).await?;
    Ok(Json(BasketDetailsResponse::new(&basket, &receipt)))
}

/// `GET /api/baskets/{basket_id}/receipt`
pub async fn get_receipt(
    State(service): State<BasketService>,
    Path(basket_id): Path<String>,
) -> ApiResult<String> {
    service.get_receipt_text(&basket_id).await
}

/// Health check endpoint.
async fn health_handler(State(service): State<BasketService>) -> impl IntoResponse {
    if service.health_check().await {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::extract::FromRequest;
    use axum::http::{header, Request};
    use axum::response::Response;
    use basket_core::Money;
    use basket_db::MemoryBasketStore;

    use crate::dto::BasketItemRequest;
    use crate::service::tests::{request, DownStore};

    fn service() -> BasketService {
        BasketService::new(Arc::new(MemoryBasketStore::new()))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn parse(body: &'static str) -> Result<Json<CreateBasketRequest>, JsonRejection> {
        let req = Request::builder()
            .method("POST")
            .uri("/api/baskets")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        Json::<CreateBasketRequest>::from_request(req, &()).await
    }

    fn create_body(
        items: Vec<BasketItemRequest>,
    ) -> Result<Json<CreateBasketRequest>, JsonRejection> {
        Ok(Json(CreateBasketRequest { items }))
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = service();

        let created = create_basket(
            State(service.clone()),
            create_body(vec![
                request("스마트폰 케이스", Money::from_units(15_000), 1),
                request("보호필름", Money::from_units(5_000), 1),
            ]),
        )
        .await
        .unwrap();
        assert_eq!(created.0.basket_id, "1");

        let response = get_basket(State(service), Path("1".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["basketId"], "1");
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
        assert_eq!(json["items"][0]["price"], serde_json::json!(15000));
        assert_eq!(json["subtotal"], serde_json::json!(20000));
        assert_eq!(json["discount"], serde_json::json!(2000));
        assert_eq!(json["finalAmount"], serde_json::json!(18000));
    }

    #[tokio::test]
    async fn test_parsed_body_flows_through() {
        let payload =
            parse(r#"{"items":[{"name":"충전 케이블","price":8000,"quantity":1}]}"#).await;
        assert!(payload.is_ok());

        let created = create_basket(State(service()), payload).await.unwrap();
        assert_eq!(created.0.basket_id, "1");
    }

    #[tokio::test]
    async fn test_empty_items_is_bad_request() {
        let response = create_basket(State(service()), create_body(Vec::new()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "EMPTY_BASKET");
    }

    #[tokio::test]
    async fn test_invalid_item_is_bad_request() {
        let response = create_basket(
            State(service()),
            create_body(vec![request("보호필름", Money::from_units(5_000), -2)]),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_ITEM");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        for body in [
            "{",
            r#"{"items":[{"name":"a","price":"cheap","quantity":1}]}"#,
            r#"{"items":[{"name":"a","price":100,"quantity":1.5}]}"#,
            r#"{"basket":[]}"#,
        ] {
            let payload = parse(body).await;
            assert!(payload.is_err(), "body {:?}", body);

            let response = create_basket(State(service()), payload)
                .await
                .into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_json(response).await["code"], "INVALID_REQUEST");
        }
    }

    #[tokio::test]
    async fn test_unknown_basket_is_not_found() {
        for id in ["42", "not-a-number"] {
            let response = get_basket(State(service()), Path(id.to_string()))
                .await
                .into_response();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(body_json(response).await["code"], "NOT_FOUND");
        }

        let response = get_receipt(State(service()), Path("42".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_receipt_endpoint_returns_text() {
        let service = service();
        create_basket(
            State(service.clone()),
            create_body(vec![
                request("스마트폰 케이스", Money::from_units(15_000), 1),
                request("보호필름", Money::from_units(5_000), 1),
            ]),
        )
        .await
        .unwrap();

        let response = get_receipt(State(service), Path("1".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/plain"));

        let text = body_text(response).await;
        assert!(text.contains("할인: 2,000원 (10% 할인)\n"));
        assert!(text.contains("최종 결제 금액: 18,000원\n"));
    }

    #[tokio::test]
    async fn test_store_down_is_service_unavailable() {
        let service = BasketService::new(Arc::new(DownStore));

        let response = get_basket(State(service.clone()), Path("1".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["code"], "STORE_UNAVAILABLE");

        let response = health_handler(State(service)).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_ok() {
        let response = health_handler(State(service())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");
    }
}
