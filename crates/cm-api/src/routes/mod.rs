//! API route definitions and router builder.

pub mod cars;
pub mod chat;
pub mod garage;
pub mod health;

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Catalog queries
        .route("/cars", get(cars::list_cars))
        .route("/cars/filter", get(cars::filter_cars))
        .route("/cars/{id}", get(cars::get_car))
        .route("/cars/{id}/summary", get(cars::get_summary))
        .route(
            "/cars/{id}/drivetrain-options",
            get(cars::get_drivetrain_options),
        )
        // Assistant
        .route("/chat", post(chat::chat))
        // Session garage
        .route(
            "/garage",
            get(garage::list_garage)
                .post(garage::add_to_garage)
                .delete(garage::clear_garage),
        )
        .route("/garage/toggle", post(garage::toggle_garage))
        .route("/garage/{id}", delete(garage::remove_from_garage));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::with_sample_data())
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn post_json(uri: &str, session: &str, body: serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .header(chat::SESSION_HEADER, session)
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["vehicles"], 15);
    }

    #[tokio::test]
    async fn list_cars_unpaginated() {
        let response = app()
            .oneshot(Request::get("/api/v1/cars").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 15);
    }

    #[tokio::test]
    async fn list_cars_paginated() {
        let response = app()
            .oneshot(
                Request::get("/api/v1/cars?limit=5&page=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        let cars = json.as_array().unwrap();
        assert_eq!(cars.len(), 5);
        assert_eq!(cars[0]["id"], "CAR-6");
    }

    #[tokio::test]
    async fn list_cars_bad_limit_is_ignored() {
        let response = app()
            .oneshot(
                Request::get("/api/v1/cars?limit=abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 15);
    }

    #[tokio::test]
    async fn filter_by_region() {
        let response = app()
            .oneshot(
                Request::get("/api/v1/cars/filter?region=Canada")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        let cars = json.as_array().unwrap();
        assert_eq!(cars.len(), 2);
        assert!(cars.iter().all(|c| c["region"] == "Canada"));
    }

    #[tokio::test]
    async fn filter_with_non_numeric_year_is_empty() {
        let response = app()
            .oneshot(
                Request::get("/api/v1/cars/filter?year=soon")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn filter_year_reads_leading_digits() {
        let response = app()
            .oneshot(
                Request::get("/api/v1/cars/filter?year=2024model")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        let cars = json.as_array().unwrap();
        assert!(!cars.is_empty());
        assert!(cars.iter().all(|c| c["year"] == 2024));
    }

    #[tokio::test]
    async fn get_car_found_and_missing() {
        let response = app()
            .oneshot(Request::get("/api/v1/cars/CAR-8").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["name"], "Tacoma");

        let response = app()
            .oneshot(
                Request::get("/api/v1/cars/CAR-999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn summary_and_drivetrain_options() {
        let response = app()
            .oneshot(
                Request::get("/api/v1/cars/CAR-4/summary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert!(json["model"].as_str().unwrap().starts_with("RAV4 XLE Hybrid"));

        let response = app()
            .oneshot(
                Request::get("/api/v1/cars/CAR-4/drivetrain-options")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        let values: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["value"].as_str().unwrap())
            .collect();
        assert_eq!(values, ["Hybrid", "AWD"]);
    }

    #[tokio::test]
    async fn chat_search_is_resolved() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/chat",
                "s1",
                serde_json::json!({ "message": "hybrid suv under 40k" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["kind"], "search");
        assert_eq!(json["filters"]["maxPrice"], 40000.0);
        assert_eq!(json["results"]["kind"], "cars");
        let cars = json["results"]["cars"].as_array().unwrap();
        assert!(!cars.is_empty() && cars.len() <= 3);
    }

    #[tokio::test]
    async fn chat_chitchat_has_no_results() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/chat",
                "s1",
                serde_json::json!({ "message": "thanks!" }),
            ))
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["kind"], "text");
        assert!(json.get("results").is_none());
    }

    #[tokio::test]
    async fn chat_rejects_blank_message() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/chat",
                "s1",
                serde_json::json!({ "message": "   " }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn chat_add_to_garage_uses_session() {
        let app = app();
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/chat",
                "shopper-7",
                serde_json::json!({ "message": "add corolla to my garage" }),
            ))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert!(json["message"].as_str().unwrap().contains("Added Corolla"));

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/v1/garage")
                    .header(chat::SESSION_HEADER, "shopper-7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["name"], "Corolla");

        let response = app
            .oneshot(Request::get("/api/v1/garage").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(body_json(response).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn garage_add_unknown_car() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/garage",
                "s1",
                serde_json::json!({ "car_id": "CAR-404" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn garage_add_toggle_remove_clear() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/garage",
                "s2",
                serde_json::json!({ "car_id": "CAR-1" }),
            ))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["items"].as_array().unwrap().len(), 1);

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/garage/toggle",
                "s2",
                serde_json::json!({ "car_id": "CAR-2" }),
            ))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["saved"], true);
        assert_eq!(json["items"].as_array().unwrap().len(), 2);

        let response = app
            .clone()
            .oneshot(
                Request::delete("/api/v1/garage/CAR-1")
                    .header(chat::SESSION_HEADER, "s2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["items"].as_array().unwrap().len(), 1);
        assert_eq!(json["items"][0]["id"], "CAR-2");

        let response = app
            .clone()
            .oneshot(
                Request::delete("/api/v1/garage")
                    .header(chat::SESSION_HEADER, "s2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(
                Request::get("/api/v1/garage")
                    .header(chat::SESSION_HEADER, "s2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(body_json(response).await.as_array().unwrap().is_empty());
    }
}
