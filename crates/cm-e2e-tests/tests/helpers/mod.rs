//! Shared test harness for E2E integration tests.
//!
//! Drives the full HTTP stack (router, assistant, catalog, garage) through
//! `tower::oneshot` without binding a socket.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use cm_api::routes::build_router;
use cm_api::routes::chat::SESSION_HEADER;
use cm_api::state::AppState;

/// End-to-end harness over one shared `AppState`.
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// Harness backed by the bundled 15-vehicle sample catalog.
    pub fn with_sample_data() -> Self {
        Self::from_state(AppState::with_sample_data())
    }

    /// Harness with an empty catalog.
    pub fn empty() -> Self {
        Self::from_state(AppState::new())
    }

    pub fn from_state(state: AppState) -> Self {
        let router = build_router(state.clone());
        Self { state, router }
    }

    /// POST /api/v1/chat as `session`.
    pub async fn chat(&self, session: &str, message: &str) -> (StatusCode, serde_json::Value) {
        let body = serde_json::json!({ "message": message });
        self.send(
            Request::post("/api/v1/chat")
                .header("content-type", "application/json")
                .header(SESSION_HEADER, session)
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
    }

    /// GET `uri` as `session`.
    pub async fn get(&self, session: &str, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::get(uri)
                .header(SESSION_HEADER, session)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// POST a garage request (`/api/v1/garage` or `/api/v1/garage/toggle`).
    pub async fn garage_post(
        &self,
        session: &str,
        uri: &str,
        car_id: &str,
    ) -> (StatusCode, serde_json::Value) {
        let body = serde_json::json!({ "car_id": car_id });
        self.send(
            Request::post(uri)
                .header("content-type", "application/json")
                .header(SESSION_HEADER, session)
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
    }

    /// DELETE `uri` as `session`. Returns only the status for empty bodies.
    pub async fn delete(&self, session: &str, uri: &str) -> StatusCode {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::delete(uri)
                    .header(SESSION_HEADER, session)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response.status()
    }

    /// Garage ids for `session`, read through the API.
    pub async fn garage_ids(&self, session: &str) -> Vec<String> {
        let (_, json) = self.get(session, "/api/v1/garage").await;
        json.as_array()
            .unwrap()
            .iter()
            .map(|e| e["id"].as_str().unwrap().to_string())
            .collect()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }
}
