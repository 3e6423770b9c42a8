mod portfolio;
mod rewards;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, main_lib::AppState};

async fn healthz() -> &'static str {
    "ok"
}

async fn readyz() -> &'static str {
    "ok"
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/reward", post(rewards::post_reward))
        .route("/reward/{reward_id}", get(rewards::get_reward))
        .route("/portfolio/{user_id}", get(portfolio::get_portfolio))
        .route("/stats/{user_id}", get(portfolio::get_stats))
        .route(
            "/historical-inr/{user_id}",
            get(portfolio::get_historical_inr),
        )
        .route("/today-stocks/{user_id}", get(portfolio::get_today_stocks));

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::main_lib::build_state;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use chrono::Utc;
    use serde_json::{json, Value};
    use std::time::Duration;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_router(dir: &TempDir) -> Router {
        let config = Config {
            listen_addr: "127.0.0.1:0".parse().unwrap(),
            db_path: dir.path().join("test.db").to_str().unwrap().to_string(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_secs(5),
        };
        let state = build_state(&config).unwrap();
        app_router(state, &config)
    }

    fn reward_request(id: &str, user_id: &str) -> Request<Body> {
        let payload = json!({
            "id": id,
            "userId": user_id,
            "stockSymbol": "RELIANCE",
            "quantity": 2.5,
            "rewardTimestamp": Utc::now().to_rfc3339(),
        });
        Request::builder()
            .method("POST")
            .uri("/api/v1/reward")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoints_respond() {
        let dir = TempDir::new().unwrap();
        let app = test_router(&dir);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn posting_a_reward_returns_created_with_charges() {
        let dir = TempDir::new().unwrap();
        let app = test_router(&dir);

        let response = app
            .clone()
            .oneshot(reward_request("r-1", "user-1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["reward"]["id"], json!("r-1"));
        assert!(body["inrValue"].is_number());
        assert!(body["companyCharges"]["totalCost"].is_number());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/reward/r-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["ledgerEntries"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn duplicate_reward_returns_conflict() {
        let dir = TempDir::new().unwrap();
        let app = test_router(&dir);

        let response = app
            .clone()
            .oneshot(reward_request("r-1", "user-1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(reward_request("r-1", "user-2"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn invalid_quantity_returns_bad_request() {
        let dir = TempDir::new().unwrap();
        let app = test_router(&dir);

        let payload = json!({
            "id": "r-bad",
            "userId": "user-1",
            "stockSymbol": "RELIANCE",
            "quantity": 0,
            "rewardTimestamp": Utc::now().to_rfc3339(),
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/reward")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn portfolio_reflects_posted_rewards() {
        let dir = TempDir::new().unwrap();
        let app = test_router(&dir);

        for id in ["r-1", "r-2"] {
            let response = app
                .clone()
                .oneshot(reward_request(id, "user-1"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/portfolio/user-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let holdings = body["holdings"].as_array().unwrap();
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0]["stockSymbol"], json!("RELIANCE"));
        assert_eq!(holdings[0]["totalQuantity"], json!(5.0));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/today-stocks/user-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["count"], json!(2));
    }

    #[tokio::test]
    async fn unknown_user_gets_empty_portfolio() {
        let dir = TempDir::new().unwrap();
        let app = test_router(&dir);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/stats/nobody")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["currentPortfolioValueInr"], json!(0.0));
        assert_eq!(body["totalSharesRewarded"], json!(0.0));
    }
}
