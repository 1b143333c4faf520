// src/modules/router/entrance.rs

use crate::core::response;
use crate::middlewares;
use crate::modules::{app, report};
use crate::modules::report::info::ReportState;
use axum::{response::Response, routing::get, Router};

pub fn app_router() -> Router {
    middlewares::middleware::stack(routes(ReportState::from_config()))
}

// Route table without the middleware stack. Tests drive this directly
// with an injected gate and generator.
pub fn routes(state: ReportState) -> Router {
    Router::new()
        .route("/", get(app::root::get_root_handler))
        .route(
            "/v1/runtime/information",
            get(report::info::get_report_handler),
        )
        .fallback(handler_404)
        .with_state(state)
}

async fn handler_404() -> Response {
    response::not_found()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::report::gate::Gate;
    use crate::modules::report::generator::{ReportGenerator, RuntimeReport};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubReport;

    impl ReportGenerator for StubReport {
        fn generate(&self) -> Value {
            json!({ "build": { "rustc": "rustc 1.85.0 (stub)" } })
        }
    }

    fn stub_state(stage: Option<&str>) -> ReportState {
        ReportState {
            gate: Gate::new(stage.map(String::from)),
            generator: Arc::new(StubReport),
        }
    }

    async fn get_path(router: Router, path: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn production_stage_refuses_with_not_found() {
        let router = routes(stub_state(Some("production")));
        let (status, body) = get_path(router, "/v1/runtime/information").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not found");
    }

    #[tokio::test]
    async fn unset_stage_serves_the_report() {
        let router = routes(stub_state(None));
        let (status, body) = get_path(router, "/v1/runtime/information").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("rustc 1.85.0 (stub)"));
    }

    #[tokio::test]
    async fn staging_stage_serves_the_report() {
        let router = routes(stub_state(Some("staging")));
        let (status, body) = get_path(router, "/v1/runtime/information").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("rustc"));
    }

    #[tokio::test]
    async fn empty_stage_serves_the_report() {
        let router = routes(stub_state(Some("")));
        let (status, _) = get_path(router, "/v1/runtime/information").await;

        assert_eq!(status, StatusCode::OK);
    }

    // "Production" differs from "production", so the gate stays open.
    #[tokio::test]
    async fn gate_is_case_sensitive_over_http() {
        let router = routes(stub_state(Some("Production")));
        let (status, body) = get_path(router, "/v1/runtime/information").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("rustc"));
    }

    #[tokio::test]
    async fn live_report_contains_runtime_version() {
        let state = ReportState {
            gate: Gate::new(Some("development".to_string())),
            generator: Arc::new(RuntimeReport),
        };
        let (status, body) = get_path(routes(state), "/v1/runtime/information").await;

        assert_eq!(status, StatusCode::OK);
        let envelope: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(envelope["status"], "Success");
        assert_eq!(
            envelope["data"]["server"]["version"],
            env!("CARGO_PKG_VERSION")
        );
        assert!(!envelope["data"]["build"]["rustc"]
            .as_str()
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn refusal_body_carries_no_report_content() {
        let state = ReportState {
            gate: Gate::new(Some("production".to_string())),
            generator: Arc::new(RuntimeReport),
        };
        let (status, body) = get_path(routes(state), "/v1/runtime/information").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not found");
        assert!(!body.contains("rustc"));
        assert!(!body.contains("environment"));
    }

    #[tokio::test]
    async fn unknown_path_gets_envelope_404() {
        let router = routes(stub_state(None));
        let (status, body) = get_path(router, "/v1/runtime/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Resource not found"));
    }

    #[tokio::test]
    async fn root_reports_identity() {
        let router = routes(stub_state(None));
        let (status, body) = get_path(router, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Loupe"));
        assert!(body.contains("/v1/runtime/information"));
    }
}
