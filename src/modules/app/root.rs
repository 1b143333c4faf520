// src/modules/app/root.rs

use crate::common::env::CONFIG;
use crate::core::response;
use axum::response::Response;
use serde_json::json;

// Handles requests to the root endpoint and returns project information.
pub async fn get_root_handler() -> Response {
    let cargo_version = env!("CARGO_PKG_VERSION");

    let response_data = json!({
        "name": "Loupe",
        "version": cargo_version,
        "stage": CONFIG.app_env.as_deref().unwrap_or("unset"),
        "endpoints": [
            "/v1/runtime/information",
        ],
    });

    response::success(Some(response_data))
}
