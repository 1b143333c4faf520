// src/middlewares/guard.rs

use crate::core::response;
use crate::modules::router::whitelist;
use axum::{body::Body, http::Request, middleware::Next, response::Response};

const MAX_VERSION: u8 = 1;

pub async fn handler(req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path();

    // If the path is in the whitelist, bypass this guard entirely.
    if whitelist::WHITELISTED_PATHS.contains(&path) {
        return next.run(req).await;
    }

    // Check for the /v{N}/... format.
    if let Some(path_after_v) = path.strip_prefix("/v") {
        if let Some(slash_index) = path_after_v.find('/') {
            if let Ok(version) = path_after_v[..slash_index].parse::<u8>() {
                if version > 0 && version <= MAX_VERSION {
                    return next.run(req).await;
                }
            }
        }
    }

    // Anything outside the versioned API surface is answered flat.
    response::not_found()
}
