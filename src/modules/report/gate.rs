// src/modules/report/gate.rs

use crate::common::env::CONFIG;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

// The only stage value that locks the report away.
const GATED_STAGE: &str = "production";

// Decides whether the runtime report may be served. The stage is
// snapshotted once at construction and never re-read per request.
#[derive(Clone, Debug)]
pub struct Gate {
    stage: Option<String>,
}

impl Gate {
    pub fn new(stage: Option<String>) -> Self {
        Gate { stage }
    }

    pub fn from_config() -> Self {
        Gate::new(CONFIG.app_env.clone())
    }

    // Exact, case-sensitive match. Every other value falls open,
    // including unset and empty.
    pub fn permits(&self) -> bool {
        self.stage.as_deref() != Some(GATED_STAGE)
    }

    // Fixed refusal. Plain text rather than the JSON envelope: the
    // body carries the literal `Not found` and nothing else.
    pub fn refusal(&self) -> Response {
        (StatusCode::NOT_FOUND, "Not found").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(stage: &str) -> Gate {
        Gate::new(Some(stage.to_string()))
    }

    #[test]
    fn production_is_refused() {
        assert!(!gate("production").permits());
    }

    #[test]
    fn unset_stage_falls_open() {
        assert!(Gate::new(None).permits());
    }

    #[test]
    fn empty_stage_falls_open() {
        assert!(gate("").permits());
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(gate("Production").permits());
        assert!(gate("PRODUCTION").permits());
    }

    #[test]
    fn near_miss_stages_fall_open() {
        for stage in ["prod", "production ", " production", "staging", "development"] {
            assert!(gate(stage).permits(), "stage {:?} should fall open", stage);
        }
    }
}
