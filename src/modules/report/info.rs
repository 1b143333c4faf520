// src/modules/report/info.rs

use crate::core::response;
use crate::modules::report::gate::Gate;
use crate::modules::report::generator::{ReportGenerator, RuntimeReport};
use axum::extract::State;
use axum::response::Response;
use std::sync::Arc;

// Gate and generator are built once at router construction and shared
// through axum state, never re-read from the environment per request.
#[derive(Clone)]
pub struct ReportState {
    pub gate: Gate,
    pub generator: Arc<dyn ReportGenerator>,
}

impl ReportState {
    pub fn from_config() -> Self {
        ReportState {
            gate: Gate::from_config(),
            generator: Arc::new(RuntimeReport),
        }
    }
}

// The gate runs first; on refusal nothing else is produced.
pub async fn get_report_handler(State(state): State<ReportState>) -> Response {
    if !state.gate.permits() {
        return state.gate.refusal();
    }

    response::success(Some(state.generator.generate()))
}
