//! Optional artificial response delay.
//!
//! Controlled by `SIMULATED_LATENCY_MS`. Zero disables it.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

/// Sleep for the configured latency, then run the rest of the stack.
pub async fn simulate_latency(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let delay_ms = state.config.simulated_latency_ms;
    if delay_ms > 0 {
        tracing::trace!(delay_ms, "Applying simulated latency");
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
    next.run(request).await
}
