//! `/health/ready` and `/health/live` for the CashFlowPro API.
//!
//! Both answer with `{"status": "ok" | "unavailable"}` and are never cached.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, http::header, web};
use serde::Serialize;

/// Listener and process flags read by the health endpoints.
///
/// Starts live but not ready; the server flips `ready` after binding.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once the API socket accepts connections.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness from now on.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
}

fn flag_response(passing: bool) -> HttpResponse {
    let (mut builder, status) = if passing {
        (HttpResponse::Ok(), "ok")
    } else {
        (HttpResponse::ServiceUnavailable(), "unavailable")
    };
    builder
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(HealthBody { status })
}

/// 503 until the listener is bound.
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    flag_response(state.is_ready())
}

/// 503 after [`HealthState::mark_unhealthy`].
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    flag_response(state.is_alive())
}
