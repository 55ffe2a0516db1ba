//! Converts handler panics and overrunning requests into JSON 500 responses.
//!
//! Both failures use the same body shape as handler errors, so a client never
//! sees a dropped connection or a plain-text body.

use std::any::Any;
use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::response::{IntoResponse, Response};
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower::{BoxError, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;

use crate::handler::{Error, ErrorKind};

/// Tracing target for recovered failures.
const TRACING_TARGET: &str = "inkflow_server::middleware::recovery";

/// Default time budget for one request, in seconds.
const DEFAULT_REQUEST_TIMEOUT: u64 = 60;

/// Request time budget.
///
/// A diagram request waits on the model, so the budget has to cover one
/// completion round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct RecoveryConfig {
    /// Seconds a request may run before it is answered with a timeout error.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "REQUEST_TIMEOUT", default_value_t = DEFAULT_REQUEST_TIMEOUT)
    )]
    pub request_timeout: u64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Extension trait for `axum::`[`Router`] to apply recovery middleware.
pub trait RouterRecoveryExt<S> {
    /// Bounds every request by `config.request_timeout` and turns panics
    /// into JSON errors.
    fn with_recovery(self, config: &RecoveryConfig) -> Self;

    /// Same as [`with_recovery`](Self::with_recovery) with the default budget.
    fn with_default_recovery(self) -> Self;
}

impl<S> RouterRecoveryExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_recovery(self, config: &RecoveryConfig) -> Self {
        let budget = Duration::from_secs(config.request_timeout);
        let on_error = move |error: BoxError| async move { recover(&error, budget) };

        self.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(on_error))
                .layer(CatchPanicLayer::custom(recover_panic))
                .layer(TimeoutLayer::new(budget)),
        )
    }

    fn with_default_recovery(self) -> Self {
        self.with_recovery(&RecoveryConfig::default())
    }
}

fn recover(error: &BoxError, budget: Duration) -> Error<'static> {
    if error.is::<Elapsed>() {
        tracing::error!(
            target: TRACING_TARGET,
            budget_secs = budget.as_secs(),
            "request timed out"
        );

        return ErrorKind::InternalServerError
            .with_message("Request timeout")
            .with_details(format!(
                "request exceeded the {} second limit",
                budget.as_secs()
            ));
    }

    tracing::error!(target: TRACING_TARGET, error = %error, "middleware failure");
    ErrorKind::InternalServerError
        .with_message("An unexpected error occurred")
        .with_context(error.to_string())
}

fn recover_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic_message(&*payload);
    tracing::error!(target: TRACING_TARGET, panic = message, "handler panicked");

    ErrorKind::InternalServerError
        .with_message("An unexpected panic occurred")
        .into_response()
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
