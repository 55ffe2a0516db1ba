//! HTTP server startup and teardown.

use std::io;
use std::net::SocketAddr;
use std::time::Instant;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::server::shutdown::{ShutdownTrigger, shutdown_signal};
use crate::server::{ServerError, ServerResult};
use crate::{TRACING_TARGET_SERVER_SHUTDOWN, TRACING_TARGET_SERVER_STARTUP};

/// Serves `app` until SIGINT/SIGTERM, then drains for at most the configured
/// shutdown timeout.
///
/// Requests still running when the budget runs out are dropped and the
/// function returns normally.
///
/// # Errors
///
/// Returns [`ServerError::InvalidConfig`] before binding when the
/// configuration is rejected, [`ServerError::BindError`] when the address
/// cannot be bound and [`ServerError::Runtime`] when accepting fails.
pub async fn serve_http(app: Router, server_config: ServerConfig) -> ServerResult<()> {
    let listener = bind(&server_config).await?;
    let addr = server_config.server_addr();

    if server_config.is_exposed() {
        tracing::warn!(
            target: TRACING_TARGET_SERVER_STARTUP,
            %addr,
            "Listening on every interface"
        );
    }

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        %addr,
        "Server is ready and listening for connections"
    );

    let started = Instant::now();
    let result = drain_after_signal(app, listener, &server_config).await;
    let uptime_secs = started.elapsed().as_secs();

    match result {
        Ok(()) => {
            tracing::info!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                uptime_secs,
                "Shutdown completed"
            );
            Ok(())
        }
        Err(error) => {
            tracing::error!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                error = %error,
                kind = ?error.kind(),
                uptime_secs,
                "Server stopped with a fatal error"
            );
            Err(ServerError::Runtime(error))
        }
    }
}

async fn bind(server_config: &ServerConfig) -> ServerResult<TcpListener> {
    if let Err(error) = server_config.validate() {
        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            error = %error,
            "Invalid server configuration"
        );
        return Err(ServerError::invalid_config(&error));
    }

    let addr = server_config.server_addr();
    TcpListener::bind(addr).await.map_err(|error| {
        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            %addr,
            error = %error,
            "Failed to bind to address"
        );
        ServerError::bind_error(addr, error)
    })
}

async fn drain_after_signal(
    app: Router,
    listener: TcpListener,
    server_config: &ServerConfig,
) -> io::Result<()> {
    let trigger = ShutdownTrigger::new(server_config.shutdown_timeout());
    let graceful = trigger.clone().signal(shutdown_signal());
    let deadline = trigger.deadline();

    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(graceful)
    .into_future();

    tokio::select! {
        result = server => result,
        () = deadline => Ok(()),
    }
}
