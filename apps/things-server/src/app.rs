//! Wiring: registry, caller resolver and gateway, built once at startup.

use std::sync::Arc;

use access_control::OperationRegistry;
use anyhow::Context;
use api_gateway::{api_router, build_access_policy, secure};
use axum::Router;
use caller_resolver_sdk::CallerResolverClient;
use static_caller_plugin::StaticCallerResolver;

use crate::config::AppConfig;

fn registry(cfg: &AppConfig) -> anyhow::Result<OperationRegistry> {
    OperationRegistry::from_config(&cfg.access_control)
        .context("invalid access_control configuration")
}

/// Build the fully guarded router.
pub fn build(cfg: &AppConfig) -> anyhow::Result<Router> {
    let registry = Arc::new(registry(cfg)?);
    let resolver: Arc<dyn CallerResolverClient> =
        Arc::new(StaticCallerResolver::from_config(&cfg.authn));

    secure(api_router(registry.clone()), &cfg.api_gateway, registry, resolver)
        .context("invalid api_gateway route bindings")
}

/// Validate the configuration without serving.
pub fn check(cfg: &AppConfig) -> anyhow::Result<()> {
    let registry = registry(cfg)?;
    build_access_policy(&cfg.api_gateway, &registry)
        .context("invalid api_gateway route bindings")?;

    tracing::info!(
        operations = registry.len(),
        routes = cfg.api_gateway.routes.len(),
        open_to_everyone = registry.conflicting_operations().len(),
        "configuration is valid"
    );
    Ok(())
}

/// Serve until Ctrl-C.
pub async fn serve(cfg: &AppConfig) -> anyhow::Result<()> {
    let router = build(cfg)?;
    let addr = cfg.api_gateway.bind_addr.as_str();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr, "things-server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated")?;

    tracing::info!("things-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
