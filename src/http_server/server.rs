//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::future::Future;
use std::sync::Arc;

use axum::{extract::Request, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span};

use super::config::HttpServerConfig;
use super::info_routes::info_routes;
use super::record_routes::{record_routes, RecordState};
use crate::observability::Event;
use crate::record::RecordStore;
use crate::service::ServiceInfo;

/// HTTP server for the record store
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an existing store
    pub fn new(config: HttpServerConfig, info: ServiceInfo, store: Arc<RecordStore>) -> Self {
        let router = Self::build_router(&config, info, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, info: ServiceInfo, store: Arc<RecordStore>) -> Router {
        let record_state = Arc::new(RecordState::new(store));

        let service = info.name().to_string();
        let instance_id = info.instance_id().to_string();
        let trace = TraceLayer::new_for_http().make_span_with(move |request: &Request| {
            info_span!(
                "request",
                service = %service,
                instance_id = %instance_id,
                method = %request.method(),
                uri = %request.uri()
            )
        });

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(info_routes(Arc::new(info)))
            .merge(record_routes(record_state))
            .layer(
                ServiceBuilder::new()
                    .layer(trace)
                    .layer(cors),
            )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.socket_addr()).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        info!(
            event = %Event::Run,
            addr = %addr,
            "Listening on port {}",
            addr.port()
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; serve until the process is killed.
        std::future::pending::<()>().await;
    }
    info!(event = %Event::Shutdown, "Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(config: HttpServerConfig) -> HttpServer {
        HttpServer::new(
            config,
            ServiceInfo::new("test"),
            Arc::new(RecordStore::new()),
        )
    }

    #[test]
    fn test_server_creation() {
        assert_eq!(server(HttpServerConfig::default()).socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = server(HttpServerConfig::with_port(9000));
        assert_eq!(server.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..Default::default()
        };
        let _router = server(config).router();
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let result = server(HttpServerConfig::default())
            .serve(listener, async {})
            .await;
        assert!(result.is_ok());
    }
}
