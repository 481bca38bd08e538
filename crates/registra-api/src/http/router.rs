//! Router construction and server host for the API.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::Request,
    routing::{get, post, put},
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

use registra_config::Settings;
use registra_store::SharedStore;

use crate::http::auth::{authenticate, update_profile};
use crate::http::cors::{self, AUTH_METHODS, STUDENT_METHODS};
use crate::http::errors::ApiError;
use crate::http::students::{add_student, delete_student, get_student, update_student};
use crate::state::ApiState;

const HEADER_REQUEST_ID: &str = "x-request-id";

/// Errors raised while hosting the HTTP listener.
#[derive(Debug, Error)]
pub enum ApiServerError {
    /// Binding the listener failed.
    #[error("failed to bind {addr}")]
    Bind {
        /// Address the listener attempted to bind.
        addr: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The accept loop terminated with an error.
    #[error("server terminated unexpectedly")]
    Serve {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Axum router wrapper hosting both handler surfaces.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Wire the shared store and settings into a ready-to-serve router.
    #[must_use]
    pub fn new(settings: &Settings, store: SharedStore) -> Self {
        let state = Arc::new(ApiState::new(store, settings.email_index.clone()));
        Self {
            router: Self::build_router(state),
        }
    }

    fn build_router(state: Arc<ApiState>) -> Router {
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(HEADER_REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                tracing::info_span!(
                    "http.request",
                    method = %request.method(),
                    route = %request.uri().path(),
                    request_id = %request_id,
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    span.record("status_code", response.status().as_u16());
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("latency_ms", latency_ms);
                },
            );
        let layered = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(trace_layer);

        let router = Self::auth_routes()
            .merge(Self::student_routes())
            .fallback(method_not_allowed);
        cors::apply_default_headers(router)
            .layer(layered)
            .with_state(state)
    }

    fn auth_routes() -> Router<Arc<ApiState>> {
        let router = Router::new()
            .route("/users/login", post(authenticate))
            .route("/users/profile/{user_id}", put(update_profile))
            .method_not_allowed_fallback(method_not_allowed);
        cors::apply_fixed_headers(router, AUTH_METHODS)
    }

    fn student_routes() -> Router<Arc<ApiState>> {
        let router = Router::new()
            .route(
                "/students",
                get(get_student)
                    .post(add_student)
                    .put(update_student)
                    .delete(delete_student),
            )
            .method_not_allowed_fallback(method_not_allowed);
        cors::apply_fixed_headers(router, STUDENT_METHODS)
    }

    /// The assembled router, for embedding or driving in tests.
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve the API on the supplied address.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server
    /// terminates unexpectedly.
    pub async fn serve(self, addr: SocketAddr) -> Result<(), ApiServerError> {
        tracing::info!("Starting API on {}", addr);
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ApiServerError::Bind { addr, source })?;
        axum::serve(listener, self.router.into_make_service())
            .await
            .map_err(|source| ApiServerError::Serve { source })
    }
}

/// Routing miss: any method/path pair outside the dispatch tables.
async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
