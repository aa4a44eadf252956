pub mod api;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    body::Bytes,
    http::header,
    response::IntoResponse,
    routing::any,
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::error::OracleError;
use crate::signing::{decode_signature, parse_private_key, sign, verify};
use self::api::{SignRequest, SignResponse, VerifyRequest, VerifyResponse};

/// The oracle's routing table.
///
/// `/` and every unmatched path answer the liveness check.
pub fn router() -> Router {
    Router::new()
        .route("/", any(alive))
        .route("/sign", any(sign_handler))
        .route("/verify", any(verify_handler))
        .fallback(alive)
        .layer(TraceLayer::new_for_http())
}

/// Binds `host:port` and serves `router` until Ctrl-C.
pub async fn run(host: String, port: u16, router: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("binding {host}:{port}"))?;
    info!(addr = %listener.local_addr()?, "signing oracle listening");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("serving http")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for ctrl-c, running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

async fn alive() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], "alive")
}

async fn sign_handler(body: Bytes) -> Result<Json<SignResponse>, OracleError> {
    let request: SignRequest = decode_body(&body)?;
    let key = parse_private_key(&request.key)?;

    let signature = sign(&key, request.message.as_bytes());
    debug!(public_key = %key.public_key(), "signed message");

    Ok(Json(SignResponse {
        signature: signature.to_base64(),
    }))
}

async fn verify_handler(body: Bytes) -> Result<Json<VerifyResponse>, OracleError> {
    let request: VerifyRequest = decode_body(&body)?;
    let key = parse_private_key(&request.key)?;
    let public_key = key.public_key();
    let signature = decode_signature(&request.signature)?;

    let valid = verify(&public_key, request.message.as_bytes(), &signature);
    debug!(public_key = %public_key, valid, "verified signature");

    Ok(Json(VerifyResponse { valid }))
}

// Bodies are JSON whatever the Content-Type says. Only the first value is
// read; anything after it is ignored.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, OracleError> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<T>()
        .next()
        .ok_or_else(|| OracleError::BadRequest("empty body".to_string()))?
        .map_err(|e| OracleError::BadRequest(e.to_string()))
}
