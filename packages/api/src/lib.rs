//! This crate contains all shared fullstack server functions.
use dioxus::prelude::*;

pub mod config;
pub mod types;

#[cfg(feature = "server")]
pub mod transport;

#[cfg(feature = "server")]
pub mod state;

mod contact;


#[cfg(feature = "server")]
pub mod test_utils;

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

/// Detailed health check
#[get("/api/health/detailed")]
pub async fn detailed_health_check() -> Result<serde_json::Value, ServerFnError> {
    use serde_json::json;

    #[cfg(feature = "server")]
    tracing::debug!("detailed_health_check");

    #[cfg(feature = "server")]
    let transport = state::AppState::global()
        .map(|s| s.transport.name())
        .unwrap_or("uninitialized");
    #[cfg(not(feature = "server"))]
    let transport = "unknown";

    let health = json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "contact_transport": transport,
        }
    });

    Ok(health)
}

#[get("/api/config")]
pub async fn public_config() -> Result<types::PublicConfig, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("public_config is server-only"))
    }

    #[cfg(feature = "server")]
    {
        tracing::debug!("public_config");
        let state = state::AppState::global()
            .ok_or_else(|| ServerFnError::new("server state not initialized"))?;
        Ok(types::PublicConfig {
            local_mode: state.config.mode == config::AppMode::Local,
            whatsapp_number: state.config.whatsapp_number.clone(),
        })
    }
}

pub use contact::submit_contact;
