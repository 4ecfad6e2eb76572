use crate::config::{AppConfig, AppMode, ContactConfig};
use crate::transport::{ConsoleTransport, ContactTransport, FormspreeTransport};
use anyhow::Result;
use std::sync::{Arc, OnceLock};

/// Global application state containing the service implementations
pub struct AppState {
    pub transport: Arc<dyn ContactTransport>,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("transport", &self.transport.name())
            .field("config", &self.config)
            .finish()
    }
}

impl AppState {
    /// Create AppState from configuration.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        match config.mode {
            AppMode::Local => tracing::info!("🔧 App Mode: LOCAL"),
            AppMode::Production => tracing::info!("🚀 App Mode: PRODUCTION"),
        }

        let transport: Arc<dyn ContactTransport> = match &config.contact {
            ContactConfig::Formspree { endpoint, timeout } => {
                tracing::info!(
                    "   Contact: Formspree ({}, timeout={}s)",
                    redact_endpoint(endpoint),
                    timeout.as_secs()
                );
                Arc::new(FormspreeTransport::new(endpoint.clone(), *timeout)?)
            }
            ContactConfig::Console => {
                tracing::info!("   Contact: Console (not sending)");
                Arc::new(ConsoleTransport)
            }
        };

        Ok(Self { transport, config })
    }

    /// Set the global AppState instance. Called once at server startup.
    pub fn set_global(state: Arc<Self>) -> Result<()> {
        STATE
            .set(state)
            .map_err(|_| anyhow::anyhow!("AppState::set_global called more than once"))
    }

    /// The active AppState, if the server has been initialized.
    pub fn global() -> Option<Arc<Self>> {
        // In tests, check thread-local state first
        if let Some(test_state) = TEST_STATE.with(|s| s.borrow().clone()) {
            return Some(test_state);
        }

        STATE.get().cloned()
    }
}

/// Hide the form id: `https://formspree.io/f/abcd1234` → `https://formspree.io/f/ab***`.
pub fn redact_endpoint(endpoint: &str) -> String {
    match endpoint.trim_end_matches('/').rsplit_once('/') {
        Some((base, id)) if !id.is_empty() && base.contains("://") => {
            let visible: String = id.chars().take(2).collect();
            format!("{base}/{visible}***")
        }
        _ => endpoint.to_string(),
    }
}

/// Global state storage using OnceLock for thread-safe initialization
pub(crate) static STATE: OnceLock<Arc<AppState>> = OnceLock::new();

thread_local! {
    /// Thread-local state override for testing
    pub(crate) static TEST_STATE: std::cell::RefCell<Option<Arc<AppState>>> = const { std::cell::RefCell::new(None) };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_redact_endpoint() {
        assert_eq!(
            redact_endpoint("https://formspree.io/f/mjkoagea"),
            "https://formspree.io/f/mj***"
        );
        assert_eq!(
            redact_endpoint("https://formspree.io/f/mjkoagea/"),
            "https://formspree.io/f/mj***"
        );
        assert_eq!(redact_endpoint("https://formspree.io/"), "https://formspree.io/");
    }

    #[test]
    fn test_from_config_picks_transport() {
        let local = AppState::from_config(AppConfig {
            mode: AppMode::Local,
            contact: ContactConfig::Console,
            whatsapp_number: "50683021304".to_string(),
        })
        .unwrap();
        assert_eq!(local.transport.name(), "console");

        let prod = AppState::from_config(AppConfig {
            mode: AppMode::Production,
            contact: ContactConfig::Formspree {
                endpoint: "https://formspree.io/f/test".to_string(),
                timeout: Duration::from_secs(5),
            },
            whatsapp_number: "50683021304".to_string(),
        })
        .unwrap();
        assert_eq!(prod.transport.name(), "formspree");
    }
}
