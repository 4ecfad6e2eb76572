use std::fmt;
use std::time::Duration;

pub const DEFAULT_FORMSPREE_ENDPOINT: &str = "https://formspree.io/f/mjkoagea";
pub const DEFAULT_CONTACT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_WHATSAPP_NUMBER: &str = "50683021304";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        match std::env::var("APP_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Where contact submissions go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactConfig {
    Formspree { endpoint: String, timeout: Duration },
    Console,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub contact: ContactConfig,
    pub whatsapp_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidEndpoint(String),
    InvalidTimeout(String),
    InvalidWhatsappNumber(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidEndpoint(v) => {
                write!(f, "FORMSPREE_ENDPOINT must be an http(s) URL, got {v:?}")
            }
            ConfigError::InvalidTimeout(v) => {
                write!(f, "CONTACT_TIMEOUT_SECS must be a positive integer, got {v:?}")
            }
            ConfigError::InvalidWhatsappNumber(v) => {
                write!(f, "WHATSAPP_NUMBER must contain digits only, got {v:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Local mode logs submissions to the console; production posts them to Formspree.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = AppMode::from_env();

        let whatsapp_number = std::env::var("WHATSAPP_NUMBER")
            .unwrap_or_else(|_| DEFAULT_WHATSAPP_NUMBER.to_string());
        if whatsapp_number.is_empty() || !whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidWhatsappNumber(whatsapp_number));
        }

        let contact = match mode {
            AppMode::Local => ContactConfig::Console,
            AppMode::Production => {
                let endpoint = std::env::var("FORMSPREE_ENDPOINT")
                    .unwrap_or_else(|_| DEFAULT_FORMSPREE_ENDPOINT.to_string());
                if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
                    return Err(ConfigError::InvalidEndpoint(endpoint));
                }
                let timeout = match std::env::var("CONTACT_TIMEOUT_SECS") {
                    Ok(raw) => match raw.trim().parse::<u64>() {
                        Ok(secs) if secs > 0 => secs,
                        _ => return Err(ConfigError::InvalidTimeout(raw)),
                    },
                    Err(_) => DEFAULT_CONTACT_TIMEOUT_SECS,
                };
                ContactConfig::Formspree {
                    endpoint,
                    timeout: Duration::from_secs(timeout),
                }
            }
        };

        Ok(Self {
            mode,
            contact,
            whatsapp_number,
        })
    }
}

/// Best-effort `.env` loading for local development.
#[cfg(feature = "server")]
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("config.load_dotenv: loaded {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below mutate process-wide env vars.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            "APP_MODE",
            "FORMSPREE_ENDPOINT",
            "CONTACT_TIMEOUT_SECS",
            "WHATSAPP_NUMBER",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_app_mode_defaults_to_production() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        assert_eq!(AppMode::from_env(), AppMode::Production);
    }

    #[test]
    fn test_app_mode_local_case_insensitive() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        std::env::set_var("APP_MODE", "LOCAL");
        assert_eq!(AppMode::from_env(), AppMode::Local);
        clear_env();
    }

    #[test]
    fn test_app_mode_invalid_defaults_to_production() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        std::env::set_var("APP_MODE", "invalid");
        assert_eq!(AppMode::from_env(), AppMode::Production);
        clear_env();
    }

    #[test]
    fn test_production_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.mode, AppMode::Production);
        assert_eq!(config.whatsapp_number, DEFAULT_WHATSAPP_NUMBER);
        assert_eq!(
            config.contact,
            ContactConfig::Formspree {
                endpoint: DEFAULT_FORMSPREE_ENDPOINT.to_string(),
                timeout: Duration::from_secs(DEFAULT_CONTACT_TIMEOUT_SECS),
            }
        );
    }

    #[test]
    fn test_local_mode_uses_console() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        std::env::set_var("APP_MODE", "local");
        std::env::set_var("FORMSPREE_ENDPOINT", "not a url");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.contact, ContactConfig::Console);
        clear_env();
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        std::env::set_var("FORMSPREE_ENDPOINT", "ftp://formspree.io/f/x");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::InvalidEndpoint(_))
        ));
        clear_env();
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        std::env::set_var("CONTACT_TIMEOUT_SECS", "0");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::InvalidTimeout(_))
        ));
        clear_env();
    }

    #[test]
    fn test_rejects_formatted_whatsapp_number() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        std::env::set_var("WHATSAPP_NUMBER", "+506 8302 1304");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::InvalidWhatsappNumber(_))
        ));
        clear_env();
    }
}
