//! Process configuration
//!
//! Read from the environment once at startup. The relay decision logic never
//! touches the ambient environment itself; the credential is injected at
//! construction time so tests stay deterministic.

/// Placeholder shipped in deployment templates. A credential equal to this
/// value means "not configured".
const PLACEHOLDER_KEY: &str = "sua_chave_aqui";

const DEFAULT_PORT: u16 = 3000;

/// Service configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub port: u16,
    /// DeepSeek API credential. The service works with or without it.
    pub deepseek_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            deepseek_api_key: std::env::var("DEEPSEEK_API_KEY").ok(),
        }
    }

    /// The remote credential, if usable. Empty or placeholder values disable
    /// the remote path entirely.
    pub fn remote_key(&self) -> Option<&str> {
        self.deepseek_api_key
            .as_deref()
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_key_disables_remote() {
        let config = Config::default();
        assert!(config.remote_key().is_none());
    }

    #[test]
    fn test_empty_key_disables_remote() {
        let config = Config {
            deepseek_api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(config.remote_key().is_none());
    }

    #[test]
    fn test_placeholder_key_disables_remote() {
        let config = Config {
            deepseek_api_key: Some("sua_chave_aqui".to_string()),
            ..Default::default()
        };
        assert!(config.remote_key().is_none());
    }

    #[test]
    fn test_real_key_enables_remote() {
        let config = Config {
            deepseek_api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        assert_eq!(config.remote_key(), Some("sk-test"));
    }
}
