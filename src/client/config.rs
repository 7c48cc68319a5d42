use log::info;
use std::env;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Resolves the client configuration once at startup.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("NUTRIAI_API_BASE")
            .unwrap_or_else(|_| "http://localhost:8000".to_string())
            .trim_end_matches('/')
            .to_string();

        info!("Client configuration loaded:");
        info!("  API base URL: {}", api_base_url);

        ClientConfig { api_base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_to_localhost() {
        env::remove_var("NUTRIAI_API_BASE");
        let cfg = ClientConfig::from_env();
        assert_eq!(cfg.api_base_url, "http://localhost:8000");
    }

    #[test]
    #[serial]
    fn reads_base_url_from_env_and_trims_trailing_slash() {
        env::set_var("NUTRIAI_API_BASE", "http://10.0.0.5:9000/");
        let cfg = ClientConfig::from_env();
        assert_eq!(cfg.api_base_url, "http://10.0.0.5:9000");
        env::remove_var("NUTRIAI_API_BASE");
    }
}
