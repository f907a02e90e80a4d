use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory served as the router fallback (frontend assets).
    pub static_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            static_dir: "public".into(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let port = match std::env::var("APP_PORT").or_else(|_| std::env::var("PORT")) {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid port {v:?}: {e}"))?,
            Err(_) => defaults.port,
        };
        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or(defaults.host),
            port,
            static_dir: std::env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_3000() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
    }
}
