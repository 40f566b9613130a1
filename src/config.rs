use std::env;

use anyhow::Context;

// ============================================================================
// Process Configuration
// ============================================================================

/// Immutable configuration, read from the environment once at startup.
pub struct Config {
    pub bind: String,
    pub port: u16,
    pub database_path: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = var_or("COOKIES_PORT", "5000");

        Ok(Self {
            bind: var_or("COOKIES_BIND", "127.0.0.1"),
            port: port
                .parse()
                .with_context(|| format!("invalid COOKIES_PORT: {port}"))?,
            database_path: var_or("COOKIES_DB", "cookies_pedidos.db"),
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        tracing::debug!("{key} not set, using default: {default}");
        default.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_or_falls_back() {
        assert_eq!(var_or("COOKIES_NO_SUCH_VAR", "fallback"), "fallback");
    }
}
