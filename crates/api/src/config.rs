/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Response cache entry lifetime in seconds (default: `60`).
    pub cache_ttl_secs: u64,
    /// Rate-limit window length in seconds (default: `900`, i.e. 15 minutes).
    pub rate_limit_window_secs: u64,
    /// Requests allowed per client per window (default: `1000`).
    pub rate_limit_max_requests: u32,
    /// Interval between view-count flushes in seconds (default: `3600`).
    pub view_flush_interval_secs: u64,
    /// Interval between in-process store sweeps in seconds (default: `300`).
    pub store_sweep_interval_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `8080`                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `CACHE_TTL_SECS`          | `60`                    |
    /// | `RATE_LIMIT_WINDOW_SECS`  | `900`                   |
    /// | `RATE_LIMIT_MAX_REQUESTS` | `1000`                  |
    /// | `VIEW_FLUSH_INTERVAL_SECS`| `3600`                  |
    /// | `STORE_SWEEP_INTERVAL_SECS`| `300`                  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = env_u64("REQUEST_TIMEOUT_SECS", 30);
        let cache_ttl_secs = env_u64("CACHE_TTL_SECS", 60);
        let rate_limit_window_secs = env_u64("RATE_LIMIT_WINDOW_SECS", 900);
        let view_flush_interval_secs = env_u64("VIEW_FLUSH_INTERVAL_SECS", 3600);
        let store_sweep_interval_secs = env_u64("STORE_SWEEP_INTERVAL_SECS", 300);

        let rate_limit_max_requests: u32 = std::env::var("RATE_LIMIT_MAX_REQUESTS")
            .unwrap_or_else(|_| "1000".into())
            .parse()
            .expect("RATE_LIMIT_MAX_REQUESTS must be a valid u32");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            cache_ttl_secs,
            rate_limit_window_secs,
            rate_limit_max_requests,
            view_flush_interval_secs,
            store_sweep_interval_secs,
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be a valid u64")),
        Err(_) => default,
    }
}
