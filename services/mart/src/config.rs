/// Mart service configuration loaded from environment variables.
#[derive(Debug)]
pub struct MartConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3100). Env var: `MART_PORT`.
    pub port: u16,
}

impl MartConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            port: std::env::var("MART_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3100),
        }
    }
}
