#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8085".to_string()),
        }
    }
}
