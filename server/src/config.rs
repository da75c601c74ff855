//! Process configuration and startup errors.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
const PORT_ENV: &str = "PORT";

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a port value; `None` or blank means [`DEFAULT_PORT`].
pub fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(v) => v.parse().map_err(|_| ServerError::InvalidPort(v.to_owned())),
    }
}

/// Read `PORT` from the environment.
pub fn port_from_env() -> Result<u16, ServerError> {
    parse_port(std::env::var(PORT_ENV).ok().as_deref())
}
