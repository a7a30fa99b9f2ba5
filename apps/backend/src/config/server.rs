use std::env;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

/// Listener and link settings, read from the environment.
///
/// - `BACKEND_HOST` (default `0.0.0.0`)
/// - `BACKEND_PORT` (default `3001`)
/// - `COLORGUESS_PUBLIC_URL` (optional): base of share links; when unset
///   links are built from the request's `Host` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub public_url: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BACKEND_HOST")
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("BACKEND_PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
        };

        let public_url = lookup("COLORGUESS_PUBLIC_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        if let Some(url) = &public_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::config(format!(
                    "COLORGUESS_PUBLIC_URL must start with http:// or https://, got '{url}'"
                )));
            }
        }

        Ok(Self {
            host,
            port,
            public_url,
        })
    }
}
