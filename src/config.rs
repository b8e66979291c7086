use crate::error::{BadEnvVarSnafu, ParseAddrSnafu, ParseDurationSnafu, WardenResult};
use dotenvy::var;
use snafu::ResultExt;
use std::{env::VarError, net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";
pub const DEFAULT_TOAST_MILLIS: u64 = 3_000;
pub const DEFAULT_SESSION_PATH: &str = "warden_session.bin";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    backend_config: Arc<BackendConfig>,
    server_ip: SocketAddr,
    session_path: PathBuf,
}

impl RuntimeConfiguration {
    pub fn new() -> WardenResult<Self> {
        let server_ip = optional_env_var("WARDEN_SERVER_IP")?
            .unwrap_or_else(|| DEFAULT_SERVER_IP.to_string());
        let session_path = optional_env_var("WARDEN_SESSION_PATH")?
            .unwrap_or_else(|| DEFAULT_SESSION_PATH.to_string());

        Ok(Self {
            backend_config: Arc::new(BackendConfig::new()?),
            server_ip: server_ip
                .parse()
                .context(ParseAddrSnafu { original: server_ip })?,
            session_path: session_path.into(),
        })
    }

    pub fn backend_config(&self) -> Arc<BackendConfig> {
        self.backend_config.clone()
    }

    pub const fn server_ip(&self) -> SocketAddr {
        self.server_ip
    }

    pub fn session_path(&self) -> PathBuf {
        self.session_path.clone()
    }
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    base_url: String,
    toast_ttl: Duration,
}

impl BackendConfig {
    pub fn new() -> WardenResult<Self> {
        let base_url = optional_env_var("WARDEN_API_BASE_URL")?
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let toast_ttl = match optional_env_var("WARDEN_TOAST_MILLIS")? {
            Some(millis) => Duration::from_millis(
                millis
                    .trim()
                    .parse()
                    .context(ParseDurationSnafu { original: millis })?,
            ),
            None => Duration::from_millis(DEFAULT_TOAST_MILLIS),
        };

        Ok(Self::with_base_url(base_url).toast_ttl(toast_ttl))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            toast_ttl: Duration::from_millis(DEFAULT_TOAST_MILLIS),
        }
    }

    #[must_use]
    pub const fn toast_ttl(mut self, toast_ttl: Duration) -> Self {
        self.toast_ttl = toast_ttl;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn get_toast_ttl(&self) -> Duration {
        self.toast_ttl
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }
}

///unset and blank variables both fall back to the defaults
fn optional_env_var(name: &'static str) -> WardenResult<Option<String>> {
    match var(name) {
        Ok(value) => Ok(Some(value).filter(|value| !value.trim().is_empty())),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(e) => Err(e).context(BadEnvVarSnafu { name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed_from_the_base_url() {
        let config = BackendConfig::with_base_url("http://localhost:5000/api//");
        assert_eq!(config.base_url(), "http://localhost:5000/api");
        assert_eq!(
            config.url_for("/students"),
            "http://localhost:5000/api/students"
        );
    }

    #[test]
    fn toast_ttl_defaults_to_three_seconds() {
        let config = BackendConfig::with_base_url("http://backend");
        assert_eq!(config.get_toast_ttl(), Duration::from_secs(3));

        let config = config.toast_ttl(Duration::from_millis(10));
        assert_eq!(config.get_toast_ttl(), Duration::from_millis(10));
    }
}
