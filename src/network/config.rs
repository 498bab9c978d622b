use crate::constants::{DEFAULT_PROD_API_BASE_URL, LOCAL_API_BASE_URL, LOCAL_HOSTNAMES};

/// Pick the backend for the host the page was served from: the local
/// development server for `localhost`/`127.0.0.1`/no host (e.g. `file://`),
/// the hosted API otherwise.
pub fn select_base_url(hostname: Option<&str>) -> &'static str {
    match hostname {
        None | Some("") => LOCAL_API_BASE_URL,
        Some(host) if LOCAL_HOSTNAMES.contains(&host) => LOCAL_API_BASE_URL,
        Some(_) => DEFAULT_PROD_API_BASE_URL,
    }
}

/// API route configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Local development backend.  Used by unit tests and before
    /// `init_api_config()` has run.
    fn default() -> Self {
        Self::from_url(LOCAL_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Build-time `API_BASE_URL` wins; otherwise derive from the page host.
    pub fn new() -> Result<Self, &'static str> {
        if let Some(url) = option_env!("API_BASE_URL") {
            return Ok(Self::from_url(url));
        }
        let window = web_sys::window().ok_or("window unavailable")?;
        let hostname = window.location().hostname().ok();
        Ok(Self::for_hostname(hostname.as_deref()))
    }

    pub fn for_hostname(hostname: Option<&str>) -> Self {
        Self::from_url(select_base_url(hostname))
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self { base_url: url.trim_end_matches('/').to_string() }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path such as `/login/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_hosts_use_local_backend() {
        assert_eq!(select_base_url(Some("localhost")), LOCAL_API_BASE_URL);
        assert_eq!(select_base_url(Some("127.0.0.1")), LOCAL_API_BASE_URL);
        assert_eq!(select_base_url(Some("")), LOCAL_API_BASE_URL);
        assert_eq!(select_base_url(None), LOCAL_API_BASE_URL);
    }

    #[test]
    fn other_hosts_use_production() {
        assert_eq!(select_base_url(Some("nl2sql.example.com")), DEFAULT_PROD_API_BASE_URL);
        assert_eq!(select_base_url(Some("localhost.evil.com")), DEFAULT_PROD_API_BASE_URL);
    }

    #[test]
    fn urls_are_joined_without_double_slash() {
        let cfg = ApiConfig::from_url("https://api.example.com/");
        assert_eq!(cfg.base_url(), "https://api.example.com");
        assert_eq!(cfg.url("/login/"), "https://api.example.com/login/");
        assert_eq!(ApiConfig::default().url("/query/"), "http://localhost:8000/query/");
    }
}
