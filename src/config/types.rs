use serde::Deserialize;

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("sitemap2csv/", env!("CARGO_PKG_VERSION"));

/// Main configuration structure for sitemap2csv
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// User-Agent header sent with every sitemap request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Total request timeout in seconds; `None` keeps the transport default
    #[serde(rename = "timeout-seconds", default)]
    pub timeout_seconds: Option<u64>,

    /// Connection timeout in seconds; `None` keeps the transport default
    #[serde(rename = "connect-timeout-seconds", default)]
    pub connect_timeout_seconds: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_seconds: None,
            connect_timeout_seconds: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Whether the `loc,lastmod` header row is written
    #[serde(default = "default_header")]
    pub header: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
        }
    }
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_header() -> bool {
    true
}
