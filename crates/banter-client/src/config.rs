//! Broker endpoint configuration.

use url::Url;

/// Default public broker endpoint.
pub const DEFAULT_ENDPOINT: &str = "wss://free.blr2.piesocket.com/v3/1";

/// Connection parameters for the broker.
///
/// The broker is addressed by a single websocket URL carrying the shared
/// access key and an echo flag as query parameters. There is no further
/// authentication.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    /// Websocket endpoint without query parameters.
    pub endpoint: Url,
    /// Shared access key, sent as the `api_key` query parameter.
    pub api_key: String,
    /// Ask the broker to echo our own frames back (`notify_self`). The
    /// session suppresses the echoes client-side, so this only affects
    /// traffic, not history.
    pub notify_self: bool,
}

impl BrokerConfig {
    /// Create a config for the given endpoint and access key, with echo
    /// delivery enabled as the broker default.
    pub fn new(endpoint: Url, api_key: impl Into<String>) -> Self {
        Self { endpoint, api_key: api_key.into(), notify_self: true }
    }

    /// The full connection URL with query parameters applied.
    pub fn url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("notify_self", if self.notify_self { "1" } else { "0" });
        url
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{BrokerConfig, DEFAULT_ENDPOINT};

    #[test]
    fn url_carries_access_key_and_echo_flag() {
        let endpoint = DEFAULT_ENDPOINT.parse().unwrap();
        let config = BrokerConfig::new(endpoint, "secret");

        let url = config.url();
        assert_eq!(url.as_str(), format!("{DEFAULT_ENDPOINT}?api_key=secret&notify_self=1"));
    }

    #[test]
    fn echo_flag_can_be_disabled() {
        let endpoint = DEFAULT_ENDPOINT.parse().unwrap();
        let mut config = BrokerConfig::new(endpoint, "secret");
        config.notify_self = false;

        let url = config.url();
        assert!(url.query().unwrap().contains("notify_self=0"));
    }
}
