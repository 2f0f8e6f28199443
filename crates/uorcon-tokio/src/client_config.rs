use std::time::Duration;

/// Connection target and shared secret for one game server, plus the default
/// reply deadline. Owned by the client for its lifetime.
#[derive(Debug, Clone)]
pub struct UoRconConfig {
    pub host: String,
    pub port: u16,
    pub password: String,
    pub reply_timeout: Duration,
}

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 27030;
const DEFAULT_REPLY_TIMEOUT: Duration = Duration::from_millis(1500);

impl Default for UoRconConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST.to_string(), DEFAULT_PORT, String::new())
    }
}

impl UoRconConfig {
    pub fn new(host: String, port: u16, password: String) -> Self {
        Self {
            host,
            port,
            password,
            reply_timeout: DEFAULT_REPLY_TIMEOUT,
        }
    }

    /// How long to wait for the single reply datagram before giving up with a
    /// timeout. Applies to the challenge round trip and to every command that
    /// does not carry its own deadline.
    pub fn reply_timeout(mut self, t: Duration) -> Self {
        self.reply_timeout = t;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_protocol() {
        let config = UoRconConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 27030);
        assert_eq!(config.password, "");
        assert_eq!(config.reply_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn builder_overrides_reply_timeout() {
        let config = UoRconConfig::new("10.0.0.5".to_string(), 27031, "pw".to_string())
            .reply_timeout(Duration::from_secs(3));
        assert_eq!(config.reply_timeout, Duration::from_secs(3));
        assert_eq!(config.password, "pw");
    }
}
