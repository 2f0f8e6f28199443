use crate::UoRconConfig;
use crate::verify::VerifyStore;

/// Client for one game server. Holds the endpoint and the store of pending
/// account-verification codes; every command opens its own short-lived UDP
/// socket, so the client itself carries no transport state and can be shared
/// behind `&self`.
#[derive(Debug)]
pub struct UoRconClient {
    pub(crate) config: UoRconConfig,
    pub(crate) verify_store: VerifyStore,
}

impl UoRconClient {
    pub fn new(config: UoRconConfig) -> Self {
        UoRconClient {
            config,
            verify_store: VerifyStore::default(),
        }
    }

    pub fn config(&self) -> &UoRconConfig {
        &self.config
    }
}

impl Default for UoRconClient {
    fn default() -> Self {
        Self::new(UoRconConfig::default())
    }
}
