use thiserror::Error;

#[derive(Debug, Error)]
pub enum UoRconError {
    #[error("transport error: {0}")]
    Transport(std::io::Error),

    #[error("no reply within deadline")]
    Timeout,

    #[error("did not conform to rcon protocol: {0}")]
    Protocol(String),
}

impl From<std::io::Error> for UoRconError {
    fn from(e: std::io::Error) -> Self {
        UoRconError::Transport(e)
    }
}
