//! Async client for the UO-style binary RCON protocol spoken over UDP by
//! game servers. Each command is a single datagram exchange; authenticated
//! commands first fetch a one-shot 8-byte challenge token from the server.

pub mod client;
pub mod client_config;
pub mod commands;
pub mod errors;
pub mod packet;
pub mod transport;
pub mod verify;

pub use client::UoRconClient;
pub use client_config::UoRconConfig;
pub use errors::UoRconError;
pub use packet::Arg;
pub use verify::VerifyStore;
