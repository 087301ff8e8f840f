//! Centralized error type for the midi2-send umbrella crate.
//!
//! Wraps subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport: {0}")]
    Transport(#[from] midi2_send_ump::TransportError),

    #[error("Packet: {0}")]
    Packet(#[from] midi2_send_ump::PacketError),

    #[error("Config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("Invalid assignment '{0}', expected Name=Value")]
    InvalidAssignment(String),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
