//! Error types for packet construction and transport.

use thiserror::Error;

/// A word sequence that is not a valid Universal MIDI Packet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PacketError {
    #[error("UMP packet must hold 1-4 words, got {0}")]
    InvalidLength(usize),

    #[error("UMP message type {message_type:#X} needs {expected} words, got {actual}")]
    WordCountMismatch {
        message_type: u8,
        expected: usize,
        actual: usize,
    },
}

/// Failure reported by a [`MessageSink`](crate::MessageSink).
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("MIDI output not connected")]
    Disconnected,

    #[error("MIDI output queue full")]
    QueueFull,

    #[error("MIDI port error: {0}")]
    Port(String),

    #[error("MIDI device error: {0}")]
    Device(String),

    #[error("Unsupported: {0}")]
    Unsupported(String),
}

#[cfg(feature = "midi-io")]
impl From<midir::InitError> for TransportError {
    fn from(e: midir::InitError) -> Self {
        TransportError::Device(e.to_string())
    }
}

#[cfg(feature = "midi-io")]
impl From<midir::ConnectError<midir::MidiOutput>> for TransportError {
    fn from(e: midir::ConnectError<midir::MidiOutput>) -> Self {
        TransportError::Port(e.to_string())
    }
}

#[cfg(feature = "midi-io")]
impl From<midir::SendError> for TransportError {
    fn from(e: midir::SendError) -> Self {
        TransportError::Port(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TransportError>;
