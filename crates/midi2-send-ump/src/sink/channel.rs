//! Bounded channel sink for handing packets to another thread.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::MessageSink;
use crate::error::{Result, TransportError};
use crate::packet::UniversalMidiPacket;

const DEFAULT_CAPACITY: usize = 256;

/// Producer side of a packet channel. Never blocks.
#[derive(Clone)]
pub struct ChannelSink {
    sender: Sender<UniversalMidiPacket>,
}

impl MessageSink for ChannelSink {
    fn send(&mut self, packet: UniversalMidiPacket) -> Result<()> {
        self.sender.try_send(packet).map_err(|e| match e {
            TrySendError::Full(_) => TransportError::QueueFull,
            TrySendError::Disconnected(_) => TransportError::Disconnected,
        })
    }
}

pub fn packet_channel() -> (ChannelSink, Receiver<UniversalMidiPacket>) {
    packet_channel_with_capacity(DEFAULT_CAPACITY)
}

pub fn packet_channel_with_capacity(
    capacity: usize,
) -> (ChannelSink, Receiver<UniversalMidiPacket>) {
    let (sender, receiver) = bounded(capacity);
    tracing::debug!("Created packet channel with capacity {}", capacity);
    (ChannelSink { sender }, receiver)
}
