//! Destinations for finished packets.
//!
//! - [`ChannelSink`]: hands packets to another thread over a bounded channel
//! - [`WriterSink`]: writes one hex line per packet to any `io::Write`
//! - [`MidiOutputSink`]: hardware MIDI 1.0 port via midir (`midi-io` feature)

mod channel;
mod writer;

#[cfg(feature = "midi-io")]
mod output;

pub use channel::{packet_channel, packet_channel_with_capacity, ChannelSink};
pub use writer::WriterSink;

#[cfg(feature = "midi-io")]
pub use output::{MidiOutputDevice, MidiOutputSink};

use crate::error::Result;
use crate::packet::UniversalMidiPacket;

/// Accepts a finished packet for immediate transmission.
///
/// The sink takes the packet by value and must not keep references into it
/// after returning. Errors are the sink's own report; callers are free to
/// log and drop them.
pub trait MessageSink {
    fn send(&mut self, packet: UniversalMidiPacket) -> Result<()>;
}

impl<S: MessageSink + ?Sized> MessageSink for Box<S> {
    fn send(&mut self, packet: UniversalMidiPacket) -> Result<()> {
        (**self).send(packet)
    }
}

impl<S: MessageSink + ?Sized> MessageSink for &mut S {
    fn send(&mut self, packet: UniversalMidiPacket) -> Result<()> {
        (**self).send(packet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;

    #[derive(Default)]
    struct Counting {
        sent: usize,
    }

    impl MessageSink for Counting {
        fn send(&mut self, _packet: UniversalMidiPacket) -> Result<()> {
            self.sent += 1;
            Ok(())
        }
    }

    struct Broken;

    impl MessageSink for Broken {
        fn send(&mut self, _packet: UniversalMidiPacket) -> Result<()> {
            Err(TransportError::Disconnected)
        }
    }

    fn packet() -> UniversalMidiPacket {
        UniversalMidiPacket::from_words(&[0x4090_3C00, 0xFFFF_0000]).unwrap()
    }

    #[test]
    fn test_boxed_and_borrowed_sinks() {
        let mut counting = Counting::default();
        {
            let mut borrowed = &mut counting;
            MessageSink::send(&mut borrowed, packet()).unwrap();
        }
        assert_eq!(counting.sent, 1);

        let mut boxed: Box<dyn MessageSink> = Box::new(Counting::default());
        assert!(boxed.send(packet()).is_ok());

        let mut broken: Box<dyn MessageSink> = Box::new(Broken);
        assert!(matches!(
            broken.send(packet()),
            Err(TransportError::Disconnected)
        ));
    }
}
