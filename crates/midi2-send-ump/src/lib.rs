//! Universal MIDI Packet encoding and delivery for MIDI2-Send.
//!
//! Builds MIDI 2.0 Channel Voice Note On / Note Off packets and hands them
//! to a [`MessageSink`].
//!
//! Feature gates: `midi-io` (hardware output through midir).

pub mod error;
pub use error::{PacketError, Result, TransportError};

mod packet;
pub use packet::{word_count, UniversalMidiPacket, MAX_WORDS, MIDI2_CHANNEL_VOICE};

mod note;
pub use note::{NoteKind, NoteMessage};

mod encoder;
pub use encoder::encode;

pub mod convert;

mod sink;
pub use sink::{packet_channel, packet_channel_with_capacity, ChannelSink, MessageSink, WriterSink};

#[cfg(feature = "midi-io")]
pub use sink::{MidiOutputDevice, MidiOutputSink};
