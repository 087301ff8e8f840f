//! # MIDI2-Send
//!
//! Compose a MIDI 2.0 Note On / Note Off message from a fixed set of
//! parameters and send it as a Universal MIDI Packet.
//!
//! ## Architecture
//!
//! MIDI2-Send is an umbrella crate that coordinates:
//! - **midi2-send-core** - Parameters and value converters (range, stepped, enumerated, hex)
//! - **midi2-send-ump** - UMP encoding and output sinks (channel, writer, hardware MIDI)
//!
//! This crate adds the parameter schema and the [`MessageComposer`] that
//! turns a committed `Send` edit into exactly one packet.
//!
//! ## Quick Start
//!
//! ```
//! use midi2_send::{packet_channel, MessageComposer, ParameterEdit};
//!
//! let (sink, packets) = packet_channel();
//! let mut composer = MessageComposer::builder(sink)
//!     .initial("Channel", "2")
//!     .initial("Pitch", "60")
//!     .build()?;
//!
//! // Host edit notifications: dragging does nothing, the commit sends.
//! composer.handle_edit(&ParameterEdit::perform("Send", 1.0));
//! composer.handle_edit(&ParameterEdit::commit("Send", 1.0));
//!
//! assert_eq!(packets.len(), 1);
//! # Ok::<(), midi2_send::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Composition with channel and writer sinks
//! - `midi-hardware` - Hardware MIDI output through midir

/// Re-export of midi2-send-core for direct access
pub use midi2_send_core as core;

/// Re-export of midi2-send-ump for direct access
pub use midi2_send_ump as ump;

// Parameter model
pub use midi2_send_core::{
    EditPhase, EnumeratedConverter, HexDisplayConverter, Parameter, ParameterEdit, ParameterSet,
    RangeConverter, SteppedConverter, ValueConverter,
};

// Packets and sinks
pub use midi2_send_ump::{
    encode, packet_channel, packet_channel_with_capacity, ChannelSink, MessageSink, NoteKind,
    NoteMessage, PacketError, TransportError, UniversalMidiPacket, WriterSink,
};

#[cfg(feature = "midi-hardware")]
pub use midi2_send_ump::{MidiOutputDevice, MidiOutputSink};

pub mod error;
pub use error::{Error, Result};

pub mod schema;
pub use schema::{build_parameter_set, ParamId};

mod composer;
pub use composer::MessageComposer;

pub mod config;
pub use config::{ComposerBuilder, OutputConfig, SendConfig};
