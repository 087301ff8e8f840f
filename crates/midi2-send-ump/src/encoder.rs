//! MIDI 2.0 Channel Voice note encoding.
//!
//! Layout of the two-word packet (most significant byte first):
//!
//! ```text
//! word 0: [0x4 | group] [status | channel] [pitch] [attribute type]
//! word 1: [velocity (16 bit)]              [attribute value (16 bit)]
//! ```
//!
//! Note Off never carries attribute data: both attribute fields are
//! written as zero regardless of the record.

use midi2::prelude::*;

use crate::note::{NoteKind, NoteMessage};
use crate::packet::UniversalMidiPacket;

/// Helper to extract [u32; 2] from a message's data slice
#[inline]
fn data_to_array(data: &[u32]) -> [u32; 2] {
    [data[0], data[1]]
}

/// Pack a note record into a UMP packet.
///
/// # Panics
///
/// Panics if a field is outside its wire range (group/channel above 15,
/// pitch/attribute type above 127). Records are expected to arrive
/// range-clamped from their parameters.
pub fn encode(message: &NoteMessage) -> UniversalMidiPacket {
    assert!(message.group <= 0x0F, "group out of range: {}", message.group);
    assert!(
        message.channel <= 0x0F,
        "channel out of range: {}",
        message.channel
    );
    assert!(message.pitch <= 0x7F, "pitch out of range: {}", message.pitch);
    assert!(
        message.attribute_type <= 0x7F,
        "attribute type out of range: {}",
        message.attribute_type
    );

    let group = u4::new(message.group);
    let channel = u4::new(message.channel);
    let note = u7::new(message.pitch);

    let words = match message.kind {
        NoteKind::NoteOn => {
            let mut msg = midi2::channel_voice2::NoteOn::<[u32; 2]>::new();
            msg.set_group(group);
            msg.set_channel(channel);
            msg.set_note_number(note);
            msg.set_velocity(message.velocity);
            let [first, second] = data_to_array(msg.data());
            // Attribute fields are left empty by the builder; arbitrary
            // attribute types are written directly into their bytes.
            [
                (first & 0xFFFF_FF00) | message.attribute_type as u32,
                (second & 0xFFFF_0000) | message.attribute_value as u32,
            ]
        }
        NoteKind::NoteOff => {
            let mut msg = midi2::channel_voice2::NoteOff::<[u32; 2]>::new();
            msg.set_group(group);
            msg.set_channel(channel);
            msg.set_note_number(note);
            msg.set_velocity(message.velocity);
            let [first, second] = data_to_array(msg.data());
            [first & 0xFFFF_FF00, second & 0xFFFF_0000]
        }
    };

    UniversalMidiPacket::from_pair(words)
}
