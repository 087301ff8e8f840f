//! Resolved Note On / Note Off record.

use std::fmt;

/// Which note message to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NoteKind {
    #[default]
    NoteOn,
    NoteOff,
}

impl NoteKind {
    /// Display labels, in index order.
    pub const LABELS: [&'static str; 2] = ["Note On", "Note Off"];

    /// Map a choice index to a kind: 0 is Note On, anything else Note Off.
    pub fn from_index(index: usize) -> Self {
        if index == 0 {
            NoteKind::NoteOn
        } else {
            NoteKind::NoteOff
        }
    }

    /// Channel voice status nibble.
    #[inline]
    pub fn status(self) -> u8 {
        match self {
            NoteKind::NoteOn => 0x9,
            NoteKind::NoteOff => 0x8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NoteKind::NoteOn => Self::LABELS[0],
            NoteKind::NoteOff => Self::LABELS[1],
        }
    }
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every field of a MIDI 2.0 note message, already in wire ranges.
///
/// | Field | Range |
/// |---|---|
/// | `group`, `channel` | 0-15 |
/// | `pitch`, `attribute_type` | 0-127 |
/// | `velocity`, `attribute_value` | 0-65535 |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct NoteMessage {
    pub kind: NoteKind,
    pub group: u8,
    pub channel: u8,
    pub pitch: u8,
    pub velocity: u16,
    pub attribute_type: u8,
    pub attribute_value: u16,
}

impl NoteMessage {
    /// Encode into a packet. See [`encode`](crate::encode).
    pub fn encode(&self) -> crate::UniversalMidiPacket {
        crate::encoder::encode(self)
    }
}
