//! Universal MIDI Packet container.

use std::fmt;

use crate::error::PacketError;

/// Largest UMP message, in 32-bit words.
pub const MAX_WORDS: usize = 4;

/// UMP message type nibble for MIDI 2.0 Channel Voice messages.
pub const MIDI2_CHANNEL_VOICE: u8 = 0x4;

/// Number of 32-bit words a message of the given type occupies.
///
/// Only the low nibble of `message_type` is considered.
pub const fn word_count(message_type: u8) -> usize {
    match message_type & 0x0F {
        // Utility, System, MIDI 1.0 Channel Voice, reserved
        0x0 | 0x1 | 0x2 | 0x6 | 0x7 => 1,
        // Data (SysEx7), MIDI 2.0 Channel Voice, reserved
        0x3 | 0x4 | 0x8 | 0x9 | 0xA => 2,
        0xB | 0xC => 3,
        // Data (SysEx8/Mixed Data), Flex Data, UMP Stream, reserved
        _ => 4,
    }
}

/// One Universal MIDI Packet: 1-4 words, immutable once built.
///
/// Bytes are kept in wire order (big-endian within each word) alongside the
/// words so [`data`](Self::data) can hand out a slice without allocating.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniversalMidiPacket {
    words: [u32; MAX_WORDS],
    bytes: [u8; MAX_WORDS * 4],
    len: u8,
}

impl UniversalMidiPacket {
    /// Build a packet from raw words, checking the count against the
    /// message type in the first word.
    pub fn from_words(words: &[u32]) -> Result<Self, PacketError> {
        if words.is_empty() || words.len() > MAX_WORDS {
            return Err(PacketError::InvalidLength(words.len()));
        }
        let message_type = (words[0] >> 28) as u8;
        let expected = word_count(message_type);
        if words.len() != expected {
            return Err(PacketError::WordCountMismatch {
                message_type,
                expected,
                actual: words.len(),
            });
        }
        Ok(Self::pack(words))
    }

    /// Two-word packet for the encoder. The message type is known to be 0x4.
    pub(crate) fn from_pair(words: [u32; 2]) -> Self {
        debug_assert_eq!(word_count((words[0] >> 28) as u8), 2);
        Self::pack(&words)
    }

    fn pack(words: &[u32]) -> Self {
        let mut packet = Self {
            words: [0; MAX_WORDS],
            bytes: [0; MAX_WORDS * 4],
            len: words.len() as u8,
        };
        for (index, word) in words.iter().enumerate() {
            packet.words[index] = *word;
            packet.bytes[index * 4..index * 4 + 4].copy_from_slice(&word.to_be_bytes());
        }
        packet
    }

    #[inline]
    pub fn words(&self) -> &[u32] {
        &self.words[..self.len as usize]
    }

    /// Packet bytes in wire order.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.bytes[..self.size()]
    }

    /// Size in bytes (4 per word).
    #[inline]
    pub fn size(&self) -> usize {
        self.len as usize * 4
    }

    /// Message type nibble (bits 28-31 of the first word).
    #[inline]
    pub fn message_type(&self) -> u8 {
        (self.words[0] >> 28) as u8
    }

    /// UMP group (0-15).
    #[inline]
    pub fn group(&self) -> u8 {
        ((self.words[0] >> 24) & 0x0F) as u8
    }

    /// Status nibble of a channel voice message (0x9 = Note On, 0x8 = Note Off).
    #[inline]
    pub fn status(&self) -> u8 {
        ((self.words[0] >> 20) & 0x0F) as u8
    }

    /// MIDI channel (0-15) of a channel voice message.
    #[inline]
    pub fn channel(&self) -> u8 {
        ((self.words[0] >> 16) & 0x0F) as u8
    }
}

impl AsRef<[u8]> for UniversalMidiPacket {
    fn as_ref(&self) -> &[u8] {
        self.data()
    }
}

impl fmt::Debug for UniversalMidiPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniversalMidiPacket")
            .field("words", &format_args!("{}", self))
            .finish()
    }
}

/// Space-separated words as 8-digit uppercase hex, e.g. `41923C10 FFFF1234`.
impl fmt::Display for UniversalMidiPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, word) in self.words().iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:08X}", word)?;
        }
        Ok(())
    }
}

impl TryFrom<&[u32]> for UniversalMidiPacket {
    type Error = PacketError;

    fn try_from(words: &[u32]) -> Result<Self, Self::Error> {
        Self::from_words(words)
    }
}
