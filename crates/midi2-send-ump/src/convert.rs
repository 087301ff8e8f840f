//! Velocity scaling and MIDI 1.0 down-conversion.

use crate::packet::{UniversalMidiPacket, MIDI2_CHANNEL_VOICE};

/// Scale a 0-100 percentage to 16-bit MIDI 2.0 velocity.
///
/// `round(percent / 100 * 65535)`, clamped to 0-65535. NaN maps to 0.
#[inline]
pub fn velocity_from_percent(percent: f64) -> u16 {
    if percent.is_nan() {
        return 0;
    }
    (percent / 100.0 * 65535.0).round().clamp(0.0, 65535.0) as u16
}

/// Inverse of [`velocity_from_percent`].
#[inline]
pub fn velocity_to_percent(velocity: u16) -> f64 {
    velocity as f64 / 65535.0 * 100.0
}

/// Convert 16-bit MIDI 2.0 velocity to 7-bit MIDI 1.0.
#[inline]
pub fn midi2_velocity_to_midi1(v: u16) -> u8 {
    if v == 0 {
        0
    } else {
        let v16 = v as u32;
        ((v16 * 127 + 32767) / 65535).min(127) as u8
    }
}

/// Translate a MIDI 2.0 Note On / Note Off packet to a MIDI 1.0 message.
///
/// Group and attribute fields have no MIDI 1.0 equivalent and are dropped.
/// A Note On whose velocity scales down to 0 is sent with velocity 1, since
/// MIDI 1.0 reads velocity 0 as Note Off. Returns `None` for anything else.
pub fn to_midi1_bytes(packet: &UniversalMidiPacket) -> Option<[u8; 3]> {
    if packet.message_type() != MIDI2_CHANNEL_VOICE {
        return None;
    }
    let words = packet.words();
    let note = ((words[0] >> 8) & 0x7F) as u8;
    let velocity = midi2_velocity_to_midi1((words[1] >> 16) as u16);
    match packet.status() {
        0x9 => Some([0x90 | packet.channel(), note, velocity.max(1)]),
        0x8 => Some([0x80 | packet.channel(), note, velocity]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_from_percent() {
        assert_eq!(velocity_from_percent(100.0), 0xFFFF);
        assert_eq!(velocity_from_percent(0.0), 0);
        assert_eq!(velocity_from_percent(50.0), 32768);
        assert_eq!(velocity_from_percent(150.0), 0xFFFF);
        assert_eq!(velocity_from_percent(-3.0), 0);
        assert_eq!(velocity_from_percent(f64::NAN), 0);
    }

    #[test]
    fn test_velocity_to_percent() {
        assert_eq!(velocity_to_percent(0xFFFF), 100.0);
        assert_eq!(velocity_to_percent(0), 0.0);
        for percent in [0.0, 25.0, 50.0, 75.0, 100.0] {
            let back = velocity_to_percent(velocity_from_percent(percent));
            assert!((back - percent).abs() < 0.001, "{} -> {}", percent, back);
        }
    }

    #[test]
    fn test_midi2_velocity_to_midi1() {
        assert_eq!(midi2_velocity_to_midi1(0), 0);
        assert_eq!(midi2_velocity_to_midi1(0xFFFF), 127);
        assert_eq!(midi2_velocity_to_midi1(0x8000), 64);
    }

    #[test]
    fn test_note_on_to_midi1() {
        let packet = UniversalMidiPacket::from_words(&[0x4192_3C10, 0xFFFF_1234]).unwrap();
        assert_eq!(to_midi1_bytes(&packet), Some([0x92, 60, 127]));
    }

    #[test]
    fn test_silent_note_on_keeps_velocity_one() {
        let packet = UniversalMidiPacket::from_words(&[0x4090_3C00, 0x0000_0000]).unwrap();
        assert_eq!(to_midi1_bytes(&packet), Some([0x90, 60, 1]));
    }

    #[test]
    fn test_note_off_to_midi1() {
        let packet = UniversalMidiPacket::from_words(&[0x408F_4000, 0x0000_0000]).unwrap();
        assert_eq!(to_midi1_bytes(&packet), Some([0x8F, 64, 0]));
    }

    #[test]
    fn test_other_messages_not_translated() {
        // Control change
        let packet = UniversalMidiPacket::from_words(&[0x40B0_0700, 0xFFFF_FFFF]).unwrap();
        assert_eq!(to_midi1_bytes(&packet), None);
        // MIDI 1.0 channel voice
        let packet = UniversalMidiPacket::from_words(&[0x2090_3C64]).unwrap();
        assert_eq!(to_midi1_bytes(&packet), None);
    }
}
