//! Integration tests for midi2-send-ump.
//!
//! These tests exercise encode-and-deliver workflows without hardware MIDI devices.

use std::thread;

use midi2_send_ump::{
    convert::{to_midi1_bytes, velocity_from_percent},
    encode, packet_channel, packet_channel_with_capacity, word_count, MessageSink, NoteKind,
    NoteMessage, PacketError, TransportError, UniversalMidiPacket, WriterSink,
};

fn middle_c(kind: NoteKind) -> NoteMessage {
    NoteMessage {
        kind,
        group: 1,
        channel: 2,
        pitch: 60,
        velocity: velocity_from_percent(100.0),
        attribute_type: 0x10,
        attribute_value: 0x1234,
    }
}

// ---------------------------------------------------------------------------
// 1. Encode then deliver across a thread boundary
// ---------------------------------------------------------------------------

#[test]
fn test_encoded_packets_cross_threads() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let (sink, receiver) = packet_channel();

    let producer = thread::spawn(move || {
        let mut sink = sink;
        for pitch in 60..64u8 {
            let packet = encode(&NoteMessage {
                pitch,
                ..middle_c(NoteKind::NoteOn)
            });
            sink.send(packet).unwrap();
        }
    });
    producer.join().unwrap();

    let pitches: Vec<u8> = receiver.try_iter().map(|p| p.data()[2]).collect();
    assert_eq!(pitches, vec![60, 61, 62, 63]);
}

#[test]
fn test_note_pair_on_writer() {
    let mut sink = WriterSink::new(Vec::new());
    sink.send(middle_c(NoteKind::NoteOn).encode()).unwrap();
    sink.send(middle_c(NoteKind::NoteOff).encode()).unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["41923C10 FFFF1234", "41823C00 FFFF0000"]);
}

// ---------------------------------------------------------------------------
// 2. Failures stay with the sink
// ---------------------------------------------------------------------------

#[test]
fn test_sink_errors_do_not_affect_packet() {
    let (mut sink, receiver) = packet_channel_with_capacity(1);
    let packet = middle_c(NoteKind::NoteOn).encode();

    sink.send(packet).unwrap();
    let err = sink.send(packet).unwrap_err();
    assert!(matches!(err, TransportError::QueueFull));

    drop(receiver);
    let err = sink.send(packet).unwrap_err();
    assert!(matches!(err, TransportError::Disconnected));

    assert_eq!(packet.words(), &[0x4192_3C10, 0xFFFF_1234]);
}

#[test]
fn test_dyn_sink_collection() {
    let (channel, receiver) = packet_channel();
    let mut sinks: Vec<Box<dyn MessageSink>> = vec![
        Box::new(channel),
        Box::new(WriterSink::new(Vec::new())),
    ];

    let packet = middle_c(NoteKind::NoteOff).encode();
    for sink in sinks.iter_mut() {
        sink.send(packet).unwrap();
    }
    assert_eq!(receiver.len(), 1);
}

// ---------------------------------------------------------------------------
// 3. Packet validation and MIDI 1.0 translation
// ---------------------------------------------------------------------------

#[test]
fn test_packet_validation_matches_word_table() {
    assert_eq!(word_count(0x4), 2);
    assert!(UniversalMidiPacket::from_words(&[0x4090_3C00, 0]).is_ok());
    assert_eq!(
        UniversalMidiPacket::from_words(&[0x4090_3C00]),
        Err(PacketError::WordCountMismatch {
            message_type: 0x4,
            expected: 2,
            actual: 1,
        })
    );
    assert_eq!(
        UniversalMidiPacket::from_words(&[]),
        Err(PacketError::InvalidLength(0))
    );
}

#[test]
fn test_encoded_note_translates_to_midi1() {
    let on = middle_c(NoteKind::NoteOn).encode();
    assert_eq!(to_midi1_bytes(&on), Some([0x92, 60, 127]));

    let off = middle_c(NoteKind::NoteOff).encode();
    assert_eq!(to_midi1_bytes(&off), Some([0x82, 60, 127]));

    let quiet = NoteMessage {
        velocity: 0,
        ..middle_c(NoteKind::NoteOn)
    }
    .encode();
    assert_eq!(to_midi1_bytes(&quiet), Some([0x92, 60, 1]));
}
