//! Parameter set to packet to sink orchestration.

use midi2_send_core::{EditPhase, Parameter, ParameterEdit, ParameterSet};
use midi2_send_ump::{
    convert::velocity_from_percent, encode, MessageSink, NoteKind, NoteMessage, TransportError,
};

use crate::config::ComposerBuilder;
use crate::schema::{build_parameter_set, ParamId, SEND_THRESHOLD};

/// Owns the parameter schema and a sink, and fires one note message per
/// committed `Send` edit.
///
/// Sending is a single synchronous step: resolve the record, encode it,
/// hand the packet to the sink, then put `Send` back to 0. The reset
/// happens whether or not the sink accepted the packet, so the trigger is
/// always re-armed afterwards. A failed send is logged and kept for
/// [`take_transport_error`](Self::take_transport_error).
///
/// # Example
///
/// ```
/// use midi2_send::{packet_channel, MessageComposer};
///
/// let (sink, packets) = packet_channel();
/// let mut composer = MessageComposer::new(sink);
///
/// composer.commit_text("Pitch", "60");
/// assert!(composer.commit_edit("Send", 1.0));
///
/// let packet = packets.try_recv().unwrap();
/// assert_eq!(packet.words(), &[0x4090_3C00, 0xFFFF_0000]);
/// assert_eq!(composer.parameters().plain("Send"), 0.0);
/// ```
pub struct MessageComposer<S: MessageSink> {
    parameters: ParameterSet,
    sink: S,
    sent: u64,
    last_error: Option<TransportError>,
}

impl<S: MessageSink> MessageComposer<S> {
    /// Composer with every parameter at its default value.
    pub fn new(sink: S) -> Self {
        Self {
            parameters: build_parameter_set(),
            sink,
            sent: 0,
            last_error: None,
        }
    }

    pub fn builder(sink: S) -> ComposerBuilder<S> {
        ComposerBuilder::new(sink)
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    #[inline]
    pub fn parameter(&self, id: ParamId) -> &Parameter {
        self.parameters.get(id.name())
    }

    pub(crate) fn parameter_mut(&mut self, id: ParamId) -> &mut Parameter {
        self.parameters.get_mut(id.name())
    }

    /// Apply an edit notification from the host. Returns `true` if it fired a send.
    ///
    /// # Panics
    ///
    /// Panics if `edit.name` is not in the schema.
    pub fn handle_edit(&mut self, edit: &ParameterEdit) -> bool {
        self.parameters
            .get_mut(&edit.name)
            .set_normalized(edit.normalized);
        self.after_edit(&edit.name, edit.phase)
    }

    /// Store a value mid-drag. Never fires.
    pub fn perform_edit(&mut self, name: &str, normalized: f64) {
        self.parameters.get_mut(name).set_normalized(normalized);
        self.after_edit(name, EditPhase::Perform);
    }

    /// Store a final value. Returns `true` if it fired a send.
    pub fn commit_edit(&mut self, name: &str, normalized: f64) -> bool {
        self.parameters.get_mut(name).set_normalized(normalized);
        self.after_edit(name, EditPhase::Commit)
    }

    /// Apply display text as a committed edit. Unparsable text resolves to
    /// plain 0. Returns `true` if it fired a send.
    pub fn commit_text(&mut self, name: &str, text: &str) -> bool {
        self.parameters.get_mut(name).set_text(text);
        self.after_edit(name, EditPhase::Commit)
    }

    fn after_edit(&mut self, name: &str, phase: EditPhase) -> bool {
        let fire = phase.is_commit()
            && name == ParamId::Send.name()
            && self.parameter(ParamId::Send).plain() > SEND_THRESHOLD;
        if fire {
            self.dispatch();
        }
        fire
    }

    fn dispatch(&mut self) {
        let message = self.resolve();
        let packet = encode(&message);
        tracing::debug!(
            "Sending {} group={} channel={} pitch={}: {}",
            message.kind,
            message.group,
            message.channel,
            message.pitch,
            packet
        );

        match self.sink.send(packet) {
            Ok(()) => self.sent += 1,
            Err(e) => {
                tracing::warn!("Failed to send {}: {}", packet, e);
                self.last_error = Some(e);
            }
        }

        self.parameter_mut(ParamId::Send).set_plain(0.0);
    }

    /// The record a send would encode right now.
    pub fn resolve(&self) -> NoteMessage {
        let plain = |id: ParamId| self.parameter(id).plain().round();
        NoteMessage {
            kind: NoteKind::from_index(plain(ParamId::MessageType) as usize),
            group: plain(ParamId::Group) as u8,
            channel: plain(ParamId::Channel) as u8,
            pitch: plain(ParamId::Pitch) as u8,
            velocity: velocity_from_percent(self.parameter(ParamId::Velocity).plain()),
            attribute_type: plain(ParamId::AttributeType) as u8,
            attribute_value: plain(ParamId::AttributeValue) as u16,
        }
    }

    /// Restore every parameter to its default.
    pub fn reset(&mut self) {
        self.parameters.reset_all();
    }

    /// Packets the sink has accepted so far.
    pub fn sent_count(&self) -> u64 {
        self.sent
    }

    /// Most recent sink failure, cleared on read.
    pub fn take_transport_error(&mut self) -> Option<TransportError> {
        self.last_error.take()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use midi2_send_ump::{Result as TransportResult, UniversalMidiPacket};

    #[derive(Default)]
    struct Recording {
        packets: Vec<UniversalMidiPacket>,
    }

    impl MessageSink for Recording {
        fn send(&mut self, packet: UniversalMidiPacket) -> TransportResult<()> {
            self.packets.push(packet);
            Ok(())
        }
    }

    struct Failing;

    impl MessageSink for Failing {
        fn send(&mut self, _packet: UniversalMidiPacket) -> TransportResult<()> {
            Err(TransportError::Disconnected)
        }
    }

    fn composer() -> MessageComposer<Recording> {
        MessageComposer::new(Recording::default())
    }

    #[test]
    fn test_resolve_defaults() {
        let composer = composer();
        assert_eq!(
            composer.resolve(),
            NoteMessage {
                velocity: 0xFFFF,
                ..NoteMessage::default()
            }
        );
    }

    #[test]
    fn test_commit_fires_and_resets() {
        let mut composer = composer();
        assert!(composer.commit_edit("Send", 1.0));
        assert_eq!(composer.sink().packets.len(), 1);
        assert_eq!(composer.parameter(ParamId::Send).plain(), 0.0);
        assert_eq!(composer.sent_count(), 1);
    }

    #[test]
    fn test_perform_never_fires() {
        let mut composer = composer();
        composer.perform_edit("Send", 1.0);
        assert!(composer.sink().packets.is_empty());
        assert_eq!(composer.parameter(ParamId::Send).plain(), 1.0);

        // Committing something else does not fire a stored Send either.
        assert!(!composer.commit_edit("Pitch", 0.5));
        assert!(composer.sink().packets.is_empty());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut composer = composer();
        assert!(!composer.commit_edit("Send", 0.5));
        assert!(!composer.commit_edit("Send", 0.0));
        assert!(composer.commit_edit("Send", 0.51));
        assert_eq!(composer.sink().packets.len(), 1);
    }

    #[test]
    fn test_handle_edit_phases() {
        let mut composer = composer();
        assert!(!composer.handle_edit(&ParameterEdit::perform("Send", 1.0)));
        assert!(composer.handle_edit(&ParameterEdit::commit("Send", 1.0)));
        assert_eq!(composer.sink().packets.len(), 1);
    }

    #[test]
    fn test_commit_text_send() {
        let mut composer = composer();
        assert!(composer.commit_text("Send", "1"));
        assert!(!composer.commit_text("Send", "0"));
        assert!(!composer.commit_text("Send", "yes"));
        assert_eq!(composer.sink().packets.len(), 1);
    }

    #[test]
    fn test_failed_send_still_resets() {
        let mut composer = MessageComposer::new(Failing);
        assert!(composer.commit_edit("Send", 1.0));
        assert_eq!(composer.parameter(ParamId::Send).plain(), 0.0);
        assert_eq!(composer.sent_count(), 0);
        assert!(matches!(
            composer.take_transport_error(),
            Some(TransportError::Disconnected)
        ));
        assert!(composer.take_transport_error().is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut composer = composer();
        composer.commit_text("Pitch", "64");
        composer.commit_text("Velocity", "20");
        composer.reset();
        assert_eq!(composer.parameter(ParamId::Pitch).plain(), 0.0);
        assert_eq!(composer.parameter(ParamId::Velocity).plain(), 100.0);
    }

    #[test]
    #[should_panic(expected = "unknown parameter: Volume")]
    fn test_unknown_edit_panics() {
        composer().commit_edit("Volume", 1.0);
    }
}
