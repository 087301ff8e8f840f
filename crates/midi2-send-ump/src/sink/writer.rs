//! Text dump sink.

use std::io::Write;

use super::MessageSink;
use crate::error::Result;
use crate::packet::UniversalMidiPacket;

/// Writes each packet as a line of hex words, e.g. `41923C10 FFFF1234`.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> MessageSink for WriterSink<W> {
    fn send(&mut self, packet: UniversalMidiPacket) -> Result<()> {
        writeln!(self.writer, "{}", packet)?;
        self.writer.flush()?;
        Ok(())
    }
}
