//! Hardware MIDI output via a dedicated thread.
//!
//! OS MIDI 1.0 ports cannot carry UMP, so packets are translated with
//! [`to_midi1_bytes`](crate::convert::to_midi1_bytes) just before they
//! reach midir. The packet handed to the sink is never modified.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use midir::{MidiOutput, MidiOutputConnection};
use tracing::{debug, info, warn};

use super::MessageSink;
use crate::convert::to_midi1_bytes;
use crate::error::{Result, TransportError};
use crate::packet::UniversalMidiPacket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidiOutputDevice {
    pub index: usize,
    pub name: String,
}

enum OutputCommand {
    Connect(usize, Sender<Result<String>>),
    Disconnect,
    Send([u8; 3]),
    Shutdown,
}

/// Fire-and-forget MIDI output. `send` only queues; the output thread writes.
pub struct MidiOutputSink {
    client_name: String,
    command_sender: Sender<OutputCommand>,
    connected_device: Arc<arc_swap::ArcSwap<Option<String>>>,
    is_connected: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl MidiOutputSink {
    pub fn new(client_name: impl Into<String>) -> Result<Self> {
        let client_name = client_name.into();
        let (command_sender, command_receiver) = bounded(1024);
        let connected_device = Arc::new(arc_swap::ArcSwap::new(Arc::new(None)));
        let is_connected = Arc::new(AtomicBool::new(false));

        let thread_client_name = client_name.clone();
        let connected_device_clone = Arc::clone(&connected_device);
        let is_connected_clone = Arc::clone(&is_connected);

        let handle = thread::Builder::new()
            .name("midi2-send-output".to_string())
            .spawn(move || {
                Self::output_thread(
                    &thread_client_name,
                    command_receiver,
                    connected_device_clone,
                    is_connected_clone,
                );
            })?;

        Ok(Self {
            client_name,
            command_sender,
            connected_device,
            is_connected,
            thread: Some(handle),
        })
    }

    fn output_thread(
        client_name: &str,
        command_receiver: Receiver<OutputCommand>,
        connected_device: Arc<arc_swap::ArcSwap<Option<String>>>,
        is_connected: Arc<AtomicBool>,
    ) {
        let mut connection: Option<MidiOutputConnection> = None;

        for command in command_receiver.iter() {
            match command {
                OutputCommand::Connect(device_index, reply) => {
                    if let Some(conn) = connection.take() {
                        conn.close();
                    }

                    let result = match Self::connect_to_device(client_name, device_index) {
                        Ok((conn, name)) => {
                            info!("Connected MIDI output: {}", name);
                            connection = Some(conn);
                            is_connected.store(true, Ordering::SeqCst);
                            connected_device.store(Arc::new(Some(name.clone())));
                            Ok(name)
                        }
                        Err(e) => {
                            warn!("Failed to connect MIDI output {}: {}", device_index, e);
                            is_connected.store(false, Ordering::SeqCst);
                            connected_device.store(Arc::new(None));
                            Err(e)
                        }
                    };
                    let _ = reply.send(result);
                }
                OutputCommand::Disconnect => {
                    if let Some(conn) = connection.take() {
                        conn.close();
                        is_connected.store(false, Ordering::SeqCst);
                        connected_device.store(Arc::new(None));
                    }
                }
                OutputCommand::Send(bytes) => {
                    if let Some(ref mut conn) = connection {
                        if let Err(e) = conn.send(&bytes) {
                            warn!("MIDI output send failed: {}", e);
                        }
                    } else {
                        debug!("Cannot send MIDI message: no device connected");
                    }
                }
                OutputCommand::Shutdown => break,
            }
        }

        if let Some(conn) = connection.take() {
            conn.close();
        }
    }

    fn connect_to_device(
        client_name: &str,
        device_index: usize,
    ) -> Result<(MidiOutputConnection, String)> {
        let midi_output = MidiOutput::new(client_name)?;

        let ports = midi_output.ports();
        let port = ports.get(device_index).ok_or_else(|| {
            TransportError::Device(format!("MIDI output device {} not found", device_index))
        })?;

        let port_name = midi_output
            .port_name(port)
            .unwrap_or_else(|_| format!("Device {}", device_index));

        let connection = midi_output.connect(port, client_name)?;

        Ok((connection, port_name))
    }

    pub fn list_devices(client_name: &str) -> Vec<MidiOutputDevice> {
        let mut devices = Vec::new();
        if let Ok(midi_output) = MidiOutput::new(client_name) {
            for (index, port) in midi_output.ports().iter().enumerate() {
                let name = midi_output
                    .port_name(port)
                    .unwrap_or_else(|_| format!("Unknown Device {}", index));
                devices.push(MidiOutputDevice { index, name });
            }
        }
        devices
    }

    /// Connect to the port at `device_index`, waiting for the output thread.
    /// Returns the port name.
    pub fn connect(&self, device_index: usize) -> Result<String> {
        let not_running = || TransportError::Device("MIDI output thread not running".to_string());
        let (reply, response) = bounded(1);
        self.command_sender
            .send(OutputCommand::Connect(device_index, reply))
            .map_err(|_| not_running())?;
        response.recv().map_err(|_| not_running())?
    }

    /// Connect to the first port whose name contains `name` (case-insensitive).
    pub fn connect_by_name(&self, name: &str) -> Result<String> {
        let devices = Self::list_devices(&self.client_name);
        let device = devices
            .iter()
            .find(|d| d.name.to_lowercase().contains(&name.to_lowercase()))
            .ok_or_else(|| {
                TransportError::Device(format!("No MIDI output device found matching '{}'", name))
            })?;
        self.connect(device.index)
    }

    pub fn disconnect(&self) {
        let _ = self.command_sender.send(OutputCommand::Disconnect);
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected.load(Ordering::SeqCst)
    }

    pub fn connected_device_name(&self) -> Option<String> {
        self.connected_device.load().as_ref().clone()
    }
}

impl MessageSink for MidiOutputSink {
    fn send(&mut self, packet: UniversalMidiPacket) -> Result<()> {
        let bytes = to_midi1_bytes(&packet).ok_or_else(|| {
            TransportError::Unsupported(format!("no MIDI 1.0 translation for {}", packet))
        })?;
        if !self.is_connected() {
            return Err(TransportError::Disconnected);
        }
        self.command_sender
            .try_send(OutputCommand::Send(bytes))
            .map_err(|_| TransportError::QueueFull)
    }
}

impl Drop for MidiOutputSink {
    /// Queued messages are written before the output thread exits.
    fn drop(&mut self) {
        let _ = self.command_sender.send(OutputCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
