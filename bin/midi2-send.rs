//! Command-line note sender.
//!
//! ```text
//! midi2-send [--config FILE] [--port NAME] [--list-ports] [--dry-run] [Name=Value ...]
//! ```
//!
//! Applies each `Name=Value` as a committed text edit, then commits `Send`
//! once. Packets go to stdout as hex words unless a port is configured.

use std::env;

use midi2_send::{
    Error, MessageComposer, MessageSink, OutputConfig, ParamId, Result, SendConfig, WriterSink,
};

const USAGE: &str = "usage: midi2-send [--config FILE] [--port NAME] [--list-ports] [--dry-run] [Name=Value ...]";

#[derive(Debug, Default)]
struct Args {
    config: Option<String>,
    port: Option<String>,
    list_ports: bool,
    dry_run: bool,
    help: bool,
    assignments: Vec<(ParamId, String)>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => parsed.config = Some(required_value(&mut args, "--config")?),
            "--port" => parsed.port = Some(required_value(&mut args, "--port")?),
            "--list-ports" => parsed.list_ports = true,
            "--dry-run" => parsed.dry_run = true,
            "-h" | "--help" => parsed.help = true,
            _ => {
                let (name, text) = arg
                    .split_once('=')
                    .ok_or_else(|| Error::InvalidAssignment(arg.clone()))?;
                let id: ParamId = name.trim().parse()?;
                if id == ParamId::Send {
                    return Err(Error::InvalidAssignment(arg));
                }
                parsed.assignments.push((id, text.to_string()));
            }
        }
    }

    Ok(parsed)
}

fn required_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| Error::Usage(format!("{} needs a value\n{}", flag, USAGE)))
}

#[cfg(feature = "midi-hardware")]
fn open_port(client_name: &str, name: &str) -> Result<Box<dyn MessageSink>> {
    let sink = midi2_send::MidiOutputSink::new(client_name)?;
    let connected = sink.connect_by_name(name)?;
    tracing::info!("Sending to MIDI port {}", connected);
    Ok(Box::new(sink))
}

#[cfg(not(feature = "midi-hardware"))]
fn open_port(_client_name: &str, name: &str) -> Result<Box<dyn MessageSink>> {
    Err(midi2_send::TransportError::Unsupported(format!(
        "cannot open port '{}': built without the midi-hardware feature",
        name
    ))
    .into())
}

#[cfg(feature = "midi-hardware")]
fn list_ports(client_name: &str) -> Result<()> {
    for device in midi2_send::MidiOutputSink::list_devices(client_name) {
        println!("{}: {}", device.index, device.name);
    }
    Ok(())
}

#[cfg(not(feature = "midi-hardware"))]
fn list_ports(_client_name: &str) -> Result<()> {
    Err(midi2_send::TransportError::Unsupported(
        "cannot list ports: built without the midi-hardware feature".to_string(),
    )
    .into())
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only packets.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => SendConfig::load(path)?,
        None => SendConfig::default(),
    };
    config.validate()?;
    if let Some(name) = args.port {
        config.output = OutputConfig::Port { name };
    }

    if args.list_ports {
        return list_ports(&config.client_name);
    }

    let sink: Box<dyn MessageSink> = if args.dry_run {
        Box::new(WriterSink::new(std::io::sink()))
    } else {
        match &config.output {
            OutputConfig::Stdout => Box::new(WriterSink::stdout()),
            OutputConfig::Port { name } => open_port(&config.client_name, name)?,
        }
    };

    let mut composer = MessageComposer::builder(sink)
        .defaults(&config.defaults)
        .build()?;
    for (id, text) in &args.assignments {
        composer.commit_text(id.name(), text);
    }

    if args.dry_run {
        let message = composer.resolve();
        println!("{:?}", message);
        println!("{}", message.encode());
        return Ok(());
    }

    composer.commit_edit(ParamId::Send.name(), 1.0);
    match composer.take_transport_error() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
