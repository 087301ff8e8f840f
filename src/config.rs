//! Composer configuration: a builder for code, a TOML file for the binary.

use std::collections::BTreeMap;
use std::path::Path;

use midi2_send_ump::MessageSink;
use serde::Deserialize;

use crate::composer::MessageComposer;
use crate::error::{Error, Result};
use crate::schema::ParamId;

/// Builds a [`MessageComposer`] with start-up parameter values.
pub struct ComposerBuilder<S: MessageSink> {
    sink: S,
    initial: Vec<(String, String)>,
}

impl<S: MessageSink> ComposerBuilder<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            initial: Vec::new(),
        }
    }

    /// Replace the sink.
    pub fn sink<T: MessageSink>(self, sink: T) -> ComposerBuilder<T> {
        ComposerBuilder {
            sink,
            initial: self.initial,
        }
    }

    /// Start-up text value for a named parameter. Applied in call order.
    pub fn initial(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.initial.push((name.into(), text.into()));
        self
    }

    /// Start-up text values from a config table.
    pub fn defaults(mut self, values: &BTreeMap<String, String>) -> Self {
        self.initial
            .extend(values.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Fails with [`Error::UnknownParameter`] if a start-up value names a
    /// parameter outside the schema. `Send` start-up values are ignored:
    /// building never fires a message.
    pub fn build(self) -> Result<MessageComposer<S>> {
        let mut composer = MessageComposer::new(self.sink);
        for (name, text) in &self.initial {
            let id: ParamId = name.parse()?;
            if id == ParamId::Send {
                tracing::warn!("Ignoring start-up value '{}' for trigger {}", text, id);
                continue;
            }
            let plain = composer.parameter_mut(id).set_text(text);
            tracing::debug!("Start-up value {} = {} ({})", id, text, plain);
        }
        Ok(composer)
    }
}

/// Where the binary sends packets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OutputConfig {
    /// One hex line per packet on stdout.
    #[default]
    Stdout,
    /// Hardware MIDI port, matched by case-insensitive substring.
    Port { name: String },
}

/// File configuration for the `midi2-send` binary.
///
/// # Example TOML:
/// ```toml
/// client_name = "MIDI2-Send"
///
/// [output]
/// kind = "port"
/// name = "IAC"
///
/// [defaults]
/// Pitch = "60"
/// Velocity = "80"
/// AttributeType = "0x03"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SendConfig {
    /// OS MIDI client name.
    pub client_name: String,
    pub output: OutputConfig,
    /// Start-up text values by parameter name.
    pub defaults: BTreeMap<String, String>,
}

impl Default for SendConfig {
    fn default() -> Self {
        Self {
            client_name: "MIDI2-Send".to_string(),
            output: OutputConfig::default(),
            defaults: BTreeMap::new(),
        }
    }
}

impl SendConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check every `defaults` key against the schema.
    pub fn validate(&self) -> Result<()> {
        for name in self.defaults.keys() {
            if name.parse::<ParamId>().is_err() {
                return Err(Error::UnknownParameter(name.clone()));
            }
        }
        Ok(())
    }
}
