//! A named normalized value with an owned converter.

use crate::converter::{clamp_unit, ValueConverter};

/// How an edit arrives from the host.
///
/// Interactive drags arrive as a stream of `Perform` edits and end with one
/// `Commit`. Triggers only react to `Commit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPhase {
    /// Continuous change while the operator is still editing.
    Perform,
    /// Final value at the end of an edit.
    #[default]
    Commit,
}

impl EditPhase {
    #[inline]
    pub fn is_commit(self) -> bool {
        matches!(self, EditPhase::Commit)
    }
}

/// One edit notification for a named parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterEdit {
    pub name: String,
    /// New normalized value (clamped on apply).
    pub normalized: f64,
    pub phase: EditPhase,
}

impl ParameterEdit {
    pub fn perform(name: impl Into<String>, normalized: f64) -> Self {
        Self {
            name: name.into(),
            normalized,
            phase: EditPhase::Perform,
        }
    }

    pub fn commit(name: impl Into<String>, normalized: f64) -> Self {
        Self {
            name: name.into(),
            normalized,
            phase: EditPhase::Commit,
        }
    }
}

/// Named cell holding a normalized value in 0.0-1.0.
///
/// The plain and text forms are computed on demand through the converter,
/// so only the normalized value is ever stored.
#[derive(Debug)]
pub struct Parameter {
    name: String,
    normalized: f64,
    default_normalized: f64,
    converter: Box<dyn ValueConverter>,
}

impl Parameter {
    /// Create a parameter with normalized value 0.0.
    pub fn new(name: impl Into<String>, converter: impl ValueConverter + 'static) -> Self {
        Self::from_boxed(name, Box::new(converter))
    }

    pub fn from_boxed(name: impl Into<String>, converter: Box<dyn ValueConverter>) -> Self {
        Self {
            name: name.into(),
            normalized: 0.0,
            default_normalized: 0.0,
            converter,
        }
    }

    /// Set the default (and current) normalized value.
    pub fn with_default(mut self, normalized: f64) -> Self {
        let normalized = clamp_unit(normalized);
        self.default_normalized = normalized;
        self.normalized = normalized;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn converter(&self) -> &dyn ValueConverter {
        self.converter.as_ref()
    }

    #[inline]
    pub fn normalized(&self) -> f64 {
        self.normalized
    }

    #[inline]
    pub fn default_normalized(&self) -> f64 {
        self.default_normalized
    }

    /// Store a normalized value, clamped to 0.0-1.0.
    #[inline]
    pub fn set_normalized(&mut self, normalized: f64) {
        self.normalized = clamp_unit(normalized);
    }

    /// Current value in the converter's plain domain.
    #[inline]
    pub fn plain(&self) -> f64 {
        self.converter.normalized_to_plain(self.normalized)
    }

    pub fn set_plain(&mut self, plain: f64) {
        self.set_normalized(self.converter.plain_to_normalized(plain));
    }

    pub fn text(&self) -> String {
        self.converter.value_as_text(self.plain())
    }

    /// Apply display text. Unparsable text resolves to plain 0 (see
    /// [`ValueConverter::text_as_value`]). Returns the resulting plain value.
    pub fn set_text(&mut self, text: &str) -> f64 {
        if self.converter.parse_text(text).is_none() {
            tracing::debug!(
                "Unparsable value '{}' for parameter {}, using fallback",
                text,
                self.name
            );
        }
        self.set_plain(self.converter.text_as_value(text));
        self.plain()
    }

    pub fn reset(&mut self) {
        self.normalized = self.default_normalized;
    }
}
