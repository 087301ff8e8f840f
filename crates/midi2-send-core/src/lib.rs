//! Parameter model for MIDI2-Send.
//!
//! A [`Parameter`] stores a normalized value and owns a [`ValueConverter`]
//! that maps it to a plain value and to display text. Converters compose by
//! wrapping: [`HexDisplayConverter`] changes how a value reads without
//! touching the number itself.
//!
//! A [`ParameterSet`] is the fixed, ordered collection a message is composed from.

pub mod converter;
pub use converter::{
    EnumeratedConverter, HexDisplayConverter, RangeConverter, SteppedConverter, ValueConverter,
    TEXT_FALLBACK,
};

mod parameter;
pub use parameter::{EditPhase, Parameter, ParameterEdit};

mod parameter_set;
pub use parameter_set::ParameterSet;
