//! The fixed parameter table a note message is composed from.
//!
//! | Name | Converter | Plain domain | Default |
//! |---|---|---|---|
//! | `Send` | range 0-1 | trigger | 0 |
//! | `MessageType` | enumerated | "Note On", "Note Off" | Note On |
//! | `Group` | stepped | 0-15 | 0 |
//! | `Channel` | stepped | 0-15 | 0 |
//! | `Pitch` | stepped | 0-127 | 0 |
//! | `Velocity` | range | 0-100 % | 100 % |
//! | `AttributeType` | hex over range | 0-127 | 0 |
//! | `AttributeValue` | hex over range | 0-65535 | 0 |

use std::fmt;
use std::str::FromStr;

use midi2_send_core::{
    EnumeratedConverter, HexDisplayConverter, Parameter, ParameterSet, RangeConverter,
    SteppedConverter,
};
use midi2_send_ump::NoteKind;

use crate::error::Error;

/// Plain value above which a committed `Send` edit fires.
pub const SEND_THRESHOLD: f64 = 0.5;

/// Names of the parameters in the schema, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    Send,
    MessageType,
    Group,
    Channel,
    Pitch,
    Velocity,
    AttributeType,
    AttributeValue,
}

impl ParamId {
    pub const ALL: [ParamId; 8] = [
        ParamId::Send,
        ParamId::MessageType,
        ParamId::Group,
        ParamId::Channel,
        ParamId::Pitch,
        ParamId::Velocity,
        ParamId::AttributeType,
        ParamId::AttributeValue,
    ];

    /// Name exposed to hosts. Must match exactly for UI bindings.
    pub fn name(self) -> &'static str {
        match self {
            ParamId::Send => "Send",
            ParamId::MessageType => "MessageType",
            ParamId::Group => "Group",
            ParamId::Channel => "Channel",
            ParamId::Pitch => "Pitch",
            ParamId::Velocity => "Velocity",
            ParamId::AttributeType => "AttributeType",
            ParamId::AttributeValue => "AttributeValue",
        }
    }

    fn parameter(self) -> Parameter {
        let name = self.name();
        match self {
            ParamId::Send => Parameter::new(name, RangeConverter::new(0.0, 1.0, 0)),
            ParamId::MessageType => Parameter::new(name, EnumeratedConverter::new(NoteKind::LABELS)),
            ParamId::Group | ParamId::Channel => Parameter::new(name, SteppedConverter::new(15)),
            ParamId::Pitch => Parameter::new(name, SteppedConverter::new(127)),
            ParamId::Velocity => {
                Parameter::new(name, RangeConverter::new(0.0, 100.0, 0)).with_default(1.0)
            }
            ParamId::AttributeType => Parameter::new(
                name,
                HexDisplayConverter::new(RangeConverter::new(0.0, 127.0, 0)),
            ),
            ParamId::AttributeValue => Parameter::new(
                name,
                HexDisplayConverter::new(RangeConverter::new(0.0, 65535.0, 0)),
            ),
        }
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| Error::UnknownParameter(s.to_string()))
    }
}

/// Build a fresh parameter set holding the whole schema at default values.
pub fn build_parameter_set() -> ParameterSet {
    ParameterSet::new(ParamId::ALL.into_iter().map(ParamId::parameter).collect())
}
