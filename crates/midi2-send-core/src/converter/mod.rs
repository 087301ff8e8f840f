//! Value converters between normalized, plain, and text representations.
//!
//! Every [`Parameter`](crate::Parameter) stores a normalized value in 0.0-1.0
//! and owns a converter that knows how to turn it into something meaningful:
//!
//! - [`RangeConverter`] - linear mapping onto `[min, max]` (velocity, attribute data)
//! - [`SteppedConverter`] - integer steps `0..=step_count` (group, channel, pitch)
//! - [`EnumeratedConverter`] - index into a list of labels (message kind)
//! - [`HexDisplayConverter`] - wraps another converter, shows and parses hex text
//!
//! # Example
//!
//! ```
//! use midi2_send_core::{HexDisplayConverter, RangeConverter, ValueConverter};
//!
//! let attribute = HexDisplayConverter::new(RangeConverter::new(0.0, 127.0, 0));
//! assert_eq!(attribute.value_as_text(127.0), "0x7F");
//! assert_eq!(attribute.text_as_value("0x7F"), 127.0);
//! assert_eq!(attribute.plain_to_normalized(127.0), 1.0);
//! ```

mod enumerated;
mod hex;
mod range;
mod stepped;

pub use enumerated::EnumeratedConverter;
pub use hex::HexDisplayConverter;
pub use range::RangeConverter;
pub use stepped::SteppedConverter;

use std::fmt;

/// Plain value produced by [`ValueConverter::text_as_value`] when the text
/// cannot be parsed. Converters clamp it into their own domain afterwards.
pub const TEXT_FALLBACK: f64 = 0.0;

/// Bidirectional mapping between a normalized value, a plain value, and text.
///
/// `plain_to_normalized` and `normalized_to_plain` are inverses over the
/// converter's domain. Both clamp out-of-range input instead of rejecting it.
pub trait ValueConverter: Send + Sync + fmt::Debug {
    /// Convert a plain value to normalized (0.0-1.0). Out-of-range input is clamped.
    fn plain_to_normalized(&self, plain: f64) -> f64;

    /// Convert a normalized value (0.0-1.0) to plain. Out-of-range input is clamped.
    fn normalized_to_plain(&self, normalized: f64) -> f64;

    /// Format a plain value for display.
    fn value_as_text(&self, plain: f64) -> String;

    /// Parse display text into a plain value.
    ///
    /// Returns `None` if the text cannot be parsed.
    fn parse_text(&self, text: &str) -> Option<f64>;

    /// Plain value range as `(min, max)`.
    fn range(&self) -> (f64, f64);

    /// Parse display text into a plain value, falling back to [`TEXT_FALLBACK`].
    fn text_as_value(&self, text: &str) -> f64 {
        self.parse_text(text).unwrap_or(TEXT_FALLBACK)
    }
}

impl<C: ValueConverter + ?Sized> ValueConverter for Box<C> {
    fn plain_to_normalized(&self, plain: f64) -> f64 {
        (**self).plain_to_normalized(plain)
    }

    fn normalized_to_plain(&self, normalized: f64) -> f64 {
        (**self).normalized_to_plain(normalized)
    }

    fn value_as_text(&self, plain: f64) -> String {
        (**self).value_as_text(plain)
    }

    fn parse_text(&self, text: &str) -> Option<f64> {
        (**self).parse_text(text)
    }

    fn range(&self) -> (f64, f64) {
        (**self).range()
    }

    fn text_as_value(&self, text: &str) -> f64 {
        (**self).text_as_value(text)
    }
}

/// Clamp to 0.0-1.0, treating NaN as 0.0.
#[inline]
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
