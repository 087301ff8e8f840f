//! Hexadecimal display decorator.

use std::num::IntErrorKind;

use super::ValueConverter;

/// Shows the wrapped converter's plain value as `0x`-prefixed uppercase hex.
///
/// Numeric mapping is forwarded to the inner converter unchanged, so
/// wrapping never alters a plain value, only its text. The digit count is
/// taken from the inner converter's maximum (`0x7F` for 0-127, `0xFFFF` for
/// 0-65535) and shorter values are zero-padded.
///
/// Text is always parsed as hex, with or without the `0x` prefix.
/// Unparsable text yields plain 0. Hex too large for 64 bits still parses
/// and clamps to the inner maximum.
#[derive(Debug)]
pub struct HexDisplayConverter {
    inner: Box<dyn ValueConverter>,
    digits: usize,
}

impl HexDisplayConverter {
    pub fn new(inner: impl ValueConverter + 'static) -> Self {
        Self::from_boxed(Box::new(inner))
    }

    pub fn from_boxed(inner: Box<dyn ValueConverter>) -> Self {
        let (_, max) = inner.range();
        let digits = format!("{:X}", max.round().max(0.0) as u64).len();
        Self { inner, digits }
    }

    pub fn inner(&self) -> &dyn ValueConverter {
        self.inner.as_ref()
    }

    /// Minimum number of hex digits in the text form.
    pub fn digits(&self) -> usize {
        self.digits
    }
}

impl ValueConverter for HexDisplayConverter {
    fn plain_to_normalized(&self, plain: f64) -> f64 {
        self.inner.plain_to_normalized(plain)
    }

    fn normalized_to_plain(&self, normalized: f64) -> f64 {
        self.inner.normalized_to_plain(normalized)
    }

    fn value_as_text(&self, plain: f64) -> String {
        let plain = if plain.is_nan() { 0.0 } else { plain };
        format!(
            "0x{:0width$X}",
            plain.round().max(0.0) as u64,
            width = self.digits
        )
    }

    fn parse_text(&self, text: &str) -> Option<f64> {
        let text = text.trim();
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        match u64::from_str_radix(digits, 16) {
            Ok(value) => Some(value as f64),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX as f64),
            Err(_) => None,
        }
    }

    fn range(&self) -> (f64, f64) {
        self.inner.range()
    }
}
