//! Linear range converter.

use super::{clamp_unit, ValueConverter};

/// Linear mapping between normalized 0.0-1.0 and plain `[min, max]`.
///
/// Text is the plain value with `precision` decimal places.
///
/// # Example
///
/// ```
/// use midi2_send_core::{RangeConverter, ValueConverter};
///
/// let velocity = RangeConverter::new(0.0, 100.0, 0);
/// assert_eq!(velocity.normalized_to_plain(0.5), 50.0);
/// assert_eq!(velocity.value_as_text(50.0), "50");
/// assert_eq!(velocity.plain_to_normalized(150.0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RangeConverter {
    min: f64,
    max: f64,
    precision: usize,
}

impl RangeConverter {
    /// Create a new range converter.
    ///
    /// # Panics
    ///
    /// Panics if `max <= min`.
    pub fn new(min: f64, max: f64, precision: usize) -> Self {
        assert!(
            max > min,
            "RangeConverter requires max > min, got min={}, max={}",
            min,
            max
        );
        Self {
            min,
            max,
            precision,
        }
    }

    /// Number of decimal places used for text.
    pub fn precision(&self) -> usize {
        self.precision
    }
}

impl ValueConverter for RangeConverter {
    fn plain_to_normalized(&self, plain: f64) -> f64 {
        clamp_unit((plain - self.min) / (self.max - self.min))
    }

    fn normalized_to_plain(&self, normalized: f64) -> f64 {
        self.min + clamp_unit(normalized) * (self.max - self.min)
    }

    fn value_as_text(&self, plain: f64) -> String {
        format!("{:.prec$}", plain, prec = self.precision)
    }

    fn parse_text(&self, text: &str) -> Option<f64> {
        text.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
    }

    fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}
