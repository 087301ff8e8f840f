//! Discrete integer steps.

use super::{clamp_unit, ValueConverter};

/// Integer plain values `0..=step_count`, evenly spaced over 0.0-1.0.
///
/// `step_count + 1` positions exist, so a 16-value MIDI channel uses
/// `SteppedConverter::new(15)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SteppedConverter {
    step_count: u32,
}

impl SteppedConverter {
    pub fn new(step_count: u32) -> Self {
        Self { step_count }
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }
}

impl ValueConverter for SteppedConverter {
    fn plain_to_normalized(&self, plain: f64) -> f64 {
        if self.step_count == 0 {
            return 0.0;
        }
        let steps = self.step_count as f64;
        let plain = if plain.is_nan() { 0.0 } else { plain };
        plain.round().clamp(0.0, steps) / steps
    }

    fn normalized_to_plain(&self, normalized: f64) -> f64 {
        (clamp_unit(normalized) * self.step_count as f64).round()
    }

    fn value_as_text(&self, plain: f64) -> String {
        format!("{}", plain.round() as i64)
    }

    fn parse_text(&self, text: &str) -> Option<f64> {
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .map(f64::round)
    }

    fn range(&self) -> (f64, f64) {
        (0.0, self.step_count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_step_round_trips() {
        for step_count in [1u32, 15, 127] {
            let stepped = SteppedConverter::new(step_count);
            for plain in 0..=step_count {
                let normalized = stepped.plain_to_normalized(plain as f64);
                assert_eq!(
                    stepped.normalized_to_plain(normalized),
                    plain as f64,
                    "step {} of {}",
                    plain,
                    step_count
                );
            }
        }
    }

    #[test]
    fn test_quantizes_between_steps() {
        let stepped = SteppedConverter::new(15);
        assert_eq!(stepped.normalized_to_plain(0.02), 0.0);
        assert_eq!(stepped.normalized_to_plain(0.05), 1.0);
        assert_eq!(stepped.plain_to_normalized(2.4), 2.0 / 15.0);
    }

    #[test]
    fn test_clamps_out_of_range() {
        let stepped = SteppedConverter::new(127);
        assert_eq!(stepped.plain_to_normalized(200.0), 1.0);
        assert_eq!(stepped.plain_to_normalized(-3.0), 0.0);
        assert_eq!(stepped.normalized_to_plain(1.5), 127.0);
    }

    #[test]
    fn test_huge_text_clamps() {
        let stepped = SteppedConverter::new(127);
        for text in ["1e300", "1e400"] {
            let plain = stepped.text_as_value(text);
            assert_eq!(stepped.normalized_to_plain(stepped.plain_to_normalized(plain)), 127.0);
        }
        let plain = stepped.text_as_value("-1e400");
        assert_eq!(stepped.plain_to_normalized(plain), 0.0);
    }

    #[test]
    fn test_text() {
        let stepped = SteppedConverter::new(127);
        assert_eq!(stepped.value_as_text(60.0), "60");
        assert_eq!(stepped.text_as_value("60"), 60.0);
        assert_eq!(stepped.text_as_value("59.6"), 60.0);
        assert_eq!(stepped.text_as_value("middle c"), 0.0);
    }

    #[test]
    fn test_zero_steps() {
        let stepped = SteppedConverter::new(0);
        assert_eq!(stepped.plain_to_normalized(5.0), 0.0);
        assert_eq!(stepped.normalized_to_plain(1.0), 0.0);
        assert_eq!(stepped.range(), (0.0, 0.0));
    }
}
