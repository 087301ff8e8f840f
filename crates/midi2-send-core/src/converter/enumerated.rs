//! Labelled choice converter.

use super::{clamp_unit, ValueConverter};

/// Index into an ordered list of labels.
///
/// `index = round(normalized * (len - 1))`, text is the label at that index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumeratedConverter {
    labels: Vec<String>,
}

impl EnumeratedConverter {
    /// # Panics
    ///
    /// Panics if `labels` is empty.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        assert!(!labels.is_empty(), "EnumeratedConverter requires at least one label");
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[inline]
    fn last_index(&self) -> f64 {
        (self.labels.len() - 1) as f64
    }

    fn index_of(&self, plain: f64) -> usize {
        let plain = if plain.is_nan() { 0.0 } else { plain };
        plain.round().clamp(0.0, self.last_index()) as usize
    }
}

impl ValueConverter for EnumeratedConverter {
    fn plain_to_normalized(&self, plain: f64) -> f64 {
        if self.labels.len() == 1 {
            return 0.0;
        }
        self.index_of(plain) as f64 / self.last_index()
    }

    fn normalized_to_plain(&self, normalized: f64) -> f64 {
        (clamp_unit(normalized) * self.last_index()).round()
    }

    fn value_as_text(&self, plain: f64) -> String {
        self.labels[self.index_of(plain)].clone()
    }

    fn parse_text(&self, text: &str) -> Option<f64> {
        let text = text.trim();
        self.labels
            .iter()
            .position(|label| label == text)
            .or_else(|| {
                self.labels
                    .iter()
                    .position(|label| label.eq_ignore_ascii_case(text))
            })
            .map(|index| index as f64)
    }

    fn range(&self) -> (f64, f64) {
        (0.0, self.last_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_kinds() -> EnumeratedConverter {
        EnumeratedConverter::new(["Note On", "Note Off"])
    }

    #[test]
    fn test_index_mapping() {
        let kinds = message_kinds();
        assert_eq!(kinds.normalized_to_plain(0.0), 0.0);
        assert_eq!(kinds.normalized_to_plain(0.4), 0.0);
        assert_eq!(kinds.normalized_to_plain(0.6), 1.0);
        assert_eq!(kinds.normalized_to_plain(1.0), 1.0);
        assert_eq!(kinds.plain_to_normalized(1.0), 1.0);
        assert_eq!(kinds.plain_to_normalized(7.0), 1.0);
    }

    #[test]
    fn test_labels_round_trip() {
        let kinds = EnumeratedConverter::new(["a", "b", "c", "d"]);
        for (index, label) in kinds.labels().iter().enumerate() {
            let normalized = kinds.plain_to_normalized(index as f64);
            assert_eq!(kinds.normalized_to_plain(normalized), index as f64);
            assert_eq!(&kinds.value_as_text(index as f64), label);
            assert_eq!(kinds.text_as_value(label), index as f64);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let kinds = message_kinds();
        assert_eq!(kinds.parse_text("note off"), Some(1.0));
        assert_eq!(kinds.parse_text(" Note On "), Some(0.0));
        assert_eq!(kinds.parse_text("Poly Pressure"), None);
        assert_eq!(kinds.text_as_value("Poly Pressure"), 0.0);
    }

    #[test]
    fn test_single_label() {
        let only = EnumeratedConverter::new(["Only"]);
        assert_eq!(only.plain_to_normalized(0.0), 0.0);
        assert_eq!(only.normalized_to_plain(1.0), 0.0);
        assert_eq!(only.value_as_text(3.0), "Only");
    }

    #[test]
    #[should_panic(expected = "at least one label")]
    fn test_empty_labels_panics() {
        let _ = EnumeratedConverter::new(Vec::<String>::new());
    }
}
