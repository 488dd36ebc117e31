/// Reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Counts derived from the raw document text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub word_count: usize,
    pub character_count: usize,
    pub estimated_reading_minutes: usize,
}

impl DocumentStats {
    /// Compute statistics for `text`. Total over any input.
    pub fn compute(text: &str) -> Self {
        let word_count = word_count(text);
        Self {
            word_count,
            character_count: character_count(text),
            estimated_reading_minutes: reading_minutes(word_count),
        }
    }
}

/// Number of maximal non-whitespace runs.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Length in UTF-16 code units, matching what a text field reports.
pub fn character_count(text: &str) -> usize {
    text.encode_utf16().count()
}

pub fn reading_minutes(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_MINUTE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_text_is_all_zero() {
        assert_eq!(DocumentStats::compute(""), DocumentStats::default());
    }

    #[test]
    fn test_whitespace_only() {
        let stats = DocumentStats::compute("  \n\t  ");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.character_count, 6);
        assert_eq!(stats.estimated_reading_minutes, 0);
    }

    #[test]
    fn test_mixed_separators() {
        // Newlines and tabs separate words too, not just spaces
        assert_eq!(word_count("one two\nthree\tfour"), 4);
        assert_eq!(word_count("  leading and trailing  "), 3);
    }

    #[test]
    fn test_character_count_uses_code_units() {
        assert_eq!(character_count("abc"), 3);
        assert_eq!(character_count("كتاب"), 4);
        // Astral-plane characters take two code units
        assert_eq!(character_count("\u{1F980}"), 2);
    }

    #[test]
    fn test_reading_minutes_rounds_up() {
        assert_eq!(reading_minutes(0), 0);
        assert_eq!(reading_minutes(1), 1);
        assert_eq!(reading_minutes(200), 1);
        assert_eq!(reading_minutes(201), 2);
        assert_eq!(reading_minutes(1000), 5);
    }

    proptest! {
        #[test]
        fn prop_word_count_matches_runs(s in "[ a-z\t\n]{0,64}") {
            let mut runs = 0;
            let mut in_word = false;
            for c in s.chars() {
                if c.is_whitespace() {
                    in_word = false;
                } else if !in_word {
                    in_word = true;
                    runs += 1;
                }
            }
            prop_assert_eq!(word_count(&s), runs);
        }

        #[test]
        fn prop_reading_minutes_is_ceiling(s in "\\PC{0,300}") {
            let stats = DocumentStats::compute(&s);
            let expected = (stats.word_count as f64 / 200.0).ceil() as usize;
            prop_assert_eq!(stats.estimated_reading_minutes, expected);
        }
    }
}
