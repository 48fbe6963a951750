//! Sentence segmentation over cleaned document text.

/// Fragments of this many characters or fewer are dropped.
pub const MIN_SENTENCE_CHARS: usize = 10;

/// Split text on runs of `.`, `!`, `?` and yield trimmed sentences longer
/// than [`MIN_SENTENCE_CHARS`] characters, in document order.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminators() {
        let text = "The system shall allow login. It must be fast! Can users export data?";
        let got: Vec<&str> = sentences(text).collect();
        assert_eq!(
            got,
            ["The system shall allow login", "It must be fast", "Can users export data"]
        );
    }

    #[test]
    fn runs_of_terminators_count_once() {
        let got: Vec<&str> = sentences("Wait for it...!? The report shall be exported").collect();
        assert_eq!(got, ["Wait for it", "The report shall be exported"]);
    }

    #[test]
    fn short_fragments_are_dropped() {
        // "Exactly ten" is 11 chars; "0123456789" is exactly 10.
        let got: Vec<&str> = sentences("Ok. Ten chars. Exactly ten. 0123456789.").collect();
        assert_eq!(got, ["Exactly ten"]);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Ten two-byte characters: 20 bytes, 10 chars, so dropped.
        let got: Vec<&str> = sentences("éééééééééé. ééééééééééé.").collect();
        assert_eq!(got, ["ééééééééééé"]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(sentences("").count(), 0);
        assert_eq!(sentences("   ...  ").count(), 0);
    }
}
