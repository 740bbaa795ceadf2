use serde::Serialize;

/// The rule that decided where a chunk ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// After a `.`, `!` or `?`
    Sentence,
    /// After a blank line (`\n\n`)
    Paragraph,
    /// After a single newline
    Line,
    /// After a space
    Word,
    /// Exactly at the size limit, possibly mid-word
    HardCut,
    /// The leftover text that already fit
    End,
}

impl Boundary {
    pub fn label(&self) -> &'static str {
        match self {
            Boundary::Sentence => "sentence",
            Boundary::Paragraph => "paragraph",
            Boundary::Line => "line",
            Boundary::Word => "word",
            Boundary::HardCut => "hard_cut",
            Boundary::End => "end",
        }
    }
}

/// Pick the break point inside `window`, which holds exactly `max_size` chars.
///
/// Rules are tried in priority order and the first one past its threshold
/// wins, even if a later rule would find a more natural spot:
/// - sentence end past `max_size / 2`
/// - blank line past `max_size / 3`
/// - newline past `max_size / 3`
/// - space past `max_size / 2`
/// - otherwise cut at the end of the window
///
/// Thresholds are compared against char offsets. The returned break is a byte
/// offset into `window` and always lands on a char boundary.
pub(crate) fn find_break(window: &str, max_size: usize) -> (usize, Boundary) {
    let half = max_size / 2;
    let third = max_size / 3;

    if let Some(at) = window.rfind(|c: char| matches!(c, '.' | '!' | '?')) {
        if char_offset(window, at) > half {
            return (at + 1, Boundary::Sentence);
        }
    }

    if let Some(at) = window.rfind("\n\n") {
        if char_offset(window, at) > third {
            return (at + 2, Boundary::Paragraph);
        }
    }

    if let Some(at) = window.rfind('\n') {
        if char_offset(window, at) > third {
            return (at + 1, Boundary::Line);
        }
    }

    if let Some(at) = window.rfind(' ') {
        if char_offset(window, at) > half {
            return (at + 1, Boundary::Word);
        }
    }

    (window.len(), Boundary::HardCut)
}

/// Number of chars before byte offset `at`
fn char_offset(s: &str, at: usize) -> usize {
    s[..at].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_past_half() {
        // '.' at offset 6, half of 10 is 5
        assert_eq!(find_break("abcdef.ghi", 10), (7, Boundary::Sentence));
    }

    #[test]
    fn test_sentence_at_half_is_rejected() {
        // '.' at offset 5 is not > 5, falls through to the hard cut
        assert_eq!(find_break("abcde.ghij", 10), (10, Boundary::HardCut));
    }

    #[test]
    fn test_paragraph_threshold_is_a_third() {
        // "\n\n" at offset 4, third of 10 is 3
        assert_eq!(find_break("abcd\n\nefgh", 10), (6, Boundary::Paragraph));
    }

    #[test]
    fn test_line_when_no_paragraph() {
        assert_eq!(find_break("abcd\nefghi", 10), (5, Boundary::Line));
    }

    #[test]
    fn test_word_boundary() {
        assert_eq!(find_break("abcdefg hi", 10), (8, Boundary::Word));
    }

    #[test]
    fn test_thresholds_count_chars_not_bytes() {
        // Four 2-byte chars push the '.' to byte 8 but it sits at char offset 4,
        // which is not past half of 10.
        let window = "éééé.abcde";
        assert_eq!(window.chars().count(), 10);
        assert_eq!(find_break(window, 10), (window.len(), Boundary::HardCut));
    }

    #[test]
    fn test_exclamation_ends_sentence() {
        assert_eq!(find_break("abcdef!ghi", 10), (7, Boundary::Sentence));
    }

    #[test]
    fn test_question_mark_ends_sentence() {
        assert_eq!(find_break("abcdef?ghi", 10), (7, Boundary::Sentence));
    }

    #[test]
    fn test_labels_match_serialized_names() {
        let all = [
            Boundary::Sentence,
            Boundary::Paragraph,
            Boundary::Line,
            Boundary::Word,
            Boundary::HardCut,
            Boundary::End,
        ];
        for boundary in all {
            assert_eq!(
                serde_json::to_value(boundary).unwrap(),
                serde_json::Value::from(boundary.label())
            );
        }
        assert_eq!(Boundary::HardCut.label(), "hard_cut");
    }
}
