// ============================================================================
// Substitution
// Rebuilds text from byte-span replacements in a single left-to-right pass
// ============================================================================

use std::borrow::Cow;
use std::ops::Range;

/// New text for one byte range of the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub span: Range<usize>,
    pub text: String,
}

impl Replacement {
    pub fn new(span: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }
}

/// Apply `replacements` to `source`.
///
/// Text outside the spans is copied unchanged. Spans that overlap an
/// earlier one, fall outside `source`, or split a UTF-8 character are
/// skipped, as are replacements identical to the text they cover. If
/// nothing is left to replace, `source` is returned borrowed.
pub fn substitute<'a>(source: &'a str, mut replacements: Vec<Replacement>) -> Cow<'a, str> {
    replacements.sort_by_key(|r| r.span.start);
    replacements.retain(|r| source.get(r.span.clone()).is_some_and(|old| old != r.text));

    if replacements.is_empty() {
        return Cow::Borrowed(source);
    }

    let mut output = String::with_capacity(source.len() + replacements.len() * 4);
    let mut cursor = 0;
    for replacement in &replacements {
        if replacement.span.start < cursor {
            tracing::warn!(
                start = replacement.span.start,
                end = replacement.span.end,
                "Skipping overlapping replacement"
            );
            continue;
        }
        output.push_str(&source[cursor..replacement.span.start]);
        output.push_str(&replacement.text);
        cursor = replacement.span.end;
    }
    output.push_str(&source[cursor..]);

    Cow::Owned(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_replacements_borrows() {
        let text = "Good morning everyone";
        assert!(matches!(substitute(text, Vec::new()), Cow::Borrowed(_)));
    }

    #[test]
    fn test_single_replacement() {
        let text = "iPhone 12 64gb 450k";
        let out = substitute(text, vec![Replacement::new(15..19, "459k")]);
        assert_eq!(out, "iPhone 12 64gb 459k");
    }

    #[test]
    fn test_order_independent() {
        let text = "A 450k B 1m C";
        let forward = substitute(
            text,
            vec![Replacement::new(2..6, "459k"), Replacement::new(9..11, "1.02m")],
        );
        let reversed = substitute(
            text,
            vec![Replacement::new(9..11, "1.02m"), Replacement::new(2..6, "459k")],
        );
        assert_eq!(forward, "A 459k B 1.02m C");
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_substring_collision_is_impossible() {
        // "1m" occurs inside "4.1m"; only the span that was detected changes
        let text = "4.1m and 1m";
        let out = substitute(
            text,
            vec![Replacement::new(0..4, "4.19m"), Replacement::new(9..11, "1.02m")],
        );
        assert_eq!(out, "4.19m and 1.02m");
    }

    #[test]
    fn test_identical_replacement_borrows() {
        let text = "only 450k";
        assert!(matches!(
            substitute(text, vec![Replacement::new(5..9, "450k")]),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_invalid_spans_skipped() {
        let text = "₦450k";
        // 1..3 splits the ₦ glyph; 2..40 is out of range
        let out = substitute(
            text,
            vec![Replacement::new(1..3, "x"), Replacement::new(2..40, "y")],
        );
        assert_eq!(out, "₦450k");
    }

    #[test]
    fn test_overlapping_spans_keep_first() {
        let text = "Price: 450k";
        let out = substitute(
            text,
            vec![Replacement::new(0..11, "Price: 459k"), Replacement::new(7..11, "459k")],
        );
        assert_eq!(out, "Price: 459k");
    }
}
