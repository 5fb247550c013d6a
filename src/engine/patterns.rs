// ============================================================================
// Price Pattern Families
// Labeled, abbreviated and formatted Naira price notations
// ============================================================================

use crate::domain::NotationStyle;
use crate::interfaces::{PricePattern, RawMatch};
use crate::numeric::{parse_formatted, PriceError, PriceResult};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// Ungrouped digit runs longer than this are phone numbers, not prices.
/// Numbers written in spaced groups (`0801 234 5678`) are caught by
/// [`continues_digit_sequence`] instead.
const MAX_PLAIN_DIGITS: usize = 10;

// Letter markers must start a word so the `n` ending `Inspiron` is not one.
// Every pattern is case-insensitive, which covers `N`, `NGN`, `Naira`.

/// `450k`, `₦1.5m`, `NGN 2 b`, `1,500k`
static ABBREVIATED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:(?P<marker>(?:₦|\bnaira|\bngn|\bn)\s*)|\b)(?P<number>[0-9]{1,3}(?:,[0-9]{3})+(?:\.[0-9]+)?|[0-9]+(?:\.[0-9]+)?)\s*(?P<suffix>[kmb])\b",
    )
    .unwrap()
});

/// `₦1,000,000`, `N450,000`, `250000`
static FORMATTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:(?P<marker>(?:₦|\bnaira|\bngn|\bn)\s*)|\b)(?P<number>[0-9]{1,3}(?:,[0-9]{3})+|[0-9]{4,})\b",
    )
    .unwrap()
});

/// `Price: 450k`, `cost ₦1,200,000`, `Amount: 85000`
static LABELED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?P<label>(?:price|cost|amount)[\s:]+)(?P<marker>(?:₦|\bnaira|\bngn|\bn)\s*)?(?P<number>[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+(?:\.[0-9]+)?)(?:\s*(?P<suffix>[kmb])\b)?",
    )
    .unwrap()
});

/// Run `re` over `text` and lift each capture set into a [`RawMatch`].
fn collect_matches<'t>(re: &Regex, text: &'t str) -> Vec<RawMatch<'t>> {
    re.captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.name("number")?;
            Some(RawMatch {
                span: whole.range(),
                raw: whole.as_str(),
                label: caps.name("label").map(|m| m.as_str()),
                marker: caps.name("marker").map(|m| m.as_str()),
                number: number.as_str(),
                suffix: caps
                    .name("suffix")
                    .and_then(|m| m.as_str().chars().next()),
            })
        })
        .collect()
}

/// Whether `start` sits right after `<digit>,`, i.e. inside a grouped number
/// (`1,|500k`).
fn inside_digit_group(text: &str, start: usize) -> bool {
    let bytes = text.as_bytes();
    start >= 2 && bytes[start - 1] == b',' && bytes[start - 2].is_ascii_digit()
}

/// Whether `start` follows a whole digit group and one space or dash, as in
/// the last block of `0801 234 5678`.
fn continues_digit_sequence(text: &str, start: usize) -> bool {
    let Some(before) = text[..start].strip_suffix(|c: char| c == ' ' || c == '-') else {
        return false;
    };
    let head = before.trim_end_matches(|c: char| c.is_ascii_digit());
    head.len() < before.len() && !head.ends_with(|c: char| c.is_alphanumeric())
}

// ============================================================================
// Labeled
// ============================================================================

/// Amount introduced by `price`, `cost` or `amount`, with or without suffix.
pub struct LabeledPattern;

impl PricePattern for LabeledPattern {
    fn notation(&self) -> NotationStyle {
        NotationStyle::Labeled
    }

    fn name(&self) -> &str {
        "labeled"
    }

    fn find_matches<'t>(&self, text: &'t str) -> Vec<RawMatch<'t>> {
        collect_matches(&LABELED_RE, text)
    }
}

// ============================================================================
// Abbreviated
// ============================================================================

/// Decimal mantissa with a `k`/`m`/`b` magnitude suffix.
pub struct AbbreviatedPattern;

impl PricePattern for AbbreviatedPattern {
    fn notation(&self) -> NotationStyle {
        NotationStyle::Abbreviated
    }

    fn name(&self) -> &str {
        "abbreviated"
    }

    fn find_matches<'t>(&self, text: &'t str) -> Vec<RawMatch<'t>> {
        let mut matches = collect_matches(&ABBREVIATED_RE, text);
        matches.retain(|m| !inside_digit_group(text, m.span.start));
        matches
    }
}

// ============================================================================
// Formatted
// ============================================================================

/// Four or more digits, optionally comma grouped and currency prefixed.
///
/// Ungrouped runs that start with `0` or exceed ten digits are rejected:
/// those are phone numbers (`08012345678`, `2348012345678`). So is an
/// ungrouped, unmarked run continuing a spaced digit sequence
/// (`0801 234 5678`).
pub struct FormattedPattern;

impl PricePattern for FormattedPattern {
    fn notation(&self) -> NotationStyle {
        NotationStyle::Formatted
    }

    fn name(&self) -> &str {
        "formatted"
    }

    fn find_matches<'t>(&self, text: &'t str) -> Vec<RawMatch<'t>> {
        let mut matches = collect_matches(&FORMATTED_RE, text);
        matches.retain(|m| {
            let grouped = m.number.contains(',');
            !inside_digit_group(text, m.span.start)
                && (grouped || m.marker.is_some() || !continues_digit_sequence(text, m.span.start))
        });
        matches
    }

    fn value(&self, m: &RawMatch<'_>) -> PriceResult<Decimal> {
        if !m.number.contains(',')
            && (m.number.starts_with('0') || m.number.len() > MAX_PLAIN_DIGITS)
        {
            return Err(PriceError::InvalidInput);
        }
        parse_formatted(m.number)
    }
}

/// Pattern families in detection priority order
pub fn default_patterns() -> Vec<Box<dyn PricePattern>> {
    vec![
        Box::new(LabeledPattern),
        Box::new(AbbreviatedPattern),
        Box::new(FormattedPattern),
    ]
}
