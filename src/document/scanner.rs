//! Candidate scan over a whole template

use std::sync::LazyLock;

use regex::Regex;
use text_size::{TextRange, TextSize};

use crate::expression::Candidate;

/// The permissive shape of a placeholder: `&{`, anything up to the first
/// `}`, never crossing a line terminator.
pub const CANDIDATE_PATTERN: &str = r"&\{[^\n\r\x{2028}\x{2029}]*?\}";

static CANDIDATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CANDIDATE_PATTERN).expect("candidate pattern compiles"));

/// The compiled candidate pattern, shared by every scan
pub fn candidate_regex() -> &'static Regex {
    &CANDIDATE_REGEX
}

/// Successive non-overlapping candidates in `source`, left to right
pub fn candidates(source: &str) -> impl Iterator<Item = Candidate<'_>> {
    candidate_regex().find_iter(source).map(move |found| {
        let range = TextRange::new(
            TextSize::new(found.start() as u32),
            TextSize::new(found.end() as u32),
        );
        Candidate::new_unchecked(source, range)
    })
}
