#![forbid(unsafe_code)]

//! Section-list mini-language.
//!
//! A section list is a `:`-separated sequence of tokens, each describing one or
//! more segment lengths in mm:
//!
//! | Token | Segments |
//! |-------|----------|
//! | `N`   | one segment of `N` |
//! | `A/B` | `B` segments of `A / B` (split `A` evenly) |
//! | `A*B` | `B` segments of `A` (repeat `A`) |
//!
//! `/` is tried before `*`, so `10/2*3` is a split whose count is not a number.
//!
//! Two parsers are provided:
//!
//! - [`parse_sections`] is lenient. A token with more than one `/` or `*`
//!   stops parsing and the segments gathered so far are returned. Unparsable
//!   numbers become `NaN` and flow through to the diagram.
//! - [`parse_sections_strict`] rejects anything the lenient parser would
//!   truncate or turn into `NaN`.
//!
//! ```
//! use bxui_layout::sections::parse_sections;
//!
//! assert_eq!(parse_sections("10:5/2:3*2"), vec![10.0, 2.5, 2.5, 3.0, 3.0]);
//! assert_eq!(parse_sections("10:1/2/3:4"), vec![10.0]);
//! ```

use std::fmt;
use std::iter::repeat_n;
use std::str::FromStr;

use bxui_core::form_number;
use bxui_core::debug;

/// Upper bound on the number of segments one token may contribute.
pub const MAX_REPEAT: usize = 10_000;

/// Token separator.
pub const SEPARATOR: char = ':';

/// Why a token was rejected by the strict parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxReason {
    /// More than one `/` or `*` in a token.
    TooManyOperands(char),
    /// A length is empty or not a finite number.
    NotANumber,
    /// A length is negative.
    Negative,
    /// A split or repeat count is not an integer in `1..=MAX_REPEAT`.
    BadCount,
}

impl fmt::Display for SyntaxReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyOperands(op) => write!(f, "more than one '{op}'"),
            Self::NotANumber => write!(f, "length is not a number"),
            Self::Negative => write!(f, "length is negative"),
            Self::BadCount => write!(f, "count must be a whole number from 1 to {MAX_REPEAT}"),
        }
    }
}

/// Section-list parse error (strict mode only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    /// The section list is empty.
    Empty,
    /// A token could not be parsed.
    InvalidSectionSyntax {
        /// Zero-based token position.
        index: usize,
        /// The offending token.
        token: String,
        /// What is wrong with it.
        reason: SyntaxReason,
    },
}

impl fmt::Display for SectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty section list"),
            Self::InvalidSectionSyntax {
                index,
                token,
                reason,
            } => write!(f, "invalid section #{} {token:?}: {reason}", index + 1),
        }
    }
}

impl std::error::Error for SectionError {}

/// A token after operator classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Single(&'a str),
    Split(&'a str, &'a str),
    Repeat(&'a str, &'a str),
    Malformed(char),
}

fn classify(token: &str) -> Token<'_> {
    match split_once_only(token, '/') {
        Operands::Many => return Token::Malformed('/'),
        Operands::Two(a, b) => return Token::Split(a, b),
        Operands::One => {}
    }
    match split_once_only(token, '*') {
        Operands::Many => Token::Malformed('*'),
        Operands::Two(a, b) => Token::Repeat(a, b),
        Operands::One => Token::Single(token),
    }
}

enum Operands<'a> {
    One,
    Two(&'a str, &'a str),
    Many,
}

fn split_once_only(token: &str, op: char) -> Operands<'_> {
    match token.split_once(op) {
        None => Operands::One,
        Some((_, rest)) if rest.contains(op) => Operands::Many,
        Some((a, b)) => Operands::Two(a, b),
    }
}

/// Number of loop iterations `i = 0, 1, ...` with `i < count`, capped at
/// [`MAX_REPEAT`].
#[must_use]
pub fn repeat_count(count: f64) -> usize {
    if count > 0.0 {
        count.ceil().min(MAX_REPEAT as f64) as usize
    } else {
        0
    }
}

/// Parse a section list, truncating at the first malformed token.
#[must_use]
pub fn parse_sections(spec: &str) -> Vec<f64> {
    let mut sections = Vec::new();
    for token in spec.split(SEPARATOR) {
        match classify(token) {
            // Only read by the log line, which is compiled out without tracing.
            Token::Malformed(_op) => {
                debug!(token, operator = %_op, kept = sections.len(), "truncating section list");
                return sections;
            }
            Token::Split(total, parts) => {
                let parts = form_number(parts);
                let length = form_number(total) / parts;
                sections.extend(repeat_n(length, repeat_count(parts)));
            }
            Token::Repeat(length, count) => {
                let count = form_number(count);
                sections.extend(repeat_n(form_number(length), repeat_count(count)));
            }
            Token::Single(length) => sections.push(form_number(length)),
        }
    }
    sections
}

/// Parse a section list, rejecting malformed tokens, non-numbers, negative
/// lengths and non-integral counts.
pub fn parse_sections_strict(spec: &str) -> Result<Vec<f64>, SectionError> {
    if spec.trim().is_empty() {
        return Err(SectionError::Empty);
    }
    let mut sections = Vec::new();
    for (index, token) in spec.split(SEPARATOR).enumerate() {
        let invalid = |reason| SectionError::InvalidSectionSyntax {
            index,
            token: token.to_string(),
            reason,
        };
        match classify(token) {
            Token::Malformed(op) => return Err(invalid(SyntaxReason::TooManyOperands(op))),
            Token::Split(total, parts) => {
                let total = strict_length(total).map_err(invalid)?;
                let parts = strict_count(parts).map_err(invalid)?;
                sections.extend(repeat_n(total / parts as f64, parts));
            }
            Token::Repeat(length, count) => {
                let length = strict_length(length).map_err(invalid)?;
                let count = strict_count(count).map_err(invalid)?;
                sections.extend(repeat_n(length, count));
            }
            Token::Single(length) => sections.push(strict_length(length).map_err(invalid)?),
        }
    }
    Ok(sections)
}

fn strict_length(text: &str) -> Result<f64, SyntaxReason> {
    if text.trim().is_empty() {
        return Err(SyntaxReason::NotANumber);
    }
    let value = form_number(text);
    if !value.is_finite() {
        return Err(SyntaxReason::NotANumber);
    }
    if value < 0.0 {
        return Err(SyntaxReason::Negative);
    }
    Ok(value)
}

fn strict_count(text: &str) -> Result<usize, SyntaxReason> {
    let value = form_number(text);
    if text.trim().is_empty() || !value.is_finite() || value.fract() != 0.0 {
        return Err(SyntaxReason::BadCount);
    }
    if value < 1.0 || value > MAX_REPEAT as f64 {
        return Err(SyntaxReason::BadCount);
    }
    Ok(value as usize)
}

/// A validated section list.
///
/// Parsing through [`FromStr`] is strict; use [`SectionSpec::lenient`] for the
/// truncating behavior of the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionSpec {
    segments: Vec<f64>,
}

impl SectionSpec {
    /// Wrap explicit segment lengths.
    #[must_use]
    pub fn new(segments: Vec<f64>) -> Self {
        Self { segments }
    }

    /// Parse leniently (never fails, may be empty).
    #[must_use]
    pub fn lenient(spec: &str) -> Self {
        Self::new(parse_sections(spec))
    }

    /// `count` equal segments spanning `total`.
    #[must_use]
    pub fn uniform(total: f64, count: usize) -> Self {
        Self::new(vec![total / count as f64; count])
    }

    /// Segment lengths in order.
    #[must_use]
    pub fn segments(&self) -> &[f64] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// No segments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sum of all segment lengths.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.segments.iter().sum()
    }

    /// Take the segment lengths.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.segments
    }
}

impl FromStr for SectionSpec {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sections_strict(s).map(Self::new)
    }
}

impl From<Vec<f64>> for SectionSpec {
    fn from(segments: Vec<f64>) -> Self {
        Self::new(segments)
    }
}
