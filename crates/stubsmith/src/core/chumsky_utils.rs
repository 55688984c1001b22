//! Shared chumsky parser utilities for line classification
//!
//! These combinators work on a single, already trimmed line of input.

use chumsky::prelude::*;

/// Returns true for characters allowed in identifiers (`\w` semantics).
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Parse an identifier: one or more word characters.
///
/// Unlike `chumsky::text::ident`, a leading digit is accepted.
pub fn word<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    any()
        .filter(|c: &char| is_word_char(*c))
        .repeated()
        .at_least(1)
        .to_slice()
}

/// Parse a type token: word characters and square brackets (`List[str]`).
pub fn type_token<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    any()
        .filter(|c: &char| is_word_char(*c) || *c == '[' || *c == ']')
        .repeated()
        .at_least(1)
        .to_slice()
}

/// Parse required inline whitespace (at least one space or tab).
pub fn inline_whitespace_required<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(" \t").repeated().at_least(1).ignored()
}

/// Consume the remainder of the line and return it verbatim.
pub fn rest_of_line<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    any().repeated().to_slice()
}
