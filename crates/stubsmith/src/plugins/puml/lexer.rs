//! Line classifier for the class diagram DSL
//!
//! The DSL is line oriented. Every trimmed line is exactly one of five kinds;
//! the parser's state machine only ever sees these kinds, never raw text.

use std::fmt;

use chumsky::prelude::*;

use crate::core::chumsky_utils::{inline_whitespace_required, rest_of_line, type_token, word};

/// The shape of a single DSL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `class Name {` (brace optional, trailing text ignored)
    ClassOpen { name: String },
    /// A line that is exactly `}`
    ClassClose,
    /// `+name(raw parameters)`
    Method { name: String, raw_parameters: String },
    /// `+type name`
    Attribute { type_token: String, name: String },
    /// Anything else
    Unrecognized,
}

impl LineKind {
    /// Short name of the kind, used in log events
    pub fn kind_name(&self) -> &'static str {
        match self {
            LineKind::ClassOpen { .. } => "class-open",
            LineKind::ClassClose => "class-close",
            LineKind::Method { .. } => "method",
            LineKind::Attribute { .. } => "attribute",
            LineKind::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::ClassOpen { name } => write!(f, "class-open({})", name),
            LineKind::ClassClose => write!(f, "class-close"),
            LineKind::Method {
                name,
                raw_parameters,
            } => write!(f, "method({}({}))", name, raw_parameters),
            LineKind::Attribute { type_token, name } => {
                write!(f, "attribute({} {})", type_token, name)
            }
            LineKind::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Classifies DSL lines into [`LineKind`]s
///
/// Shapes are tried in a fixed order: class-open, class-close, method,
/// attribute. A line shaped like `+name(args)` is therefore always a method.
pub struct LineClassifier;

impl LineClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a single line. Surrounding whitespace is ignored.
    pub fn classify(&self, line: &str) -> LineKind {
        Self::line_parser()
            .parse(line.trim())
            .into_result()
            .unwrap_or(LineKind::Unrecognized)
    }

    /// Classify every line of `input`, paired with its 1-based line number.
    pub fn classify_all(&self, input: &str) -> Vec<(usize, LineKind)> {
        let parser = Self::line_parser();

        input
            .lines()
            .enumerate()
            .map(|(index, line)| {
                let kind = parser
                    .parse(line.trim())
                    .into_result()
                    .unwrap_or(LineKind::Unrecognized);
                (index + 1, kind)
            })
            .collect()
    }

    fn line_parser<'src>() -> impl Parser<'src, &'src str, LineKind> + Clone {
        choice((
            Self::class_open_parser(),
            Self::class_close_parser(),
            Self::method_parser(),
            Self::attribute_parser(),
        ))
        .then_ignore(end())
    }

    fn class_open_parser<'src>() -> impl Parser<'src, &'src str, LineKind> + Clone {
        just("class")
            .ignore_then(inline_whitespace_required())
            .ignore_then(word())
            .then_ignore(rest_of_line())
            .map(|name: &str| LineKind::ClassOpen {
                name: name.to_string(),
            })
    }

    fn class_close_parser<'src>() -> impl Parser<'src, &'src str, LineKind> + Clone {
        just('}').then_ignore(end()).to(LineKind::ClassClose)
    }

    fn method_parser<'src>() -> impl Parser<'src, &'src str, LineKind> + Clone {
        // The parameter list runs to the last `)` on the line.
        just('+')
            .ignore_then(word())
            .then_ignore(just('('))
            .then(rest_of_line())
            .filter(|(_, rest): &(&str, &str)| rest.contains(')'))
            .map(|(name, rest): (&str, &str)| {
                let raw_parameters = rest.rfind(')').map_or(rest, |close| &rest[..close]);
                LineKind::Method {
                    name: name.to_string(),
                    raw_parameters: raw_parameters.to_string(),
                }
            })
    }

    fn attribute_parser<'src>() -> impl Parser<'src, &'src str, LineKind> + Clone {
        just('+')
            .ignore_then(type_token())
            .then_ignore(inline_whitespace_required())
            .then(word())
            .then_ignore(rest_of_line())
            .map(|(type_token, name): (&str, &str)| LineKind::Attribute {
                type_token: type_token.to_string(),
                name: name.to_string(),
            })
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
