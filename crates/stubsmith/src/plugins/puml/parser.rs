//! Class diagram parser
//!
//! Drives a two-state machine (`Idle`, `InClass`) over the classified lines
//! and fills a [`ClassDatabase`].

use anyhow::Result;
use tracing::{debug, info, span, trace, warn, Level};

use super::database::ClassDatabase;
use super::lexer::{LineClassifier, LineKind};
use crate::core::{
    AttributeDescriptor, ClassDescriptor, MethodDescriptor, Parser, StubsmithError,
    UnterminatedClassPolicy,
};

#[derive(Debug)]
enum ParserState {
    Idle,
    InClass(ClassDescriptor),
}

/// Class diagram parser
pub struct PumlParser {
    classifier: LineClassifier,
    unterminated: UnterminatedClassPolicy,
}

impl PumlParser {
    pub fn new() -> Self {
        Self::with_policy(UnterminatedClassPolicy::default())
    }

    pub fn with_policy(unterminated: UnterminatedClassPolicy) -> Self {
        Self {
            classifier: LineClassifier::new(),
            unterminated,
        }
    }

    /// Parser that rejects class blocks without a closing brace
    pub fn strict() -> Self {
        Self::with_policy(UnterminatedClassPolicy::Error)
    }

    pub fn policy(&self) -> UnterminatedClassPolicy {
        self.unterminated
    }

    /// Apply one line to the state machine
    fn step(
        &self,
        state: ParserState,
        line: usize,
        kind: LineKind,
        database: &mut ClassDatabase,
    ) -> Result<ParserState> {
        let next = match (state, kind) {
            (ParserState::Idle, LineKind::ClassOpen { name }) => {
                trace!(line, class = %name, "Opening class block");
                ParserState::InClass(ClassDescriptor::new(name).at_line(line))
            }
            (ParserState::InClass(current), LineKind::ClassOpen { name }) => {
                self.close_unterminated(current, database)?;
                trace!(line, class = %name, "Opening class block");
                ParserState::InClass(ClassDescriptor::new(name).at_line(line))
            }
            (ParserState::InClass(current), LineKind::ClassClose) => {
                trace!(line, class = %current.name, "Closing class block");
                database.add_class(current)?;
                ParserState::Idle
            }
            (ParserState::InClass(mut current), LineKind::Method { name, raw_parameters }) => {
                current.add_method(MethodDescriptor::new(name, raw_parameters));
                ParserState::InClass(current)
            }
            (ParserState::InClass(mut current), LineKind::Attribute { type_token, name }) => {
                current.add_attribute(AttributeDescriptor::new(type_token, name));
                ParserState::InClass(current)
            }
            (state, LineKind::Unrecognized) => state,
            (ParserState::Idle, kind) => {
                trace!(line, kind = kind.kind_name(), "Ignoring line outside a class block");
                ParserState::Idle
            }
        };
        Ok(next)
    }

    fn close_unterminated(&self, class: ClassDescriptor, database: &mut ClassDatabase) -> Result<()> {
        match self.unterminated {
            UnterminatedClassPolicy::AutoClose => {
                warn!(
                    class = %class.name,
                    line = class.line,
                    "Class block has no closing brace, closing it implicitly"
                );
                database.add_class(class)
            }
            UnterminatedClassPolicy::Error => Err(StubsmithError::parse_error(
                format!("class '{}' has no closing brace", class.name),
                class.line,
            )
            .into()),
        }
    }
}

impl Default for PumlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser<ClassDatabase> for PumlParser {
    fn parse(&self, input: &str, database: &mut ClassDatabase) -> Result<()> {
        let parse_span = span!(Level::INFO, "parse_puml", input_len = input.len());
        let _enter = parse_span.enter();

        trace!("Starting class diagram parsing");

        let mut state = ParserState::Idle;
        let mut ignored = 0usize;
        for (line, kind) in self.classifier.classify_all(input) {
            if kind == LineKind::Unrecognized {
                ignored += 1;
            }
            state = self.step(state, line, kind, database)?;
        }

        if let ParserState::InClass(current) = state {
            self.close_unterminated(current, database)?;
        }

        debug!(
            class_count = database.class_count(),
            ignored_lines = ignored,
            "Parsed class blocks"
        );
        info!("Parsing completed");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "puml"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        input
            .lines()
            .any(|line| matches!(self.classifier.classify(line), LineKind::ClassOpen { .. }))
    }
}
