//! PlantUML-style class diagram plugin
//!
//! Implements line classification and parsing of the class diagram DSL.

mod database;
mod lexer;
mod parser;

pub use database::{ClassDatabase, DuplicateReport, FileCollision, MemberDuplicate};
pub use lexer::{LineClassifier, LineKind};
pub use parser::PumlParser;
