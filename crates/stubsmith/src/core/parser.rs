//! Core parser trait for diagram markup
//!
//! This trait defines the interface for parsing diagram markup
//! into descriptors stored in a database.

use anyhow::Result;

use super::Database;

/// Core trait for diagram parsers
///
/// # Example
/// ```
/// use stubsmith::core::{Database, Parser};
/// use stubsmith::plugins::puml::{ClassDatabase, PumlParser};
///
/// let parser = PumlParser::new();
/// let mut db = ClassDatabase::new();
/// parser.parse("class Account {\n+str owner\n}", &mut db).unwrap();
/// assert_eq!(db.node_count(), 1);
/// ```
pub trait Parser<D: Database>: Send + Sync {
    /// Parse diagram markup into the provided database
    fn parse(&self, input: &str, database: &mut D) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Check if the input can be parsed by this parser
    fn can_parse(&self, input: &str) -> bool;
}
