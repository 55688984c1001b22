//! Stubsmith - Generate source stubs from class diagrams
//!
//! A library for reading the class subset of PlantUML and emitting one stub
//! source file per class block.
//!
//! # Quick Start
//!
//! ```rust
//! use stubsmith::{emit, parse, TargetLanguage};
//!
//! let input = "class Account {\n  +float balance\n  +deposit(amount: float)\n}";
//! let db = parse(input).unwrap();
//! let source = emit(&db.classes()[0], TargetLanguage::Python).unwrap();
//! assert!(source.contains("def deposit(self, amount: float):"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use stubsmith::prelude::*;
//!
//! let input = "class Account {\n  +str owner\n}\nclass Bank {\n}";
//!
//! // Parse into a database
//! let parser = PumlParser::strict();
//! let mut database = ClassDatabase::new();
//! parser.parse(input, &mut database).unwrap();
//! assert_eq!(database.node_count(), 2);
//!
//! // Emit TypeScript for the first class
//! let emitter = TypeScriptEmitter::new();
//! let source = emitter.emit(&database.classes()[0]).unwrap();
//! assert!(source.contains("export class Account {"));
//! ```

pub mod core;
pub mod plugins;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        AttributeDescriptor, ClassDescriptor, Database, DuplicatePolicy, EmitOptions, Emitter,
        GeneratorConfig, MethodDescriptor, Parser, TargetLanguage, UnterminatedClassPolicy,
    };
    pub use crate::plugins::orchestrator::{GeneratedFile, GenerationReport, Orchestrator};
    pub use crate::plugins::puml::{ClassDatabase, DuplicateReport, PumlParser};
    pub use crate::plugins::python::PythonEmitter;
    pub use crate::plugins::typescript::TypeScriptEmitter;
}

/// Parse class diagram text into a database with the default policies
///
/// Unterminated class blocks are closed with a warning.
///
/// # Example
/// ```rust
/// use stubsmith::parse;
///
/// let db = parse("@startuml\nclass A {\n+int x\n}\n@enduml").unwrap();
/// assert_eq!(db.class_names(), vec!["A"]);
/// ```
pub fn parse(input: &str) -> anyhow::Result<plugins::puml::ClassDatabase> {
    use crate::core::Parser as _;
    use crate::plugins::puml::{ClassDatabase, PumlParser};

    let parser = PumlParser::new();
    let mut database = ClassDatabase::new();
    parser.parse(input, &mut database)?;
    Ok(database)
}

/// Emit the stub source for one class in the given language
///
/// # Example
/// ```rust
/// use stubsmith::{emit, ClassDescriptor, TargetLanguage};
///
/// let class = ClassDescriptor::new("Bank");
/// let source = emit(&class, TargetLanguage::TypeScript).unwrap();
/// assert!(source.starts_with("// Auto-generated code for class Bank"));
/// ```
pub fn emit(class: &ClassDescriptor, target: TargetLanguage) -> anyhow::Result<String> {
    plugins::emitter_for(target, EmitOptions::default()).emit(class)
}

/// Run one full generation: read, parse, emit and write
///
/// # Returns
/// * `Ok(GenerationReport)` - One entry per class block, in input order
/// * `Err` - If the input cannot be read, the output cannot be written, or a
///   strict policy rejects the input
pub fn generate(config: GeneratorConfig) -> anyhow::Result<plugins::orchestrator::GenerationReport> {
    plugins::orchestrator::Orchestrator::new(config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_account() {
        let db = parse("class Account {\n+str owner\n+close()\n}").unwrap();
        assert_eq!(db.class_count(), 1);
        let account = db.get_class("Account").unwrap();
        assert_eq!(account.attributes[0].name, "owner");
        assert_eq!(account.methods[0].name, "close");
    }

    #[test]
    fn test_parse_without_classes() {
        let db = parse("@startuml\nA --> B\n@enduml").unwrap();
        assert_eq!(db.class_count(), 0);
    }

    #[test]
    fn test_emit_each_target() {
        let class = ClassDescriptor::new("Bank");
        assert!(emit(&class, TargetLanguage::Python)
            .unwrap()
            .contains("class Bank:"));
        assert!(emit(&class, TargetLanguage::TypeScript)
            .unwrap()
            .contains("export class Bank {"));
    }

    #[test]
    fn test_generate_writes_files() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bank.puml");
        std::fs::write(&input, "class Bank {\n}\nclass Account {\n}").unwrap();

        let report = generate(GeneratorConfig::new(&input, dir.path().join("out"))).unwrap();
        assert_eq!(report.file_count(), 2);
        assert!(dir.path().join("out").join("bank.py").exists());
        assert!(dir.path().join("out").join("account.py").exists());
    }
}
