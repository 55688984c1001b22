//! TypeScript stub emitter

use std::fmt::Write as _;

use anyhow::Result;
use tracing::trace;

use crate::core::{ClassDescriptor, EmitOptions, Emitter};

const INDENT: &str = "    ";

/// TypeScript stub emitter
///
/// Emits an exported class with one field per attribute, a constructor that
/// assigns them, and methods that throw until implemented. Type tokens and
/// parameter lists are copied as written in the diagram.
pub struct TypeScriptEmitter {
    options: EmitOptions,
}

impl TypeScriptEmitter {
    pub fn new() -> Self {
        Self::with_options(EmitOptions::default())
    }

    pub fn with_options(options: EmitOptions) -> Self {
        Self { options }
    }
}

impl Default for TypeScriptEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for TypeScriptEmitter {
    fn emit(&self, class: &ClassDescriptor) -> Result<String> {
        trace!(class = %class.name, "Emitting TypeScript stub");

        let mut out = String::new();
        writeln!(out, "// Auto-generated code for class {}", class.name)?;
        if let Some(source) = &self.options.source_note {
            writeln!(out, "// Generated from {}", source)?;
        }
        writeln!(out)?;

        writeln!(out, "export class {} {{", class.name)?;
        for attribute in &class.attributes {
            writeln!(out, "{INDENT}{}: {};", attribute.name, attribute.type_token)?;
        }
        if !class.attributes.is_empty() {
            writeln!(out)?;
        }

        let parameters = class
            .attributes
            .iter()
            .map(|a| format!("{}: {}", a.name, a.type_token))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "{INDENT}constructor({}) {{", parameters)?;
        if class.attributes.is_empty() {
            writeln!(out, "{INDENT}{INDENT}// no-op")?;
        }
        for attribute in &class.attributes {
            writeln!(
                out,
                "{INDENT}{INDENT}this.{name} = {name};",
                name = attribute.name
            )?;
        }
        writeln!(out, "{INDENT}}}")?;

        for method in &class.methods {
            writeln!(out)?;
            writeln!(out, "{INDENT}{}({}) {{", method.name, method.raw_parameters)?;
            writeln!(
                out,
                "{INDENT}{INDENT}throw new Error(\"Not implemented: {}\");",
                method.name
            )?;
            writeln!(out, "{INDENT}}}")?;
        }
        writeln!(out, "}}")?;
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "typescript"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn extension(&self) -> &'static str {
        "ts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_account() {
        let class = ClassDescriptor::new("Account")
            .with_attribute("string", "owner")
            .with_attribute("number", "balance")
            .with_method("deposit", "amount: number");
        let source = TypeScriptEmitter::new().emit(&class).unwrap();
        let expected = "\
// Auto-generated code for class Account

export class Account {
    owner: string;
    balance: number;

    constructor(owner: string, balance: number) {
        this.owner = owner;
        this.balance = balance;
    }

    deposit(amount: number) {
        throw new Error(\"Not implemented: deposit\");
    }
}
";
        assert_eq!(source, expected);
    }

    #[test]
    fn test_emit_empty_class_has_noop_constructor() {
        let source = TypeScriptEmitter::new()
            .emit(&ClassDescriptor::new("Empty"))
            .unwrap();
        let expected = "\
// Auto-generated code for class Empty

export class Empty {
    constructor() {
        // no-op
    }
}
";
        assert_eq!(source, expected);
    }

    #[test]
    fn test_source_note() {
        let emitter =
            TypeScriptEmitter::with_options(EmitOptions::new().with_source_note("bank.puml"));
        let source = emitter.emit(&ClassDescriptor::new("Bank")).unwrap();
        assert!(source.contains("// Generated from bank.puml\n"));
    }

    #[test]
    fn test_file_name() {
        let emitter = TypeScriptEmitter::new();
        assert_eq!(emitter.file_name(&ClassDescriptor::new("BankAccount")), "bankaccount.ts");
    }
}
