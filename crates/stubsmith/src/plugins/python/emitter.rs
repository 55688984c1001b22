//! Python stub emitter
//!
//! Emits one Python module per class: a class with an `__init__` that stores
//! every attribute, and one `pass` stub per method.

use std::fmt::Write as _;

use anyhow::Result;
use tracing::trace;

use crate::core::{ClassDescriptor, EmitOptions, Emitter};

const INDENT: &str = "    ";

/// Python stub emitter
pub struct PythonEmitter {
    options: EmitOptions,
}

impl PythonEmitter {
    pub fn new() -> Self {
        Self::with_options(EmitOptions::default())
    }

    pub fn with_options(options: EmitOptions) -> Self {
        Self { options }
    }

    fn write_header(&self, out: &mut String, class: &ClassDescriptor) -> Result<()> {
        writeln!(out, "# Auto-generated code for class {}", class.name)?;
        if let Some(source) = &self.options.source_note {
            writeln!(out, "# Generated from {}", source)?;
        }
        writeln!(out)?;
        if self.options.typing_imports {
            writeln!(out, "from typing import List, Any")?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_constructor(&self, out: &mut String, class: &ClassDescriptor) -> Result<()> {
        write!(out, "{INDENT}def __init__(self")?;
        for attribute in &class.attributes {
            write!(out, ", {}: {}", attribute.name, attribute.type_token)?;
        }
        writeln!(out, "):")?;

        if class.attributes.is_empty() {
            writeln!(out, "{INDENT}{INDENT}pass")?;
        } else {
            for attribute in &class.attributes {
                writeln!(
                    out,
                    "{INDENT}{INDENT}self.{name} = {name}",
                    name = attribute.name
                )?;
            }
        }
        writeln!(out)?;
        Ok(())
    }

    fn write_methods(&self, out: &mut String, class: &ClassDescriptor) -> Result<()> {
        for method in &class.methods {
            write!(out, "{INDENT}def {}(self", method.name)?;
            if !method.raw_parameters.is_empty() {
                write!(out, ", {}", method.raw_parameters)?;
            }
            writeln!(out, "):")?;
            writeln!(out, "{INDENT}{INDENT}# TODO: Implement {}", method.name)?;
            writeln!(out, "{INDENT}{INDENT}pass")?;
            writeln!(out)?;
        }
        Ok(())
    }
}

impl Default for PythonEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for PythonEmitter {
    fn emit(&self, class: &ClassDescriptor) -> Result<String> {
        trace!(class = %class.name, "Emitting Python stub");

        let mut out = String::new();
        self.write_header(&mut out, class)?;
        writeln!(out, "class {}:", class.name)?;
        self.write_constructor(&mut out, class)?;
        self.write_methods(&mut out, class)?;
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "python"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn extension(&self) -> &'static str {
        "py"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> ClassDescriptor {
        ClassDescriptor::new("Account")
            .with_attribute("str", "account_number")
            .with_attribute("float", "balance")
            .with_attribute("str", "type")
            .with_method("deposit", "amount: float")
            .with_method("withdraw", "amount: float")
    }

    #[test]
    fn test_emit_account() {
        let source = PythonEmitter::new().emit(&account()).unwrap();
        let expected = "\
# Auto-generated code for class Account

class Account:
    def __init__(self, account_number: str, balance: float, type: str):
        self.account_number = account_number
        self.balance = balance
        self.type = type

    def deposit(self, amount: float):
        # TODO: Implement deposit
        pass

    def withdraw(self, amount: float):
        # TODO: Implement withdraw
        pass

";
        assert_eq!(source, expected);
    }

    #[test]
    fn test_emit_empty_class_has_noop_constructor() {
        let source = PythonEmitter::new()
            .emit(&ClassDescriptor::new("Empty"))
            .unwrap();
        let expected = "\
# Auto-generated code for class Empty

class Empty:
    def __init__(self):
        pass

";
        assert_eq!(source, expected);
    }

    #[test]
    fn test_emit_method_without_parameters() {
        let class = ClassDescriptor::new("Door").with_method("open", "");
        let source = PythonEmitter::new().emit(&class).unwrap();
        assert!(source.contains("    def open(self):\n"));
    }

    #[test]
    fn test_emit_with_options() {
        let options = EmitOptions::new()
            .with_source_note("domain_model.puml")
            .with_typing_imports(true);
        let class = ClassDescriptor::new("Order").with_attribute("List[str]", "items");
        let source = PythonEmitter::with_options(options).emit(&class).unwrap();

        assert!(source.starts_with(
            "# Auto-generated code for class Order\n\
             # Generated from domain_model.puml\n\
             \n\
             from typing import List, Any\n\
             \n\
             class Order:\n"
        ));
        assert!(source.contains("def __init__(self, items: List[str]):"));
    }

    #[test]
    fn test_emit_keeps_duplicate_members() {
        let class = ClassDescriptor::new("Point")
            .with_attribute("int", "x")
            .with_attribute("int", "x");
        let source = PythonEmitter::new().emit(&class).unwrap();
        assert!(source.contains("def __init__(self, x: int, x: int):"));
        assert_eq!(source.matches("self.x = x").count(), 2);
    }

    #[test]
    fn test_file_name() {
        let emitter = PythonEmitter::new();
        assert_eq!(emitter.file_name(&account()), "account.py");
        assert_eq!(emitter.name(), "python");
        assert_eq!(emitter.extension(), "py");
    }
}
