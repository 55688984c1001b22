//! Core type definitions for stub generation
//!
//! This module contains the descriptor model shared by the parser and the
//! emitters: one [`ClassDescriptor`] per class block, holding its attributes
//! and methods in declaration order.

use std::fmt;

use serde::Serialize;

/// An attribute line such as `+str account_number`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AttributeDescriptor {
    /// Type token, kept verbatim (e.g. `str`, `List[str]`)
    pub type_token: String,
    /// Attribute name
    pub name: String,
}

impl AttributeDescriptor {
    pub fn new(type_token: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_token: type_token.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for AttributeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} {}", self.type_token, self.name)
    }
}

/// A method line such as `+deposit(amount: float)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MethodDescriptor {
    /// Method name
    pub name: String,
    /// Text between the parentheses, unparsed
    pub raw_parameters: String,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, raw_parameters: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_parameters: raw_parameters.into(),
        }
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}({})", self.name, self.raw_parameters)
    }
}

/// One class block from the diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDescriptor {
    pub name: String,
    pub attributes: Vec<AttributeDescriptor>,
    pub methods: Vec<MethodDescriptor>,
    /// 1-based line of the `class` line in the source
    pub line: usize,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            methods: Vec::new(),
            line: 0,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn add_attribute(&mut self, attribute: AttributeDescriptor) {
        self.attributes.push(attribute);
    }

    pub fn add_method(&mut self, method: MethodDescriptor) {
        self.methods.push(method);
    }

    pub fn with_attribute(mut self, type_token: impl Into<String>, name: impl Into<String>) -> Self {
        self.add_attribute(AttributeDescriptor::new(type_token, name));
        self
    }

    pub fn with_method(mut self, name: impl Into<String>, raw_parameters: impl Into<String>) -> Self {
        self.add_method(MethodDescriptor::new(name, raw_parameters));
        self
    }

    /// Lowercased class name, used as the output file stem
    pub fn file_stem(&self) -> String {
        self.name.to_lowercase()
    }

    /// Returns true if the class has neither attributes nor methods
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.methods.is_empty()
    }
}

impl fmt::Display for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "class {} {{", self.name)?;
        for attribute in &self.attributes {
            writeln!(f, "  {}", attribute)?;
        }
        for method in &self.methods {
            writeln!(f, "  {}", method)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_descriptor_builders() {
        let class = ClassDescriptor::new("Account")
            .at_line(4)
            .with_attribute("str", "account_number")
            .with_attribute("float", "balance")
            .with_method("deposit", "amount: float");

        assert_eq!(class.name, "Account");
        assert_eq!(class.line, 4);
        assert_eq!(class.attributes.len(), 2);
        assert_eq!(class.attributes[1].type_token, "float");
        assert_eq!(class.methods[0].raw_parameters, "amount: float");
        assert!(!class.is_empty());
    }

    #[test]
    fn test_file_stem_lowercases() {
        assert_eq!(ClassDescriptor::new("BankAccount").file_stem(), "bankaccount");
        assert_eq!(ClassDescriptor::new("io").file_stem(), "io");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let class = ClassDescriptor::new("Point")
            .with_attribute("int", "x")
            .with_attribute("int", "x");
        assert_eq!(class.attributes.len(), 2);
        assert_eq!(class.attributes[0], class.attributes[1]);
    }

    #[test]
    fn test_display_round_trips_dsl_shape() {
        let class = ClassDescriptor::new("Account")
            .with_attribute("str", "owner")
            .with_method("close", "");
        assert_eq!(class.to_string(), "class Account {\n  +str owner\n  +close()\n}");
    }

    #[test]
    fn test_serialize_descriptor() {
        let class = ClassDescriptor::new("Account").with_attribute("str", "owner");
        let json = serde_json::to_string(&class).unwrap();
        assert!(json.contains("\"name\":\"Account\""));
        assert!(json.contains("\"type_token\":\"str\""));
    }
}
