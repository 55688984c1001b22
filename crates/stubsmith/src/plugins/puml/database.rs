//! Class descriptor database
//!
//! Stores the class descriptors of one parse, in the order their blocks were
//! opened. Repeated names are kept as declared; [`ClassDatabase::duplicates`]
//! reports them without changing anything.

use std::collections::HashMap;
use std::fmt;

use anyhow::Result;

use crate::core::{ClassDescriptor, Database};

/// A member name repeated inside one class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDuplicate {
    pub class: String,
    pub name: String,
}

/// Distinct class names that map to the same output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCollision {
    pub file_stem: String,
    pub classes: Vec<String>,
}

/// Every repeated declaration found in a database
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DuplicateReport {
    /// Class names declared by more than one block
    pub classes: Vec<String>,
    /// Attribute names repeated within a class
    pub attributes: Vec<MemberDuplicate>,
    /// Method names repeated within a class
    pub methods: Vec<MemberDuplicate>,
    /// Different class names sharing a lowercased file name
    pub file_collisions: Vec<FileCollision>,
}

impl DuplicateReport {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of findings
    pub fn len(&self) -> usize {
        self.classes.len() + self.attributes.len() + self.methods.len() + self.file_collisions.len()
    }

    /// One human-readable message per finding
    pub fn findings(&self) -> Vec<String> {
        let mut findings = Vec::with_capacity(self.len());
        for name in &self.classes {
            findings.push(format!("class '{}' is declared more than once", name));
        }
        for dup in &self.attributes {
            findings.push(format!(
                "attribute '{}' is declared more than once in class '{}'",
                dup.name, dup.class
            ));
        }
        for dup in &self.methods {
            findings.push(format!(
                "method '{}' is declared more than once in class '{}'",
                dup.name, dup.class
            ));
        }
        for collision in &self.file_collisions {
            findings.push(format!(
                "classes {} all map to output file '{}'",
                collision
                    .classes
                    .iter()
                    .map(|c| format!("'{}'", c))
                    .collect::<Vec<_>>()
                    .join(", "),
                collision.file_stem
            ));
        }
        findings
    }
}

impl fmt::Display for DuplicateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.findings().join("; "))
    }
}

/// Names that occur more than once, each reported once, in first-repeat order
fn repeated<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut repeats = Vec::new();
    for name in names {
        let count = counts.entry(name).or_insert(0);
        *count += 1;
        if *count == 2 {
            repeats.push(name);
        }
    }
    repeats
}

/// Class descriptor database
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDatabase {
    classes: Vec<ClassDescriptor>,
}

impl ClassDatabase {
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
        }
    }

    pub fn add_class(&mut self, class: ClassDescriptor) -> Result<()> {
        self.classes.push(class);
        Ok(())
    }

    pub fn classes(&self) -> &[ClassDescriptor] {
        &self.classes
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// First class declared with `name`
    pub fn get_class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn class_names(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.name.as_str()).collect()
    }

    /// Collect repeated class, attribute and method names
    pub fn duplicates(&self) -> DuplicateReport {
        let classes = repeated(self.classes.iter().map(|c| c.name.as_str()))
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut attributes = Vec::new();
        let mut methods = Vec::new();
        for class in &self.classes {
            for name in repeated(class.attributes.iter().map(|a| a.name.as_str())) {
                attributes.push(MemberDuplicate {
                    class: class.name.clone(),
                    name: name.to_string(),
                });
            }
            for name in repeated(class.methods.iter().map(|m| m.name.as_str())) {
                methods.push(MemberDuplicate {
                    class: class.name.clone(),
                    name: name.to_string(),
                });
            }
        }

        // Group distinct names by file stem, keeping first-seen order
        let mut stems: Vec<FileCollision> = Vec::new();
        for class in &self.classes {
            let stem = class.file_stem();
            match stems.iter_mut().find(|c| c.file_stem == stem) {
                Some(entry) => {
                    if !entry.classes.contains(&class.name) {
                        entry.classes.push(class.name.clone());
                    }
                }
                None => stems.push(FileCollision {
                    file_stem: stem,
                    classes: vec![class.name.clone()],
                }),
            }
        }
        let file_collisions = stems.into_iter().filter(|c| c.classes.len() > 1).collect();

        DuplicateReport {
            classes,
            attributes,
            methods,
            file_collisions,
        }
    }
}

impl Database for ClassDatabase {
    type Node = ClassDescriptor;

    fn add_node(&mut self, node: Self::Node) -> Result<()> {
        self.add_class(node)
    }

    fn get_node(&self, name: &str) -> Option<&Self::Node> {
        self.get_class(name)
    }

    fn nodes(&self) -> impl Iterator<Item = &Self::Node> {
        self.classes.iter()
    }

    fn clear(&mut self) {
        self.classes.clear();
    }

    fn node_count(&self) -> usize {
        self.classes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_add_class() {
        let mut db = ClassDatabase::new();
        db.add_class(ClassDescriptor::new("Account")).unwrap();
        db.add_class(ClassDescriptor::new("Customer")).unwrap();

        assert_eq!(db.class_count(), 2);
        assert_eq!(db.class_names(), vec!["Account", "Customer"]);
        assert!(db.get_class("Account").is_some());
        assert!(db.get_class("Bank").is_none());
    }

    #[test]
    fn test_get_class_first_occurrence_wins() {
        let mut db = ClassDatabase::new();
        db.add_class(ClassDescriptor::new("Account").at_line(1)).unwrap();
        db.add_class(ClassDescriptor::new("Account").at_line(9)).unwrap();

        assert_eq!(db.class_count(), 2);
        assert_eq!(db.get_class("Account").unwrap().line, 1);
    }

    #[test]
    fn test_database_trait() {
        let mut db = ClassDatabase::new();
        db.add_node(ClassDescriptor::new("Account")).unwrap();

        let nodes: Vec<_> = db.nodes().collect();
        assert_eq!(nodes.len(), 1);
        assert_eq!(db.node_count(), 1);
        assert_eq!(db.get_node("Account").unwrap().name, "Account");

        db.clear();
        assert_eq!(db.node_count(), 0);
    }

    #[test]
    fn test_no_duplicates() {
        let mut db = ClassDatabase::new();
        db.add_class(
            ClassDescriptor::new("Account")
                .with_attribute("str", "owner")
                .with_method("close", ""),
        )
        .unwrap();

        let report = db.duplicates();
        assert!(report.is_empty());
        assert!(report.findings().is_empty());
    }

    #[test]
    fn test_duplicate_classes_reported_once() {
        let mut db = ClassDatabase::new();
        for _ in 0..3 {
            db.add_class(ClassDescriptor::new("Account")).unwrap();
        }

        let report = db.duplicates();
        assert_eq!(report.classes, vec!["Account".to_string()]);
        assert!(report.file_collisions.is_empty());
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_duplicate_members() {
        let mut db = ClassDatabase::new();
        db.add_class(
            ClassDescriptor::new("Point")
                .with_attribute("int", "x")
                .with_attribute("float", "x")
                .with_method("move", "dx")
                .with_method("move", "dx, dy"),
        )
        .unwrap();

        let report = db.duplicates();
        assert_eq!(
            report.attributes,
            vec![MemberDuplicate {
                class: "Point".to_string(),
                name: "x".to_string()
            }]
        );
        assert_eq!(report.methods.len(), 1);
        assert_eq!(report.methods[0].name, "move");
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_file_collisions() {
        let mut db = ClassDatabase::new();
        db.add_class(ClassDescriptor::new("Account")).unwrap();
        db.add_class(ClassDescriptor::new("ACCOUNT")).unwrap();
        db.add_class(ClassDescriptor::new("Customer")).unwrap();

        let report = db.duplicates();
        assert!(report.classes.is_empty());
        assert_eq!(report.file_collisions.len(), 1);
        assert_eq!(report.file_collisions[0].file_stem, "account");
        assert_eq!(
            report.file_collisions[0].classes,
            vec!["Account".to_string(), "ACCOUNT".to_string()]
        );
        assert!(report.findings()[0].contains("'account'"));
    }

    #[test]
    fn test_report_display() {
        let mut db = ClassDatabase::new();
        db.add_class(ClassDescriptor::new("A")).unwrap();
        db.add_class(ClassDescriptor::new("A")).unwrap();

        assert_eq!(db.duplicates().to_string(), "class 'A' is declared more than once");
    }
}
