//! Core emitter trait for generated source output
//!
//! This trait defines the interface for turning a single class descriptor
//! into the text of one generated source file.

use anyhow::Result;

use super::ClassDescriptor;

/// Core trait for stub emitters
///
/// Each target language has its own emitter. An emitter is stateless with
/// respect to the descriptors it sees: emitting the same descriptor twice
/// yields the same text.
///
/// # Example
/// ```
/// use stubsmith::core::{ClassDescriptor, Emitter};
/// use stubsmith::plugins::python::PythonEmitter;
///
/// let class = ClassDescriptor::new("Account").with_attribute("float", "balance");
/// let emitter = PythonEmitter::new();
/// let source = emitter.emit(&class).unwrap();
/// assert!(source.contains("class Account:"));
/// assert_eq!(emitter.file_name(&class), "account.py");
/// ```
pub trait Emitter: Send + Sync {
    /// Emit the complete source text for one class
    fn emit(&self, class: &ClassDescriptor) -> Result<String>;

    /// Get the name of this emitter
    fn name(&self) -> &'static str;

    /// Get the version of this emitter
    fn version(&self) -> &'static str;

    /// Conventional source file extension, without the dot
    fn extension(&self) -> &'static str;

    /// File name for the generated unit of `class`
    fn file_name(&self, class: &ClassDescriptor) -> String {
        format!("{}.{}", class.file_stem(), self.extension())
    }
}
