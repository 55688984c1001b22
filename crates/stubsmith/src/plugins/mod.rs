//! Plugin implementations
//!
//! `puml` reads the class diagram DSL, `python` and `typescript` turn class
//! descriptors into stub sources, `output` places them on disk, and the
//! orchestrator wires one run together.

pub mod orchestrator;
pub mod output;
pub mod puml;
pub mod python;
pub mod typescript;

pub use orchestrator::*;
pub use output::*;
pub use puml::*;
pub use python::*;
pub use typescript::*;

use crate::core::{EmitOptions, Emitter, TargetLanguage};

/// Build the emitter for a target language
pub fn emitter_for(target: TargetLanguage, options: EmitOptions) -> Box<dyn Emitter> {
    match target {
        TargetLanguage::Python => Box::new(PythonEmitter::with_options(options)),
        TargetLanguage::TypeScript => Box::new(TypeScriptEmitter::with_options(options)),
    }
}
