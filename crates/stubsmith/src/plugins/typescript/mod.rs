//! TypeScript target plugin

mod emitter;

pub use emitter::TypeScriptEmitter;
