//! Python target plugin

mod emitter;

pub use emitter::PythonEmitter;
