//! Core error types for stub generation
//!
//! This module defines the error taxonomy used throughout the
//! parse → emit → write pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Core error types for stub generation
#[derive(Error, Debug)]
pub enum StubsmithError {
    #[error("Failed to read input file '{}': {source}", path.display())]
    InputError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output '{}': {source}", path.display())]
    OutputError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error: {message} at line {line}")]
    ParseError { message: String, line: usize },

    #[error("Duplicate declaration: {message}")]
    DuplicateDeclaration { message: String },

    #[error("Unknown target language: {target}")]
    UnknownTarget { target: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl StubsmithError {
    /// Create a new input error
    pub fn input_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputError {
            path: path.into(),
            source,
        }
    }

    /// Create a new output error
    pub fn output_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputError {
            path: path.into(),
            source,
        }
    }

    /// Create a new parse error
    pub fn parse_error(message: String, line: usize) -> Self {
        Self::ParseError { message, line }
    }

    /// Create a new duplicate declaration error
    pub fn duplicate_declaration(message: String) -> Self {
        Self::DuplicateDeclaration { message }
    }

    /// Create a new unknown target error
    pub fn unknown_target(target: impl Into<String>) -> Self {
        Self::UnknownTarget {
            target: target.into(),
        }
    }
}
