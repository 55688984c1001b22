//! Plugin orchestrator for coordinating the generation pipeline
//!
//! The orchestrator manages the flow of data through all plugins:
//! Input → Parser → Database → Emitter → Writer

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info, span, warn, Level};

use super::emitter_for;
use super::output::StubWriter;
use super::puml::{ClassDatabase, DuplicateReport, PumlParser};
use crate::core::{DuplicatePolicy, Emitter, GeneratorConfig, Parser, StubsmithError};

/// One file written by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub class_name: String,
    pub path: PathBuf,
}

/// Result of a complete run
///
/// `files` has one entry per class block, in input order. A class name that
/// appears twice produces two entries for the same path.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub files: Vec<GeneratedFile>,
    pub duplicates: DuplicateReport,
}

impl GenerationReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn paths(&self) -> Vec<&Path> {
        self.files.iter().map(|f| f.path.as_path()).collect()
    }
}

/// Plugin orchestrator that runs one configured generation
pub struct Orchestrator {
    config: GeneratorConfig,
    parser: PumlParser,
    emitter: Box<dyn Emitter>,
    writer: StubWriter,
}

impl Orchestrator {
    /// Create an orchestrator with the parser, emitter and writer the config asks for
    pub fn new(config: GeneratorConfig) -> Self {
        let parser = PumlParser::with_policy(config.unterminated);
        let emitter = emitter_for(config.target, config.emit.clone());
        let writer = StubWriter::new(config.output_dir.clone());
        Self {
            config,
            parser,
            emitter,
            writer,
        }
    }

    /// Replace the emitter chosen from the config
    pub fn with_emitter(mut self, emitter: Box<dyn Emitter>) -> Self {
        self.emitter = emitter;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn emitter(&self) -> &dyn Emitter {
        self.emitter.as_ref()
    }

    /// Read the configured input file
    pub fn read_input(&self) -> Result<String> {
        let path = self.config.input();
        let content =
            fs::read_to_string(path).map_err(|e| StubsmithError::input_error(path, e))?;
        debug!(path = %path.display(), bytes = content.len(), "Read input");
        Ok(content)
    }

    /// Parse DSL text into a fresh database
    pub fn parse_source(&self, input: &str) -> Result<ClassDatabase> {
        let mut database = ClassDatabase::new();
        self.parser.parse(input, &mut database)?;
        Ok(database)
    }

    /// Apply the configured duplicate policy
    pub fn check_duplicates(&self, database: &ClassDatabase) -> Result<DuplicateReport> {
        let report = database.duplicates();
        if report.is_empty() {
            return Ok(report);
        }

        match self.config.duplicates {
            DuplicatePolicy::Allow => {}
            DuplicatePolicy::Warn => {
                for finding in report.findings() {
                    warn!(finding = %finding, "Duplicate declaration passed through");
                }
            }
            DuplicatePolicy::Reject => {
                warn!(count = report.len(), "Rejecting input with duplicate declarations");
                return Err(StubsmithError::duplicate_declaration(report.to_string()).into());
            }
        }
        Ok(report)
    }

    /// Emit and write every class, stopping at the first failure
    pub fn emit_all(&self, database: &ClassDatabase) -> Result<Vec<GeneratedFile>> {
        self.writer.prepare()?;

        let mut files = Vec::with_capacity(database.class_count());
        for class in database.classes() {
            let source = self.emitter.emit(class)?;
            let file_name = self.emitter.file_name(class);
            let path = self.writer.write(&file_name, &source)?;
            info!(class = %class.name, path = %path.display(), "Generated stub");
            files.push(GeneratedFile {
                class_name: class.name.clone(),
                path,
            });
        }
        Ok(files)
    }

    /// Run the full pipeline on the configured input file
    pub fn run(&self) -> Result<GenerationReport> {
        let content = self.read_input()?;
        self.run_source(&content)
    }

    /// Run the full pipeline on DSL text that was already read
    pub fn run_source(&self, input: &str) -> Result<GenerationReport> {
        let process_span = span!(
            Level::INFO,
            "process_diagram",
            input_len = input.len(),
            target = %self.config.target
        );
        let _enter = process_span.enter();

        info!("Starting stub generation pipeline");

        let parse_span = span!(Level::DEBUG, "pipeline_parse");
        let parse_enter = parse_span.enter();
        let database = self.parse_source(input)?;
        let duplicates = self.check_duplicates(&database)?;
        debug!(
            class_count = database.class_count(),
            duplicate_count = duplicates.len(),
            "Parsing completed"
        );
        drop(parse_enter);

        if database.class_count() == 0 {
            warn!("No class blocks found in input");
        }

        let emit_span = span!(Level::DEBUG, "pipeline_emit", emitter = self.emitter.name());
        let emit_enter = emit_span.enter();
        let files = self.emit_all(&database)?;
        debug!(file_count = files.len(), "Emission completed");
        drop(emit_enter);

        info!(file_count = files.len(), "Pipeline completed successfully");

        Ok(GenerationReport { files, duplicates })
    }
}
