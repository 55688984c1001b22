//! Command-line interface for the stubsmith utility
//!
//! Provides a CLI to turn class diagram markup into stub source files.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

use stubsmith::core::logging::init_logging;
use stubsmith::core::Parser as _;
use stubsmith::plugins::puml::{ClassDatabase, PumlParser};
use stubsmith::plugins::{GenerationReport, Orchestrator};
use stubsmith::{
    DuplicatePolicy, EmitOptions, GeneratorConfig, StubsmithError, TargetLanguage,
    UnterminatedClassPolicy,
};

/// Stubsmith - Generate source stubs from class diagrams
#[derive(Parser)]
#[command(name = "stubsmith")]
#[command(about = "Generate source code stubs from PlantUML-style class diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error) [default: STUBSMITH_LOG_LEVEL, RUST_LOG, info]
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json) [default: STUBSMITH_LOG_FORMAT, compact]
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one stub file per class in the diagram
    Generate {
        /// Input diagram file (use - for stdin)
        #[arg(short, long, env = "STUBSMITH_INPUT")]
        input: PathBuf,

        /// Directory the stub files are written into
        #[arg(short, long, env = "STUBSMITH_OUTPUT_DIR")]
        output_dir: PathBuf,

        /// Language of the generated stubs
        #[arg(long, value_enum, default_value_t = TargetChoice::Python)]
        target: TargetChoice,

        /// Fail on class blocks without a closing brace
        #[arg(long)]
        strict: bool,

        /// How to treat repeated class, attribute and method names
        #[arg(long, value_enum, default_value_t = DuplicateChoice::Warn)]
        duplicates: DuplicateChoice,

        /// Add a "Generated from <TEXT>" line to every file header
        #[arg(long, value_name = "TEXT")]
        source_note: Option<String>,

        /// Add `from typing import List, Any` to Python stubs
        #[arg(long)]
        typing_imports: bool,
    },

    /// Print the classes parsed from a diagram
    Inspect {
        /// Input diagram file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Show in JSON format
        #[arg(long)]
        json: bool,

        /// Fail on class blocks without a closing brace
        #[arg(long)]
        strict: bool,
    },

    /// Check a diagram for broken blocks and duplicate declarations
    Validate {
        /// Input diagram file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Fail on class blocks without a closing brace
        #[arg(long)]
        strict: bool,
    },

    /// Show supported target languages
    Targets {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Supported target languages
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum TargetChoice {
    Python,
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
}

impl From<TargetChoice> for TargetLanguage {
    fn from(value: TargetChoice) -> Self {
        match value {
            TargetChoice::Python => TargetLanguage::Python,
            TargetChoice::TypeScript => TargetLanguage::TypeScript,
        }
    }
}

/// Duplicate declaration handling
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum DuplicateChoice {
    /// Generate without comment
    Allow,
    /// Generate and log every duplicate
    #[default]
    Warn,
    /// Refuse to generate anything
    Reject,
}

impl From<DuplicateChoice> for DuplicatePolicy {
    fn from(value: DuplicateChoice) -> Self {
        match value {
            DuplicateChoice::Allow => DuplicatePolicy::Allow,
            DuplicateChoice::Warn => DuplicatePolicy::Warn,
            DuplicateChoice::Reject => DuplicatePolicy::Reject,
        }
    }
}

/// Options of the generate command
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub target: TargetChoice,
    pub strict: bool,
    pub duplicates: DuplicateChoice,
    pub source_note: Option<String>,
    pub typing_imports: bool,
}

impl GenerateArgs {
    fn to_config(&self) -> GeneratorConfig {
        let mut emit = EmitOptions::new().with_typing_imports(self.typing_imports);
        if let Some(note) = &self.source_note {
            emit = emit.with_source_note(note.clone());
        }

        GeneratorConfig::new(&self.input, &self.output_dir)
            .with_target(self.target.into())
            .with_unterminated_policy(unterminated_policy(self.strict))
            .with_duplicate_policy(self.duplicates.into())
            .with_emit_options(emit)
    }
}

#[derive(Serialize)]
struct TargetInfo {
    name: &'static str,
    extension: &'static str,
    description: &'static str,
}

const TARGETS: &[TargetInfo] = &[
    TargetInfo {
        name: "python",
        extension: "py",
        description: "Python classes with __init__ and pass stubs",
    },
    TargetInfo {
        name: "typescript",
        extension: "ts",
        description: "TypeScript classes with a constructor and throwing stubs",
    },
];

/// Main CLI application
pub struct StubsmithApp;

impl StubsmithApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Explicit flags win; init_logging falls back to the environment
        let log_level = cli.log_level.map(|level| level.as_str());
        let log_format = cli.log_format.map(|format| format.as_str());

        if let Err(e) = init_logging(log_level, log_format) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Stubsmith v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Generate {
                input,
                output_dir,
                target,
                strict,
                duplicates,
                source_note,
                typing_imports,
            } => {
                let args = GenerateArgs {
                    input,
                    output_dir,
                    target,
                    strict,
                    duplicates,
                    source_note,
                    typing_imports,
                };
                self.generate_command(&args, cli.verbose).map(|_| ())
            }
            Commands::Inspect {
                input,
                json,
                strict,
            } => self.inspect_command(input, json, strict, cli.verbose),
            Commands::Validate { input, strict } => {
                self.validate_command(input, strict, cli.verbose)
            }
            Commands::Targets { json } => self.targets_command(json, cli.verbose),
        }
    }

    /// Handle the generate command
    pub fn generate_command(&self, args: &GenerateArgs, verbose: bool) -> Result<GenerationReport> {
        let orchestrator = Orchestrator::new(args.to_config());

        let report = if is_stdin(&args.input) {
            let content = self.read_input(Some(args.input.clone()))?;
            orchestrator.run_source(&content)?
        } else {
            orchestrator.run()?
        };

        for file in &report.files {
            println!("Generated {}", file.path.display());
        }

        if verbose {
            eprintln!(
                "Wrote {} file(s) to {}",
                report.file_count(),
                args.output_dir.display()
            );
        }
        Ok(report)
    }

    /// Handle the inspect command
    fn inspect_command(
        &self,
        input: Option<PathBuf>,
        json: bool,
        strict: bool,
        verbose: bool,
    ) -> Result<()> {
        let database = self.parse_input(input, strict, verbose)?;

        if json {
            let listing = serde_json::json!({
                "classes": database.classes(),
                "total": database.class_count(),
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            for class in database.classes() {
                println!("{}  (line {})", class, class.line);
            }
            println!();
            println!("Total: {} class(es)", database.class_count());
        }
        Ok(())
    }

    /// Handle the validate command
    fn validate_command(&self, input: Option<PathBuf>, strict: bool, verbose: bool) -> Result<()> {
        let database = match self.parse_input(input, strict, verbose) {
            Ok(database) => database,
            Err(e) => {
                println!("✗ Invalid diagram: {}", e);
                return Err(e);
            }
        };

        let report = database.duplicates();
        if report.is_empty() {
            println!("✓ Valid diagram: {} class(es)", database.class_count());
            return Ok(());
        }

        for finding in report.findings() {
            println!("✗ {}", finding);
        }
        Err(StubsmithError::duplicate_declaration(report.to_string()).into())
    }

    /// Handle the targets command
    fn targets_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing supported target languages");
        }

        if json {
            let targets = serde_json::json!({
                "targets": TARGETS,
                "total": TARGETS.len(),
            });
            println!("{}", serde_json::to_string_pretty(&targets)?);
        } else {
            println!("Supported target languages:");
            for target in TARGETS {
                println!("  {:<11}(.{}) - {}", target.name, target.extension, target.description);
            }
            println!();
            println!("Total: {} target languages supported", TARGETS.len());
        }

        Ok(())
    }

    fn parse_input(&self, input: Option<PathBuf>, strict: bool, verbose: bool) -> Result<ClassDatabase> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let parser = PumlParser::with_policy(unterminated_policy(strict));
        let mut database = ClassDatabase::new();
        parser.parse(&content, &mut database)?;
        debug!(class_count = database.class_count(), "Parsed input");
        Ok(database)
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if !is_stdin(&path) => {
                Ok(fs::read_to_string(&path).map_err(|e| StubsmithError::input_error(&path, e))?)
            }
            _ => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .map_err(|e| anyhow!("Failed to read standard input: {}", e))?;
                Ok(content)
            }
        }
    }
}

impl Default for StubsmithApp {
    fn default() -> Self {
        Self::new()
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn unterminated_policy(strict: bool) -> UnterminatedClassPolicy {
    if strict {
        UnterminatedClassPolicy::Error
    } else {
        UnterminatedClassPolicy::AutoClose
    }
}
