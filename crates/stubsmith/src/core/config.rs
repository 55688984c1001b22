//! Generator configuration
//!
//! A [`GeneratorConfig`] carries everything one pipeline run needs: where to
//! read the diagram, where to write the stubs, which language to emit and how
//! to treat the two ambiguous input situations (unterminated class blocks and
//! duplicate declarations).

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::StubsmithError;

/// Language the stubs are generated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum TargetLanguage {
    /// Python classes with `__init__` and `pass` bodies
    #[default]
    Python,
    /// TypeScript classes with a `constructor` and throwing method bodies
    TypeScript,
}

impl TargetLanguage {
    /// Get all valid target names
    pub fn variants() -> &'static [&'static str] {
        &["python", "typescript"]
    }

    /// Conventional source file extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            TargetLanguage::Python => "py",
            TargetLanguage::TypeScript => "ts",
        }
    }
}

impl FromStr for TargetLanguage {
    type Err = StubsmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(TargetLanguage::Python),
            "typescript" | "ts" => Ok(TargetLanguage::TypeScript),
            _ => Err(StubsmithError::unknown_target(s)),
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetLanguage::Python => write!(f, "python"),
            TargetLanguage::TypeScript => write!(f, "typescript"),
        }
    }
}

/// What to do with a class block whose closing brace never arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum UnterminatedClassPolicy {
    /// Close the block where it ends and log a warning
    #[default]
    AutoClose,
    /// Fail the parse
    Error,
}

/// What to do with repeated class, attribute or method names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DuplicatePolicy {
    /// Pass duplicates through silently
    Allow,
    /// Pass duplicates through and log each one
    #[default]
    Warn,
    /// Refuse to emit anything
    Reject,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::Allow => write!(f, "allow"),
            DuplicatePolicy::Warn => write!(f, "warn"),
            DuplicatePolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Optional decorations of the generated files
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmitOptions {
    /// Adds a "Generated from ..." line to the header
    pub source_note: Option<String>,
    /// Adds a `typing` import to Python output
    pub typing_imports: bool,
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_note(mut self, note: impl Into<String>) -> Self {
        self.source_note = Some(note.into());
        self
    }

    pub fn with_typing_imports(mut self, enabled: bool) -> Self {
        self.typing_imports = enabled;
        self
    }
}

/// Configuration for one generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub target: TargetLanguage,
    pub unterminated: UnterminatedClassPolicy,
    pub duplicates: DuplicatePolicy,
    pub emit: EmitOptions,
}

impl GeneratorConfig {
    /// Create a config with default policies for the given locations
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            target: TargetLanguage::default(),
            unterminated: UnterminatedClassPolicy::default(),
            duplicates: DuplicatePolicy::default(),
            emit: EmitOptions::default(),
        }
    }

    pub fn with_target(mut self, target: TargetLanguage) -> Self {
        self.target = target;
        self
    }

    pub fn with_unterminated_policy(mut self, policy: UnterminatedClassPolicy) -> Self {
        self.unterminated = policy;
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn with_emit_options(mut self, emit: EmitOptions) -> Self {
        self.emit = emit;
        self
    }

    /// Shorthand for [`UnterminatedClassPolicy::Error`]
    pub fn strict(self) -> Self {
        self.with_unterminated_policy(UnterminatedClassPolicy::Error)
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_parsing() {
        assert_eq!(TargetLanguage::from_str("python").unwrap(), TargetLanguage::Python);
        assert_eq!(TargetLanguage::from_str("PY").unwrap(), TargetLanguage::Python);
        assert_eq!(
            TargetLanguage::from_str("typescript").unwrap(),
            TargetLanguage::TypeScript
        );
        assert_eq!(TargetLanguage::from_str("ts").unwrap(), TargetLanguage::TypeScript);
        assert!(matches!(
            TargetLanguage::from_str("cobol"),
            Err(StubsmithError::UnknownTarget { .. })
        ));
    }

    #[test]
    fn test_target_display_matches_variants() {
        for name in TargetLanguage::variants() {
            let target = TargetLanguage::from_str(name).unwrap();
            assert_eq!(target.to_string(), *name);
        }
    }

    #[test]
    fn test_target_extension() {
        assert_eq!(TargetLanguage::Python.extension(), "py");
        assert_eq!(TargetLanguage::TypeScript.extension(), "ts");
    }

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::new("model.puml", "generated");
        assert_eq!(config.input(), Path::new("model.puml"));
        assert_eq!(config.output_dir(), Path::new("generated"));
        assert_eq!(config.target, TargetLanguage::Python);
        assert_eq!(config.unterminated, UnterminatedClassPolicy::AutoClose);
        assert_eq!(config.duplicates, DuplicatePolicy::Warn);
        assert_eq!(config.emit, EmitOptions::default());
    }

    #[test]
    fn test_config_builders() {
        let config = GeneratorConfig::new("in.puml", "out")
            .with_target(TargetLanguage::TypeScript)
            .with_duplicate_policy(DuplicatePolicy::Reject)
            .with_emit_options(EmitOptions::new().with_source_note("in.puml"))
            .strict();

        assert_eq!(config.target, TargetLanguage::TypeScript);
        assert_eq!(config.duplicates, DuplicatePolicy::Reject);
        assert_eq!(config.unterminated, UnterminatedClassPolicy::Error);
        assert_eq!(config.emit.source_note.as_deref(), Some("in.puml"));
    }
}
