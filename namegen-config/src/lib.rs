//! Shared configuration loader for the namegen toolchain.
//!
//! `defaults/namegen.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`NamegenConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use namegen_parser::namegen::{CompileOptions, SymbolTable, SymbolTableError};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/namegen.default.toml");

/// Top-level configuration consumed by namegen applications.
#[derive(Debug, Clone, Deserialize)]
pub struct NamegenConfig {
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub symbols: Vec<SymbolClassConfig>,
}

/// Mirrors the knobs exposed by the pattern compiler.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub collapse_triples: bool,
    pub capitalize_first: bool,
    /// 0 means unlimited
    pub max_depth: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub count: usize,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// One replacement or additional symbol class.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolClassConfig {
    pub code: String,
    pub entries: Vec<String>,
}

impl NamegenConfig {
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            collapse_triples: self.generator.collapse_triples,
            capitalize_first: self.generator.capitalize_first,
            max_depth: match self.generator.max_depth {
                0 => None,
                limit => Some(limit),
            },
        }
    }

    /// The built-in table with the configured classes layered on top.
    pub fn symbol_table(&self) -> Result<SymbolTable, SymbolTableError> {
        SymbolTable::builtin().with_overrides(
            self.symbols
                .iter()
                .map(|class| (&class.code, &class.entries)),
        )
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<NamegenConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NamegenConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.generator.collapse_triples);
        assert!(!config.generator.capitalize_first);
        assert_eq!(config.output.count, 10);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.symbols.is_empty());
    }

    #[test]
    fn default_compile_options() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(
            config.compile_options(),
            CompileOptions {
                max_depth: Some(256),
                ..CompileOptions::default()
            }
        );
    }

    #[test]
    fn zero_depth_is_unlimited() {
        let config = Loader::new()
            .set_override("generator.max_depth", 0)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.compile_options().max_depth, None);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "json")
            .expect("override to apply")
            .set_override("generator.max_depth", 32)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.compile_options().max_depth, Some(32));
    }

    #[test]
    fn layers_user_file_with_symbols() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(
            file,
            "[generator]\ncapitalize_first = true\n\n[[symbols]]\ncode = \"V\"\nentries = [\"ae\"]\n"
        )
        .expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert!(config.generator.capitalize_first);
        // Untouched keys keep their defaults
        assert!(config.generator.collapse_triples);

        let table = config.symbol_table().expect("valid symbols");
        assert_eq!(table.get('V').unwrap(), ["ae"]);
        assert_eq!(table.get('v').unwrap().len(), 6);
    }

    #[test]
    fn optional_missing_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/namegen.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.count, 10);
    }

    #[test]
    fn rejects_multi_character_codes() {
        let mut config = load_defaults().expect("defaults to deserialize");
        config.symbols.push(SymbolClassConfig {
            code: "vv".to_string(),
            entries: vec!["a".to_string()],
        });
        assert!(config.symbol_table().is_err());
    }
}
