//! Output formatting for the CLI
//!
//! Names, analyses and listings share one set of formats: plain text for
//! terminals, JSON and YAML for scripts.

use namegen_config::OutputFormat;
use namegen_parser::namegen::presets::Preset;
use namegen_parser::namegen::{Analysis, SymbolTable};
use serde::Serialize;

/// Names accepted by `--format`
pub const AVAILABLE_FORMATS: &[&str] = &["text", "json", "yaml"];

pub fn parse_format(name: &str) -> Result<OutputFormat, String> {
    match name {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "yaml" => Ok(OutputFormat::Yaml),
        other => Err(format!(
            "Unknown format '{}' (available: {})",
            other,
            AVAILABLE_FORMATS.join(", ")
        )),
    }
}

#[derive(Serialize)]
struct AnalysisReport<'a> {
    pattern: &'a str,
    #[serde(flatten)]
    analysis: &'a Analysis,
    description: String,
}

#[derive(Serialize)]
struct SymbolClass<'a> {
    code: String,
    entries: &'a [String],
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| format!("YAML serialization failed: {}", e))
        }
        _ => serde_json::to_string_pretty(value)
            .map(|s| s + "\n")
            .map_err(|e| format!("JSON serialization failed: {}", e)),
    }
}

/// One name per line, or a list in the structured formats
pub fn format_names(names: &[String], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(names.iter().map(|name| format!("{}\n", name)).collect()),
        _ => serialize(names, format),
    }
}

pub fn format_analysis(
    pattern: &str,
    analysis: &Analysis,
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n", analysis)),
        _ => serialize(
            &AnalysisReport {
                pattern,
                analysis,
                description: analysis.describe(),
            },
            format,
        ),
    }
}

pub fn format_presets(presets: &[Preset], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::from("Available presets:\n\n");
            for preset in presets {
                out.push_str(&format!("  {}\n    {}\n\n", preset.name, preset.description));
            }
            Ok(out)
        }
        _ => serialize(presets, format),
    }
}

pub fn format_symbols(table: &SymbolTable, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (code, entries) in table.iter() {
                out.push_str(&format!("  {} ({}): {}\n", code, entries.len(), entries.join(" ")));
            }
            Ok(out)
        }
        _ => {
            let classes: Vec<SymbolClass> = table
                .iter()
                .map(|(code, entries)| SymbolClass {
                    code: code.to_string(),
                    entries,
                })
                .collect();
            serialize(&classes, format)
        }
    }
}
