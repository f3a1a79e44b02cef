//! Command-line interface for namegen
//! This binary compiles a name pattern (or a built-in preset) and prints random names drawn from it.
//!
//! Usage:
//!   namegen `<pattern>` [-n `<count>`] [--seed `<n>`] [--format `<format>`]   - Generate names
//!   namegen --preset `<name>` [--analyze] [--tree]                         - Use a built-in pattern
//!   namegen --list-presets | --list-symbols                              - Show what is available
//!
//! Set `RUST_LOG=namegen_parser=debug` to see compiler diagnostics on stderr.

mod output;

use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use namegen_config::{Loader, NamegenConfig, OutputFormat};
use namegen_parser::namegen::formats::to_treeviz_str;
use namegen_parser::namegen::{format_source_context, presets, Generator, SymbolTable};
use output::{
    format_analysis, format_names, format_presets, format_symbols, parse_format,
    AVAILABLE_FORMATS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("namegen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate random names from compact patterns")
        .arg_required_else_help(true)
        .arg(
            Arg::new("pattern")
                .help("Pattern to compile, e.g. '<s|B>V<c|C>(|ius|ia)'")
                .required_unless_present_any(["preset", "list-presets", "list-symbols"])
                .conflicts_with("preset")
                .index(1),
        )
        .arg(
            Arg::new("preset")
                .long("preset")
                .short('p')
                .help("Use a built-in pattern by name (see --list-presets)"),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .short('n')
                .help("Number of names to generate (default from config: 10)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed the random generator for reproducible output")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("no-collapse")
                .long("no-collapse")
                .help("Keep runs of repeated letters")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("capitalize")
                .long("capitalize")
                .help("Capitalize every generated name")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("analyze")
                .long("analyze")
                .help("Print the number of possible names and their length range")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tree")
                .long("tree")
                .help("Print the compiled generator tree")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from config: text)")
                .value_parser(PossibleValuesParser::new(AVAILABLE_FORMATS)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-presets")
                .long("list-presets")
                .help("List the built-in patterns")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-symbols")
                .long("list-symbols")
                .help("List the symbol classes available inside <...> groups")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(&matches);
    let format = match matches.get_one::<String>("format") {
        Some(name) => parse_format(name).unwrap_or_else(|e| fail(&e)),
        None => config.output.format,
    };
    let table = config
        .symbol_table()
        .unwrap_or_else(|e| fail(&format!("Invalid symbol configuration: {}", e)));

    if matches.get_flag("list-presets") {
        emit(format_presets(presets::all(), format));
        return;
    }
    if matches.get_flag("list-symbols") {
        emit(format_symbols(&table, format));
        return;
    }

    let pattern = resolve_pattern(&matches);
    handle_generate_command(&matches, &config, &table, &pattern, format);
}

/// Layer `--config` and command-line flags over the embedded defaults
fn load_config(matches: &ArgMatches) -> NamegenConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    if let Some(count) = matches.get_one::<usize>("count") {
        loader = loader
            .set_override("output.count", *count as i64)
            .unwrap_or_else(|e| fail(&format!("Invalid option: {}", e)));
    }
    if matches.get_flag("no-collapse") {
        loader = loader
            .set_override("generator.collapse_triples", false)
            .unwrap_or_else(|e| fail(&format!("Invalid option: {}", e)));
    }
    if matches.get_flag("capitalize") {
        loader = loader
            .set_override("generator.capitalize_first", true)
            .unwrap_or_else(|e| fail(&format!("Invalid option: {}", e)));
    }

    loader
        .build()
        .unwrap_or_else(|e| fail(&format!("Configuration error: {}", e)))
}

fn resolve_pattern(matches: &ArgMatches) -> String {
    if let Some(pattern) = matches.get_one::<String>("pattern") {
        return pattern.clone();
    }
    let name = matches
        .get_one::<String>("preset")
        .map(String::as_str)
        .unwrap_or_default();
    match presets::find(name) {
        Some(preset) => preset.pattern.to_string(),
        None => {
            eprintln!("Unknown preset '{}'", name);
            eprintln!("\nAvailable presets:");
            for preset in presets::all() {
                eprintln!("  {} - {}", preset.name, preset.description);
            }
            std::process::exit(1);
        }
    }
}

/// Compile the pattern and print names, its analysis, or its tree
fn handle_generate_command(
    matches: &ArgMatches,
    config: &NamegenConfig,
    table: &SymbolTable,
    pattern: &str,
    format: OutputFormat,
) {
    let generator = Generator::with_table(pattern, table, config.compile_options())
        .unwrap_or_else(|e| {
            eprintln!("Invalid pattern: {}", e);
            eprintln!("{}", format_source_context(pattern, &e));
            std::process::exit(1);
        });

    let analysis = generator.analyze();
    if analysis.is_empty() {
        tracing::warn!(pattern, "pattern can only produce empty names");
    }

    let show_tree = matches.get_flag("tree");
    let show_analysis = matches.get_flag("analyze");

    if show_tree {
        print!("{}", to_treeviz_str(generator.root()));
    }
    if show_analysis {
        emit(format_analysis(pattern, &analysis, format));
    }
    if show_tree || show_analysis {
        return;
    }

    let mut rng = match matches.get_one::<u64>("seed") {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let count = config.output.count;
    tracing::debug!(pattern, count, "generating names");
    emit(format_names(&generator.sample(&mut rng, count), format));
}

fn emit(result: Result<String, String>) {
    match result {
        Ok(text) => print!("{}", text),
        Err(e) => fail(&e),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
