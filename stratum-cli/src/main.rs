// Command-line interface for stratum
//
// This binary reads hierarchical documents (XML, HTML, JSON, outline text) and writes them out as
// indented outlines, JSON or a visual tree. All the work is done by the stratum-babel crate, this
// binary only deals with files, configuration and the shell.
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file extension, while being overwrittable by an explicit --from flag.
// Usage:
//  stratum <input> --to <format> [--from <format>] [--output <file>]          - Convert between formats (default)
//  stratum convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  stratum format <input>                                                      - Re-indent an outline file
//  stratum inspect <input> [--from <format>]                                   - Print the document as a tree
//  stratum --list-formats                                                      - List available formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. Parameters that mirror a configuration key
// (indent-unit, include-attributes, max-depth, ...) update the loaded configuration, anything
// else is handed to the target format.
// Example:
//  stratum inspect pom.xml --extra-max-depth 2 --extra-show-scalars false

use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use stratum_babel::common::import::ImportOptions;
use stratum_babel::formats::outline::parser::ParseOptions;
use stratum_babel::formats::{HtmlFormat, JsonFormat, OutlineFormat, TreevizFormat, XmlFormat};
use stratum_babel::FormatRegistry;
use stratum_config::{Loader, StratumConfig};

const SUBCOMMANDS: &[&str] = &["convert", "format", "inspect", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .map_or(false, |next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("stratum")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert hierarchical documents into indented outlines")
        .long_about(
            "stratum is a command-line tool for turning tree-shaped documents into\n\
            readable, indented outline text.\n\n\
            Commands:\n  \
            - convert: Transform between formats (xml, html, json, outline, treeviz)\n  \
            - format:  Re-indent an outline file\n  \
            - inspect: Print a document as a tree\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            stratum pom.xml --to outline                  # Convert a Maven POM (stdout)\n  \
            stratum pom.xml --to outline -o pom.yml       # Convert to a file\n  \
            stratum inspect pom.xml --extra-max-depth 2   # Tree view, two levels deep\n  \
            stratum format app.yml --extra-indent-unit 4  # Re-indent with four spaces"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a stratum.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug information to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert documents between different formats.\n\n\
                    Supported formats:\n  \
                    - outline: Indented outline text (.yml, .yaml, .outline)\n  \
                    - xml:     XML documents, import only (.xml, .pom)\n  \
                    - html:    HTML documents, import only (.html, .htm)\n  \
                    - json:    JSON documents (.json)\n  \
                    - treeviz: Tree view, export only (.tree)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    stratum convert pom.xml --to outline            # XML to outline (stdout)\n  \
                    stratum convert data.json --to outline -o d.yml # JSON to outline file\n  \
                    stratum pom.xml --to json                       # 'convert' is optional"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: outline, json, treeviz\n\
                            Use the format name, not the file extension."
                        )
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Format an outline file")
                .long_about(
                    "Parse an outline file and write it back with canonical indentation.\n\n\
                    Bare list values are written as '- value' items and blank lines are\n\
                    dropped. Output is always written to stdout.\n\n\
                    Examples:\n  \
                    stratum format app.yml                  # Format to stdout\n  \
                    stratum format app.yml > formatted.yml  # Redirect to file"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print a document as a tree")
                .long_about(
                    "Parse a document and print its structure with box connectors.\n\n\
                    Extra Parameters:\n  \
                    --extra-show-scalars false   Show keys only\n  \
                    --extra-max-depth <n>        Draw at most n levels\n\n\
                    Examples:\n  \
                    stratum inspect pom.xml\n  \
                    stratum inspect page.txt --from html"
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the document")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    let registry = build_registry(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let to = required_arg(sub_matches, "to");
            let from = resolve_from(&registry, input, sub_matches.get_one::<String>("from"));
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, &from, to, output, &extra_params);
        }
        Some(("format", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            // Format command always outputs to stdout (no -o flag)
            handle_convert_command(&registry, input, "outline", "outline", None, &extra_params);
        }
        Some(("inspect", sub_matches)) => {
            let path = required_arg(sub_matches, "path");
            let from = resolve_from(&registry, path, sub_matches.get_one::<String>("from"));
            handle_convert_command(&registry, path, &from, "treeviz", None, &extra_params);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn required_arg<'a>(matches: &'a clap::ArgMatches, name: &str) -> &'a str {
    match matches.get_one::<String>(name) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: missing required argument '{name}'");
            std::process::exit(2);
        }
    }
}

/// Returns the explicit --from, or the format detected from the file extension
fn resolve_from(registry: &FormatRegistry, input: &str, explicit: Option<&String>) -> String {
    if let Some(from) = explicit {
        return from.to_string();
    }
    match registry.detect_format_from_filename(input) {
        Some(detected) => detected,
        None => {
            eprintln!("Error: Could not detect format from filename '{input}'");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command (also backs format and inspect)
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
) {
    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let node = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    tracing::debug!(input, from, to, kind = node.kind(), "parsed input");

    let text = registry
        .serialize_with_options(&node, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let direction = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "in/out",
            (true, false) => "in",
            (false, true) => "out",
            (false, false) => "-",
        };
        println!(
            "  {:<8} {:<7} {:<18} {}",
            name,
            direction,
            format.file_extensions().join(", "),
            format.description()
        );
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> StratumConfig {
    let loader = Loader::new().with_optional_file("stratum.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn build_registry(config: &StratumConfig) -> FormatRegistry {
    let import = ImportOptions::from(&config.import);

    let mut registry = FormatRegistry::new();
    registry.register(OutlineFormat::new(
        ParseOptions::from(&config.outline),
        config.outline.indent_unit,
    ));
    registry.register(XmlFormat::new(import.clone()));
    registry.register(HtmlFormat::new(import));
    registry.register(JsonFormat);
    registry.register(TreevizFormat::new((&config.inspect).into()));
    registry
}

fn apply_config_overrides(
    config: &mut StratumConfig,
    extra_params: &mut HashMap<String, String>,
) {
    if let Some(raw) = extra_params.remove("indent-unit") {
        config.outline.indent_unit = parse_usize_arg("indent-unit", &raw);
    }
    if let Some(raw) = extra_params.remove("strict-dedent") {
        config.outline.strict_dedent = parse_bool_arg("strict-dedent", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["include-attributes", "attributes"]) {
        config.import.include_attributes = parse_bool_arg("include-attributes", &raw);
    }
    if let Some(raw) = extra_params.remove("attribute-prefix") {
        config.import.attribute_prefix = raw;
    }
    if let Some(raw) = extra_params.remove("text-key") {
        config.import.text_key = raw;
    }
    if let Some(raw) = extra_params.remove("import-max-depth") {
        config.import.max_depth = parse_usize_arg("import-max-depth", &raw);
    }

    if let Some(raw) = extra_params.remove("show-scalars") {
        config.inspect.show_scalars = parse_bool_arg("show-scalars", &raw);
    }
    if let Some(raw) = extra_params.remove("max-depth") {
        config.inspect.max_depth = Some(parse_usize_arg("max-depth", &raw));
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

fn parse_usize_arg(flag: &str, raw: &str) -> usize {
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid number '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
