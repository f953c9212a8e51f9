//! Command-line entry point for the JSON Schema to Valibot compiler.
//!
//! ```bash
//! # Inline JSON
//! json-schema-to-valibot -i '{"type": "string"}'
//!
//! # Schema file, named ESM export with a type alias
//! json-schema-to-valibot -i schema.json -n mySchema -t -o schema.ts
//!
//! # Piped input
//! cat schema.json | json-schema-to-valibot -m cjs
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use json_schema_to_valibot::{json_schema_to_valibot, ModuleFormat, Options, TypeExport};
use json_schema_to_valibot_cli::{
    error::{CliError, CliResult},
    input::{parse_or_read_json, read_piped_input},
    writer::write_output,
};

#[derive(Parser)]
#[command(
    name = "json-schema-to-valibot",
    version,
    about = "Convert JSON Schema to Valibot schema"
)]
struct Cli {
    /// JSON or a source file path
    #[arg(short, long)]
    input: Option<String>,

    /// A file path to write to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The name of the schema in the output
    #[arg(short, long)]
    name: Option<String>,

    /// Module syntax: 'esm', 'cjs' or 'none'
    #[arg(short, long, value_enum, default_value = "esm")]
    module: ModuleArg,

    /// Export a named type along with the schema
    #[arg(short = 't', long = "type", value_name = "NAME", num_args = 0..=1)]
    type_export: Option<Option<String>>,

    /// Removes the import statement from the output
    #[arg(long)]
    no_import: bool,

    /// Generate jsdocs off of the description property
    #[arg(short = 'j', long)]
    with_jsdocs: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModuleArg {
    Esm,
    Cjs,
    None,
}

impl From<ModuleArg> for ModuleFormat {
    fn from(module: ModuleArg) -> Self {
        match module {
            ModuleArg::Esm => ModuleFormat::Esm,
            ModuleArg::Cjs => ModuleFormat::Cjs,
            ModuleArg::None => ModuleFormat::None,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {}", "Error:".red().bold(), error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let input = match cli.input {
        Some(input) => input,
        None => read_piped_input()?.unwrap_or_default(),
    };
    if input.is_empty() {
        return Err(CliError::MissingInput);
    }

    let schema = parse_or_read_json(&input)?;

    let options = Options {
        module: cli.module.into(),
        name: cli.name,
        type_export: match cli.type_export {
            None => TypeExport::Off,
            Some(None) => TypeExport::Infer,
            Some(Some(name)) => TypeExport::Named(name),
        },
        no_import: cli.no_import,
        with_jsdocs: cli.with_jsdocs,
        ..Options::default()
    };

    let code = json_schema_to_valibot(&schema, &options)?;

    match cli.output {
        Some(path) => write_output(&path, &code),
        None => {
            println!("{code}");
            Ok(())
        }
    }
}
