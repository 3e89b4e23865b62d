use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bitconv_core::decode::{DecodedField, ScalarKind, decode_run, ensure_ieee754_floats};
use bitconv_core::rom::{RomFormat, normalize_to_big_endian};
use clap::{Args, Parser, Subcommand};
use glob::glob;

const ROM_EXTENSIONS: [&str; 5] = ["z64", "n64", "v64", "rom", "bin"];

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BITCONV_BUILD_COMMIT"),
    " ",
    env!("BITCONV_BUILD_DATE"),
    ")\ncommit: ",
    env!("BITCONV_BUILD_COMMIT_FULL")
);

#[derive(Parser, Debug)]
#[command(name = "bitconv")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Big-endian decoding and byte-order normalization for cartridge ROM images.",
    long_about = None,
    after_help = "Examples:\n  bitconv rom inspect game.v64 --stdout --pretty\n  bitconv rom normalize game.n64 -o game.z64\n  bitconv decode game.z64 --type u32 --offset 0x10 --count 2"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on whole ROM images (.z64/.n64/.v64).
    Rom {
        #[command(subcommand)]
        command: RomCommands,
    },
    /// Decode big-endian values from a file and print them as JSON.
    #[command(
        after_help = "Examples:\n  bitconv decode game.z64 --type u32 --offset 0x10\n  bitconv decode game.v64 --normalize --type f32 --offset 0x1000 --count 4"
    )]
    Decode(DecodeArgs),
}

#[derive(Subcommand, Debug)]
enum RomCommands {
    /// Detect the byte order and decode the header into a JSON report.
    #[command(
        after_help = "Examples:\n  bitconv rom inspect game.v64 -o report.json\n  bitconv rom inspect game.z64 --stdout --pretty"
    )]
    Inspect {
        /// Path to a ROM image
        input: PathBuf,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Rewrite a ROM image into canonical big-endian (z64) order.
    #[command(alias = "normalise")]
    #[command(
        after_help = "Examples:\n  bitconv rom normalize game.n64 -o game.z64\n  bitconv rom normalize game.v64 --in-place"
    )]
    Normalize {
        /// Path to a ROM image
        input: PathBuf,

        /// Output image path
        #[arg(short = 'o', long, required_unless_present = "in_place")]
        output: Option<PathBuf>,

        /// Overwrite the input file
        #[arg(long, conflicts_with = "output")]
        in_place: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Path to the input file
    input: PathBuf,

    /// Scalar type: i8 u8 i16 u16 i32 u32 i64 u64 f32 f64
    #[arg(short = 't', long = "type", value_parser = parse_kind)]
    kind: ScalarKind,

    /// Byte offset of the first value (decimal or 0x-prefixed hex)
    #[arg(long, default_value = "0", value_parser = parse_offset)]
    offset: usize,

    /// Number of consecutive values to decode
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Normalize a v64/n64 image to z64 order before decoding
    #[arg(long)]
    normalize: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = ensure_ieee754_floats()
        .map_err(|err| {
            CliError::new(
                err.to_string(),
                Some("bitconv requires IEEE-754 binary32/binary64 floats".to_string()),
            )
        })
        .and_then(|()| match cli.command {
            Commands::Rom { command } => match command {
                RomCommands::Inspect {
                    input,
                    report,
                    stdout,
                    pretty,
                    compact,
                    quiet,
                } => cmd_rom_inspect(input, report, stdout, pretty, compact, quiet),
                RomCommands::Normalize {
                    input,
                    output,
                    in_place,
                    quiet,
                } => cmd_rom_normalize(input, output, in_place, quiet),
            },
            Commands::Decode(args) => cmd_decode(args),
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

impl From<bitconv_core::rom::RomError> for CliError {
    fn from(err: bitconv_core::rom::RomError) -> Self {
        use bitconv_core::rom::RomError;
        let hint = match &err {
            RomError::UnrecognizedFormat { .. } => Some(format!(
                "expected first byte 0x{:02x} (z64), 0x{:02x} (v64) or 0x{:02x} (n64)",
                RomFormat::Z64.signature(),
                RomFormat::V64.signature(),
                RomFormat::N64.signature()
            )),
            RomError::InvalidLength { .. } => {
                Some("the image looks truncated; re-dump or check the file".to_string())
            }
            RomError::Decode(_) => None,
        };
        CliError::new(err.to_string(), hint)
    }
}

impl From<bitconv_core::decode::DecodeError> for CliError {
    fn from(err: bitconv_core::decode::DecodeError) -> Self {
        CliError::new(
            err.to_string(),
            Some("check --offset, --count and the file size".to_string()),
        )
    }
}

fn cmd_rom_inspect(
    input: PathBuf,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input, true)?;
    let report = if stdout {
        None
    } else {
        Some(report.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?)
    };
    if let Some(report_path) = report.as_ref() {
        ensure_distinct_output(&resolved_input, report_path)?;
    }

    let data = fs::read(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    let modified = fs::metadata(&resolved_input)
        .and_then(|meta| meta.modified())
        .ok();
    let rep = bitconv_core::inspect_rom(&resolved_input.to_string_lossy(), &data, modified)?;
    let json = serialize_json(&rep, pretty, compact)?;

    let Some(report) = report else {
        print!("{}", json);
        return Ok(());
    };
    create_parent_dir(&report)?;
    fs::write(&report, json)
        .with_context(|| format!("Failed to write report: {}", report.display()))?;
    if !quiet {
        eprintln!("OK: report written -> {}", report.display());
    }
    Ok(())
}

fn cmd_rom_normalize(
    input: PathBuf,
    output: Option<PathBuf>,
    in_place: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input, true)?;
    let output = if in_place {
        resolved_input.clone()
    } else {
        let output = output.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--output or --in-place".to_string()),
            )
        })?;
        ensure_distinct_output(&resolved_input, &output)?;
        output
    };

    let mut data = fs::read(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    let outcome = normalize_to_big_endian(&mut data)?;

    create_parent_dir(&output)?;
    fs::write(&output, &data)
        .with_context(|| format!("Failed to write image: {}", output.display()))?;
    if !quiet {
        let from = outcome.format.map(RomFormat::name).unwrap_or("empty");
        eprintln!(
            "OK: {} -> z64 ({} units swapped) -> {}",
            from,
            outcome.units_swapped,
            output.display()
        );
    }
    Ok(())
}

fn cmd_decode(args: DecodeArgs) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&args.input)?;
    validate_input_file(&resolved_input, false)?;

    let mut data = fs::read(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    if args.normalize {
        normalize_to_big_endian(&mut data)?;
    }
    let fields: Vec<DecodedField> = decode_run(args.kind, &data, args.offset, args.count)?;
    let json = serialize_json(&fields, args.pretty, false)?;
    println!("{}", json);
    Ok(())
}

fn serialize_json<T: serde::Serialize>(
    value: &T,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn parse_kind(value: &str) -> Result<ScalarKind, String> {
    value.parse::<ScalarKind>().map_err(|err| err.to_string())
}

fn parse_offset(value: &str) -> Result<usize, String> {
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => value.parse::<usize>(),
    };
    parsed.map_err(|err| format!("invalid offset '{}': {}", value, err))
}

fn ensure_distinct_output(input: &Path, output: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let output_dir = output
        .parent()
        .map(|parent| {
            if parent.as_os_str().is_empty() {
                fs::canonicalize(".")
            } else {
                fs::canonicalize(parent)
            }
        })
        .transpose()
        .ok()
        .flatten();
    let (Some(output_dir), Some(file_name)) = (output_dir, output.file_name()) else {
        return Ok(());
    };
    if output_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!("output path must differ from input: {}", output.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    Ok(())
}

fn validate_input_file(input: &Path, rom_only: bool) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("check the path".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a single file".to_string()),
        ));
    }
    if !rom_only {
        return Ok(());
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if !ROM_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .z64, .n64, .v64, .rom or .bin file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
