//! hostsync: generate the host synchronization include files.
//!
//! Reads registry exports (JSON produced by the registry loader), walks each
//! command in order and writes three AsciiDoc includes listing the
//! externally synchronized parameters:
//!
//! - `parameters.txt`: single objects
//! - `parameterlists.txt`: array elements
//! - `implicit.txt`: free-text and convention-derived requirements
//!
//! Usage: `hostsync -o gen/hostsynctable registry.json`

mod buffers;
mod conventions;
mod deref;
mod emit;
mod error;
mod extract;
mod logging;
mod model;

use anyhow::{bail, Context, Result};
use buffers::{Category, SyncBuffers};
use clap::{ArgAction, Parser, ValueEnum};
use conventions::{ApiConventions, Conventions};
use model::Command;
use regex::Regex;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// When the include files are rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FlushMode {
    /// After every command, from the full history so far
    PerCommand,
    /// Once, after the last command
    EndOfRun,
}

#[derive(Parser)]
#[command(
    name = "hostsync",
    about = "Generate AsciiDoc includes listing externally synchronized parameters"
)]
struct Cli {
    /// Registry export files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory for the include files
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Do not generate the include for this category. Can be repeated.
    #[arg(long, value_enum)]
    disable: Vec<Category>,

    /// When to rewrite the include files
    #[arg(long, value_enum, default_value_t = FlushMode::PerCommand)]
    flush: FlushMode,

    /// Comment line written at the top of every include
    #[arg(long, default_value = conventions::DEFAULT_WARNING_COMMENT)]
    warning_comment: String,

    /// Commands matching this regex must synchronize their command pool
    #[arg(long, default_value = conventions::DEFAULT_EXTERNSYNC_PATTERN)]
    externsync_pattern: String,

    /// Type that owns the command buffer of matching commands
    #[arg(long, default_value = conventions::DEFAULT_OWNER_TYPE)]
    owner_type: String,

    /// Parameter holding the command buffer of matching commands
    #[arg(long, default_value = conventions::DEFAULT_OWNER_PARAM)]
    owner_param: String,

    /// More diagnostics (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet)?;

    let conventions = build_conventions(&cli)?;
    let commands = if cli.files.is_empty() {
        read_stdin()?
    } else {
        read_files(&cli.files)?
    };

    fs::create_dir_all(&cli.output).with_context(|| {
        format!("failed to create output directory: {}", cli.output.display())
    })?;

    let mut buffers = SyncBuffers::with_disabled(&cli.disable);
    for category in Category::ALL {
        if !buffers.get(category).is_enabled() {
            info!(file = category.file_name(), "include disabled");
        }
    }
    generate(&commands, &conventions, &mut buffers, &cli.output, cli.flush)?;

    info!(
        commands = commands.len(),
        output = %cli.output.display(),
        "generated host synchronization includes"
    );
    Ok(())
}

fn build_conventions(cli: &Cli) -> Result<ApiConventions> {
    let externsync_pattern = Regex::new(&cli.externsync_pattern)
        .with_context(|| format!("invalid --externsync-pattern: {}", cli.externsync_pattern))?;
    Ok(ApiConventions {
        warning_comment: cli.warning_comment.clone(),
        externsync_pattern,
        owner_type: cli.owner_type.clone(),
        owner_param: cli.owner_param.clone(),
    })
}

/// Feed every command through the extractor, flushing per `mode`.
///
/// An empty run still flushes once so enabled includes always exist.
fn generate(
    commands: &[Command],
    conventions: &dyn Conventions,
    buffers: &mut SyncBuffers,
    output_dir: &Path,
    mode: FlushMode,
) -> Result<()> {
    for cmd in commands {
        extract::process_command(cmd, conventions, buffers);
        if mode == FlushMode::PerCommand {
            emit::write_includes(output_dir, buffers, conventions)?;
        }
    }

    if mode == FlushMode::EndOfRun || commands.is_empty() {
        emit::write_includes(output_dir, buffers, conventions)?;
    }
    Ok(())
}

/// Read a single registry export from stdin.
fn read_stdin() -> Result<Vec<Command>> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    let registry = model::parse_registry(&input).context("failed to parse registry from stdin")?;
    Ok(registry.commands)
}

/// Read and concatenate the commands of every matched registry file.
fn read_files(patterns: &[String]) -> Result<Vec<Command>> {
    let paths = expand_globs(patterns)?;
    if paths.is_empty() {
        bail!("no registry files matched");
    }

    let mut commands = Vec::new();
    for path in &paths {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let registry = model::parse_registry(&content)
            .with_context(|| format!("failed to parse registry {}", path.display()))?;
        info!(path = %path.display(), commands = registry.commands.len(), "loaded registry");
        commands.extend(registry.commands);
    }
    Ok(commands)
}

/// File extensions recognized as registry exports.
const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for registry exports.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directory: non-recursive scan
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && has_supported_extension(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!(pattern = %pattern, "no files matched");
        }
        files.extend(matches);
    }
    // Sort for deterministic command order
    files.sort();
    files.dedup();
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}
