mod config;

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use clap::Parser;
use openapi_index_core::{FullModuleMap, IndexFile};
use openapi_index_discovery::{DiscoverConfig, DiscoverOutcome, discover_modules};
use openapi_index_emit::{
    EmbedTarget, checksum, index_path, render_embed, render_index, write_embed,
    write_rendered_index,
};
use tracing_subscriber::EnvFilter;

use crate::config::{GeneratorConfig, Settings};

/// Embed path meaning "write to standard output".
const STDOUT_PATH: &str = "-";

/// CLI-specific embed target enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CliEmbedTarget {
    Go,
    Rust,
}

impl From<CliEmbedTarget> for EmbedTarget {
    fn from(target: CliEmbedTarget) -> Self {
        match target {
            CliEmbedTarget::Go => Self::Go,
            CliEmbedTarget::Rust => Self::Rust,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "oapi-index-gen")]
#[command(about = "Generate the index file for all OpenAPI YAML files in a directory")]
#[command(version)]
struct Cli {
    /// Directory of OpenAPI files.
    dir: PathBuf,
    /// Directory to save the index YAML in. Defaults to the OpenAPI directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Write the embed loader source to this file (`-` for stdout).
    #[arg(long)]
    embed: Option<PathBuf>,
    /// Host language of the embed source [default: go].
    #[arg(long)]
    target: Option<CliEmbedTarget>,
    /// Package name of the Go embed source [default: openapi].
    #[arg(long)]
    package: Option<String>,
    /// Prefix of the `info` extension fields [default: x-mgc].
    #[arg(long)]
    extension_prefix: Option<String>,
    /// YAML file with default settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Regenerate in memory and fail if the files on disk differ.
    #[arg(long)]
    check: bool,
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn settings(&self) -> Result<Settings, String> {
        let file = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };
        let flags = GeneratorConfig {
            target: self.target.map(EmbedTarget::from),
            package: self.package.clone(),
            extension_prefix: self.extension_prefix.clone(),
        };
        Ok(file.resolve(flags))
    }

    fn output_dir(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.dir)
    }

    fn embed_to_stdout(&self) -> bool {
        self.embed.as_deref() == Some(Path::new(STDOUT_PATH))
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Summary output. Goes to stderr when stdout carries the embed source.
struct Report {
    to_stderr: bool,
}

impl Report {
    fn line(&self, text: impl std::fmt::Display) {
        if self.to_stderr {
            eprintln!("{text}");
        } else {
            println!("{text}");
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let settings = cli.settings()?;
    settings
        .embed
        .target
        .check_package(&settings.embed.package)
        .map_err(|err| err.to_string())?;
    if cli.check && cli.embed_to_stdout() {
        return Err("--check cannot compare an embed source written to stdout".to_string());
    }

    let report = Report {
        to_stderr: cli.embed_to_stdout(),
    };
    tracing::debug!(dir = %cli.dir.display(), target = %settings.embed.target, "starting");

    let discover = DiscoverConfig::new(&cli.dir)
        .with_output_dir(cli.output_dir())
        .with_extension_prefix(&settings.extension_prefix);
    let outcome = discover_modules(&discover).map_err(|err| err.to_string())?;

    for name in &outcome.ignored {
        report.line(format!("ignored file: {name}"));
    }
    report.line("indexed modules:");
    for module in &outcome.index.modules {
        report.line(format!("  {} {} {}", module.name, module.version, module.path));
    }

    if cli.check {
        run_check(cli, &settings, &outcome, &report)
    } else {
        run_write(cli, &settings, outcome, &report)
    }
}

fn run_write(
    cli: &Cli,
    settings: &Settings,
    outcome: DiscoverOutcome,
    report: &Report,
) -> Result<(), String> {
    let DiscoverOutcome {
        index, documents, ..
    } = outcome;
    let output_dir = cli.output_dir();

    let rendered = render_index(&index).map_err(|err| format!("failed to write index: {err}"))?;
    let index_file = write_rendered_index(&rendered, output_dir)
        .map_err(|err| format!("failed to write index: {err}"))?;
    report.line(format!(
        "wrote {} (sha256 {})",
        index_file.display(),
        checksum(rendered.as_bytes())
    ));

    let Some(embed_path) = &cli.embed else {
        return Ok(());
    };

    if cli.embed_to_stdout() {
        let stdout = io::stdout();
        let mut sink = BufWriter::new(stdout.lock());
        write_embed(&index, &documents, &settings.embed, &mut sink)
            .map_err(|err| format!("failed to write embed source: {err}"))?;
        return Ok(());
    }

    write_embed_file(&index, &documents, settings, embed_path)?;
    let written = fs::read(embed_path)
        .map_err(|err| format!("failed to read back {}: {err}", embed_path.display()))?;
    report.line(format!(
        "wrote {} (sha256 {})",
        embed_path.display(),
        checksum(&written)
    ));
    Ok(())
}

fn write_embed_file(
    index: &IndexFile,
    documents: &FullModuleMap,
    settings: &Settings,
    path: &Path,
) -> Result<(), String> {
    let file = File::create(path)
        .map_err(|err| format!("failed to create {}: {err}", path.display()))?;
    let mut sink = BufWriter::new(file);
    write_embed(index, documents, &settings.embed, &mut sink)
        .map_err(|err| format!("failed to write embed source: {err}"))
}

fn run_check(
    cli: &Cli,
    settings: &Settings,
    outcome: &DiscoverOutcome,
    report: &Report,
) -> Result<(), String> {
    let mut expected = vec![(
        index_path(cli.output_dir()),
        render_index(&outcome.index).map_err(|err| err.to_string())?,
    )];
    if let Some(embed_path) = &cli.embed {
        let source = render_embed(&outcome.index, &outcome.documents, &settings.embed)
            .map_err(|err| err.to_string())?;
        expected.push((embed_path.clone(), source));
    }

    let mut stale = 0;
    for (path, contents) in &expected {
        if is_current(path, contents) {
            report.line(format!("up to date: {}", path.display()));
        } else {
            report.line(format!("stale: {}", path.display()));
            stale += 1;
        }
    }

    if stale > 0 {
        return Err(format!("{stale} artifact(s) out of date"));
    }
    Ok(())
}

fn is_current(path: &Path, expected: &str) -> bool {
    match fs::read(path) {
        Ok(actual) => checksum(&actual) == checksum(expected.as_bytes()),
        Err(_) => false,
    }
}
