use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use metaprobe::config::Config;
use metaprobe::pipeline::{self, FileKind};
use metaprobe::{Report, export};

#[derive(Parser, Debug)]
#[command(
    name = "metaprobe",
    version,
    about = "Show embedded metadata — EXIF tags, GPS position, PDF properties — of a single file"
)]
struct Cli {
    /// Image (.jpg, .jpeg, .tiff, .png) or PDF file to inspect
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Arguments after FILE are accepted and ignored
    #[arg(value_name = "IGNORED", hide = true)]
    ignored: Vec<String>,

    /// Also write the report to <FILE name>_metadata.txt
    #[arg(long)]
    export: bool,

    /// Path to config file (default: metaprobe.json next to binary)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // clap's own exit code for usage errors is 2; ours is 1. --help and
    // --version still exit with 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if !cli.ignored.is_empty() {
        log::debug!("Ignoring extra arguments: {:?}", cli.ignored);
    }

    if !cli.path.exists() {
        anyhow::bail!("The file '{}' was not found.", cli.path.display());
    }

    let Some(kind) = FileKind::from_path(&cli.path) else {
        let ext = cli
            .path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_else(|| "(none)".to_string());
        anyhow::bail!(
            "Unsupported file type: {ext}. Supported extensions: {}.",
            pipeline::supported_extensions()
        );
    };

    let capability = kind.capability();
    if !capability.is_available() {
        anyhow::bail!(
            "{capability} is not available in this build; rebuild with `--features {}` to read {} files.",
            capability.feature(),
            kind.label()
        );
    }

    // Config is only needed once the input is known to be readable
    let config = Config::load(cli.config.as_deref())?;

    let report = match pipeline::analyze(&cli.path, kind, &config.report) {
        Ok(report) => report,
        Err(err) => {
            log::debug!("Decode failed for {}: {err:?}", cli.path.display());
            Report::failure(kind.label(), &cli.path, &err)
        }
    };

    let text = report.to_string();
    println!("{text}");

    if cli.export {
        let written = export::export_report(&text, &cli.path, config.export.output_dir.as_deref())?;
        println!("\n✅ Metadata successfully exported to '{}'", written.display());
    }

    Ok(())
}
