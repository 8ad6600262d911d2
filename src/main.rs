mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use std::path::{Path, PathBuf};
use std::process;
use tkr_bom::adapters::outbound::console::StderrProgressReporter;
use tkr_bom::adapters::outbound::filesystem::FileSystemReader;
use tkr_bom::adapters::outbound::image::ReferenceParsingReaderFactory;
use tkr_bom::application::dto::{BootstrapImagesRequest, OutputFormat};
use tkr_bom::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use tkr_bom::application::use_cases::ResolveBootstrapImagesUseCase;
use tkr_bom::shared::error::{BomError, ExitCode};
use tkr_bom::shared::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Options after merging CLI flags over the config file
#[derive(Debug, PartialEq, Eq)]
struct RunOptions {
    bom: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let config = load_config(args.config.as_deref())?;
    let options = merge_options(&args, config)?;

    // Create adapters (Dependency Injection)
    let bom_reader = FileSystemReader::new();
    let image_reader_factory = ReferenceParsingReaderFactory::new();
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case =
        ResolveBootstrapImagesUseCase::new(bom_reader, image_reader_factory, progress_reporter);

    let response = use_case.execute(BootstrapImagesRequest::new(options.bom))?;

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(options.format));
    }

    let formatter = FormatterFactory::create(options.format);
    let formatted_output = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(options.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Loads the explicit config file, or discovers one in the current directory
fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    if let Some(path) = explicit {
        return config::load_config_from_path(path).map(Some);
    }

    let config = config::discover_config(Path::new("."))?;
    if config.is_some() {
        eprintln!(
            "📋 Auto-discovered config file: {}",
            config::CONFIG_FILENAME
        );
    }
    Ok(config)
}

/// CLI flags take precedence over config file values
fn merge_options(args: &Args, config: Option<ConfigFile>) -> Result<RunOptions> {
    let config = config.unwrap_or_default();

    let format = args
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default();

    let bom = args.bom.clone().or(config.bom).ok_or_else(|| BomError::Validation {
        message: "No BOM file specified.\n\n💡 Hint: Pass --bom <PATH> or set 'bom' in tkr-bom.config.yml".to_string(),
    })?;

    let output = args.output.clone().or(config.output);

    Ok(RunOptions {
        bom,
        format,
        output,
    })
}
