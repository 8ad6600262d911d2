use clap::Parser;
use std::path::PathBuf;

use tkr_bom::application::dto::OutputFormat;

/// Resolve bootstrap container images from a Tanzu Kubernetes Release BOM
#[derive(Parser, Debug)]
#[command(name = "tkr-bom")]
#[command(version)]
#[command(
    about = "Resolve bootstrap container images from a Tanzu Kubernetes Release BOM",
    long_about = None
)]
pub struct Args {
    /// Path to the TKR BOM file (YAML)
    #[arg(short, long, value_name = "PATH")]
    pub bom: Option<PathBuf>,

    /// Output format: text or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./tkr-bom.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print errors and the resolved images
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
