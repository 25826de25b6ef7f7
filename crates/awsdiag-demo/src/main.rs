//! `awsdiag-demo`: prints the example architectures as diagram documents.
//!
//! ```text
//! awsdiag-demo ec2-to-s3
//! AWS_DARK=1 awsdiag-demo event-processing --format yaml
//! awsdiag-demo bundles
//! ```
//!
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).

mod scenes;

use anyhow::Result;
use awsdiag::AwsStyle;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "awsdiag-demo", version, about = "AWS-styled example diagrams")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output document format.
    #[arg(long, value_enum, default_value_t = Format::Json, global = true)]
    format: Format,
}

#[derive(Subcommand)]
enum Command {
    /// EC2 to S3 through a VPC, relying on injected defaults
    Ec2ToS3,
    /// EC2 to S3 with explicit bundles and group presets
    Ec2ToS3Updated,
    /// Event processing pipeline with generic groups
    EventProcessing,
    /// Every attribute bundle for the active theme
    Bundles,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let style = AwsStyle::global();
    tracing::info!(mode = ?style.mode(), "style resolved");

    let diagram = match cli.command {
        Command::Ec2ToS3 => scenes::ec2_to_s3(&style)?,
        Command::Ec2ToS3Updated => scenes::ec2_to_s3_updated(&style)?,
        Command::EventProcessing => scenes::event_processing(&style)?,
        Command::Bundles => {
            let doc = match cli.format {
                Format::Json => style.bundles_to_json()?,
                Format::Yaml => style.bundles_to_yaml()?,
            };
            println!("{}", doc);
            return Ok(());
        }
    };

    let doc = match cli.format {
        Format::Json => diagram.to_json()?,
        Format::Yaml => diagram.to_yaml()?,
    };
    println!("{}", doc);
    Ok(())
}
