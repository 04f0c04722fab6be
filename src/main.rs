use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use log::{debug, error, info, warn};

use crate::config::Settings;
use crate::face::client::FaceClient;
use crate::report::row::FaceRecord;

/// Read subscription settings from an INI configuration file
mod config;
/// Submit images to the remote Face API
mod face;
/// Find image files eligible for submission
mod images;
/// Collect face attributes into a CSV report
mod report;

#[derive(Debug, Parser)]
#[command(about = "Submit a directory of face images to the Azure Face API \
and collect age, gender, and emotion ratings in a CSV report")]
struct Args {
    /// File path to the configuration file
    #[arg(short, long)]
    config: PathBuf,

    /// The file path to the directory of images to be processed
    #[arg(short, long)]
    image_dir: PathBuf,

    /// The file path to the output results file
    #[arg(short, long)]
    output_file: PathBuf,

    /// Print debug information
    #[arg(long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_log(args.debug);
    info!("terve! starting up :)");

    if args.output_file.exists() {
        bail!("Output file {} already exists", args.output_file.display());
    }

    let settings = Settings::load(&args.config)?;
    let images = images::list_images(&args.image_dir)?;

    let records = process_images(&settings, &images).await;

    report::write::write_report(&args.output_file, &records)?;
    info!("Results written to {}", args.output_file.display());

    Ok(())
}

/// Submit each image in turn, pausing between requests to respect the API quota
///
/// A failed submission is logged and skipped so one bad image doesn't sink the
/// whole run.
async fn process_images(settings: &Settings, images: &[PathBuf]) -> Vec<FaceRecord> {
    let client = FaceClient::new(settings);
    let throttle = settings.throttle();

    let mut records: Vec<FaceRecord> = Vec::new();
    for (n, path) in images.iter().enumerate() {
        if n > 0 {
            debug!("Sleeping for {}s to stay inside rate limit", throttle.as_secs());
            tokio::time::sleep(throttle).await;
        }

        info!("Processing image: {}", path.display());
        match client.detect(path).await {
            Ok(Some(face)) => records.push(FaceRecord::new(path, face)),
            Ok(None) => warn!("No data returned for image: {}", path.display()),
            Err(err) => error!(
                "Request to API for image {} failed with error: {err:#}",
                path.display()
            ),
        }
    }

    info!("Processed {} of {} images", records.len(), images.len());
    records
}

fn setup_log(debug: bool) {
    let default_level = match debug {
        true => "debug",
        false => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
