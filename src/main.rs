use anyhow::Context;
use clap::Parser;
use convert_images::cli::Args;
use convert_images::validation::{default_project_root, resolve_against_root};
use convert_images::{convert_directory, error, logger, warn, ConversionError, ConversionRequest};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logger::configure(args.quiet, args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let Some(input) = args.input else {
        eprintln!("Usage: convert-images <input_dir> [--output <output_dir>]");
        return Err(ConversionError::MissingInput.into());
    };

    if args.jobs == 0 {
        warn!("--jobs 0 runs sequentially, same as --jobs 1");
    }

    let root = match args.root {
        Some(root) => root,
        None => default_project_root()?,
    };

    let request = ConversionRequest::new(
        resolve_against_root(&input, &root),
        resolve_against_root(&args.output, &root),
        args.quality,
    );

    convert_directory(&request, args.jobs).context("image conversion aborted")?;

    Ok(())
}
