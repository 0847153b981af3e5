use crate::constants::{DEFAULT_JOBS, DEFAULT_OUTPUT_DIR, DEFAULT_QUALITY, ROOT_ENV_VAR};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "convert-images",
    about = "Convert JPG/PNG images to WebP format",
    long_about = "Walks a flat directory of site images, re-encodes every JPG/JPEG/PNG as WebP \
                  and copies SVGs unchanged into the output directory. Other files are skipped. \
                  A file that fails to convert is reported and skipped; the run carries on.",
    version,
    after_help = "EXAMPLES:\n  \
    convert-images snapshot/\n  \
    convert-images snapshot/ --output ui/public/img\n  \
    convert-images /path/to/images -o /path/to/output -q 75"
)]
pub struct Args {
    // Optional so a missing value exits with status 1 rather than clap's usage error.
    #[arg(
        value_name = "INPUT_DIR",
        help = "Directory containing images to convert",
        long_help = "Directory containing images to convert. Only its direct entries are read. \
                     Relative paths are resolved against the project root."
    )]
    pub input: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Output directory for converted images",
        long_help = "Output directory for converted images, created with any missing parents. \
                     Relative paths are resolved against the project root."
    )]
    pub output: PathBuf,

    #[arg(
        short = 'q',
        long,
        value_name = "NUM",
        default_value_t = DEFAULT_QUALITY,
        allow_negative_numbers = true,
        help = "WebP quality (1-100)",
        long_help = "Lossy WebP quality from 1 (smallest) to 100 (best). \
                     The value is handed to the encoder unchanged; the encoder rejects \
                     values outside 0-100 and those files are reported as skipped."
    )]
    pub quality: i32,

    #[arg(
        long,
        value_name = "DIR",
        env = ROOT_ENV_VAR,
        help = "Project root for resolving relative paths",
        long_help = "Project root that relative INPUT_DIR and --output paths are joined onto. \
                     Defaults to the parent of the directory containing this executable."
    )]
    pub root: Option<PathBuf>,

    #[arg(
        short = 'j',
        long,
        value_name = "N",
        default_value_t = DEFAULT_JOBS,
        help = "Number of files to process in parallel",
        long_help = "Number of worker threads. With 1 (the default) files are processed and \
                     logged one by one; with more, results are logged once all files are done."
    )]
    pub jobs: usize,

    #[arg(long, conflicts_with = "verbose", help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print extra detail for each file")]
    pub verbose: bool,
}
