pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod formats;
pub mod logger;
pub mod processing;
pub mod report;
pub mod utils;
pub mod validation;

pub use batch::{
    collect_source_files, convert_directory, process_entry, Action, ConversionRequest,
    FileOutcome, FileRecord, RunSummary, SourceEntry,
};
pub use error::{ConversionError, Result};
pub use formats::{classify, normalized_extension, webp_file_name, FileKind};
pub use processing::{convert_to_webp, copy_vector, encode_webp, load_image};
pub use utils::calculate_savings;
pub use validation::{default_project_root, resolve_against_root, validate_source_dir};
