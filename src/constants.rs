pub const DEFAULT_QUALITY: i32 = 85;
pub const DEFAULT_OUTPUT_DIR: &str = "ui/public/img";
pub const DEFAULT_JOBS: usize = 1;

pub const ROOT_ENV_VAR: &str = "CONVERT_IMAGES_ROOT";

/// Extensions re-encoded to WebP (lower-case, without the dot).
pub const RASTER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
pub const VECTOR_EXTENSION: &str = "svg";
pub const TARGET_EXTENSION: &str = "webp";

/// Non-image metadata that is skipped without a log line.
pub const SILENT_SKIP_EXTENSIONS: &[&str] = &["json", "txt", "md"];

pub const BANNER_WIDTH: usize = 60;
pub const BANNER_TITLE: &str = "Image Converter (JPG/PNG -> WebP)";

pub const PROGRESS_BAR_TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✓";
pub const FAILURE_PREFIX: &str = "✗";
pub const SKIP_PREFIX: &str = "-";
