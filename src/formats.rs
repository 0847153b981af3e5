/// File classification by extension
///
/// Every regular file in the source directory lands in exactly one [`FileKind`],
/// decided only by its lower-cased extension.
use crate::constants::{
    RASTER_EXTENSIONS, SILENT_SKIP_EXTENSIONS, TARGET_EXTENSION, VECTOR_EXTENSION,
};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// JPEG or PNG, re-encoded to WebP
    Raster,
    /// SVG, copied byte for byte
    Vector,
    /// Anything else. `silent` is set for metadata files that are not worth a log line.
    Other { silent: bool },
}

impl FileKind {
    /// Classify a lower-cased extension given without the leading dot.
    pub fn from_extension(extension: &str) -> Self {
        if RASTER_EXTENSIONS.contains(&extension) {
            FileKind::Raster
        } else if extension == VECTOR_EXTENSION {
            FileKind::Vector
        } else {
            FileKind::Other {
                silent: SILENT_SKIP_EXTENSIONS.contains(&extension),
            }
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileKind::Raster => "raster",
            FileKind::Vector => "vector",
            FileKind::Other { .. } => "other",
        };
        write!(f, "{}", name)
    }
}

/// Lower-cased extension of `path`, or an empty string when it has none.
///
/// Dotfiles such as `.png` have no extension and therefore classify as other.
pub fn normalized_extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default()
}

pub fn classify(path: &Path) -> FileKind {
    FileKind::from_extension(&normalized_extension(path))
}

/// Destination file name for a converted raster: same stem, WebP extension.
pub fn webp_file_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}.{}", stem, TARGET_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_classify_raster() {
        assert_eq!(classify(Path::new("a.jpg")), FileKind::Raster);
        assert_eq!(classify(Path::new("a.JPG")), FileKind::Raster);
        assert_eq!(classify(Path::new("a.Jpeg")), FileKind::Raster);
        assert_eq!(classify(Path::new("b.png")), FileKind::Raster);
        assert_eq!(classify(Path::new("b.PNG")), FileKind::Raster);
    }

    #[test]
    fn test_classify_vector() {
        assert_eq!(classify(Path::new("logo.svg")), FileKind::Vector);
        assert_eq!(classify(Path::new("logo.SVG")), FileKind::Vector);
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(
            classify(Path::new("notes.txt")),
            FileKind::Other { silent: true }
        );
        assert_eq!(
            classify(Path::new("data.JSON")),
            FileKind::Other { silent: true }
        );
        assert_eq!(
            classify(Path::new("README.md")),
            FileKind::Other { silent: true }
        );
        assert_eq!(
            classify(Path::new("anim.gif")),
            FileKind::Other { silent: false }
        );
        assert_eq!(
            classify(Path::new("already.webp")),
            FileKind::Other { silent: false }
        );
        assert_eq!(
            classify(Path::new("Makefile")),
            FileKind::Other { silent: false }
        );
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        assert_eq!(normalized_extension(Path::new(".png")), "");
        assert_eq!(
            classify(Path::new(".png")),
            FileKind::Other { silent: false }
        );
    }

    #[test]
    fn test_webp_file_name() {
        assert_eq!(webp_file_name(Path::new("a.JPG")), "a.webp");
        assert_eq!(webp_file_name(Path::new("/src/hero.banner.png")), "hero.banner.webp");
    }

    #[test]
    fn test_display() {
        assert_eq!(FileKind::Raster.to_string(), "raster");
        assert_eq!(FileKind::Other { silent: true }.to_string(), "other");
    }
}
