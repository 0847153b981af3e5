use crate::error::{ConversionError, Result};
use crate::verbose;
use image::{DynamicImage, ImageReader};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

/// Decodes an image, sniffing the real format from its content.
///
/// The extension only decides *whether* a file is converted; a PNG saved with
/// a `.jpg` name still decodes.
pub fn load_image(input_path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()?;
    verbose!(
        "decoded {}x{} {:?}",
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

/// Narrows any decoded image to the two layouts the WebP encoder accepts:
/// RGBA8 when there is an alpha channel, RGB8 otherwise.
pub fn to_encodable(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img,
        other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

/// Lossy WebP encode at `quality`. The value goes to libwebp as-is, so an
/// out-of-range quality surfaces as an encoder error.
pub fn encode_webp(img: &DynamicImage, quality: i32) -> Result<Vec<u8>> {
    let encoder = webp::Encoder::from_image(img)
        .map_err(|e| ConversionError::WebPEncoding(e.to_string()))?;
    let encoded = encoder
        .encode_simple(false, quality as f32)
        .map_err(|e| ConversionError::WebPEncoding(format!("{:?}", e)))?;
    Ok(encoded.to_vec())
}

/// Writes `bytes` to `output_path` through a temp file in the same directory,
/// so a failed write never leaves a truncated output behind.
///
/// The temp file is created with the same mode a plain `fs::write` would get
/// (0o666 minus the umask) rather than tempfile's owner-only default.
pub fn write_atomically(output_path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = output_path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = temp_file_builder().tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(output_path)
        .map_err(|e| ConversionError::Io(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn temp_file_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_file_builder() -> Builder<'static, 'static> {
    Builder::new()
}

/// Converts one raster file to WebP and returns the size of the written file.
pub fn convert_to_webp(input_path: &Path, output_path: &Path, quality: i32) -> Result<u64> {
    let img = to_encodable(load_image(input_path)?);
    let bytes = encode_webp(&img, quality)?;
    write_atomically(output_path, &bytes)?;
    verbose!("wrote {}", output_path.display());

    Ok(fs::metadata(output_path)?.len())
}

/// Copies a vector file byte for byte, overwriting any previous output.
///
/// When source and destination are the same file nothing is written.
pub fn copy_vector(input_path: &Path, output_path: &Path) -> Result<u64> {
    if is_same_file(input_path, output_path) {
        return Ok(fs::metadata(input_path)?.len());
    }
    let copied = fs::copy(input_path, output_path)?;
    verbose!("wrote {}", output_path.display());
    Ok(copied)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
