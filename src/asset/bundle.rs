use std::io::{Read as _, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use xz2::read::XzDecoder;
use xz2::stream::{CONCATENATED, Stream};
use xz2::write::XzEncoder;

use crate::asset::base85;
use crate::foundation::error::{SvdVizError, SvdVizResult};
use crate::foundation::fs::ensure_parent_dir;

/// Where the encoded animation is read from by default.
pub const DEFAULT_DATA_PATH: &str = "assets/svd_animation.b85";
/// Where the decoded GIF is written by default.
pub const DEFAULT_OUTPUT_PATH: &str = "assets/svd_animation.gif";
/// Default column width of the encoded text.
pub const DEFAULT_LINE_WIDTH: usize = 76;

// liblzma preset used when packing.
const XZ_PRESET: u32 = 6;

/// Compress `bytes` into a single xz stream with a CRC64 check.
pub fn compress(bytes: &[u8]) -> SvdVizResult<Vec<u8>> {
    let mut enc = XzEncoder::new(Vec::with_capacity(bytes.len() / 2), XZ_PRESET);
    enc.write_all(bytes)
        .map_err(|e| SvdVizError::encode(format!("xz compression failed: {e}")))?;
    enc.finish()
        .map_err(|e| SvdVizError::encode(format!("xz compression failed: {e}")))
}

/// Decompress xz or legacy `.lzma` data; concatenated xz streams are joined.
pub fn decompress(bytes: &[u8]) -> SvdVizResult<Vec<u8>> {
    let stream = Stream::new_auto_decoder(u64::MAX, CONCATENATED)
        .map_err(|e| SvdVizError::decode(format!("lzma decoder init failed: {e}")))?;
    let mut out = Vec::new();
    XzDecoder::new_stream(bytes, stream)
        .read_to_end(&mut out)
        .map_err(|e| SvdVizError::decode(format!("corrupt lzma data: {e}")))?;
    Ok(out)
}

/// Compressed bytes held by an encoded text file, before decompression.
pub fn decode_compressed(text: &str) -> SvdVizResult<Vec<u8>> {
    let packed: String = text.split_whitespace().collect();
    base85::decode(&packed)
}

/// Text form of `bytes`: xz, then base85, wrapped at `line_width` columns.
pub fn encode_animation_bytes(bytes: &[u8], line_width: usize) -> SvdVizResult<String> {
    let compressed = compress(bytes)?;
    Ok(base85::wrap(&base85::encode(&compressed), line_width))
}

/// GIF bytes stored in the encoded file at `data_path`.
pub fn decode_animation_bytes(data_path: &Path) -> SvdVizResult<Vec<u8>> {
    if !data_path.is_file() {
        return Err(SvdVizError::not_found(format!(
            "encoded animation data not found at {}; regenerate it with svd-animation",
            data_path.display()
        )));
    }
    let text = std::fs::read_to_string(data_path)
        .with_context(|| format!("read encoded animation '{}'", data_path.display()))?;
    let compressed = decode_compressed(&text)?;
    decompress(&compressed)
}

/// Decode `data_path` and write the GIF to `output_path`, creating parent directories.
#[tracing::instrument(fields(data = %data_path.display(), output = %output_path.display()))]
pub fn write_animation(output_path: &Path, data_path: &Path) -> SvdVizResult<PathBuf> {
    let bytes = decode_animation_bytes(data_path)?;
    ensure_parent_dir(output_path)?;
    std::fs::write(output_path, &bytes)
        .with_context(|| format!("write animation '{}'", output_path.display()))?;
    tracing::info!(bytes = bytes.len(), "animation decoded");
    Ok(output_path.to_path_buf())
}

/// Encode the GIF at `gif_path` into the text file at `data_path`.
#[tracing::instrument(fields(gif = %gif_path.display(), data = %data_path.display()))]
pub fn pack_animation(gif_path: &Path, data_path: &Path, line_width: usize) -> SvdVizResult<PathBuf> {
    if !gif_path.is_file() {
        return Err(SvdVizError::not_found(format!(
            "animation to pack not found at {}",
            gif_path.display()
        )));
    }
    let bytes = std::fs::read(gif_path)
        .with_context(|| format!("read animation '{}'", gif_path.display()))?;
    let text = encode_animation_bytes(&bytes, line_width)?;
    ensure_parent_dir(data_path)?;
    std::fs::write(data_path, text)
        .with_context(|| format!("write encoded animation '{}'", data_path.display()))?;
    tracing::info!(bytes = bytes.len(), "animation packed");
    Ok(data_path.to_path_buf())
}

#[cfg(test)]
#[path = "../../tests/unit/asset/bundle.rs"]
mod tests;
