use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

/// Identifies an accepted image format from its leading magic bytes.
///
/// Only webp, png and jpeg are accepted; file extensions are ignored.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

/// Encodes accepted image bytes as an embeddable `data:` URL.
pub fn encode(bytes: &[u8]) -> Result<String> {
    let Some(mime) = sniff_mime(bytes) else {
        bail!("Unsupported image type, use webp, png or jpeg");
    };
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Reads an image file and encodes it as a `data:` URL.
pub async fn encode_file(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    encode(&bytes)
}
