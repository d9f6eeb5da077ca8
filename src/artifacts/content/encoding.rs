use crate::errors::CompareError;
use anyhow::Context;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::path::Path;

/// Best-guess text encoding for a file's content.
///
/// A byte order mark decides outright; otherwise the charset detector sees the
/// whole buffer.
pub fn resolve_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Decodes `bytes` strictly: malformed input is an error rather than a
/// replacement character.
pub fn decode(path: &Path, bytes: &[u8], encoding: &'static Encoding) -> Result<String, CompareError> {
    let bom_len = Encoding::for_bom(bytes)
        .filter(|(bom_encoding, _)| *bom_encoding == encoding)
        .map_or(0, |(_, len)| len);

    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .map(|text| text.into_owned())
        .ok_or_else(|| CompareError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        })
}

/// Reads and decodes a file into its lines, line terminators stripped.
pub fn read_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    let encoding = resolve_encoding(&bytes);
    tracing::debug!("Decoding {} as {}", path.display(), encoding.name());

    let text = decode(path, &bytes, encoding)?;
    Ok(text.lines().map(str::to_string).collect())
}
