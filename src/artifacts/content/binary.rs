use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected.
pub const SNIFF_LEN: u64 = 1024;

/// Share of non-ASCII bytes tolerated in a prefix that is not valid UTF-8.
const MAX_HIGH_BYTE_RATIO: f64 = 0.3;

const BELL: u8 = 0x07;
const BACKSPACE: u8 = 0x08;
const TAB: u8 = b'\t';
const NEWLINE: u8 = b'\n';
const FORM_FEED: u8 = 0x0c;
const CARRIAGE_RETURN: u8 = b'\r';
const ESCAPE: u8 = 0x1b;
const DELETE: u8 = 0x7f;

/// Whether the file at `path` should be kept out of the comparison.
///
/// Unreadable files count as binary.
pub fn is_binary(path: &Path) -> bool {
    let mut prefix = Vec::with_capacity(SNIFF_LEN as usize);
    let read = std::fs::File::open(path)
        .and_then(|file| file.take(SNIFF_LEN).read_to_end(&mut prefix));

    match read {
        Ok(_) => is_binary_prefix(&prefix),
        Err(err) => {
            tracing::warn!("Cannot read {}: {}", path.display(), err);
            true
        }
    }
}

/// Classifies the leading bytes of a file.
///
/// Binary when a NUL byte shows up, when a control character outside the
/// usual text whitespace is present, or when the non-ASCII bytes neither form
/// valid UTF-8 nor stay a small minority of the prefix.
pub fn is_binary_prefix(prefix: &[u8]) -> bool {
    if prefix.contains(&0) {
        return true;
    }

    if prefix.iter().any(|&byte| !is_text_byte(byte)) {
        return true;
    }

    let high_bytes = prefix.iter().filter(|byte| !byte.is_ascii()).count();
    if high_bytes == 0 || is_utf8_prefix(prefix) {
        return false;
    }

    high_bytes as f64 / prefix.len() as f64 > MAX_HIGH_BYTE_RATIO
}

fn is_text_byte(byte: u8) -> bool {
    matches!(
        byte,
        BELL | BACKSPACE | TAB | NEWLINE | FORM_FEED | CARRIAGE_RETURN | ESCAPE
    ) || (0x20..DELETE).contains(&byte)
        || byte >= 0x80
}

// The cut at SNIFF_LEN may split a multi-byte character; an incomplete tail is fine.
fn is_utf8_prefix(prefix: &[u8]) -> bool {
    match std::str::from_utf8(prefix) {
        Ok(_) => true,
        Err(err) => err.error_len().is_none(),
    }
}
