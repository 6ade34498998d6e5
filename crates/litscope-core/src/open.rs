//! Tolerant text file opening
//!
//! Exports saved by spreadsheets or older database frontends arrive with a
//! BOM, in UTF-16, or in a Windows code page, and with mixed line endings.
//! [`RobustOpener`] hides all of that behind a plain UTF-8 reader.

use std::borrow::Cow;
use std::io::{self, BufRead, Cursor};
use std::path::Path;

use encoding_rs::{Encoding, WINDOWS_1252};

/// Opens a path as a stream of UTF-8 text lines.
pub trait TextOpener {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>>;
}

/// Default opener: BOM sniffing, UTF-8 with windows-1252 fallback,
/// newline normalization.
///
/// The file is read fully and closed before the reader is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct RobustOpener;

impl TextOpener for RobustOpener {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>> {
        let bytes = std::fs::read(path)?;
        log::debug!("{}: read {} bytes", path.display(), bytes.len());
        Ok(Box::new(Cursor::new(decode_text(&bytes).into_bytes())))
    }
}

/// Decode raw file bytes to text with `\n` line endings.
///
/// Never fails: undecodable sequences become U+FFFD.
pub fn decode_text(bytes: &[u8]) -> String {
    let text: Cow<'_, str> = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => {
            let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
            if had_errors {
                log::debug!("replaced malformed {} sequences", encoding.name());
            }
            text
        }
        None => match std::str::from_utf8(bytes) {
            Ok(text) => Cow::Borrowed(text),
            Err(_) => {
                log::debug!("input is not UTF-8, decoding as windows-1252");
                WINDOWS_1252.decode_without_bom_handling(bytes).0
            }
        },
    };
    normalize_newlines(&text)
}

fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
