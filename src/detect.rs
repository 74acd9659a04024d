//! Input validation for PDF files.
//!
//! The rendering backend reports unreadable inputs with opaque error codes,
//! so both inputs are checked for a PDF header before rasterization starts.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"
/// Readers accept the header anywhere in the first 1024 bytes.
const HEADER_WINDOW: u64 = 1024;

/// Check that `path` exists and carries a PDF header.
///
/// Returns the header version (e.g. `"1.7"`).
///
/// # Errors
/// * `Error::Io` if the file cannot be opened
/// * `Error::UnknownFormat` if no `%PDF-x.y` appears in the first 1024 bytes
/// * `Error::UnsupportedVersion` if the version is malformed
pub fn ensure_pdf<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut header = Vec::with_capacity(HEADER_WINDOW as usize);
    File::open(path.as_ref())?
        .take(HEADER_WINDOW)
        .read_to_end(&mut header)?;
    pdf_version(&header)
}

/// Extract the PDF version from the first bytes of a file.
///
/// Leading junk (a byte order mark, blank lines) before the header is
/// skipped.
pub fn pdf_version(data: &[u8]) -> Result<String> {
    let window = &data[..data.len().min(HEADER_WINDOW as usize)];
    let start = window
        .windows(PDF_MAGIC.len())
        .position(|w| w == PDF_MAGIC)
        .ok_or(Error::UnknownFormat)?;
    let rest = &data[start + PDF_MAGIC.len()..];
    if rest.len() < VERSION_LEN {
        return Err(Error::UnknownFormat);
    }

    let version = String::from_utf8_lossy(&rest[..VERSION_LEN]).to_string();
    match version.as_bytes() {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => Ok(version),
        _ => Err(Error::UnsupportedVersion(version)),
    }
}

/// Check if bytes carry a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    pdf_version(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_pdf_version() {
        assert_eq!(pdf_version(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3").unwrap(), "1.7");
        assert_eq!(pdf_version(b"%PDF-2.0\n").unwrap(), "2.0");
    }

    #[test]
    fn test_header_after_leading_bytes() {
        assert_eq!(pdf_version(b"\xef\xbb\xbf%PDF-1.4\n").unwrap(), "1.4");
        assert_eq!(pdf_version(b"\r\n%PDF-1.7\n").unwrap(), "1.7");

        let mut padded = vec![b' '; 1000];
        padded.extend_from_slice(b"%PDF-1.3\n");
        assert_eq!(pdf_version(&padded).unwrap(), "1.3");
    }

    #[test]
    fn test_header_beyond_window_is_rejected() {
        let mut padded = vec![b' '; 1024];
        padded.extend_from_slice(b"%PDF-1.3\n");
        assert!(matches!(pdf_version(&padded), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_rejects_other_formats() {
        assert!(matches!(
            pdf_version(b"\x89PNG\r\n\x1a\n"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(pdf_version(b"%PDF"), Err(Error::UnknownFormat)));
        assert!(matches!(pdf_version(b""), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_malformed_version() {
        assert!(matches!(
            pdf_version(b"%PDF-x.y\n"),
            Err(Error::UnsupportedVersion(v)) if v == "x.y"
        ));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\n"));
        assert!(!is_pdf_bytes(b"Not a PDF"));
    }

    #[test]
    fn test_ensure_pdf_on_disk() {
        let dir = tempfile::tempdir().unwrap();

        let pdf = dir.path().join("a.pdf");
        std::fs::File::create(&pdf)
            .unwrap()
            .write_all(b"%PDF-1.5\n%%EOF\n")
            .unwrap();
        assert_eq!(ensure_pdf(&pdf).unwrap(), "1.5");

        let bom = dir.path().join("bom.pdf");
        std::fs::write(&bom, b"\xef\xbb\xbf%PDF-1.6\n%%EOF\n").unwrap();
        assert_eq!(ensure_pdf(&bom).unwrap(), "1.6");

        let short = dir.path().join("short.pdf");
        std::fs::write(&short, b"%P").unwrap();
        assert!(matches!(ensure_pdf(&short), Err(Error::UnknownFormat)));

        let missing = dir.path().join("missing.pdf");
        assert!(matches!(ensure_pdf(&missing), Err(Error::Io(_))));
    }
}
