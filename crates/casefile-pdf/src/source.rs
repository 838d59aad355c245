//! Text source adapter: raw PDF bytes in, flat text out.
//!
//! `pdf_extract` panics on some malformed input rather than returning an
//! error, so every call runs under [`std::panic::catch_unwind`].

use std::panic::{self, AssertUnwindSafe};

use crate::SourceError;

/// Anything that can flatten a document into plain text.
pub trait TextSource {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, SourceError>;
}

/// [`TextSource`] backed by `pdf_extract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextSource;

impl TextSource for PdfTextSource {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, SourceError> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }));
        match result {
            Ok(Ok(text)) => {
                if text.trim().is_empty() {
                    tracing::warn!("pdf has no extractable text (scanned image?)");
                }
                Ok(text)
            }
            Ok(Err(e)) => Err(SourceError::Parse(e.to_string())),
            Err(_) => Err(SourceError::Panicked),
        }
    }
}

impl<F> TextSource for F
where
    F: Fn(&[u8]) -> Result<String, SourceError>,
{
    fn extract_text(&self, bytes: &[u8]) -> Result<String, SourceError> {
        self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_an_error() {
        let result = PdfTextSource.extract_text(b"this is not a pdf");
        assert!(result.is_err());
    }

    #[test]
    fn closures_are_text_sources() {
        let source =
            |bytes: &[u8]| Ok::<_, SourceError>(String::from_utf8_lossy(bytes).into_owned());
        assert_eq!(source.extract_text("소장".as_bytes()).unwrap(), "소장");
    }
}
