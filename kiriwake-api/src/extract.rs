//! Text extraction collaborator
//!
//! Converting binary formats (PDF, DOCX, ...) to text is delegated to an
//! external service behind [`TextExtractor`]. The built-in
//! [`PlainTextExtractor`] only decodes text files.

use crate::error::{ApiError, Result};
use encoding_rs::{Encoding, UTF_8};
use std::collections::BTreeMap;

/// Extracted text plus whatever the extractor reports about it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Plain text content
    pub text: String,
    /// Extractor-specific details
    pub metadata: BTreeMap<String, String>,
}

/// Converts document bytes into plain text
pub trait TextExtractor: Send + Sync {
    /// Extract text from `bytes`
    fn extract(&self, bytes: &[u8]) -> Result<Extraction>;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;
}

/// Decodes text files: BOM sniffing, then strict UTF-8, then an optional
/// fallback encoding
#[derive(Debug, Clone, Copy)]
pub struct PlainTextExtractor {
    fallback: Option<&'static Encoding>,
}

impl PlainTextExtractor {
    /// Use the encoding named by `label` when the bytes are not valid UTF-8
    pub fn with_fallback(label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| ApiError::Config(format!("unknown encoding: {label}")))?;
        Ok(Self {
            fallback: Some(encoding),
        })
    }

    /// Reject bytes that are not valid UTF-8
    pub fn strict() -> Self {
        Self { fallback: None }
    }

    fn decode<'a>(&self, bytes: &'a [u8]) -> Result<(std::borrow::Cow<'a, str>, &'static Encoding, bool)> {
        if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
            let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
            return Ok((text, encoding, had_errors));
        }
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok((text.into(), UTF_8, false)),
            Err(err) => {
                let encoding = self.fallback.ok_or(ApiError::Decode {
                    position: err.valid_up_to(),
                })?;
                let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
                Ok((text, encoding, had_errors))
            }
        }
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self {
            fallback: Some(encoding_rs::WINDOWS_1252),
        }
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<Extraction> {
        let (text, encoding, had_errors) = self.decode(bytes)?;
        let metadata = BTreeMap::from([
            ("encoding".to_string(), encoding.name().to_string()),
            ("bytes".to_string(), bytes.len().to_string()),
            ("had_errors".to_string(), had_errors.to_string()),
        ]);
        Ok(Extraction {
            text: text.into_owned(),
            metadata,
        })
    }

    fn name(&self) -> &'static str {
        "plain-text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        let out = PlainTextExtractor::default().extract("héllo".as_bytes()).unwrap();
        assert_eq!(out.text, "héllo");
        assert_eq!(out.metadata["encoding"], "UTF-8");
        assert_eq!(out.metadata["had_errors"], "false");
    }

    #[test]
    fn test_bom_is_stripped() {
        let out = PlainTextExtractor::default()
            .extract(b"\xEF\xBB\xBFtext")
            .unwrap();
        assert_eq!(out.text, "text");

        let utf16 = [0xFF, 0xFE, b'h', 0, b'i', 0];
        let out = PlainTextExtractor::strict().extract(&utf16).unwrap();
        assert_eq!(out.text, "hi");
        assert_eq!(out.metadata["encoding"], "UTF-16LE");
    }

    #[test]
    fn test_fallback_decodes_legacy_bytes() {
        // "café" in windows-1252
        let out = PlainTextExtractor::default().extract(b"caf\xE9").unwrap();
        assert_eq!(out.text, "café");
        assert_eq!(out.metadata["encoding"], "windows-1252");
    }

    #[test]
    fn test_strict_rejects_invalid_utf8() {
        let err = PlainTextExtractor::strict().extract(b"ok\xFF").unwrap_err();
        assert!(matches!(err, ApiError::Decode { position: 2 }));
    }

    #[test]
    fn test_unknown_fallback_label() {
        assert!(matches!(
            PlainTextExtractor::with_fallback("klingon"),
            Err(ApiError::Config(_))
        ));
        assert!(PlainTextExtractor::with_fallback("latin1").is_ok());
    }
}
