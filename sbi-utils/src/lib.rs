//! Shared utility functions for SBI crates.

/// Reading and decoding raw source files
pub mod text {
    use crate::error::DecodeError;
    use encoding_rs::Encoding;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use std::path::Path;

    /// Resolve a WHATWG encoding label ("windows-1250", "cp1250", "utf-8", ...)
    pub fn encoding_for_label(label: &str) -> Result<&'static Encoding, DecodeError> {
        Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| DecodeError::UnknownEncoding(label.to_string()))
    }

    /// Decode raw bytes with the given encoding label.
    ///
    /// A leading byte order mark overrides the label. Malformed sequences are
    /// an error, never replaced.
    pub fn decode(bytes: &[u8], label: &str) -> Result<String, DecodeError> {
        let encoding = encoding_for_label(label)?;
        let (text, used, had_errors) = encoding.decode(bytes);
        if had_errors {
            return Err(DecodeError::Malformed(used.name().to_string()));
        }
        Ok(text.into_owned())
    }

    /// Read every byte from `reader`, gunzipping on the way if `gzipped`.
    pub fn read_all<R: Read>(mut reader: R, gzipped: bool) -> std::io::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        if gzipped {
            GzDecoder::new(reader).read_to_end(&mut bytes)?;
        } else {
            reader.read_to_end(&mut bytes)?;
        }
        Ok(bytes)
    }

    /// Read a source file from disk. Files ending in `.gz` are decompressed.
    pub fn read_path(path: &Path) -> std::io::Result<Vec<u8>> {
        let gzipped = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gz"))
            .unwrap_or(false);
        let file = std::fs::File::open(path)?;
        read_all(std::io::BufReader::new(file), gzipped)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        #[test]
        fn test_decode_windows_1250() {
            // "Veľmi zlý" in cp1250: ľ = 0xBE, ý = 0xFD
            let bytes = b"Ve\xBEmi zl\xFD";
            let text = decode(bytes, "cp1250").unwrap();
            assert_eq!(text, "Veľmi zlý");
        }

        #[test]
        fn test_decode_utf8() {
            let text = decode("diaľnica".as_bytes(), "utf-8").unwrap();
            assert_eq!(text, "diaľnica");
        }

        #[test]
        fn test_decode_rejects_malformed_utf8() {
            let err = decode(b"dia\xBEnica", "utf-8").unwrap_err();
            assert!(matches!(err, DecodeError::Malformed(_)));
        }

        #[test]
        fn test_unknown_encoding_label() {
            let err = encoding_for_label("klingon-8").unwrap_err();
            assert!(matches!(err, DecodeError::UnknownEncoding(_)));
        }

        #[test]
        fn test_read_all_gzipped() {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(b"a;b\n1;2\n").unwrap();
            let compressed = encoder.finish().unwrap();

            let bytes = read_all(compressed.as_slice(), true).unwrap();
            assert_eq!(bytes, b"a;b\n1;2\n");
        }

        #[test]
        fn test_read_all_plain() {
            let bytes = read_all(&b"a;b\n"[..], false).unwrap();
            assert_eq!(bytes, b"a;b\n");
        }
    }
}

/// Lenient number parsing for tabular exports
pub mod numbers {
    fn is_null_marker(s: &str) -> bool {
        matches!(
            s.to_lowercase().as_str(),
            "" | "null" | "n/a" | "na" | "nan" | "-"
        )
    }

    /// Parse a float, accepting a decimal comma ("48,1234").
    ///
    /// Returns `None` for empty cells and common null markers.
    pub fn parse_float(s: &str) -> Option<f64> {
        let trimmed = s.trim();
        if is_null_marker(trimmed) {
            return None;
        }
        trimmed.replace(',', ".").parse::<f64>().ok()
    }

    /// Parse an integer. Whole-valued floats ("3.0", "3,0") are accepted
    /// because spreadsheet exports write integer columns with nulls that way.
    pub fn parse_int(s: &str) -> Option<i32> {
        let trimmed = s.trim();
        if is_null_marker(trimmed) {
            return None;
        }
        if let Ok(v) = trimmed.parse::<i32>() {
            return Some(v);
        }
        match parse_float(trimmed) {
            Some(v) if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 => {
                Some(v as i32)
            }
            _ => None,
        }
    }

    /// True when a cell carries no value at all.
    pub fn is_blank(s: &str) -> bool {
        is_null_marker(s.trim())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_float() {
            assert_eq!(parse_float("48.8"), Some(48.8));
            assert_eq!(parse_float(" 19,7 "), Some(19.7));
            assert_eq!(parse_float(""), None);
            assert_eq!(parse_float("NaN"), None);
            assert_eq!(parse_float("abc"), None);
        }

        #[test]
        fn test_parse_int() {
            assert_eq!(parse_int("1974"), Some(1974));
            assert_eq!(parse_int("3.0"), Some(3));
            assert_eq!(parse_int("3,0"), Some(3));
            assert_eq!(parse_int("3.5"), None);
            assert_eq!(parse_int("null"), None);
            assert_eq!(parse_int("  "), None);
        }

        #[test]
        fn test_is_blank() {
            assert!(is_blank(""));
            assert!(is_blank(" N/A "));
            assert!(!is_blank("0"));
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug, PartialEq)]
    pub enum DecodeError {
        /// The configured label names no known encoding
        UnknownEncoding(String),
        /// The bytes are not valid in the named encoding
        Malformed(String),
    }

    impl fmt::Display for DecodeError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                DecodeError::UnknownEncoding(label) => {
                    write!(f, "Unknown text encoding: {}", label)
                }
                DecodeError::Malformed(name) => {
                    write!(f, "Source is not valid {} text", name)
                }
            }
        }
    }

    impl std::error::Error for DecodeError {}
}
