// Chunk: docs/chunks/go_to_line - Line-ending aware go-to-line scan

//! Line-ending styles and detection.

/// The terminator style used by a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// Windows `\r\n`
    Crlf,
    /// Unix `\n`
    Lf,
    /// Classic Mac `\r`
    Cr,
}

impl LineEnding {
    /// The style new documents get on this platform.
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            LineEnding::Crlf
        } else {
            LineEnding::Lf
        }
    }

    /// Detects the style from the first terminator in `text`.
    ///
    /// Returns `None` if the text contains no `\r` or `\n` at all.
    pub fn detect(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        let idx = bytes.iter().position(|&b| b == b'\r' || b == b'\n')?;
        match bytes[idx] {
            b'\n' => Some(LineEnding::Lf),
            _ if bytes.get(idx + 1) == Some(&b'\n') => Some(LineEnding::Crlf),
            _ => Some(LineEnding::Cr),
        }
    }

    /// The terminator as it appears in text.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
            LineEnding::Cr => "\r",
        }
    }

    /// Short name for the status bar.
    pub fn name(self) -> &'static str {
        match self {
            LineEnding::Crlf => "CRLF",
            LineEnding::Lf => "LF",
            LineEnding::Cr => "CR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_each_style() {
        assert_eq!(LineEnding::detect("a\r\nb"), Some(LineEnding::Crlf));
        assert_eq!(LineEnding::detect("a\nb"), Some(LineEnding::Lf));
        assert_eq!(LineEnding::detect("a\rb"), Some(LineEnding::Cr));
    }

    #[test]
    fn test_detect_uses_first_terminator() {
        assert_eq!(LineEnding::detect("a\nb\r\nc"), Some(LineEnding::Lf));
        assert_eq!(LineEnding::detect("a\r\nb\nc"), Some(LineEnding::Crlf));
    }

    #[test]
    fn test_detect_trailing_cr_is_cr() {
        assert_eq!(LineEnding::detect("abc\r"), Some(LineEnding::Cr));
    }

    #[test]
    fn test_detect_none_without_terminator() {
        assert_eq!(LineEnding::detect(""), None);
        assert_eq!(LineEnding::detect("plain"), None);
    }

    #[test]
    fn test_as_str_and_name() {
        assert_eq!(LineEnding::Crlf.as_str(), "\r\n");
        assert_eq!(LineEnding::Cr.name(), "CR");
    }
}
