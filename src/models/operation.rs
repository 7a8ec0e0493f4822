//! Operation identity: what to do (compress/decompress) to which media category.
//!
//! The server exposes six fixed endpoints, one per combination. The mapping
//! lives here so no other module builds endpoint paths by hand.

use std::fmt;

/// Direction of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Compress,
    Decompress,
}

/// Media category of the submitted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MediaKind {
    Text,
    Image,
    Audio,
}

/// One compress or decompress action against one media category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub kind: OperationKind,
    pub media: MediaKind,
}

impl Operation {
    pub fn new(kind: OperationKind, media: MediaKind) -> Self {
        Self { kind, media }
    }

    /// Path of the fixed server endpoint handling this operation.
    pub fn endpoint(&self) -> &'static str {
        match (self.kind, self.media) {
            (OperationKind::Compress, MediaKind::Text) => "/compress_text",
            (OperationKind::Decompress, MediaKind::Text) => "/decompress_text",
            (OperationKind::Compress, MediaKind::Image) => "/compress_image",
            (OperationKind::Decompress, MediaKind::Image) => "/decompress_image",
            (OperationKind::Compress, MediaKind::Audio) => "/compress_audio",
            (OperationKind::Decompress, MediaKind::Audio) => "/decompress_audio",
        }
    }

    /// File extensions the server accepts as input for this operation.
    ///
    /// Advisory on the client side; the server remains the authority and
    /// rejects anything else with its own message.
    pub fn expected_extensions(&self) -> &'static [&'static str] {
        match (self.kind, self.media) {
            (OperationKind::Compress, MediaKind::Text) => &["txt"],
            (OperationKind::Decompress, MediaKind::Text) => &["huff"],
            (OperationKind::Compress, MediaKind::Image) => &["png", "bmp"],
            (OperationKind::Decompress, MediaKind::Image) => &["rle"],
            (OperationKind::Compress, MediaKind::Audio) => &["wav"],
            (OperationKind::Decompress, MediaKind::Audio) => &["huffaudio"],
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Compress => write!(f, "compress"),
            OperationKind::Decompress => write!(f, "decompress"),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Text => write!(f, "text"),
            MediaKind::Image => write!(f, "image"),
            MediaKind::Audio => write!(f, "audio"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.media)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_table_covers_all_six_operations() {
        let cases = [
            (OperationKind::Compress, MediaKind::Text, "/compress_text"),
            (OperationKind::Decompress, MediaKind::Text, "/decompress_text"),
            (OperationKind::Compress, MediaKind::Image, "/compress_image"),
            (OperationKind::Decompress, MediaKind::Image, "/decompress_image"),
            (OperationKind::Compress, MediaKind::Audio, "/compress_audio"),
            (OperationKind::Decompress, MediaKind::Audio, "/decompress_audio"),
        ];
        for (kind, media, expected) in cases {
            assert_eq!(Operation::new(kind, media).endpoint(), expected);
        }
    }

    #[test]
    fn test_expected_extensions_compress_vs_decompress() {
        let compress = Operation::new(OperationKind::Compress, MediaKind::Image);
        assert_eq!(compress.expected_extensions(), &["png", "bmp"]);
        let decompress = Operation::new(OperationKind::Decompress, MediaKind::Image);
        assert_eq!(decompress.expected_extensions(), &["rle"]);
    }

    #[test]
    fn test_display_reads_as_kind_then_media() {
        let op = Operation::new(OperationKind::Decompress, MediaKind::Audio);
        assert_eq!(op.to_string(), "decompress audio");
    }
}
