use alloc::string::String;

/// Errors from PBM/PGM decoding, encoding and pixel mutation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PnmError {
    #[error("unrecognized format magic: {0:?}")]
    UnrecognizedFormat(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("expected a {expected} image, found {found}")]
    WrongImageKind {
        expected: &'static str,
        found: &'static str,
    },

    #[error("pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("sample {value} exceeds max value {max_value}")]
    SampleOutOfRange { value: u8, max_value: u8 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: usize, height: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`PnmError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not a well-formed PBM/PGM file.
    Format,
    /// A pixel write was outside the image or outside the sample range.
    Index,
    /// A configured [`crate::Limits`] bound was hit.
    Limit,
    /// The underlying reader or writer failed.
    Io,
}

impl PnmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnrecognizedFormat(_)
            | Self::InvalidHeader(_)
            | Self::InvalidData(_)
            | Self::UnexpectedEof
            | Self::WrongImageKind { .. } => ErrorKind::Format,
            Self::OutOfBounds { .. } | Self::SampleOutOfRange { .. } => ErrorKind::Index,
            Self::DimensionsTooLarge { .. } | Self::LimitExceeded(_) => ErrorKind::Limit,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::Format`.
    pub fn is_format_error(&self) -> bool {
        self.kind() == ErrorKind::Format
    }
}
