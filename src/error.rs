/// A malformed encoded string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The string ended before a variable-length value was complete.
    Truncated { offset: usize },
    /// A byte outside the encoder's output range (`?` through `~`).
    InvalidCharacter { offset: usize, byte: u8 },
    /// A value needs more 5-bit chunks than fit in 64 bits.
    Overflow { offset: usize },
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::Truncated { offset } => {
                write!(f, "encoded value truncated at byte {}", offset)
            }
            FormatError::InvalidCharacter { offset, byte } => {
                write!(f, "invalid byte 0x{:02x} at offset {}", byte, offset)
            }
            FormatError::Overflow { offset } => {
                write!(f, "encoded value starting at byte {} overflows", offset)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Error type for polyline encoding and decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum PolylineError {
    /// An encoded string could not be decoded.
    Format(FormatError),
    /// The encoding configuration is unusable.
    Configuration(String),
}

impl std::fmt::Display for PolylineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolylineError::Format(err) => write!(f, "Format error: {}", err),
            PolylineError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for PolylineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PolylineError::Format(err) => Some(err),
            PolylineError::Configuration(_) => None,
        }
    }
}

impl From<FormatError> for PolylineError {
    fn from(err: FormatError) -> Self {
        PolylineError::Format(err)
    }
}
