use std::fmt;

/// Result type for cybercell-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A category label that names none of the known categories
    UnknownCategory(String),

    /// An addressing mode other than `path` or `fragment`
    UnknownAddressingMode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCategory(label) => write!(f, "Unknown category: {}", label),
            Error::UnknownAddressingMode(mode) => write!(f, "Unknown addressing mode: {}", mode),
        }
    }
}

impl std::error::Error for Error {}
