// Failure kinds of a conversion.
//
// Only two things can go wrong: the input cannot be read, or the output cannot
// be written. Both carry the offending path and the underlying io::Error.
// DecodeError belongs to the inverse parser in `encode`.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConvertError {
    /// Input could not be opened or read. No output was touched.
    InputRead { path: PathBuf, source: io::Error },
    /// Output could not be opened or written. The file may exist, empty or partial.
    OutputWrite { path: PathBuf, source: io::Error },
}

impl ConvertError {
    /// Path named in the diagnostic.
    pub fn path(&self) -> &Path {
        match self {
            ConvertError::InputRead { path, .. } | ConvertError::OutputWrite { path, .. } => {
                path.as_path()
            }
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, ConvertError::InputRead { .. })
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error opening file {}", self.path().display())
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::InputRead { source, .. } | ConvertError::OutputWrite { source, .. } => {
                Some(source)
            }
        }
    }
}

/// Error from parsing an emitted declaration back into bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Line does not have the `constexpr char <id>[] = { ... };` shape
    Malformed,
    /// Token at `index` is not of the form `'\xHH'`
    BadToken { index: usize, token: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Malformed => write!(f, "not a char array declaration"),
            DecodeError::BadToken { index, token } => {
                write!(f, "token {} is not a hex escape: {:?}", index, token)
            }
        }
    }
}

impl std::error::Error for DecodeError {}
