use core::fmt;

/// Every way a canonicalization call can fail.
///
/// Nothing is retried or swallowed: the first failure aborts the call and the
/// caller receives the variant describing it. A failed call never returns
/// partial output.
#[derive(Debug)]
pub enum Error {
    /// The source text is not valid RFC 8259 JSON.
    ///
    /// `offset` is the byte position in the input where parsing stopped.
    Parse {
        offset: usize,
        reason: &'static str,
    },
    /// A number cannot be represented as a finite IEEE-754 binary64.
    ///
    /// Raised for NaN and ±Infinity, and for numeric tokens whose magnitude
    /// exceeds the binary64 finite range.
    UnrepresentableNumber,
    /// A string under construction contained an unpaired surrogate.
    ///
    /// Values built from Rust strings are valid Unicode by construction, so
    /// this is only reachable for value models assembled from UTF-16 data
    /// outside the parser.
    InvalidString,
    /// An object contains the same key more than once.
    ///
    /// Returned by the parser under [`DuplicateKeys::Reject`] and by the
    /// encoder when a hand-built object carries equal keys.
    ///
    /// [`DuplicateKeys::Reject`]: crate::DuplicateKeys::Reject
    DuplicateKey { key: Box<str> },
    /// Serialization through `serde` failed before canonicalization began.
    Serialize(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse { offset, reason } => {
                write!(f, "JSON parse error at byte {offset}: {reason}")
            }
            Error::UnrepresentableNumber => {
                f.write_str("number is not representable as a finite binary64")
            }
            Error::InvalidString => f.write_str("string contains an unpaired surrogate"),
            Error::DuplicateKey { key } => write!(f, "duplicate object key: {key:?}"),
            Error::Serialize(error) => write!(f, "serialization failed: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Serialize(error) => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Serialize(error)
    }
}
