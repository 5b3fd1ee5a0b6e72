//! # jsoncanon
//!
//! JSON Canonicalization Scheme (JCS, [RFC 8785]) for deterministic hashing
//! and signing: any two semantically equal JSON values map to the same byte
//! sequence, across languages and library versions.
//!
//! The canonical form has object members sorted by the UTF-16 code units of
//! their keys, numbers in the exact ECMAScript `Number.prototype.toString()`
//! shortest form, the minimal JSON escape set, and no whitespace.
//!
//! ```
//! let bytes = jsoncanon::canonicalize_text(br#"{"b": 2, "a": [1e2, "x"]}"#)?;
//! assert_eq!(bytes, br#"{"a":[100,"x"],"b":2}"#);
//! # Ok::<(), jsoncanon::Error>(())
//! ```
//!
//! Canonicalization is a pure function: no I/O, no shared state, safe to
//! call concurrently. The output is bare UTF-8 bytes with no trailing
//! newline or BOM; feeding them to a cryptographic digest is the caller's
//! job.
//!
//! [RFC 8785]: https://www.rfc-editor.org/rfc/rfc8785

mod encode;
mod error;
mod escape;
mod impls;
mod numeric;
mod parse;
mod sort;
mod value;

pub use error::Error;
pub use impls::serde_json::to_canonical_bytes;
pub use value::{JsonValue, Number};

/// What the parser does when an object literal repeats a key.
///
/// RFC 8259 leaves duplicate keys implementation-defined and RFC 8785 does
/// not override it, so the choice is an explicit setting here rather than an
/// accident of the parser.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// Fail with [`Error::DuplicateKey`]. The default: two producers that
    /// disagree on a duplicated key would otherwise sign different data
    /// under the same canonical hash.
    #[default]
    Reject,
    /// Keep the value of the last occurrence, for interoperability with
    /// permissive producers.
    LastWins,
}

/// Configuration for [`canonicalize_text`].
///
/// ```
/// use jsoncanon::{CanonicalizeOptions, DuplicateKeys};
///
/// let options = CanonicalizeOptions::new().duplicate_keys(DuplicateKeys::LastWins);
/// let bytes = options.canonicalize_text(br#"{"a": 1, "a": 2}"#)?;
/// assert_eq!(bytes, br#"{"a":2}"#);
/// # Ok::<(), jsoncanon::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CanonicalizeOptions {
    pub(crate) duplicate_keys: DuplicateKeys,
    pub(crate) max_depth: usize,
}

impl Default for CanonicalizeOptions {
    fn default() -> Self {
        CanonicalizeOptions {
            duplicate_keys: DuplicateKeys::Reject,
            max_depth: 128,
        }
    }
}

impl CanonicalizeOptions {
    pub fn new() -> CanonicalizeOptions {
        CanonicalizeOptions::default()
    }

    /// Set the duplicate-key policy. Defaults to [`DuplicateKeys::Reject`].
    #[must_use]
    pub fn duplicate_keys(mut self, policy: DuplicateKeys) -> CanonicalizeOptions {
        self.duplicate_keys = policy;
        self
    }

    /// Set the maximum container nesting depth the parser accepts.
    ///
    /// Defaults to 128. Inputs nested deeper fail with a parse error
    /// instead of exhausting the stack.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> CanonicalizeOptions {
        self.max_depth = depth;
        self
    }

    /// Canonicalize UTF-8 JSON text under these options.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] for invalid JSON, [`Error::DuplicateKey`] under
    /// [`DuplicateKeys::Reject`], and [`Error::UnrepresentableNumber`] for
    /// numeric tokens outside the finite binary64 range.
    pub fn canonicalize_text(&self, text: &[u8]) -> Result<Vec<u8>, Error> {
        let value = parse::parse(text, self)?;
        canonicalize(&value)
    }
}

/// Canonicalize an in-memory [`JsonValue`].
///
/// # Errors
///
/// [`Error::UnrepresentableNumber`] if a hand-built number is NaN or
/// infinite, and [`Error::DuplicateKey`] if a hand-built object repeats a
/// key. Values produced by the parser or by the `serde_json` conversions
/// never trip either.
pub fn canonicalize(value: &JsonValue) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    encode::write_value(value, &mut out)?;
    Ok(out)
}

/// Canonicalize UTF-8 JSON text with the default options.
///
/// Equivalent to `CanonicalizeOptions::new().canonicalize_text(text)`.
///
/// # Errors
///
/// See [`CanonicalizeOptions::canonicalize_text`].
pub fn canonicalize_text(text: &[u8]) -> Result<Vec<u8>, Error> {
    CanonicalizeOptions::new().canonicalize_text(text)
}
