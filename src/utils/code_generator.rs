//! Short code generation.
//!
//! Codes are drawn from the OS random number generator and mapped onto a
//! configured alphabet, one random byte per output character.

use thiserror::Error;

/// Longest code the generator will produce.
pub const MAX_CODE_LENGTH: usize = 64;

/// Default alphabet: ASCII letters and digits.
pub const DEFAULT_CHARSET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("short code length must be between 1 and {MAX_CODE_LENGTH}, got {0}")]
    InvalidLength(usize),
    #[error("short code charset must not be empty")]
    EmptyCharset,
    #[error("short code charset must be ASCII")]
    NonAscii,
    #[error("short code charset contains '{0}' more than once")]
    DuplicateChar(char),
    #[error("short code charset has {0} characters, at most 256 are usable")]
    TooManyChars(usize),
}

/// A validated charset plus the code length to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeAlphabet {
    charset: Vec<u8>,
    length: usize,
}

impl CodeAlphabet {
    /// Builds an alphabet, rejecting charsets that would make codes ambiguous.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError`] if the length is out of range or the charset
    /// is empty, non-ASCII, has repeated characters or exceeds 256 characters.
    pub fn new(charset: &str, length: usize) -> Result<Self, AlphabetError> {
        if length == 0 || length > MAX_CODE_LENGTH {
            return Err(AlphabetError::InvalidLength(length));
        }
        if charset.is_empty() {
            return Err(AlphabetError::EmptyCharset);
        }
        if !charset.is_ascii() {
            return Err(AlphabetError::NonAscii);
        }
        if charset.len() > 256 {
            return Err(AlphabetError::TooManyChars(charset.len()));
        }

        let bytes = charset.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if bytes[..i].contains(b) {
                return Err(AlphabetError::DuplicateChar(*b as char));
            }
        }

        Ok(Self {
            charset: bytes.to_vec(),
            length,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn charset(&self) -> &[u8] {
        &self.charset
    }
}

impl Default for CodeAlphabet {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET.as_bytes().to_vec(),
            length: 6,
        }
    }
}

/// Generates a random short code over `alphabet`.
///
/// Each output character is `charset[byte % charset.len()]` for one byte of
/// OS randomness. When the charset size does not divide 256 the low indices
/// are slightly favoured; at URL-shortener scale that bias is accepted.
///
/// # Errors
///
/// Returns an error if the system random number generator is unavailable.
pub fn generate_code(alphabet: &CodeAlphabet) -> Result<String, getrandom::Error> {
    let mut buffer = [0u8; MAX_CODE_LENGTH];
    let buffer = &mut buffer[..alphabet.length];

    getrandom::fill(buffer)?;

    let len = alphabet.charset.len();
    Ok(buffer
        .iter()
        .map(|b| alphabet.charset[*b as usize % len] as char)
        .collect())
}
