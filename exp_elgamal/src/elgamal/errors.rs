use thiserror::Error;

/// Errors which may occur when decrypting.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ElgamalError {
    /// The decrypted group element is not `n · B` for any `|n| <= bound`.
    /// Either the plaintext is out of the supported range or the ciphertext
    /// was not produced with the matching public key.
    #[error("Could not find a discrete logarithm with absolute value at most {bound}.")]
    DiscreteLogNotFound { bound: u64 },
}
