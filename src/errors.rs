// -*- mode: rust; -*-
//
// This file is part of proactive-vss.
// See LICENSE for licensing information.

//! Runtime errors which may occur while dealing, recovering, or renewing
//! shares of a secret.

use thiserror::Error;

/// Errors reported by the sharing protocol operations.
///
/// Note that a share failing verification against a verification vector is
/// *not* an error: [`SecretShare::verify`](crate::SecretShare::verify)
/// returns a boolean which the caller must branch on.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum VssError {
    /// The requested scheme cannot exist, e.g. a threshold of zero or a
    /// threshold larger than the number of shares.
    #[error("cannot split a secret into {n} shares with threshold {t}")]
    InvalidParameters {
        /// The number of shares requested.
        n: u32,
        /// The recovery threshold requested.
        t: u32,
    },
    /// Two shares in the input set carry the same id, so Lagrange
    /// interpolation is undefined over the set.
    #[error("share set contains id {0} more than once")]
    DuplicateShareId(u32),
    /// A share carried id 0, which denotes the secret itself as a polynomial
    /// evaluation point and never identifies a share.
    #[error("share id 0 is reserved")]
    ReservedShareId,
    /// A byte sequence did not decode to a canonical scalar or group element.
    #[error("malformed scalar or group element encoding")]
    MalformedEncoding,
    /// Renewal was attempted on a subset of the dealt shares.  The refresh
    /// polynomial only preserves the secret when layered onto the complete
    /// share set behind the commitment.
    #[error("renewal requires the complete share set: expected {expected} shares, got {actual}")]
    IncompleteShareSet {
        /// The number of shares originally dealt.
        expected: u32,
        /// The number of shares supplied.
        actual: usize,
    },
    /// The verification vector's length does not equal the threshold it is
    /// supposed to commit to.
    #[error("verification vector commits to {actual} coefficients, expected {expected}")]
    MismatchedVerificationVector {
        /// The expected number of coefficient commitments.
        expected: u32,
        /// The number of commitments supplied.
        actual: usize,
    },
    /// The dealer's proof of knowledge of the secret key did not verify.
    #[error("the dealer's proof of secret key could not be verified")]
    InvalidProofOfSecretKey,
}
