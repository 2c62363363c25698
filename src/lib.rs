// -*- mode: rust; -*-
//
// This file is part of proactive-vss.
// See LICENSE for licensing information.

//! Feldman **verifiable secret sharing** over BLS12-381 with additive
//! **proactive renewal**.
//!
//! A dealer splits a secret scalar into \\( n \\) shares such that any
//! \\( t \\) of them recover it, while every share can be publicly checked
//! against a vector of polynomial-coefficient commitments without revealing
//! the secret.  The share set can later be re-randomized in place — old
//! shares stop verifying, recovery still yields the original secret —
//! which bounds the useful lifetime of any individual stolen share.
//!
//! All four operations are local computations by one party.  Distributing
//! shares to their holders, and deciding which physical party owns which id,
//! are out of scope for this library, as is any persistence of key material.
//!
//! # Usage
//!
//! A dealer wants a 4-of-7 sharing of a fresh secret:
//!
//! ```rust
//! use proactive_vss::{Dealing, Parameters};
//! use rand::rngs::OsRng;
//!
//! # fn do_test() -> Result<(), proactive_vss::VssError> {
//! let params = Parameters { n: 7, t: 4 };
//!
//! let (dealing, secret) = Dealing::new(&params, &mut OsRng)?;
//! # Ok(()) } fn main() { assert!(do_test().is_ok()); }
//! ```
//!
//! The `dealing.shares` go to the seven share holders (transport is out of
//! scope for this library); `dealing.verification_vector` and
//! `dealing.proof_of_secret_key` may be published.  The returned `secret`
//! can be used immediately or simply dropped — it is recoverable from any
//! four shares, and dropping it wipes it from memory.
//!
//! Each holder checks the dealer's proof and their own share:
//!
//! ```rust
//! # use proactive_vss::{Dealing, Parameters};
//! # use rand::rngs::OsRng;
//! #
//! # fn do_test() -> Result<(), proactive_vss::VssError> {
//! # let params = Parameters { n: 7, t: 4 };
//! # let (dealing, secret) = Dealing::new(&params, &mut OsRng)?;
//! dealing.proof_of_secret_key.verify(dealing.verification_vector.public_key())?;
//!
//! for share in dealing.shares.iter() {
//!     assert!(share.verify(&dealing.verification_vector));
//! }
//! # Ok(()) } fn main() { assert!(do_test().is_ok()); }
//! ```
//!
//! Any four holders can pool their shares to recover the secret:
//!
//! ```rust
//! # use proactive_vss::{Dealing, Parameters};
//! use proactive_vss::recover_secret;
//! # use rand::rngs::OsRng;
//! #
//! # fn do_test() -> Result<(), proactive_vss::VssError> {
//! # let params = Parameters { n: 7, t: 4 };
//! # let (dealing, secret) = Dealing::new(&params, &mut OsRng)?;
//! let recovered = recover_secret(&dealing.shares[0..4])?;
//!
//! assert_eq!(recovered, secret);
//! # Ok(()) } fn main() { assert!(do_test().is_ok()); }
//! ```
//!
//! Note that `recover_secret` cannot tell how many shares the dealing
//! required: interpolating fewer than \\( t \\) shares silently produces an
//! unrelated scalar.  Supplying a quorum is the caller's responsibility.
//!
//! Periodically, the dealer renews the complete share set.  The secret is
//! never reconstructed in the process:
//!
//! ```rust
//! # use proactive_vss::{Dealing, Parameters, recover_secret};
//! use proactive_vss::Renewal;
//! # use rand::rngs::OsRng;
//! #
//! # fn do_test() -> Result<(), proactive_vss::VssError> {
//! # let params = Parameters { n: 7, t: 4 };
//! # let (dealing, secret) = Dealing::new(&params, &mut OsRng)?;
//! let renewal = Renewal::new(&params, &dealing.shares, &dealing.verification_vector, &mut OsRng)?;
//!
//! // Renewed shares verify only against the renewed vector...
//! assert!(renewal.shares[0].verify(&renewal.verification_vector));
//! assert!(!renewal.shares[0].verify(&dealing.verification_vector));
//!
//! // ...and still hide the original secret.
//! assert_eq!(recover_secret(&renewal.shares[3..7])?, secret);
//! # Ok(()) } fn main() { assert!(do_test().is_ok()); }
//! ```
//!
//! # Secret hygiene
//!
//! [`Secret`], [`SecretShare`], and the internal polynomial coefficients
//! are all overwritten with zeroes when dropped, on every exit path,
//! bounding the window in which ephemeral key material sits in memory.
//! Callers holding exported bytes are responsible for the copies they make.

#![warn(future_incompatible)]
#![deny(missing_docs)]
#![allow(non_snake_case)]

pub mod commitment;
pub mod dealing;
pub mod errors;
pub mod nizk;
pub mod parameters;
mod polynomial;
pub mod recovery;
pub mod renewal;
pub mod share;

pub use commitment::VerificationVector;
pub use commitment::COMMITMENT_LENGTH;
pub use dealing::Dealing;
pub use errors::VssError;
pub use nizk::NizkOfSecretKey;
pub use parameters::Parameters;
pub use recovery::recover_secret;
pub use renewal::Renewal;
pub use share::Secret;
pub use share::SecretShare;
pub use share::SHARE_LENGTH;
