// -*- mode: rust; -*-
//
// This file is part of proactive-vss.
// See LICENSE for licensing information.

//! Secret shares and the secrets they hide.

use core::fmt::{self, Debug};

use bls12_381::{G1Projective, Scalar};
use group::Group;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::commitment::VerificationVector;
use crate::errors::VssError;

/// The size in bytes of an exported scalar.
pub const SHARE_LENGTH: usize = 32;

/// Map a share id to its evaluation point in the scalar field.
///
/// Id 0 is reserved: evaluating the secret polynomial at zero yields the
/// secret itself, so no share may ever live there.
pub(crate) fn id_to_scalar(index: u32) -> Scalar {
    Scalar::from(u64::from(index))
}

/// Check that a share set uses only nonzero, pairwise-distinct ids.
///
/// Lagrange interpolation and zero-polynomial renewal are both undefined
/// over a set with repeated evaluation points, so every consumer of a share
/// set runs this first.
pub(crate) fn check_share_ids(shares: &[SecretShare]) -> Result<(), VssError> {
    for (position, share) in shares.iter().enumerate() {
        if share.index == 0 {
            return Err(VssError::ReservedShareId);
        }
        if shares[..position].iter().any(|seen| seen.index == share.index) {
            return Err(VssError::DuplicateShareId(share.index));
        }
    }
    Ok(())
}

/// One evaluation of a secret sharing polynomial, i.e.
/// \\( (i, f(i)) \\) for a nonzero id \\( i \\).  The evaluation is
/// overwritten with zeroes when the share falls out of scope.
#[derive(Clone, Eq, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct SecretShare {
    /// The id this share was evaluated at, to keep the share set in order.
    pub index: u32,
    /// The evaluation of the polynomial at `index`.
    pub(crate) evaluation: Scalar,
}

impl Debug for SecretShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretShare")
            .field("index", &self.index)
            .field("evaluation", &"[redacted]")
            .finish()
    }
}

impl SecretShare {
    /// Verify this share against a dealer's verification vector, without
    /// access to the secret.
    ///
    /// The expected value is computed along the commitment path, evaluating
    /// the committed polynomial in the group at this share's id; the actual
    /// value is computed along the share path, as \\( g^{f(i)} \\).  The
    /// share is consistent with the commitment iff the two group elements
    /// are equal.
    ///
    /// A `false` return is an expected outcome, not an error: it signals a
    /// corrupted or tampered share, or a verification vector this share was
    /// not dealt (or renewed) under.
    pub fn verify(&self, verification_vector: &VerificationVector) -> bool {
        let expected = verification_vector.evaluate(&id_to_scalar(self.index));
        let actual = G1Projective::generator() * self.evaluation;

        expected == actual
    }

    /// Export the share's evaluation as canonical little-endian bytes.
    ///
    /// The id travels alongside the bytes, not inside them, matching
    /// [`from_bytes`](Self::from_bytes).
    pub fn to_bytes(&self) -> [u8; SHARE_LENGTH] {
        self.evaluation.to_bytes()
    }

    /// Import a share from an id and the canonical encoding of its
    /// evaluation.
    ///
    /// Fails with [`VssError::ReservedShareId`] for id 0 and
    /// [`VssError::MalformedEncoding`] for a non-canonical scalar.
    pub fn from_bytes(index: u32, bytes: &[u8; SHARE_LENGTH]) -> Result<Self, VssError> {
        if index == 0 {
            return Err(VssError::ReservedShareId);
        }
        let evaluation: Option<Scalar> = Scalar::from_bytes(bytes).into();

        match evaluation {
            Some(evaluation) => Ok(SecretShare { index, evaluation }),
            None => Err(VssError::MalformedEncoding),
        }
    }
}

/// A recovered or freshly dealt secret: the constant term of the sharing
/// polynomial.  Overwritten with zeroes when it falls out of scope, and
/// never serialized by this crate except through
/// [`to_bytes`](Secret::to_bytes).
#[derive(Clone, Eq, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct Secret(pub(crate) Scalar);

impl Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([redacted])")
    }
}

impl Secret {
    /// The public image \\( g^{a_0} \\) of this secret, as committed to by
    /// entry 0 of the dealer's verification vector.
    pub fn public_key(&self) -> G1Projective {
        G1Projective::generator() * self.0
    }

    /// Export the secret as canonical little-endian bytes.
    pub fn to_bytes(&self) -> [u8; SHARE_LENGTH] {
        self.0.to_bytes()
    }

    /// Import a secret from its canonical encoding.
    pub fn from_bytes(bytes: &[u8; SHARE_LENGTH]) -> Result<Self, VssError> {
        let scalar: Option<Scalar> = Scalar::from_bytes(bytes).into();

        match scalar {
            Some(scalar) => Ok(Secret(scalar)),
            None => Err(VssError::MalformedEncoding),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use ff::Field;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn share_bytes_roundtrip() {
        let mut rng = ChaCha20Rng::from_seed([12u8; 32]);
        let share = SecretShare { index: 3, evaluation: Scalar::random(&mut rng) };

        let decoded = SecretShare::from_bytes(share.index, &share.to_bytes()).unwrap();

        assert_eq!(share, decoded);
    }

    #[test]
    fn reserved_id_is_rejected() {
        let bytes = [0u8; SHARE_LENGTH];

        assert_eq!(
            SecretShare::from_bytes(0, &bytes),
            Err(VssError::ReservedShareId)
        );
    }

    #[test]
    fn non_canonical_scalar_is_rejected() {
        let bytes = [0xffu8; SHARE_LENGTH];

        assert_eq!(
            SecretShare::from_bytes(1, &bytes),
            Err(VssError::MalformedEncoding)
        );
        assert_eq!(Secret::from_bytes(&bytes), Err(VssError::MalformedEncoding));
    }

    #[test]
    fn duplicate_and_reserved_ids_are_caught() {
        let mut rng = ChaCha20Rng::from_seed([13u8; 32]);
        let a = SecretShare { index: 1, evaluation: Scalar::random(&mut rng) };
        let b = SecretShare { index: 2, evaluation: Scalar::random(&mut rng) };
        let a_again = SecretShare { index: 1, evaluation: Scalar::random(&mut rng) };
        let zero = SecretShare { index: 0, evaluation: Scalar::random(&mut rng) };

        assert!(check_share_ids(&[a.clone(), b.clone()]).is_ok());
        assert_eq!(
            check_share_ids(&[a.clone(), b.clone(), a_again]),
            Err(VssError::DuplicateShareId(1))
        );
        assert_eq!(
            check_share_ids(&[a, b, zero]),
            Err(VssError::ReservedShareId)
        );
    }
}
