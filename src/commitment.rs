// -*- mode: rust; -*-
//
// This file is part of proactive-vss.
// See LICENSE for licensing information.

//! Public commitments to a secret sharing polynomial.

use bls12_381::{G1Affine, G1Projective, Scalar};
use group::{Curve, Group};

use crate::errors::VssError;

/// The size in bytes of one compressed G1 element.
pub const COMMITMENT_LENGTH: usize = 48;

/// An ordered vector of commitments \\( [\phi_0, \ldots, \phi_{t-1}] \\) to
/// the coefficients of a secret sharing polynomial, where
/// \\( \phi_j = g^{a_j} \\).
///
/// Its length always equals the recovery threshold, entry \\( j \\) commits
/// to the degree-\\( j \\) coefficient, and entry 0 is the public image of
/// the secret itself.  The order is load-bearing and must never be changed
/// independently of the polynomial it commits to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerificationVector(pub(crate) Vec<G1Projective>);

impl VerificationVector {
    /// The recovery threshold this vector commits to.
    pub fn threshold(&self) -> u32 {
        self.0.len() as u32
    }

    /// The public image \\( g^{a_0} \\) of the shared secret.
    pub fn public_key(&self) -> &G1Projective {
        &self.0[0]
    }

    /// Evaluate the committed polynomial homomorphically in the group:
    /// \\( \prod_j \phi_j^{x^j} \\), written additively.
    ///
    /// This mirrors the in-field Horner evaluation coefficient for
    /// coefficient, so for every honestly dealt share with id \\( i \\) the
    /// result equals \\( g^{f(i)} \\).
    pub(crate) fn evaluate(&self, x: &Scalar) -> G1Projective {
        let mut sum = G1Projective::identity();

        for commitment in self.0.iter().rev() {
            sum = sum * x + commitment;
        }
        sum
    }

    /// Export the vector as compressed G1 encodings, in coefficient order.
    pub fn to_bytes(&self) -> Vec<[u8; COMMITMENT_LENGTH]> {
        self.0
            .iter()
            .map(|commitment| commitment.to_affine().to_compressed())
            .collect()
    }

    /// Import a vector from compressed G1 encodings.
    ///
    /// Fails with [`VssError::MalformedEncoding`] if any entry is not a
    /// canonical point encoding, or if the vector is empty (a commitment to
    /// no coefficients at all cannot have been produced by a dealer).
    pub fn from_bytes(bytes: &[[u8; COMMITMENT_LENGTH]]) -> Result<Self, VssError> {
        if bytes.is_empty() {
            return Err(VssError::MalformedEncoding);
        }
        let mut commitments: Vec<G1Projective> = Vec::with_capacity(bytes.len());

        for encoding in bytes.iter() {
            let point: Option<G1Affine> = G1Affine::from_compressed(encoding).into();

            match point {
                Some(p) => commitments.push(G1Projective::from(p)),
                None => return Err(VssError::MalformedEncoding),
            }
        }
        Ok(VerificationVector(commitments))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::polynomial::SecretPolynomial;

    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn bytes_roundtrip() {
        let mut rng = ChaCha20Rng::from_seed([11u8; 32]);
        let vvec = SecretPolynomial::random(4, &mut rng).commit();

        let decoded = VerificationVector::from_bytes(&vvec.to_bytes()).unwrap();

        assert_eq!(vvec, decoded);
    }

    #[test]
    fn empty_vector_is_rejected() {
        assert_eq!(
            VerificationVector::from_bytes(&[]),
            Err(VssError::MalformedEncoding)
        );
    }

    #[test]
    fn non_canonical_point_is_rejected() {
        let garbage = [[0xffu8; COMMITMENT_LENGTH]];

        assert_eq!(
            VerificationVector::from_bytes(&garbage),
            Err(VssError::MalformedEncoding)
        );
    }
}
