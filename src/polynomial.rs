// -*- mode: rust; -*-
//
// This file is part of proactive-vss.
// See LICENSE for licensing information.

//! Secret polynomials over the BLS12-381 scalar field.
//!
//! Every sharing of a secret is one polynomial: the secret is the constant
//! term, the shares are evaluations at nonzero points, and the verification
//! vector is the image of the coefficients under the fixed-generator map
//! \\( a \mapsto g^a \\).  Proactive renewal reuses the same structure with
//! the constant term pinned to zero.

use bls12_381::{G1Projective, Scalar};
use ff::Field;
use group::Group;
use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::commitment::VerificationVector;

/// The coefficients of a secret sharing polynomial, lowest degree first,
/// overwritten with zeroes when they fall out of scope.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct SecretPolynomial(pub(crate) Vec<Scalar>);

impl SecretPolynomial {
    /// Sample a uniformly random polynomial of degree \\( t-1 \\), i.e.
    /// \\( f(x) = \sum_{j=0}^{t-1} a_j x^j \\) with every \\( a_j \\) drawn
    /// independently from the scalar field.  \\( a_0 \\) is the secret.
    pub(crate) fn random<R: RngCore + CryptoRng>(threshold: u32, rng: &mut R) -> Self {
        debug_assert!(threshold >= 1);

        let mut coefficients: Vec<Scalar> = Vec::with_capacity(threshold as usize);

        for _ in 0..threshold {
            coefficients.push(Scalar::random(&mut *rng));
        }
        SecretPolynomial(coefficients)
    }

    /// Sample a random polynomial of degree \\( t-1 \\) whose constant term
    /// is the additive identity, so that \\( g(0) = 0 \\).
    ///
    /// Adding such a polynomial's evaluations to an existing share set
    /// re-randomizes every share without shifting the shared secret.
    pub(crate) fn zero_constant<R: RngCore + CryptoRng>(threshold: u32, rng: &mut R) -> Self {
        let mut polynomial = Self::random(threshold, rng);

        polynomial.0[0] = Scalar::ZERO;
        polynomial
    }

    /// The constant term \\( a_0 \\).
    pub(crate) fn secret(&self) -> &Scalar {
        &self.0[0]
    }

    /// Evaluate the polynomial at `x` by Horner's method.
    pub(crate) fn evaluate(&self, x: &Scalar) -> Scalar {
        let mut sum = Scalar::ZERO;

        for coefficient in self.0.iter().rev() {
            sum = sum * x + coefficient;
        }
        sum
    }

    /// Commit to the polynomial by mapping every coefficient through the
    /// fixed generator: \\( \phi_j = g^{a_j} \\).
    ///
    /// The commitment preserves coefficient order, which is what keeps the
    /// in-field evaluation in [`evaluate`](Self::evaluate) and the in-group
    /// evaluation in [`VerificationVector::evaluate`] interchangeable.
    pub(crate) fn commit(&self) -> VerificationVector {
        let mut commitments: Vec<G1Projective> = Vec::with_capacity(self.0.len());

        for coefficient in self.0.iter() {
            commitments.push(G1Projective::generator() * coefficient);
        }
        VerificationVector(commitments)
    }
}
