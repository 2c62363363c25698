// -*- mode: rust; -*-
//
// This file is part of proactive-vss.
// See LICENSE for licensing information.

//! Dealing a secret into a verifiable share set.

use rand_core::{CryptoRng, RngCore};
use tracing::trace;

use crate::commitment::VerificationVector;
use crate::errors::VssError;
use crate::nizk::NizkOfSecretKey;
use crate::parameters::Parameters;
use crate::polynomial::SecretPolynomial;
use crate::share::{id_to_scalar, Secret, SecretShare};

/// The public output of dealing a fresh secret: the shares to hand to the
/// participants, the verification vector every participant checks their
/// share against, and the dealer's proof of knowledge of the secret.
///
/// Distribution of the shares to their holders is the caller's concern.
pub struct Dealing {
    /// One share per id \\( 1 \ldots n \\), in id order.
    pub shares: Vec<SecretShare>,
    /// Commitments to the sharing polynomial's coefficients.
    pub verification_vector: VerificationVector,
    /// Proof that the dealer knows the secret behind
    /// `verification_vector[0]`.
    pub proof_of_secret_key: NizkOfSecretKey,
}

impl Dealing {
    /// Split a freshly sampled secret into a \\( t \\)-of-\\( n \\)
    /// verifiable share set.
    ///
    /// Samples a uniformly random polynomial
    /// \\( f(x) = \sum_{j=0}^{t-1} a_j x^j \\) over the scalar field,
    /// commits to each coefficient as \\( \phi_j = g^{a_j} \\), and deals
    /// the share \\( (i, f(i)) \\) for every id \\( i \in 1 \ldots n \\).
    /// The secret is \\( a_0 \\).
    ///
    /// # Returns
    ///
    /// The public [`Dealing`] and the [`Secret`], separately.  The secret
    /// must be kept private (or discarded outright: it remains recoverable
    /// from any \\( t \\) of the shares); everything in the `Dealing` other
    /// than the shares themselves may be published.
    pub fn new<R: RngCore + CryptoRng>(
        parameters: &Parameters,
        rng: &mut R,
    ) -> Result<(Self, Secret), VssError> {
        parameters.validate()?;

        trace!(n = parameters.n, t = parameters.t, "dealing a new share set");

        let polynomial = SecretPolynomial::random(parameters.t, rng);
        let verification_vector = polynomial.commit();

        let mut shares: Vec<SecretShare> = Vec::with_capacity(parameters.n as usize);

        for index in 1..=parameters.n {
            shares.push(SecretShare {
                index,
                evaluation: polynomial.evaluate(&id_to_scalar(index)),
            });
        }

        let proof_of_secret_key =
            NizkOfSecretKey::prove(polynomial.secret(), verification_vector.public_key(), rng);
        let secret = Secret(*polynomial.secret());

        Ok((Dealing { shares, verification_vector, proof_of_secret_key }, secret))
    }
}
