// -*- mode: rust; -*-
//
// This file is part of proactive-vss.
// See LICENSE for licensing information.

//! Proactive renewal of a dealt share set.

use rand_core::{CryptoRng, RngCore};
use tracing::{error, trace};

use crate::commitment::VerificationVector;
use crate::errors::VssError;
use crate::parameters::Parameters;
use crate::polynomial::SecretPolynomial;
use crate::share::{check_share_ids, id_to_scalar, SecretShare};

/// A renewed share set: fresh shares and a fresh verification vector hiding
/// the same secret as the dealing they replace.
///
/// The old shares and the old verification vector are invalid from this
/// point on, and deliberately so: a share captured before renewal fails
/// verification against the new vector and contributes garbage to recovery
/// alongside renewed shares.
pub struct Renewal {
    /// The renewed shares, with ids preserved from the input set.
    pub shares: Vec<SecretShare>,
    /// Commitments to the renewed sharing polynomial's coefficients.
    pub verification_vector: VerificationVector,
}

impl Renewal {
    /// Re-randomize a complete share set without reconstructing, or
    /// changing, the secret.
    ///
    /// Samples a refresh polynomial \\( g \\) of degree \\( t-1 \\) with
    /// \\( g(0) = 0 \\) and fresh random higher coefficients, then shifts
    /// every share additively by \\( g \\)'s evaluation at its id:
    /// \\( f'(i) = f(i) + g(i) \\).  Since the underlying polynomials add
    /// coefficient-wise and \\( g \\) contributes nothing at zero,
    /// \\( f'(0) = f(0) \\): recovery from the renewed shares yields the
    /// original secret.  The new verification vector is the pointwise group
    /// sum of the old vector and \\( g \\)'s commitments, homomorphically
    /// consistent with the scalar-level shift.
    ///
    /// # Inputs
    ///
    /// `shares` must be the *complete* set dealt under
    /// `verification_vector` — all \\( n \\) of them, not a quorum.  The
    /// refresh polynomial only preserves the secret when layered onto the
    /// whole commitment it was sampled against; renewing a subset would
    /// leave the remaining holders with shares of a different polynomial.
    ///
    /// # Errors
    ///
    /// * [`VssError::InvalidParameters`] if `parameters` is degenerate.
    /// * [`VssError::IncompleteShareSet`] if `shares` is not exactly
    ///   \\( n \\) shares.
    /// * [`VssError::MismatchedVerificationVector`] if the vector's length
    ///   is not the threshold.
    /// * [`VssError::DuplicateShareId`] / [`VssError::ReservedShareId`] on
    ///   malformed id sets.
    pub fn new<R: RngCore + CryptoRng>(
        parameters: &Parameters,
        shares: &[SecretShare],
        verification_vector: &VerificationVector,
        rng: &mut R,
    ) -> Result<Self, VssError> {
        parameters.validate()?;

        if shares.len() != parameters.n as usize {
            error!(
                expected = parameters.n,
                actual = shares.len(),
                "refusing to renew a partial share set"
            );
            return Err(VssError::IncompleteShareSet {
                expected: parameters.n,
                actual: shares.len(),
            });
        }
        if verification_vector.threshold() != parameters.t {
            return Err(VssError::MismatchedVerificationVector {
                expected: parameters.t,
                actual: verification_vector.0.len(),
            });
        }
        check_share_ids(shares)?;

        trace!(n = parameters.n, t = parameters.t, "renewing share set");

        let refresh = SecretPolynomial::zero_constant(parameters.t, rng);

        let mut renewed: Vec<SecretShare> = Vec::with_capacity(shares.len());

        for share in shares.iter() {
            renewed.push(SecretShare {
                index: share.index,
                evaluation: share.evaluation + refresh.evaluate(&id_to_scalar(share.index)),
            });
        }

        let refresh_commitments = refresh.commit();
        let renewed_vector = VerificationVector(
            verification_vector
                .0
                .iter()
                .zip(refresh_commitments.0.iter())
                .map(|(old, delta)| old + delta)
                .collect(),
        );

        Ok(Renewal { shares: renewed, verification_vector: renewed_vector })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::dealing::Dealing;

    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn partial_share_sets_are_refused() {
        let mut rng = ChaCha20Rng::from_seed([41u8; 32]);
        let parameters = Parameters { n: 4, t: 2 };
        let (dealing, _secret) = Dealing::new(&parameters, &mut rng).unwrap();

        let result = Renewal::new(
            &parameters,
            &dealing.shares[..3],
            &dealing.verification_vector,
            &mut rng,
        );

        assert_eq!(
            result.err(),
            Some(VssError::IncompleteShareSet { expected: 4, actual: 3 })
        );
    }

    #[test]
    fn mismatched_vector_is_refused() {
        let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
        let parameters = Parameters { n: 4, t: 2 };
        let (dealing, _secret) = Dealing::new(&parameters, &mut rng).unwrap();
        let (other, _) = Dealing::new(&Parameters { n: 4, t: 3 }, &mut rng).unwrap();

        let result = Renewal::new(
            &parameters,
            &dealing.shares,
            &other.verification_vector,
            &mut rng,
        );

        assert_eq!(
            result.err(),
            Some(VssError::MismatchedVerificationVector { expected: 2, actual: 3 })
        );
    }

    #[test]
    fn renewal_preserves_ids() {
        let mut rng = ChaCha20Rng::from_seed([43u8; 32]);
        let parameters = Parameters { n: 5, t: 3 };
        let (dealing, _secret) = Dealing::new(&parameters, &mut rng).unwrap();

        let renewal = Renewal::new(
            &parameters,
            &dealing.shares,
            &dealing.verification_vector,
            &mut rng,
        )
        .unwrap();

        let old_ids: Vec<u32> = dealing.shares.iter().map(|share| share.index).collect();
        let new_ids: Vec<u32> = renewal.shares.iter().map(|share| share.index).collect();
        assert_eq!(old_ids, new_ids);

        // Every evaluation must actually have moved.
        for (old, new) in dealing.shares.iter().zip(renewal.shares.iter()) {
            assert_ne!(old.to_bytes(), new.to_bytes());
        }
    }
}
