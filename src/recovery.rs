// -*- mode: rust; -*-
//
// This file is part of proactive-vss.
// See LICENSE for licensing information.

//! Recovering a secret from a quorum of shares.

use bls12_381::Scalar;
use ff::Field;
use tracing::{error, trace};

use crate::errors::VssError;
use crate::share::{check_share_ids, id_to_scalar, Secret, SecretShare};

/// Recover the shared secret from a set of shares with pairwise-distinct
/// ids, by Lagrange interpolation of the sharing polynomial at \\( x = 0 \\):
///
/// \\( a_0 = \sum_j f(i_j) \prod_{k \neq j} \frac{i_k}{i_k - i_j} \\)
///
/// with all arithmetic in the scalar field.
///
/// # Warning
///
/// The caller must supply at least `t` shares of a `t`-of-`n` dealing.
/// Interpolation over fewer shares still produces *a* scalar, but one
/// unrelated to the dealt secret, and no error is raised: the share count
/// required for correctness is not recorded in the shares themselves.
///
/// # Errors
///
/// * [`VssError::DuplicateShareId`] if any id appears twice, since the
///   interpolation is undefined over a set with repeated evaluation points.
/// * [`VssError::ReservedShareId`] if any share carries id 0.
pub fn recover_secret(shares: &[SecretShare]) -> Result<Secret, VssError> {
    if let Err(rejection) = check_share_ids(shares) {
        error!(%rejection, "rejecting recovery share set");
        return Err(rejection);
    }

    trace!(shares = shares.len(), "recovering secret");

    let mut secret = Scalar::ZERO;

    for (j, share) in shares.iter().enumerate() {
        let id_j = id_to_scalar(share.index);
        let mut numerator = Scalar::ONE;
        let mut denominator = Scalar::ONE;

        for (k, other) in shares.iter().enumerate() {
            if k == j {
                continue;
            }
            let id_k = id_to_scalar(other.index);

            numerator *= id_k;
            denominator *= id_k - id_j;
        }

        // The ids are nonzero and pairwise distinct, so the denominator is a
        // product of nonzero field elements; a failed inversion can only
        // mean a repeated id slipped past the check above.
        let denominator_inverse: Option<Scalar> = denominator.invert().into();
        let coefficient = match denominator_inverse {
            Some(inverse) => numerator * inverse,
            None => return Err(VssError::DuplicateShareId(share.index)),
        };

        secret += share.evaluation * coefficient;
    }

    Ok(Secret(secret))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn interpolation_of_a_known_line() {
        // f(x) = 3 + 2x: f(1) = 5, f(2) = 7, secret 3.
        let shares = [
            SecretShare { index: 1, evaluation: Scalar::from(5u64) },
            SecretShare { index: 2, evaluation: Scalar::from(7u64) },
        ];

        let secret = recover_secret(&shares).unwrap();

        assert_eq!(secret.0, Scalar::from(3u64));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let shares = [
            SecretShare { index: 1, evaluation: Scalar::from(5u64) },
            SecretShare { index: 1, evaluation: Scalar::from(7u64) },
        ];

        assert_eq!(recover_secret(&shares), Err(VssError::DuplicateShareId(1)));
    }

    #[test]
    fn reserved_id_is_rejected() {
        let shares = [
            SecretShare { index: 0, evaluation: Scalar::from(5u64) },
            SecretShare { index: 2, evaluation: Scalar::from(7u64) },
        ];

        assert_eq!(recover_secret(&shares), Err(VssError::ReservedShareId));
    }
}
