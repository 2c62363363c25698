// -*- mode: rust; -*-
//
// This file is part of proactive-vss.
// See LICENSE for licensing information.

//! Zero-knowledge proofs.

use bls12_381::{G1Projective, Scalar};
use ff::Field;
use group::{Curve, Group};
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};

use crate::errors::VssError;

/// Domain separator for the dealer's proof of secret key.
const NIZK_CONTEXT: &[u8] = b"proactive-vss dealer PoK";

fn challenge(public_key: &G1Projective, commitment: &G1Projective) -> Scalar {
    let mut hram = Sha512::new();

    hram.update(NIZK_CONTEXT);
    hram.update(public_key.to_affine().to_compressed());
    hram.update(commitment.to_affine().to_compressed());

    let mut wide = [0u8; 64];
    wide.copy_from_slice(&hram.finalize());
    Scalar::from_bytes_wide(&wide)
}

/// A proof of knowledge of the dealt secret, created by making a Schnorr
/// signature with the secret as the signing key.
///
/// The verification vector proves that the shares are consistent with *some*
/// polynomial; this proof additionally convinces share holders that the
/// dealer actually knows that polynomial's constant term, i.e. the secret
/// behind \\( \phi_0 \\).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NizkOfSecretKey {
    /// The challenge scalar binding the public key and the nonce commitment.
    s: Scalar,
    /// The response scalar, which is the actual signature.
    r: Scalar,
}

impl NizkOfSecretKey {
    /// Prove knowledge of the secret behind `public_key`.
    ///
    /// The proof is a Schnorr signature: \\( k \gets^{$} \mathbb{Z}_q \\),
    /// \\( M = g^k \\), \\( s = H(g^{a_0}, M) \\), \\( r = k + a_0 s \\).
    pub(crate) fn prove<R: RngCore + CryptoRng>(
        secret: &Scalar,
        public_key: &G1Projective,
        rng: &mut R,
    ) -> Self {
        let k = Scalar::random(&mut *rng);
        let M = G1Projective::generator() * k;

        let s = challenge(public_key, &M);
        let r = k + (secret * s);

        NizkOfSecretKey { s, r }
    }

    /// Verify that the dealer does indeed know the secret key.
    pub fn verify(&self, public_key: &G1Projective) -> Result<(), VssError> {
        let M_prime = (G1Projective::generator() * self.r) + (public_key * -self.s);

        let s_prime = challenge(public_key, &M_prime);

        if self.s == s_prime {
            return Ok(());
        }

        Err(VssError::InvalidProofOfSecretKey)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn nizk_of_secret_key() {
        let mut rng = ChaCha20Rng::from_seed([21u8; 32]);
        let secret = Scalar::random(&mut rng);
        let public_key = G1Projective::generator() * secret;

        let proof = NizkOfSecretKey::prove(&secret, &public_key, &mut rng);

        assert!(proof.verify(&public_key).is_ok());
    }

    #[test]
    fn nizk_rejects_wrong_public_key() {
        let mut rng = ChaCha20Rng::from_seed([22u8; 32]);
        let secret = Scalar::random(&mut rng);
        let public_key = G1Projective::generator() * secret;
        let other_key = G1Projective::generator() * Scalar::random(&mut rng);

        let proof = NizkOfSecretKey::prove(&secret, &public_key, &mut rng);

        assert_eq!(
            proof.verify(&other_key),
            Err(VssError::InvalidProofOfSecretKey)
        );
    }
}
