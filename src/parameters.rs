// -*- mode: rust; -*-
//
// This file is part of proactive-vss.
// See LICENSE for licensing information.

//! Configurable parameters for an instance of the secret sharing scheme.

use crate::errors::VssError;

/// The configuration parameters for splitting a secret into a verifiable
/// share set.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Parameters {
    /// The number of shares to deal.
    pub n: u32,
    /// The number of shares required to recover the secret.
    pub t: u32,
}

impl Parameters {
    /// Check that a degree-\\( t-1 \\) polynomial evaluated at \\( n \\)
    /// distinct points actually describes a \\( t \\)-of-\\( n \\) scheme.
    ///
    /// A threshold of zero would commit to an empty polynomial, and a
    /// threshold above \\( n \\) would deal a secret which no subset of the
    /// shares can ever recover.
    pub fn validate(&self) -> Result<(), VssError> {
        if self.t < 1 || self.n < 1 || self.t > self.n {
            return Err(VssError::InvalidParameters { n: self.n, t: self.t });
        }
        Ok(())
    }
}
