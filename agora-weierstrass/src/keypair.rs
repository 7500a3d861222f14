use crate::arithmetic::{AffinePoint, Point};
use crate::curve::Curve;
use crate::parse::{hex_width, parse_scalar, to_hex};
use crate::rng::ScalarSource;
use crate::{Error, InputError};

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

const MAX_RANDOM_DRAWS: usize = 256;

/// Hex text form of a key pair, lowercase, `0x`-prefixed and padded to the
/// byte width of the field prime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPairHex {
    pub private_key_hex: String,
    pub public_key_hex: [String; 2],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    private_scalar: BigUint,
    public_point: AffinePoint,
    hex_width: usize,
}

impl KeyPair {
    /// Derives the public point `private_scalar * G`. The scalar has to be in
    /// `[1, order)`.
    pub fn new(curve: &Curve, private_scalar: BigUint) -> Result<Self, Error> {
        if private_scalar.is_zero() || &private_scalar >= curve.order() {
            return Err(InputError::ScalarOutOfRange.into());
        }

        let public_point = match curve.mul_generator(&private_scalar)? {
            Point::Affine(point) => point,
            Point::Identity => return Err(InputError::IdentityPublicKey.into()),
        };

        tracing::debug!(scalar_bits = private_scalar.bits(), "derived public point");
        Ok(Self {
            private_scalar,
            public_point,
            hex_width: hex_width(curve.field().bits()),
        })
    }

    pub fn new_checked(
        curve: &Curve,
        private_scalar: BigUint,
        public_point: AffinePoint,
    ) -> Result<Self, Error> {
        let keypair = Self::new(curve, private_scalar)?;
        let field = curve.field();
        if &field.reduce(public_point.x()) != keypair.public_point.x()
            || &field.reduce(public_point.y()) != keypair.public_point.y()
        {
            return Err(InputError::InvalidKeypair.into());
        }
        Ok(keypair)
    }

    /// Draws private scalars from `rng` until one lands in `[1, order)`,
    /// giving up after a bounded number of draws.
    pub fn random<R: ScalarSource + ?Sized>(curve: &Curve, rng: &mut R) -> Result<Self, Error> {
        let bits = curve.order().bits();
        for _ in 0..MAX_RANDOM_DRAWS {
            let candidate = rng.random_scalar(bits);
            if !candidate.is_zero() && &candidate < curve.order() {
                return Self::new(curve, candidate);
            }
            tracing::trace!("random scalar rejected, drawing again");
        }
        Err(Error::ScalarSourceExhausted(MAX_RANDOM_DRAWS))
    }

    /// Uses `private_scalar` when given, otherwise a random one.
    pub fn generate<R: ScalarSource + ?Sized>(
        curve: &Curve,
        private_scalar: Option<BigUint>,
        rng: &mut R,
    ) -> Result<Self, Error> {
        match private_scalar {
            Some(scalar) => Self::new(curve, scalar),
            None => Self::random(curve, rng),
        }
    }

    /// Accepts the private scalar as decimal or `0x` hex text.
    pub fn from_text(curve: &Curve, private_scalar: &str) -> Result<Self, Error> {
        Self::new(curve, parse_scalar(private_scalar)?)
    }

    pub fn private_scalar(&self) -> &BigUint {
        &self.private_scalar
    }

    pub fn public_point(&self) -> &AffinePoint {
        &self.public_point
    }

    pub fn to_hex(&self) -> KeyPairHex {
        KeyPairHex {
            private_key_hex: to_hex(&BigInt::from(self.private_scalar.clone()), self.hex_width),
            public_key_hex: [
                to_hex(self.public_point.x(), self.hex_width),
                to_hex(self.public_point.y(), self.hex_width),
            ],
        }
    }
}
