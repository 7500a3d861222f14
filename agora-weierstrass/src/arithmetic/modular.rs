use crate::{Error, InputError};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Reduces `value` into `[0, modulus)` regardless of the sign of `value`.
///
/// The modulus has to be positive, callers validate it beforehand.
pub(crate) fn normalize(value: &BigInt, modulus: &BigInt) -> BigInt {
    value.mod_floor(modulus)
}

fn check_modulus(modulus: &BigInt) -> Result<(), Error> {
    if modulus.is_positive() {
        Ok(())
    } else {
        Err(InputError::NonPositiveModulus(modulus.clone()).into())
    }
}

/// Computes `base^exponent`, reduced into `[0, modulus)` when a modulus is
/// given.
///
/// With a modulus, a negative exponent denotes a power of the multiplicative
/// inverse of `base` and fails with [`Error::NoInverse`] if there is none.
/// Without a modulus the exponent must fit into a `u32`.
pub fn power(base: &BigInt, exponent: &BigInt, modulus: Option<&BigInt>) -> Result<BigInt, Error> {
    let modulus = match modulus {
        Some(modulus) => modulus,
        None => {
            let exponent = exponent
                .to_u32()
                .ok_or_else(|| InputError::ExponentOutOfRange(exponent.clone()))?;
            return Ok(base.pow(exponent));
        }
    };

    check_modulus(modulus)?;
    if exponent.is_negative() {
        let inverse = mod_inverse(base, modulus)?;
        Ok(normalize(&inverse.modpow(&-exponent, modulus), modulus))
    } else {
        Ok(normalize(&normalize(base, modulus).modpow(exponent, modulus), modulus))
    }
}

/// Multiplicative inverse of `value` modulo `modulus` via the extended
/// Euclidean algorithm.
pub fn mod_inverse(value: &BigInt, modulus: &BigInt) -> Result<BigInt, Error> {
    check_modulus(modulus)?;
    let reduced = normalize(value, modulus);
    let egcd = reduced.extended_gcd(modulus);
    if reduced.is_zero() || !egcd.gcd.is_one() {
        return Err(Error::NoInverse {
            value: value.clone(),
            modulus: modulus.clone(),
        });
    }
    Ok(normalize(&egcd.x, modulus))
}

/// A validated modulus (greater than one) with arithmetic that always lands
/// in `[0, modulus)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modulus(BigInt);

impl Modulus {
    pub fn new(modulus: BigInt) -> Result<Self, Error> {
        if modulus <= BigInt::one() {
            return Err(InputError::InvalidModulus(modulus).into());
        }
        Ok(Self(modulus))
    }

    // NOTE only for moduli known at compile time to be valid
    pub(crate) fn new_unchecked(modulus: BigInt) -> Self {
        Self(modulus)
    }

    pub fn inner(&self) -> &BigInt {
        &self.0
    }

    pub fn bits(&self) -> u64 {
        self.0.bits()
    }

    pub fn reduce(&self, value: &BigInt) -> BigInt {
        normalize(value, &self.0)
    }

    pub fn add(&self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
        self.reduce(&(lhs + rhs))
    }

    pub fn sub(&self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
        self.reduce(&(lhs - rhs))
    }

    pub fn neg(&self, value: &BigInt) -> BigInt {
        self.reduce(&-value)
    }

    pub fn mul(&self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
        self.reduce(&(lhs * rhs))
    }

    pub fn pow(&self, base: &BigInt, exponent: &BigInt) -> Result<BigInt, Error> {
        power(base, exponent, Some(&self.0))
    }

    pub fn inverse(&self, value: &BigInt) -> Result<BigInt, Error> {
        mod_inverse(value, &self.0)
    }

    pub fn div(&self, numerator: &BigInt, denominator: &BigInt) -> Result<BigInt, Error> {
        Ok(self.mul(numerator, &self.inverse(denominator)?))
    }
}
