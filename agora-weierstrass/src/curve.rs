use crate::arithmetic::{AffinePoint, Modulus, Point};
use crate::{Error, InputError};

use bigint::{Encoding, U256};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

fn u256_to_bigint(value: &U256) -> BigInt {
    BigInt::from(BigUint::from_bytes_be(&value.to_be_bytes()))
}

/// Curves whose parameters are compile-time constants.
pub trait KnownCurve {
    const PRIME_MODULUS: U256;
    const ORDER: U256;
    const GENERATOR_X: U256;
    const GENERATOR_Y: U256;
    const COEFF_A: U256;
    const COEFF_B: U256;

    fn parameters() -> CurveParameters {
        CurveParameters {
            a: u256_to_bigint(&Self::COEFF_A),
            b: u256_to_bigint(&Self::COEFF_B),
            modulus: u256_to_bigint(&Self::PRIME_MODULUS),
            generator: AffinePoint::new(
                u256_to_bigint(&Self::GENERATOR_X),
                u256_to_bigint(&Self::GENERATOR_Y),
            ),
            order: BigUint::from_bytes_be(&Self::ORDER.to_be_bytes()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1;

impl KnownCurve for Secp256k1 {
    const PRIME_MODULUS: U256 =
        U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
    const ORDER: U256 =
        U256::from_be_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
    const GENERATOR_X: U256 =
        U256::from_be_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
    const GENERATOR_Y: U256 =
        U256::from_be_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");
    const COEFF_A: U256 = U256::ZERO;
    const COEFF_B: U256 = U256::from_u8(7);
}

/// Parameters of a short Weierstrass curve `y^2 = x^3 + a*x + b` over the
/// prime field of `modulus` elements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParameters {
    #[serde(with = "crate::parse::int_string")]
    pub a: BigInt,
    #[serde(with = "crate::parse::int_string")]
    pub b: BigInt,
    #[serde(with = "crate::parse::int_string")]
    pub modulus: BigInt,
    pub generator: AffinePoint,
    /// Order of the subgroup generated by `generator`.
    #[serde(with = "crate::parse::uint_string")]
    pub order: BigUint,
}

/// An immutable curve instance. Every operation is a pure function of its
/// arguments and the parameters captured at construction, so a single
/// instance can be shared freely between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    a: BigInt,
    b: BigInt,
    field: Modulus,
    generator: AffinePoint,
    order: BigUint,
}

impl Curve {
    pub fn new(parameters: CurveParameters) -> Result<Self, Error> {
        let field = Modulus::new(parameters.modulus)?;
        // [1, order) must hold at least one private scalar
        if parameters.order <= BigUint::one() {
            return Err(InputError::InvalidOrder.into());
        }

        let generator = AffinePoint::new(
            field.reduce(parameters.generator.x()),
            field.reduce(parameters.generator.y()),
        );
        let curve = Self {
            a: field.reduce(&parameters.a),
            b: field.reduce(&parameters.b),
            field,
            generator,
            order: parameters.order,
        };

        // 4a^3 + 27b^2 = 0 means the curve has a singular point
        let a_cubed = curve.field.mul(&curve.a, &curve.field.mul(&curve.a, &curve.a));
        let b_squared = curve.field.mul(&curve.b, &curve.b);
        let discriminant = curve.field.add(
            &curve.field.mul(&BigInt::from(4), &a_cubed),
            &curve.field.mul(&BigInt::from(27), &b_squared),
        );
        if discriminant.is_zero() {
            return Err(InputError::SingularCurve.into());
        }
        if !curve.is_valid_affine(&curve.generator) {
            return Err(InputError::GeneratorNotOnCurve.into());
        }

        tracing::debug!(
            modulus_bits = curve.field.bits(),
            order_bits = curve.order.bits(),
            "curve constructed"
        );
        Ok(curve)
    }

    pub fn from_known<C: KnownCurve>() -> Self {
        let parameters = C::parameters();
        // NOTE constant parameters are reduced and valid already
        Self {
            a: parameters.a,
            b: parameters.b,
            field: Modulus::new_unchecked(parameters.modulus),
            generator: parameters.generator,
            order: parameters.order,
        }
    }

    pub fn secp256k1() -> Self {
        Self::from_known::<Secp256k1>()
    }

    pub fn parameters(&self) -> CurveParameters {
        CurveParameters {
            a: self.a.clone(),
            b: self.b.clone(),
            modulus: self.field.inner().clone(),
            generator: self.generator.clone(),
            order: self.order.clone(),
        }
    }

    pub fn a(&self) -> &BigInt {
        &self.a
    }

    pub fn b(&self) -> &BigInt {
        &self.b
    }

    pub fn modulus(&self) -> &BigInt {
        self.field.inner()
    }

    pub fn field(&self) -> &Modulus {
        &self.field
    }

    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Checks `y^2 = x^3 + a*x + b (mod p)`. The identity is always on the
    /// curve.
    pub fn is_valid(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine(point) => self.is_valid_affine(point),
        }
    }

    pub fn is_valid_affine(&self, point: &AffinePoint) -> bool {
        let (x, y) = (point.x(), point.y());
        let y2 = self.field.mul(y, y);
        let x3 = self.field.mul(x, &self.field.mul(x, x));
        let ax = self.field.mul(&self.a, x);
        y2 == self.field.add(&x3, &self.field.add(&ax, &self.b))
    }

    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine(point) => Point::new(
                self.field.reduce(point.x()),
                self.field.neg(point.y()),
            ),
        }
    }

    fn reduce(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine(point) => Point::new(
                self.field.reduce(point.x()),
                self.field.reduce(point.y()),
            ),
        }
    }

    /// Chord-and-tangent addition.
    ///
    /// Mutually inverse points sum to [`Point::Identity`]. An
    /// [`Error::NoInverse`] is only returned for inputs that are not curve
    /// points (e.g. distinct points sharing their `x` coordinate).
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point, Error> {
        let (p1, p2) = match (lhs, rhs) {
            (Point::Identity, _) => return Ok(self.reduce(rhs)),
            (_, Point::Identity) => return Ok(self.reduce(lhs)),
            (Point::Affine(p1), Point::Affine(p2)) => (p1, p2),
        };

        let field = &self.field;
        let (x1, y1) = (field.reduce(p1.x()), field.reduce(p1.y()));
        let (x2, y2) = (field.reduce(p2.x()), field.reduce(p2.y()));

        // covers P + (-P) and doubling points with y = 0
        if x1 == x2 && field.add(&y1, &y2).is_zero() {
            return Ok(Point::Identity);
        }

        let beta = if x1 == x2 && y1 == y2 {
            // (3 * x1^2 + a) / (2 * y1)
            let numerator = field.add(&field.mul(&BigInt::from(3), &field.mul(&x1, &x1)), &self.a);
            field.div(&numerator, &field.add(&y1, &y1))?
        } else {
            // (y2 - y1) / (x2 - x1)
            field.div(&field.sub(&y2, &y1), &field.sub(&x2, &x1))?
        };

        let x3 = field.sub(&field.sub(&field.mul(&beta, &beta), &x1), &x2);
        let y3 = field.sub(&field.mul(&beta, &field.sub(&x1, &x3)), &y1);
        Ok(Point::new(x3, y3))
    }

    pub fn double(&self, point: &Point) -> Result<Point, Error> {
        self.add(point, point)
    }

    /// Binary double-and-add, most significant bit first.
    pub fn scalar_mul(&self, scalar: &BigUint, base: &Point) -> Result<Point, Error> {
        if scalar.is_zero() || base.is_identity() {
            return Ok(Point::Identity);
        }

        let base = self.reduce(base);
        let mut target = base.clone();
        // the leading one bit is consumed by the initial value
        for bit in scalar.to_radix_be(2).into_iter().skip(1) {
            target = self.double(&target)?;
            if bit == 1 {
                target = self.add(&target, &base)?;
            }
        }
        Ok(target)
    }

    pub fn mul_generator(&self, scalar: &BigUint) -> Result<Point, Error> {
        self.scalar_mul(scalar, &Point::from(&self.generator))
    }

    /// Adds `point` to the identity `n` times. Linear in `n`, meant as a
    /// reference for [`Curve::scalar_mul`].
    pub fn repeated_add(&self, point: &Point, n: u64) -> Result<Point, Error> {
        let mut sum = Point::Identity;
        for _ in 0..n {
            sum = self.add(&sum, point)?;
        }
        Ok(sum)
    }
}
