use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use std::fmt;

/// An affine coordinate pair. Coordinates are stored as given, reduction
/// happens in the curve arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AffinePoint {
    #[serde(with = "crate::parse::int_string")]
    x: BigInt,
    #[serde(with = "crate::parse::int_string")]
    y: BigInt,
}

impl AffinePoint {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }

    pub fn into_coordinates(self) -> (BigInt, BigInt) {
        (self.x, self.y)
    }
}

impl From<(BigInt, BigInt)> for AffinePoint {
    fn from((x, y): (BigInt, BigInt)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "x: {}", self.x)?;
        writeln!(f, "y: {}", self.y)
    }
}

/// A curve point including the identity element (point at infinity).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Point {
    Identity,
    Affine(AffinePoint),
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self::Affine(AffinePoint::new(x, y))
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    pub fn as_affine(&self) -> Option<&AffinePoint> {
        match self {
            Self::Identity => None,
            Self::Affine(point) => Some(point),
        }
    }

    pub fn into_affine(self) -> Option<AffinePoint> {
        match self {
            Self::Identity => None,
            Self::Affine(point) => Some(point),
        }
    }
}

impl From<AffinePoint> for Point {
    fn from(point: AffinePoint) -> Self {
        Self::Affine(point)
    }
}

impl From<&AffinePoint> for Point {
    fn from(point: &AffinePoint) -> Self {
        Self::Affine(point.clone())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Identity => writeln!(f, "identity"),
            Self::Affine(point) => fmt::Display::fmt(point, f),
        }
    }
}
