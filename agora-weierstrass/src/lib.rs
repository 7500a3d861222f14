#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod arithmetic;
pub mod curve;
pub mod keypair;
pub mod parse;
pub mod rng;

pub use arithmetic::{mod_inverse, power, AffinePoint, Modulus, Point};
pub use curve::{Curve, CurveParameters, KnownCurve, Secp256k1};
pub use keypair::{KeyPair, KeyPairHex};
pub use num_bigint::{BigInt, BigUint};
pub use rng::ScalarSource;

use wasm_bindgen::prelude::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{value} has no multiplicative inverse modulo {modulus}")]
    NoInverse { value: BigInt, modulus: BigInt },
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("no usable scalar after {0} random draws")]
    ScalarSourceExhausted(usize),
}

/// Caller contract violations, rejected before any arithmetic happens.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("modulus must be positive, got {0}")]
    NonPositiveModulus(BigInt),
    #[error("modulus must be greater than one, got {0}")]
    InvalidModulus(BigInt),
    #[error("exponent {0} is out of range for unreduced exponentiation")]
    ExponentOutOfRange(BigInt),
    #[error("curve order must be at least two")]
    InvalidOrder,
    #[error("curve is singular")]
    SingularCurve,
    #[error("generator is not on the curve")]
    GeneratorNotOnCurve,
    #[error("invalid integer '{0}'")]
    Parse(String),
    #[error("negative scalar {0}")]
    NegativeScalar(BigInt),
    #[error("private scalar is out of range")]
    ScalarOutOfRange,
    #[error("private scalar maps to the identity")]
    IdentityPublicKey,
    #[error("pubkey-privkey mismatch")]
    InvalidKeypair,
}

#[wasm_bindgen(js_name = "generateKeypair")]
pub fn generate_keypair(private_key: Option<String>) -> Result<JsValue, JsValue> {
    let mut rng = rand_core::OsRng;
    let curve = Curve::secp256k1();

    let scalar = private_key
        .as_deref()
        .map(parse::parse_scalar)
        .transpose()
        .map_err(|e| e.to_string())?;

    let keypair = KeyPair::generate(&curve, scalar, &mut rng).map_err(|e| e.to_string())?;

    serde_wasm_bindgen::to_value(&keypair.to_hex()).map_err(|e| JsValue::from(e.to_string()))
}
