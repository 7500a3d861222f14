mod modular;
mod point;

pub use modular::{mod_inverse, power, Modulus};
pub use point::{AffinePoint, Point};
