/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve backends
//!
//! Ring signatures are generic over a `Curve`, which bundles the group operations
//! the signing and verification chains need.
//! Two backends are provided, each behind a feature flag:
//! * `Ristretto` (feature `ristretto`): the Ristretto255 group over Curve25519
//! * `Secp256k1` (feature `secp256k1`): the secp256k1 group

use std::{
    fmt::{Debug, Display},
    ops::{Add, Mul, Sub}
};

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::errors::SignatureError;

#[cfg(feature = "ristretto")]
mod ristretto;
#[cfg(feature = "ristretto")]
pub use ristretto::Ristretto;

#[cfg(feature = "secp256k1")]
mod secp256k1;
#[cfg(feature = "secp256k1")]
pub use secp256k1::Secp256k1;

///Identifies the group a signature was created over.
///
///This is the "curve descriptor" carried inside every `RingSignature`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveId {
    Ristretto255,
    Secp256k1

} impl CurveId {
    ///Human-readable name of the curve.
    pub fn name(&self) -> &'static str {
        return match self {
            Self::Ristretto255 => "ristretto255",
            Self::Secp256k1 => "secp256k1"
        }
    }

    ///The group order `N` as big-endian hex.
    ///All scalar arithmetic is done modulo this value.
    pub fn order(&self) -> &'static str {
        return match self {
            Self::Ristretto255 => "1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed",
            Self::Secp256k1 => "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"
        }
    }

    ///The prime `P` of the underlying field as big-endian hex.
    pub fn field_prime(&self) -> &'static str {
        return match self {
            Self::Ristretto255 => "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed",
            Self::Secp256k1 => "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
        }
    }

} impl Display for CurveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

///A prime-order elliptic curve group usable for ring signatures.
///
///Implementors are zero-sized marker types; all operations are associated functions.
pub trait Curve: Debug + Clone + Copy + PartialEq + Eq + 'static {
    ///Integer modulo the group order `N`.
    type Scalar: Debug + Clone + Copy + PartialEq + Zeroize
        + Add<Output = Self::Scalar>
        + Sub<Output = Self::Scalar>
        + Mul<Output = Self::Scalar>;
    ///Group element, compared by value.
    type Point: Debug + Clone + Copy + PartialEq;

    const ID: CurveId;

    ///`scalar * G`
    fn mul_base(scalar: &Self::Scalar) -> Self::Point;

    ///`(s * G) + (c * point)`
    fn mul_add_base(s: &Self::Scalar, c: &Self::Scalar, point: &Self::Point) -> Self::Point;

    ///Same as `mul_add_base`, but may run in variable time.
    ///Only use this when none of the inputs are secret.
    fn vartime_mul_add_base(s: &Self::Scalar, c: &Self::Scalar, point: &Self::Point) -> Self::Point {
        return Self::mul_add_base(s, c, point)
    }

    ///Deterministically encode a point for hashing purposes.
    fn encode_point(point: &Self::Point) -> Vec<u8>;

    ///Interpret a 256-bit digest as a big-endian integer and reduce it modulo `N`.
    fn scalar_from_digest(digest: &[u8; 32]) -> Self::Scalar;

    ///Canonical big-endian encoding of a scalar.
    fn scalar_to_bytes(scalar: &Self::Scalar) -> [u8; 32];

    ///Decode a canonical big-endian scalar.
    ///Returns `None` if the value is not below `N`.
    fn scalar_from_bytes(bytes: &[u8; 32]) -> Option<Self::Scalar>;

    fn is_zero(scalar: &Self::Scalar) -> bool;

    ///Sample a scalar uniformly from `[0, N)`.
    ///
    ///Errors from the generator are returned as `SignatureError::RandomGenerationFailure`.
    fn random_scalar<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self::Scalar, SignatureError>;
}
