/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Ristretto255 backend

use curve25519_dalek::{
    constants,
    scalar::Scalar,
    ristretto::{
        RistrettoPoint,
        VartimeRistrettoPrecomputation
    },
    traits::VartimePrecomputedMultiscalarMul
};
use lazy_static::lazy_static;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::{Curve, CurveId};
use crate::errors::SignatureError;

///The basepoint of the elliptic curve.
pub const G_POINT: RistrettoPoint = constants::RISTRETTO_BASEPOINT_POINT;

lazy_static! {
    static ref G_MULTISCALAR_MUL: VartimeRistrettoPrecomputation = VartimeRistrettoPrecomputation::new(vec!(G_POINT));
}

///The Ristretto255 prime-order group, built on Curve25519.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ristretto;

impl Curve for Ristretto {
    type Scalar = Scalar;
    type Point = RistrettoPoint;

    const ID: CurveId = CurveId::Ristretto255;

    fn mul_base(scalar: &Scalar) -> RistrettoPoint {
        return RistrettoPoint::mul_base(scalar)
    }

    fn mul_add_base(s: &Scalar, c: &Scalar, point: &RistrettoPoint) -> RistrettoPoint {
        return RistrettoPoint::mul_base(s) + (c * point)
    }

    fn vartime_mul_add_base(s: &Scalar, c: &Scalar, point: &RistrettoPoint) -> RistrettoPoint {
        return G_MULTISCALAR_MUL.vartime_mixed_multiscalar_mul(
            vec!(*s), vec!(*c), vec!(*point)
        )
    }

    ///Compressed Ristretto encoding, 32 bytes.
    fn encode_point(point: &RistrettoPoint) -> Vec<u8> {
        return point.compress().to_bytes().to_vec()
    }

    fn scalar_from_digest(digest: &[u8; 32]) -> Scalar {
        //dalek scalars are little-endian
        let mut bytes = *digest;
        bytes.reverse();
        return Scalar::from_bytes_mod_order(bytes)
    }

    fn scalar_to_bytes(scalar: &Scalar) -> [u8; 32] {
        let mut bytes = scalar.to_bytes();
        bytes.reverse();
        return bytes
    }

    fn scalar_from_bytes(bytes: &[u8; 32]) -> Option<Scalar> {
        let mut bytes = *bytes;
        bytes.reverse();
        return Option::from(Scalar::from_canonical_bytes(bytes))
    }

    fn is_zero(scalar: &Scalar) -> bool {
        return *scalar == Scalar::ZERO
    }

    fn random_scalar<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Scalar, SignatureError> {
        //64 bytes reduced mod l, the bias is negligible
        let mut scalar_bytes = [0u8; 64];
        rng.try_fill_bytes(&mut scalar_bytes)?;
        let scalar = Scalar::from_bytes_mod_order_wide(&scalar_bytes);
        scalar_bytes.zeroize();
        return Ok(scalar)
    }
}
