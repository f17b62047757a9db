/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! secp256k1 backend

use k256::{
    elliptic_curve::{
        group::Curve as _,
        ops::Reduce,
        sec1::ToEncodedPoint,
        PrimeField
    },
    FieldBytes,
    ProjectivePoint,
    Scalar,
    U256
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::{Curve, CurveId};
use crate::errors::SignatureError;

///The secp256k1 group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secp256k1;

impl Curve for Secp256k1 {
    type Scalar = Scalar;
    type Point = ProjectivePoint;

    const ID: CurveId = CurveId::Secp256k1;

    fn mul_base(scalar: &Scalar) -> ProjectivePoint {
        return ProjectivePoint::GENERATOR * scalar
    }

    fn mul_add_base(s: &Scalar, c: &Scalar, point: &ProjectivePoint) -> ProjectivePoint {
        return (ProjectivePoint::GENERATOR * s) + (*point * c)
    }

    ///Uncompressed SEC1 encoding, `0x04 || x || y`.
    ///The identity encodes as the single byte `0x00`.
    fn encode_point(point: &ProjectivePoint) -> Vec<u8> {
        return point.to_affine().to_encoded_point(false).as_bytes().to_vec()
    }

    fn scalar_from_digest(digest: &[u8; 32]) -> Scalar {
        return <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(*digest))
    }

    fn scalar_to_bytes(scalar: &Scalar) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&scalar.to_bytes());
        return bytes
    }

    fn scalar_from_bytes(bytes: &[u8; 32]) -> Option<Scalar> {
        return Option::from(Scalar::from_repr(FieldBytes::from(*bytes)))
    }

    fn is_zero(scalar: &Scalar) -> bool {
        return bool::from(scalar.is_zero())
    }

    fn random_scalar<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Scalar, SignatureError> {
        //rejection sampling, a 32 byte value is >= N with probability ~2^-128
        let mut scalar_bytes = [0u8; 32];
        loop {
            rng.try_fill_bytes(&mut scalar_bytes)?;
            if let Some(scalar) = Self::scalar_from_bytes(&scalar_bytes) {
                scalar_bytes.zeroize();
                return Ok(scalar)
            }
        }
    }
}
