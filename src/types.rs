/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::{Debug, Formatter};

use log::trace;
use rand::{rngs::OsRng, CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::curve::Curve;
use crate::errors::SignatureError;
use crate::MIN_RING_SIZE;

///A private key, a nonzero scalar modulo the group order.
///
///The scalar is cleared from memory when the key is dropped.
#[derive(Clone)]
pub struct PrivateKey<C: Curve>(
    C::Scalar

); impl<C: Curve> PrivateKey<C> {
    ///Create a private key from a scalar.
    ///Returns `None` if the scalar is zero.
    pub fn from_scalar(scalar: C::Scalar) -> Option<Self> {
        if C::is_zero(&scalar) {
            return None
        }
        return Some(Self(scalar))
    }

    ///Create a private key from 32 big-endian bytes.
    ///Returns `None` unless `0 < bytes < N`.
    pub fn from_bytes(bytes: &[u8; 32]) -> Option<Self> {
        return Self::from_scalar(C::scalar_from_bytes(bytes)?)
    }

    ///Generate a random new private key using the operating system's RNG.
    pub fn generate() -> Result<Self, SignatureError> {
        return Self::generate_with_rng(&mut OsRng)
    }

    ///Generate a random new private key.
    pub fn generate_with_rng<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self, SignatureError> {
        loop {
            if let Some(key) = Self::from_scalar(C::random_scalar(rng)?) {
                return Ok(key)
            }
        }
    }

    ///The public key, `x * G`.
    pub fn public_key(&self) -> C::Point {
        return C::mul_base(&self.0)
    }

    ///Return the underlying scalar.
    pub fn as_scalar(&self) -> &C::Scalar {
        return &self.0
    }

} impl<C: Curve> Zeroize for PrivateKey<C> {
    fn zeroize(&mut self) {
        self.0.zeroize()
    }

} impl<C: Curve> Drop for PrivateKey<C> {
    fn drop(&mut self) {
        //clear the key from memory to improve security
        self.zeroize()
    }

} impl<C: Curve> Debug for PrivateKey<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey<{}>(..)", C::ID)
    }
}

///A Ring represents an ordered list of public keys in a ring signature.
///
///This is a wrapper type for `Vec<C::Point>`.
///The internal `Vec` can be accessed with `ring.0`.
///The order matters: signing and verifying walk the ring from index 0 upwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring<C: Curve>(pub Vec<C::Point>);
impl<C: Curve> Ring<C> {
    ///Creates a new, empty ring.
    pub fn new() -> Self {
        return Self(Vec::new());
    }

    ///Build a ring of `size` keys with the signer's public key at `index`.
    ///Every other slot is filled with a freshly generated decoy key.
    ///
    ///Uses the operating system's RNG.
    pub fn generate(size: usize, private_key: &PrivateKey<C>, index: usize) -> Result<Self, SignatureError> {
        return Self::generate_with_rng(size, private_key, index, &mut OsRng)
    }

    ///Same as `generate`, with a caller-supplied RNG.
    pub fn generate_with_rng<R: RngCore + CryptoRng + ?Sized>(
        size: usize, private_key: &PrivateKey<C>, index: usize, rng: &mut R
    ) -> Result<Self, SignatureError> {
        if size < MIN_RING_SIZE {
            return Err(SignatureError::InvalidRingSize(size))
        }
        if index >= size {
            return Err(SignatureError::IndexOutOfRange{index, ring_size: size})
        }

        let mut keys: Vec<C::Point> = Vec::with_capacity(size);
        for i in 0..size {
            if i == index {
                keys.push(private_key.public_key());
            } else {
                keys.push(decoy_key::<C, R>(rng)?);
            }
        }
        trace!("built {} ring with {} members", C::ID, size);

        return Ok(Self(keys))
    }

    ///Appends a key to the ring.
    pub fn push(&mut self, key: C::Point) {
        self.0.push(key);
    }

    ///Inserts a key at position `index` within the ring, shifting all keys after it to the right.
    pub fn insert(&mut self, index: usize, key: C::Point) {
        self.0.insert(index, key);
    }

    pub fn len(&self) -> usize {
        return self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        return self.0.is_empty()
    }

    ///Return the index of the first occurrence of `key`, if any.
    pub fn position(&self, key: &C::Point) -> Option<usize> {
        return self.0.iter().position(|member| member == key)
    }

    pub fn as_slice(&self) -> &[C::Point] {
        return &self.0
    }

} impl<C: Curve> From<Vec<C::Point>> for Ring<C> {
    fn from(keys: Vec<C::Point>) -> Self {
        return Self(keys)
    }
}

///Generate a decoy public key.
///The private half never leaves this function and is zeroized on drop.
fn decoy_key<C: Curve, R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<C::Point, SignatureError> {
    let decoy = PrivateKey::<C>::generate_with_rng(rng)?;
    return Ok(decoy.public_key())
}
