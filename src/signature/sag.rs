/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use log::debug;
use rand::{rngs::OsRng, CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::internal_common::*;
use super::signature_utils::*;

///A ring signature.
///
///SAG stands for "Spontaneous Anonymous Group (signature)".
///It proves that one of the keys in `ring` signed `message`, without revealing which one.
///
///Unlike MLSAG/CLSAG there is no key image,
///so two signatures by the same key cannot be linked.
#[derive(Debug, Clone, PartialEq)]
pub struct RingSignature<C: Curve> {
    pub message: Vec<u8>,
    pub ring_size: usize,
    ///The challenge `c[0]`, where verification starts and must end.
    pub initial_challenge: C::Scalar,
    ///Responses `s[0], s[1], ..., s[ring_size - 1]`
    pub responses: Vec<C::Scalar>,
    pub ring: Ring<C>,
    pub curve: CurveId

} impl<C: Curve> RingSignature<C> {
    ///Create a signature given a ring, the private key of one of its members,
    ///the index of that member, and a message.
    ///
    ///Uses the operating system's RNG.
    ///Returns `SignatureError` if the inputs are inconsistent or randomness is unavailable.
    pub fn sign(
        msg: &[u8], ring: &Ring<C>, private_key: &PrivateKey<C>, index: usize
    ) -> Result<Self, SignatureError> {
        return Self::sign_with_rng(msg, ring, private_key, index, &mut OsRng)
    }

    ///Same as `sign`, with a caller-supplied RNG.
    pub fn sign_with_rng<R: RngCore + CryptoRng + ?Sized>(
        msg: &[u8], ring: &Ring<C>, private_key: &PrivateKey<C>, index: usize, rng: &mut R
    ) -> Result<Self, SignatureError> {
        validate_signer(ring, private_key, index)?;
        let n = ring.len();
        let j = index;

        //u * G
        let u = Zeroizing::new(C::random_scalar(rng)?);
        let commitment = C::mul_base(&u);

        let start = (j + 1) % n;
        let c_start = h_challenge::<C>(msg, &commitment);

        //filler values, every slot is overwritten below
        let mut c: Vec<C::Scalar> = vec!(c_start; n);
        let mut s: Vec<C::Scalar> = vec!(c_start; n);

        //walk the ring from j + 1 back around to j
        for offset in 1..n {
            let i = (j + offset) % n;
            s[i] = C::random_scalar(rng)?;
            c[(i + 1) % n] = next_challenge::<C>(msg, &s[i], &c[i], &ring.0[i]);
        }

        //close the ring
        s[j] = *u - (c[j] * *private_key.as_scalar());
        check_closure::<C>(msg, &commitment, &s[j], &c[j], &ring.0[j], &c[start], n)?;

        return Ok(Self{
            message: msg.to_vec(),
            ring_size: n,
            initial_challenge: c[0],
            responses: s,
            ring: ring.clone(),
            curve: C::ID
        })
    }

    ///Check if this signature is valid.
    ///
    ///Returns `false` for any invalid or malformed signature, never an error.
    pub fn verify(&self) -> bool {
        let n = self.ring.len();
        if self.curve != C::ID {
            debug!("rejecting signature: made over {}, verifying over {}", self.curve, C::ID);
            return false
        }
        if n < MIN_RING_SIZE || self.ring_size != n || self.responses.len() != n {
            debug!(
                "rejecting malformed signature: ring {}, ring_size {}, responses {}",
                n, self.ring_size, self.responses.len()
            );
            return false
        }

        //travel around the ring
        let mut c_i = self.initial_challenge;
        for (s_i, key) in self.responses.iter().zip(self.ring.0.iter()) {
            c_i = vartime_next_challenge::<C>(&self.message, s_i, &c_i, key);
        }
        //check if we end up back where we started
        return c_i == self.initial_challenge
    }

    ///The initial challenge as 32 big-endian bytes.
    pub fn challenge_bytes(&self) -> [u8; 32] {
        return C::scalar_to_bytes(&self.initial_challenge)
    }
}
