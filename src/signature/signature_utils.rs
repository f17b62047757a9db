/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use log::error;

use crate::internal_common::*;

///Check that the ring and the signer agree, in order:
///ring size, signer index, then the key at the signer index.
pub(crate) fn validate_signer<C: Curve>(
    ring: &Ring<C>, private_key: &PrivateKey<C>, index: usize
) -> Result<(), SignatureError> {
    let n = ring.len();
    if n < MIN_RING_SIZE {
        return Err(SignatureError::InvalidRingSize(n))
    }
    if index >= n {
        return Err(SignatureError::IndexOutOfRange{index, ring_size: n})
    }
    //compared by value, not identity
    if ring.0[index] != private_key.public_key() {
        return Err(SignatureError::SignerMismatch)
    }
    return Ok(())
}

///One link of the challenge chain: `H(m || (s * G) + (c * key))`
pub(crate) fn next_challenge<C: Curve>(
    msg: &[u8], response: &C::Scalar, challenge: &C::Scalar, key: &C::Point
) -> C::Scalar {
    return h_challenge::<C>(msg, &C::mul_add_base(response, challenge, key))
}

///Same as `next_challenge`, in variable time. Public inputs only.
pub(crate) fn vartime_next_challenge<C: Curve>(
    msg: &[u8], response: &C::Scalar, challenge: &C::Scalar, key: &C::Point
) -> C::Scalar {
    return h_challenge::<C>(msg, &C::vartime_mul_add_base(response, challenge, key))
}

///Recompute the signer's link and make sure it lands on the original commitment `u * G`
///and hashes to the challenge that started the chain.
pub(crate) fn check_closure<C: Curve>(
    msg: &[u8],
    commitment: &C::Point,
    response: &C::Scalar,
    challenge: &C::Scalar,
    key: &C::Point,
    expected_next: &C::Scalar,
    ring_size: usize
) -> Result<(), SignatureError> {
    let closing = C::mul_add_base(response, challenge, key);
    if closing != *commitment || h_challenge::<C>(msg, &closing) != *expected_next {
        error!("{} ring of size {} failed to close after signing", C::ID, ring_size);
        return Err(SignatureError::RingClosureFailure)
    }
    return Ok(())
}
