/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sha2::{
    Sha256,
    Digest
};
use crate::curve::Curve;

///Hash bytes to bytes.
pub fn h_bytes(msg: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(msg);
    return hasher.finalize().into();
}

///Hash a message and a point to a challenge scalar.
///
///`H(msg || encode(point))`, read as a big-endian integer mod `N`.
pub fn h_challenge<C: Curve>(msg: &[u8], point: &C::Point) -> C::Scalar {
    let mut hasher = Sha256::new();
    hasher.update(msg);
    hasher.update(C::encode_point(point));
    let digest: [u8; 32] = hasher.finalize().into();
    return C::scalar_from_digest(&digest);
}
