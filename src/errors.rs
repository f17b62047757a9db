/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    error::Error,
    fmt::Display
};

///Ring signature errors
///
///None of these are retried internally.
///`RingClosureFailure` indicates a bug and should be treated as such.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    ///The ring has fewer than `MIN_RING_SIZE` members.
    InvalidRingSize(usize),
    ///The signer's index does not point inside the ring.
    IndexOutOfRange {
        index: usize,
        ring_size: usize
    },
    ///The public key at the signer's index does not belong to the private key.
    SignerMismatch,
    ///The random number generator failed to produce bytes.
    RandomGenerationFailure(String),
    ///The signer's own response did not close the ring.
    RingClosureFailure

} impl Display for SignatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::InvalidRingSize(size) =>
                write!(f, "Ring size {size} is too small, at least {} members are required.", crate::MIN_RING_SIZE),
            Self::IndexOutOfRange{index, ring_size} =>
                write!(f, "Signer index {index} is out of range for a ring of size {ring_size}."),
            Self::SignerMismatch =>
                write!(f, "The key at the signer index does not match the private key."),
            Self::RandomGenerationFailure(msg) =>
                write!(f, "Random generation failed: {msg}"),
            Self::RingClosureFailure =>
                write!(f, "Failed to close the ring.")
        }
    }

} impl Error for SignatureError {}

impl From<rand::Error> for SignatureError {
    fn from(err: rand::Error) -> Self {
        return Self::RandomGenerationFailure(err.to_string())
    }
}
