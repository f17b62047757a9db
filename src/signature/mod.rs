/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Ring signatures
//!
//!Given a ring of public keys and the private key of one member,
//!create a signature which proves that some member of the ring signed the message,
//!without revealing which one.

mod sag;
mod signature_utils;

pub use sag::RingSignature;
