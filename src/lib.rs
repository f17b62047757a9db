/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! SAG ring signatures over elliptic curve groups.
//!
//! ```no_run
//! # #[cfg(feature = "secp256k1")] {
//! use ringsag::common::*;
//! use ringsag::signature::RingSignature;
//!
//! let key = PrivateKey::<Secp256k1>::generate().unwrap();
//! let ring = Ring::generate(11, &key, 4).unwrap();
//! let signature = RingSignature::sign(b"hello", &ring, &key, 4).unwrap();
//! assert!(signature.verify());
//! # }
//! ```

///Smallest ring which can be signed for.
pub const MIN_RING_SIZE: usize = 2;

//internal modules
mod types;
pub use types::*;

//uncommon public modules
pub mod hashes;

//"normal" public modules
pub mod errors;
pub mod curve;

pub mod signature;


pub mod common {
    //! A collection of commonly-used things in this crate.
    //! Errors, types, and elliptic curve backends are all included.
    //!
    //! This is intended for situations where you don't want to bother with
    //! manually specifying everything you need.
    //! Relying on something like this is generally considered bad practice,
    //! and is intended for use in tests, examples, mockups, etc.
    //!
    //! Use `common::*` if you wish to automatically import everything.

    pub use crate::{
        types::*, errors::*, curve::*, MIN_RING_SIZE
    };
}


mod internal_common {
    //! Similar to `common`, but for internal purposes only.
    //! This includes everything in `common`, as well as internal/less-common modules.
    //!
    //! Use `internal_common::*` if you wish to automatically import everything.

    pub use crate::{
        common::*, hashes::*
    };
}
