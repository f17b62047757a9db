// SPDX short identifier: Unlicense

use ringsag::{
    curve::Secp256k1,
    signature::RingSignature,
    PrivateKey,
    Ring,
};

const RINGSIZE: usize = 16;

fn main() {
    //The signer's private key.
    //In practice this would come from the caller's wallet or keystore,
    //but for demonstration it will just be randomly generated.
    let signer_key = PrivateKey::<Secp256k1>::generate()
        .expect("Real software should have proper error handling.");

    //Pick where the signer sits in the ring.
    //If the signer was always placed at the beginning or end,
    //then everyone would know who signed it, which defeats the purpose.
    let index = 5;

    //Every other member is a freshly generated decoy whose private key is thrown away.
    //Build a new ring for every signature, reusing decoys lets observers correlate signatures.
    let ring = Ring::generate(RINGSIZE, &signer_key, index)
        .expect("Real software should have proper error handling.");

    //The message to be signed and verified
    let message = b"this is a test";

    let signature = RingSignature::sign(message, &ring, &signer_key, index)
        .expect("Real software should have proper error handling.");

    //Anyone can verify with nothing but the signature, which carries the ring
    assert!(signature.verify());

    //Signing again gives a different signature, which also verifies
    let signature2 = RingSignature::sign(message, &ring, &signer_key, index).unwrap();
    assert!(signature.challenge_bytes() != signature2.challenge_bytes());
    assert!(signature2.verify());

    //There is no key image, so nothing links the two signatures to the same signer
    println!("signed with a {} ring of {} keys", signature.curve, signature.ring_size);
}
