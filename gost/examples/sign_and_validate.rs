use gost::{DomainParameters, Signature, Signer, Streebog256, Validator};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let params = DomainParameters::gost_test_256();

    let params_bytes = bincode::serialize(&params).expect("serialize params");
    let params: DomainParameters = bincode::deserialize(&params_bytes).expect("deserialize params");

    let sk = Signer::<Streebog256>::new(BigUint::from(0xC0FFEE_u64), params.clone());
    let public_key = sk.generate_key();
    println!("public key: ({:x}, {:x})", public_key.x, public_key.y);

    let msg = b"hello there!";
    let sig = sk.sign_with_rng(&mut rng, msg).expect("sign");

    let decoded = Signature::from_bytes(&sig, sig.len() / 2).expect("decode");
    println!("r = {:x}", decoded.r);
    println!("s = {:x}", decoded.s);

    let vk = Validator::<Streebog256>::new(public_key, params);
    assert!(vk.validate(msg, &sig));
    assert!(!vk.validate(b"hello world!", &sig));
}
