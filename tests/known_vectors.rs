use hex_literal::hex;
use sha256_forge::sha256::{INITIAL_STATE, compress_blocks, pad};
use sha256_forge::{Digest, Sha256, hash, state_to_digest};

const VECTORS: &[(&[u8], [u8; 32])] = &[
    (
        b"",
        hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
    ),
    (
        b"abc",
        hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
    ),
    (
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"),
    ),
    (
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        hex!("cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1"),
    ),
    (
        &[b'a'; 55],
        hex!("9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318"),
    ),
    (
        &[b'a'; 56],
        hex!("b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a"),
    ),
    (
        &[b'a'; 64],
        hex!("ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb"),
    ),
];

#[test]
fn one_shot_matches_published_vectors() {
    for (message, expected) in VECTORS {
        assert_eq!(hash(message), Digest::from_array(*expected), "{message:?}");
    }
}

#[test]
fn streaming_byte_at_a_time_matches_vectors() {
    for (message, expected) in VECTORS {
        let mut hasher = Sha256::new();
        for byte in message.iter() {
            hasher.absorb(std::slice::from_ref(byte));
        }
        assert_eq!(hasher.finalize().as_bytes(), expected);
    }
}

#[test]
fn pad_and_compress_loop_is_the_hash() {
    for (message, expected) in VECTORS {
        let mut padded = message.to_vec();
        padded.extend_from_slice(&pad(message.len() as u64));
        let state = compress_blocks(INITIAL_STATE, &padded).unwrap();
        assert_eq!(state_to_digest(&state).as_bytes(), expected);
    }
}
