//! 64-bit FNV-1a over the raw bytes of a key.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

#[inline]
fn step(hash: u64, byte: u8) -> u64 {
    (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
}

/// Hashes a byte string with FNV-1a.
#[inline]
pub fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| step(hash, byte))
}

/// Hashes a key as its native-endian byte representation, without
/// collecting the bytes first.
#[inline]
pub fn hash_key<const N: usize>(key: &[i32; N]) -> u64 {
    key.iter()
        .flat_map(|part| part.to_ne_bytes())
        .fold(FNV_OFFSET_BASIS, step)
}
