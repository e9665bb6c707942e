use xxhash_rust::xxh64::xxh64;

const BASE62_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 11;

/// Encode a u64 value as a base62 string (11 chars, zero-padded).
fn base62_encode(mut value: u64) -> String {
    let mut result = Vec::with_capacity(ID_LEN);
    while value > 0 {
        result.push(BASE62_CHARS[(value % 62) as usize]);
        value /= 62;
    }
    while result.len() < ID_LEN {
        result.push(b'0');
    }
    result.reverse();
    result.into_iter().map(char::from).collect()
}

/// Compute the identity hash of a member.
///
/// id = base62(xxhash64(signature + "\0" + shape))
///
/// The signature is whatever the host uses to tell overloads apart, e.g.
/// `Sample::some_method(nonNullArg, nullArg?)`. Leading and trailing
/// whitespace is ignored so that hosts formatting the same member slightly
/// differently still land on one cache entry. The shape fingerprints what the
/// resolver reads, so equal signatures with different shapes stay distinct.
pub fn member_hash(signature: &str, shape: &str) -> String {
    let input = format!("{}\0{}", signature.trim(), shape);
    base62_encode(xxh64(input.as_bytes(), 0))
}
