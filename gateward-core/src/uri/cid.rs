/// Syntactic plausibility gate for content identifiers.
///
/// Accepts the alphabet/length classes of CIDv0 (`Qm` + base58btc, 46 chars)
/// and CIDv1 in lowercase base32 (`b` prefix) or base58btc (`z` prefix).
/// This is not a multibase decode: the gate only has to be tight enough to
/// keep arbitrary text from triggering a rewrite. Names after `/ipns/` are
/// never checked against it.
pub fn is_plausible_cid(token: &str) -> bool {
    let bytes = token.as_bytes();

    match bytes.first() {
        Some(b'Q') => {
            token.len() == 46
                && bytes[1] == b'm'
                && bytes.iter().all(|&b| is_base58btc_byte(b))
        }
        Some(b'b') => token.len() >= 59 && bytes[1..].iter().all(|&b| is_base32_byte(b)),
        Some(b'z') => token.len() >= 48 && bytes[1..].iter().all(|&b| is_base58btc_byte(b)),
        _ => false,
    }
}

// base58btc excludes 0, I, O and l.
fn is_base58btc_byte(b: u8) -> bool {
    matches!(b,
        b'1'..=b'9' | b'A'..=b'H' | b'J'..=b'N' | b'P'..=b'Z' | b'a'..=b'k' | b'm'..=b'z')
}

// RFC 4648 base32, lowercase as multibase emits it.
fn is_base32_byte(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'2'..=b'7')
}
