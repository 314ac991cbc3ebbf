use percent_encoding::percent_decode_str;

use crate::rewrite::custom_scheme::parse_custom_uri;
use crate::rewrite::types::{CustomUri, Namespace};
use crate::uri::is_plausible_cid;

/// Scans a raw top-level query string for a percent-encoded custom-URI
/// reference forwarded by a third party (search-engine fallback pages,
/// protocol-handler shims) and extracts it.
///
/// The scan looks for the earliest occurrence of an optionally
/// `web+`-prefixed recognized token followed by encoded `:/` or `://`. The
/// token run must sit at a query-delimiter boundary (`start`, `=` or `&`).
/// The encoded run extends to the next literal `&`: encoded `%3F`/`%26`/
/// `%23` inside it belong to the embedded URI and only become delimiters
/// after the single decode.
///
/// The earliest structural match decides: if it fails decoding, re-parsing
/// or identifier validation, the whole scan yields `None` rather than a
/// partial rewrite.
pub fn extract_embedded_uri(query: &str) -> Option<CustomUri> {
    let bytes = query.as_bytes();

    for start in 0..bytes.len() {
        if start > 0 && !matches!(bytes[start - 1], b'=' | b'&') {
            continue;
        }
        if !scheme_mark_at(bytes, start) {
            continue;
        }

        let end = query[start..]
            .find('&')
            .map(|offset| start + offset)
            .unwrap_or(query.len());

        let decoded = percent_decode_str(&query[start..end]).decode_utf8().ok()?;
        return validate(parse_custom_uri(&decoded)?);
    }

    None
}

// Matches `[web+|web%2B]<token>%3A%2F[%2F]` at `at`, hex case-insensitive.
fn scheme_mark_at(bytes: &[u8], mut at: usize) -> bool {
    if has_ignore_ascii_case(bytes, at, b"web+") {
        at += 4;
    } else if has_ignore_ascii_case(bytes, at, b"web%2b") {
        at += 6;
    }

    let token_start = at;
    while at < bytes.len() && bytes[at].is_ascii_alphabetic() {
        at += 1;
    }
    if !recognized_token_bytes(&bytes[token_start..at]) {
        return false;
    }

    has_ignore_ascii_case(bytes, at, b"%3a") && has_ignore_ascii_case(bytes, at + 3, b"%2f")
}

fn recognized_token_bytes(token: &[u8]) -> bool {
    const TOKENS: [&[u8]; 4] = [b"ipfs", b"ipns", b"dweb", b"fs"];
    TOKENS.iter().any(|t| token.eq_ignore_ascii_case(t))
}

fn has_ignore_ascii_case(bytes: &[u8], at: usize, pattern: &[u8]) -> bool {
    bytes
        .get(at..at + pattern.len())
        .is_some_and(|window| window.eq_ignore_ascii_case(pattern))
}

// The extractor only ever feeds recognized tokens forward, so the namespace
// here is `ipfs` or `ipns`; an `Other` namespace is a scan bug, not input.
fn validate(custom: CustomUri) -> Option<CustomUri> {
    match &custom.namespace {
        Namespace::Ipfs => is_plausible_cid(custom.identifier()).then_some(custom),
        Namespace::Ipns => Some(custom),
        Namespace::Other(_) => None,
    }
}
