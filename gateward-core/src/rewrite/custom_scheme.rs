use percent_encoding::percent_decode_str;

use crate::rewrite::types::{CustomUri, Namespace};

/// Tokens recognized without a `web+` prefix.
const BARE_TOKENS: [&str; 4] = ["ipfs", "ipns", "dweb", "fs"];

pub fn is_recognized_token(token: &str) -> bool {
    BARE_TOKENS.iter().any(|t| token.eq_ignore_ascii_case(t))
}

/// Parses a decoded custom-URI candidate into its canonical pieces.
///
/// Recognized shapes, with one or two slashes after the colon treated
/// identically:
/// - `ipfs:/<id>`, `ipns:/<name>`: the token becomes the namespace.
/// - `dweb:/ipfs/<id>`, `fs:/ipns/<name>`: wrapper tokens; the namespace
///   comes from the next segment, which must be `ipfs` or `ipns`.
/// - `web+<token>:/<rest>`: any token, normalized structurally even when it
///   is not in the recognized set.
///
/// Token comparison is ASCII-case-insensitive; the rest of the candidate is
/// carried byte-exact. The candidate's own `?` and `#` split off its query
/// and fragment. A candidate with no remainder after the namespace yields
/// `None`, never a partial rewrite.
pub fn parse_custom_uri(candidate: &str) -> Option<CustomUri> {
    let (web_prefixed, after_prefix) = match strip_prefix_ignore_ascii_case(candidate, "web+") {
        Some(rest) => (true, rest),
        None => (false, candidate),
    };

    let (token, after_colon) = after_prefix.split_once(':')?;
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    if !web_prefixed && !is_recognized_token(token) {
        return None;
    }

    // `:/` and `://` map identically.
    let rest = after_colon
        .strip_prefix("//")
        .or_else(|| after_colon.strip_prefix('/'))?;

    let (before_fragment, fragment) = match rest.split_once('#') {
        Some((before, fragment)) => (before, Some(fragment.to_string())),
        None => (rest, None),
    };
    let (rest_path, query) = match before_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query.to_string())),
        None => (before_fragment, None),
    };

    let token = token.to_ascii_lowercase();
    let (namespace, remainder) = match token.as_str() {
        "ipfs" => (Namespace::Ipfs, rest_path.to_string()),
        "ipns" => (Namespace::Ipns, rest_path.to_string()),
        "dweb" | "fs" => {
            let inner = rest_path.trim_start_matches('/');
            if let Some(id) = inner.strip_prefix("ipfs/") {
                (Namespace::Ipfs, id.to_string())
            } else if let Some(name) = inner.strip_prefix("ipns/") {
                (Namespace::Ipns, name.to_string())
            } else {
                return None;
            }
        }
        _ => (Namespace::Other(token), rest_path.to_string()),
    };

    if remainder.is_empty() {
        return None;
    }

    Some(CustomUri {
        namespace,
        rest: remainder,
        query,
        fragment,
    })
}

/// Applies custom-scheme recognition to a same-origin request path.
///
/// A browser without a native handler for the scheme delivers the whole
/// custom URI percent-encoded as a path segment on the invoking origin. The
/// path is decoded exactly once before re-parsing, so encoded `?`/`#` become
/// the candidate's own delimiters while anything double-encoded survives as
/// data.
pub fn custom_uri_from_path(path: &str) -> Option<CustomUri> {
    let candidate = path.strip_prefix('/').unwrap_or(path);
    if candidate.is_empty() {
        return None;
    }

    let decoded = percent_decode_str(candidate).decode_utf8().ok()?;
    parse_custom_uri(&decoded)
}

fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}
