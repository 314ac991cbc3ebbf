mod decision;


pub use decision::Decision;

use tracing::{debug, trace};

use crate::conf::RuntimeFlags;
use crate::rewrite::{CustomUri, custom_uri_from_path, extract_embedded_uri};
use crate::uri::{UriParts, is_plausible_cid};

/// Evaluates one intercepted request against the current flags snapshot.
///
/// First match wins:
/// 1. An own-origin canonical `/ipfs/`//`/ipns/` path is redirected to the
///    configured gateway when `redirect_enabled`; when disabled the request
///    is left untouched without consulting the later rules.
/// 2. A custom-scheme form delivered as a same-origin path segment is
///    normalized to its canonical path on the same origin, independent of
///    both toggles.
/// 3. When `catch_unhandled_protocols`, a custom URI embedded in the query
///    string is reconstructed against the public gateway.
///
/// Anything that cannot be confidently classified degrades to `NoAction`.
/// Rules 2 and 3 emit canonical URLs rather than gateway URLs; the host's
/// re-evaluation of the rewritten request (or [`resolve`]) applies rule 1 to
/// them.
pub fn decide(request_url: &str, flags: &RuntimeFlags) -> Decision {
    let parts = match UriParts::split(request_url) {
        Ok(parts) => parts,
        Err(err) => {
            trace!(url = request_url, error = %err, "request not decomposable, leaving untouched");
            return Decision::NoAction;
        }
    };

    if is_canonical_content_path(&parts.path) {
        return redirect_parts(&parts, flags);
    }

    normalize_parts(&parts, flags)
}

/// Gateway-substitution stage alone: rewrites an own-origin canonical
/// request to the configured gateway, or leaves it untouched.
pub fn redirect_if_canonical(request_url: &str, flags: &RuntimeFlags) -> Decision {
    match UriParts::split(request_url) {
        Ok(parts) if is_canonical_content_path(&parts.path) => redirect_parts(&parts, flags),
        Ok(_) | Err(_) => Decision::NoAction,
    }
}

/// Normalization stage alone: recognizes custom-scheme path segments and
/// embedded query references, never substitutes the gateway.
pub fn normalize(request_url: &str, flags: &RuntimeFlags) -> Decision {
    match UriParts::split(request_url) {
        Ok(parts) => normalize_parts(&parts, flags),
        Err(_) => Decision::NoAction,
    }
}

/// Follows `decide` to a fixed point, for hosts that do not re-dispatch
/// rewritten requests through their interception hook.
///
/// Chains are short: a normalization rewrite lands on a canonical URL, which
/// redirects to the configured gateway at most once, and gateway-origin
/// requests are never rewritten again. Returns the final URL, or `None` when
/// the original request should proceed untouched.
pub fn resolve(request_url: &str, flags: &RuntimeFlags) -> Option<String> {
    const MAX_PASSES: usize = 4;

    let mut current: Option<String> = None;
    for _ in 0..MAX_PASSES {
        let url = current.as_deref().unwrap_or(request_url);
        match decide(url, flags) {
            Decision::Rewrite { url } => current = Some(url),
            Decision::NoAction => break,
        }
    }
    current
}

fn redirect_parts(parts: &UriParts, flags: &RuntimeFlags) -> Decision {
    if !flags.redirect_enabled {
        return Decision::NoAction;
    }
    if targets_gateway(parts, flags) {
        trace!(authority = %parts.authority, "request already targets the configured gateway");
        return Decision::NoAction;
    }

    let url = format!("{}{}", flags.gateway_base(), parts.path_query_fragment());
    debug!(to = %url, rule = "canonical_path", "redirecting canonical request to configured gateway");
    Decision::Rewrite { url }
}

fn normalize_parts(parts: &UriParts, flags: &RuntimeFlags) -> Decision {
    if let Some(custom) = custom_uri_from_path(&parts.path) {
        let url = same_origin_url(parts, &custom);
        debug!(to = %url, rule = "custom_scheme", "normalizing custom-scheme path segment");
        return Decision::Rewrite { url };
    }

    if flags.catch_unhandled_protocols {
        if let Some(query) = parts.query.as_deref() {
            if let Some(custom) = extract_embedded_uri(query) {
                let url = format!("{}{}", flags.public_gateway_base(), custom.canonical_suffix());
                debug!(to = %url, rule = "embedded_uri", "extracting embedded custom URI from query");
                return Decision::Rewrite { url };
            }
        }
    }

    Decision::NoAction
}

// Canonical means structurally `/ipfs/` or `/ipns/` AND plausible: an
// `/ipfs/` identifier that fails the CID gate is arbitrary text, not a
// content path, and falls through to the other rules.
fn is_canonical_content_path(path: &str) -> bool {
    if let Some(rest) = path.strip_prefix("/ipfs/") {
        return is_plausible_cid(first_segment(rest));
    }
    if let Some(rest) = path.strip_prefix("/ipns/") {
        return !first_segment(rest).is_empty();
    }
    false
}

fn first_segment(rest: &str) -> &str {
    rest.split('/').next().unwrap_or("")
}

// Loop guard: the engine's own gateway output must not re-match rule 1.
fn targets_gateway(parts: &UriParts, flags: &RuntimeFlags) -> bool {
    match UriParts::split(flags.gateway_base()) {
        Ok(gateway) => parts.same_origin(&gateway),
        Err(_) => false,
    }
}

fn same_origin_url(parts: &UriParts, custom: &CustomUri) -> String {
    format!(
        "{}://{}{}",
        parts.scheme,
        parts.authority,
        custom.canonical_suffix()
    )
}
