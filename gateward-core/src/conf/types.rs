use serde::{Deserialize, Serialize};

pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_PUBLIC_GATEWAY_URL: &str = "https://ipfs.io";

/// Immutable per-call snapshot of the host's settings.
///
/// The host owns persistence and defaults merging; the engine receives one
/// snapshot per decision and never reads shared mutable state during an
/// evaluation. Unknown fields in a persisted snapshot are ignored so hosts
/// can carry settings the engine does not consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeFlags {
    /// Rewrite own-origin canonical `/ipfs/`//`/ipns/` requests to
    /// `gateway_url`.
    pub redirect_enabled: bool,

    /// Scan third-party query strings for percent-encoded custom-URI
    /// references that no native handler caught.
    pub catch_unhandled_protocols: bool,

    /// Origin of the gateway canonical requests are redirected to.
    pub gateway_url: String,

    /// Origin used when reconstructing an extracted embedded reference into
    /// its canonical public form.
    pub public_gateway_url: String,
}

impl Default for RuntimeFlags {
    fn default() -> Self {
        Self {
            redirect_enabled: true,
            catch_unhandled_protocols: true,
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            public_gateway_url: DEFAULT_PUBLIC_GATEWAY_URL.to_string(),
        }
    }
}

impl RuntimeFlags {
    /// Gateway origin with a trailing slash removed, ready for path joining.
    pub fn gateway_base(&self) -> &str {
        self.gateway_url.trim_end_matches('/')
    }

    pub fn public_gateway_base(&self) -> &str {
        self.public_gateway_url.trim_end_matches('/')
    }
}
