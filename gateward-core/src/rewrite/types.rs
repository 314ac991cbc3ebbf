use std::fmt;

/// First segment of a canonical content path.
///
/// `ipfs` addresses content, `ipns` addresses names. Any other token coming
/// out of a `web+<token>` form is carried structurally without being checked
/// against the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Namespace {
    Ipfs,
    Ipns,
    Other(String),
}

impl Namespace {
    pub fn as_str(&self) -> &str {
        match self {
            Namespace::Ipfs => "ipfs",
            Namespace::Ipns => "ipns",
            Namespace::Other(token) => token,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A custom-scheme reference decoded out of a request, split into the pieces
/// needed to rebuild the canonical `/<namespace>/<rest>` form.
///
/// `query` and `fragment` are the embedded reference's own trailers, decoded
/// exactly once from their carrier; they are appended verbatim to whatever
/// URL the engine rebuilds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomUri {
    pub namespace: Namespace,
    pub rest: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl CustomUri {
    pub fn canonical_path(&self) -> String {
        format!("/{}/{}", self.namespace.as_str(), self.rest)
    }

    /// Canonical path with the carried query and fragment re-attached.
    pub fn canonical_suffix(&self) -> String {
        let mut out = self.canonical_path();
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }

    /// Leading identifier segment of `rest`, up to the first `/`.
    pub fn identifier(&self) -> &str {
        self.rest.split('/').next().unwrap_or("")
    }
}
