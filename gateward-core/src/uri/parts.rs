use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("not an absolute URL: '{url}'")]
    NotAbsolute { url: String },

    #[error("absolute URL has an empty authority: '{url}'")]
    EmptyAuthority { url: String },
}

/// Positional decomposition of an absolute `scheme://authority` URL.
///
/// Splitting never decodes or re-encodes a component, so `recompose`
/// reproduces the input byte-for-byte. `query` and `fragment` are opaque:
/// they are carried through rewrites exactly as they appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriParts {
    pub scheme: String,
    pub authority: String,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UriParts {
    pub fn split(url: &str) -> Result<Self, ParseError> {
        let (scheme, rest) = match url.split_once("://") {
            Some((scheme, rest)) if is_scheme(scheme) => (scheme, rest),
            _ => {
                return Err(ParseError::NotAbsolute {
                    url: url.to_string(),
                });
            }
        };

        let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let (authority, tail) = rest.split_at(authority_end);
        if authority.is_empty() {
            return Err(ParseError::EmptyAuthority {
                url: url.to_string(),
            });
        }

        let (before_fragment, fragment) = match tail.split_once('#') {
            Some((before, fragment)) => (before, Some(fragment.to_string())),
            None => (tail, None),
        };

        let (path, query) = match before_fragment.split_once('?') {
            Some((path, query)) => (path.to_string(), Some(query.to_string())),
            None => (before_fragment.to_string(), None),
        };

        Ok(Self {
            scheme: scheme.to_string(),
            authority: authority.to_string(),
            path,
            query,
            fragment,
        })
    }

    pub fn recompose(&self) -> String {
        let mut out = String::with_capacity(self.scheme.len() + self.authority.len() + 16);
        out.push_str(&self.scheme);
        out.push_str("://");
        out.push_str(&self.authority);
        out.push_str(&self.path);
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

    /// Path, query, and fragment exactly as they appeared in the request.
    pub fn path_query_fragment(&self) -> String {
        let mut out = self.path.clone();
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

    /// Scheme and authority comparison is ASCII-case-insensitive.
    pub fn same_origin(&self, other: &UriParts) -> bool {
        self.scheme.eq_ignore_ascii_case(&other.scheme)
            && self.authority.eq_ignore_ascii_case(&other.authority)
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut bytes = candidate.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
        }
        _ => false,
    }
}
