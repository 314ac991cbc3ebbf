use serde::{Deserialize, Serialize};

/// Terminal output of one decision evaluation.
///
/// The engine never retries or holds state between calls; each evaluation is
/// independently derivable from the request URL and the flags snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Decision {
    /// The host must leave the request untouched.
    NoAction,

    /// The host must redirect the request to `url`.
    Rewrite { url: String },
}

impl Decision {
    pub fn rewrite_url(&self) -> Option<&str> {
        match self {
            Decision::Rewrite { url } => Some(url),
            Decision::NoAction => None,
        }
    }

    pub fn is_no_action(&self) -> bool {
        matches!(self, Decision::NoAction)
    }
}
