use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid gateway URL '{value}': {source}")]
    InvalidGatewayUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("gateway URL '{value}' must use http or https")]
    UnsupportedGatewayScheme { value: String },

    #[error("gateway URL '{value}' must be a bare origin without path, query or fragment")]
    NonOriginGatewayUrl { value: String },
}

impl ConfigError {
    pub fn invalid_gateway_url(value: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidGatewayUrl {
            value: value.into(),
            source,
        }
    }
}
