use url::Url;

use crate::conf::error::ConfigError;
use crate::conf::types::RuntimeFlags;

impl RuntimeFlags {
    /// Checks both gateway strings before the host starts feeding requests
    /// through the engine. Decisions themselves never validate per call.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_gateway(&self.gateway_url)?;
        validate_gateway(&self.public_gateway_url)?;
        Ok(())
    }
}

fn validate_gateway(value: &str) -> Result<(), ConfigError> {
    let parsed =
        Url::parse(value).map_err(|source| ConfigError::invalid_gateway_url(value, source))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedGatewayScheme {
            value: value.to_string(),
        });
    }

    // Joining tolerates a single trailing slash; everything else must be a
    // bare origin.
    if parsed.path() != "/" || parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ConfigError::NonOriginGatewayUrl {
            value: value.to_string(),
        });
    }

    Ok(())
}
