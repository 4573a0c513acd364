//! Site configuration.
use crate::constants::DEFAULT_INTAKE_ENDPOINT;
use crate::Result;
use serde::Deserialize;
use url::Url;

/// Build-time override for the form intake endpoint.
const INTAKE_ENDPOINT_OVERRIDE: Option<&str> = option_env!("FOLIO_INTAKE_ENDPOINT");

/// Settings for the site's single external interaction.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Where contact form submissions are posted.
    pub intake_endpoint: Url,
}

impl SiteConfig {
    pub fn new(intake_endpoint: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            intake_endpoint: Url::parse(intake_endpoint.as_ref())?,
        })
    }

    /// Configuration baked in at build time.
    ///
    /// Uses `FOLIO_INTAKE_ENDPOINT` if it was set when compiling,
    /// otherwise the placeholder endpoint.
    pub fn from_build_env() -> Result<Self> {
        Self::new(INTAKE_ENDPOINT_OVERRIDE.unwrap_or(DEFAULT_INTAKE_ENDPOINT))
    }

    /// Whether the endpoint is still the unconfigured placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.intake_endpoint.as_str() == DEFAULT_INTAKE_ENDPOINT
    }
}

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;
