//! Form intake: where contact submissions are delivered.
use crate::contact::ContactForm;
use crate::{Error, Result, SiteConfig};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

pub const APPLICATION_JSON: &str = "application/json";

/// Receives contact form submissions.
#[allow(async_fn_in_trait)]
pub trait FormIntake {
    /// Delivers a submission.
    /// Makes exactly one attempt.
    async fn submit(&self, form: &ContactForm) -> Result;
}

// ******************
// *** HttpIntake ***
// ******************

/// Posts submissions as JSON to a hosted form endpoint.
#[derive(Clone, Debug)]
pub struct HttpIntake {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpIntake {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.intake_endpoint.clone())
    }
}

impl FormIntake for HttpIntake {
    #[tracing::instrument(skip(self, form), fields(endpoint = %self.endpoint))]
    async fn submit(&self, form: &ContactForm) -> Result {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .json(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "submission rejected");
            return Err(Error::Rejected(status.as_u16()));
        }

        tracing::debug!(%status, "submission accepted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "./intake_test.rs"]
mod intake_test;
