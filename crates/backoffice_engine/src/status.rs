use std::time::Duration;

use backoffice_core::{PollTarget, TransportFailure};
use backoffice_logging::backoffice_debug;
use url::Url;

use crate::{StatusEnvelope, StatusError};

/// Action marker the backend routes status checks on.
pub const CHECK_STATUS_ACTION: &str = "check_status";

#[derive(Debug, Clone)]
pub struct StatusSettings {
    /// AJAX endpoint, e.g. `https://cms.example.com/backend/ajax.php`.
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Routing parameters sent along with every check (module, language, ...).
    pub extra_query: Vec<(String, String)>,
}

impl Default for StatusSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost/backend/ajax.php".to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_millis(5000),
            extra_query: vec![("fork[module]".to_string(), "analytics".to_string())],
        }
    }
}

#[async_trait::async_trait]
pub trait StatusClient: Send + Sync {
    async fn fetch_status(&self, target: &PollTarget) -> Result<StatusEnvelope, StatusError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestStatusClient {
    settings: StatusSettings,
    client: reqwest::Client,
}

impl ReqwestStatusClient {
    pub fn new(settings: StatusSettings) -> Result<Self, StatusError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| StatusError::new(TransportFailure::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn request_url(&self, target: &PollTarget) -> Result<Url, StatusError> {
        let mut url = Url::parse(&self.settings.endpoint)
            .map_err(|err| StatusError::new(TransportFailure::Network, err.to_string()))?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in &self.settings.extra_query {
                query.append_pair(key, value);
            }
            query
                .append_pair("fork[action]", CHECK_STATUS_ACTION)
                .append_pair("page", &target.page)
                .append_pair("identifier", &target.identifier);
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl StatusClient for ReqwestStatusClient {
    async fn fetch_status(&self, target: &PollTarget) -> Result<StatusEnvelope, StatusError> {
        let url = self.request_url(target)?;
        backoffice_debug!(
            "Checking status page={} identifier={}",
            target.page,
            target.identifier
        );

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatusError::new(
                TransportFailure::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        let status_text = status.canonical_reason().unwrap_or_default().to_string();

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let mut envelope: StatusEnvelope = serde_json::from_slice(&body)
            .map_err(|err| StatusError::new(TransportFailure::Malformed, err.to_string()))?;
        envelope.status_text = status_text;
        Ok(envelope)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> StatusError {
    if err.is_timeout() {
        return StatusError::new(TransportFailure::Timeout, err.to_string());
    }
    StatusError::new(TransportFailure::Network, err.to_string())
}
