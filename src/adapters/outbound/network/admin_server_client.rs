use crate::adapters::outbound::parsers::{parse_applications, parse_beans};
use crate::bean_graph::domain::Bean;
use crate::instance_registry::domain::{Application, InstanceId};
use crate::ports::outbound::{ActuatorGateway, SnapshotReader};
use crate::shared::error::ViewError;
use crate::shared::security::validate_url_component;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

const MAX_RETRIES: u32 = 3;

/// AdminServerClient adapter for a running monitoring server
///
/// Implements SnapshotReader by fetching the server's JSON endpoints and
/// ActuatorGateway through the server's actuator proxy routes:
///
/// | Operation | Route |
/// |-----------|-------|
/// | beans | `GET {base}/instances/{id}/actuator/beans`, or `GET {base}/actuator/beans` |
/// | applications | `GET {base}/applications` |
/// | instance action | `POST {base}/instances/{id}/actuator/{endpoint}` |
/// | application action | `POST {base}/applications/{name}/actuator/{endpoint}` |
/// | unregister | `DELETE {base}/applications/{name}` |
///
/// GET requests are retried with a linear back-off; actions are sent once.
pub struct AdminServerClient {
    client: reqwest::Client,
    base_url: String,
    instance_id: Option<InstanceId>,
    max_retries: u32,
}

impl AdminServerClient {
    /// Creates a client for the server at `base_url`
    ///
    /// # Errors
    /// Returns an error if the URL is not an http(s) URL or the HTTP client
    /// cannot be built
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ViewError::Validation {
                message: format!(
                    "Server URL must start with http:// or https://, got \"{}\"",
                    base_url
                ),
            }
            .into());
        }

        let user_agent = format!("sba-view/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: trimmed.to_string(),
            instance_id: None,
            max_retries: MAX_RETRIES,
        })
    }

    /// Reads beans of one registered instance instead of the server itself
    pub fn with_instance(mut self, instance_id: InstanceId) -> Self {
        self.instance_id = Some(instance_id);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn encoded(component: &str, component_type: &str) -> Result<String> {
        validate_url_component(component, component_type)?;
        Ok(urlencoding::encode(component).into_owned())
    }

    fn beans_url(&self) -> Result<String> {
        match &self.instance_id {
            Some(id) => Ok(format!(
                "{}/instances/{}/actuator/beans",
                self.base_url,
                Self::encoded(id.as_str(), "Instance id")?
            )),
            None => Ok(format!("{}/actuator/beans", self.base_url)),
        }
    }

    fn applications_url(&self) -> String {
        format!("{}/applications", self.base_url)
    }

    fn application_url(&self, application: &str) -> Result<String> {
        Ok(format!(
            "{}/applications/{}",
            self.base_url,
            Self::encoded(application, "Application name")?
        ))
    }

    fn instance_endpoint_url(&self, instance_id: &InstanceId, endpoint: &str) -> Result<String> {
        Ok(format!(
            "{}/instances/{}/actuator/{}",
            self.base_url,
            Self::encoded(instance_id.as_str(), "Instance id")?,
            Self::encoded(endpoint, "Endpoint")?
        ))
    }

    fn application_endpoint_url(&self, application: &str, endpoint: &str) -> Result<String> {
        Ok(format!(
            "{}/actuator/{}",
            self.application_url(application)?,
            Self::encoded(endpoint, "Endpoint")?
        ))
    }

    /// Fetches a document with retry logic (async)
    async fn fetch_with_retry(&self, url: &str) -> Result<String> {
        let mut attempt = 1;
        loop {
            match self.fetch(url).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt >= self.max_retries => return Err(e),
                Err(_) => {
                    tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| request_failed(url, e.to_string()))?;

        if !response.status().is_success() {
            return Err(request_failed(
                url,
                format!("server returned status code {}", response.status()),
            )
            .into());
        }

        response
            .text()
            .await
            .map_err(|e| request_failed(url, e.to_string()).into())
    }

    async fn send_action(&self, request: reqwest::RequestBuilder, url: &str) -> Result<()> {
        let response = request
            .send()
            .await
            .map_err(|e| request_failed(url, e.to_string()))?;

        if !response.status().is_success() {
            return Err(request_failed(
                url,
                format!("server returned status code {}", response.status()),
            )
            .into());
        }
        Ok(())
    }
}

fn request_failed(url: &str, details: String) -> ViewError {
    ViewError::RemoteRequestFailed {
        url: url.to_string(),
        details,
    }
}

#[async_trait]
impl SnapshotReader for AdminServerClient {
    async fn read_beans(&self) -> Result<Vec<Bean>> {
        let url = self.beans_url()?;
        let body = self.fetch_with_retry(&url).await?;
        parse_beans(&body, &url)
    }

    async fn read_applications(&self) -> Result<Vec<Application>> {
        let url = self.applications_url();
        let body = self.fetch_with_retry(&url).await?;
        parse_applications(&body, &url)
    }

    fn describe(&self) -> String {
        match &self.instance_id {
            Some(id) => format!("{} (instance {})", self.base_url, id),
            None => self.base_url.clone(),
        }
    }
}

#[async_trait]
impl ActuatorGateway for AdminServerClient {
    async fn invoke_instance_endpoint(
        &self,
        instance_id: &InstanceId,
        endpoint: &str,
    ) -> Result<()> {
        let url = self.instance_endpoint_url(instance_id, endpoint)?;
        self.send_action(self.client.post(&url), &url).await
    }

    async fn invoke_application_endpoint(&self, application: &str, endpoint: &str) -> Result<()> {
        let url = self.application_endpoint_url(application, endpoint)?;
        self.send_action(self.client.post(&url), &url).await
    }

    async fn unregister_application(&self, application: &str) -> Result<()> {
        let url = self.application_url(application)?;
        self.send_action(self.client.delete(&url), &url).await
    }
}
