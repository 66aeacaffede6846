use std::borrow::Cow;

use log::{debug, error, warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde_json::Value;

use crate::config::{CallOptions, ClientConfig};
use crate::dto::RecorderParameters;
use crate::endpoints;
use crate::error::{ClientError, Result};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Client for the media server's management REST API.
///
/// Cheap to clone; clones share the underlying HTTP client. Every call is a
/// single request/response round trip and never touches shared mutable state,
/// so calls may be issued concurrently.
#[derive(Clone, Debug)]
pub struct WowzaClient {
    http: reqwest::Client,
    config: ClientConfig,
    base_url: Url,
}

impl WowzaClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            // 3xx must surface as an error, not be followed
            .redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        let base_url = base_url(&config.host, config.port)?;

        Ok(Self {
            http,
            config,
            base_url,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn list_stream_files(&self, options: &CallOptions) -> Result<Value> {
        let params = self.config.resolve(options);
        let url = self.url(&endpoints::stream_files(params.application))?;
        self.execute(Method::GET, url, None).await
    }

    pub async fn get_stream_configuration(&self, options: &CallOptions) -> Result<Value> {
        let params = self.config.resolve(options);
        let url = self.url(&endpoints::stream_file(
            params.application,
            params.stream_file,
        ))?;
        self.execute(Method::GET, url, None).await
    }

    /// Creates a stream recorder. `recorder` is sent verbatim as the JSON body.
    pub async fn create_recorder(
        &self,
        recorder: &RecorderParameters,
        options: &CallOptions,
    ) -> Result<Value> {
        let params = self.config.resolve(options);
        let url = self.url(&endpoints::stream_recorder(
            params.application,
            params.app_instance,
            params.stream_file,
        ))?;
        self.execute(Method::POST, url, Some(recorder)).await
    }

    pub async fn stop_recording(&self, options: &CallOptions) -> Result<Value> {
        let params = self.config.resolve(options);
        let url = self.url(&endpoints::stop_recording(
            params.application,
            params.app_instance,
            params.stream_file,
        ))?;
        self.execute(Method::PUT, url, None).await
    }

    pub async fn list_recorders(&self, options: &CallOptions) -> Result<Value> {
        let params = self.config.resolve(options);
        let url = self.url(&endpoints::stream_recorders(
            params.application,
            params.app_instance,
        ))?;
        self.execute(Method::GET, url, None).await
    }

    /// Connects a stream file. A trailing `.stream` is stripped from the name
    /// in the path.
    pub async fn connect_stream_file(&self, options: &CallOptions) -> Result<Value> {
        let params = self.config.resolve(options);
        let mut url = self.url(&endpoints::connect_stream_file(params.stream_file))?;
        url.query_pairs_mut().extend_pairs(endpoints::connect_query(
            params.application,
            params.app_instance,
            params.media_caster_type,
        ));
        self.execute(Method::PUT, url, None).await
    }

    pub async fn disconnect_stream_file(&self, options: &CallOptions) -> Result<Value> {
        let params = self.config.resolve(options);
        let url = self.url(&endpoints::disconnect_stream(
            params.application,
            params.app_instance,
            params.stream_file,
        ))?;
        self.execute(Method::PUT, url, None).await
    }

    /// Appends `segments` below the fixed prefix, each as exactly one path segment.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                ClientError::InvalidUrl(format!("{} cannot carry a path", self.base_url))
            })?;
            path.clear().extend(endpoints::PREFIX_SEGMENTS);
            for segment in segments {
                path.push(&path_segment(segment)?);
            }
        }
        Ok(url)
    }

    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<&RecorderParameters>,
    ) -> Result<Value> {
        debug!("Sending {method} {url}");

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(body) = body {
            // keeps the charset Content-Type set above
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!("{method} {url} failed: {e}");
            ClientError::from(e)
        })?;

        let status = response.status();
        debug!("{method} {url} returned {status}");

        if !status.is_success() {
            let reason = reason_phrase(&response);
            warn!("{method} {url} rejected: {status}");
            return Err(ClientError::Http {
                status: status.as_u16(),
                reason,
            });
        }

        let response_text = response.text().await.map_err(|e| {
            error!("Failed to read response body of {method} {url}: {e}");
            ClientError::from(e)
        })?;

        if response_text.trim().is_empty() {
            warn!("{method} {url} returned an empty body");
            return Err(ClientError::MalformedBody("empty body".to_string()));
        }

        serde_json::from_str(&response_text).map_err(|e| {
            warn!("{method} {url} returned invalid JSON: {e}");
            ClientError::MalformedBody(e.to_string())
        })
    }
}

/// The reason phrase the server sent, else the canonical one for the status.
fn reason_phrase(response: &reqwest::Response) -> String {
    if let Some(reason) = response.extensions().get::<hyper::ext::ReasonPhrase>() {
        return String::from_utf8_lossy(reason.as_bytes()).into_owned();
    }
    let status = response.status();
    status
        .canonical_reason()
        .unwrap_or_else(|| status.as_str())
        .to_string()
}

/// `/`, `?` and `#` are escaped by the url crate; `%` is escaped here so a
/// name is never decoded into something else. Dot segments would be dropped
/// or resolved, so they are refused.
fn path_segment(name: &str) -> Result<Cow<'_, str>> {
    match name {
        "" | "." | ".." => Err(ClientError::InvalidUrl(format!(
            "'{name}' cannot be used as a path segment"
        ))),
        _ if name.contains('%') => Ok(Cow::Owned(name.replace('%', "%25"))),
        _ => Ok(Cow::Borrowed(name)),
    }
}

fn base_url(host: &str, port: u16) -> Result<Url> {
    if host.is_empty() {
        return Err(ClientError::InvalidUrl("host is empty".to_string()));
    }
    // bare IPv6 literals need brackets
    let host = if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]")
    } else {
        host.to_string()
    };
    let raw = format!("http://{host}:{port}");
    Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))
}
