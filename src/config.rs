use std::time::Duration;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8087;
pub const DEFAULT_APPLICATION: &str = "live";
pub const DEFAULT_STREAM_FILE: &str = "myStream.stream";
pub const DEFAULT_APP_INSTANCE: &str = "_definst_";
pub const DEFAULT_MEDIA_CASTER_TYPE: &str = "rtp";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection defaults used by every call unless overridden per call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub application: String,
    pub stream_file: String,
    pub app_instance: String,
    pub media_caster_type: String,
    /// Bound on the whole round trip. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            application: DEFAULT_APPLICATION.to_string(),
            stream_file: DEFAULT_STREAM_FILE.to_string(),
            app_instance: DEFAULT_APP_INSTANCE.to_string(),
            media_caster_type: DEFAULT_MEDIA_CASTER_TYPE.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            connect_timeout: Some(DEFAULT_CONNECT_TIMEOUT),
        }
    }
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = application.into();
        self
    }

    pub fn with_stream_file(mut self, stream_file: impl Into<String>) -> Self {
        self.stream_file = stream_file.into();
        self
    }

    pub fn with_app_instance(mut self, app_instance: impl Into<String>) -> Self {
        self.app_instance = app_instance.into();
        self
    }

    pub fn with_media_caster_type(mut self, media_caster_type: impl Into<String>) -> Self {
        self.media_caster_type = media_caster_type.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Values for a single call: per-call overrides merged over these defaults.
    pub fn resolve<'a>(&'a self, options: &'a CallOptions) -> ResolvedParams<'a> {
        ResolvedParams {
            application: resolve(options.application.as_deref(), &self.application),
            stream_file: resolve(options.stream_file.as_deref(), &self.stream_file),
            app_instance: resolve(options.app_instance.as_deref(), &self.app_instance),
            media_caster_type: resolve(
                options.media_caster_type.as_deref(),
                &self.media_caster_type,
            ),
        }
    }
}

/// Per-call overrides. Empty strings count as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallOptions {
    pub application: Option<String>,
    pub stream_file: Option<String>,
    pub app_instance: Option<String>,
    pub media_caster_type: Option<String>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn application(mut self, application: impl Into<String>) -> Self {
        self.application = Some(application.into());
        self
    }

    pub fn stream_file(mut self, stream_file: impl Into<String>) -> Self {
        self.stream_file = Some(stream_file.into());
        self
    }

    pub fn app_instance(mut self, app_instance: impl Into<String>) -> Self {
        self.app_instance = Some(app_instance.into());
        self
    }

    pub fn media_caster_type(mut self, media_caster_type: impl Into<String>) -> Self {
        self.media_caster_type = Some(media_caster_type.into());
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedParams<'a> {
    pub application: &'a str,
    pub stream_file: &'a str,
    pub app_instance: &'a str,
    pub media_caster_type: &'a str,
}

pub fn resolve<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}
