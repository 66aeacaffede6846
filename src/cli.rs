use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use wowza_rest::config::{
    DEFAULT_APP_INSTANCE, DEFAULT_APPLICATION, DEFAULT_CONNECT_TIMEOUT, DEFAULT_HOST,
    DEFAULT_MEDIA_CASTER_TYPE, DEFAULT_PORT, DEFAULT_STREAM_FILE, DEFAULT_TIMEOUT,
};
use wowza_rest::dto::{ParamValue, parse_param_pair};
use wowza_rest::{CallOptions, ClientConfig};

#[derive(Parser)]
#[command(
    name = "wowza-rest",
    about = "Wowza REST - media server management client",
    long_about = "Issues management requests (stream files, recorders, incoming streams) against the REST API of a Wowza-style media server and prints the JSON reply.",
    after_help = "EXAMPLES:\n    # List stream files of the default application\n    wowza-rest list-stream-files\n\n    # Start recording a stream on a remote server\n    wowza-rest --host media.local create-recorder --stream-file cam1.stream --param fileFormat=mp4 --param segmentDuration=900000\n\n    # Stop it again\n    wowza-rest --host media.local stop-recording --stream-file cam1.stream\n\n    # Connect a stream file into another application\n    wowza-rest connect --stream-file cam1.stream --application vod --media-caster-type rtsp"
)]
pub struct Cli {
    #[arg(long, global = true, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, global = true, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Application used when a call does not override it
    #[arg(long, global = true, default_value = DEFAULT_APPLICATION)]
    pub default_application: String,

    #[arg(long, global = true, default_value = DEFAULT_STREAM_FILE)]
    pub default_stream_file: String,

    #[arg(long, global = true, default_value = DEFAULT_APP_INSTANCE)]
    pub default_app_instance: String,

    #[arg(long, global = true, default_value = DEFAULT_MEDIA_CASTER_TYPE)]
    pub default_media_caster_type: String,

    /// Request timeout in seconds, 0 disables it
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Connect timeout in seconds, 0 disables it
    #[arg(long, global = true, default_value_t = DEFAULT_CONNECT_TIMEOUT.as_secs())]
    pub connect_timeout_secs: u64,

    #[command(subcommand)]
    pub command: Commands,
}

/// Per-call overrides shared by all subcommands.
#[derive(Args, Debug, Default)]
pub struct OverrideArgs {
    #[arg(long)]
    pub application: Option<String>,

    #[arg(long)]
    pub stream_file: Option<String>,

    #[arg(long)]
    pub app_instance: Option<String>,

    #[arg(long)]
    pub media_caster_type: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(name = "list-stream-files")]
    ListStreamFiles {
        #[command(flatten)]
        overrides: OverrideArgs,
    },
    #[command(name = "stream-config")]
    StreamConfig {
        #[command(flatten)]
        overrides: OverrideArgs,
    },
    #[command(name = "create-recorder")]
    CreateRecorder {
        /// Recorder setting as key=value, repeatable
        #[arg(long = "param", value_parser = parse_param_pair)]
        params: Vec<(String, ParamValue)>,

        /// Recorder settings as a flat JSON object, merged before --param
        #[arg(long)]
        params_json: Option<String>,

        #[command(flatten)]
        overrides: OverrideArgs,
    },
    #[command(name = "stop-recording")]
    StopRecording {
        #[command(flatten)]
        overrides: OverrideArgs,
    },
    #[command(name = "list-recorders")]
    ListRecorders {
        #[command(flatten)]
        overrides: OverrideArgs,
    },
    #[command(name = "connect")]
    Connect {
        #[command(flatten)]
        overrides: OverrideArgs,
    },
    #[command(name = "disconnect")]
    Disconnect {
        #[command(flatten)]
        overrides: OverrideArgs,
    },
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.host.clone())
            .with_port(self.port)
            .with_application(self.default_application.clone())
            .with_stream_file(self.default_stream_file.clone())
            .with_app_instance(self.default_app_instance.clone())
            .with_media_caster_type(self.default_media_caster_type.clone())
            .with_timeout(seconds(self.timeout_secs))
            .with_connect_timeout(seconds(self.connect_timeout_secs))
    }
}

fn seconds(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

impl From<&OverrideArgs> for CallOptions {
    fn from(args: &OverrideArgs) -> Self {
        CallOptions {
            application: args.application.clone(),
            stream_file: args.stream_file.clone(),
            app_instance: args.app_instance.clone(),
            media_caster_type: args.media_caster_type.clone(),
        }
    }
}
