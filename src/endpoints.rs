//! Path templates of the management REST API.
//!
//! The templates and query parameter names are dictated by the media server
//! and must be kept exactly as they are. Each template is a list of path
//! segments below [`PREFIX_SEGMENTS`]; caller-supplied names are always a
//! single segment of their own.

pub const PREFIX_SEGMENTS: [&str; 5] = [
    "v2",
    "servers",
    "_defaultServer_",
    "vhosts",
    "_defaultVHost_",
];

const STREAM_SUFFIX: &str = ".stream";

/// Strips a trailing `.stream` from a stream-file name. The connect action
/// addresses stream files by base name; every other endpoint takes the full name.
pub fn normalize_stream_file(name: &str) -> &str {
    name.strip_suffix(STREAM_SUFFIX).unwrap_or(name)
}

pub fn stream_files(app: &str) -> Vec<&str> {
    vec!["applications", app, "streamfiles"]
}

pub fn stream_file<'a>(app: &'a str, file: &'a str) -> Vec<&'a str> {
    vec!["applications", app, "streamfiles", file]
}

pub fn stream_recorders<'a>(app: &'a str, instance: &'a str) -> Vec<&'a str> {
    vec!["applications", app, "instances", instance, "streamrecorders"]
}

pub fn stream_recorder<'a>(app: &'a str, instance: &'a str, file: &'a str) -> Vec<&'a str> {
    let mut segments = stream_recorders(app, instance);
    segments.push(file);
    segments
}

pub fn stop_recording<'a>(app: &'a str, instance: &'a str, file: &'a str) -> Vec<&'a str> {
    let mut segments = stream_recorder(app, instance, file);
    segments.extend(["actions", "stopRecording"]);
    segments
}

/// Segments of the connect action. The query string is added separately.
pub fn connect_stream_file(file: &str) -> Vec<&str> {
    vec![
        "streamfiles",
        normalize_stream_file(file),
        "actions",
        "connect",
    ]
}

pub fn connect_query<'a>(
    app: &'a str,
    instance: &'a str,
    media_caster_type: &'a str,
) -> [(&'static str, &'a str); 3] {
    [
        ("connectAppName", app),
        ("appInstance", instance),
        ("mediaCasterType", media_caster_type),
    ]
}

pub fn disconnect_stream<'a>(app: &'a str, instance: &'a str, file: &'a str) -> Vec<&'a str> {
    vec![
        "applications",
        app,
        "instances",
        instance,
        "incomingstreams",
        file,
        "actions",
        "disconnectStream",
    ]
}
