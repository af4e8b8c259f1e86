use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

// Errors returned synchronously to the frontend. Share outcomes never travel
// through here; they are emitted as events once the platform reports back.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("Invalid plugin configuration: {0}")]
    InvalidConfig(String),
    #[error("Method not implemented: {0}")]
    NotImplemented(String),
    #[error("No application can handle {0}")]
    NoHandler(String),
    #[error("Could not resolve a shareable content reference for {path}: {reason}")]
    ContentUri { path: String, reason: String },
    #[error("Not supported on this platform: {0}")]
    Unsupported(&'static str),
    #[error("Failed to interact with native sharing API: {0}")]
    NativeApi(String),
    #[error("Tauri API error: {0}")]
    Tauri(#[from] tauri::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[cfg(target_os = "android")]
    #[error(transparent)]
    PluginInvoke(#[from] tauri::plugin::mobile::PluginInvokeError),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidArgs(err.to_string())
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
