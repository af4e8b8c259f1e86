use std::fmt;
use std::sync::Arc;

use tauri::{AppHandle, Emitter, Runtime};

use crate::models::{RESULT_CANCELED, RESULT_OK};

pub const EVENT_SUCCESS: &str = "social-share://onSuccess";
pub const EVENT_CANCEL: &str = "social-share://onCancel";
pub const EVENT_ERROR: &str = "social-share://onError";

/// The normalized result of a dispatched share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Cancelled,
    Error(String),
}

impl Outcome {
    /// Maps an activity result code. Codes other than ok/cancelled carry no outcome.
    pub fn from_result_code(result_code: i32) -> Option<Outcome> {
        match result_code {
            RESULT_OK => Some(Outcome::Success),
            RESULT_CANCELED => Some(Outcome::Cancelled),
            _ => None,
        }
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            Outcome::Success => EVENT_SUCCESS,
            Outcome::Cancelled => EVENT_CANCEL,
            Outcome::Error(_) => EVENT_ERROR,
        }
    }
}

/// Caller-facing notification channel.
pub trait OutcomeSink: Send + Sync {
    fn notify(&self, outcome: Outcome);
}

/// Emits outcomes as app events so every webview listening can pick them up.
pub struct EventSink<R: Runtime>(pub AppHandle<R>);

impl<R: Runtime> OutcomeSink for EventSink<R> {
    fn notify(&self, outcome: Outcome) {
        let event = outcome.event_name();
        let emitted = match outcome {
            Outcome::Success | Outcome::Cancelled => self.0.emit(event, ()),
            Outcome::Error(message) => self.0.emit(event, message),
        };
        if let Err(e) = emitted {
            log::warn!("social-share: failed to emit {}: {}", event, e);
        }
    }
}

/// An error reported by a sharing SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkError {
    pub message: String,
}

impl SdkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SdkError {}

/// Three-way completion callback handed to a share dialog.
///
/// Each method consumes the callback, so a dialog can only ever report one
/// outcome for the request it was created for.
pub struct ShareCallback {
    label: &'static str,
    sink: Arc<dyn OutcomeSink>,
}

impl ShareCallback {
    pub fn new(label: &'static str, sink: Arc<dyn OutcomeSink>) -> Self {
        Self { label, sink }
    }

    pub fn on_success(self) {
        log::debug!("social-share: {} done", self.label);
        self.sink.notify(Outcome::Success);
    }

    pub fn on_cancel(self) {
        log::debug!("social-share: {} cancelled", self.label);
        self.sink.notify(Outcome::Cancelled);
    }

    pub fn on_error(self, error: &SdkError) {
        log::debug!("social-share: {} failed: {}", self.label, error);
        self.sink.notify(Outcome::Error(error.message.clone()));
    }

    /// Resolves the callback with an already normalized outcome.
    pub fn resolve(self, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.on_success(),
            Outcome::Cancelled => self.on_cancel(),
            Outcome::Error(message) => self.on_error(&SdkError::new(message)),
        }
    }
}

impl fmt::Debug for ShareCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareCallback").field("label", &self.label).finish()
    }
}
