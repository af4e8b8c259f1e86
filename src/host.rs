//! Seams between the share dispatcher and the platform it runs on.
//!
//! The dispatcher never talks to the intent system or the sharing SDKs
//! directly. Each backend (`mobile` on Android, `desktop` everywhere else)
//! implements these traits, and tests substitute fakes.

use std::path::Path;

use crate::models::{ComposerIntent, DialogContent, DialogContentKind, SendIntent};
use crate::outcome::ShareCallback;
use crate::Result;

/// Installed-application lookup.
pub trait PackageQuery: Send + Sync {
    /// Whether an app with this package identifier is installed.
    fn is_installed(&self, package: &str) -> bool;
}

/// Opens external views by URI.
pub trait Navigator: Send + Sync {
    /// Fails with [`crate::Error::NoHandler`] when nothing can resolve the URI.
    fn open_uri(&self, uri: &str) -> Result<()>;
}

/// The platform share mechanisms.
pub trait ShareHost: Send + Sync {
    fn host_version(&self) -> Result<String>;

    /// Turns a file path into a reference another app is allowed to read.
    fn content_uri(&self, path: &Path, authority: &str) -> Result<String>;

    /// Launches a send action through the system chooser. Fire and forget.
    fn send_to_chooser(&self, intent: SendIntent) -> Result<()>;

    fn can_show_dialog(&self, kind: DialogContentKind) -> bool;

    /// Presents the social network share dialog, under the SDK's default
    /// request code when `request_code` is `None`. `callback` must be
    /// resolved exactly once, after this call has returned.
    fn show_dialog(
        &self,
        content: DialogContent,
        request_code: Option<i32>,
        callback: ShareCallback,
    ) -> Result<()>;

    /// Launches the composer expecting an activity result under `request_code`.
    fn start_for_result(&self, intent: ComposerIntent, request_code: i32) -> Result<()>;
}

/// Everything a backend provides.
pub trait Host: PackageQuery + Navigator + ShareHost {}

impl<T: PackageQuery + Navigator + ShareHost> Host for T {}
